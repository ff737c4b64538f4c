//! Stake / Unstake State Transitions
//!
//! Pure functions from the three records an instruction touches to their new
//! values. Processors validate accounts, call one of these, and only write
//! back on `Ok`. Nothing here can leave a half-applied transfer behind.
//!
//! # Conservation
//!
//! ```text
//! wallet.amount + vault.amount      is unchanged by both transitions
//! stake.staked_amount               moves by exactly ±amount
//! ```

use crate::error::StakePoolError;
use crate::state::{TokenAccount, UserStake};
use crate::utils::math::{checked_add, checked_sub};

/// The records a stake or unstake reads and rewrites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StakePosition {
    pub wallet: TokenAccount,
    pub vault: TokenAccount,
    pub stake: UserStake,
}

/// Move `amount` from the wallet into the vault and record it on the ledger.
///
/// # Errors
///
/// * `AmountZero` - amount is 0
/// * `MintMismatch` - wallet and vault hold different mints
/// * `InsufficientWalletBalance` - wallet holds less than amount
/// * `Overflow` - vault or ledger would wrap
pub fn stake(position: StakePosition, amount: u64) -> Result<StakePosition, StakePoolError> {
    if amount == 0 {
        return Err(StakePoolError::AmountZero);
    }
    if position.wallet.mint != position.vault.mint {
        return Err(StakePoolError::MintMismatch);
    }

    let wallet = position
        .wallet
        .debited(amount, StakePoolError::InsufficientWalletBalance)?;
    let vault = position.vault.credited(amount)?;

    let mut stake = position.stake;
    stake.staked_amount = checked_add(stake.staked_amount, amount, StakePoolError::Overflow)?;

    Ok(StakePosition {
        wallet,
        vault,
        stake,
    })
}

/// Move `amount` from the vault back to the wallet and reduce the ledger.
///
/// The ledger is checked first, so asking for more than was staked reports
/// `InsufficientStake` even when the vault happens to be short as well.
///
/// # Errors
///
/// * `AmountZero` - amount is 0
/// * `MintMismatch` - wallet and vault hold different mints
/// * `InsufficientStake` - amount exceeds the staked balance
/// * `VaultUnderfunded` - vault holds less than the ledger says (program bug)
/// * `Overflow` - wallet would wrap
pub fn unstake(position: StakePosition, amount: u64) -> Result<StakePosition, StakePoolError> {
    if amount == 0 {
        return Err(StakePoolError::AmountZero);
    }
    if position.wallet.mint != position.vault.mint {
        return Err(StakePoolError::MintMismatch);
    }

    let mut stake = position.stake;
    stake.staked_amount = checked_sub(
        stake.staked_amount,
        amount,
        StakePoolError::InsufficientStake,
    )?;

    let vault = position
        .vault
        .debited(amount, StakePoolError::VaultUnderfunded)?;
    let wallet = position.wallet.credited(amount)?;

    Ok(StakePosition {
        wallet,
        vault,
        stake,
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================
