//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_signer(user_authority_info)?;
//!     let mint = load_mint(program_id, mint_info)?;
//!     let wallet = load_token_account(program_id, wallet_info)?;
//!
//!     // Then compute, then write
//!     ...
//! }
//! ```

use crate::error::StakePoolError;
use crate::pda::assert_mint_address;
use crate::state::{Pack, TokenAccount, TokenMint, UserStake};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey, system_program,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// An attacker could create an account with forged balances owned by their
/// own program. Only accounts we own are trusted.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(StakePoolError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER CHECKS
// =============================================================================

/// Assert that an account is a signer of the transaction.
///
/// # Errors
///
/// Returns `AuthoritySignatureMissing` if not a signer.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(StakePoolError::AuthoritySignatureMissing.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// WRITABLE CHECKS
// =============================================================================

/// Assert that an account is writable.
///
/// The runtime would reject the write anyway; checking up front gives a
/// clear error before any CPI has run.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(StakePoolError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// ALLOCATION CHECKS
// =============================================================================

/// Assert the system program account is the real one.
pub fn assert_system_program(account: &AccountInfo) -> ProgramResult {
    if !system_program::check_id(account.key) {
        Err(StakePoolError::IncorrectSystemProgram.into())
    } else {
        Ok(())
    }
}

/// Whether an account has never been allocated: still owned by the system
/// program and carrying no data. It may hold lamports.
pub fn is_unallocated(account: &AccountInfo) -> bool {
    system_program::check_id(account.owner) && account.data_is_empty()
}

/// Assert an account has not been allocated yet.
///
/// # Errors
///
/// Returns `AlreadyInitialized` for anything else, which is what a second
/// `SetupMint` or `SetupPool` on the same address hits.
pub fn assert_unallocated(account: &AccountInfo) -> ProgramResult {
    if !is_unallocated(account) {
        Err(StakePoolError::AlreadyInitialized.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// STATE LOADERS
// =============================================================================

/// Load the token mint.
///
/// The address is checked first, so no other program-owned record can be
/// passed off as the mint.
///
/// # Errors
///
/// Returns `InvalidSeeds` for any address other than the derived mint, and
/// `MintNotFound` unless that account holds an initialized mint record.
pub fn load_mint(program_id: &Pubkey, mint_info: &AccountInfo) -> Result<TokenMint, ProgramError> {
    assert_mint_address(program_id, mint_info.key)?;
    if mint_info.owner != program_id || mint_info.data_len() != TokenMint::LEN {
        return Err(StakePoolError::MintNotFound.into());
    }
    let mint = TokenMint::unpack_from_slice(&mint_info.data.borrow())?;
    if !mint.is_initialized {
        return Err(StakePoolError::MintNotFound.into());
    }
    Ok(mint)
}

/// Load an initialized token account (wallet or vault).
pub fn load_token_account(
    program_id: &Pubkey,
    account_info: &AccountInfo,
) -> Result<TokenAccount, ProgramError> {
    assert_owned_by(account_info, program_id)?;
    assert_data_length(account_info, TokenAccount::LEN)?;
    let account = TokenAccount::unpack_from_slice(&account_info.data.borrow())?;
    if !account.is_initialized {
        return Err(StakePoolError::UninitializedAccount.into());
    }
    Ok(account)
}

/// Load a stake ledger, or `None` when it has not been created yet.
pub fn load_user_stake(
    program_id: &Pubkey,
    stake_info: &AccountInfo,
) -> Result<Option<UserStake>, ProgramError> {
    if is_unallocated(stake_info) {
        return Ok(None);
    }
    assert_owned_by(stake_info, program_id)?;
    assert_data_length(stake_info, UserStake::LEN)?;
    let stake = UserStake::unpack_from_slice(&stake_info.data.borrow())?;
    if !stake.is_initialized {
        return Ok(None);
    }
    Ok(Some(stake))
}
