//! PerformUnstake Instruction Processor
//!
//! Returns staked tokens from the pool vault to the user wallet. The pool
//! authority is a PDA, so the vault debit needs no outside signature.

use super::stake_accounts::StakeAccounts;
use crate::error::StakePoolError;
use crate::state::stake_transition;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

/// Process PerformUnstake instruction
///
/// Accounts are listed on `StakeAccounts::load`. Fails with
/// `UninitializedAccount` when the user has never staked.
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    if amount == 0 {
        return Err(StakePoolError::AmountZero.into());
    }
    let ctx = StakeAccounts::load(program_id, accounts)?;

    if ctx.existing_stake.is_none() {
        return Err(StakePoolError::UninitializedAccount.into());
    }
    let next = stake_transition::unstake(ctx.position, amount)?;

    ctx.commit(&next, 0)?;

    msg!("Unstaked {} tokens", amount);
    msg!("Remaining staked by user: {}", next.stake.staked_amount);

    Ok(())
}
