//! PerformStake Instruction Processor
//!
//! Moves tokens from a user wallet into the pool vault and records them in
//! the user's stake ledger. The ledger is created on the first stake.

use super::stake_accounts::StakeAccounts;
use crate::error::StakePoolError;
use crate::state::stake_transition;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

/// Process PerformStake instruction
///
/// Accounts are listed on `StakeAccounts::load`.
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    if amount == 0 {
        return Err(StakePoolError::AmountZero.into());
    }
    let ctx = StakeAccounts::load(program_id, accounts)?;

    let funding = ctx.ledger_funding()?;
    let next = stake_transition::stake(ctx.position, amount)?;

    ctx.commit(&next, funding)?;

    msg!("Staked {} tokens", amount);
    msg!("Total staked by user: {}", next.stake.staked_amount);

    Ok(())
}
