//! Instruction Processors
//!
//! This module contains the business logic for each instruction.
//! Each instruction has its own file; stake and unstake share their account
//! validation through `stake_accounts`.

pub mod distribute_airdrop;
pub mod perform_stake;
pub mod perform_unstake;
pub mod setup_mint;
pub mod setup_pool;
mod stake_accounts;

use crate::error::StakePoolError;
use crate::instruction::StakePoolInstruction;
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, msg, pubkey::Pubkey};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a stake pool instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        // Parse the instruction
        let instruction = StakePoolInstruction::unpack(instruction_data)?;

        // Route to appropriate handler
        let result = match instruction {
            StakePoolInstruction::SetupMint { decimals } => {
                msg!("Instruction: SetupMint");
                setup_mint::process(program_id, accounts, decimals)
            }

            StakePoolInstruction::SetupPool => {
                msg!("Instruction: SetupPool");
                setup_pool::process(program_id, accounts)
            }

            StakePoolInstruction::DistributeAirdrop { amount } => {
                msg!("Instruction: DistributeAirdrop");
                distribute_airdrop::process(program_id, accounts, amount)
            }

            StakePoolInstruction::PerformStake { amount } => {
                msg!("Instruction: PerformStake");
                perform_stake::process(program_id, accounts, amount)
            }

            StakePoolInstruction::PerformUnstake { amount } => {
                msg!("Instruction: PerformUnstake");
                perform_unstake::process(program_id, accounts, amount)
            }
        };

        if let Err(ref error) = result {
            match StakePoolError::from_program_error(error) {
                Some(error) => error.log(),
                None => msg!("Error: {}", error),
            }
        }
        result
    }
}
