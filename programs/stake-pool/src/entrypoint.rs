//! Program Entrypoint
//!
//! Where the Solana runtime calls into the program. All routing lives in
//! `Processor`.

// Left out when another program links this crate for its instruction builders
#![cfg(not(feature = "no-entrypoint"))]

use crate::processor::Processor;
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult, pubkey::Pubkey,
};

entrypoint!(process_instruction);

/// The entrypoint for the stake pool program.
///
/// # Arguments
///
/// * `program_id` - The public key of this program
/// * `accounts` - All accounts involved in this instruction
/// * `instruction_data` - Discriminant byte followed by the arguments
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    Processor::process(program_id, accounts, instruction_data)
}
