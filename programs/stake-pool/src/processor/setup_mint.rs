//! SetupMint Instruction Processor
//!
//! Creates the program's token mint at its derived address.

use crate::error::StakePoolError;
use crate::pda::{
    assert_derived_address, find_mint_address, find_mint_authority_address, MINT_SEED,
};
use crate::state::{Pack, TokenMint};
use crate::utils::accounts::{create_account, required_funding};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Process SetupMint instruction
///
/// Accounts expected:
/// 0. `[writable]` Token mint (PDA `["mint-token"]`)
/// 1. `[]` Mint authority (PDA `["mint-authority"]`)
/// 2. `[writable, signer]` Payer
/// 3. `[]` Rent sysvar
/// 4. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], decimals: u8) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let mint_info = next_account_info(account_info_iter)?;
    let mint_authority_info = next_account_info(account_info_iter)?;
    let payer_info = next_account_info(account_info_iter)?;
    let rent_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    let rent = Rent::from_account_info(rent_info)?;

    // Validate signer and programs
    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_system_program(system_program_info)?;

    // Validate derived addresses
    let mint_bump = assert_derived_address(
        mint_info.key,
        find_mint_address(program_id),
        StakePoolError::InvalidSeeds,
    )?;
    assert_derived_address(
        mint_authority_info.key,
        find_mint_authority_address(program_id),
        StakePoolError::InvalidSeeds,
    )?;

    // Prevent double initialization
    assert_writable(mint_info)?;
    assert_unallocated(mint_info)?;

    if !TokenMint::is_valid_decimals(decimals) {
        return Err(StakePoolError::InvalidDecimals.into());
    }

    let funding = required_funding(&rent, payer_info, mint_info, TokenMint::LEN)?;
    let mint = TokenMint::new(*mint_authority_info.key, decimals);

    // All checks passed: allocate and write
    create_account(
        payer_info,
        mint_info,
        system_program_info,
        funding,
        TokenMint::LEN,
        program_id,
        &[&[MINT_SEED, &[mint_bump]]],
    )?;
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    msg!("Mint initialized: {}", mint_info.key);
    msg!("Decimals configured: {}", decimals);

    Ok(())
}
