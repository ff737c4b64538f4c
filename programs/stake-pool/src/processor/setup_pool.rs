//! SetupPool Instruction Processor
//!
//! Creates the pool vault, a token account owned by the pool authority, and
//! records it on the mint. A mint has exactly one vault.

use crate::error::StakePoolError;
use crate::pda::{assert_derived_address, find_pool_authority_address};
use crate::state::{Pack, TokenAccount};
use crate::utils::accounts::{create_account, required_funding};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Process SetupPool instruction
///
/// Accounts expected:
/// 0. `[writable]` Token mint
/// 1. `[]` Pool authority (PDA `["pool-authority"]`)
/// 2. `[writable, signer]` Pool token account (fresh keypair)
/// 3. `[writable, signer]` Payer
/// 4. `[]` Rent sysvar
/// 5. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let mint_info = next_account_info(account_info_iter)?;
    let pool_authority_info = next_account_info(account_info_iter)?;
    let vault_info = next_account_info(account_info_iter)?;
    let payer_info = next_account_info(account_info_iter)?;
    let rent_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    let rent = Rent::from_account_info(rent_info)?;

    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_system_program(system_program_info)?;

    // The mint must exist and not have a vault yet
    let mut mint = load_mint(program_id, mint_info)?;
    assert_writable(mint_info)?;
    if mint.has_pool() {
        return Err(StakePoolError::AlreadyInitialized.into());
    }

    assert_derived_address(
        pool_authority_info.key,
        find_pool_authority_address(program_id),
        StakePoolError::AuthorityMismatch,
    )?;

    // The vault key co-signs its own creation and must be unused
    assert_signer(vault_info)?;
    assert_writable(vault_info)?;
    if vault_info.key == payer_info.key {
        return Err(ProgramError::InvalidArgument);
    }
    assert_unallocated(vault_info)?;

    let funding = required_funding(&rent, payer_info, vault_info, TokenAccount::LEN)?;
    let vault = TokenAccount::new(*mint_info.key, *pool_authority_info.key);
    mint.pool_vault = *vault_info.key;

    create_account(
        payer_info,
        vault_info,
        system_program_info,
        funding,
        TokenAccount::LEN,
        program_id,
        &[],
    )?;
    vault.pack_into_slice(&mut vault_info.data.borrow_mut())?;
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    msg!("Staking pool setup complete");
    msg!("Pool token account: {}", vault_info.key);

    Ok(())
}
