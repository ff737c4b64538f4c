//! DistributeAirdrop Instruction Processor
//!
//! Mints new tokens straight into a user wallet, creating the wallet first
//! when the caller hands in a fresh keypair.

use crate::error::StakePoolError;
use crate::pda::{assert_derived_address, find_mint_authority_address, find_pool_authority_address};
use crate::state::{Pack, TokenAccount};
use crate::utils::accounts::{create_account, required_funding};
use crate::utils::math::checked_add;
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

/// Process DistributeAirdrop instruction
///
/// Accounts expected:
/// 0. `[writable]` Token mint
/// 1. `[]` Mint authority (PDA `["mint-authority"]`)
/// 2. `[writable, signer]` User authority
/// 3. `[writable]` User wallet account (`[signer]` too when fresh)
/// 4. `[]` Rent sysvar
/// 5. `[]` System program
///
/// The user authority and the wallet owner are separate fields. A fresh
/// wallet is created with the user authority as owner; an existing wallet
/// may belong to anyone unless the `strict-recipient` feature is enabled,
/// but never to the pool authority.
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let mint_info = next_account_info(account_info_iter)?;
    let mint_authority_info = next_account_info(account_info_iter)?;
    let user_authority_info = next_account_info(account_info_iter)?;
    let wallet_info = next_account_info(account_info_iter)?;
    let rent_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    let rent = Rent::from_account_info(rent_info)?;

    if amount == 0 {
        return Err(StakePoolError::AmountZero.into());
    }

    assert_signer(user_authority_info)?;
    assert_system_program(system_program_info)?;

    // Validate mint and its authority
    let mut mint = load_mint(program_id, mint_info)?;
    assert_writable(mint_info)?;
    assert_derived_address(
        mint_authority_info.key,
        find_mint_authority_address(program_id),
        StakePoolError::AuthorityMismatch,
    )?;
    if mint.mint_authority != *mint_authority_info.key {
        return Err(StakePoolError::AuthorityMismatch.into());
    }

    // Resolve the recipient
    assert_writable(wallet_info)?;
    if wallet_info.key == user_authority_info.key {
        return Err(ProgramError::InvalidArgument);
    }
    let fresh_wallet = is_unallocated(wallet_info);
    let (wallet, funding) = if fresh_wallet {
        assert_signer(wallet_info)?;
        assert_writable(user_authority_info)?;
        let funding = required_funding(&rent, user_authority_info, wallet_info, TokenAccount::LEN)?;
        (TokenAccount::new(*mint_info.key, *user_authority_info.key), funding)
    } else {
        let wallet = load_token_account(program_id, wallet_info)?;
        if wallet.mint != *mint_info.key {
            return Err(StakePoolError::MintMismatch.into());
        }
        // Vault balances only move through stake and unstake
        if wallet.owner == find_pool_authority_address(program_id).0 {
            return Err(StakePoolError::AuthorityMismatch.into());
        }
        if cfg!(feature = "strict-recipient") && wallet.owner != *user_authority_info.key {
            return Err(StakePoolError::OwnerMismatch.into());
        }
        (wallet, 0)
    };

    // Compute new balances
    mint.supply = checked_add(mint.supply, amount, StakePoolError::SupplyOverflow)?;
    let wallet = wallet.credited(amount)?;

    // All checks passed: create the wallet if needed, then write
    if fresh_wallet {
        create_account(
            user_authority_info,
            wallet_info,
            system_program_info,
            funding,
            TokenAccount::LEN,
            program_id,
            &[],
        )?;
    }
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;
    wallet.pack_into_slice(&mut wallet_info.data.borrow_mut())?;

    msg!("Airdropped {} tokens to {}", amount, wallet_info.key);
    msg!("Total supply: {}", mint.supply);

    Ok(())
}
