//! Account Allocation
//!
//! The program never sizes or funds accounts by hand. It asks the System
//! Program to do it through CPI, signing with derived-address seeds when the
//! new account is a PDA.

use crate::error::StakePoolError;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
    rent::Rent,
    system_instruction,
};

/// Lamports `payer` still has to put into `new_account` for it to be
/// rent-exempt at `space` bytes.
///
/// Fails with `PayerInsufficientFunds` if the payer cannot cover it. Call this
/// during validation, before anything is written.
pub fn required_funding(
    rent: &Rent,
    payer: &AccountInfo,
    new_account: &AccountInfo,
    space: usize,
) -> Result<u64, StakePoolError> {
    let required = rent
        .minimum_balance(space)
        .saturating_sub(new_account.lamports());
    if payer.lamports() < required {
        return Err(StakePoolError::PayerInsufficientFunds);
    }
    Ok(required)
}

/// Allocate `new_account` with `space` bytes, owned by `owner`.
///
/// `signer_seeds` is empty for keypair accounts (which must have signed the
/// transaction) and holds the PDA seeds otherwise. An account that somebody
/// pre-funded is topped up, allocated and assigned in three steps, since
/// `create_account` refuses accounts that already hold lamports.
pub fn create_account<'a>(
    payer: &AccountInfo<'a>,
    new_account: &AccountInfo<'a>,
    system_program: &AccountInfo<'a>,
    funding: u64,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> ProgramResult {
    let accounts = [
        payer.clone(),
        new_account.clone(),
        system_program.clone(),
    ];

    if new_account.lamports() == 0 {
        let ix = system_instruction::create_account(
            payer.key,
            new_account.key,
            funding,
            space as u64,
            owner,
        );
        return invoke_signed(&ix, &accounts, signer_seeds);
    }

    if funding > 0 {
        invoke(
            &system_instruction::transfer(payer.key, new_account.key, funding),
            &accounts,
        )?;
    }
    invoke_signed(
        &system_instruction::allocate(new_account.key, space as u64),
        &[new_account.clone(), system_program.clone()],
        signer_seeds,
    )?;
    invoke_signed(
        &system_instruction::assign(new_account.key, owner),
        &[new_account.clone(), system_program.clone()],
        signer_seeds,
    )
}
