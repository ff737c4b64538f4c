//! Program Derived Address (PDA) helpers
//!
//! Every program-controlled address is derived from a fixed seed literal plus
//! the program id. Distinct literals mean the addresses never collide.
//!
//! | Address | Seeds |
//! |---------|-------|
//! | Token mint | `"mint-token"` |
//! | Mint authority | `"mint-authority"` |
//! | Pool authority | `"pool-authority"` |
//! | User stake ledger | `"user-data"`, owner |
//!
//! The two authorities hold no data. They exist only so the program can
//! sign for them with `invoke_signed` and so records can name them.

use crate::error::StakePoolError;
use solana_program::{entrypoint::ProgramResult, pubkey::Pubkey};

/// Seed for the token mint address.
pub const MINT_SEED: &[u8] = b"mint-token";

/// Seed for the mint authority address.
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint-authority";

/// Seed for the pool authority address, owner of every vault.
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool-authority";

/// Seed prefix for per-owner stake ledgers.
pub const USER_STAKE_SEED: &[u8] = b"user-data";

/// Derive the token mint address and bump.
pub fn find_mint_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_SEED], program_id)
}

/// Derive the mint authority address and bump.
pub fn find_mint_authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED], program_id)
}

/// Derive the pool authority address and bump.
pub fn find_pool_authority_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_AUTHORITY_SEED], program_id)
}

/// Derive the stake ledger address of `owner` and its bump.
pub fn find_user_stake_address(program_id: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_STAKE_SEED, owner.as_ref()], program_id)
}

/// Recreate the stake ledger address of `owner` from its stored bump.
///
/// Cheaper than `find_user_stake_address` once the ledger exists.
pub fn create_user_stake_address(
    program_id: &Pubkey,
    owner: &Pubkey,
    bump: u8,
) -> Result<Pubkey, StakePoolError> {
    Pubkey::create_program_address(&[USER_STAKE_SEED, owner.as_ref(), &[bump]], program_id)
        .map_err(|_| StakePoolError::InvalidSeeds)
}

/// Fail with `err` unless `actual` is the address `derived` from the seeds.
///
/// Returns the bump so callers can sign with it.
pub fn assert_derived_address(
    actual: &Pubkey,
    derived: (Pubkey, u8),
    err: StakePoolError,
) -> Result<u8, StakePoolError> {
    let (expected, bump) = derived;
    if *actual != expected {
        return Err(err);
    }
    Ok(bump)
}

/// Check that `mint` is this program's token mint address.
pub fn assert_mint_address(program_id: &Pubkey, mint: &Pubkey) -> ProgramResult {
    assert_derived_address(mint, find_mint_address(program_id), StakePoolError::InvalidSeeds)?;
    Ok(())
}
