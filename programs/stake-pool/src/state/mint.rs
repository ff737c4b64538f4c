//! Token Mint State
//!
//! The single token this program issues. Created once by `SetupMint` at the
//! `["mint-token"]` program address; every wallet and vault references it.
//! `SetupPool` later records the one pool vault here.
//!
//! # Size: 74 bytes

use crate::state::{unpack_bool, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Largest precision whose scale factor `10^decimals` still fits in a u64.
pub const MAX_DECIMALS: u8 = 19;

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data structure.
///
/// # Memory Layout (74 bytes total)
///
/// ```text
/// ┌────────┬──────┬──────────────────┬────────┐
/// │ Offset │ Size │ Field            │ Type   │
/// ├────────┼──────┼──────────────────┼────────┤
/// │ 0      │ 32   │ mint_authority   │ Pubkey │
/// │ 32     │ 8    │ supply           │ u64    │
/// │ 40     │ 1    │ decimals         │ u8     │
/// │ 41     │ 1    │ is_initialized   │ bool   │
/// │ 42     │ 32   │ pool_vault       │ Pubkey │
/// └────────┴──────┴──────────────────┴────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenMint {
    /// The derived `["mint-authority"]` address.
    ///
    /// Unlike a general-purpose token, the authority can never be changed or
    /// revoked: only this program mints, through `DistributeAirdrop`.
    pub mint_authority: Pubkey,

    /// Total number of base units in circulation.
    ///
    /// # Invariant
    ///
    /// ```text
    /// supply == SUM(all token accounts for this mint).amount
    /// ```
    ///
    /// Airdrops are the only instruction that changes it; stake and unstake
    /// move units between accounts and leave it alone.
    pub supply: u64,

    /// Number of decimal places. Fixed at setup, display only.
    pub decimals: u8,

    /// Whether `SetupMint` has run.
    pub is_initialized: bool,

    /// The pool vault, all zeros until `SetupPool` runs.
    ///
    /// Stake and unstake only accept this account, so the vault balance
    /// always equals the sum of every ledger.
    pub pool_vault: Pubkey,
}

impl TokenMint {
    /// Size of TokenMint when serialized to bytes.
    pub const LEN: usize = 74;

    /// A freshly set-up mint: zero supply.
    pub fn new(mint_authority: Pubkey, decimals: u8) -> Self {
        Self {
            mint_authority,
            supply: 0,
            decimals,
            is_initialized: true,
            pool_vault: Pubkey::default(),
        }
    }

    /// Whether `SetupPool` has bound a vault to this mint.
    pub fn has_pool(&self) -> bool {
        self.pool_vault != Pubkey::default()
    }

    /// Whether `decimals` describes a representable precision.
    pub fn is_valid_decimals(decimals: u8) -> bool {
        decimals <= MAX_DECIMALS
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for TokenMint {
    const LEN: usize = TokenMint::LEN;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, TokenMint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_authority, supply, decimals, is_initialized, pool_vault) =
            array_refs![input, 32, 8, 1, 1, 32];

        Ok(TokenMint {
            mint_authority: Pubkey::new_from_array(*mint_authority),
            supply: u64::from_le_bytes(*supply),
            decimals: decimals[0],
            is_initialized: unpack_bool(is_initialized[0])?,
            pool_vault: Pubkey::new_from_array(*pool_vault),
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, TokenMint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_authority_dst, supply_dst, decimals_dst, is_initialized_dst, pool_vault_dst) =
            mut_array_refs![output, 32, 8, 1, 1, 32];

        mint_authority_dst.copy_from_slice(self.mint_authority.as_ref());
        *supply_dst = self.supply.to_le_bytes();
        decimals_dst[0] = self.decimals;
        is_initialized_dst[0] = self.is_initialized as u8;
        pool_vault_dst.copy_from_slice(self.pool_vault.as_ref());

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_pack_unpack_roundtrip() {
        let original = TokenMint {
            mint_authority: Pubkey::new_unique(),
            supply: 1_000_000_000,
            decimals: 9,
            is_initialized: true,
            pool_vault: Pubkey::new_unique(),
        };

        let mut packed = [0u8; TokenMint::LEN];
        original.pack(&mut packed).unwrap();

        assert_eq!(TokenMint::unpack(&packed).unwrap(), original);
    }

    #[test]
    fn test_mint_field_offsets() {
        let authority = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let mint = TokenMint {
            mint_authority: authority,
            supply: 0x0102_0304_0506_0708,
            decimals: 6,
            is_initialized: true,
            pool_vault: vault,
        };

        let mut packed = [0u8; TokenMint::LEN];
        mint.pack(&mut packed).unwrap();

        assert_eq!(&packed[0..32], authority.as_ref());
        assert_eq!(packed[32], 0x08);
        assert_eq!(packed[39], 0x01);
        assert_eq!(packed[40], 6);
        assert_eq!(packed[41], 1);
        assert_eq!(&packed[42..74], vault.as_ref());
    }

    /// A freshly allocated account is all zeros.
    #[test]
    fn test_mint_uninitialized() {
        let mint = TokenMint::unpack(&[0u8; TokenMint::LEN]).unwrap();

        assert!(!mint.is_initialized);
        assert_eq!(mint.supply, 0);
        assert_eq!(mint.mint_authority, Pubkey::default());
    }

    #[test]
    fn test_new_mint_has_zero_supply() {
        let authority = Pubkey::new_unique();
        let mint = TokenMint::new(authority, 9);

        assert!(mint.is_initialized);
        assert_eq!(mint.supply, 0);
        assert_eq!(mint.decimals, 9);
        assert_eq!(mint.mint_authority, authority);
        assert!(!mint.has_pool());
    }

    #[test]
    fn test_decimals_range() {
        assert!(TokenMint::is_valid_decimals(0));
        assert!(TokenMint::is_valid_decimals(9));
        assert!(TokenMint::is_valid_decimals(MAX_DECIMALS));
        assert!(!TokenMint::is_valid_decimals(MAX_DECIMALS + 1));
        assert!(!TokenMint::is_valid_decimals(u8::MAX));
        assert!(10u64.checked_pow(MAX_DECIMALS as u32).is_some());
        assert!(10u64.checked_pow(MAX_DECIMALS as u32 + 1).is_none());
    }

    #[test]
    fn test_mint_wrong_size() {
        assert!(TokenMint::unpack_from_slice(&[0u8; TokenMint::LEN - 1]).is_err());
        assert!(TokenMint::unpack_from_slice(&[0u8; TokenMint::LEN + 1]).is_err());
    }

    #[test]
    fn test_mint_corrupt_initialized_flag() {
        let mut packed = [0u8; TokenMint::LEN];
        packed[41] = 7;
        assert!(TokenMint::unpack(&packed).is_err());
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY NO COPTION?
===============

A general token mint stores `COption<Pubkey>` so the authority can be
revoked. Here the authority is always the program's own derived address and
there is no SetAuthority instruction, so a plain 32-byte Pubkey is enough.
`pool_vault` uses the all-zero key for "not set yet" for the same reason.

WHY 74 BYTES?
=============

32 (mint_authority)
+ 8 (supply)
+ 1 (decimals)
+ 1 (is_initialized)
+ 32 (pool_vault)
= 74 bytes

ONE VAULT PER MINT
==================

Ledgers only record amounts, not which vault holds them. If two vaults
existed, a user could stake into one and unstake from the other, leaving
the second short of what its own stakers are owed. Binding the single vault
in the mint record rules that out.

MAX_DECIMALS
============

Amounts are opaque base units. The only constraint on decimals is that one
whole token, 10^decimals base units, must itself be representable:

    10^19 = 10,000,000,000,000,000,000   fits   (u64::MAX ~ 1.8 * 10^19)
    10^20                                 does not

So SetupMint accepts 0..=19 and rejects the rest with InvalidDecimals.
*/
