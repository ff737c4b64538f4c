//! Token Account State
//!
//! Holds a balance of the pool token for one owner. The same record backs
//! both user wallets (owner = a user key) and pool vaults (owner = the
//! `["pool-authority"]` address).
//!
//! # Size: 73 bytes

use crate::error::StakePoolError;
use crate::state::{unpack_bool, Pack};
use crate::utils::math::{checked_add, checked_sub};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// TOKEN ACCOUNT STRUCTURE
// =============================================================================

/// Token account data structure.
///
/// # Memory Layout (73 bytes total)
///
/// ```text
/// ┌────────┬──────┬────────────────┬────────┐
/// │ Offset │ Size │ Field          │ Type   │
/// ├────────┼──────┼────────────────┼────────┤
/// │ 0      │ 32   │ mint           │ Pubkey │
/// │ 32     │ 32   │ owner          │ Pubkey │
/// │ 64     │ 8    │ amount         │ u64    │
/// │ 72     │ 1    │ is_initialized │ bool   │
/// └────────┴──────┴────────────────┴────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenAccount {
    /// The mint this account holds.
    pub mint: Pubkey,

    /// Who may move tokens out of this account.
    pub owner: Pubkey,

    /// Balance in base units.
    pub amount: u64,

    /// Whether the account has been initialized.
    pub is_initialized: bool,
}

impl TokenAccount {
    /// Size of TokenAccount when serialized to bytes.
    pub const LEN: usize = 73;

    /// An empty, initialized account.
    pub fn new(mint: Pubkey, owner: Pubkey) -> Self {
        Self {
            mint,
            owner,
            amount: 0,
            is_initialized: true,
        }
    }

    /// Return a copy with `amount` added.
    pub fn credited(mut self, amount: u64) -> Result<Self, StakePoolError> {
        self.amount = checked_add(self.amount, amount, StakePoolError::Overflow)?;
        Ok(self)
    }

    /// Return a copy with `amount` removed, failing with `err` on underflow.
    pub fn debited(mut self, amount: u64, err: StakePoolError) -> Result<Self, StakePoolError> {
        self.amount = checked_sub(self.amount, amount, err)?;
        Ok(self)
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for TokenAccount {
    const LEN: usize = TokenAccount::LEN;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, TokenAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint, owner, amount, is_initialized) = array_refs![input, 32, 32, 8, 1];

        Ok(TokenAccount {
            mint: Pubkey::new_from_array(*mint),
            owner: Pubkey::new_from_array(*owner),
            amount: u64::from_le_bytes(*amount),
            is_initialized: unpack_bool(is_initialized[0])?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, TokenAccount::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_dst, owner_dst, amount_dst, is_initialized_dst) =
            mut_array_refs![output, 32, 32, 8, 1];

        mint_dst.copy_from_slice(self.mint.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        is_initialized_dst[0] = self.is_initialized as u8;

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
    fn test_account_pack_unpack_roundtrip() {
        let original = TokenAccount {
            mint: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            amount: 42,
            is_initialized: true,
        };

        let mut packed = [0u8; TokenAccount::LEN];
        original.pack(&mut packed).unwrap();

        assert_eq!(TokenAccount::unpack(&packed).unwrap(), original);
    }

    #[test]
    fn test_account_uninitialized() {
        let account = TokenAccount::unpack(&[0u8; TokenAccount::LEN]).unwrap();
        assert!(!account.is_initialized);
        assert_eq!(account.amount, 0);
    }

    #[test]
    fn test_credit_and_debit() {
        let account = TokenAccount::new(Pubkey::new_unique(), Pubkey::new_unique());

        let account = account.credited(100).unwrap();
        assert_eq!(account.amount, 100);

        let account = account
            .debited(40, StakePoolError::InsufficientWalletBalance)
            .unwrap();
        assert_eq!(account.amount, 60);
    }

    #[test]
    fn test_debit_below_zero_uses_given_error() {
        let account = TokenAccount::new(Pubkey::new_unique(), Pubkey::new_unique());

        assert_eq!(
            account.debited(1, StakePoolError::VaultUnderfunded),
            Err(StakePoolError::VaultUnderfunded)
        );
    }

    #[test]
    fn test_credit_overflow() {
        let mut account = TokenAccount::new(Pubkey::new_unique(), Pubkey::new_unique());
        account.amount = u64::MAX;

        assert_eq!(account.credited(1), Err(StakePoolError::Overflow));
    }

    #[test]
    fn test_account_wrong_size() {
        assert!(TokenAccount::unpack_from_slice(&[0u8; 72]).is_err());
        assert!(TokenAccount::unpack_from_slice(&[0u8; 74]).is_err());
    }
}
