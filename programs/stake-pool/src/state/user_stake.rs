//! User Stake Ledger State
//!
//! Tracks how many base units one owner has moved into the pool vault.
//! Lives at `["user-data", owner]` and is created on the owner's first stake.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──first stake──▶ Active(balance)
//!                                   │  ▲
//!                                   └──┘ stake / unstake
//! ```
//!
//! A ledger that drops to zero stays Active.
//!
//! # Size: 42 bytes

use crate::state::{unpack_bool, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Stake ledger data structure.
///
/// # Memory Layout (42 bytes total)
///
/// ```text
/// ┌────────┬──────┬────────────────┬────────┐
/// │ Offset │ Size │ Field          │ Type   │
/// ├────────┼──────┼────────────────┼────────┤
/// │ 0      │ 1    │ is_initialized │ bool   │
/// │ 1      │ 32   │ owner          │ Pubkey │
/// │ 33     │ 8    │ staked_amount  │ u64    │
/// │ 41     │ 1    │ bump           │ u8     │
/// └────────┴──────┴────────────────┴────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStake {
    pub is_initialized: bool,

    /// The user authority that staked. Part of the address seeds.
    pub owner: Pubkey,

    /// Base units currently held in the vault on this owner's behalf.
    pub staked_amount: u64,

    /// Bump seed of this ledger's address.
    pub bump: u8,
}

impl UserStake {
    /// Size of UserStake when serialized to bytes.
    pub const LEN: usize = 42;

    /// Ledger for a first-time staker, before the first deposit is applied.
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            is_initialized: true,
            owner,
            staked_amount: 0,
            bump,
        }
    }
}

impl Pack for UserStake {
    const LEN: usize = UserStake::LEN;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, UserStake::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized, owner, staked_amount, bump) = array_refs![input, 1, 32, 8, 1];

        Ok(UserStake {
            is_initialized: unpack_bool(is_initialized[0])?,
            owner: Pubkey::new_from_array(*owner),
            staked_amount: u64::from_le_bytes(*staked_amount),
            bump: bump[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, UserStake::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized_dst, owner_dst, staked_amount_dst, bump_dst) =
            mut_array_refs![output, 1, 32, 8, 1];

        is_initialized_dst[0] = self.is_initialized as u8;
        owner_dst.copy_from_slice(self.owner.as_ref());
        *staked_amount_dst = self.staked_amount.to_le_bytes();
        bump_dst[0] = self.bump;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_stake_pack_unpack_roundtrip() {
        let original = UserStake {
            is_initialized: true,
            owner: Pubkey::new_unique(),
            staked_amount: 50,
            bump: 254,
        };

        let mut packed = [0u8; UserStake::LEN];
        original.pack(&mut packed).unwrap();

        assert_eq!(UserStake::unpack(&packed).unwrap(), original);
        assert_eq!(packed[0], 1);
        assert_eq!(packed[41], 254);
    }

    #[test]
    fn test_new_ledger_is_active_and_empty() {
        let owner = Pubkey::new_unique();
        let stake = UserStake::new(owner, 255);

        assert!(stake.is_initialized);
        assert_eq!(stake.owner, owner);
        assert_eq!(stake.staked_amount, 0);
    }

    #[test]
    fn test_user_stake_wrong_size() {
        assert!(UserStake::unpack_from_slice(&[0u8; 8]).is_err());
    }
}
