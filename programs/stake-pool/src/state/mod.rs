//! Account State Structures
//!
//! This module defines the data structures stored in program-owned accounts.
//!
//! # Account Types
//!
//! | Type | Size | Address |
//! |------|------|---------|
//! | TokenMint | 74 bytes | PDA `["mint-token"]` |
//! | TokenAccount | 73 bytes | caller-supplied key (wallets, pool vaults) |
//! | UserStake | 42 bytes | PDA `["user-data", owner]` |
//!
//! # Serialization
//!
//! All structures use fixed-size, deterministic serialization:
//! - Little-endian for integers
//! - No padding between fields
//! - Same data always produces same bytes
//!
//! Fields are only ever appended, so an extended layout keeps every existing
//! offset.

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod mint;
pub mod stake_transition;
pub mod token_account;
pub mod user_stake;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use mint::TokenMint;
pub use token_account::TokenAccount;
pub use user_stake::UserStake;

use solana_program::program_error::ProgramError;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for packing/unpacking account state to/from bytes.
///
/// # Example Implementation
///
/// ```ignore
/// impl Pack for MyState {
///     const LEN: usize = 40;
///
///     fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
///         let input = array_ref![input, 0, Self::LEN];
///         // Parse fields...
///         Ok(MyState { ... })
///     }
///
///     fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
///         let output = array_mut_ref![output, 0, Self::LEN];
///         // Write fields...
///         Ok(())
///     }
/// }
/// ```
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    ///
    /// Used to validate account data length and to size new accounts.
    const LEN: usize;

    /// Deserialize from a byte slice.
    ///
    /// # Panics
    /// May panic if input.len() < Self::LEN (use unpack_from_slice instead)
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack with length validation.
    ///
    /// Checks that `src.len() == Self::LEN` before unpacking.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    ///
    /// Checks that `dst.len() == Self::LEN` before packing.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}

/// Decode a stored boolean byte. Anything other than 0 or 1 is corruption.
pub(crate) fn unpack_bool(byte: u8) -> Result<bool, ProgramError> {
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(ProgramError::InvalidAccountData),
    }
}
