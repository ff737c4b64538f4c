//! Custom Error Types
//!
//! This module defines all errors that the stake pool program can return.
//! Each error has a unique numeric code that clients can match against.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-6 | Account validation errors |
//! | 7-9 | Setup errors |
//! | 10-12 | Authority errors |
//! | 13-16 | Input errors |
//! | 17-19 | Arithmetic faults |
//! | 0x1000+ | Internal invariant violations |
//!
//! Codes in the 0x1000 range never come from bad user input. Seeing one means
//! the program's own bookkeeping is broken.

use num_enum::TryFromPrimitive;
use solana_program::{msg, program_error::ProgramError};
use thiserror::Error;

/// First code of the internal-consistency range.
pub const INVARIANT_VIOLATION_BASE: u32 = 0x1000;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the stake pool program.
///
/// After deployment, never reorder these variants. Clients depend on stable
/// error codes. New user-facing variants go directly before
/// `VaultUnderfunded`, whose explicit discriminant pins the internal range.
/// Decoding a code back (`TryFrom<u32>`) is derived from the discriminants.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum StakePoolError {
    // =========================================================================
    // ACCOUNT VALIDATION ERRORS (0-6)
    // =========================================================================

    /// Error 0: Account is not owned by the stake pool program.
    ///
    /// Every record we read must be owned by our program, otherwise an
    /// attacker could hand us an account full of forged balances.
    #[error("Account not owned by stake pool program")]
    InvalidAccountOwner,

    /// Error 1: Account data has wrong length.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 2: Account is already initialized.
    ///
    /// Returned by mint and pool setup when the target address is already
    /// allocated, and by airdrop when a fresh wallet key is reused.
    #[error("Account already initialized")]
    AlreadyInitialized,

    /// Error 3: Account is not initialized.
    #[error("Account not initialized")]
    UninitializedAccount,

    /// Error 4: Invalid instruction data.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 5: Account address does not match its derived address.
    #[error("Address does not match derived seeds")]
    InvalidSeeds,

    /// Error 6: Expected the system program.
    #[error("Incorrect system program")]
    IncorrectSystemProgram,

    // =========================================================================
    // SETUP ERRORS (7-9)
    // =========================================================================

    /// Error 7: The token mint has not been set up.
    #[error("Token mint not found")]
    MintNotFound,

    /// Error 8: Decimals cannot be represented as a u64 scale factor.
    #[error("Invalid decimals")]
    InvalidDecimals,

    /// Error 9: Payer cannot cover the rent-exempt balance of a new account.
    #[error("Payer has insufficient funds")]
    PayerInsufficientFunds,

    // =========================================================================
    // AUTHORITY ERRORS (10-12)
    // =========================================================================

    /// Error 10: A required signer did not sign.
    #[error("Authority signature missing")]
    AuthoritySignatureMissing,

    /// Error 11: Supplied authority is not the derived program authority.
    ///
    /// Covers a forged mint authority, a forged pool authority, and a vault
    /// whose owner is not the pool authority.
    #[error("Authority mismatch")]
    AuthorityMismatch,

    /// Error 12: Token account or stake ledger belongs to someone else.
    #[error("Owner mismatch")]
    OwnerMismatch,

    // =========================================================================
    // INPUT ERRORS (13-16)
    // =========================================================================

    /// Error 13: Wallet, vault and mint do not reference the same mint.
    #[error("Mint mismatch")]
    MintMismatch,

    /// Error 14: Wallet and vault are the same account.
    #[error("Self transfer not allowed")]
    SelfTransfer,

    /// Error 15: Amount must be greater than zero.
    #[error("Amount must be greater than zero")]
    AmountZero,

    /// Error 16: Wallet balance is lower than the stake amount.
    #[error("Insufficient wallet balance")]
    InsufficientWalletBalance,

    // =========================================================================
    // ARITHMETIC FAULTS (17-19)
    // =========================================================================

    /// Error 17: Unstake amount exceeds the staked balance.
    #[error("Insufficient stake")]
    InsufficientStake,

    /// Error 18: A balance would wrap past u64::MAX.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 19: Minting would push total supply past u64::MAX.
    #[error("Supply overflow")]
    SupplyOverflow,

    // =========================================================================
    // INTERNAL INVARIANT VIOLATIONS (0x1000+)
    // =========================================================================

    /// Error 0x1000: Vault holds less than the ledger says is staked.
    ///
    /// The vault balance always equals the sum of outstanding stakes, so this
    /// is unreachable unless the program itself is wrong.
    #[error("Vault underfunded relative to stake ledger")]
    VaultUnderfunded = 0x1000,
}

impl StakePoolError {
    /// True for faults that indicate a program bug rather than misuse.
    pub fn is_invariant_violation(&self) -> bool {
        (*self as u32) >= INVARIANT_VIOLATION_BASE
    }

    /// Write the error to the program log.
    pub fn log(&self) {
        if self.is_invariant_violation() {
            msg!("INVARIANT VIOLATION: {}", self);
        } else {
            msg!("Error: {}", self);
        }
    }
}

// =============================================================================
// CONVERSION TO PROGRAMERROR
// =============================================================================

/// Convert StakePoolError to ProgramError.
///
/// The code is the enum discriminant, so `?` works on any function returning
/// `Result<_, StakePoolError>` inside a `ProgramResult` handler.
impl From<StakePoolError> for ProgramError {
    fn from(e: StakePoolError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

// =============================================================================
// DECODING (client side)
// =============================================================================

impl StakePoolError {
    /// Recover a typed error from a `ProgramError::Custom` code.
    pub fn from_program_error(error: &ProgramError) -> Option<Self> {
        match error {
            ProgramError::Custom(code) => Self::try_from_primitive(*code).ok(),
            _ => None,
        }
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
