//! # Token Stake Pool
//!
//! A native Solana program that runs a single program-derived token mint,
//! hands out airdrops from it, and lets holders stake tokens into a
//! program-controlled pool vault and take them back out.
//!
//! ## Account Types
//!
//! | Account Type | Size | Address |
//! |--------------|------|---------|
//! | TokenMint | 74 bytes | PDA `["mint-token"]` |
//! | TokenAccount | 73 bytes | Keypair (user wallets and pool vaults) |
//! | UserStake | 42 bytes | PDA `["user-data", owner]` |
//!
//! The mint authority (`["mint-authority"]`) and pool authority
//! (`["pool-authority"]`) are derived addresses that hold no data.
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | SetupMint | Create the token mint |
//! | 1 | SetupPool | Create a pool vault |
//! | 2 | DistributeAirdrop | Mint tokens into a user wallet |
//! | 3 | PerformStake | Move tokens from a wallet into the vault |
//! | 4 | PerformUnstake | Move staked tokens back to the wallet |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Program entrypoint
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions, parsing and client builders
pub mod instruction;

/// Derived addresses and their seeds
pub mod pda;

/// Instruction processors (business logic)
pub mod processor;

/// Account state structures (TokenMint, TokenAccount, UserStake)
pub mod state;

/// Validation, allocation and checked math helpers
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::StakePoolError;
pub use instruction::StakePoolInstruction;
pub use processor::Processor;
pub use state::{Pack, TokenAccount, TokenMint, UserStake};

// =============================================================================
// PROGRAM ID
// =============================================================================

solana_program::declare_id!("oDTmJKUhfKHBXb6UqBkXd21C2yVNBwse9dQkrhJsSTB");
