//! Instruction Types
//!
//! This module defines all instructions supported by the stake pool program,
//! their wire format, and client-side builders.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! # Discriminant Values
//!
//! | Value | Instruction | Data |
//! |-------|-------------|------|
//! | 0 | SetupMint | decimals: u8 |
//! | 1 | SetupPool | none |
//! | 2 | DistributeAirdrop | amount: u64 |
//! | 3 | PerformStake | amount: u64 |
//! | 4 | PerformUnstake | amount: u64 |
//!
//! Data shorter or longer than the listed layout is rejected.

use crate::error::StakePoolError;
use crate::pda::{
    find_mint_address, find_mint_authority_address, find_pool_authority_address,
    find_user_stake_address,
};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program, sysvar,
};

// =============================================================================
// STAKE POOL INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the stake pool program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StakePoolInstruction {
    /// Create the token mint at its derived address.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | token_mint | ✓ | | PDA `["mint-token"]` |
    /// | 1 | mint_authority | | | PDA `["mint-authority"]` |
    /// | 2 | payer | ✓ | ✓ | Funds the mint account |
    /// | 3 | rent | | | Rent sysvar |
    /// | 4 | system_program | | | System program |
    SetupMint {
        /// Decimal precision, fixed forever
        decimals: u8,
    },

    /// Create the pool vault, owned by the pool authority, and record it on
    /// the mint. Only one vault can ever be set up.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | token_mint | ✓ | | The mint |
    /// | 1 | pool_authority | | | PDA `["pool-authority"]` |
    /// | 2 | pool_token_account | ✓ | ✓ | Fresh keypair for the vault |
    /// | 3 | payer | ✓ | ✓ | Funds the vault account |
    /// | 4 | rent | | | Rent sysvar |
    /// | 5 | system_program | | | System program |
    SetupPool,

    /// Mint `amount` new tokens into a user wallet.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | token_mint | ✓ | | The mint |
    /// | 1 | mint_authority | | | PDA `["mint-authority"]` |
    /// | 2 | user_authority | ✓ | ✓ | Requester, pays for a fresh wallet |
    /// | 3 | user_wallet_account | ✓ | fresh only | Recipient |
    /// | 4 | rent | | | Rent sysvar |
    /// | 5 | system_program | | | System program |
    DistributeAirdrop {
        /// Base units to mint
        amount: u64,
    },

    /// Move `amount` from the user's wallet into the pool vault.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | token_mint | | | The mint |
    /// | 1 | pool_authority | | | PDA `["pool-authority"]` |
    /// | 2 | user_authority | ✓ | ✓ | Wallet owner, pays for a new ledger |
    /// | 3 | user_wallet_account | ✓ | | Source |
    /// | 4 | user_data_account | ✓ | | PDA `["user-data", user_authority]` |
    /// | 5 | pool_wallet_account | ✓ | | The vault recorded on the mint |
    /// | 6 | rent | | | Rent sysvar |
    /// | 7 | system_program | | | System program |
    PerformStake {
        /// Base units to stake
        amount: u64,
    },

    /// Move `amount` from the pool vault back to the user's wallet.
    ///
    /// Same accounts as `PerformStake`.
    PerformUnstake {
        /// Base units to unstake
        amount: u64,
    },
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl StakePoolInstruction {
    /// Parse instruction data into a StakePoolInstruction.
    ///
    /// # Errors
    ///
    /// `InvalidInstruction` for an unknown discriminant or a payload of the
    /// wrong size.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(StakePoolError::InvalidInstruction)?;

        Ok(match discriminant {
            0 => match rest {
                [decimals] => Self::SetupMint {
                    decimals: *decimals,
                },
                _ => return Err(StakePoolError::InvalidInstruction.into()),
            },
            1 => {
                if !rest.is_empty() {
                    return Err(StakePoolError::InvalidInstruction.into());
                }
                Self::SetupPool
            }
            2 => Self::DistributeAirdrop {
                amount: Self::unpack_amount(rest)?,
            },
            3 => Self::PerformStake {
                amount: Self::unpack_amount(rest)?,
            },
            4 => Self::PerformUnstake {
                amount: Self::unpack_amount(rest)?,
            },
            _ => return Err(StakePoolError::InvalidInstruction.into()),
        })
    }

    fn unpack_amount(input: &[u8]) -> Result<u64, ProgramError> {
        let bytes: [u8; 8] = input
            .try_into()
            .map_err(|_| StakePoolError::InvalidInstruction)?;
        Ok(u64::from_le_bytes(bytes))
    }

    // =========================================================================
    // INSTRUCTION PACKING (for tests and clients)
    // =========================================================================

    /// Pack instruction into bytes. The inverse of `unpack()`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(9);
        match self {
            Self::SetupMint { decimals } => {
                buf.push(0);
                buf.push(*decimals);
            }
            Self::SetupPool => buf.push(1),
            Self::DistributeAirdrop { amount } => {
                buf.push(2);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            Self::PerformStake { amount } => {
                buf.push(3);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
            Self::PerformUnstake { amount } => {
                buf.push(4);
                buf.extend_from_slice(&amount.to_le_bytes());
            }
        }
        buf
    }
}

// =============================================================================
// CLIENT BUILDERS
// =============================================================================

/// Build a `SetupMint` instruction.
pub fn setup_mint(program_id: &Pubkey, payer: &Pubkey, decimals: u8) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(find_mint_address(program_id).0, false),
            AccountMeta::new_readonly(find_mint_authority_address(program_id).0, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: StakePoolInstruction::SetupMint { decimals }.pack(),
    }
}

/// Build a `SetupPool` instruction. `pool_token_account` must sign.
pub fn setup_pool(program_id: &Pubkey, payer: &Pubkey, pool_token_account: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(find_mint_address(program_id).0, false),
            AccountMeta::new_readonly(find_pool_authority_address(program_id).0, false),
            AccountMeta::new(*pool_token_account, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: StakePoolInstruction::SetupPool.pack(),
    }
}

/// Build a `DistributeAirdrop` instruction.
///
/// Set `new_wallet` when `user_wallet_account` is a fresh keypair that the
/// program should create; it must then sign.
pub fn distribute_airdrop(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    user_wallet_account: &Pubkey,
    new_wallet: bool,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(find_mint_address(program_id).0, false),
            AccountMeta::new_readonly(find_mint_authority_address(program_id).0, false),
            AccountMeta::new(*user_authority, true),
            AccountMeta::new(*user_wallet_account, new_wallet),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: StakePoolInstruction::DistributeAirdrop { amount }.pack(),
    }
}

fn stake_accounts(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    user_wallet_account: &Pubkey,
    pool_wallet_account: &Pubkey,
) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(find_mint_address(program_id).0, false),
        AccountMeta::new_readonly(find_pool_authority_address(program_id).0, false),
        AccountMeta::new(*user_authority, true),
        AccountMeta::new(*user_wallet_account, false),
        AccountMeta::new(find_user_stake_address(program_id, user_authority).0, false),
        AccountMeta::new(*pool_wallet_account, false),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ]
}

/// Build a `PerformStake` instruction.
pub fn perform_stake(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    user_wallet_account: &Pubkey,
    pool_wallet_account: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: stake_accounts(
            program_id,
            user_authority,
            user_wallet_account,
            pool_wallet_account,
        ),
        data: StakePoolInstruction::PerformStake { amount }.pack(),
    }
}

/// Build a `PerformUnstake` instruction.
pub fn perform_unstake(
    program_id: &Pubkey,
    user_authority: &Pubkey,
    user_wallet_account: &Pubkey,
    pool_wallet_account: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: stake_accounts(
            program_id,
            user_authority,
            user_wallet_account,
            pool_wallet_account,
        ),
        data: StakePoolInstruction::PerformUnstake { amount }.pack(),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
