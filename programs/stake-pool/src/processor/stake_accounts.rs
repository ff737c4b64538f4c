//! Shared account validation for PerformStake and PerformUnstake.
//!
//! Both instructions take the same eight accounts and need the same checks
//! before their transitions differ. `StakeAccounts::load` runs every check
//! and returns the unpacked records; `commit` is the only place that writes.

use crate::error::StakePoolError;
use crate::pda::{
    assert_derived_address, create_user_stake_address, find_pool_authority_address,
    find_user_stake_address, USER_STAKE_SEED,
};
use crate::state::stake_transition::StakePosition;
use crate::state::{Pack, UserStake};
use crate::utils::accounts::{create_account, required_funding};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Validated accounts of a stake or unstake.
pub struct StakeAccounts<'a, 'b> {
    program_id: &'b Pubkey,
    user_authority_info: &'b AccountInfo<'a>,
    wallet_info: &'b AccountInfo<'a>,
    user_stake_info: &'b AccountInfo<'a>,
    vault_info: &'b AccountInfo<'a>,
    system_program_info: &'b AccountInfo<'a>,
    rent: Rent,
    user_stake_bump: u8,
    /// The ledger as stored, `None` before the owner's first stake.
    pub existing_stake: Option<UserStake>,
    /// Records before the transition. A missing ledger reads as an empty one.
    pub position: StakePosition,
}

impl<'a, 'b> StakeAccounts<'a, 'b> {
    /// Parse and validate the accounts.
    ///
    /// Accounts expected:
    /// 0. `[]` Token mint
    /// 1. `[]` Pool authority (PDA `["pool-authority"]`)
    /// 2. `[writable, signer]` User authority
    /// 3. `[writable]` User wallet account
    /// 4. `[writable]` User data account (PDA `["user-data", user_authority]`)
    /// 5. `[writable]` Pool wallet account (the vault recorded on the mint)
    /// 6. `[]` Rent sysvar
    /// 7. `[]` System program
    pub fn load(
        program_id: &'b Pubkey,
        accounts: &'b [AccountInfo<'a>],
    ) -> Result<Self, ProgramError> {
        let account_info_iter = &mut accounts.iter();

        let mint_info = next_account_info(account_info_iter)?;
        let pool_authority_info = next_account_info(account_info_iter)?;
        let user_authority_info = next_account_info(account_info_iter)?;
        let wallet_info = next_account_info(account_info_iter)?;
        let user_stake_info = next_account_info(account_info_iter)?;
        let vault_info = next_account_info(account_info_iter)?;
        let rent_info = next_account_info(account_info_iter)?;
        let system_program_info = next_account_info(account_info_iter)?;

        let rent = Rent::from_account_info(rent_info)?;

        assert_signer(user_authority_info)?;
        assert_system_program(system_program_info)?;

        let mint = load_mint(program_id, mint_info)?;
        assert_derived_address(
            pool_authority_info.key,
            find_pool_authority_address(program_id),
            StakePoolError::AuthorityMismatch,
        )?;

        assert_writable(wallet_info)?;
        assert_writable(vault_info)?;
        assert_writable(user_stake_info)?;

        if wallet_info.key == vault_info.key {
            return Err(StakePoolError::SelfTransfer.into());
        }

        // Only the mint's own vault backs the ledgers
        if !mint.has_pool() || *vault_info.key != mint.pool_vault {
            return Err(StakePoolError::AuthorityMismatch.into());
        }

        let wallet = load_token_account(program_id, wallet_info)?;
        let vault = load_token_account(program_id, vault_info)?;

        // Wallet, vault and mint must all agree
        if wallet.mint != *mint_info.key || vault.mint != *mint_info.key {
            return Err(StakePoolError::MintMismatch.into());
        }
        if vault.owner != *pool_authority_info.key {
            return Err(StakePoolError::AuthorityMismatch.into());
        }
        if wallet.owner != *user_authority_info.key {
            return Err(StakePoolError::OwnerMismatch.into());
        }

        // The ledger is derived per owner. An existing one carries its bump,
        // a new one needs the full search.
        let existing_stake = load_user_stake(program_id, user_stake_info)?;
        let user_stake_bump = match existing_stake {
            Some(stake) => {
                if stake.owner != *user_authority_info.key {
                    return Err(StakePoolError::OwnerMismatch.into());
                }
                let expected =
                    create_user_stake_address(program_id, user_authority_info.key, stake.bump)?;
                if *user_stake_info.key != expected {
                    return Err(StakePoolError::InvalidSeeds.into());
                }
                stake.bump
            }
            None => assert_derived_address(
                user_stake_info.key,
                find_user_stake_address(program_id, user_authority_info.key),
                StakePoolError::InvalidSeeds,
            )?,
        };

        let stake = existing_stake
            .unwrap_or_else(|| UserStake::new(*user_authority_info.key, user_stake_bump));

        Ok(Self {
            program_id,
            user_authority_info,
            wallet_info,
            user_stake_info,
            vault_info,
            system_program_info,
            rent,
            user_stake_bump,
            existing_stake,
            position: StakePosition {
                wallet,
                vault,
                stake,
            },
        })
    }

    /// Lamports the user authority must put up to create the ledger.
    ///
    /// Zero when the ledger already exists.
    pub fn ledger_funding(&self) -> Result<u64, StakePoolError> {
        if self.existing_stake.is_some() {
            return Ok(0);
        }
        required_funding(
            &self.rent,
            self.user_authority_info,
            self.user_stake_info,
            UserStake::LEN,
        )
    }

    /// Persist a transition's output, creating the ledger if it is new.
    ///
    /// `funding` comes from `ledger_funding`, computed during validation.
    pub fn commit(&self, next: &StakePosition, funding: u64) -> ProgramResult {
        if self.existing_stake.is_none() {
            assert_writable(self.user_authority_info)?;
            create_account(
                self.user_authority_info,
                self.user_stake_info,
                self.system_program_info,
                funding,
                UserStake::LEN,
                self.program_id,
                &[&[
                    USER_STAKE_SEED,
                    self.user_authority_info.key.as_ref(),
                    &[self.user_stake_bump],
                ]],
            )?;
        }

        next.wallet
            .pack_into_slice(&mut self.wallet_info.data.borrow_mut())?;
        next.vault
            .pack_into_slice(&mut self.vault_info.data.borrow_mut())?;
        next.stake
            .pack_into_slice(&mut self.user_stake_info.data.borrow_mut())?;

        Ok(())
    }
}
