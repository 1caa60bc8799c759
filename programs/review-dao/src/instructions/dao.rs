//! DAO configuration: creation of the config/vault pair and admin-only updates.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{DAO_SEED, VAULT_SEED};
use crate::events::{DaoConfigUpdatedEvent, DaoInitializedEvent};
use crate::guard;
use crate::state::DaoConfig;

#[derive(Accounts)]
pub struct DaoInitialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// One config per mint; a second initialize hits the existing PDA and fails
    #[account(
        init,
        payer = payer,
        space = 8 + DaoConfig::INIT_SPACE,
        seeds = [DAO_SEED, mint.key().as_ref()],
        bump
    )]
    pub dao_config: Account<'info, DaoConfig>,

    #[account(
        init,
        payer = payer,
        seeds = [VAULT_SEED, mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = dao_config,
        token::token_program = token_program
    )]
    pub dao_vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> DaoInitialize<'info> {
    pub fn initialize(
        &mut self,
        bumps: &DaoInitializeBumps,
        quorum: u64,
        admins: Vec<Pubkey>,
    ) -> Result<()> {
        self.dao_config.initialize(
            self.mint.key(),
            self.dao_vault.key(),
            quorum,
            admins,
            self.payer.key(),
            bumps.dao_config,
            bumps.dao_vault,
        )?;

        msg!(
            "DAO initialized for mint {} with quorum {} and {} admin(s)",
            self.mint.key(),
            quorum,
            self.dao_config.admins.len()
        );
        emit!(DaoInitializedEvent {
            dao: self.dao_config.key(),
            mint: self.mint.key(),
            quorum,
            admins: self.dao_config.admins.clone(),
        });
        Ok(())
    }
}

/// Shared by every admin-only configuration update.
#[derive(Accounts)]
pub struct DaoUpdate<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [DAO_SEED, dao_config.mint.as_ref()],
        bump = dao_config.bump
    )]
    pub dao_config: Account<'info, DaoConfig>,
}

impl<'info> DaoUpdate<'info> {
    pub fn set_quorum(&mut self, quorum: u64) -> Result<()> {
        guard::require_admin(&self.dao_config, &self.authority.key())?;
        self.dao_config.set_quorum(quorum)?;
        msg!("Quorum set to {}", quorum);
        self.emit_updated()
    }

    pub fn add_admin(&mut self, admin: Pubkey) -> Result<()> {
        guard::require_admin(&self.dao_config, &self.authority.key())?;
        self.dao_config.add_admin(admin)?;
        msg!("Admin {} added by {}", admin, self.authority.key());
        self.emit_updated()
    }

    pub fn remove_admin(&mut self, admin: Pubkey) -> Result<()> {
        guard::require_admin(&self.dao_config, &self.authority.key())?;
        self.dao_config.remove_admin(&admin)?;
        msg!("Admin {} removed by {}", admin, self.authority.key());
        self.emit_updated()
    }

    pub fn set_amount_to_create_proposal(&mut self, amount: u64) -> Result<()> {
        guard::require_admin(&self.dao_config, &self.authority.key())?;
        self.dao_config.set_min_amount_to_create_proposal(amount);
        msg!("Minimum proposal stake set to {}", amount);
        self.emit_updated()
    }

    fn emit_updated(&self) -> Result<()> {
        let admin_count = self.dao_config.admin_count()?;
        emit!(DaoConfigUpdatedEvent {
            dao: self.dao_config.key(),
            authority: self.authority.key(),
            quorum: self.dao_config.quorum,
            min_amount_to_create_proposal: self.dao_config.min_amount_to_create_proposal,
            admin_count,
        });
        Ok(())
    }
}
