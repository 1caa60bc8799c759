//! Proposal lifecycle: creation with a stake, state changes, and close with refund.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::{DAO_SEED, PROPOSAL_SEED, REVIEWER_SEED};
use crate::events::{ProposalClosedEvent, ProposalCreatedEvent, ProposalStateChangedEvent};
use crate::guard;
use crate::error::DaoError;
use crate::state::{DaoConfig, Proposal, ProposalState, Reviewer};
use crate::treasury;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ProposalCreate<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [DAO_SEED, mint.key().as_ref()],
        bump = dao_config.bump,
        has_one = mint
    )]
    pub dao_config: Account<'info, DaoConfig>,

    #[account(mut, address = dao_config.vault)]
    pub dao_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init,
        payer = creator,
        space = 8 + Proposal::INIT_SPACE,
        seeds = [PROPOSAL_SEED, mint.key().as_ref(), &id.to_le_bytes()],
        bump
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = creator,
        token::token_program = token_program
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> ProposalCreate<'info> {
    pub fn create(
        &mut self,
        bumps: &ProposalCreateBumps,
        id: u64,
        slug: String,
        stream_id: String,
    ) -> Result<()> {
        Proposal::validate_metadata(&slug, &stream_id)?;

        let id = self.dao_config.allocate_proposal_id(id)?;
        let stake = self.dao_config.min_amount_to_create_proposal;

        treasury::deposit_stake(
            &self.token_program,
            &self.mint,
            &self.creator_token_account,
            &self.dao_vault,
            &self.creator,
            stake,
        )?;

        let now = Clock::get()?.unix_timestamp;
        self.proposal.open(
            id,
            self.creator.key(),
            stake,
            slug,
            stream_id,
            now,
            bumps.proposal,
        )?;

        msg!(
            "Proposal {} '{}' created by {} with stake {}",
            id,
            self.proposal.slug,
            self.creator.key(),
            stake
        );
        emit!(ProposalCreatedEvent {
            proposal: self.proposal.key(),
            id,
            creator: self.creator.key(),
            stake,
            slug: self.proposal.slug.clone(),
            timestamp: now,
        });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct ProposalSetState<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [DAO_SEED, dao_config.mint.as_ref()],
        bump = dao_config.bump
    )]
    pub dao_config: Account<'info, DaoConfig>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, dao_config.mint.as_ref(), &proposal.id.to_le_bytes()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,
}

impl<'info> ProposalSetState<'info> {
    pub fn set_state(&mut self, state: ProposalState) -> Result<()> {
        let authority = guard::authority_of(&self.dao_config, &self.proposal, &self.authority.key());
        let previous = self.proposal.set_state(state, authority)?;

        msg!(
            "Proposal {} moved from {:?} to {:?}",
            self.proposal.id,
            previous,
            state
        );
        emit!(ProposalStateChangedEvent {
            proposal: self.proposal.key(),
            from: previous,
            to: state,
            authority: self.authority.key(),
        });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct ProposalClose<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        seeds = [DAO_SEED, mint.key().as_ref()],
        bump = dao_config.bump,
        has_one = mint
    )]
    pub dao_config: Account<'info, DaoConfig>,

    #[account(mut, address = dao_config.vault)]
    pub dao_vault: InterfaceAccount<'info, TokenAccount>,

    /// Rent goes back to the creator once the refund succeeds
    #[account(
        mut,
        seeds = [PROPOSAL_SEED, mint.key().as_ref(), &proposal.id.to_le_bytes()],
        bump = proposal.bump,
        close = creator
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = creator,
        token::token_program = token_program
    )]
    pub creator_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Required when the proposal still has reviewers; their assignment
    /// counters are released on close.
    #[account(
        mut,
        seeds = [REVIEWER_SEED, mint.key().as_ref(), reviewer1.reviewer.as_ref()],
        bump = reviewer1.bump
    )]
    pub reviewer1: Option<Account<'info, Reviewer>>,

    #[account(
        mut,
        seeds = [REVIEWER_SEED, mint.key().as_ref(), reviewer2.reviewer.as_ref()],
        bump = reviewer2.bump
    )]
    pub reviewer2: Option<Account<'info, Reviewer>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> ProposalClose<'info> {
    pub fn close(&mut self) -> Result<()> {
        guard::require_creator(&self.proposal, &self.creator.key())?;
        self.proposal.ensure_closable()?;

        for assigned in self.proposal.assigned_reviewers() {
            let account = [self.reviewer1.as_mut(), self.reviewer2.as_mut()]
                .into_iter()
                .flatten()
                .find(|account| account.reviewer == assigned)
                .ok_or(DaoError::MissingOutgoingReviewer)?;
            account.release_assignment()?;
        }

        let refund = self.proposal.stake;
        treasury::refund_stake(
            &self.token_program,
            &self.mint,
            &self.dao_vault,
            &self.creator_token_account,
            &self.dao_config,
            refund,
        )?;

        msg!("Proposal {} closed, {} refunded", self.proposal.id, refund);
        emit!(ProposalClosedEvent {
            proposal: self.proposal.key(),
            creator: self.creator.key(),
            refunded: refund,
        });
        Ok(())
    }
}
