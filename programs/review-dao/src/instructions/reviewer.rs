//! Reviewer registry and the binding of reviewer pairs to proposals.

use anchor_lang::prelude::*;

use crate::constants::{DAO_SEED, PROPOSAL_SEED, REVIEWER_SEED};
use crate::error::DaoError;
use crate::events::{
    ReviewerCreatedEvent, ReviewerDeletedEvent, ReviewersAssignedEvent, ReviewersUnassignedEvent,
};
use crate::guard;
use crate::state::{DaoConfig, Proposal, Reviewer};

#[derive(Accounts)]
#[instruction(reviewer: Pubkey)]
pub struct ReviewerCreate<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [DAO_SEED, dao_config.mint.as_ref()],
        bump = dao_config.bump
    )]
    pub dao_config: Account<'info, DaoConfig>,

    #[account(
        init,
        payer = authority,
        space = 8 + Reviewer::INIT_SPACE,
        seeds = [REVIEWER_SEED, dao_config.mint.as_ref(), reviewer.as_ref()],
        bump
    )]
    pub reviewer_account: Account<'info, Reviewer>,

    pub system_program: Program<'info, System>,
}

impl<'info> ReviewerCreate<'info> {
    pub fn create(
        &mut self,
        bumps: &ReviewerCreateBumps,
        reviewer: Pubkey,
        github_name: String,
    ) -> Result<()> {
        guard::require_admin(&self.dao_config, &self.authority.key())?;
        self.reviewer_account
            .register(reviewer, github_name, bumps.reviewer_account)?;

        msg!(
            "Reviewer {} ({}) registered",
            reviewer,
            self.reviewer_account.github_name
        );
        emit!(ReviewerCreatedEvent {
            reviewer,
            github_name: self.reviewer_account.github_name.clone(),
        });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct ReviewerDelete<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [DAO_SEED, dao_config.mint.as_ref()],
        bump = dao_config.bump
    )]
    pub dao_config: Account<'info, DaoConfig>,

    #[account(
        mut,
        seeds = [REVIEWER_SEED, dao_config.mint.as_ref(), reviewer_account.reviewer.as_ref()],
        bump = reviewer_account.bump,
        close = authority
    )]
    pub reviewer_account: Account<'info, Reviewer>,
}

impl<'info> ReviewerDelete<'info> {
    pub fn delete(&mut self) -> Result<()> {
        guard::require_admin(&self.dao_config, &self.authority.key())?;
        self.reviewer_account.ensure_deletable()?;

        msg!("Reviewer {} deleted", self.reviewer_account.reviewer);
        emit!(ReviewerDeletedEvent {
            reviewer: self.reviewer_account.reviewer,
        });
        Ok(())
    }
}

/// Binds `reviewer1`/`reviewer2` to the proposal. When the proposal already
/// has reviewers, each one being replaced must be passed as an outgoing
/// account so its assignment counter can be released.
#[derive(Accounts)]
pub struct ReviewerAssign<'info> {
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

    #[account(
        mut,
        seeds = [REVIEWER_SEED, dao_config.mint.as_ref(), reviewer1.reviewer.as_ref()],
        bump = reviewer1.bump
    )]
    pub reviewer1: Account<'info, Reviewer>,

    #[account(
        mut,
        seeds = [REVIEWER_SEED, dao_config.mint.as_ref(), reviewer2.reviewer.as_ref()],
        bump = reviewer2.bump,
        constraint = reviewer2.key() != reviewer1.key() @ DaoError::ReviewerNeedToBeDifferents
    )]
    pub reviewer2: Account<'info, Reviewer>,

    #[account(
        mut,
        seeds = [REVIEWER_SEED, dao_config.mint.as_ref(), outgoing_reviewer1.reviewer.as_ref()],
        bump = outgoing_reviewer1.bump
    )]
    pub outgoing_reviewer1: Option<Account<'info, Reviewer>>,

    #[account(
        mut,
        seeds = [REVIEWER_SEED, dao_config.mint.as_ref(), outgoing_reviewer2.reviewer.as_ref()],
        bump = outgoing_reviewer2.bump
    )]
    pub outgoing_reviewer2: Option<Account<'info, Reviewer>>,
}

impl<'info> ReviewerAssign<'info> {
    pub fn assign(&mut self) -> Result<()> {
        guard::require_admin(&self.dao_config, &self.authority.key())?;

        let reviewer1 = self.reviewer1.reviewer;
        let reviewer2 = self.reviewer2.reviewer;
        let change = self.proposal.assign_reviewers(reviewer1, reviewer2)?;

        for outgoing in &change.outgoing {
            let account = [
                self.outgoing_reviewer1.as_mut(),
                self.outgoing_reviewer2.as_mut(),
            ]
            .into_iter()
            .flatten()
            .find(|account| account.reviewer == *outgoing)
            .ok_or(DaoError::MissingOutgoingReviewer)?;
            account.release_assignment()?;
        }
        for account in [&mut self.reviewer1, &mut self.reviewer2] {
            if change.incoming.contains(&account.reviewer) {
                account.record_assignment()?;
            }
        }

        msg!(
            "Proposal {} reviewers set to {} and {}",
            self.proposal.id,
            reviewer1,
            reviewer2
        );
        emit!(ReviewersAssignedEvent {
            proposal: self.proposal.key(),
            reviewer1,
            reviewer2,
        });
        Ok(())
    }
}

#[derive(Accounts)]
pub struct ReviewerUnassign<'info> {
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

    #[account(
        mut,
        seeds = [REVIEWER_SEED, dao_config.mint.as_ref(), reviewer1.reviewer.as_ref()],
        bump = reviewer1.bump
    )]
    pub reviewer1: Account<'info, Reviewer>,

    #[account(
        mut,
        seeds = [REVIEWER_SEED, dao_config.mint.as_ref(), reviewer2.reviewer.as_ref()],
        bump = reviewer2.bump
    )]
    pub reviewer2: Account<'info, Reviewer>,
}

impl<'info> ReviewerUnassign<'info> {
    pub fn unassign(&mut self) -> Result<()> {
        guard::require_admin(&self.dao_config, &self.authority.key())?;

        let (assigned1, assigned2) = self.proposal.unassign_reviewers()?;
        let supplied = [self.reviewer1.reviewer, self.reviewer2.reviewer];
        require!(
            supplied.contains(&assigned1) && supplied.contains(&assigned2),
            DaoError::MissingOutgoingReviewer
        );
        self.reviewer1.release_assignment()?;
        self.reviewer2.release_assignment()?;

        msg!(
            "Proposal {} reviewers released, state {:?}",
            self.proposal.id,
            self.proposal.state
        );
        emit!(ReviewersUnassignedEvent {
            proposal: self.proposal.key(),
            reviewer1: assigned1,
            reviewer2: assigned2,
        });
        Ok(())
    }
}
