//! Vote ledger. A vote is a PDA keyed by (proposal, voter), so a voter holds
//! at most one live vote per proposal.

use anchor_lang::prelude::*;

use crate::constants::{DAO_SEED, PROPOSAL_SEED, VOTE_SEED};
use crate::error::DaoError;
use crate::events::{QuorumReachedEvent, VoteCancelledEvent, VoteCastEvent};
use crate::state::{DaoConfig, Proposal, Vote};

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct VoteCast<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [DAO_SEED, dao_config.mint.as_ref()],
        bump = dao_config.bump
    )]
    pub dao_config: Account<'info, DaoConfig>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, dao_config.mint.as_ref(), &proposal_id.to_le_bytes()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,

    /// Reused when it already exists so a repeat vote reports `AlreadyVoter`
    #[account(
        init_if_needed,
        payer = voter,
        space = 8 + Vote::INIT_SPACE,
        seeds = [VOTE_SEED, proposal.key().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub vote: Account<'info, Vote>,

    pub system_program: Program<'info, System>,
}

impl<'info> VoteCast<'info> {
    pub fn cast(&mut self, bumps: &VoteCastBumps, proposal_id: u64) -> Result<()> {
        require!(!self.vote.is_recorded(), DaoError::AlreadyVoter);
        let number_of_voters = self.proposal.register_vote()?;

        let now = Clock::get()?.unix_timestamp;
        self.vote
            .record(proposal_id, self.voter.key(), now, bumps.vote)?;

        msg!(
            "Vote by {} on proposal {} ({} voter(s))",
            self.voter.key(),
            proposal_id,
            number_of_voters
        );
        emit!(VoteCastEvent {
            proposal: self.proposal.key(),
            voter: self.voter.key(),
            number_of_voters,
        });

        if number_of_voters == self.dao_config.quorum {
            msg!("Proposal {} reached quorum", proposal_id);
            emit!(QuorumReachedEvent {
                proposal: self.proposal.key(),
                quorum: self.dao_config.quorum,
            });
        }
        Ok(())
    }
}

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct VoteCancel<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [DAO_SEED, dao_config.mint.as_ref()],
        bump = dao_config.bump
    )]
    pub dao_config: Account<'info, DaoConfig>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, dao_config.mint.as_ref(), &proposal_id.to_le_bytes()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        mut,
        seeds = [VOTE_SEED, proposal.key().as_ref(), voter.key().as_ref()],
        bump = vote.bump,
        has_one = voter @ DaoError::UnauthorizedAccess,
        close = voter
    )]
    pub vote: Account<'info, Vote>,
}

impl<'info> VoteCancel<'info> {
    pub fn cancel(&mut self, proposal_id: u64) -> Result<()> {
        let number_of_voters = self.proposal.unregister_vote()?;

        msg!(
            "Vote by {} on proposal {} cancelled ({} voter(s))",
            self.voter.key(),
            proposal_id,
            number_of_voters
        );
        emit!(VoteCancelledEvent {
            proposal: self.proposal.key(),
            voter: self.voter.key(),
            number_of_voters,
        });
        Ok(())
    }
}
