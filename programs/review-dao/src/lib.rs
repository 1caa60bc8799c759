//! Funded proposal review DAO.
//!
//! Members stake tokens to open a proposal, peers vote on it, admins assign
//! a pair of reviewers, and the stake is refunded from the vault when the
//! creator closes the proposal. Tips to creator and reviewers are paid
//! directly by the tipper in lamports.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod guard;
pub mod instructions;
pub mod state;
pub mod treasury;

#[cfg(test)]
mod proptests;

use instructions::*;
use state::ProposalState;

declare_id!("7woQ9NVVM7PHVNFGmgS5Yk1yrdP7sSAccbuE32aGrtwv");

#[program]
pub mod review_dao {
    use super::*;

    /// Create the DAO config and its vault for `mint`.
    pub fn dao_initialize(
        ctx: Context<DaoInitialize>,
        quorum: u64,
        admins: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.initialize(&ctx.bumps, quorum, admins)
    }

    pub fn dao_set_quorum(ctx: Context<DaoUpdate>, quorum: u64) -> Result<()> {
        ctx.accounts.set_quorum(quorum)
    }

    pub fn dao_add_admin(ctx: Context<DaoUpdate>, admin: Pubkey) -> Result<()> {
        ctx.accounts.add_admin(admin)
    }

    pub fn dao_remove_admin(ctx: Context<DaoUpdate>, admin: Pubkey) -> Result<()> {
        ctx.accounts.remove_admin(admin)
    }

    pub fn dao_set_amount_to_create_proposal(ctx: Context<DaoUpdate>, amount: u64) -> Result<()> {
        ctx.accounts.set_amount_to_create_proposal(amount)
    }

    /// Open proposal `id`, moving the configured stake into the vault.
    pub fn proposal_create(
        ctx: Context<ProposalCreate>,
        id: u64,
        slug: String,
        stream_id: String,
    ) -> Result<()> {
        ctx.accounts.create(&ctx.bumps, id, slug, stream_id)
    }

    pub fn proposal_set_state(ctx: Context<ProposalSetState>, state: ProposalState) -> Result<()> {
        ctx.accounts.set_state(state)
    }

    /// Split a lamport tip between the creator and both reviewers.
    pub fn guide_tipping(ctx: Context<GuideTipping>, amount: u64) -> Result<()> {
        ctx.accounts.tip(amount)
    }

    /// Refund the stake and close the proposal. Requires zero live votes.
    pub fn proposal_close(ctx: Context<ProposalClose>) -> Result<()> {
        ctx.accounts.close()
    }

    pub fn vote_cast(ctx: Context<VoteCast>, proposal_id: u64) -> Result<()> {
        ctx.accounts.cast(&ctx.bumps, proposal_id)
    }

    pub fn vote_cancel(ctx: Context<VoteCancel>, proposal_id: u64) -> Result<()> {
        ctx.accounts.cancel(proposal_id)
    }

    pub fn reviewer_create(
        ctx: Context<ReviewerCreate>,
        reviewer: Pubkey,
        github_name: String,
    ) -> Result<()> {
        ctx.accounts.create(&ctx.bumps, reviewer, github_name)
    }

    pub fn reviewer_delete(ctx: Context<ReviewerDelete>) -> Result<()> {
        ctx.accounts.delete()
    }

    pub fn reviewer_assign(ctx: Context<ReviewerAssign>) -> Result<()> {
        ctx.accounts.assign()
    }

    pub fn reviewer_unassign(ctx: Context<ReviewerUnassign>) -> Result<()> {
        ctx.accounts.unassign()
    }
}
