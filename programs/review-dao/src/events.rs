//! Events emitted for off-chain indexers.

use anchor_lang::prelude::*;

use crate::state::ProposalState;

#[event]
pub struct DaoInitializedEvent {
    pub dao: Pubkey,
    pub mint: Pubkey,
    pub quorum: u64,
    pub admins: Vec<Pubkey>,
}

#[event]
pub struct DaoConfigUpdatedEvent {
    pub dao: Pubkey,
    pub authority: Pubkey,
    pub quorum: u64,
    pub min_amount_to_create_proposal: u64,
    pub admin_count: u8,
}

#[event]
pub struct ProposalCreatedEvent {
    pub proposal: Pubkey,
    pub id: u64,
    pub creator: Pubkey,
    pub stake: u64,
    pub slug: String,
    pub timestamp: i64,
}

#[event]
pub struct ProposalStateChangedEvent {
    pub proposal: Pubkey,
    pub from: ProposalState,
    pub to: ProposalState,
    pub authority: Pubkey,
}

#[event]
pub struct ProposalClosedEvent {
    pub proposal: Pubkey,
    pub creator: Pubkey,
    pub refunded: u64,
}

#[event]
pub struct VoteCastEvent {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub number_of_voters: u64,
}

#[event]
pub struct VoteCancelledEvent {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub number_of_voters: u64,
}

/// The proposal gathered enough votes for an admin to fund it.
#[event]
pub struct QuorumReachedEvent {
    pub proposal: Pubkey,
    pub quorum: u64,
}

#[event]
pub struct ReviewerCreatedEvent {
    pub reviewer: Pubkey,
    pub github_name: String,
}

#[event]
pub struct ReviewerDeletedEvent {
    pub reviewer: Pubkey,
}

#[event]
pub struct ReviewersAssignedEvent {
    pub proposal: Pubkey,
    pub reviewer1: Pubkey,
    pub reviewer2: Pubkey,
}

#[event]
pub struct ReviewersUnassignedEvent {
    pub proposal: Pubkey,
    pub reviewer1: Pubkey,
    pub reviewer2: Pubkey,
}

#[event]
pub struct GuideTippedEvent {
    pub proposal: Pubkey,
    pub tipper: Pubkey,
    pub creator_share: u64,
    pub reviewer_share: u64,
}
