//! Error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum DaoError {
    #[msg("Insufficient funds to cover the proposal stake")]
    InsufficientFundsInVault,
    #[msg("Given slug is too long")]
    SlugTooLong,
    #[msg("Given stream id is too long")]
    StreamIdTooLong,
    #[msg("User has already voted")]
    AlreadyVoter,
    #[msg("Votes cannot be cast in the current proposal state")]
    CannotCastVoteAnymore,
    #[msg("Votes cannot be cancelled in the current proposal state")]
    CannotCancelVoteAnymore,
    #[msg("Cannot delete a reviewer with live assignments")]
    CannotDeleteAnAssignedReviewer,
    #[msg("Both reviewers must be different")]
    ReviewerNeedToBeDifferents,
    #[msg("Cannot close a proposal with remaining voters")]
    CannotCloseProposalRemainingVoter,
    #[msg("Not authorized to call this instruction")]
    UnauthorizedAccess,
    #[msg("Cannot set state: invalid target state")]
    InvalidState,
    /// Kept for code stability. The state argument is a closed enum, so an
    /// unknown state fails instruction decoding instead.
    #[msg("Cannot set state: bad previous state")]
    BadPreviousState,
    #[msg("Quorum must be at least 1")]
    InvalidQuorum,
    #[msg("Admin set is full")]
    TooManyAdmins,
    #[msg("Identity is already an admin")]
    AdminAlreadyExists,
    #[msg("Identity is not an admin")]
    AdminNotFound,
    #[msg("Cannot remove the last admin")]
    CannotRemoveLastAdmin,
    #[msg("Proposal id does not match the next sequence number")]
    UnexpectedProposalId,
    #[msg("Proposal has no assigned reviewers")]
    ReviewersNotAssigned,
    #[msg("Assigned reviewer account was not supplied")]
    MissingOutgoingReviewer,
    #[msg("Given GitHub name is too long")]
    GithubNameTooLong,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
