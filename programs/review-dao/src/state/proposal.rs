use anchor_lang::prelude::*;

use crate::constants::{MAX_SLUG_LEN, MAX_STREAM_ID_LEN};
use crate::error::DaoError;

/// Lifecycle of a proposal:
/// `Submitted → Funded → Writing → HasReviewers → ReadyToPublish → Published`,
/// with `HasReviewers → Writing` as the only backwards edge.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ProposalState {
    Submitted,
    Funded,
    Writing,
    HasReviewers,
    ReadyToPublish,
    Published,
}

impl ProposalState {
    /// Votes may be cast or cancelled only while the proposal is looking for support.
    pub fn accepts_votes(self) -> bool {
        matches!(self, ProposalState::Submitted | ProposalState::Funded)
    }

    /// States from which `self` may be entered.
    fn predecessors(self) -> &'static [ProposalState] {
        use ProposalState::*;
        match self {
            Submitted => &[],
            Funded => &[Submitted],
            Writing => &[Funded, HasReviewers],
            HasReviewers => &[Writing],
            ReadyToPublish => &[HasReviewers],
            Published => &[ReadyToPublish],
        }
    }
}

/// Who is asking for a state change, as resolved by the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authority {
    Admin,
    Reviewer,
    Other,
}

/// Reviewer counters to adjust after `Proposal::assign_reviewers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewerChange {
    pub outgoing: Vec<Pubkey>,
    pub incoming: Vec<Pubkey>,
}

#[account]
#[derive(InitSpace)]
pub struct Proposal {
    pub id: u64,
    pub creator: Pubkey,
    pub reviewer1: Option<Pubkey>,
    pub reviewer2: Option<Pubkey>,
    pub number_of_voters: u64,
    pub created_at: i64,
    pub state: ProposalState,
    /// Tokens moved into the vault at creation, refunded on close
    pub stake: u64,
    #[max_len(64)]
    pub slug: String,
    /// Opaque pointer to the off-chain content stream
    #[max_len(64)]
    pub stream_id: String,
    pub bump: u8,
}

impl Proposal {
    pub fn validate_metadata(slug: &str, stream_id: &str) -> Result<()> {
        require!(slug.len() <= MAX_SLUG_LEN, DaoError::SlugTooLong);
        require!(stream_id.len() <= MAX_STREAM_ID_LEN, DaoError::StreamIdTooLong);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn open(
        &mut self,
        id: u64,
        creator: Pubkey,
        stake: u64,
        slug: String,
        stream_id: String,
        created_at: i64,
        bump: u8,
    ) -> Result<()> {
        Self::validate_metadata(&slug, &stream_id)?;

        self.id = id;
        self.creator = creator;
        self.reviewer1 = None;
        self.reviewer2 = None;
        self.number_of_voters = 0;
        self.created_at = created_at;
        self.state = ProposalState::Submitted;
        self.stake = stake;
        self.slug = slug;
        self.stream_id = stream_id;
        self.bump = bump;
        Ok(())
    }

    pub fn reviewers(&self) -> Option<(Pubkey, Pubkey)> {
        match (self.reviewer1, self.reviewer2) {
            (Some(r1), Some(r2)) => Some((r1, r2)),
            _ => None,
        }
    }

    pub fn is_reviewer(&self, key: &Pubkey) -> bool {
        self.reviewer1.as_ref() == Some(key) || self.reviewer2.as_ref() == Some(key)
    }

    /// Moves the proposal to `target`. Returns the state it left.
    pub fn set_state(&mut self, target: ProposalState, authority: Authority) -> Result<ProposalState> {
        let permitted = match target {
            ProposalState::ReadyToPublish => {
                matches!(authority, Authority::Admin | Authority::Reviewer)
            }
            _ => authority == Authority::Admin,
        };
        require!(permitted, DaoError::UnauthorizedAccess);

        require!(
            target.predecessors().contains(&self.state),
            DaoError::InvalidState
        );
        if target == ProposalState::HasReviewers {
            require!(self.reviewers().is_some(), DaoError::ReviewersNotAssigned);
        }

        let previous = self.state;
        self.state = target;
        Ok(previous)
    }

    pub fn register_vote(&mut self) -> Result<u64> {
        require!(self.state.accepts_votes(), DaoError::CannotCastVoteAnymore);
        self.number_of_voters = self
            .number_of_voters
            .checked_add(1)
            .ok_or(DaoError::MathOverflow)?;
        Ok(self.number_of_voters)
    }

    pub fn unregister_vote(&mut self) -> Result<u64> {
        require!(self.state.accepts_votes(), DaoError::CannotCancelVoteAnymore);
        self.number_of_voters = self
            .number_of_voters
            .checked_sub(1)
            .ok_or(DaoError::MathOverflow)?;
        Ok(self.number_of_voters)
    }

    pub fn ensure_closable(&self) -> Result<()> {
        require!(
            self.number_of_voters == 0,
            DaoError::CannotCloseProposalRemainingVoter
        );
        Ok(())
    }

    /// Reviewers whose assignment counters must be released when the
    /// proposal goes away.
    pub fn assigned_reviewers(&self) -> Vec<Pubkey> {
        [self.reviewer1, self.reviewer2].into_iter().flatten().collect()
    }

    /// Binds two distinct reviewers, replacing any previous pair.
    ///
    /// Reviewers present in both the old and the new pair appear in neither
    /// list of the returned change, so their counters stay put.
    pub fn assign_reviewers(&mut self, reviewer1: Pubkey, reviewer2: Pubkey) -> Result<ReviewerChange> {
        require_keys_neq!(reviewer1, reviewer2, DaoError::ReviewerNeedToBeDifferents);
        require!(
            self.state != ProposalState::Published,
            DaoError::InvalidState
        );

        let old: Vec<Pubkey> = [self.reviewer1, self.reviewer2].into_iter().flatten().collect();
        let new = [reviewer1, reviewer2];
        let change = ReviewerChange {
            outgoing: old.iter().filter(|r| !new.contains(r)).copied().collect(),
            incoming: new.iter().filter(|r| !old.contains(r)).copied().collect(),
        };

        self.reviewer1 = Some(reviewer1);
        self.reviewer2 = Some(reviewer2);
        Ok(change)
    }

    /// Clears both reviewers. A proposal waiting on them goes back to `Writing`.
    pub fn unassign_reviewers(&mut self) -> Result<(Pubkey, Pubkey)> {
        let pair = self.reviewers().ok_or(DaoError::ReviewersNotAssigned)?;
        self.reviewer1 = None;
        self.reviewer2 = None;
        if self.state == ProposalState::HasReviewers {
            self.state = ProposalState::Writing;
        }
        Ok(pair)
    }
}
