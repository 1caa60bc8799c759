use anchor_lang::prelude::*;

use crate::error::DaoError;

/// One vote, addressed by (proposal, voter).
#[account]
#[derive(InitSpace)]
pub struct Vote {
    pub proposal_id: u64,
    pub voter: Pubkey,
    pub voted_at: i64,
    pub bump: u8,
}

impl Vote {
    /// A freshly allocated vote account still carries the default voter.
    pub fn is_recorded(&self) -> bool {
        self.voter != Pubkey::default()
    }

    pub fn record(&mut self, proposal_id: u64, voter: Pubkey, voted_at: i64, bump: u8) -> Result<()> {
        require!(!self.is_recorded(), DaoError::AlreadyVoter);
        self.proposal_id = proposal_id;
        self.voter = voter;
        self.voted_at = voted_at;
        self.bump = bump;
        Ok(())
    }
}
