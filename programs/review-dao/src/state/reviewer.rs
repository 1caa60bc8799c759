use anchor_lang::prelude::*;

use crate::constants::MAX_GITHUB_NAME_LEN;
use crate::error::DaoError;

/// A registered peer reviewer.
#[account]
#[derive(InitSpace)]
pub struct Reviewer {
    pub reviewer: Pubkey,
    /// Proposals currently pointing at this reviewer
    pub number_of_assignments: u32,
    #[max_len(39)]
    pub github_name: String,
    pub bump: u8,
}

impl Reviewer {
    pub fn register(&mut self, reviewer: Pubkey, github_name: String, bump: u8) -> Result<()> {
        require!(
            github_name.len() <= MAX_GITHUB_NAME_LEN,
            DaoError::GithubNameTooLong
        );
        self.reviewer = reviewer;
        self.number_of_assignments = 0;
        self.github_name = github_name;
        self.bump = bump;
        Ok(())
    }

    pub fn record_assignment(&mut self) -> Result<()> {
        self.number_of_assignments = self
            .number_of_assignments
            .checked_add(1)
            .ok_or(DaoError::MathOverflow)?;
        Ok(())
    }

    pub fn release_assignment(&mut self) -> Result<()> {
        self.number_of_assignments = self
            .number_of_assignments
            .checked_sub(1)
            .ok_or(DaoError::MathOverflow)?;
        Ok(())
    }

    pub fn ensure_deletable(&self) -> Result<()> {
        require!(
            self.number_of_assignments == 0,
            DaoError::CannotDeleteAnAssignedReviewer
        );
        Ok(())
    }
}
