//! Direct lamport tips from any signer to a proposal's creator and reviewers.
//! Tips never touch the vault.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::error::DaoError;
use crate::events::GuideTippedEvent;
use crate::state::Proposal;

/// Equal three-way split; the remainder goes to the creator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TipSplit {
    pub creator: u64,
    pub reviewer: u64,
}

impl TipSplit {
    pub fn new(amount: u64) -> Result<Self> {
        require!(amount > 0, DaoError::InvalidAmount);
        let reviewer = amount / 3;
        let creator = amount
            .checked_sub(reviewer.checked_mul(2).ok_or(DaoError::MathOverflow)?)
            .ok_or(DaoError::MathOverflow)?;
        Ok(Self { creator, reviewer })
    }

    pub fn total(&self) -> Option<u64> {
        self.reviewer.checked_mul(2)?.checked_add(self.creator)
    }
}

#[derive(Accounts)]
pub struct GuideTipping<'info> {
    #[account(mut)]
    pub tipper: Signer<'info>,

    pub proposal: Account<'info, Proposal>,

    #[account(mut)]
    pub creator: SystemAccount<'info>,

    #[account(mut)]
    pub reviewer1: SystemAccount<'info>,

    #[account(mut)]
    pub reviewer2: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> GuideTipping<'info> {
    pub fn tip(&mut self, amount: u64) -> Result<()> {
        let (reviewer1, reviewer2) = self
            .proposal
            .reviewers()
            .ok_or(DaoError::ReviewersNotAssigned)?;
        require_keys_eq!(self.creator.key(), self.proposal.creator, DaoError::UnauthorizedAccess);
        require_keys_eq!(self.reviewer1.key(), reviewer1, DaoError::UnauthorizedAccess);
        require_keys_eq!(self.reviewer2.key(), reviewer2, DaoError::UnauthorizedAccess);

        let split = TipSplit::new(amount)?;
        self.pay(&self.creator.to_account_info(), split.creator)?;
        self.pay(&self.reviewer1.to_account_info(), split.reviewer)?;
        self.pay(&self.reviewer2.to_account_info(), split.reviewer)?;

        msg!(
            "Tip of {} on proposal {}: {} to creator, {} to each reviewer",
            amount,
            self.proposal.id,
            split.creator,
            split.reviewer
        );
        emit!(GuideTippedEvent {
            proposal: self.proposal.key(),
            tipper: self.tipper.key(),
            creator_share: split.creator,
            reviewer_share: split.reviewer,
        });
        Ok(())
    }

    fn pay(&self, to: &AccountInfo<'info>, lamports: u64) -> Result<()> {
        if lamports == 0 {
            return Ok(());
        }
        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.tipper.to_account_info(),
                    to: to.clone(),
                },
            ),
            lamports,
        )
    }
}
