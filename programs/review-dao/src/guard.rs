//! Role checks shared by every instruction. Each runs before any mutation.

use anchor_lang::prelude::*;

use crate::error::DaoError;
use crate::state::{Authority, DaoConfig, Proposal};

pub fn require_admin(config: &DaoConfig, caller: &Pubkey) -> Result<()> {
    require!(config.is_admin(caller), DaoError::UnauthorizedAccess);
    Ok(())
}

pub fn require_creator(proposal: &Proposal, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(proposal.creator, *caller, DaoError::UnauthorizedAccess);
    Ok(())
}

/// Strongest role `caller` holds over `proposal`. Admin wins over reviewer.
pub fn authority_of(config: &DaoConfig, proposal: &Proposal, caller: &Pubkey) -> Authority {
    if config.is_admin(caller) {
        Authority::Admin
    } else if proposal.is_reviewer(caller) {
        Authority::Reviewer
    } else {
        Authority::Other
    }
}
