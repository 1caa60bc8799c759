use anchor_lang::prelude::*;

use crate::constants::MAX_ADMINS;
use crate::error::DaoError;

/// Organization-wide settings, one per treasury mint.
#[account]
#[derive(InitSpace)]
pub struct DaoConfig {
    /// Mint of the token staked into the vault
    pub mint: Pubkey,
    /// Vault token account owned by this PDA
    pub vault: Pubkey,
    /// Votes needed before a proposal is considered supported
    pub quorum: u64,
    /// Stake debited from a creator on `proposal_create`
    pub min_amount_to_create_proposal: u64,
    /// Proposals created so far; also the next proposal id
    pub number_of_proposals: u64,
    // Keep in sync with MAX_ADMINS.
    #[max_len(10)]
    pub admins: Vec<Pubkey>,
    pub bump: u8,
    pub vault_bump: u8,
}

impl DaoConfig {
    /// Seeds the config. An empty `admins` list makes `payer` the founding admin.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        mint: Pubkey,
        vault: Pubkey,
        quorum: u64,
        admins: Vec<Pubkey>,
        payer: Pubkey,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(quorum >= 1, DaoError::InvalidQuorum);

        let mut founding: Vec<Pubkey> = Vec::with_capacity(admins.len().max(1));
        for admin in admins {
            if !founding.contains(&admin) {
                founding.push(admin);
            }
        }
        if founding.is_empty() {
            founding.push(payer);
        }
        require!(founding.len() <= MAX_ADMINS, DaoError::TooManyAdmins);

        self.mint = mint;
        self.vault = vault;
        self.quorum = quorum;
        self.min_amount_to_create_proposal = 0;
        self.number_of_proposals = 0;
        self.admins = founding;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admins.contains(key)
    }

    pub fn admin_count(&self) -> Result<u8> {
        u8::try_from(self.admins.len()).map_err(|_| error!(DaoError::TooManyAdmins))
    }

    pub fn set_quorum(&mut self, quorum: u64) -> Result<()> {
        require!(quorum >= 1, DaoError::InvalidQuorum);
        self.quorum = quorum;
        Ok(())
    }

    pub fn set_min_amount_to_create_proposal(&mut self, amount: u64) {
        self.min_amount_to_create_proposal = amount;
    }

    pub fn add_admin(&mut self, admin: Pubkey) -> Result<()> {
        require!(!self.is_admin(&admin), DaoError::AdminAlreadyExists);
        require!(self.admins.len() < MAX_ADMINS, DaoError::TooManyAdmins);
        self.admins.push(admin);
        Ok(())
    }

    pub fn remove_admin(&mut self, admin: &Pubkey) -> Result<()> {
        let index = self
            .admins
            .iter()
            .position(|a| a == admin)
            .ok_or(DaoError::AdminNotFound)?;
        require!(self.admins.len() > 1, DaoError::CannotRemoveLastAdmin);
        self.admins.remove(index);
        Ok(())
    }

    /// Consumes the next sequence number. `id` must match it exactly.
    pub fn allocate_proposal_id(&mut self, id: u64) -> Result<u64> {
        require!(id == self.number_of_proposals, DaoError::UnexpectedProposalId);
        self.number_of_proposals = self
            .number_of_proposals
            .checked_add(1)
            .ok_or(DaoError::MathOverflow)?;
        Ok(id)
    }

    pub fn quorum_reached(&self, number_of_voters: u64) -> bool {
        number_of_voters >= self.quorum
    }
}
