//! Token movements in and out of the DAO vault.
//!
//! The vault is a token account whose authority is the `DaoConfig` PDA, so
//! deposits are signed by the creator and refunds by the config seeds.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::constants::DAO_SEED;
use crate::error::DaoError;
use crate::state::DaoConfig;

pub fn deposit_stake<'info>(
    token_program: &Interface<'info, TokenInterface>,
    mint: &InterfaceAccount<'info, Mint>,
    from: &InterfaceAccount<'info, TokenAccount>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    require!(from.amount >= amount, DaoError::InsufficientFundsInVault);
    if amount == 0 {
        return Ok(());
    }

    transfer_checked(
        CpiContext::new(
            token_program.to_account_info(),
            TransferChecked {
                from: from.to_account_info(),
                mint: mint.to_account_info(),
                to: vault.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        amount,
        mint.decimals,
    )
}

pub fn refund_stake<'info>(
    token_program: &Interface<'info, TokenInterface>,
    mint: &InterfaceAccount<'info, Mint>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    dao_config: &Account<'info, DaoConfig>,
    amount: u64,
) -> Result<()> {
    require!(vault.amount >= amount, DaoError::InsufficientFundsInVault);
    if amount == 0 {
        return Ok(());
    }

    let mint_key = dao_config.mint;
    let bump = [dao_config.bump];
    let seeds: [&[u8]; 3] = [DAO_SEED, mint_key.as_ref(), &bump];
    let signer_seeds = &[&seeds[..]];

    transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: vault.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: dao_config.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        mint.decimals,
    )
}
