use anchor_lang::prelude::*;
use crate::state::RegistryConfig;
use crate::errors::GridError;

#[derive(Accounts)]
pub struct SetFeeVault<'info> {
    #[account(
        constraint = authority.key() == registry_config.authority @ GridError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryConfig::SEED],
        bump = registry_config.bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,
}

pub fn handler(ctx: Context<SetFeeVault>, fee_vault: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.registry_config;

    if config.set_fee_vault(fee_vault)? {
        msg!("Fee vault set to {}", fee_vault);
    } else {
        msg!("Fee vault already {}", fee_vault);
    }
    Ok(())
}
