use anchor_lang::prelude::*;
use crate::state::RegistryConfig;
use crate::errors::GridError;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
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

pub fn handler(ctx: Context<UpdateConfig>, new_authority: Option<Pubkey>) -> Result<()> {
    let config = &mut ctx.accounts.registry_config;

    if let Some(authority) = new_authority {
        config.set_authority(authority)?;
        msg!("Updated authority to {}", authority);
    }

    Ok(())
}
