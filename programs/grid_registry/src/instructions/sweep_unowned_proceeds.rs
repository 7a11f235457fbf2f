use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::{RegistryConfig, ESCROW_SEED};
use crate::errors::GridError;
use crate::events::ProceedsSweptEvent;

/// Pays out the compensation share of takeovers on tiles nobody owned.
#[derive(Accounts)]
pub struct SweepUnownedProceeds<'info> {
    #[account(
        mut,
        constraint = authority.key() == registry_config.authority @ GridError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryConfig::SEED],
        bump = registry_config.bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    #[account(
        mut,
        seeds = [ESCROW_SEED],
        bump = registry_config.escrow_bump
    )]
    pub escrow: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SweepUnownedProceeds>) -> Result<()> {
    let config = &mut ctx.accounts.registry_config;
    let amount = config.take_unowned_proceeds()?;
    let bump = config.escrow_bump;

    let seeds: &[&[u8]] = &[ESCROW_SEED, &[bump]];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.escrow.to_account_info(),
                to: ctx.accounts.authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let authority = ctx.accounts.authority.key();
    emit!(ProceedsSweptEvent { authority, amount });

    msg!("Swept {} unowned-tile proceeds to {}", amount, authority);
    Ok(())
}
