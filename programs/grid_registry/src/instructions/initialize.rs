use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::{RegistryConfig, ESCROW_SEED, FEE_AUTHORITY_SEED};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + RegistryConfig::INIT_SPACE,
        seeds = [RegistryConfig::SEED],
        bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// Escrow - system-owned PDA holding unwithdrawn compensation
    #[account(
        mut,
        seeds = [ESCROW_SEED],
        bump
    )]
    pub escrow: SystemAccount<'info>,

    /// Signs fee deposits into the vault. Holds no data.
    /// CHECK: PDA derived from seeds, never read
    #[account(
        seeds = [FEE_AUTHORITY_SEED],
        bump
    )]
    pub fee_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let config = &mut ctx.accounts.registry_config;

    config.authority = ctx.accounts.authority.key();
    config.fee_vault = Pubkey::default(); // Set later via set_fee_vault
    config.unowned_proceeds = 0;
    config.bump = ctx.bumps.registry_config;
    config.escrow_bump = ctx.bumps.escrow;
    config.fee_authority_bump = ctx.bumps.fee_authority;
    config._padding = [0u8; 64];

    // Escrow must stay rent-exempt so small compensations never fail
    let rent_floor = Rent::get()?.minimum_balance(0);
    let top_up = rent_floor.saturating_sub(ctx.accounts.escrow.lamports());
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.authority.to_account_info(),
                    to: ctx.accounts.escrow.to_account_info(),
                },
            ),
            top_up,
        )?;
    }

    msg!(
        "Registry initialized, authority {}, fee authority {}",
        ctx.accounts.authority.key(),
        ctx.accounts.fee_authority.key()
    );
    Ok(())
}
