use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::{VaultConfig, REWARD_POOL_SEED};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + VaultConfig::INIT_SPACE,
        seeds = [VaultConfig::SEED],
        bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    /// Reward pool - system-owned PDA holding every unclaimed fee
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED],
        bump
    )]
    pub reward_pool: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, registry_program: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.vault_config;

    config.registry_program = registry_program;
    config.registry_authority = VaultConfig::registry_authority_for(&registry_program);
    config.bump = ctx.bumps.vault_config;
    config.pool_bump = ctx.bumps.reward_pool;
    config._padding = [0u8; 64];

    // Pool must stay rent-exempt so small fee deposits never fail
    let rent_floor = Rent::get()?.minimum_balance(0);
    let top_up = rent_floor.saturating_sub(ctx.accounts.reward_pool.lamports());
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.reward_pool.to_account_info(),
                },
            ),
            top_up,
        )?;
    }

    msg!(
        "Fee vault initialized for registry {}, fee authority {}",
        registry_program,
        ctx.accounts.vault_config.registry_authority
    );
    Ok(())
}
