use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::{VaultConfig, TileRewards, REWARD_POOL_SEED};
use crate::errors::FeeVaultError;
use crate::events::FeeDepositedEvent;
use crate::utils::TILE_COUNT;

#[derive(Accounts)]
#[instruction(coin: Pubkey, tile_id: u8)]
pub struct DepositFee<'info> {
    #[account(
        seeds = [VaultConfig::SEED],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    /// Registry fee authority PDA, signs through CPI
    #[account(
        address = vault_config.registry_authority @ FeeVaultError::Unauthorized
    )]
    pub registry_authority: Signer<'info>,

    /// Funds the deposit (the buyer of the takeover)
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + TileRewards::INIT_SPACE,
        seeds = [TileRewards::SEED, coin.as_ref(), &tile_id.to_le_bytes()],
        bump
    )]
    pub tile_rewards: Account<'info, TileRewards>,

    #[account(
        mut,
        seeds = [REWARD_POOL_SEED],
        bump = vault_config.pool_bump
    )]
    pub reward_pool: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<DepositFee>, coin: Pubkey, tile_id: u8, amount: u64) -> Result<()> {
    require!(tile_id < TILE_COUNT, FeeVaultError::InvalidTileId);

    let tile_rewards = &mut ctx.accounts.tile_rewards;
    tile_rewards.bind(coin, tile_id, ctx.bumps.tile_rewards);
    tile_rewards.deposit(amount)?;
    let pending = tile_rewards.pending;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.reward_pool.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(FeeDepositedEvent {
        coin,
        tile_id,
        amount,
        pending,
    });

    msg!("Deposited {} to tile {} of coin {}, pending {}", amount, tile_id, coin, pending);
    Ok(())
}
