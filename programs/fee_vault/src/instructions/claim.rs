use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::{VaultConfig, TileRewards, REGISTRY_TILE_SEED, REWARD_POOL_SEED};
use crate::errors::FeeVaultError;
use crate::events::ClaimedEvent;
use crate::utils::{load_program_account, resolve_tile_owner, store_program_account};

#[derive(Accounts)]
#[instruction(coin: Pubkey, tile_id: u8)]
pub struct Claim<'info> {
    #[account(mut)]
    pub claimer: Signer<'info>,

    #[account(
        seeds = [VaultConfig::SEED],
        bump = vault_config.bump
    )]
    pub vault_config: Account<'info, VaultConfig>,

    /// Registry tile account, read live for its current owner
    /// CHECK: Address pinned to the registry PDA, owner program checked in handler
    #[account(
        seeds = [REGISTRY_TILE_SEED, coin.as_ref(), &tile_id.to_le_bytes()],
        bump,
        seeds::program = vault_config.registry_program
    )]
    pub tile: UncheckedAccount<'info>,

    /// Created by the first deposit for this tile
    /// CHECK: Address pinned by seeds; loaded in the handler
    #[account(
        mut,
        seeds = [TileRewards::SEED, coin.as_ref(), &tile_id.to_le_bytes()],
        bump
    )]
    pub tile_rewards: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [REWARD_POOL_SEED],
        bump = vault_config.pool_bump
    )]
    pub reward_pool: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Claim>, coin: Pubkey, tile_id: u8) -> Result<()> {
    let claimer = ctx.accounts.claimer.key();

    // Whoever owns the tile right now takes the whole pool
    let owner = resolve_tile_owner(
        &ctx.accounts.tile.to_account_info(),
        &ctx.accounts.vault_config.registry_program,
    )?;
    require_keys_eq!(owner, claimer, FeeVaultError::NotOwner);

    let pool = ctx.accounts.tile_rewards.to_account_info();
    let mut rewards: TileRewards =
        load_program_account(&pool)?.ok_or(FeeVaultError::NothingToClaim)?;

    // Zero before paying out
    let amount = rewards.take_pending()?;
    store_program_account(&pool, &rewards)?;

    let bump = ctx.accounts.vault_config.pool_bump;
    let seeds: &[&[u8]] = &[REWARD_POOL_SEED, &[bump]];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.reward_pool.to_account_info(),
                to: ctx.accounts.claimer.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(ClaimedEvent {
        coin,
        tile_id,
        owner: claimer,
        amount,
    });

    msg!("Claimed {} from tile {} of coin {} by {}", amount, tile_id, coin, claimer);
    Ok(())
}
