use anchor_lang::prelude::*;
use crate::state::TileRewards;
use crate::errors::FeeVaultError;
use crate::utils::{load_program_account, TILE_COUNT};

#[derive(Accounts)]
#[instruction(coin: Pubkey, tile_id: u8)]
pub struct Pending<'info> {
    /// Rewards account may not exist yet: a tile with no deposits has nothing pending
    /// CHECK: Address pinned by seeds, ownership checked in handler
    #[account(
        seeds = [TileRewards::SEED, coin.as_ref(), &tile_id.to_le_bytes()],
        bump
    )]
    pub tile_rewards: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<Pending>, _coin: Pubkey, tile_id: u8) -> Result<u64> {
    require!(tile_id < TILE_COUNT, FeeVaultError::InvalidTileId);

    let rewards: Option<TileRewards> =
        load_program_account(&ctx.accounts.tile_rewards.to_account_info())?;
    Ok(rewards.map_or(0, |rewards| rewards.pending))
}
