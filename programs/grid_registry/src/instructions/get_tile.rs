use anchor_lang::prelude::*;
use crate::state::{CoinState, Tile, TileView, TILE_COUNT};
use crate::errors::GridError;
use crate::utils::{load_inited_coin, load_program_account};

#[derive(Accounts)]
#[instruction(coin: Pubkey, tile_id: u8)]
pub struct GetTile<'info> {
    /// CHECK: Address pinned by seeds; may not exist
    #[account(
        seeds = [CoinState::SEED, coin.as_ref()],
        bump
    )]
    pub coin_state: UncheckedAccount<'info>,

    /// Tile accounts are created on first takeover
    /// CHECK: Address pinned by seeds; may not exist
    #[account(
        seeds = [Tile::SEED, coin.as_ref(), &tile_id.to_le_bytes()],
        bump
    )]
    pub tile: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<GetTile>, _coin: Pubkey, tile_id: u8) -> Result<TileView> {
    require!(tile_id < TILE_COUNT, GridError::InvalidTileId);

    let coin_state = load_inited_coin(&ctx.accounts.coin_state.to_account_info())?;

    let tile: Option<Tile> = load_program_account(&ctx.accounts.tile.to_account_info())?;
    Ok(match tile {
        Some(tile) if tile.opened => tile.view(),
        _ => TileView {
            owner: Pubkey::default(),
            price: coin_state.initial_price,
        },
    })
}
