use anchor_lang::prelude::*;
use crate::state::TILE_COUNT;

#[derive(Accounts)]
pub struct TileCount {}

pub fn handler(_ctx: Context<TileCount>) -> Result<u64> {
    Ok(u64::from(TILE_COUNT))
}
