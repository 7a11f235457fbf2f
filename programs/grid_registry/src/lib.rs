use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod state;
pub mod utils;
pub mod instructions;

use instructions::*;
use state::TileView;

declare_id!("7C3gQEr7sdxg2tyRQ8eZmiXKk6TdaZiudS6VNzFdmcLt");

#[program]
pub mod grid_registry {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    pub fn set_fee_vault(ctx: Context<SetFeeVault>, fee_vault: Pubkey) -> Result<()> {
        instructions::set_fee_vault::handler(ctx, fee_vault)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, new_authority: Option<Pubkey>) -> Result<()> {
        instructions::update_config::handler(ctx, new_authority)
    }

    pub fn init_coin(ctx: Context<InitCoin>, coin: Pubkey, initial_price: u64) -> Result<()> {
        instructions::init_coin::handler(ctx, coin, initial_price)
    }

    pub fn coin_inited(ctx: Context<CoinInited>, coin: Pubkey) -> Result<bool> {
        instructions::coin_inited::handler(ctx, coin)
    }

    pub fn get_tile(ctx: Context<GetTile>, coin: Pubkey, tile_id: u8) -> Result<TileView> {
        instructions::get_tile::handler(ctx, coin, tile_id)
    }

    pub fn tile_count(ctx: Context<TileCount>) -> Result<u64> {
        instructions::tile_count::handler(ctx)
    }

    pub fn takeover(
        ctx: Context<Takeover>,
        coin: Pubkey,
        tile_id: u8,
        payment: u64,
    ) -> Result<()> {
        instructions::takeover::handler(ctx, coin, tile_id, payment)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    pub fn sweep_unowned_proceeds(ctx: Context<SweepUnownedProceeds>) -> Result<()> {
        instructions::sweep_unowned_proceeds::handler(ctx)
    }
}
