use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod state;
pub mod utils;
pub mod instructions;

use instructions::*;

declare_id!("Gy32oX2XCDqC4oHyKoUaQyCQLX1813n3gmpWebjwjAN4");

#[program]
pub mod fee_vault {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, registry_program: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, registry_program)
    }

    pub fn deposit_fee(
        ctx: Context<DepositFee>,
        coin: Pubkey,
        tile_id: u8,
        amount: u64,
    ) -> Result<()> {
        instructions::deposit_fee::handler(ctx, coin, tile_id, amount)
    }

    pub fn pending(ctx: Context<Pending>, coin: Pubkey, tile_id: u8) -> Result<u64> {
        instructions::pending::handler(ctx, coin, tile_id)
    }

    pub fn claim(ctx: Context<Claim>, coin: Pubkey, tile_id: u8) -> Result<()> {
        instructions::claim::handler(ctx, coin, tile_id)
    }
}
