use anchor_lang::prelude::*;
use crate::state::{RegistryConfig, CoinState};
use crate::errors::GridError;
use crate::events::CoinInitializedEvent;

#[derive(Accounts)]
#[instruction(coin: Pubkey)]
pub struct InitCoin<'info> {
    #[account(
        mut,
        constraint = authority.key() == registry_config.authority @ GridError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        seeds = [RegistryConfig::SEED],
        bump = registry_config.bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// Created on the first call; a second call finds `inited` set and fails
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + CoinState::INIT_SPACE,
        seeds = [CoinState::SEED, coin.as_ref()],
        bump
    )]
    pub coin_state: Account<'info, CoinState>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitCoin>, coin: Pubkey, initial_price: u64) -> Result<()> {
    let coin_state = &mut ctx.accounts.coin_state;
    coin_state.initialize(coin, initial_price, ctx.bumps.coin_state)?;

    emit!(CoinInitializedEvent {
        coin,
        initial_price,
    });

    msg!("Coin {} initialized, initial tile price {}", coin, initial_price);
    Ok(())
}
