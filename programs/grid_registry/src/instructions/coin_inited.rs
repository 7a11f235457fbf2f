use anchor_lang::prelude::*;
use crate::state::CoinState;
use crate::utils::load_program_account;

#[derive(Accounts)]
#[instruction(coin: Pubkey)]
pub struct CoinInited<'info> {
    /// CHECK: Address pinned by seeds; may not exist
    #[account(
        seeds = [CoinState::SEED, coin.as_ref()],
        bump
    )]
    pub coin_state: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<CoinInited>, _coin: Pubkey) -> Result<bool> {
    let coin_state: Option<CoinState> =
        load_program_account(&ctx.accounts.coin_state.to_account_info())?;
    Ok(coin_state.is_some_and(|state| state.inited))
}
