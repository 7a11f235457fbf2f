use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::{
    credit_compensation, RegistryConfig, CoinState, Tile, OwnerBalance, ESCROW_SEED,
    FEE_AUTHORITY_SEED, TILE_COUNT,
};
use crate::errors::GridError;
use crate::events::TakeoverEvent;
use crate::utils::load_inited_coin;

#[derive(Accounts)]
#[instruction(coin: Pubkey, tile_id: u8)]
pub struct Takeover<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryConfig::SEED],
        bump = registry_config.bump,
        constraint = registry_config.is_vault_configured() @ GridError::VaultNotConfigured
    )]
    pub registry_config: Box<Account<'info, RegistryConfig>>,

    /// CHECK: Address pinned by seeds; loaded in the handler, may not exist
    #[account(
        seeds = [CoinState::SEED, coin.as_ref()],
        bump
    )]
    pub coin_state: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Tile::INIT_SPACE,
        seeds = [Tile::SEED, coin.as_ref(), &tile_id.to_le_bytes()],
        bump
    )]
    pub tile: Box<Account<'info, Tile>>,

    /// Every buyer gets a ledger entry, so any displaced owner already has one
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + OwnerBalance::INIT_SPACE,
        seeds = [OwnerBalance::SEED, buyer.key().as_ref()],
        bump
    )]
    pub buyer_balance: Box<Account<'info, OwnerBalance>>,

    /// Ledger of the owner being displaced. Omitted when the tile is unowned
    /// or already held by the buyer; checked against the live owner in the handler.
    #[account(mut)]
    pub previous_owner_balance: Option<Account<'info, OwnerBalance>>,

    #[account(
        mut,
        seeds = [ESCROW_SEED],
        bump = registry_config.escrow_bump
    )]
    pub escrow: SystemAccount<'info>,

    /// CHECK: PDA signer for fee deposits, holds no data
    #[account(
        seeds = [FEE_AUTHORITY_SEED],
        bump = registry_config.fee_authority_bump
    )]
    pub fee_authority: UncheckedAccount<'info>,

    /// CHECK: Must be the configured fee vault program
    #[account(
        executable,
        address = registry_config.fee_vault @ GridError::VaultMismatch
    )]
    pub fee_vault_program: UncheckedAccount<'info>,

    /// CHECK: Validated by the fee vault program
    #[account(mut)]
    pub vault_config: UncheckedAccount<'info>,

    /// CHECK: Validated, and created on first deposit, by the fee vault program
    #[account(mut)]
    pub tile_rewards: UncheckedAccount<'info>,

    /// CHECK: Validated by the fee vault program
    #[account(mut)]
    pub reward_pool: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Takeover>, coin: Pubkey, tile_id: u8, payment: u64) -> Result<()> {
    require!(tile_id < TILE_COUNT, GridError::InvalidTileId);
    let coin_state = load_inited_coin(&ctx.accounts.coin_state.to_account_info())?;
    let buyer = ctx.accounts.buyer.key();

    // Price is read here, inside the transaction, never from the caller
    ctx.accounts
        .tile
        .open(coin, tile_id, coin_state.initial_price, ctx.bumps.tile);
    let settlement = ctx.accounts.tile.take_over(buyer, payment)?;
    ctx.accounts.buyer_balance.open(buyer, ctx.bumps.buyer_balance);

    // Credit compensation to a ledger; nothing is pushed to the displaced owner
    let accounts = &mut *ctx.accounts;
    credit_compensation(
        &settlement,
        &mut accounts.registry_config,
        &mut accounts.buyer_balance,
        accounts.previous_owner_balance.as_deref_mut(),
    )?;
    let previous_owner = settlement.previous_owner;

    if settlement.compensation > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.escrow.to_account_info(),
                },
            ),
            settlement.compensation,
        )?;
    }

    // Forward the protocol fee, tagged with (coin, tile_id)
    let bump = ctx.accounts.registry_config.fee_authority_bump;
    let seeds: &[&[u8]] = &[FEE_AUTHORITY_SEED, &[bump]];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    fee_vault::cpi::deposit_fee(
        CpiContext::new_with_signer(
            ctx.accounts.fee_vault_program.to_account_info(),
            fee_vault::cpi::accounts::DepositFee {
                vault_config: ctx.accounts.vault_config.to_account_info(),
                registry_authority: ctx.accounts.fee_authority.to_account_info(),
                payer: ctx.accounts.buyer.to_account_info(),
                tile_rewards: ctx.accounts.tile_rewards.to_account_info(),
                reward_pool: ctx.accounts.reward_pool.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
            },
            signer_seeds,
        ),
        coin,
        tile_id,
        settlement.protocol_fee,
    )?;

    emit!(TakeoverEvent {
        coin,
        tile_id,
        old_owner: previous_owner,
        new_owner: buyer,
        paid: settlement.paid,
        compensation: settlement.compensation,
        protocol_fee: settlement.protocol_fee,
        new_price: settlement.new_price,
    });

    msg!(
        "Tile {} of coin {} taken by {} for {} ({} compensation, {} fee), next price {}",
        tile_id,
        coin,
        buyer,
        settlement.paid,
        settlement.compensation,
        settlement.protocol_fee,
        settlement.new_price
    );

    Ok(())
}
