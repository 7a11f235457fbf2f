use anchor_lang::prelude::*;
use anchor_lang::system_program;
use crate::state::{RegistryConfig, OwnerBalance, ESCROW_SEED};
use crate::errors::GridError;
use crate::events::WithdrawEvent;
use crate::utils::{load_program_account, store_program_account};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [RegistryConfig::SEED],
        bump = registry_config.bump
    )]
    pub registry_config: Account<'info, RegistryConfig>,

    /// Created on the user's first takeover; a user who never played has none
    /// CHECK: Address pinned by seeds; loaded in the handler
    #[account(
        mut,
        seeds = [OwnerBalance::SEED, user.key().as_ref()],
        bump
    )]
    pub balance: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED],
        bump = registry_config.escrow_bump
    )]
    pub escrow: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let ledger = ctx.accounts.balance.to_account_info();
    let mut balance: OwnerBalance =
        load_program_account(&ledger)?.ok_or(GridError::NothingToWithdraw)?;

    // Zero the ledger before any lamports leave escrow
    let amount = balance.take_withdrawable()?;
    store_program_account(&ledger, &balance)?;

    let bump = ctx.accounts.registry_config.escrow_bump;
    let seeds: &[&[u8]] = &[ESCROW_SEED, &[bump]];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.escrow.to_account_info(),
                to: ctx.accounts.user.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    let user = ctx.accounts.user.key();
    emit!(WithdrawEvent { user, amount });

    msg!("Withdrew {} compensation to {}", amount, user);
    Ok(())
}
