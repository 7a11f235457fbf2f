use anchor_lang::prelude::*;
use crate::errors::GridError;
use crate::state::{RegistryConfig, TakeoverSettlement};

/// Withdrawable buyout compensation of one address
#[account]
#[derive(InitSpace)]
pub struct OwnerBalance {
    pub owner: Pubkey,
    pub withdrawable: u64,
    pub total_compensated: u64,
    pub total_withdrawn: u64,
    pub bump: u8,
}

impl OwnerBalance {
    pub const SEED: &'static [u8] = b"balance";

    pub fn open(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.bump = bump;
        }
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        let withdrawable = self.withdrawable.checked_add(amount).ok_or(GridError::Overflow)?;
        let total_compensated = self
            .total_compensated
            .checked_add(amount)
            .ok_or(GridError::Overflow)?;
        self.withdrawable = withdrawable;
        self.total_compensated = total_compensated;
        Ok(())
    }

    /// Zeroes the balance and returns it; the caller pays out afterwards.
    pub fn take_withdrawable(&mut self) -> Result<u64> {
        let amount = self.withdrawable;
        require!(amount > 0, GridError::NothingToWithdraw);
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(GridError::Overflow)?;
        self.withdrawable = 0;
        Ok(amount)
    }
}

/// Where the compensation share of a takeover was credited
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompensationRoute {
    /// Tile had no owner; accrues to the registry's unowned proceeds
    UnownedProceeds,
    /// Buyer already held the tile
    Buyer,
    /// Displaced owner's ledger
    PreviousOwner,
}

/// Credit a takeover's compensation to the right ledger.
///
/// `previous_owner_balance` is the caller-supplied ledger. It must be absent
/// when the tile was unowned or already the buyer's, and must belong to the
/// displaced owner otherwise. Nothing is mutated when the routing is rejected.
pub fn credit_compensation(
    settlement: &TakeoverSettlement,
    config: &mut RegistryConfig,
    buyer_balance: &mut OwnerBalance,
    previous_owner_balance: Option<&mut OwnerBalance>,
) -> Result<CompensationRoute> {
    let previous_owner = settlement.previous_owner;
    let amount = settlement.compensation;

    if previous_owner == Pubkey::default() {
        require!(previous_owner_balance.is_none(), GridError::PreviousOwnerMismatch);
        config.record_unowned_proceeds(amount)?;
        return Ok(CompensationRoute::UnownedProceeds);
    }

    if previous_owner == settlement.new_owner {
        require!(previous_owner_balance.is_none(), GridError::PreviousOwnerMismatch);
        buyer_balance.credit(amount)?;
        return Ok(CompensationRoute::Buyer);
    }

    let balance = previous_owner_balance.ok_or(GridError::PreviousOwnerMismatch)?;
    require_keys_eq!(balance.owner, previous_owner, GridError::PreviousOwnerMismatch);
    balance.credit(amount)?;
    Ok(CompensationRoute::PreviousOwner)
}
