use anchor_lang::prelude::*;
use crate::errors::FeeVaultError;

#[account]
#[derive(InitSpace)]
pub struct TileRewards {
    pub coin: Pubkey,
    pub tile_id: u8,
    /// Claimable by whoever owns the tile when `claim` runs
    pub pending: u64,
    pub total_deposited: u64,
    pub total_claimed: u64,
    pub bump: u8,
}

impl TileRewards {
    pub const SEED: &'static [u8] = b"rewards";

    pub fn bind(&mut self, coin: Pubkey, tile_id: u8, bump: u8) {
        self.coin = coin;
        self.tile_id = tile_id;
        self.bump = bump;
    }

    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, FeeVaultError::ZeroDeposit);
        let pending = self.pending.checked_add(amount).ok_or(FeeVaultError::Overflow)?;
        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(FeeVaultError::Overflow)?;
        self.pending = pending;
        self.total_deposited = total_deposited;
        Ok(())
    }

    /// Zeroes the pool and returns what it held.
    pub fn take_pending(&mut self) -> Result<u64> {
        let amount = self.pending;
        require!(amount > 0, FeeVaultError::NothingToClaim);
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(FeeVaultError::Overflow)?;
        self.pending = 0;
        Ok(amount)
    }
}
