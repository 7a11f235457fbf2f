use anchor_lang::prelude::*;
use crate::errors::GridError;

pub const ESCROW_SEED: &[u8] = b"escrow";
pub const FEE_AUTHORITY_SEED: &[u8] = b"fee_authority";

#[account]
#[derive(InitSpace)]
pub struct RegistryConfig {
    pub authority: Pubkey,
    /// Fee vault program; `Pubkey::default()` until configured
    pub fee_vault: Pubkey,
    /// Compensation share of takeovers on unowned tiles, held in escrow for the authority
    pub unowned_proceeds: u64,
    pub bump: u8,
    pub escrow_bump: u8,
    pub fee_authority_bump: u8,
    pub _padding: [u8; 64],
}

impl RegistryConfig {
    pub const SEED: &'static [u8] = b"registry_config";

    pub fn is_vault_configured(&self) -> bool {
        self.fee_vault != Pubkey::default()
    }

    /// Returns true when the vault was newly set, false on an idempotent repeat.
    pub fn set_fee_vault(&mut self, fee_vault: Pubkey) -> Result<bool> {
        require!(fee_vault != Pubkey::default(), GridError::InvalidFeeVault);
        if self.is_vault_configured() {
            require_keys_eq!(self.fee_vault, fee_vault, GridError::VaultAlreadyConfigured);
            return Ok(false);
        }
        self.fee_vault = fee_vault;
        Ok(true)
    }

    pub fn set_authority(&mut self, authority: Pubkey) -> Result<()> {
        require!(authority != Pubkey::default(), GridError::InvalidAuthority);
        self.authority = authority;
        Ok(())
    }

    pub fn record_unowned_proceeds(&mut self, amount: u64) -> Result<()> {
        self.unowned_proceeds = self
            .unowned_proceeds
            .checked_add(amount)
            .ok_or(GridError::Overflow)?;
        Ok(())
    }

    pub fn take_unowned_proceeds(&mut self) -> Result<u64> {
        let amount = self.unowned_proceeds;
        require!(amount > 0, GridError::NothingToWithdraw);
        self.unowned_proceeds = 0;
        Ok(amount)
    }
}
