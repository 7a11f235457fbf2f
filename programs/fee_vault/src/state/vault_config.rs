use anchor_lang::prelude::*;

pub const REWARD_POOL_SEED: &[u8] = b"reward_pool";

/// Seeds the registry uses for its tile accounts and its fee signer.
/// Must stay in step with `grid_registry::state`.
pub const REGISTRY_TILE_SEED: &[u8] = b"tile";
pub const REGISTRY_FEE_AUTHORITY_SEED: &[u8] = b"fee_authority";

#[account]
#[derive(InitSpace)]
pub struct VaultConfig {
    /// Program that owns the tile accounts read at claim time
    pub registry_program: Pubkey,
    /// Registry PDA that must sign every fee deposit
    pub registry_authority: Pubkey,
    pub bump: u8,
    pub pool_bump: u8,
    pub _padding: [u8; 64],
}

impl VaultConfig {
    pub const SEED: &'static [u8] = b"vault_config";

    pub fn registry_authority_for(registry_program: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[REGISTRY_FEE_AUTHORITY_SEED], registry_program).0
    }
}
