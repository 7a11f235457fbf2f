use anchor_lang::prelude::*;

#[error_code]
pub enum FeeVaultError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Tile id out of range")]
    InvalidTileId,

    #[msg("Deposit amount must be positive")]
    ZeroDeposit,

    #[msg("Caller does not own this tile")]
    NotOwner,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Account is not a registry tile")]
    InvalidRegistryTile,

    #[msg("Arithmetic overflow")]
    Overflow,
}
