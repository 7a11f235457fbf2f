use anchor_lang::prelude::*;

#[error_code]
pub enum GridError {
    #[msg("Coin is already initialized")]
    AlreadyInitialized,

    #[msg("Coin is not initialized")]
    NotInitialized,

    #[msg("Tile id out of range")]
    InvalidTileId,

    #[msg("Initial price must be positive")]
    InvalidPrice,

    #[msg("Payment is below the tile price")]
    InsufficientPayment,

    #[msg("Fee vault not configured")]
    VaultNotConfigured,

    #[msg("Fee vault is already configured")]
    VaultAlreadyConfigured,

    #[msg("Invalid fee vault address")]
    InvalidFeeVault,

    #[msg("Fee vault program does not match configuration")]
    VaultMismatch,

    #[msg("Previous owner balance does not match the tile owner")]
    PreviousOwnerMismatch,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Authority must not be the default address")]
    InvalidAuthority,

    #[msg("Arithmetic overflow")]
    Overflow,
}
