use anchor_lang::prelude::*;

#[event]
pub struct FeeDepositedEvent {
    pub coin: Pubkey,
    pub tile_id: u8,
    pub amount: u64,
    pub pending: u64,
}

#[event]
pub struct ClaimedEvent {
    pub coin: Pubkey,
    pub tile_id: u8,
    pub owner: Pubkey,
    pub amount: u64,
}
