use anchor_lang::prelude::*;

#[event]
pub struct CoinInitializedEvent {
    pub coin: Pubkey,
    pub initial_price: u64,
}

#[event]
pub struct TakeoverEvent {
    pub coin: Pubkey,
    pub tile_id: u8,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
    pub paid: u64,
    pub compensation: u64,
    pub protocol_fee: u64,
    pub new_price: u64,
}

#[event]
pub struct WithdrawEvent {
    pub user: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ProceedsSweptEvent {
    pub authority: Pubkey,
    pub amount: u64,
}
