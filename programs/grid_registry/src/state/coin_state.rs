use anchor_lang::prelude::*;
use crate::errors::GridError;

/// Tiles per coin: a 10x10 grid, ids 0..100
#[constant]
pub const TILE_COUNT: u8 = 100;

#[account]
#[derive(InitSpace, Debug)]
pub struct CoinState {
    pub coin: Pubkey,
    /// Price of every tile before its first takeover
    pub initial_price: u64,
    pub inited: bool,
    pub bump: u8,
}

impl CoinState {
    pub const SEED: &'static [u8] = b"coin";

    pub fn initialize(&mut self, coin: Pubkey, initial_price: u64, bump: u8) -> Result<()> {
        require!(!self.inited, GridError::AlreadyInitialized);
        require!(initial_price > 0, GridError::InvalidPrice);

        self.coin = coin;
        self.initial_price = initial_price;
        self.inited = true;
        self.bump = bump;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn blank() -> CoinState {
        CoinState {
            coin: Pubkey::default(),
            initial_price: 0,
            inited: false,
            bump: 0,
        }
    }

    #[test]
    fn test_initialize_once() {
        let coin = Pubkey::new_unique();
        let mut state = blank();
        state.initialize(coin, 1_000_000, 254).unwrap();
        assert!(state.inited);
        assert_eq!(state.initial_price, 1_000_000);

        let err = state.initialize(coin, 5, 254).unwrap_err();
        assert_eq!(err, Error::from(GridError::AlreadyInitialized));
        assert_eq!(state.initial_price, 1_000_000);
    }

    #[test]
    fn test_initialize_zero_price() {
        let mut state = blank();
        let err = state.initialize(Pubkey::new_unique(), 0, 254).unwrap_err();
        assert_eq!(err, Error::from(GridError::InvalidPrice));
        assert!(!state.inited);
    }
}
