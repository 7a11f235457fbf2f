use anchor_lang::prelude::*;
use crate::errors::GridError;
use crate::utils::{escalate_price, split_price};

/// Keep `owner` as the first field: the fee vault reads it at a fixed offset.
#[account]
#[derive(InitSpace)]
pub struct Tile {
    /// Current owner, `Pubkey::default()` while unowned
    pub owner: Pubkey,
    /// Lamports required for the next takeover
    pub price: u64,
    pub coin: Pubkey,
    pub tile_id: u8,
    pub opened: bool,
    pub bump: u8,
}

/// Read view of a tile
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileView {
    pub owner: Pubkey,
    pub price: u64,
}

/// Outcome of one takeover, before any lamports move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TakeoverSettlement {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub paid: u64,
    pub compensation: u64,
    pub protocol_fee: u64,
    pub new_price: u64,
}

impl Tile {
    pub const SEED: &'static [u8] = b"tile";

    /// Materialize a fresh tile at the coin's initial price. No-op once open.
    pub fn open(&mut self, coin: Pubkey, tile_id: u8, initial_price: u64, bump: u8) {
        if self.opened {
            return;
        }
        self.owner = Pubkey::default();
        self.price = initial_price;
        self.coin = coin;
        self.tile_id = tile_id;
        self.opened = true;
        self.bump = bump;
    }

    pub fn view(&self) -> TileView {
        TileView {
            owner: self.owner,
            price: self.price,
        }
    }

    pub fn take_over(&mut self, buyer: Pubkey, payment: u64) -> Result<TakeoverSettlement> {
        let price = self.price;
        require!(payment >= price, GridError::InsufficientPayment);

        let (compensation, protocol_fee) = split_price(price)?;
        let new_price = escalate_price(price)?;

        let previous_owner = self.owner;
        self.owner = buyer;
        self.price = new_price;

        Ok(TakeoverSettlement {
            previous_owner,
            new_owner: buyer,
            paid: price,
            compensation,
            protocol_fee,
            new_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn fresh(initial_price: u64) -> Tile {
        let mut tile = Tile {
            owner: Pubkey::default(),
            price: 0,
            coin: Pubkey::default(),
            tile_id: 0,
            opened: false,
            bump: 0,
        };
        tile.open(Pubkey::new_unique(), 5, initial_price, 250);
        tile
    }

    #[test]
    fn test_open_only_once() {
        let mut tile = fresh(1_000_000);
        tile.take_over(Pubkey::new_unique(), 1_000_000).unwrap();
        let coin = tile.coin;
        tile.open(coin, 5, 1_000_000, 250);
        assert_eq!(tile.price, 1_100_000);
        assert!(tile.owner != Pubkey::default());
    }

    #[test]
    fn test_first_takeover_from_unowned() {
        let mut tile = fresh(1_000_000);
        let buyer = Pubkey::new_unique();
        let settlement = tile.take_over(buyer, 1_000_000).unwrap();

        assert_eq!(settlement.previous_owner, Pubkey::default());
        assert_eq!(settlement.paid, 1_000_000);
        assert_eq!(settlement.compensation, 900_000);
        assert_eq!(settlement.protocol_fee, 100_000);
        assert_eq!(settlement.new_price, 1_100_000);
        assert_eq!(tile.view(), TileView { owner: buyer, price: 1_100_000 });
    }

    #[test]
    fn test_overpayment_charges_price_only() {
        let mut tile = fresh(1_000_000);
        let settlement = tile.take_over(Pubkey::new_unique(), 5_000_000).unwrap();
        assert_eq!(settlement.paid, 1_000_000);
        assert_eq!(settlement.compensation + settlement.protocol_fee, 1_000_000);
    }

    #[test]
    fn test_underpayment_leaves_tile() {
        let mut tile = fresh(1_000_000);
        let owner = Pubkey::new_unique();
        tile.take_over(owner, 1_000_000).unwrap();

        let err = tile.take_over(Pubkey::new_unique(), 1_000_000).unwrap_err();
        assert_eq!(err, Error::from(GridError::InsufficientPayment));
        assert_eq!(tile.view(), TileView { owner, price: 1_100_000 });

        // Paying the standing price still works
        let settlement = tile.take_over(Pubkey::new_unique(), 1_100_000).unwrap();
        assert_eq!(settlement.previous_owner, owner);
        assert_eq!(settlement.compensation, 990_000);
    }

    #[test]
    fn test_overflowing_price_rejected() {
        let mut tile = fresh(u64::MAX);
        let err = tile.take_over(Pubkey::new_unique(), u64::MAX).unwrap_err();
        assert_eq!(err, Error::from(GridError::Overflow));
        assert_eq!(tile.owner, Pubkey::default());
        assert_eq!(tile.price, u64::MAX);
    }
}
