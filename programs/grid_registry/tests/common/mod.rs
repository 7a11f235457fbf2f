//! In-memory replay of the registry and vault instructions.
//!
//! Each method mirrors one instruction handler and calls the same state
//! methods the handler does. It works on copies of the touched accounts and
//! commits them only when every step succeeded, the way a transaction either
//! lands whole or rolls back.

#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use fee_vault::errors::FeeVaultError;
use fee_vault::state::TileRewards;
use fee_vault::utils::read_tile_owner;
use grid_registry::errors::GridError;
use grid_registry::state::{
    credit_compensation, CoinState, CompensationRoute, OwnerBalance, RegistryConfig,
    TakeoverSettlement, Tile, TileView, TILE_COUNT,
};

pub struct Market {
    pub coin: Pubkey,
    pub config: RegistryConfig,
    pub coin_state: CoinState,
    pub tiles: HashMap<u8, Tile>,
    pub balances: HashMap<Pubkey, OwnerBalance>,
    pub rewards: HashMap<u8, TileRewards>,
}

impl Market {
    /// Registry with a configured vault and one coin initialized.
    pub fn new(initial_price: u64) -> Self {
        let mut market = Self::unconfigured();
        market.config.set_fee_vault(fee_vault::ID).unwrap();
        market.init_coin(initial_price).unwrap();
        market
    }

    pub fn unconfigured() -> Self {
        Self {
            coin: Pubkey::new_unique(),
            config: RegistryConfig {
                authority: Pubkey::new_unique(),
                fee_vault: Pubkey::default(),
                unowned_proceeds: 0,
                bump: 255,
                escrow_bump: 255,
                fee_authority_bump: 255,
                _padding: [0u8; 64],
            },
            coin_state: CoinState {
                coin: Pubkey::default(),
                initial_price: 0,
                inited: false,
                bump: 0,
            },
            tiles: HashMap::new(),
            balances: HashMap::new(),
            rewards: HashMap::new(),
        }
    }

    pub fn init_coin(&mut self, initial_price: u64) -> Result<()> {
        let mut coin_state = self.coin_state.clone();
        coin_state.initialize(self.coin, initial_price, 254)?;
        self.coin_state = coin_state;
        Ok(())
    }

    pub fn get_tile(&self, tile_id: u8) -> Result<TileView> {
        require!(tile_id < TILE_COUNT, GridError::InvalidTileId);
        require!(self.coin_state.inited, GridError::NotInitialized);

        Ok(self.tiles.get(&tile_id).map(Tile::view).unwrap_or(TileView {
            owner: Pubkey::default(),
            price: self.coin_state.initial_price,
        }))
    }

    /// Takeover the way a well-behaved client sends it: the displaced owner's
    /// ledger is supplied exactly when the tile has an owner other than the buyer.
    pub fn takeover(
        &mut self,
        buyer: Pubkey,
        tile_id: u8,
        payment: u64,
    ) -> Result<TakeoverSettlement> {
        let owner = self.tiles.get(&tile_id).map_or(Pubkey::default(), |tile| tile.owner);
        let ledger_of = (owner != Pubkey::default() && owner != buyer).then_some(owner);
        self.takeover_supplying(buyer, tile_id, payment, ledger_of)
    }

    /// Takeover with an explicit choice of `previous_owner_balance` account.
    pub fn takeover_supplying(
        &mut self,
        buyer: Pubkey,
        tile_id: u8,
        payment: u64,
        ledger_of: Option<Pubkey>,
    ) -> Result<TakeoverSettlement> {
        require!(self.config.is_vault_configured(), GridError::VaultNotConfigured);
        require!(tile_id < TILE_COUNT, GridError::InvalidTileId);
        require!(self.coin_state.inited, GridError::NotInitialized);

        // Optional accounts that were never created fail account loading
        let mut supplied = match ledger_of {
            Some(owner) => Some(
                self.balances
                    .get(&owner)
                    .cloned()
                    .ok_or(ErrorCode::AccountNotInitialized)?,
            ),
            None => None,
        };

        let mut config = self.config.clone();
        let mut tile = self.tiles.get(&tile_id).cloned().unwrap_or_else(blank_tile);
        let mut buyer_balance = self
            .balances
            .get(&buyer)
            .cloned()
            .unwrap_or_else(blank_balance);
        let mut rewards = self
            .rewards
            .get(&tile_id)
            .cloned()
            .unwrap_or_else(blank_rewards);

        tile.open(self.coin, tile_id, self.coin_state.initial_price, 253);
        let settlement = tile.take_over(buyer, payment)?;
        buyer_balance.open(buyer, 252);

        let route = credit_compensation(
            &settlement,
            &mut config,
            &mut buyer_balance,
            supplied.as_mut(),
        )?;

        rewards.bind(self.coin, tile_id, 251);
        rewards.deposit(settlement.protocol_fee)?;

        self.config = config;
        self.tiles.insert(tile_id, tile);
        self.balances.insert(buyer, buyer_balance);
        if route == CompensationRoute::PreviousOwner {
            if let Some(balance) = supplied {
                self.balances.insert(balance.owner, balance);
            }
        }
        self.rewards.insert(tile_id, rewards);
        Ok(settlement)
    }

    pub fn withdraw(&mut self, user: Pubkey) -> Result<u64> {
        let balance = self
            .balances
            .get_mut(&user)
            .ok_or(GridError::NothingToWithdraw)?;
        balance.take_withdrawable()
    }

    pub fn withdrawable(&self, user: Pubkey) -> u64 {
        self.balances.get(&user).map_or(0, |balance| balance.withdrawable)
    }

    pub fn pending(&self, tile_id: u8) -> u64 {
        self.rewards.get(&tile_id).map_or(0, |rewards| rewards.pending)
    }

    /// Owner is read from the serialized tile account, as the vault does on chain.
    pub fn claim(&mut self, claimer: Pubkey, tile_id: u8) -> Result<u64> {
        let owner = match self.tiles.get(&tile_id) {
            Some(tile) => {
                let mut data = Vec::new();
                tile.try_serialize(&mut data)?;
                read_tile_owner(&data)?
            }
            None => Pubkey::default(),
        };
        require_keys_eq!(owner, claimer, FeeVaultError::NotOwner);

        let rewards = self
            .rewards
            .get_mut(&tile_id)
            .ok_or(FeeVaultError::NothingToClaim)?;
        rewards.take_pending()
    }
}

fn blank_tile() -> Tile {
    Tile {
        owner: Pubkey::default(),
        price: 0,
        coin: Pubkey::default(),
        tile_id: 0,
        opened: false,
        bump: 0,
    }
}

fn blank_balance() -> OwnerBalance {
    OwnerBalance {
        owner: Pubkey::default(),
        withdrawable: 0,
        total_compensated: 0,
        total_withdrawn: 0,
        bump: 0,
    }
}

fn blank_rewards() -> TileRewards {
    TileRewards {
        coin: Pubkey::default(),
        tile_id: 0,
        pending: 0,
        total_deposited: 0,
        total_claimed: 0,
        bump: 0,
    }
}
