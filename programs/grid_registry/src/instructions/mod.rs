#![allow(ambiguous_glob_reexports)]

pub mod initialize;
pub mod set_fee_vault;
pub mod update_config;
pub mod init_coin;
pub mod coin_inited;
pub mod get_tile;
pub mod tile_count;
pub mod takeover;
pub mod withdraw;
pub mod sweep_unowned_proceeds;

pub use initialize::*;
pub use set_fee_vault::*;
pub use update_config::*;
pub use init_coin::*;
pub use coin_inited::*;
pub use get_tile::*;
pub use tile_count::*;
pub use takeover::*;
pub use withdraw::*;
pub use sweep_unowned_proceeds::*;
