pub mod vault_config;
pub mod tile_rewards;

pub use vault_config::*;
pub use tile_rewards::*;
