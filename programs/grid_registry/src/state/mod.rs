pub mod registry_config;
pub mod coin_state;
pub mod tile;
pub mod owner_balance;

pub use registry_config::*;
pub use coin_state::*;
pub use tile::*;
pub use owner_balance::*;
