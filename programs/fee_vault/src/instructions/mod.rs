#![allow(ambiguous_glob_reexports)]

pub mod initialize;
pub mod deposit_fee;
pub mod pending;
pub mod claim;

pub use initialize::*;
pub use deposit_fee::*;
pub use pending::*;
pub use claim::*;
