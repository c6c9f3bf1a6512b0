//! Shared types for resolving multi-chain deployment configuration.

pub mod chains;
pub mod errors;
pub mod explorer;
pub mod factory;
pub mod network;

pub use chains::*;
pub use errors::*;
pub use explorer::*;
pub use factory::*;
pub use network::*;

pub use alloy_primitives::{address, bytes, Address, Bytes, U256};
