//! xbridge - Validator-Signed Token Bridge for CosmWasm chains
//!
//! Moves the chain's base coin and cw20 tokens to and from other chains.
//!
//! # Outgoing Flow (Lock)
//! 1. User locks tokens under a caller-chosen 16-byte lock id
//! 2. The fee goes to the fee collector; the rest is held (base coin) or burned (cw20)
//! 3. Relayers observe the lock event and complete the transfer on the destination chain
//!
//! # Incoming Flow (Unlock)
//! 1. The validator signs the canonical unlock message for a foreign lock
//! 2. Anyone submits `Unlock` with that signature
//! 3. The bridge releases base coin or mints cw20 tokens to the recipient
//!
//! # Security
//! - Single validator key, secp256k1 over keccak-256
//! - Exactly-once locks per lock id and unlocks per (lock source, lock id)
//! - Owner-controlled enable switch blocking both directions

pub mod address_codec;
pub mod contract;
pub mod error;
mod execute;
pub mod fee_manager;
pub mod hash;
pub mod msg;
pub mod precision;
mod query;
pub mod signature;
pub mod state;
pub mod token;
pub mod wire;

pub use crate::error::ContractError;
pub use crate::fee_manager::calculate_lock_fee;
pub use crate::hash::{keccak256, unlock_message, unlock_message_hash};
pub use crate::precision::{from_system_precision, to_system_precision, SYSTEM_PRECISION};
pub use crate::token::TokenType;
