//! State definitions for the xbridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

use crate::token::TokenType;

/// Contract name for migration
pub const CONTRACT_NAME: &str = "crates.io:xbridge";
/// Contract version for migration
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validator key stored until the owner registers a real one; matches no signer
pub const VALIDATOR_KEY_SENTINEL: [u8; 1] = [0x00];

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Principal allowed to change configuration and the token registry
    pub owner: Addr,
    /// Receives the fee portion of every lock
    pub fee_collector: Addr,
    /// Compressed secp256k1 key whose signature authorizes unlocks
    pub validator_public_key: Binary,
    /// Base fee rate in basis points
    pub base_fee_rate_bp: u32,
    /// Gate on lock and unlock
    pub enabled: bool,
    /// This chain's 4-byte bridge chain id
    pub this_chain_id: Binary,
    /// Bech32 prefix used to render unlock recipients
    pub address_prefix: String,
}

// ============================================================================
// Token Registry
// ============================================================================

/// Registered bridgeable token
#[cw_serde]
pub struct TokenInfo {
    /// Local reference: bank denom or cw20 contract address
    pub token: String,
    /// Origin chain id followed by origin address (36 bytes)
    pub token_source: Binary,
    pub token_type: TokenType,
    /// Native decimals, read from the token at registration
    pub precision: u8,
    /// Minimum fee in native precision
    pub min_fee: Uint128,
}

// ============================================================================
// Transfer Records
// ============================================================================

/// Executed outbound lock
#[cw_serde]
pub struct LockInfo {
    pub sender: Addr,
    pub token: String,
    pub token_source: Binary,
    /// 32-byte account on the destination chain
    pub recipient: Binary,
    pub destination: Binary,
    /// Net amount in native precision (after fee)
    pub amount: Uint128,
    pub fee: Uint128,
    /// Net amount in system precision
    pub system_amount: Uint128,
    pub block_height: u64,
}

/// Executed inbound unlock
#[cw_serde]
pub struct UnlockInfo {
    pub recipient: Addr,
    pub token: String,
    pub system_amount: Uint128,
    /// Credited amount in native precision
    pub amount: Uint128,
    pub block_height: u64,
}

// ============================================================================
// Storage Keys
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// token source bytes -> local token reference
pub const TOKENS_BY_SOURCE: Map<&[u8], String> = Map::new("tokens_by_source");

/// local token reference -> descriptor
pub const TOKENS: Map<&str, TokenInfo> = Map::new("tokens");

/// lock id -> lock record
pub const LOCKS: Map<&[u8], LockInfo> = Map::new("locks");

/// (lock source, lock id) -> unlock record
pub const UNLOCKS: Map<(&[u8], &[u8]), UnlockInfo> = Map::new("unlocks");
