//! Message types for the xbridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::state::{LockInfo, UnlockInfo};
use crate::token::TokenType;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Contract owner (defaults to the instantiator)
    pub owner: Option<String>,
    /// Fee collector (defaults to the owner)
    pub fee_collector: Option<String>,
    /// This chain's 4-byte bridge chain id
    pub this_chain_id: Binary,
    /// Bech32 prefix of local accounts, used to render unlock recipients
    pub address_prefix: String,
    /// Initial base fee rate in basis points (defaults to 10)
    pub base_fee_rate_bp: Option<u32>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Lock tokens for release on another chain.
    ///
    /// Authorization: Anyone
    ///
    /// Base coins must be attached as funds (exactly `amount` of `token`).
    /// cw20 tokens are pulled through an allowance of at least `amount`
    /// granted to the bridge.
    Lock {
        /// 16-byte lock id, version byte first
        lock_id: Binary,
        /// Local token reference (denom or cw20 address)
        token: String,
        amount: Uint128,
        /// 32-byte account on the destination chain
        recipient: Binary,
        /// 4-byte destination chain id
        destination: Binary,
    },

    /// cw20 send hook, carrying a [`ReceiveMsg`]
    Receive(cw20::Cw20ReceiveMsg),

    /// Release or mint tokens authorized by the validator.
    ///
    /// Authorization: Anyone holding a valid validator signature
    Unlock {
        /// Lock id issued on the source chain
        lock_id: Binary,
        /// 20-byte local account
        recipient: Binary,
        /// Amount in system precision
        system_amount: Uint128,
        /// 4-byte chain id where the lock happened
        lock_source: Binary,
        /// Local token reference
        token: String,
        /// 65-byte secp256k1 signature over the canonical unlock message
        signature: Binary,
    },

    // ========================================================================
    // Admin (owner only)
    // ========================================================================
    SetContractOwner { owner: String },
    SetFeeCollector { fee_collector: String },
    /// 33-byte compressed secp256k1 key
    SetValidatorPublicKey { public_key: Binary },
    SetIsBridgeEnabled { enabled: bool },
    SetBaseFeeRateBp { rate: u32 },

    // ========================================================================
    // Token Registry (owner only)
    // ========================================================================
    /// Register a token. Precision is read from the token itself.
    AddToken {
        /// 4-byte origin chain id followed by the 32-byte origin address
        token_source: Binary,
        token: String,
        token_type: TokenType,
        min_fee: Uint128,
    },
    /// Unregister a token, sweeping the bridge's balance and any minter
    /// rights to `new_owner`
    RemoveToken {
        token_source: Binary,
        token: String,
        new_owner: String,
    },
    SetTokenMinFee { token: String, min_fee: Uint128 },
}

/// cw20 receive hook message
#[cw_serde]
pub enum ReceiveMsg {
    /// Lock the sent amount; the sending cw20 contract is the token
    Lock {
        lock_id: Binary,
        recipient: Binary,
        destination: Binary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // ========================================================================
    // Configuration
    // ========================================================================
    #[returns(ConfigResponse)]
    Config {},

    #[returns(Addr)]
    ContractOwner {},

    #[returns(Addr)]
    FeeCollector {},

    #[returns(Binary)]
    ValidatorPublicKey {},

    #[returns(bool)]
    IsBridgeEnabled {},

    #[returns(u32)]
    BaseFeeRateBp {},

    // ========================================================================
    // Token Registry
    // ========================================================================
    /// Local token registered for a token source
    #[returns(TokenBySourceResponse)]
    TokenBySource { token_source: Binary },

    /// Descriptor of a local token
    #[returns(TokenResponse)]
    TokenNative { token: String },

    /// Registered tokens ordered by local reference
    #[returns(TokensResponse)]
    Tokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    // ========================================================================
    // Precision
    // ========================================================================
    #[returns(Uint128)]
    ToSystemPrecision { amount: Uint128, precision: u8 },

    #[returns(Uint128)]
    FromSystemPrecision { amount: Uint128, precision: u8 },

    // ========================================================================
    // Transfer Records
    // ========================================================================
    /// Executed lock by id
    #[returns(LockInfo)]
    Lock { lock_id: Binary },

    /// Executed unlock by (lock source, lock id); errors when unknown
    #[returns(UnlockInfo)]
    IsClaimed { lock_source: Binary, lock_id: Binary },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub fee_collector: Addr,
    pub validator_public_key: Binary,
    pub base_fee_rate_bp: u32,
    pub enabled: bool,
    pub this_chain_id: Binary,
    pub address_prefix: String,
}

#[cw_serde]
pub struct TokenBySourceResponse {
    pub token: String,
}

#[cw_serde]
pub struct TokenResponse {
    pub token: String,
    pub token_source: Binary,
    pub token_type: TokenType,
    pub precision: u8,
    pub min_fee: Uint128,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<TokenResponse>,
}
