//! Error types for the xbridge contract
//!
//! Protocol errors carry a stable numeric code (see [`ContractError::code`]).
//! The code is also the suffix of the message, so relayers can read it from
//! the failed transaction log.

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization & Bridge State
    // ========================================================================

    #[error("Not allowed: only the contract owner can perform this action (code 10002)")]
    NotAllowed,

    #[error("Bridge is disabled (code 777)")]
    BridgeDisabled,

    // ========================================================================
    // Token Registry
    // ========================================================================

    #[error("Token already exists (code 10000)")]
    TokenExists,

    #[error("Token does not exist (code 10001)")]
    TokenDoesNotExist,

    #[error("Wrong token source: expected {expected} bytes, non-zero chain id (code 10015)")]
    WrongTokenSource { expected: usize },

    #[error("Wrong token address: {reason} (code 10016)")]
    WrongTokenAddress { reason: String },

    // ========================================================================
    // Lock / Unlock Validation
    // ========================================================================

    #[error("Amount must be greater than zero (code 10003)")]
    ZeroAmount,

    #[error("Amount is too small: must exceed minimum fee {min_fee} (code 10004)")]
    AmountTooSmall { min_fee: Uint128 },

    #[error("Lock id already exists (code 10006)")]
    LockIdExists,

    #[error("Unlock already exists (code 10008)")]
    UnlockExists,

    #[error("Wrong lock id version (code 10007)")]
    WrongVersion,

    #[error("Source and destination chain are the same (code 20001)")]
    SameChain,

    #[error("Wrong recipient: expected {expected} bytes, got {got} (code 10009)")]
    WrongRecipient { expected: usize, got: usize },

    #[error("Wrong destination: expected {expected} bytes, got {got} (code 10010)")]
    WrongDestination { expected: usize, got: usize },

    #[error("Wrong lock source: expected {expected} bytes, got {got} (code 10011)")]
    WrongLockSource { expected: usize, got: usize },

    #[error("Wrong signature (code 10012)")]
    WrongSignature,

    // ========================================================================
    // Funds & Configuration
    // ========================================================================

    #[error("Attached funds do not match: expected {expected}{denom}")]
    FundsMismatch { expected: Uint128, denom: String },

    #[error("Base fee rate {rate} exceeds maximum {max} bp")]
    FeeRateTooHigh { rate: u32, max: u32 },

    #[error("Wrong public key: expected {expected} bytes, got {got}")]
    WrongPublicKey { expected: usize, got: usize },

    #[error("Invalid chain id: {reason}")]
    InvalidChainId { reason: String },

    #[error("Invalid address prefix: {prefix}")]
    InvalidAddressPrefix { prefix: String },
}

impl ContractError {
    /// Numeric protocol code shared with off-chain relayers.
    ///
    /// Errors that are not part of the bridge protocol (host errors,
    /// instantiation problems) return `None`.
    pub fn code(&self) -> Option<u32> {
        let code = match self {
            ContractError::BridgeDisabled => 777,
            ContractError::TokenExists => 10000,
            ContractError::TokenDoesNotExist => 10001,
            ContractError::NotAllowed => 10002,
            ContractError::ZeroAmount => 10003,
            ContractError::AmountTooSmall { .. } => 10004,
            ContractError::LockIdExists => 10006,
            ContractError::WrongVersion => 10007,
            ContractError::UnlockExists => 10008,
            ContractError::WrongRecipient { .. } => 10009,
            ContractError::WrongDestination { .. } => 10010,
            ContractError::WrongLockSource { .. } => 10011,
            ContractError::WrongSignature => 10012,
            ContractError::WrongTokenSource { .. } => 10015,
            ContractError::WrongTokenAddress { .. } => 10016,
            ContractError::SameChain => 20001,
            _ => return None,
        };
        Some(code)
    }
}
