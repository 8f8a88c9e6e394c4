//! Fee Manager Module
//!
//! Outbound locks pay a flat percentage of the locked amount, floored at a
//! per-token minimum:
//!
//! | Component      | Source                         |
//! |----------------|--------------------------------|
//! | Base rate      | `Config.base_fee_rate_bp`      |
//! | Minimum fee    | `TokenInfo.min_fee`            |
//!
//! `fee = max(amount * base_fee_rate_bp / 10000, min_fee)`, computed in the
//! token's native precision.

use cosmwasm_std::Uint128;

use crate::error::ContractError;

// ============================================================================
// Constants
// ============================================================================

/// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10000;

/// Base fee rate applied at instantiation (0.1%)
pub const DEFAULT_BASE_FEE_RATE_BP: u32 = 10;

/// Highest accepted base fee rate (100%)
pub const MAX_BASE_FEE_RATE_BP: u32 = 10000;

// ============================================================================
// Fee Calculation
// ============================================================================

/// Fee split of a single lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockFee {
    /// Portion forwarded to the fee collector
    pub fee: Uint128,
    /// Portion kept by the bridge or burned
    pub net: Uint128,
}

/// Calculate fee amount from amount and bps
pub fn calculate_fee_from_bps(amount: Uint128, fee_bps: u32) -> Uint128 {
    amount.multiply_ratio(fee_bps as u128, BPS_DENOMINATOR)
}

/// Split `amount` into fee and net portions.
///
/// Rejects zero amounts and amounts that do not exceed `min_fee`.
pub fn calculate_lock_fee(
    amount: Uint128,
    base_fee_rate_bp: u32,
    min_fee: Uint128,
) -> Result<LockFee, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if amount <= min_fee {
        return Err(ContractError::AmountTooSmall { min_fee });
    }

    let fee = calculate_fee_from_bps(amount, base_fee_rate_bp).max(min_fee);
    let net = amount.checked_sub(fee)?;
    Ok(LockFee { fee, net })
}

/// Validate a base fee rate before storing it
pub fn validate_base_fee_rate(rate: u32) -> Result<(), ContractError> {
    if rate > MAX_BASE_FEE_RATE_BP {
        return Err(ContractError::FeeRateTooHigh {
            rate,
            max: MAX_BASE_FEE_RATE_BP,
        });
    }
    Ok(())
}
