//! Conversion between a token's native decimals and the bridge's system precision.
//!
//! Amounts cross chains in system precision so that tokens with different
//! decimals on each side agree on value. Scaling up is exact; scaling down
//! truncates.

use cosmwasm_std::{StdResult, Uint128};

/// Decimals used for every amount signed by the validator or emitted in lock events
pub const SYSTEM_PRECISION: u8 = 9;

/// Scale `amount` from `precision` decimals to system precision.
pub fn to_system_precision(amount: Uint128, precision: u8) -> StdResult<Uint128> {
    rescale(amount, precision, SYSTEM_PRECISION)
}

/// Scale a system-precision `amount` to `precision` decimals.
pub fn from_system_precision(amount: Uint128, precision: u8) -> StdResult<Uint128> {
    rescale(amount, SYSTEM_PRECISION, precision)
}

fn rescale(amount: Uint128, from: u8, to: u8) -> StdResult<Uint128> {
    if from == to {
        return Ok(amount);
    }
    if from < to {
        let factor = pow10(to - from)?;
        Ok(amount.checked_mul(factor)?)
    } else {
        let factor = pow10(from - to)?;
        Ok(amount.checked_div(factor)?)
    }
}

fn pow10(exp: u8) -> StdResult<Uint128> {
    Ok(Uint128::new(10).checked_pow(exp as u32)?)
}
