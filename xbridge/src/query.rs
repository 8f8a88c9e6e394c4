//! Query handlers for the xbridge contract.

use cosmwasm_std::{Addr, Binary, Deps, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{ConfigResponse, TokenBySourceResponse, TokenResponse, TokensResponse};
use crate::precision::{from_system_precision, to_system_precision};
use crate::state::{
    LockInfo, TokenInfo, UnlockInfo, CONFIG, LOCKS, TOKENS, TOKENS_BY_SOURCE, UNLOCKS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

fn not_found(err: ContractError) -> StdError {
    StdError::generic_err(err.to_string())
}

// ============================================================================
// Configuration
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        fee_collector: config.fee_collector,
        validator_public_key: config.validator_public_key,
        base_fee_rate_bp: config.base_fee_rate_bp,
        enabled: config.enabled,
        this_chain_id: config.this_chain_id,
        address_prefix: config.address_prefix,
    })
}

pub fn query_contract_owner(deps: Deps) -> StdResult<Addr> {
    Ok(CONFIG.load(deps.storage)?.owner)
}

pub fn query_fee_collector(deps: Deps) -> StdResult<Addr> {
    Ok(CONFIG.load(deps.storage)?.fee_collector)
}

pub fn query_validator_public_key(deps: Deps) -> StdResult<Binary> {
    Ok(CONFIG.load(deps.storage)?.validator_public_key)
}

pub fn query_is_bridge_enabled(deps: Deps) -> StdResult<bool> {
    Ok(CONFIG.load(deps.storage)?.enabled)
}

pub fn query_base_fee_rate_bp(deps: Deps) -> StdResult<u32> {
    Ok(CONFIG.load(deps.storage)?.base_fee_rate_bp)
}

// ============================================================================
// Token Registry
// ============================================================================

pub fn query_token_by_source(
    deps: Deps,
    token_source: Binary,
) -> StdResult<TokenBySourceResponse> {
    let token = TOKENS_BY_SOURCE
        .may_load(deps.storage, token_source.as_slice())?
        .ok_or_else(|| not_found(ContractError::TokenDoesNotExist))?;
    Ok(TokenBySourceResponse { token })
}

pub fn query_token_native(deps: Deps, token: String) -> StdResult<TokenResponse> {
    TOKENS
        .may_load(deps.storage, &token)?
        .map(token_response)
        .ok_or_else(|| not_found(ContractError::TokenDoesNotExist))
}

pub fn query_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, info)| token_response(info)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

fn token_response(info: TokenInfo) -> TokenResponse {
    TokenResponse {
        token: info.token,
        token_source: info.token_source,
        token_type: info.token_type,
        precision: info.precision,
        min_fee: info.min_fee,
    }
}

// ============================================================================
// Precision
// ============================================================================

pub fn query_to_system_precision(amount: Uint128, precision: u8) -> StdResult<Uint128> {
    to_system_precision(amount, precision)
}

pub fn query_from_system_precision(amount: Uint128, precision: u8) -> StdResult<Uint128> {
    from_system_precision(amount, precision)
}

// ============================================================================
// Transfer Records
// ============================================================================

pub fn query_lock(deps: Deps, lock_id: Binary) -> StdResult<LockInfo> {
    LOCKS.load(deps.storage, lock_id.as_slice())
}

/// Unlock record for `(lock_source, lock_id)`; unknown keys are a not-found error.
pub fn query_is_claimed(
    deps: Deps,
    lock_source: Binary,
    lock_id: Binary,
) -> StdResult<UnlockInfo> {
    UNLOCKS.load(deps.storage, (lock_source.as_slice(), lock_id.as_slice()))
}
