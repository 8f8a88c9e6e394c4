//! xbridge contract - Entry Points
//!
//! Handlers live in:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError,
    StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::address_codec::validate_hrp;
use crate::error::ContractError;
use crate::execute::{
    execute_add_token, execute_lock, execute_receive, execute_remove_token,
    execute_set_base_fee_rate_bp, execute_set_contract_owner, execute_set_fee_collector,
    execute_set_is_bridge_enabled, execute_set_token_min_fee, execute_set_validator_public_key,
    execute_unlock,
};
use crate::fee_manager::{validate_base_fee_rate, DEFAULT_BASE_FEE_RATE_BP};
use crate::hash::bytes_to_hex;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_base_fee_rate_bp, query_config, query_contract_owner, query_fee_collector,
    query_from_system_precision, query_is_bridge_enabled, query_is_claimed, query_lock,
    query_to_system_precision, query_token_by_source, query_token_native, query_tokens,
    query_validator_public_key,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, VALIDATOR_KEY_SENTINEL};
use crate::wire::parse_own_chain_id;

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    let fee_collector = match msg.fee_collector {
        Some(fee_collector) => deps.api.addr_validate(&fee_collector)?,
        None => owner.clone(),
    };

    let this_chain_id = parse_own_chain_id(&msg.this_chain_id)?;

    if !validate_hrp(&msg.address_prefix) {
        return Err(ContractError::InvalidAddressPrefix {
            prefix: msg.address_prefix,
        });
    }

    let base_fee_rate_bp = msg.base_fee_rate_bp.unwrap_or(DEFAULT_BASE_FEE_RATE_BP);
    validate_base_fee_rate(base_fee_rate_bp)?;

    let config = Config {
        owner,
        fee_collector,
        validator_public_key: Binary::from(VALIDATOR_KEY_SENTINEL.to_vec()),
        base_fee_rate_bp,
        enabled: true,
        this_chain_id: Binary::from(this_chain_id.to_vec()),
        address_prefix: msg.address_prefix,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("fee_collector", config.fee_collector)
        .add_attribute("base_fee_rate_bp", base_fee_rate_bp.to_string())
        .add_attribute("this_chain_id", bytes_to_hex(&this_chain_id)))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::Lock {
            lock_id,
            token,
            amount,
            recipient,
            destination,
        } => execute_lock(
            deps,
            env,
            info,
            lock_id,
            token,
            amount,
            recipient,
            destination,
        ),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::Unlock {
            lock_id,
            recipient,
            system_amount,
            lock_source,
            token,
            signature,
        } => execute_unlock(
            deps,
            env,
            info,
            lock_id,
            recipient,
            system_amount,
            lock_source,
            token,
            signature,
        ),

        // Admin
        ExecuteMsg::SetContractOwner { owner } => execute_set_contract_owner(deps, info, owner),
        ExecuteMsg::SetFeeCollector { fee_collector } => {
            execute_set_fee_collector(deps, info, fee_collector)
        }
        ExecuteMsg::SetValidatorPublicKey { public_key } => {
            execute_set_validator_public_key(deps, info, public_key)
        }
        ExecuteMsg::SetIsBridgeEnabled { enabled } => {
            execute_set_is_bridge_enabled(deps, info, enabled)
        }
        ExecuteMsg::SetBaseFeeRateBp { rate } => execute_set_base_fee_rate_bp(deps, info, rate),

        // Token registry
        ExecuteMsg::AddToken {
            token_source,
            token,
            token_type,
            min_fee,
        } => execute_add_token(deps, info, token_source, token, token_type, min_fee),
        ExecuteMsg::RemoveToken {
            token_source,
            token,
            new_owner,
        } => execute_remove_token(deps, env, info, token_source, token, new_owner),
        ExecuteMsg::SetTokenMinFee { token, min_fee } => {
            execute_set_token_min_fee(deps, info, token, min_fee)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ContractOwner {} => to_json_binary(&query_contract_owner(deps)?),
        QueryMsg::FeeCollector {} => to_json_binary(&query_fee_collector(deps)?),
        QueryMsg::ValidatorPublicKey {} => to_json_binary(&query_validator_public_key(deps)?),
        QueryMsg::IsBridgeEnabled {} => to_json_binary(&query_is_bridge_enabled(deps)?),
        QueryMsg::BaseFeeRateBp {} => to_json_binary(&query_base_fee_rate_bp(deps)?),
        QueryMsg::TokenBySource { token_source } => {
            to_json_binary(&query_token_by_source(deps, token_source)?)
        }
        QueryMsg::TokenNative { token } => to_json_binary(&query_token_native(deps, token)?),
        QueryMsg::Tokens { start_after, limit } => {
            to_json_binary(&query_tokens(deps, start_after, limit)?)
        }
        QueryMsg::ToSystemPrecision { amount, precision } => {
            to_json_binary(&query_to_system_precision(amount, precision)?)
        }
        QueryMsg::FromSystemPrecision { amount, precision } => {
            to_json_binary(&query_from_system_precision(amount, precision)?)
        }
        QueryMsg::Lock { lock_id } => to_json_binary(&query_lock(deps, lock_id)?),
        QueryMsg::IsClaimed {
            lock_source,
            lock_id,
        } => to_json_binary(&query_is_claimed(deps, lock_source, lock_id)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(StdError::generic_err(format!(
            "Cannot migrate from {} to {}",
            stored.contract, CONTRACT_NAME
        ))
        .into());
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
