//! Admin operations handlers.
//!
//! Every setter requires the caller to be the current owner and leaves the
//! configuration untouched otherwise.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::fee_manager::validate_base_fee_rate;
use crate::hash::bytes_to_hex;
use crate::state::CONFIG;
use crate::wire::parse_public_key;

/// Hand contract ownership to `owner`.
pub fn execute_set_contract_owner(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotAllowed);
    }

    config.owner = deps.api.addr_validate(&owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_contract_owner")
        .add_attribute("owner", config.owner))
}

pub fn execute_set_fee_collector(
    deps: DepsMut,
    info: MessageInfo,
    fee_collector: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotAllowed);
    }

    config.fee_collector = deps.api.addr_validate(&fee_collector)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_collector")
        .add_attribute("fee_collector", config.fee_collector))
}

/// Register the compressed secp256k1 key that authorizes unlocks.
pub fn execute_set_validator_public_key(
    deps: DepsMut,
    info: MessageInfo,
    public_key: Binary,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotAllowed);
    }

    let key = parse_public_key(&public_key)?;
    config.validator_public_key = Binary::from(key.to_vec());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_validator_public_key")
        .add_attribute("public_key", bytes_to_hex(&key)))
}

pub fn execute_set_is_bridge_enabled(
    deps: DepsMut,
    info: MessageInfo,
    enabled: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotAllowed);
    }

    config.enabled = enabled;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_is_bridge_enabled")
        .add_attribute("enabled", enabled.to_string()))
}

pub fn execute_set_base_fee_rate_bp(
    deps: DepsMut,
    info: MessageInfo,
    rate: u32,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotAllowed);
    }

    validate_base_fee_rate(rate)?;
    config.base_fee_rate_bp = rate;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_base_fee_rate_bp")
        .add_attribute("base_fee_rate_bp", rate.to_string()))
}
