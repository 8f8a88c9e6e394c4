//! Token registry handlers.
//!
//! Two indexes are kept in lockstep: `TOKENS_BY_SOURCE` (token source ->
//! local reference) and `TOKENS` (local reference -> descriptor).

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::hash::bytes_to_hex;
use crate::state::{TokenInfo, CONFIG, TOKENS, TOKENS_BY_SOURCE};
use crate::token::TokenType;
use crate::wire::parse_token_source;

/// Register a bridgeable token.
pub fn execute_add_token(
    deps: DepsMut,
    info: MessageInfo,
    token_source: Binary,
    token: String,
    token_type: TokenType,
    min_fee: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotAllowed);
    }

    let source = parse_token_source(&token_source)?;
    token_type.validate_local(deps.api, &token)?;

    if TOKENS_BY_SOURCE.has(deps.storage, &source) || TOKENS.has(deps.storage, &token) {
        return Err(ContractError::TokenExists);
    }

    let precision = token_type.bind(&token).decimals(&deps.querier)?;

    let token_info = TokenInfo {
        token: token.clone(),
        token_source: Binary::from(source.to_vec()),
        token_type,
        precision,
        min_fee,
    };
    TOKENS_BY_SOURCE.save(deps.storage, &source, &token)?;
    TOKENS.save(deps.storage, &token, &token_info)?;

    Ok(Response::new()
        .add_attribute("method", "add_token")
        .add_attribute("token", token)
        .add_attribute("token_source", bytes_to_hex(&source))
        .add_attribute("token_type", token_type.code().to_string())
        .add_attribute("precision", precision.to_string())
        .add_attribute("min_fee", min_fee.to_string()))
}

/// Unregister a token and hand everything the bridge holds of it to `new_owner`.
pub fn execute_remove_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_source: Binary,
    token: String,
    new_owner: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotAllowed);
    }

    let registered = TOKENS_BY_SOURCE
        .may_load(deps.storage, token_source.as_slice())?
        .ok_or(ContractError::TokenDoesNotExist)?;
    if registered != token {
        return Err(ContractError::TokenDoesNotExist);
    }
    let token_info = TOKENS
        .may_load(deps.storage, &token)?
        .ok_or(ContractError::TokenDoesNotExist)?;

    let new_owner = deps.api.addr_validate(&new_owner)?;

    TOKENS_BY_SOURCE.remove(deps.storage, token_source.as_slice());
    TOKENS.remove(deps.storage, &token);

    let messages = token_info.token_type.bind(&token).release_msgs(
        &deps.querier,
        &env.contract.address,
        &new_owner,
    )?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "remove_token")
        .add_attribute("token", token)
        .add_attribute("token_source", bytes_to_hex(&token_info.token_source))
        .add_attribute("new_owner", new_owner))
}

pub fn execute_set_token_min_fee(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    min_fee: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotAllowed);
    }

    let mut token_info = TOKENS
        .may_load(deps.storage, &token)?
        .ok_or(ContractError::TokenDoesNotExist)?;
    token_info.min_fee = min_fee;
    TOKENS.save(deps.storage, &token, &token_info)?;

    Ok(Response::new()
        .add_attribute("method", "set_token_min_fee")
        .add_attribute("token", token)
        .add_attribute("min_fee", min_fee.to_string()))
}
