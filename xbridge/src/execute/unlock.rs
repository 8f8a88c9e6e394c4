//! Inbound transfer handler.
//!
//! An unlock is keyed by `(lock_source, lock_id)` and succeeds at most once.
//! The validator signs the canonical message built in [`crate::hash`]; the
//! recipient's 20 raw bytes are rendered with the configured bech32 prefix.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::address_codec::encode_bech32_address;
use crate::error::ContractError;
use crate::hash::{bytes_to_hex, unlock_message_hash};
use crate::precision::from_system_precision;
use crate::signature::verify_validator_signature;
use crate::state::{UnlockInfo, CONFIG, TOKENS, UNLOCKS};
use crate::wire::{parse_local_recipient, parse_lock_id, parse_lock_source, parse_token_source};

#[allow(clippy::too_many_arguments)]
pub fn execute_unlock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    lock_id: Binary,
    recipient: Binary,
    system_amount: Uint128,
    lock_source: Binary,
    token: String,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.enabled {
        return Err(ContractError::BridgeDisabled);
    }

    let lock_id = parse_lock_id(&lock_id)?;

    if lock_source == config.this_chain_id {
        return Err(ContractError::SameChain);
    }
    let lock_source = parse_lock_source(&lock_source)?;

    let token_info = TOKENS
        .may_load(deps.storage, &token)?
        .ok_or(ContractError::TokenDoesNotExist)?;

    let key = (lock_source.as_slice(), lock_id.as_slice());
    if UNLOCKS.has(deps.storage, key) {
        return Err(ContractError::UnlockExists);
    }

    let raw_recipient = parse_local_recipient(&recipient)?;
    let token_source = parse_token_source(&token_info.token_source)?;
    let message_hash = unlock_message_hash(
        &lock_id,
        &raw_recipient,
        system_amount.u128(),
        &lock_source,
        &token_source,
    );
    verify_validator_signature(
        deps.api,
        &message_hash,
        signature.as_slice(),
        config.validator_public_key.as_slice(),
    )?;

    let amount = from_system_precision(system_amount, token_info.precision)?;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let recipient_addr = deps
        .api
        .addr_validate(&encode_bech32_address(&raw_recipient, &config.address_prefix)?)?;

    let msg = token_info
        .token_type
        .bind(&token)
        .unlock_msg(&recipient_addr, amount)?;

    UNLOCKS.save(
        deps.storage,
        key,
        &UnlockInfo {
            recipient: recipient_addr.clone(),
            token: token.clone(),
            system_amount,
            amount,
            block_height: env.block.height,
        },
    )?;

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("method", "unlock")
        .add_attribute("lock_id", bytes_to_hex(&lock_id))
        .add_attribute("lock_source", bytes_to_hex(&lock_source))
        .add_attribute("recipient", recipient_addr)
        .add_attribute("token", token)
        .add_attribute("amount", amount.to_string())
        .add_attribute("system_amount", system_amount.to_string())
        .add_attribute("relayer", info.sender))
}
