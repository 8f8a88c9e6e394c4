//! Outbound transfer handlers (Lock and Receive).
//!
//! Both entry points funnel into [`lock`], which runs the checks in a fixed
//! order so that the first failing precondition decides the error.

use cosmwasm_std::{from_json, Addr, Binary, Coin, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::fee_manager::calculate_lock_fee;
use crate::hash::bytes_to_hex;
use crate::msg::ReceiveMsg;
use crate::precision::{from_system_precision, to_system_precision};
use crate::state::{LockInfo, CONFIG, LOCKS, TOKENS};
use crate::token::{Debit, TokenType};
use crate::wire::{parse_destination, parse_foreign_recipient, parse_lock_id};

/// How the locked amount reaches the bridge
enum Payment<'a> {
    /// `Lock` message: bank funds attached, or a cw20 allowance for cw20 kinds
    Direct(&'a [Coin]),
    /// cw20 send hook: the amount already sits in the bridge's balance
    Received,
}

struct LockRequest {
    sender: Addr,
    lock_id: Binary,
    token: String,
    amount: Uint128,
    recipient: Binary,
    destination: Binary,
}

/// Execute handler for `ExecuteMsg::Lock`
#[allow(clippy::too_many_arguments)]
pub fn execute_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    lock_id: Binary,
    token: String,
    amount: Uint128,
    recipient: Binary,
    destination: Binary,
) -> Result<Response, ContractError> {
    let request = LockRequest {
        sender: info.sender,
        lock_id,
        token,
        amount,
        recipient,
        destination,
    };
    lock(deps, env, request, Payment::Direct(&info.funds))
}

/// Execute handler for receiving cw20 tokens to lock
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;

    match from_json(&cw20_msg.msg)? {
        ReceiveMsg::Lock {
            lock_id,
            recipient,
            destination,
        } => {
            let request = LockRequest {
                sender,
                lock_id,
                token: info.sender.to_string(),
                amount: cw20_msg.amount,
                recipient,
                destination,
            };
            lock(deps, env, request, Payment::Received)
        }
    }
}

fn lock(
    deps: DepsMut,
    env: Env,
    request: LockRequest,
    payment: Payment,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.enabled {
        return Err(ContractError::BridgeDisabled);
    }

    let lock_id = parse_lock_id(&request.lock_id)?;
    if LOCKS.has(deps.storage, &lock_id) {
        return Err(ContractError::LockIdExists);
    }

    let token_info = TOKENS
        .may_load(deps.storage, &request.token)?
        .ok_or(ContractError::TokenDoesNotExist)?;

    if request.destination == config.this_chain_id {
        return Err(ContractError::SameChain);
    }
    let recipient = parse_foreign_recipient(&request.recipient)?;
    let destination = parse_destination(&request.destination)?;

    let split = calculate_lock_fee(
        request.amount,
        config.base_fee_rate_bp,
        token_info.min_fee,
    )?;
    let system_amount = to_system_precision(split.net, token_info.precision)?;
    if system_amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    // Sub-unit dust that cannot be relayed is charged as fee.
    let net = from_system_precision(system_amount, token_info.precision)?;
    let fee = split.fee.checked_add(split.net.checked_sub(net)?)?;

    let debit = match (payment, token_info.token_type) {
        (Payment::Direct(funds), TokenType::BaseCoin) => {
            let attached = [Coin {
                denom: request.token.clone(),
                amount: request.amount,
            }];
            if funds != attached.as_slice() {
                return Err(ContractError::FundsMismatch {
                    expected: request.amount,
                    denom: request.token,
                });
            }
            Debit::Held
        }
        (Payment::Direct(funds), _) => {
            if !funds.is_empty() {
                return Err(ContractError::FundsMismatch {
                    expected: Uint128::zero(),
                    denom: funds[0].denom.clone(),
                });
            }
            Debit::Allowance {
                owner: &request.sender,
            }
        }
        (Payment::Received, TokenType::BaseCoin) => return Err(ContractError::TokenDoesNotExist),
        (Payment::Received, _) => Debit::Held,
    };

    let messages = token_info.token_type.bind(&request.token).lock_msgs(
        debit,
        &config.fee_collector,
        fee,
        net,
    )?;

    LOCKS.save(
        deps.storage,
        &lock_id,
        &LockInfo {
            sender: request.sender.clone(),
            token: request.token.clone(),
            token_source: token_info.token_source.clone(),
            recipient: request.recipient.clone(),
            destination: request.destination.clone(),
            amount: net,
            fee,
            system_amount,
            block_height: env.block.height,
        },
    )?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "lock")
        .add_attribute("lock_id", bytes_to_hex(&lock_id))
        .add_attribute("sender", request.sender)
        .add_attribute("token", request.token)
        .add_attribute("token_source", bytes_to_hex(&token_info.token_source))
        .add_attribute("recipient", bytes_to_hex(&recipient))
        .add_attribute("destination", bytes_to_hex(&destination))
        .add_attribute("amount", net.to_string())
        .add_attribute("fee", fee.to_string())
        .add_attribute("system_amount", system_amount.to_string()))
}
