//! Token kinds the bridge can move.
//!
//! Every registered token is one of three [`TokenType`]s. The type selects a
//! [`BridgeToken`] implementation that produces the bank or cw20 messages for
//! each step of a transfer:
//!
//! | Type             | Local reference | Lock (net)       | Unlock                 |
//! |------------------|-----------------|------------------|------------------------|
//! | `BaseCoin`       | bank denom      | held by bridge   | bank send from bridge  |
//! | `NativeForeign`  | cw20 contract   | burned           | minted                 |
//! | `Wrapped`        | cw20 contract   | burned           | minted                 |
//!
//! The fee portion of a lock always moves to the fee collector unchanged.

use common::AssetInfo;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Api, CosmosMsg, QuerierWrapper, StdError, StdResult, Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse, TokenInfoResponse};

use crate::error::ContractError;

/// Decimals of the chain's base coin denominations (micro units)
pub const BASE_COIN_DECIMALS: u8 = 6;

/// Kind of a registered token
#[cw_serde]
#[derive(Copy, Eq)]
pub enum TokenType {
    /// The chain's own coin, moved through the bank module
    BaseCoin,
    /// cw20 representation of an asset native to another chain, mint/burn
    NativeForeign,
    /// cw20 token minted by the bridge, mint/burn
    Wrapped,
}

impl TokenType {
    /// Protocol code shared with the other side of the bridge
    pub fn code(&self) -> u32 {
        match self {
            TokenType::BaseCoin => 100,
            TokenType::NativeForeign => 200,
            TokenType::Wrapped => 300,
        }
    }

    /// Check that `token` is a well-formed local reference for this type.
    pub fn validate_local(&self, api: &dyn Api, token: &str) -> Result<(), ContractError> {
        match self {
            TokenType::BaseCoin => validate_denom(token),
            TokenType::NativeForeign | TokenType::Wrapped => {
                api.addr_validate(token)
                    .map_err(|e| ContractError::WrongTokenAddress {
                        reason: e.to_string(),
                    })?;
                Ok(())
            }
        }
    }

    /// Bind this type to a stored local reference.
    pub fn bind(&self, token: &str) -> Box<dyn BridgeToken> {
        match self {
            TokenType::BaseCoin => Box::new(BaseCoin {
                asset: AssetInfo::native(token),
            }),
            TokenType::NativeForeign | TokenType::Wrapped => Box::new(MintableCw20 {
                asset: AssetInfo::cw20(Addr::unchecked(token)),
            }),
        }
    }
}

/// How the bridge gets hold of the locked amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Debit<'a> {
    /// Amount already sits in the bridge's balance (attached funds, cw20 send hook)
    Held,
    /// Amount is pulled from `owner` through a cw20 allowance granted to the bridge
    Allowance { owner: &'a Addr },
}

/// Operations the lock, unlock and registry handlers need from a token
pub trait BridgeToken {
    fn asset(&self) -> &AssetInfo;

    /// Native decimals as reported by the token implementation
    fn decimals(&self, querier: &QuerierWrapper) -> StdResult<u8>;

    /// Messages moving `fee` to the collector and taking `net` out of circulation
    fn lock_msgs(
        &self,
        debit: Debit,
        fee_collector: &Addr,
        fee: Uint128,
        net: Uint128,
    ) -> StdResult<Vec<CosmosMsg>>;

    /// Message crediting `amount` to `recipient`
    fn unlock_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg>;

    /// Messages handing the bridge's balance and admin rights to `new_owner`
    fn release_msgs(
        &self,
        querier: &QuerierWrapper,
        bridge: &Addr,
        new_owner: &Addr,
    ) -> StdResult<Vec<CosmosMsg>> {
        let balance = self.asset().query_balance(querier, bridge)?;
        if balance.is_zero() {
            return Ok(vec![]);
        }
        Ok(vec![self.asset().transfer_msg(new_owner, balance)?])
    }
}

pub struct BaseCoin {
    asset: AssetInfo,
}

impl BridgeToken for BaseCoin {
    fn asset(&self) -> &AssetInfo {
        &self.asset
    }

    fn decimals(&self, _querier: &QuerierWrapper) -> StdResult<u8> {
        Ok(BASE_COIN_DECIMALS)
    }

    fn lock_msgs(
        &self,
        debit: Debit,
        fee_collector: &Addr,
        fee: Uint128,
        _net: Uint128,
    ) -> StdResult<Vec<CosmosMsg>> {
        if debit != Debit::Held {
            return Err(StdError::generic_err(
                "bank coins must be attached to the lock",
            ));
        }
        if fee.is_zero() {
            return Ok(vec![]);
        }
        Ok(vec![self.asset.transfer_msg(fee_collector, fee)?])
    }

    fn unlock_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.asset.transfer_msg(recipient, amount)
    }
}

pub struct MintableCw20 {
    asset: AssetInfo,
}

impl MintableCw20 {
    fn contract_addr(&self) -> StdResult<&Addr> {
        match &self.asset {
            AssetInfo::Cw20 { contract_addr } => Ok(contract_addr),
            AssetInfo::Native { denom } => Err(StdError::generic_err(format!(
                "{} is not a cw20 token",
                denom
            ))),
        }
    }

    fn execute(&self, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.contract_addr()?.to_string(),
            msg: to_json_binary(msg)?,
            funds: vec![],
        }))
    }
}

impl BridgeToken for MintableCw20 {
    fn asset(&self) -> &AssetInfo {
        &self.asset
    }

    fn decimals(&self, querier: &QuerierWrapper) -> StdResult<u8> {
        let info: TokenInfoResponse =
            querier.query_wasm_smart(self.contract_addr()?, &Cw20QueryMsg::TokenInfo {})?;
        Ok(info.decimals)
    }

    fn lock_msgs(
        &self,
        debit: Debit,
        fee_collector: &Addr,
        fee: Uint128,
        net: Uint128,
    ) -> StdResult<Vec<CosmosMsg>> {
        let mut messages = vec![];
        match debit {
            Debit::Held => {
                if !fee.is_zero() {
                    messages.push(self.execute(&Cw20ExecuteMsg::Transfer {
                        recipient: fee_collector.to_string(),
                        amount: fee,
                    })?);
                }
                if !net.is_zero() {
                    messages.push(self.execute(&Cw20ExecuteMsg::Burn { amount: net })?);
                }
            }
            Debit::Allowance { owner } => {
                if !fee.is_zero() {
                    messages.push(self.execute(&Cw20ExecuteMsg::TransferFrom {
                        owner: owner.to_string(),
                        recipient: fee_collector.to_string(),
                        amount: fee,
                    })?);
                }
                if !net.is_zero() {
                    messages.push(self.execute(&Cw20ExecuteMsg::BurnFrom {
                        owner: owner.to_string(),
                        amount: net,
                    })?);
                }
            }
        }
        Ok(messages)
    }

    fn unlock_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.execute(&Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })
    }

    fn release_msgs(
        &self,
        querier: &QuerierWrapper,
        bridge: &Addr,
        new_owner: &Addr,
    ) -> StdResult<Vec<CosmosMsg>> {
        let mut messages = vec![];

        let balance = self.asset.query_balance(querier, bridge)?;
        if !balance.is_zero() {
            messages.push(self.asset.transfer_msg(new_owner, balance)?);
        }

        let minter: Option<MinterResponse> =
            querier.query_wasm_smart(self.contract_addr()?, &Cw20QueryMsg::Minter {})?;
        if matches!(minter, Some(m) if m.minter == bridge.as_str()) {
            messages.push(self.execute(&Cw20ExecuteMsg::UpdateMinter {
                new_minter: Some(new_owner.to_string()),
            })?);
        }

        Ok(messages)
    }
}

fn validate_denom(denom: &str) -> Result<(), ContractError> {
    let invalid = |reason: &str| ContractError::WrongTokenAddress {
        reason: format!("denom {}: {}", denom, reason),
    };
    if !(3..=128).contains(&denom.len()) {
        return Err(invalid("length must be between 3 and 128"));
    }
    if !denom.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(invalid("must start with a letter"));
    }
    if !denom
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
    {
        return Err(invalid("contains invalid characters"));
    }
    Ok(())
}
