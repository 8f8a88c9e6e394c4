//! Shared cw-multi-test setup for the xbridge integration tests.

#![allow(dead_code)]

use cosmwasm_std::{coins, Addr, Binary, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

use xbridge::address_codec::encode_bech32_address;
use xbridge::msg::{ExecuteMsg, InstantiateMsg};
use xbridge::{unlock_message_hash, TokenType};

// ============================================================================
// Fixtures
// ============================================================================

pub const DENOM: &str = "uluna";
pub const PREFIX: &str = "terra";

pub const THIS_CHAIN_ID: [u8; 4] = [0x53, 0x54, 0x4b, 0x53];
pub const CHAIN_OTHER: [u8; 4] = [0x11, 0x22, 0x33, 0x44];
pub const LOCK_SOURCE: [u8; 4] = [0x33, 0x44, 0x55, 0x00];

pub const TOKEN_SOURCE_ADDRESS: &str =
    "0000000000000000000000006d78de7b0625dfbfc16c3a8a5735f6dc3dc3f2ce";
pub const TOKEN_SOURCE_ADDRESS_1: &str =
    "1133334455667788990011223344556677889900112233445566778899001122";
pub const LOCK_RECIPIENT: &str =
    "1122334455667788990011223344556677889900112233445566778899001122";
pub const UNLOCK_RECIPIENT: &str = "99e2ec69ac5b6e67b4e26edd0e2c1c1a6b9bbd23";

pub const VALIDATOR_SECRET: [u8; 32] = [0x5a; 32];
pub const IMPOSTOR_SECRET: [u8; 32] = [0x17; 32];

pub const INITIAL_BALANCE: u128 = 200_000_000_000_000;

pub fn lock_id(version: u8, nonce: u8) -> Binary {
    let mut id = vec![0u8; 16];
    id[0] = version;
    id[15] = nonce;
    Binary::from(id)
}

pub fn token_source(chain: [u8; 4], address_hex: &str) -> Binary {
    let mut source = chain.to_vec();
    source.extend(hex::decode(address_hex).unwrap());
    Binary::from(source)
}

pub fn default_token_source() -> Binary {
    token_source(CHAIN_OTHER, TOKEN_SOURCE_ADDRESS)
}

pub fn lock_recipient() -> Binary {
    Binary::from(hex::decode(LOCK_RECIPIENT).unwrap())
}

pub fn unlock_recipient() -> Binary {
    Binary::from(hex::decode(UNLOCK_RECIPIENT).unwrap())
}

/// Local address the bridge derives from [`UNLOCK_RECIPIENT`]
pub fn unlock_recipient_addr() -> Addr {
    let raw: [u8; 20] = hex::decode(UNLOCK_RECIPIENT).unwrap().try_into().unwrap();
    Addr::unchecked(encode_bech32_address(&raw, PREFIX).unwrap())
}

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        xbridge::contract::execute,
        xbridge::contract::instantiate,
        xbridge::contract::query,
    )
    .with_migrate(xbridge::contract::migrate);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub bridge: Addr,
    pub owner: Addr,
    pub user: Addr,
    pub relayer: Addr,
    pub fee_collector: Addr,
    cw20_code_id: u64,
}

pub fn setup() -> Suite {
    let mut app = App::default();

    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");
    let relayer = Addr::unchecked("terra1relayer");
    let fee_collector = Addr::unchecked("terra1feecollector");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &owner, coins(INITIAL_BALANCE, DENOM))
            .unwrap();
        router
            .bank
            .init_balance(storage, &user, coins(INITIAL_BALANCE, DENOM))
            .unwrap();
    });

    let code_id = app.store_code(contract_bridge());
    let cw20_code_id = app.store_code(contract_cw20());

    let bridge = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: None,
                fee_collector: Some(fee_collector.to_string()),
                this_chain_id: Binary::from(THIS_CHAIN_ID.to_vec()),
                address_prefix: PREFIX.to_string(),
                base_fee_rate_bp: None,
            },
            &[],
            "xbridge",
            Some(owner.to_string()),
        )
        .unwrap();

    Suite {
        app,
        bridge,
        owner,
        user,
        relayer,
        fee_collector,
        cw20_code_id,
    }
}

impl Suite {
    /// cw20 token with `decimals`, `initial` units for the user and the bridge as minter
    pub fn create_cw20(&mut self, symbol: &str, decimals: u8, initial: u128) -> Addr {
        self.create_cw20_with_minter(symbol, decimals, initial, self.bridge.clone())
    }

    pub fn create_cw20_with_minter(
        &mut self,
        symbol: &str,
        decimals: u8,
        initial: u128,
        minter: Addr,
    ) -> Addr {
        self.app
            .instantiate_contract(
                self.cw20_code_id,
                self.owner.clone(),
                &cw20_base::msg::InstantiateMsg {
                    name: format!("{} Token", symbol),
                    symbol: symbol.to_string(),
                    decimals,
                    initial_balances: vec![Cw20Coin {
                        address: self.user.to_string(),
                        amount: Uint128::new(initial),
                    }],
                    mint: Some(MinterResponse {
                        minter: minter.to_string(),
                        cap: None,
                    }),
                    marketing: None,
                },
                &[],
                symbol,
                None,
            )
            .unwrap()
    }

    pub fn execute(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.bridge.clone(), msg, &[])
    }

    pub fn add_token(
        &mut self,
        token_source: Binary,
        token: &str,
        token_type: TokenType,
        min_fee: u128,
    ) -> anyhow::Result<AppResponse> {
        let owner = self.owner.clone();
        self.execute(
            &owner,
            &ExecuteMsg::AddToken {
                token_source,
                token: token.to_string(),
                token_type,
                min_fee: Uint128::new(min_fee),
            },
        )
    }

    pub fn set_validator(&mut self, secret: [u8; 32]) {
        let owner = self.owner.clone();
        self.execute(
            &owner,
            &ExecuteMsg::SetValidatorPublicKey {
                public_key: validator_public_key(secret),
            },
        )
        .unwrap();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        let owner = self.owner.clone();
        self.execute(&owner, &ExecuteMsg::SetIsBridgeEnabled { enabled })
            .unwrap();
    }

    pub fn bank_balance(&self, addr: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(addr, DENOM)
            .unwrap()
            .amount
            .u128()
    }

    pub fn cw20_balance(&self, token: &Addr, addr: &Addr) -> u128 {
        let response: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        response.balance.u128()
    }

    /// Fund the bridge with base coin so unlocks can pay out
    pub fn fund_bridge(&mut self, amount: u128) {
        let owner = self.owner.clone();
        let bridge = self.bridge.clone();
        self.app
            .send_tokens(owner, bridge, &coins(amount, DENOM))
            .unwrap();
    }
}

// ============================================================================
// Validator Signing
// ============================================================================

pub fn validator_public_key(secret: [u8; 32]) -> Binary {
    let secp = Secp256k1::new();
    let key = SecretKey::from_slice(&secret).unwrap();
    Binary::from(PublicKey::from_secret_key(&secp, &key).serialize().to_vec())
}

/// Sign the canonical unlock message, recovery byte normalized to {0, 1}
pub fn sign_unlock(
    secret: [u8; 32],
    lock_id: &Binary,
    recipient: &Binary,
    system_amount: u128,
    lock_source: &Binary,
    token_source: &Binary,
) -> Binary {
    let hash = unlock_message_hash(
        lock_id.as_slice().try_into().unwrap(),
        recipient.as_slice().try_into().unwrap(),
        system_amount,
        lock_source.as_slice().try_into().unwrap(),
        token_source.as_slice().try_into().unwrap(),
    );

    let secp = Secp256k1::new();
    let key = SecretKey::from_slice(&secret).unwrap();
    let message = Message::from_slice(&hash).unwrap();
    let (recovery_id, compact) = secp
        .sign_ecdsa_recoverable(&message, &key)
        .serialize_compact();

    let mut signature = compact.to_vec();
    signature.push(recovery_id.to_i32() as u8);
    Binary::from(signature)
}
