//! Token registration, removal and registry queries.

mod common;

use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::Executor;

use common::*;
use xbridge::msg::{ExecuteMsg, QueryMsg, TokenBySourceResponse, TokenResponse, TokensResponse};
use xbridge::{ContractError, TokenType};

fn token_native(suite: &Suite, token: &str) -> anyhow::Result<TokenResponse> {
    Ok(suite.app.wrap().query_wasm_smart(
        &suite.bridge,
        &QueryMsg::TokenNative {
            token: token.to_string(),
        },
    )?)
}

fn token_by_source(suite: &Suite, token_source: &Binary) -> anyhow::Result<TokenBySourceResponse> {
    Ok(suite.app.wrap().query_wasm_smart(
        &suite.bridge,
        &QueryMsg::TokenBySource {
            token_source: token_source.clone(),
        },
    )?)
}

// ============================================================================
// AddToken
// ============================================================================

#[test]
fn test_add_base_coin() {
    let mut suite = setup();
    let source = default_token_source();

    let res = suite
        .add_token(source.clone(), DENOM, TokenType::BaseCoin, 1000)
        .unwrap();
    let wasm = res.events.iter().find(|e| e.ty == "wasm").unwrap();
    assert!(wasm
        .attributes
        .iter()
        .any(|a| a.key == "token_type" && a.value == "100"));

    let info = token_native(&suite, DENOM).unwrap();
    assert_eq!(
        info,
        TokenResponse {
            token: DENOM.to_string(),
            token_source: source.clone(),
            token_type: TokenType::BaseCoin,
            precision: 6,
            min_fee: Uint128::new(1000),
        }
    );

    let by_source = token_by_source(&suite, &source).unwrap();
    assert_eq!(by_source.token, DENOM);
}

#[test]
fn test_add_cw20_reads_decimals_from_token() {
    let mut suite = setup();
    let foreign = suite.create_cw20("FRGN", 18, 0);
    let wrapped = suite.create_cw20("WRPD", 12, 0);

    suite
        .add_token(
            default_token_source(),
            foreign.as_str(),
            TokenType::NativeForeign,
            1000,
        )
        .unwrap();
    suite
        .add_token(
            token_source(CHAIN_OTHER, TOKEN_SOURCE_ADDRESS_1),
            wrapped.as_str(),
            TokenType::Wrapped,
            5,
        )
        .unwrap();

    let info = token_native(&suite, foreign.as_str()).unwrap();
    assert_eq!(info.token_type, TokenType::NativeForeign);
    assert_eq!(info.precision, 18);

    let info = token_native(&suite, wrapped.as_str()).unwrap();
    assert_eq!(info.token_type, TokenType::Wrapped);
    assert_eq!(info.precision, 12);
    assert_eq!(info.min_fee, Uint128::new(5));
}

#[test]
fn test_add_token_rejects_duplicates() {
    let mut suite = setup();
    let token = suite.create_cw20("WRPD", 6, 0);
    suite
        .add_token(default_token_source(), DENOM, TokenType::BaseCoin, 1000)
        .unwrap();

    // same source, different token
    let err = suite
        .add_token(
            default_token_source(),
            token.as_str(),
            TokenType::Wrapped,
            1000,
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        ContractError::TokenExists.to_string()
    );

    // same token, different source
    let err = suite
        .add_token(
            token_source(CHAIN_OTHER, TOKEN_SOURCE_ADDRESS_1),
            DENOM,
            TokenType::BaseCoin,
            1000,
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        ContractError::TokenExists.to_string()
    );

    // original mapping is untouched
    assert_eq!(token_by_source(&suite, &default_token_source()).unwrap().token, DENOM);
    assert!(token_native(&suite, token.as_str()).is_err());
}

#[test]
fn test_add_token_rejects_bad_token_source() {
    let mut suite = setup();
    let source = default_token_source().to_vec();
    let expected = ContractError::WrongTokenSource { expected: 36 }.to_string();

    let short = Binary::from(source[..35].to_vec());
    let err = suite
        .add_token(short, DENOM, TokenType::BaseCoin, 1000)
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), expected);

    let mut long = source.clone();
    long.push(0x75);
    let err = suite
        .add_token(Binary::from(long), DENOM, TokenType::BaseCoin, 1000)
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), expected);

    let zero_chain = token_source([0, 0, 0, 0], TOKEN_SOURCE_ADDRESS);
    let err = suite
        .add_token(zero_chain, DENOM, TokenType::BaseCoin, 1000)
        .unwrap_err();
    assert_eq!(err.root_cause().to_string(), expected);
}

#[test]
fn test_add_token_rejects_bad_local_reference() {
    let mut suite = setup();

    let err = suite
        .add_token(default_token_source(), "1luna", TokenType::BaseCoin, 1000)
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .starts_with("Wrong token address"));

    let err = suite
        .add_token(default_token_source(), "ab", TokenType::Wrapped, 1000)
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .starts_with("Wrong token address"));

    // a valid address without a cw20 behind it has no decimals to read
    let err = suite.add_token(
        default_token_source(),
        "terra1nocontract",
        TokenType::NativeForeign,
        1000,
    );
    assert!(err.is_err());
    assert!(token_by_source(&suite, &default_token_source()).is_err());
}

// ============================================================================
// RemoveToken
// ============================================================================

#[test]
fn test_remove_base_coin_sweeps_balance() {
    let mut suite = setup();
    let owner = suite.owner.clone();
    let new_owner = Addr::unchecked("terra1newowner");
    suite
        .add_token(default_token_source(), DENOM, TokenType::BaseCoin, 1000)
        .unwrap();
    suite.fund_bridge(5_000_000);

    suite
        .execute(
            &owner,
            &ExecuteMsg::RemoveToken {
                token_source: default_token_source(),
                token: DENOM.to_string(),
                new_owner: new_owner.to_string(),
            },
        )
        .unwrap();

    let bridge = suite.bridge.clone();
    assert_eq!(suite.bank_balance(&bridge), 0);
    assert_eq!(suite.bank_balance(&new_owner), 5_000_000);

    assert!(token_native(&suite, DENOM).is_err());
    assert!(token_by_source(&suite, &default_token_source()).is_err());

    // the source can be registered again afterwards
    suite
        .add_token(default_token_source(), DENOM, TokenType::BaseCoin, 1000)
        .unwrap();
}

#[test]
fn test_remove_cw20_hands_over_balance_and_minter() {
    let mut suite = setup();
    let owner = suite.owner.clone();
    let user = suite.user.clone();
    let bridge = suite.bridge.clone();
    let new_owner = Addr::unchecked("terra1newowner");

    let token = suite.create_cw20("WRPD", 6, 1_000_000);
    suite
        .add_token(default_token_source(), token.as_str(), TokenType::Wrapped, 1000)
        .unwrap();
    suite
        .app
        .execute_contract(
            user,
            token.clone(),
            &Cw20ExecuteMsg::Transfer {
                recipient: bridge.to_string(),
                amount: Uint128::new(400_000),
            },
            &[],
        )
        .unwrap();

    suite
        .execute(
            &owner,
            &ExecuteMsg::RemoveToken {
                token_source: default_token_source(),
                token: token.to_string(),
                new_owner: new_owner.to_string(),
            },
        )
        .unwrap();

    assert_eq!(suite.cw20_balance(&token, &bridge), 0);
    assert_eq!(suite.cw20_balance(&token, &new_owner), 400_000);

    let minter: Option<MinterResponse> = suite
        .app
        .wrap()
        .query_wasm_smart(&token, &Cw20QueryMsg::Minter {})
        .unwrap();
    assert_eq!(minter.unwrap().minter, new_owner.to_string());
}

#[test]
fn test_remove_cw20_minted_elsewhere_keeps_minter() {
    let mut suite = setup();
    let owner = suite.owner.clone();
    let new_owner = Addr::unchecked("terra1newowner");

    let token = suite.create_cw20_with_minter("FRGN", 6, 0, owner.clone());
    suite
        .add_token(
            default_token_source(),
            token.as_str(),
            TokenType::NativeForeign,
            1000,
        )
        .unwrap();
    suite
        .execute(
            &owner,
            &ExecuteMsg::RemoveToken {
                token_source: default_token_source(),
                token: token.to_string(),
                new_owner: new_owner.to_string(),
            },
        )
        .unwrap();

    let minter: Option<MinterResponse> = suite
        .app
        .wrap()
        .query_wasm_smart(&token, &Cw20QueryMsg::Minter {})
        .unwrap();
    assert_eq!(minter.unwrap().minter, owner.to_string());
}

#[test]
fn test_remove_token_requires_matching_pair() {
    let mut suite = setup();
    let owner = suite.owner.clone();
    suite
        .add_token(default_token_source(), DENOM, TokenType::BaseCoin, 1000)
        .unwrap();

    let cases = [
        (default_token_source(), "uother"),
        (token_source(CHAIN_OTHER, TOKEN_SOURCE_ADDRESS_1), DENOM),
    ];
    for (source, token) in cases {
        let err = suite
            .execute(
                &owner,
                &ExecuteMsg::RemoveToken {
                    token_source: source,
                    token: token.to_string(),
                    new_owner: owner.to_string(),
                },
            )
            .unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            ContractError::TokenDoesNotExist.to_string()
        );
    }

    assert_eq!(token_native(&suite, DENOM).unwrap().token, DENOM);
}

// ============================================================================
// SetTokenMinFee
// ============================================================================

#[test]
fn test_set_token_min_fee() {
    let mut suite = setup();
    let owner = suite.owner.clone();

    let err = suite
        .execute(
            &owner,
            &ExecuteMsg::SetTokenMinFee {
                token: DENOM.to_string(),
                min_fee: Uint128::new(7),
            },
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        ContractError::TokenDoesNotExist.to_string()
    );

    suite
        .add_token(default_token_source(), DENOM, TokenType::BaseCoin, 1000)
        .unwrap();
    suite
        .execute(
            &owner,
            &ExecuteMsg::SetTokenMinFee {
                token: DENOM.to_string(),
                min_fee: Uint128::new(7),
            },
        )
        .unwrap();

    assert_eq!(token_native(&suite, DENOM).unwrap().min_fee, Uint128::new(7));
}

// ============================================================================
// Tokens query
// ============================================================================

#[test]
fn test_tokens_pagination() {
    let mut suite = setup();
    let first = suite.create_cw20("AAA", 6, 0);
    let second = suite.create_cw20("BBB", 8, 0);

    suite
        .add_token(default_token_source(), DENOM, TokenType::BaseCoin, 1000)
        .unwrap();
    suite
        .add_token(
            token_source(CHAIN_OTHER, TOKEN_SOURCE_ADDRESS_1),
            first.as_str(),
            TokenType::Wrapped,
            1000,
        )
        .unwrap();
    suite
        .add_token(
            token_source(LOCK_SOURCE, TOKEN_SOURCE_ADDRESS),
            second.as_str(),
            TokenType::NativeForeign,
            1000,
        )
        .unwrap();

    let all: TokensResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::Tokens {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    let mut expected = vec![DENOM.to_string(), first.to_string(), second.to_string()];
    expected.sort();
    let names: Vec<String> = all.tokens.iter().map(|t| t.token.clone()).collect();
    assert_eq!(names, expected);

    let page: TokensResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::Tokens {
                start_after: Some(expected[0].clone()),
                limit: Some(1),
            },
        )
        .unwrap();
    assert_eq!(page.tokens.len(), 1);
    assert_eq!(page.tokens[0].token, expected[1]);
}
