#![allow(non_snake_case)]

mod common;

use common::*;
use duels_api::prelude::*;
use ethers_core::abi::Token;
use ethers_core::types::I256;
use ethers_core::utils::id;
use serde_json::json;

fn duel_tokens(opponent: Address, status: u8, winner: Address) -> Vec<Token> {
    vec![Token::Tuple(vec![
        Token::Uint(U256::from(4)),
        Token::Address(player()),
        Token::Address(opponent),
        Token::Uint(U256::exp10(15)),
        Token::Uint(U256::from(1)),
        Token::Uint(U256::from(status)),
        Token::Uint(U256::from(1_700_000_000u64)),
        Token::Uint(U256::from(1_700_259_200u64)),
        Token::Address(winner),
        Token::Uint(U256::from(3)),
        Token::Uint(U256::from(4)),
        Token::Uint(U256::from(1)),
        Token::Uint(U256::from(4)),
    ])]
}

#[tokio::test]
async fn disabled_reads__return_defaults_without_requests() {
    // given
    let client = client();

    // when
    let score = client.user_score(None).await.unwrap();
    let ids = client.user_predictions(None).await.unwrap();
    let prediction = client.prediction(None).await.unwrap();
    let stats = client.user_stats(None).await.unwrap();
    let duel = client.duel(None).await.unwrap();
    let duel_predictions = client
        .duel_predictions(Some(U256::one()), None)
        .await
        .unwrap();

    // then
    assert!(score.is_zero());
    assert!(ids.is_empty());
    assert_eq!(prediction, None);
    assert_eq!(stats, None);
    assert_eq!(duel, None);
    assert!(duel_predictions.is_empty());
    assert_eq!(client.reader().count(), 0);
    assert_eq!(client.wallet().count(), 0);
}

#[tokio::test]
async fn latest_price__calls_oracle_and_decodes() {
    // given
    let client = client();
    client.reader().ok(
        "eth_call",
        returns(&[
            Token::Int(I256::from(312_345_678_900i64).into_raw()),
            Token::Uint(U256::from(8)),
            Token::Uint(U256::from(1_700_000_000u64)),
        ]),
    );

    // when
    let price = client.latest_price(SYMBOL).await.unwrap();

    // then
    assert_eq!(price.display(), "$3123.46");
    assert_eq!(price.timestamp, 1_700_000_000);
    let params = client.reader().params("eth_call");
    assert_eq!(params[0][0]["to"], json!(CONTRACTS.oracle));
    assert_eq!(params[0][1], json!("latest"));
    let data = params[0][0]["data"].as_str().unwrap().to_string();
    assert!(data.starts_with(&format!("0x{}", hex_selector("getLatestPrice(string)"))));
}

#[tokio::test]
async fn leaderboard__skips_empty_slots() {
    // given
    let client = client();
    client.reader().ok(
        "eth_call",
        returns(&[
            Token::Array(vec![
                Token::Address(player()),
                Token::Address(Address::zero()),
                Token::Address(Address::repeat_byte(0xbb)),
            ]),
            Token::Array(vec![
                Token::Uint(U256::from(50)),
                Token::Uint(U256::zero()),
                Token::Uint(U256::from(20)),
            ]),
        ]),
    );

    // when
    let entries = client.leaderboard(LEADERBOARD_LIMIT).await.unwrap();

    // then
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].rank, 2);
    assert_eq!(entries[1].player, Address::repeat_byte(0xbb));
    assert_eq!(entries[0].rank_label(), "🥇");
}

#[tokio::test]
async fn duel__maps_zero_addresses_to_none() {
    // given
    let client = client();
    client.reader().ok(
        "eth_call",
        returns(&duel_tokens(Address::zero(), 0, Address::zero())),
    );

    // when
    let duel = client.duel(Some(U256::from(4))).await.unwrap().unwrap();

    // then
    assert_eq!(duel.opponent, None);
    assert_eq!(duel.winner, None);
    assert_eq!(duel.status, DuelStatus::Open);
    assert_eq!(duel.duration, DuelDuration::ThreeDays);
    assert!(!duel.has_opponent());
}

#[tokio::test]
async fn duel__rejects_unknown_status() {
    let client = client();
    client.reader().ok(
        "eth_call",
        returns(&duel_tokens(Address::zero(), 9, Address::zero())),
    );

    let result = client.duel(Some(U256::from(4))).await;

    assert!(matches!(result, Err(ClientError::Decode { .. })));
}

#[tokio::test]
async fn read__surfaces_rpc_errors() {
    let client = client();
    client.reader().respond(
        "eth_call",
        Err(ClientError::from_rpc(-32000, "execution reverted")),
    );

    let result = client.duel_count().await;

    assert_eq!(result.unwrap_err().rpc_code(), Some(-32000));
}

#[tokio::test]
async fn connect__returns_first_account() {
    // given
    let client = client();
    client
        .wallet()
        .ok("eth_requestAccounts", json!([player(), Address::repeat_byte(1)]));

    // when
    let account = client.connect().await.unwrap();

    // then
    assert_eq!(account, player());
    assert_eq!(client.wallet().methods(), vec!["eth_requestAccounts"]);
}

#[tokio::test]
async fn connect__empty_account_list_is_not_connected() {
    let client = client();
    client.wallet().ok("eth_requestAccounts", json!([]));

    assert_eq!(client.connect().await, Err(ClientError::NotConnected));
}

fn hex_selector(signature: &str) -> String {
    id(signature).iter().map(|b| format!("{b:02x}")).collect()
}
