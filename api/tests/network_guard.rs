#![allow(non_snake_case)]

mod common;

use common::*;
use duels_api::prelude::*;
use serde_json::json;

const MAINNET: &str = "0x1";

fn make_prediction() -> WriteCall {
    WriteCall::MakePrediction {
        symbol: SYMBOL.to_string(),
        predicted_higher: true,
    }
}

#[tokio::test]
async fn send__on_required_chain_goes_straight_to_wallet() {
    // given
    let client = client();
    client
        .wallet()
        .ok("eth_chainId", json!(BASE_SEPOLIA.hex_id()))
        .ok("eth_sendTransaction", json!(hash(1)));

    // when
    let tx = client.send(Some(player()), &make_prediction()).await.unwrap();

    // then
    assert_eq!(tx, hash(1));
    assert_eq!(
        client.wallet().methods(),
        vec!["eth_chainId", "eth_sendTransaction"]
    );
    let params = client.wallet().params("eth_sendTransaction");
    assert_eq!(params[0][0]["to"], json!(CONTRACTS.prediction_game));
    assert_eq!(params[0][0]["from"], json!(player()));
    assert!(params[0][0].get("value").is_none());
}

#[tokio::test]
async fn send__switches_before_submitting() {
    // given
    let client = client();
    client
        .wallet()
        .ok("eth_chainId", json!(MAINNET))
        .ok("wallet_switchEthereumChain", json!(null))
        .ok("eth_sendTransaction", json!(hash(2)));

    // when
    client.send(Some(player()), &make_prediction()).await.unwrap();

    // then
    assert_eq!(
        client.wallet().methods(),
        vec!["eth_chainId", "wallet_switchEthereumChain", "eth_sendTransaction"]
    );
    assert_eq!(
        client.wallet().params("wallet_switchEthereumChain")[0],
        json!([{ "chainId": "0x14a34" }])
    );
}

#[tokio::test]
async fn send__rejected_switch_never_submits() {
    // given
    let client = client();
    client
        .wallet()
        .ok("eth_chainId", json!(MAINNET))
        .respond(
            "wallet_switchEthereumChain",
            Err(ClientError::from_rpc(4001, "User rejected the request.")),
        );

    // when
    let result = client.send(Some(player()), &make_prediction()).await;

    // then
    let error = result.unwrap_err();
    assert!(matches!(error, ClientError::WrongNetwork { .. }));
    assert!(error.to_string().contains("Base Sepolia"));
    assert!(!client
        .wallet()
        .methods()
        .contains(&"eth_sendTransaction".to_string()));
}

#[tokio::test]
async fn send__unknown_chain_is_added_then_submitted() {
    // given
    let client = client();
    client
        .wallet()
        .ok("eth_chainId", json!(MAINNET))
        .respond(
            "wallet_switchEthereumChain",
            Err(ClientError::from_rpc(4902, "Unrecognized chain ID")),
        )
        .ok("wallet_addEthereumChain", json!(null))
        .ok("eth_sendTransaction", json!(hash(3)));

    // when
    let tx = client.send(Some(player()), &make_prediction()).await.unwrap();

    // then
    assert_eq!(tx, hash(3));
    let added = &client.wallet().params("wallet_addEthereumChain")[0][0];
    assert_eq!(added["chainName"], json!("Base Sepolia"));
    assert_eq!(added["rpcUrls"][0], json!(BASE_SEPOLIA.rpc_url));
    assert_eq!(added["nativeCurrency"]["decimals"], json!(18));
}

#[tokio::test]
async fn send__without_account_touches_nothing() {
    let client = client();

    let result = client.send(None, &make_prediction()).await;

    assert_eq!(result, Err(ClientError::NotConnected));
    assert_eq!(client.wallet().count(), 0);
}

#[tokio::test]
async fn status__reports_current_chain() {
    let client = client();
    client.wallet().ok("eth_chainId", json!(MAINNET));

    let status = client.guard().status().await.unwrap();

    assert_eq!(status, NetworkStatus::Incorrect { current: 1 });
}
