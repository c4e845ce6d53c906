#![allow(non_snake_case)]

mod common;

use std::cell::RefCell;

use common::*;
use duels_api::prelude::*;
use serde_json::json;

fn join_duel() -> WriteCall {
    WriteCall::JoinDuel {
        duel_id: U256::from(4),
        stake: U256::exp10(15),
    }
}

fn on_chain(client: &TestClient) {
    client
        .wallet()
        .ok("eth_chainId", json!(BASE_SEPOLIA.hex_id()));
}

/// Drives a [`WriteStatus`] through one submission the way the views do.
async fn run(
    client: &TestClient,
    call: &WriteCall,
    timer: &InstantTimer,
    status: &RefCell<WriteStatus>,
    seen: &RefCell<Vec<WriteStatus>>,
) -> Result<H256, ClientError> {
    status.borrow_mut().begin()?;
    seen.borrow_mut().push(status.borrow().clone());
    let result = client
        .submit(Some(player()), call, timer, |hash| {
            status.borrow_mut().submitted(hash);
            seen.borrow_mut().push(status.borrow().clone());
        })
        .await;
    status.borrow_mut().finish(result.clone());
    seen.borrow_mut().push(status.borrow().clone());
    result
}

#[tokio::test]
async fn submit__confirms_after_receipt_appears() {
    // given
    let client = client();
    let timer = InstantTimer::default();
    on_chain(&client);
    client.wallet().ok("eth_sendTransaction", json!(hash(5)));
    client
        .reader()
        .ok("eth_getTransactionReceipt", json!(null))
        .ok("eth_getTransactionReceipt", json!(null))
        .ok("eth_getTransactionReceipt", receipt(hash(5), 1));
    let status = RefCell::new(WriteStatus::default());
    let seen = RefCell::new(Vec::new());

    // when
    let result = run(&client, &join_duel(), &timer, &status, &seen).await;

    // then
    assert_eq!(result, Ok(hash(5)));
    assert_eq!(
        *seen.borrow(),
        vec![
            WriteStatus::Pending,
            WriteStatus::Confirming(hash(5)),
            WriteStatus::Success(hash(5)),
        ]
    );
    assert_eq!(timer.slept(), vec![client.config().receipt_poll; 2]);
    let sent = &client.wallet().params("eth_sendTransaction")[0][0];
    assert_eq!(sent["value"], json!(U256::exp10(15)));
    assert_eq!(sent["to"], json!(CONTRACTS.duel_manager));
}

#[tokio::test]
async fn submit__reverted_receipt_fails_with_hash() {
    // given
    let client = client();
    let timer = InstantTimer::default();
    on_chain(&client);
    client.wallet().ok("eth_sendTransaction", json!(hash(6)));
    client
        .reader()
        .ok("eth_getTransactionReceipt", receipt(hash(6), 0));
    let status = RefCell::new(WriteStatus::default());
    let seen = RefCell::new(Vec::new());

    // when
    let result = run(&client, &join_duel(), &timer, &status, &seen).await;

    // then
    assert_eq!(result, Err(ClientError::Reverted(hash(6))));
    assert_eq!(status.borrow().hash(), Some(hash(6)));
    assert!(!status.borrow().is_busy());
}

#[tokio::test]
async fn submit__user_rejection_never_reaches_confirming() {
    // given
    let client = client();
    let timer = InstantTimer::default();
    on_chain(&client);
    client.wallet().respond(
        "eth_sendTransaction",
        Err(ClientError::from_rpc(4001, "User denied transaction signature")),
    );
    let status = RefCell::new(WriteStatus::default());
    let seen = RefCell::new(Vec::new());

    // when
    let result = run(&client, &join_duel(), &timer, &status, &seen).await;

    // then
    assert_eq!(result, Err(ClientError::UserRejected));
    assert!(!seen.borrow().iter().any(WriteStatus::is_confirming));
    assert_eq!(status.borrow().hash(), None);
    assert_eq!(client.reader().count(), 0);
}

#[tokio::test]
async fn wait_for_receipt__gives_up_after_max_polls() {
    // given
    let config = ClientConfig {
        receipt_max_polls: 3,
        ..ClientConfig::default()
    };
    let client = ContractClient::new(config, FakeTransport::new(), FakeTransport::new());
    for _ in 0..3 {
        client
            .reader()
            .ok("eth_getTransactionReceipt", json!(null));
    }

    // when
    let result = client
        .wait_for_receipt(hash(7), &InstantTimer::default())
        .await;

    // then
    assert_eq!(result, Err(ClientError::ReceiptTimeout(hash(7))));
    assert_eq!(client.reader().count(), 3);
}

#[tokio::test]
async fn settle__waits_then_names_reads_to_refetch() {
    // given
    let client = client();
    let timer = InstantTimer::default();
    let mut cache = QueryCache::new();
    let duel = ReadCall::Duel { id: U256::from(4) };
    let other = ReadCall::Duel { id: U256::from(5) };
    cache.insert(duel.clone(), QueryValue::Number(U256::zero()));
    cache.insert(other.clone(), QueryValue::Number(U256::zero()));

    // when
    let rules = client.settle(&join_duel(), &timer).await;
    cache.invalidate(&rules);

    // then
    assert_eq!(timer.slept(), vec![client.config().settle_delay]);
    assert!(cache.is_stale(&duel));
    assert!(!cache.is_stale(&other));
}

#[tokio::test]
async fn begin__second_submission_while_confirming_is_refused() {
    let mut status = WriteStatus::default();
    status.begin().unwrap();
    status.submitted(hash(8));

    assert_eq!(status.begin(), Err(ClientError::Busy));
}
