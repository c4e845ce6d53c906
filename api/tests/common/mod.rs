#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use duels_api::prelude::*;
use ethers_core::abi::{encode, Token};
use ethers_core::types::Bytes;
use serde_json::{json, Value};

/// Answers requests from per-method queues and records every call.
#[derive(Default)]
pub struct FakeTransport {
    calls: RefCell<Vec<(String, Value)>>,
    responses: RefCell<HashMap<String, VecDeque<Result<Value, ClientError>>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: &str, response: Result<Value, ClientError>) -> &Self {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn ok(&self, method: &str, value: Value) -> &Self {
        self.respond(method, Ok(value))
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(m, _)| m.clone()).collect()
    }

    pub fn params(&self, method: &str) -> Vec<Value> {
        self.calls
            .borrow()
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
            .collect()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transport for FakeTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ClientError> {
        self.calls.borrow_mut().push((method.to_string(), params));
        self.responses
            .borrow_mut()
            .get_mut(method)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_else(|| Err(ClientError::Transport(format!("unscripted {method}"))))
    }
}

/// Records requested sleeps and returns immediately.
#[derive(Default)]
pub struct InstantTimer {
    slept: RefCell<Vec<Duration>>,
}

impl InstantTimer {
    pub fn slept(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }
}

impl Timer for InstantTimer {
    async fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}

pub type TestClient = ContractClient<FakeTransport, FakeTransport>;

pub fn client() -> TestClient {
    ContractClient::new(
        ClientConfig::default(),
        FakeTransport::new(),
        FakeTransport::new(),
    )
}

/// `eth_call` return data for `tokens`.
pub fn returns(tokens: &[Token]) -> Value {
    json!(Bytes::from(encode(tokens)))
}

pub fn hash(byte: u8) -> H256 {
    H256::repeat_byte(byte)
}

pub fn receipt(tx: H256, status: u64) -> Value {
    json!({
        "transactionHash": tx,
        "blockNumber": "0x1234",
        "status": format!("{status:#x}"),
    })
}

pub fn player() -> Address {
    Address::repeat_byte(0xaa)
}
