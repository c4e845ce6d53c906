use std::cell::Cell;
use std::time::Duration;

use duels_api::prelude::*;
use duels_api::rpc::{RpcRequest, RpcResponse};
use serde_json::Value;

/// JSON-RPC over HTTP against the chain's public endpoint.
#[derive(Debug)]
pub struct HttpTransport {
    url: &'static str,
    client: reqwest::Client,
    next_id: Cell<u64>,
}

impl HttpTransport {
    pub fn new(url: &'static str) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
            next_id: Cell::new(1),
        }
    }
}

impl Transport for HttpTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ClientError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let request = RpcRequest::new(id, method, params);

        let response = self
            .client
            .post(self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let rpc_response: RpcResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        rpc_response.into_result()
    }
}

/// Browser timer for receipt polling and the post-write settle delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await
    }
}

#[cfg(feature = "web")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await
}

#[cfg(not(feature = "web"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await
}
