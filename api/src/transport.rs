#![allow(async_fn_in_trait)]

use std::time::Duration;

use serde_json::Value;

use crate::error::ClientError;

/// Anything that answers JSON-RPC style requests: the chain's HTTP endpoint
/// for reads, the injected EIP-1193 wallet for writes.
pub trait Transport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ClientError>;
}

/// Suspends between receipt polls and before post-write refetches.
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}
