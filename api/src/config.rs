use std::time::Duration;

use crate::consts::{
    ChainInfo, Contracts, BASE_SEPOLIA, CONTRACTS, RECEIPT_MAX_POLLS, RECEIPT_POLL_MS,
    SETTLE_DELAY_MS,
};

/// Everything the access layer needs to talk to the deployed game.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub chain: ChainInfo,
    pub contracts: Contracts,
    pub receipt_poll: Duration,
    pub receipt_max_polls: u32,
    pub settle_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chain: BASE_SEPOLIA,
            contracts: CONTRACTS,
            receipt_poll: Duration::from_millis(RECEIPT_POLL_MS),
            receipt_max_polls: RECEIPT_MAX_POLLS,
            settle_delay: Duration::from_millis(SETTLE_DELAY_MS),
        }
    }
}
