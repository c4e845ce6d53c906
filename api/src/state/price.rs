use ethers_core::types::U256;
use serde::{Deserialize, Serialize};

use crate::format::format_price;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// The symbol the price was requested for.
    pub symbol: String,

    /// The price as a fixed-point integer.
    pub price: U256,

    /// Fixed-point decimals of `price`.
    pub decimals: u8,

    /// Unix time of the oracle's last update.
    pub timestamp: u64,
}

impl PricePoint {
    /// Renders the price as `$x.xx`.
    pub fn display(&self) -> String {
        format_price(self.price, self.decimals)
    }
}
