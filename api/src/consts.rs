use ethers_core::types::{Address, H160};
use hex_literal::hex;

/// Chain parameters the client submits every write against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainInfo {
    pub id: u64,
    pub name: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
    pub currency_name: &'static str,
    pub currency_symbol: &'static str,
    pub currency_decimals: u8,
}

impl ChainInfo {
    /// The chain id in the `0x`-prefixed form wallets expect.
    pub fn hex_id(&self) -> String {
        format!("{:#x}", self.id)
    }

    pub fn address_url(&self, address: &Address) -> String {
        format!("{}/address/{:?}", self.explorer_url, address)
    }
}

/// Deployed addresses of the three game contracts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contracts {
    pub oracle: Address,
    pub prediction_game: Address,
    pub duel_manager: Address,
}

pub const BASE_SEPOLIA: ChainInfo = ChainInfo {
    id: 84532,
    name: "Base Sepolia",
    rpc_url: "https://sepolia.base.org",
    explorer_url: "https://sepolia.basescan.org",
    currency_name: "Ether",
    currency_symbol: "ETH",
    currency_decimals: 18,
};

pub const CONTRACTS: Contracts = Contracts {
    oracle: H160(hex!("7bA9f7D7B3eFE92317996f8CF4BD0917e2499d88")),
    prediction_game: H160(hex!("CE8160D4151f1B328feb58FdC8A590bBf003bb65")),
    duel_manager: H160(hex!("1F8493adf1776990FF7584036bbA173F9eac0863")),
};

/// Chainlink ETH/USD feed backing the oracle.
pub const ETH_USD_FEED: Address = H160(hex!("4aDC67696bA383F43DD60A9e78F2C97Fbbfc7cb1"));

pub const ZERO_ADDRESS: Address = H160([0; 20]);

/// The only symbol the game currently trades.
pub const SYMBOL: &str = "ETH";

pub const LEADERBOARD_LIMIT: u64 = 10;

pub const DEFAULT_STAKE: &str = "0.001";

/// Platform fee taken from the combined duel pot, in basis points.
pub const PLATFORM_FEE_BPS: u64 = 300;

pub const BPS_DENOMINATOR: u64 = 10_000;

pub const POINTS_PER_WIN: u64 = 10;

/// Fixed-point decimals of oracle prices.
pub const PRICE_DECIMALS: u8 = 8;

pub const ETH_DECIMALS: u32 = 18;

/// Pause between a confirmed write and the refetch of its dependent reads.
pub const SETTLE_DELAY_MS: u64 = 2_000;

pub const RECEIPT_POLL_MS: u64 = 1_500;

/// Receipt polls before a submitted transaction is reported as unconfirmed.
pub const RECEIPT_MAX_POLLS: u32 = 200;

pub const COUNTDOWN_REFRESH_MS: u32 = 60_000;

/// Local storage key of the persisted wallet connection.
pub const WALLET_STORAGE_KEY: &str = "duels.wallet";

/// EIP-1193 error code for a request the user rejected.
pub const USER_REJECTED_CODE: i64 = 4001;

/// EIP-3085 error code for a chain the wallet does not know yet.
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn contracts__match_checksummed_literals() {
        let parsed = |literal: &str| literal.parse::<Address>().unwrap();

        assert_eq!(CONTRACTS.oracle, parsed("0x7bA9f7D7B3eFE92317996f8CF4BD0917e2499d88"));
        assert_eq!(CONTRACTS.prediction_game, parsed("0xCE8160D4151f1B328feb58FdC8A590bBf003bb65"));
        assert_eq!(CONTRACTS.duel_manager, parsed("0x1F8493adf1776990FF7584036bbA173F9eac0863"));
        assert_eq!(ETH_USD_FEED, parsed("0x4aDC67696bA383F43DD60A9e78F2C97Fbbfc7cb1"));
    }

    #[test]
    fn hex_id__renders_base_sepolia_for_wallets() {
        assert_eq!(BASE_SEPOLIA.hex_id(), "0x14a34");
    }
}
