use serde_json::{json, Value};

use crate::consts::{ChainInfo, UNRECOGNIZED_CHAIN_CODE};
use crate::error::ClientError;
use crate::transport::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkStatus {
    Correct,
    Incorrect { current: u64 },
}

impl NetworkStatus {
    pub fn of(current: u64, required: &ChainInfo) -> Self {
        if current == required.id {
            NetworkStatus::Correct
        } else {
            NetworkStatus::Incorrect { current }
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, NetworkStatus::Correct)
    }
}

/// Keeps writes on the required chain.
///
/// Holds no state of its own: every check asks the wallet again.
pub struct NetworkGuard<'a, W> {
    wallet: &'a W,
    chain: &'a ChainInfo,
}

impl<'a, W: Transport> NetworkGuard<'a, W> {
    pub fn new(wallet: &'a W, chain: &'a ChainInfo) -> Self {
        Self { wallet, chain }
    }

    pub async fn chain_id(&self) -> Result<u64, ClientError> {
        let value = self.wallet.request("eth_chainId", json!([])).await?;
        parse_chain_id(&value)
    }

    pub async fn status(&self) -> Result<NetworkStatus, ClientError> {
        Ok(NetworkStatus::of(self.chain_id().await?, self.chain))
    }

    /// Asks the wallet to switch, registering the chain first if the wallet
    /// does not know it. Any failure becomes [`ClientError::WrongNetwork`].
    pub async fn switch(&self) -> Result<(), ClientError> {
        let params = json!([{ "chainId": self.chain.hex_id() }]);
        match self.wallet.request("wallet_switchEthereumChain", params).await {
            Ok(_) => Ok(()),
            Err(err) if err.rpc_code() == Some(UNRECOGNIZED_CHAIN_CODE) => {
                tracing::info!(chain = self.chain.name, "wallet does not know chain, adding it");
                self.wallet
                    .request("wallet_addEthereumChain", self.add_chain_params())
                    .await
                    .map(|_| ())
                    .map_err(|err| self.wrong_network(err))
            }
            Err(err) => Err(self.wrong_network(err)),
        }
    }

    /// Resolves once the wallet is on the required chain.
    pub async fn ensure(&self) -> Result<(), ClientError> {
        match self.status().await? {
            NetworkStatus::Correct => Ok(()),
            NetworkStatus::Incorrect { current } => {
                tracing::info!(current, required = self.chain.id, "switching network");
                self.switch().await
            }
        }
    }

    fn wrong_network(&self, cause: ClientError) -> ClientError {
        tracing::warn!(%cause, "network switch failed");
        ClientError::WrongNetwork {
            required: self.chain.name,
            chain_id: self.chain.id,
        }
    }

    fn add_chain_params(&self) -> Value {
        json!([{
            "chainId": self.chain.hex_id(),
            "chainName": self.chain.name,
            "nativeCurrency": {
                "name": self.chain.currency_name,
                "symbol": self.chain.currency_symbol,
                "decimals": self.chain.currency_decimals,
            },
            "rpcUrls": [self.chain.rpc_url],
            "blockExplorerUrls": [self.chain.explorer_url],
        }])
    }
}

/// Wallets answer `eth_chainId` with a hex quantity; some older ones with a number.
pub fn parse_chain_id(value: &Value) -> Result<u64, ClientError> {
    match value {
        Value::String(hex) => {
            let digits = hex.trim_start_matches("0x");
            u64::from_str_radix(digits, 16)
                .map_err(|e| ClientError::decode("eth_chainId", format!("{hex}: {e}")))
        }
        Value::Number(number) => number
            .as_u64()
            .ok_or_else(|| ClientError::decode("eth_chainId", number)),
        other => Err(ClientError::decode("eth_chainId", other)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::consts::BASE_SEPOLIA;

    #[test]
    fn parse_chain_id__accepts_hex_and_numbers() {
        assert_eq!(parse_chain_id(&json!("0x14a34")).unwrap(), 84532);
        assert_eq!(parse_chain_id(&json!(1)).unwrap(), 1);
        assert!(parse_chain_id(&json!("0xzz")).is_err());
        assert!(parse_chain_id(&Value::Null).is_err());
    }

    #[test]
    fn status__only_two_states() {
        assert_eq!(NetworkStatus::of(84532, &BASE_SEPOLIA), NetworkStatus::Correct);
        assert_eq!(
            NetworkStatus::of(1, &BASE_SEPOLIA),
            NetworkStatus::Incorrect { current: 1 }
        );
    }
}
