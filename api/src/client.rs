use ethers_core::types::{Address, Bytes, H256, U256};
use serde_json::json;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::network::NetworkGuard;
use crate::query::{Cached, Invalidate, QueryValue};
use crate::read::ReadCall;
use crate::rpc::{CallRequest, ReceiptSummary, TransactionRequest};
use crate::state::{Duel, DuelPrediction, LeaderboardEntry, Prediction, PricePoint, UserStats};
use crate::transport::{Timer, Transport};
use crate::write::WriteCall;

/// Typed access to the game contracts.
///
/// Reads go through `reader` (the public RPC endpoint); accounts, network
/// switching and transactions go through `wallet`.
#[derive(Clone, Debug)]
pub struct ContractClient<R, W> {
    config: ClientConfig,
    reader: R,
    wallet: W,
}

impl<R, W> ContractClient<R, W> {
    pub fn new(config: ClientConfig, reader: R, wallet: W) -> Self {
        Self {
            config,
            reader,
            wallet,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }
}

impl<R: Transport, W: Transport> ContractClient<R, W> {
    pub fn guard(&self) -> NetworkGuard<'_, W> {
        NetworkGuard::new(&self.wallet, &self.config.chain)
    }

    async fn call(&self, read: &ReadCall) -> Result<Bytes, ClientError> {
        let request = CallRequest {
            to: read.target(&self.config.contracts),
            data: read.calldata(),
        };
        tracing::debug!(call = read.signature(), to = ?request.to, "eth_call");
        let value = self
            .reader
            .request("eth_call", json!([request, "latest"]))
            .await?;
        serde_json::from_value(value).map_err(|e| ClientError::decode(read.signature(), e))
    }

    /// Runs `read` and decodes its return data.
    pub async fn fetch(&self, read: &ReadCall) -> Result<QueryValue, ClientError> {
        let data = self.call(read).await?;
        read.decode(&data)
    }

    pub async fn fetch_as<T: Cached>(&self, read: &ReadCall) -> Result<T, ClientError> {
        let value = self.fetch(read).await?;
        T::from_value(&value)
            .ok_or_else(|| ClientError::decode(read.signature(), "unexpected record type"))
    }

    pub async fn latest_price(&self, symbol: &str) -> Result<PricePoint, ClientError> {
        self.fetch_as(&ReadCall::LatestPrice {
            symbol: symbol.to_string(),
        })
        .await
    }

    pub async fn user_score(&self, user: Option<Address>) -> Result<U256, ClientError> {
        match user {
            Some(user) => self.fetch_as(&ReadCall::UserScore { user }).await,
            None => Ok(U256::zero()),
        }
    }

    pub async fn leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardEntry>, ClientError> {
        self.fetch_as(&ReadCall::Leaderboard { limit }).await
    }

    pub async fn user_predictions(&self, user: Option<Address>) -> Result<Vec<U256>, ClientError> {
        match user {
            Some(user) => self.fetch_as(&ReadCall::UserPredictions { user }).await,
            None => Ok(Vec::new()),
        }
    }

    pub async fn prediction(&self, id: Option<U256>) -> Result<Option<Prediction>, ClientError> {
        match id {
            Some(id) => self.fetch_as(&ReadCall::Prediction { id }).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn user_stats(&self, user: Option<Address>) -> Result<Option<UserStats>, ClientError> {
        match user {
            Some(user) => self.fetch_as(&ReadCall::UserStats { user }).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn duel_count(&self) -> Result<U256, ClientError> {
        self.fetch_as(&ReadCall::DuelCount).await
    }

    pub async fn duel(&self, id: Option<U256>) -> Result<Option<Duel>, ClientError> {
        match id {
            Some(id) => self.fetch_as(&ReadCall::Duel { id }).await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn duel_predictions(
        &self,
        id: Option<U256>,
        player: Option<Address>,
    ) -> Result<Vec<DuelPrediction>, ClientError> {
        match (id, player) {
            (Some(id), Some(player)) => {
                self.fetch_as(&ReadCall::DuelPredictions { id, player })
                    .await
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Accounts the wallet already exposes to this origin, without prompting.
    pub async fn accounts(&self) -> Result<Vec<Address>, ClientError> {
        let value = self.wallet.request("eth_accounts", json!([])).await?;
        serde_json::from_value(value).map_err(|e| ClientError::decode("eth_accounts", e))
    }

    /// Prompts the wallet for access and returns the selected account.
    pub async fn connect(&self) -> Result<Address, ClientError> {
        let value = self
            .wallet
            .request("eth_requestAccounts", json!([]))
            .await?;
        let accounts: Vec<Address> = serde_json::from_value(value)
            .map_err(|e| ClientError::decode("eth_requestAccounts", e))?;
        let account = accounts.first().copied().ok_or(ClientError::NotConnected)?;
        tracing::info!(?account, "wallet connected");
        Ok(account)
    }

    /// Makes sure the wallet is on the required chain, then hands the
    /// transaction to it for signing. Returns the transaction hash.
    pub async fn send(&self, from: Option<Address>, call: &WriteCall) -> Result<H256, ClientError> {
        let from = from.ok_or(ClientError::NotConnected)?;
        self.guard().ensure().await?;

        let value = call.value();
        let request = TransactionRequest {
            from,
            to: call.target(&self.config.contracts),
            data: call.calldata(),
            value: (!value.is_zero()).then_some(value),
        };
        tracing::info!(%call, "submitting transaction");
        let hash = self
            .wallet
            .request("eth_sendTransaction", json!([request]))
            .await?;
        serde_json::from_value(hash).map_err(|e| ClientError::decode("eth_sendTransaction", e))
    }

    /// `None` while the transaction is not yet mined.
    pub async fn receipt(&self, hash: H256) -> Result<Option<ReceiptSummary>, ClientError> {
        let value = self
            .reader
            .request("eth_getTransactionReceipt", json!([hash]))
            .await?;
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ClientError::decode("eth_getTransactionReceipt", e))
    }

    pub async fn wait_for_receipt<T: Timer>(
        &self,
        hash: H256,
        timer: &T,
    ) -> Result<H256, ClientError> {
        for attempt in 0..self.config.receipt_max_polls {
            if let Some(receipt) = self.receipt(hash).await? {
                if !receipt.succeeded() {
                    tracing::warn!(?hash, "transaction reverted");
                    return Err(ClientError::Reverted(hash));
                }
                tracing::info!(?hash, block = ?receipt.block_number, "transaction confirmed");
                return Ok(hash);
            }
            tracing::debug!(?hash, attempt, "receipt not yet available");
            timer.sleep(self.config.receipt_poll).await;
        }
        Err(ClientError::ReceiptTimeout(hash))
    }

    /// Sends `call` and waits for it to be mined. `on_submitted` fires once
    /// the wallet returns a hash, before the receipt wait starts.
    pub async fn submit<T: Timer>(
        &self,
        from: Option<Address>,
        call: &WriteCall,
        timer: &T,
        on_submitted: impl FnOnce(H256),
    ) -> Result<H256, ClientError> {
        let hash = self.send(from, call).await?;
        on_submitted(hash);
        self.wait_for_receipt(hash, timer).await
    }

    /// Waits for the indexer-facing RPC node to catch up with a confirmed
    /// write, then returns the reads to refetch.
    pub async fn settle<T: Timer>(&self, call: &WriteCall, timer: &T) -> Vec<Invalidate> {
        timer.sleep(self.config.settle_delay).await;
        call.invalidates()
    }
}

/// Ids of every duel ever created, oldest first.
pub fn duel_ids(count: U256) -> Vec<U256> {
    let count = if count > U256::from(u64::MAX) {
        u64::MAX
    } else {
        count.as_u64()
    };
    (0..count).map(U256::from).collect()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn duel_ids__enumerates_below_counter() {
        assert!(duel_ids(U256::zero()).is_empty());
        assert_eq!(
            duel_ids(U256::from(3)),
            vec![U256::zero(), U256::one(), U256::from(2)]
        );
    }
}
