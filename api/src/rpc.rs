use ethers_core::types::{Address, Bytes, H256, U256, U64};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

#[derive(Serialize, Debug)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl From<RpcError> for ClientError {
    fn from(error: RpcError) -> Self {
        ClientError::from_rpc(error.code, error.message)
    }
}

impl RpcResponse {
    /// The result value, `null` when the node answered without one.
    pub fn into_result(self) -> Result<Value, ClientError> {
        if let Some(error) = self.error {
            return Err(error.into());
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

/// First parameter of `eth_call`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CallRequest {
    pub to: Address,
    pub data: Bytes,
}

/// Parameter of `eth_sendTransaction`; the wallet fills in gas and nonce.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
}

/// Minimal view of `eth_getTransactionReceipt`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSummary {
    pub transaction_hash: H256,
    #[serde(default)]
    pub block_number: Option<U64>,
    #[serde(default)]
    pub status: Option<U64>,
}

impl ReceiptSummary {
    /// Pre-Byzantium receipts carry no status; treat them as successful.
    pub fn succeeded(&self) -> bool {
        self.status.map(|status| !status.is_zero()).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use serde_json::json;

    use super::*;

    #[test]
    fn request__serializes_as_json_rpc_2() {
        let request = RpcRequest::new(7, "eth_chainId", json!([]));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "jsonrpc": "2.0", "id": 7, "method": "eth_chainId", "params": [] })
        );
    }

    #[test]
    fn into_result__surfaces_error_object() {
        // given
        let response: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32000, "message": "execution reverted" }
        }))
        .unwrap();

        // when
        let result = response.into_result();

        // then
        assert_eq!(
            result,
            Err(ClientError::Rpc {
                code: -32000,
                message: "execution reverted".to_string()
            })
        );
    }

    #[test]
    fn into_result__missing_result_is_null() {
        let response: RpcResponse =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1, "result": null })).unwrap();

        assert_eq!(response.into_result(), Ok(Value::Null));
    }

    #[test]
    fn transaction_request__omits_zero_value() {
        let request = TransactionRequest {
            from: Address::repeat_byte(1),
            to: Address::repeat_byte(2),
            data: Bytes::from(vec![0xde, 0xad]),
            value: None,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["data"], json!("0xdead"));
        assert!(json.get("value").is_none());
    }

    #[test]
    fn receipt__status_zero_is_a_failure() {
        let receipt: ReceiptSummary = serde_json::from_value(json!({
            "transactionHash": "0x1111111111111111111111111111111111111111111111111111111111111111",
            "blockNumber": "0x10",
            "status": "0x0",
            "gasUsed": "0x5208"
        }))
        .unwrap();

        assert!(!receipt.succeeded());
    }
}
