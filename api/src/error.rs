use ethers_core::types::H256;
use thiserror::Error;

use crate::consts::USER_REJECTED_CODE;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClientError {
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode {call} result: {reason}")]
    Decode { call: &'static str, reason: String },

    #[error("Request rejected in wallet")]
    UserRejected,

    #[error("Please switch to {required} (chain {chain_id}) manually")]
    WrongNetwork { required: &'static str, chain_id: u64 },

    #[error("Please connect your wallet first")]
    NotConnected,

    #[error("Invalid stake amount: {0}")]
    InvalidStake(String),

    #[error("Transaction {0:?} reverted")]
    Reverted(H256),

    #[error("Transaction {0:?} was not confirmed in time")]
    ReceiptTimeout(H256),

    #[error("A transaction is already in progress")]
    Busy,
}

impl ClientError {
    /// Maps a JSON-RPC or EIP-1193 error object onto the taxonomy.
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        if code == USER_REJECTED_CODE {
            return ClientError::UserRejected;
        }
        ClientError::Rpc {
            code,
            message: message.into(),
        }
    }

    pub fn decode(call: &'static str, reason: impl ToString) -> Self {
        ClientError::Decode {
            call,
            reason: reason.to_string(),
        }
    }

    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            ClientError::Rpc { code, .. } => Some(*code),
            ClientError::UserRejected => Some(USER_REJECTED_CODE),
            _ => None,
        }
    }
}
