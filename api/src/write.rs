use ethers_core::abi::Token;
use ethers_core::types::{Address, Bytes, H256, U256};

use crate::abi;
use crate::consts::Contracts;
use crate::error::ClientError;
use crate::query::Invalidate;
use crate::read::{ReadCall, ReadKind};
use crate::state::DuelDuration;

/// A state-changing contract call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteCall {
    MakePrediction {
        symbol: String,
        predicted_higher: bool,
    },
    CreateDuel {
        duration: DuelDuration,
        stake: U256,
    },
    /// `stake` must equal the duel's stake or the contract reverts.
    JoinDuel {
        duel_id: U256,
        stake: U256,
    },
    MakeDuelPrediction {
        duel_id: U256,
        symbol: String,
        predicted_higher: bool,
    },
}

impl WriteCall {
    pub fn signature(&self) -> &'static str {
        match self {
            WriteCall::MakePrediction { .. } => abi::MAKE_PREDICTION,
            WriteCall::CreateDuel { .. } => abi::CREATE_DUEL,
            WriteCall::JoinDuel { .. } => abi::JOIN_DUEL,
            WriteCall::MakeDuelPrediction { .. } => abi::MAKE_DUEL_PREDICTION,
        }
    }

    pub fn target(&self, contracts: &Contracts) -> Address {
        match self {
            WriteCall::MakePrediction { .. } => contracts.prediction_game,
            _ => contracts.duel_manager,
        }
    }

    pub fn calldata(&self) -> Bytes {
        let args = match self {
            WriteCall::MakePrediction {
                symbol,
                predicted_higher,
            } => vec![Token::String(symbol.clone()), Token::Bool(*predicted_higher)],
            WriteCall::CreateDuel { duration, .. } => {
                vec![Token::Uint(U256::from(u8::from(*duration)))]
            }
            WriteCall::JoinDuel { duel_id, .. } => vec![Token::Uint(*duel_id)],
            WriteCall::MakeDuelPrediction {
                duel_id,
                symbol,
                predicted_higher,
            } => vec![
                Token::Uint(*duel_id),
                Token::String(symbol.clone()),
                Token::Bool(*predicted_higher),
            ],
        };
        abi::encode_call(self.signature(), &args)
    }

    /// ETH attached to the call.
    pub fn value(&self) -> U256 {
        match self {
            WriteCall::CreateDuel { stake, .. } | WriteCall::JoinDuel { stake, .. } => *stake,
            _ => U256::zero(),
        }
    }

    /// Reads whose cached results this write makes outdated.
    pub fn invalidates(&self) -> Vec<Invalidate> {
        match self {
            WriteCall::MakePrediction { .. } => vec![
                Invalidate::Kind(ReadKind::UserPredictions),
                Invalidate::Kind(ReadKind::Prediction),
                Invalidate::Kind(ReadKind::UserStats),
                Invalidate::Kind(ReadKind::UserScore),
                Invalidate::Kind(ReadKind::Leaderboard),
            ],
            WriteCall::CreateDuel { .. } => vec![Invalidate::Exact(ReadCall::DuelCount)],
            WriteCall::JoinDuel { duel_id, .. } => {
                vec![Invalidate::Exact(ReadCall::Duel { id: *duel_id })]
            }
            WriteCall::MakeDuelPrediction { duel_id, .. } => vec![
                Invalidate::Exact(ReadCall::Duel { id: *duel_id }),
                Invalidate::Kind(ReadKind::DuelPredictions),
            ],
        }
    }
}

impl std::fmt::Display for WriteCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteCall::MakePrediction { symbol, predicted_higher } => {
                write!(f, "makePrediction({symbol}, higher={predicted_higher})")
            }
            WriteCall::CreateDuel { duration, stake } => {
                write!(f, "createDuel({}, value={stake})", duration.label())
            }
            WriteCall::JoinDuel { duel_id, stake } => write!(f, "joinDuel({duel_id}, value={stake})"),
            WriteCall::MakeDuelPrediction {
                duel_id,
                symbol,
                predicted_higher,
            } => write!(
                f,
                "makeDuelPrediction({duel_id}, {symbol}, higher={predicted_higher})"
            ),
        }
    }
}

/// Lifecycle of one write operation. Exactly one state holds at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WriteStatus {
    #[default]
    Idle,
    /// Waiting for the user to confirm in the wallet.
    Pending,
    /// Submitted, waiting for the receipt.
    Confirming(H256),
    Success(H256),
    Failed {
        error: ClientError,
        hash: Option<H256>,
    },
}

impl WriteStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, WriteStatus::Pending)
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self, WriteStatus::Confirming(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WriteStatus::Success(_))
    }

    /// Pending or confirming: a new invocation must wait.
    pub fn is_busy(&self) -> bool {
        self.is_pending() || self.is_confirming()
    }

    pub fn hash(&self) -> Option<H256> {
        match self {
            WriteStatus::Confirming(hash) | WriteStatus::Success(hash) => Some(*hash),
            WriteStatus::Failed { hash, .. } => *hash,
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            WriteStatus::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Starts a new invocation, discarding the previous outcome.
    pub fn begin(&mut self) -> Result<(), ClientError> {
        if self.is_busy() {
            return Err(ClientError::Busy);
        }
        *self = WriteStatus::Pending;
        Ok(())
    }

    pub fn submitted(&mut self, hash: H256) {
        *self = WriteStatus::Confirming(hash);
    }

    pub fn finish(&mut self, result: Result<H256, ClientError>) {
        let hash = self.hash();
        *self = match result {
            Ok(hash) => WriteStatus::Success(hash),
            Err(error) => WriteStatus::Failed { error, hash },
        };
    }
}
