use ethers_core::abi::Token;
use ethers_core::types::{Address, Bytes, U256};

use crate::abi;
use crate::consts::Contracts;
use crate::error::ClientError;
use crate::query::QueryValue;

/// One contract read, fully addressed. Doubles as the query cache key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReadCall {
    LatestPrice { symbol: String },
    UserScore { user: Address },
    Leaderboard { limit: u64 },
    UserPredictions { user: Address },
    Prediction { id: U256 },
    UserStats { user: Address },
    DuelCount,
    Duel { id: U256 },
    DuelPredictions { id: U256, player: Address },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadKind {
    LatestPrice,
    UserScore,
    Leaderboard,
    UserPredictions,
    Prediction,
    UserStats,
    DuelCount,
    Duel,
    DuelPredictions,
}

impl ReadCall {
    pub fn kind(&self) -> ReadKind {
        match self {
            ReadCall::LatestPrice { .. } => ReadKind::LatestPrice,
            ReadCall::UserScore { .. } => ReadKind::UserScore,
            ReadCall::Leaderboard { .. } => ReadKind::Leaderboard,
            ReadCall::UserPredictions { .. } => ReadKind::UserPredictions,
            ReadCall::Prediction { .. } => ReadKind::Prediction,
            ReadCall::UserStats { .. } => ReadKind::UserStats,
            ReadCall::DuelCount => ReadKind::DuelCount,
            ReadCall::Duel { .. } => ReadKind::Duel,
            ReadCall::DuelPredictions { .. } => ReadKind::DuelPredictions,
        }
    }

    pub fn signature(&self) -> &'static str {
        match self {
            ReadCall::LatestPrice { .. } => abi::GET_LATEST_PRICE,
            ReadCall::UserScore { .. } => abi::USER_SCORES,
            ReadCall::Leaderboard { .. } => abi::GET_LEADERBOARD,
            ReadCall::UserPredictions { .. } => abi::GET_USER_PREDICTIONS,
            ReadCall::Prediction { .. } => abi::GET_PREDICTION,
            ReadCall::UserStats { .. } => abi::GET_USER_STATS,
            ReadCall::DuelCount => abi::DUEL_COUNTER,
            ReadCall::Duel { .. } => abi::GET_DUEL,
            ReadCall::DuelPredictions { .. } => abi::GET_DUEL_PREDICTIONS,
        }
    }

    pub fn target(&self, contracts: &Contracts) -> Address {
        match self {
            ReadCall::LatestPrice { .. } => contracts.oracle,
            ReadCall::UserScore { .. }
            | ReadCall::Leaderboard { .. }
            | ReadCall::UserPredictions { .. }
            | ReadCall::Prediction { .. }
            | ReadCall::UserStats { .. } => contracts.prediction_game,
            ReadCall::DuelCount | ReadCall::Duel { .. } | ReadCall::DuelPredictions { .. } => {
                contracts.duel_manager
            }
        }
    }

    pub fn calldata(&self) -> Bytes {
        let args = match self {
            ReadCall::LatestPrice { symbol } => vec![Token::String(symbol.clone())],
            ReadCall::UserScore { user }
            | ReadCall::UserPredictions { user }
            | ReadCall::UserStats { user } => vec![Token::Address(*user)],
            ReadCall::Leaderboard { limit } => vec![Token::Uint(U256::from(*limit))],
            ReadCall::Prediction { id } | ReadCall::Duel { id } => vec![Token::Uint(*id)],
            ReadCall::DuelCount => vec![],
            ReadCall::DuelPredictions { id, player } => {
                vec![Token::Uint(*id), Token::Address(*player)]
            }
        };
        abi::encode_call(self.signature(), &args)
    }

    /// Decodes `eth_call` return data into the record this read produces.
    pub fn decode(&self, data: &[u8]) -> Result<QueryValue, ClientError> {
        Ok(match self {
            ReadCall::LatestPrice { symbol } => QueryValue::Price(abi::decode_price(symbol, data)?),
            ReadCall::UserScore { .. } => QueryValue::Number(abi::decode_uint(abi::USER_SCORES, data)?),
            ReadCall::Leaderboard { .. } => QueryValue::Leaderboard(abi::decode_leaderboard(data)?),
            ReadCall::UserPredictions { .. } => QueryValue::Ids(abi::decode_ids(data)?),
            ReadCall::Prediction { .. } => QueryValue::Prediction(abi::decode_prediction(data)?),
            ReadCall::UserStats { .. } => QueryValue::Stats(abi::decode_user_stats(data)?),
            ReadCall::DuelCount => QueryValue::Number(abi::decode_uint(abi::DUEL_COUNTER, data)?),
            ReadCall::Duel { .. } => QueryValue::Duel(abi::decode_duel(data)?),
            ReadCall::DuelPredictions { .. } => {
                QueryValue::DuelPredictions(abi::decode_duel_predictions(data)?)
            }
        })
    }
}

/// What a view sees of one read.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadState<T> {
    /// An identifying argument is missing, so the read never ran.
    Disabled,
    Loading,
    Ready(T),
    Failed(ClientError),
}

impl<T> ReadState<T> {
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => ReadState::Ready(value),
            Err(error) => ReadState::Failed(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ReadState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ReadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            ReadState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl<T: Clone + Default> ReadState<T> {
    /// The loaded value, or the type's default while disabled, loading or failed.
    pub fn value_or_default(&self) -> T {
        self.value().cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::consts::CONTRACTS;

    #[test]
    fn target__routes_each_read_to_its_contract() {
        assert_eq!(
            ReadCall::LatestPrice {
                symbol: "ETH".to_string()
            }
            .target(&CONTRACTS),
            CONTRACTS.oracle
        );
        assert_eq!(
            ReadCall::Leaderboard { limit: 10 }.target(&CONTRACTS),
            CONTRACTS.prediction_game
        );
        assert_eq!(ReadCall::DuelCount.target(&CONTRACTS), CONTRACTS.duel_manager);
    }

    #[test]
    fn calldata__duel_counter_is_selector_only() {
        assert_eq!(ReadCall::DuelCount.calldata().len(), 4);
        assert_eq!(
            ReadCall::DuelPredictions {
                id: U256::one(),
                player: Address::repeat_byte(7)
            }
            .calldata()
            .len(),
            4 + 64
        );
    }

    #[test]
    fn value_or_default__falls_back_while_not_ready() {
        let failed: ReadState<Vec<U256>> = ReadState::Failed(ClientError::Transport("down".into()));
        let ready = ReadState::Ready(vec![U256::one()]);

        assert!(failed.value_or_default().is_empty());
        assert!(ReadState::<Vec<U256>>::Disabled.value_or_default().is_empty());
        assert_eq!(ready.value_or_default(), vec![U256::one()]);
        assert_eq!(failed.error(), Some(&ClientError::Transport("down".into())));
    }
}
