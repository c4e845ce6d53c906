//! Call encoding and return-data decoding for the three game contracts.
//!
//! Every decoder validates the shape it receives (arity, token types,
//! enum discriminants, parallel array lengths) and turns it into one of the
//! typed records in [`crate::state`].

use ethers_core::abi::{self, ParamType, Token};
use ethers_core::types::{Address, Bytes, I256, U256};
use ethers_core::utils::id;
use num_enum::TryFromPrimitive;

use crate::error::ClientError;
use crate::state::{Duel, DuelPrediction, LeaderboardEntry, Prediction, PricePoint, UserStats};

pub const GET_LATEST_PRICE: &str = "getLatestPrice(string)";
pub const MAKE_PREDICTION: &str = "makePrediction(string,bool)";
pub const USER_SCORES: &str = "userScores(address)";
pub const GET_LEADERBOARD: &str = "getLeaderboard(uint256)";
pub const GET_USER_PREDICTIONS: &str = "getUserPredictions(address)";
pub const GET_PREDICTION: &str = "getPrediction(uint256)";
pub const GET_USER_STATS: &str = "getUserStats(address)";
pub const CREATE_DUEL: &str = "createDuel(uint8)";
pub const JOIN_DUEL: &str = "joinDuel(uint256)";
pub const MAKE_DUEL_PREDICTION: &str = "makeDuelPrediction(uint256,string,bool)";
pub const DUEL_COUNTER: &str = "duelCounter()";
pub const GET_DUEL: &str = "getDuel(uint256)";
pub const GET_DUEL_PREDICTIONS: &str = "getDuelPredictions(uint256,address)";

/// Selector followed by the ABI-encoded arguments.
pub fn encode_call(signature: &str, args: &[Token]) -> Bytes {
    let mut data = id(signature).to_vec();
    data.extend(abi::encode(args));
    Bytes::from(data)
}

pub fn decode_price(symbol: &str, data: &[u8]) -> Result<PricePoint, ClientError> {
    let mut fields = Fields::decode(
        GET_LATEST_PRICE,
        &[ParamType::Int(256), ParamType::Uint(8), ParamType::Uint(256)],
        data,
    )?;
    Ok(PricePoint {
        symbol: symbol.to_string(),
        price: fields.non_negative_int()?,
        decimals: fields.u8()?,
        timestamp: fields.u64()?,
    })
}

pub fn decode_uint(call: &'static str, data: &[u8]) -> Result<U256, ClientError> {
    Fields::decode(call, &[ParamType::Uint(256)], data)?.uint()
}

pub fn decode_ids(data: &[u8]) -> Result<Vec<U256>, ClientError> {
    let mut fields = Fields::decode(
        GET_USER_PREDICTIONS,
        &[ParamType::Array(Box::new(ParamType::Uint(256)))],
        data,
    )?;
    fields
        .array()?
        .into_iter()
        .map(|token| Fields::single(GET_USER_PREDICTIONS, token).uint())
        .collect()
}

/// Zips the parallel `(addresses, scores)` arrays into ranked entries,
/// skipping empty slots.
pub fn decode_leaderboard(data: &[u8]) -> Result<Vec<LeaderboardEntry>, ClientError> {
    let mut fields = Fields::decode(
        GET_LEADERBOARD,
        &[
            ParamType::Array(Box::new(ParamType::Address)),
            ParamType::Array(Box::new(ParamType::Uint(256))),
        ],
        data,
    )?;
    let players = fields.array()?;
    let scores = fields.array()?;
    if players.len() != scores.len() {
        return Err(ClientError::decode(
            GET_LEADERBOARD,
            format!("{} players but {} scores", players.len(), scores.len()),
        ));
    }

    let mut entries = Vec::with_capacity(players.len());
    for (player, score) in players.into_iter().zip(scores) {
        let player = Fields::single(GET_LEADERBOARD, player).address()?;
        let score = Fields::single(GET_LEADERBOARD, score).uint()?;
        if player.is_zero() {
            continue;
        }
        entries.push(LeaderboardEntry {
            rank: entries.len() + 1,
            player,
            score,
        });
    }
    Ok(entries)
}

pub fn decode_prediction(data: &[u8]) -> Result<Prediction, ClientError> {
    let mut outer = Fields::decode(
        GET_PREDICTION,
        &[ParamType::Tuple(vec![
            ParamType::Uint(256),
            ParamType::Address,
            ParamType::String,
            ParamType::Bool,
            ParamType::Uint(256),
            ParamType::Uint(256),
            ParamType::Uint(256),
            ParamType::Bool,
            ParamType::Bool,
        ])],
        data,
    )?;
    let mut fields = outer.tuple()?;
    Ok(Prediction {
        id: fields.uint()?,
        owner: fields.address()?,
        symbol: fields.string()?,
        predicted_higher: fields.boolean()?,
        initial_price: fields.uint()?,
        timestamp: fields.u64()?,
        resolution_time: fields.u64()?,
        resolved: fields.boolean()?,
        won: fields.boolean()?,
    })
}

pub fn decode_user_stats(data: &[u8]) -> Result<UserStats, ClientError> {
    let mut outer = Fields::decode(
        GET_USER_STATS,
        &[ParamType::Tuple(vec![ParamType::Uint(256); 4])],
        data,
    )?;
    let mut fields = outer.tuple()?;
    Ok(UserStats {
        total: fields.u64()?,
        correct: fields.u64()?,
        incorrect: fields.u64()?,
        pending: fields.u64()?,
    })
}

pub fn decode_duel(data: &[u8]) -> Result<Duel, ClientError> {
    let mut outer = Fields::decode(
        GET_DUEL,
        &[ParamType::Tuple(vec![
            ParamType::Uint(256),
            ParamType::Address,
            ParamType::Address,
            ParamType::Uint(256),
            ParamType::Uint(8),
            ParamType::Uint(8),
            ParamType::Uint(256),
            ParamType::Uint(256),
            ParamType::Address,
            ParamType::Uint(256),
            ParamType::Uint(256),
            ParamType::Uint(256),
            ParamType::Uint(256),
        ])],
        data,
    )?;
    let mut fields = outer.tuple()?;
    Ok(Duel {
        id: fields.uint()?,
        creator: fields.address()?,
        opponent: fields.optional_address()?,
        stake: fields.uint()?,
        duration: fields.discriminant()?,
        status: fields.discriminant()?,
        start_time: fields.u64()?,
        end_time: fields.u64()?,
        winner: fields.optional_address()?,
        creator_correct: fields.u64()?,
        creator_total: fields.u64()?,
        opponent_correct: fields.u64()?,
        opponent_total: fields.u64()?,
    })
}

pub fn decode_duel_predictions(data: &[u8]) -> Result<Vec<DuelPrediction>, ClientError> {
    let mut outer = Fields::decode(
        GET_DUEL_PREDICTIONS,
        &[ParamType::Array(Box::new(ParamType::Tuple(vec![
            ParamType::Uint(256),
            ParamType::Bool,
            ParamType::Bool,
            ParamType::Bool,
            ParamType::Uint(256),
            ParamType::Uint(256),
            ParamType::String,
        ])))],
        data,
    )?;
    outer
        .array()?
        .into_iter()
        .map(|token| {
            let mut fields = Fields::single(GET_DUEL_PREDICTIONS, token).tuple()?;
            Ok(DuelPrediction {
                initial_price: fields.uint()?,
                predicted_higher: fields.boolean()?,
                resolved: fields.boolean()?,
                won: fields.boolean()?,
                timestamp: fields.u64()?,
                resolution_time: fields.u64()?,
                symbol: fields.string()?,
            })
        })
        .collect()
}

/// Sequential reader over decoded tokens that reports shape errors against
/// the call they came from.
struct Fields {
    call: &'static str,
    tokens: std::vec::IntoIter<Token>,
}

impl Fields {
    fn new(call: &'static str, tokens: Vec<Token>) -> Self {
        Self {
            call,
            tokens: tokens.into_iter(),
        }
    }

    fn single(call: &'static str, token: Token) -> Self {
        Self::new(call, vec![token])
    }

    fn decode(call: &'static str, types: &[ParamType], data: &[u8]) -> Result<Self, ClientError> {
        if data.is_empty() {
            return Err(ClientError::decode(call, "empty return data"));
        }
        let tokens = abi::decode(types, data).map_err(|e| ClientError::decode(call, e))?;
        Ok(Self::new(call, tokens))
    }

    fn next(&mut self) -> Result<Token, ClientError> {
        self.tokens
            .next()
            .ok_or_else(|| ClientError::decode(self.call, "missing field"))
    }

    fn unexpected(&self, expected: &str, found: &Token) -> ClientError {
        ClientError::decode(self.call, format!("expected {expected}, found {found:?}"))
    }

    fn uint(&mut self) -> Result<U256, ClientError> {
        match self.next()? {
            Token::Uint(value) => Ok(value),
            other => Err(self.unexpected("uint", &other)),
        }
    }

    fn non_negative_int(&mut self) -> Result<U256, ClientError> {
        match self.next()? {
            Token::Int(raw) if !I256::from_raw(raw).is_negative() => Ok(raw),
            Token::Int(_) => Err(ClientError::decode(self.call, "negative price")),
            other => Err(self.unexpected("int", &other)),
        }
    }

    fn u64(&mut self) -> Result<u64, ClientError> {
        let value = self.uint()?;
        if value > U256::from(u64::MAX) {
            return Err(ClientError::decode(self.call, format!("{value} overflows u64")));
        }
        Ok(value.low_u64())
    }

    fn u8(&mut self) -> Result<u8, ClientError> {
        let value = self.uint()?;
        if value > U256::from(u8::MAX) {
            return Err(ClientError::decode(self.call, format!("{value} overflows u8")));
        }
        Ok(value.low_u32() as u8)
    }

    fn discriminant<E>(&mut self) -> Result<E, ClientError>
    where
        E: TryFromPrimitive<Primitive = u8>,
    {
        let raw = self.u8()?;
        E::try_from_primitive(raw).map_err(|_| {
            ClientError::decode(
                self.call,
                format!("unknown {} discriminant {raw}", E::NAME),
            )
        })
    }

    fn address(&mut self) -> Result<Address, ClientError> {
        match self.next()? {
            Token::Address(address) => Ok(address),
            other => Err(self.unexpected("address", &other)),
        }
    }

    /// The zero address stands for "nobody".
    fn optional_address(&mut self) -> Result<Option<Address>, ClientError> {
        let address = self.address()?;
        Ok((!address.is_zero()).then_some(address))
    }

    fn boolean(&mut self) -> Result<bool, ClientError> {
        match self.next()? {
            Token::Bool(value) => Ok(value),
            other => Err(self.unexpected("bool", &other)),
        }
    }

    fn string(&mut self) -> Result<String, ClientError> {
        match self.next()? {
            Token::String(value) => Ok(value),
            other => Err(self.unexpected("string", &other)),
        }
    }

    fn array(&mut self) -> Result<Vec<Token>, ClientError> {
        match self.next()? {
            Token::Array(items) => Ok(items),
            other => Err(self.unexpected("array", &other)),
        }
    }

    fn tuple(&mut self) -> Result<Fields, ClientError> {
        match self.next()? {
            Token::Tuple(items) => Ok(Fields::new(self.call, items)),
            other => Err(self.unexpected("tuple", &other)),
        }
    }
}
