use ethers_core::types::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::consts::PRICE_DECIMALS;
use crate::format::{accuracy, format_price};

use super::{Direction, Outcome};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// The prediction id assigned by the game contract.
    pub id: U256,

    /// The player who made the prediction.
    pub owner: Address,

    /// The symbol whose price is predicted.
    pub symbol: String,

    /// Whether the player bet on the price going up.
    pub predicted_higher: bool,

    /// Oracle price when the prediction was made (8 decimals).
    pub initial_price: U256,

    /// Unix time the prediction was made.
    pub timestamp: u64,

    /// Unix time after which the contract may resolve the prediction.
    pub resolution_time: u64,

    /// Whether the contract has resolved the prediction.
    pub resolved: bool,

    /// Whether the prediction was correct. Meaningless until resolved.
    pub won: bool,
}

impl Prediction {
    pub fn direction(&self) -> Direction {
        Direction::from(self.predicted_higher)
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::new(self.resolved, self.won)
    }

    pub fn start_price(&self) -> String {
        format_price(self.initial_price, PRICE_DECIMALS)
    }
}

/// A prediction made inside a duel, scoped to one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelPrediction {
    pub initial_price: U256,
    pub predicted_higher: bool,
    pub resolved: bool,
    pub won: bool,
    pub timestamp: u64,
    pub resolution_time: u64,
    pub symbol: String,
}

impl DuelPrediction {
    pub fn direction(&self) -> Direction {
        Direction::from(self.predicted_higher)
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::new(self.resolved, self.won)
    }

    pub fn start_price(&self) -> String {
        format_price(self.initial_price, PRICE_DECIMALS)
    }

    /// Badge shown once resolved.
    pub fn verdict(&self) -> Option<&'static str> {
        match self.outcome() {
            Outcome::Pending => None,
            Outcome::Won => Some("✓ Correct"),
            Outcome::Lost => Some("✗ Wrong"),
        }
    }
}

/// Aggregate prediction counts the game keeps per player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total: u64,
    pub correct: u64,
    pub incorrect: u64,
    pub pending: u64,
}

impl UserStats {
    pub fn accuracy(&self) -> String {
        accuracy(self.correct, self.total)
    }
}
