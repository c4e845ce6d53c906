mod duel;
mod leaderboard;
mod prediction;
mod price;

pub use duel::*;
pub use leaderboard::*;
pub use prediction::*;
pub use price::*;

use crate::consts::POINTS_PER_WIN;

/// Direction a player bets the price will move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    pub fn is_higher(self) -> bool {
        matches!(self, Direction::Higher)
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Higher => "Higher",
            Direction::Lower => "Lower",
        }
    }

    pub fn icon_label(self) -> &'static str {
        match self {
            Direction::Higher => "📈 Higher",
            Direction::Lower => "📉 Lower",
        }
    }
}

impl From<bool> for Direction {
    fn from(predicted_higher: bool) -> Self {
        if predicted_higher {
            Direction::Higher
        } else {
            Direction::Lower
        }
    }
}

/// Resolution state of a single prediction, as settled by the game contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Won,
    Lost,
}

impl Outcome {
    pub fn new(resolved: bool, won: bool) -> Self {
        match (resolved, won) {
            (false, _) => Outcome::Pending,
            (true, true) => Outcome::Won,
            (true, false) => Outcome::Lost,
        }
    }

    pub fn is_resolved(self) -> bool {
        !matches!(self, Outcome::Pending)
    }

    pub fn badge(self) -> &'static str {
        match self {
            Outcome::Pending => "⏳ Pending",
            Outcome::Won => "✅ Won",
            Outcome::Lost => "❌ Lost",
        }
    }

    pub fn points(self) -> u64 {
        match self {
            Outcome::Won => POINTS_PER_WIN,
            _ => 0,
        }
    }
}
