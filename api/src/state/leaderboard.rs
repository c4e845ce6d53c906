use ethers_core::types::{Address, U256};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position on the board.
    pub rank: usize,
    pub player: Address,
    pub score: U256,
}

impl LeaderboardEntry {
    /// Medal for the podium, `N.` below it.
    pub fn rank_label(&self) -> String {
        match self.rank {
            1 => "🥇".to_string(),
            2 => "🥈".to_string(),
            3 => "🥉".to_string(),
            n => format!("{n}."),
        }
    }
}
