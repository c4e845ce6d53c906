mod duel_stats;
mod duels;
mod home;
mod leaderboard;
mod my_predictions;
mod predictions;

pub use duel_stats::DuelStats;
pub use home::Home;

use duels::DuelsTab;
use leaderboard::LeaderboardTab;
use my_predictions::MyPredictionsTab;
use predictions::PredictionsTab;
