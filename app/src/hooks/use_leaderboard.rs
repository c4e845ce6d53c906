use duels_api::prelude::*;

use super::{use_read, Query};

/// Top players by score, empty slots already dropped.
pub fn use_leaderboard() -> Query<Vec<LeaderboardEntry>> {
    use_read(Some(ReadCall::Leaderboard {
        limit: LEADERBOARD_LIMIT,
    }))
}

pub fn use_user_score(user: Option<Address>) -> Query<U256> {
    use_read(user.map(|user| ReadCall::UserScore { user }))
}
