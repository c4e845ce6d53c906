use duels_api::prelude::*;

use super::{use_read, Query};

pub fn use_duel_count() -> Query<U256> {
    use_read(Some(ReadCall::DuelCount))
}

pub fn use_duel(id: Option<U256>) -> Query<Duel> {
    use_read(id.map(|id| ReadCall::Duel { id }))
}

pub fn use_duel_predictions(id: Option<U256>, player: Option<Address>) -> Query<Vec<DuelPrediction>> {
    let key = match (id, player) {
        (Some(id), Some(player)) => Some(ReadCall::DuelPredictions { id, player }),
        _ => None,
    };
    use_read(key)
}
