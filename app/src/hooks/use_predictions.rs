use dioxus::prelude::*;
use duels_api::prelude::*;

use super::{use_read, Query};

pub fn use_price() -> Query<PricePoint> {
    use_read(Some(ReadCall::LatestPrice {
        symbol: SYMBOL.to_string(),
    }))
}

pub fn use_user_predictions(user: Option<Address>) -> Query<Vec<U256>> {
    use_read(user.map(|user| ReadCall::UserPredictions { user }))
}

pub fn use_prediction(id: Option<U256>) -> Query<Prediction> {
    use_read(id.map(|id| ReadCall::Prediction { id }))
}

pub fn use_user_stats(user: Option<Address>) -> Query<UserStats> {
    use_read(user.map(|user| ReadCall::UserStats { user }))
}

/// The player's open prediction, derived from their stats and newest prediction.
pub fn use_active_prediction(user: Option<Address>) -> Memo<Option<Prediction>> {
    let stats = use_user_stats(user);
    let ids = use_user_predictions(user);
    let latest_id = ids.value().as_deref().and_then(latest_prediction_id);
    let latest = use_prediction(latest_id);

    use_memo(move || active_prediction(stats.value().as_ref(), latest.value().as_ref()))
}
