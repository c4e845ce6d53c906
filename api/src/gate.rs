//! Client-side gating of new predictions.
//!
//! The game allows one open prediction per player at a time; these helpers
//! work out whether a submit control should be enabled and what it says.

use ethers_core::types::U256;

use crate::state::{DuelPrediction, Prediction, UserStats};

/// The most recently created prediction id, by list position.
pub fn latest_prediction_id(ids: &[U256]) -> Option<U256> {
    ids.last().copied()
}

/// The player's unresolved prediction, if the stats report one pending and
/// the newest prediction is still open.
pub fn active_prediction(
    stats: Option<&UserStats>,
    latest: Option<&Prediction>,
) -> Option<Prediction> {
    let pending = stats.map(|stats| stats.pending).unwrap_or(0);
    match latest {
        Some(prediction) if pending > 0 && !prediction.resolved => Some(prediction.clone()),
        _ => None,
    }
}

pub fn pending_count(predictions: &[DuelPrediction]) -> usize {
    predictions.iter().filter(|p| !p.resolved).count()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitGate {
    Ready,
    /// A write is pending or confirming.
    Processing,
    Locked { pending: usize },
}

impl SubmitGate {
    pub fn evaluate(busy: bool, pending: usize) -> Self {
        if busy {
            SubmitGate::Processing
        } else if pending > 0 {
            SubmitGate::Locked { pending }
        } else {
            SubmitGate::Ready
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, SubmitGate::Ready)
    }

    pub fn label<'a>(&self, ready_label: &'a str) -> &'a str {
        match self {
            SubmitGate::Ready => ready_label,
            SubmitGate::Processing => "⏳ Processing...",
            SubmitGate::Locked { .. } => "🔒 Locked",
        }
    }

    pub fn hint(&self) -> Option<String> {
        match self {
            SubmitGate::Locked { pending: 1 } => {
                Some("You already have an active prediction".to_string())
            }
            SubmitGate::Locked { pending } => {
                Some(format!("{pending} prediction(s) pending - wait for resolution"))
            }
            _ => None,
        }
    }
}

/// Shown when a player tries to submit while locked.
pub fn pending_alert(pending: usize) -> String {
    format!(
        "You have {pending} prediction(s) pending resolution. Please wait for them to resolve before making a new prediction."
    )
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use ethers_core::types::Address;
    use proptest::prelude::*;

    use super::*;

    fn prediction(resolved: bool) -> Prediction {
        Prediction {
            id: U256::from(9),
            owner: Address::repeat_byte(1),
            symbol: "ETH".to_string(),
            predicted_higher: true,
            initial_price: U256::from(300_000_000_000u64),
            timestamp: 1_700_000_000,
            resolution_time: 1_700_003_600,
            resolved,
            won: false,
        }
    }

    fn duel_prediction(resolved: bool) -> DuelPrediction {
        DuelPrediction {
            initial_price: U256::from(300_000_000_000u64),
            predicted_higher: false,
            resolved,
            won: resolved,
            timestamp: 1_700_000_000,
            resolution_time: 1_700_003_600,
            symbol: "ETH".to_string(),
        }
    }

    #[test]
    fn active_prediction__requires_pending_stats_and_open_latest() {
        // given
        let pending = UserStats {
            total: 3,
            correct: 1,
            incorrect: 1,
            pending: 1,
        };
        let settled = UserStats {
            pending: 0,
            ..pending
        };

        // then
        assert!(active_prediction(Some(&pending), Some(&prediction(false))).is_some());
        assert!(active_prediction(Some(&pending), Some(&prediction(true))).is_none());
        assert!(active_prediction(Some(&settled), Some(&prediction(false))).is_none());
        assert!(active_prediction(None, Some(&prediction(false))).is_none());
        assert!(active_prediction(Some(&pending), None).is_none());
    }

    #[test]
    fn latest_prediction_id__is_last_in_list() {
        assert_eq!(latest_prediction_id(&[]), None);
        assert_eq!(
            latest_prediction_id(&[U256::from(2), U256::from(7)]),
            Some(U256::from(7))
        );
    }

    #[test]
    fn gate__labels_and_hints() {
        assert_eq!(SubmitGate::evaluate(true, 2).label("Predict"), "⏳ Processing...");
        assert_eq!(SubmitGate::evaluate(false, 2).label("Predict"), "🔒 Locked");
        assert_eq!(SubmitGate::evaluate(false, 0).label("Predict"), "Predict");
        assert_eq!(
            SubmitGate::evaluate(false, 2).hint().as_deref(),
            Some("2 prediction(s) pending - wait for resolution")
        );
        assert_eq!(
            SubmitGate::evaluate(false, 1).hint().as_deref(),
            Some("You already have an active prediction")
        );
    }

    #[test]
    fn pending_alert__names_count() {
        assert_eq!(
            pending_alert(2),
            "You have 2 prediction(s) pending resolution. Please wait for them to resolve before making a new prediction."
        );
    }

    proptest! {
        #[test]
        fn gate__enabled_only_without_pending_or_busy(
            resolved in prop::collection::vec(any::<bool>(), 0..12),
            busy in any::<bool>(),
        ) {
            let predictions: Vec<_> = resolved.iter().map(|r| duel_prediction(*r)).collect();
            let pending = pending_count(&predictions);

            let gate = SubmitGate::evaluate(busy, pending);

            prop_assert_eq!(pending, resolved.iter().filter(|r| !**r).count());
            prop_assert_eq!(gate.is_enabled(), !busy && pending == 0);
        }
    }
}
