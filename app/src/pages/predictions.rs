use std::time::Duration;

use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::components::{DirectionButtons, PriceCard};
use crate::hooks::{use_account, use_active_prediction, use_clock, use_user_score, use_write};

#[component]
pub fn PredictionsTab() -> Element {
    let account = use_account();
    let score = use_user_score(account);
    let active = use_active_prediction(account);
    let write = use_write();
    let now = use_clock(Duration::from_millis(u64::from(COUNTDOWN_REFRESH_MS)));

    let points = score.value().unwrap_or_default();
    let pending = usize::from(active.read().is_some());
    let gate = SubmitGate::evaluate(write.is_busy(), pending);
    let submitted = write.status().is_success();
    let contract = checksum(&CONTRACTS.prediction_game);

    let on_predict = move |direction: Direction| {
        write.submit(WriteCall::MakePrediction {
            symbol: SYMBOL.to_string(),
            predicted_higher: direction.is_higher(),
        });
    };

    rsx! {
        div { class: "space-y-6",
            h2 { class: "text-2xl font-bold", "Make a Prediction" }

            PriceCard {}

            div { class: "p-3 rounded bg-yellow-900/20",
                p { class: "text-sm text-gray-300",
                    "Your Score: "
                    span { class: "font-bold text-lg", "{points} points" }
                }
            }

            if let Some(prediction) = active() {
                ActivePanel { prediction, now: now() }
            }

            div {
                p { class: "text-gray-300 mb-3",
                    "Will {SYMBOL} price be higher or lower in 24 hours?"
                }
                DirectionButtons { gate, on_predict }
            }

            if submitted {
                div { class: "p-3 rounded border border-green-800 bg-green-900/20",
                    p { class: "text-green-200 font-semibold", "✅ Prediction submitted successfully!" }
                }
            }

            div { class: "p-4 rounded bg-gray-700 text-sm text-gray-300 space-y-1",
                p {
                    strong { "Contract: " }
                    span { class: "font-mono break-all", "{contract}" }
                }
                p {
                    strong { "How it works: " }
                    "Predictions are free! Earn points for correct predictions and climb the leaderboard."
                }
            }
        }
    }
}

/// Blocking notice shown while the player's last prediction is unresolved.
#[component]
fn ActivePanel(prediction: Prediction, now: u64) -> Element {
    let direction = prediction.direction().icon_label();
    let start = prediction.start_price();
    let remaining = match resolves_in(prediction.resolution_time, now) {
        Some(left) => format!("⏰ You cannot make a new prediction until this one resolves (in {left})"),
        None => "⏳ Ready to resolve".to_string(),
    };

    rsx! {
        div { class: "p-5 rounded border-2 border-orange-600 bg-orange-900/40 text-white",
            div { class: "flex items-start gap-3",
                div { class: "text-3xl", "⚠️" }
                div { class: "flex-1",
                    h3 { class: "font-bold text-xl mb-2", "Active Prediction in Progress" }
                    div { class: "rounded p-3 mb-3 bg-white/20 text-sm space-y-1",
                        p { class: "font-semibold", "Direction: {direction}" }
                        p { "Start Price: " strong { "{start}" } }
                        p { "Crypto: " strong { "{prediction.symbol}" } }
                    }
                    p { class: "text-sm font-semibold", "{remaining}" }
                    p { class: "text-xs opacity-90 mt-2",
                        "Check the \"My Predictions\" tab to see all your predictions"
                    }
                }
            }
        }
    }
}
