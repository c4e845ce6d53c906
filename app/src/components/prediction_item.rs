use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::components::{Badge, Tone};
use crate::hooks::use_prediction;

/// One row of the player's prediction history.
#[component]
pub fn PredictionItem(id: U256) -> Element {
    let prediction = use_prediction(Some(id));

    let Some(prediction) = prediction.value() else {
        return rsx! {
            div { class: "animate-pulse h-16 bg-gray-800 rounded" }
        };
    };

    let outcome = prediction.outcome();
    let direction = prediction.direction().icon_label();
    let start = prediction.start_price();
    let date = format_timestamp(prediction.timestamp);
    let points = match outcome.points() {
        0 => "0".to_string(),
        points => format!("+{points}"),
    };

    rsx! {
        div { class: "flex justify-between items-center p-4 rounded elevated border elevated-border",
            div { class: "space-y-1",
                div { class: "flex items-center gap-2",
                    span { class: "font-semibold", "{prediction.symbol}" }
                    span { "{direction}" }
                }
                p { class: "text-sm text-gray-400", "Start: {start}" }
                p { class: "text-xs text-gray-500", "{date}" }
            }
            div { class: "text-right space-y-1",
                Badge { label: outcome.badge().to_string(), tone: Tone::from(outcome) }
                p { class: "font-mono text-duel-400", "{points}" }
            }
        }
    }
}
