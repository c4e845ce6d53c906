use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::components::{Button, PredictionItem};
use crate::hooks::{use_account, use_user_predictions, use_user_stats};

#[component]
pub fn MyPredictionsTab(on_back: EventHandler<()>) -> Element {
    let account = use_account();
    let stats = use_user_stats(account);
    let predictions = use_user_predictions(account);

    let refresh = predictions.clone();

    // Newest first
    let ids: Vec<U256> = predictions
        .value()
        .unwrap_or_default()
        .into_iter()
        .rev()
        .collect();

    rsx! {
        div { class: "space-y-6",
            div { class: "flex justify-between items-center",
                h2 { class: "text-2xl font-bold", "📊 My Predictions" }
                button {
                    class: "text-sm text-gray-400 hover:text-gray-100",
                    onclick: move |_| refresh.refetch(),
                    "🔄 Refresh"
                }
            }

            if let Some(stats) = stats.value() {
                StatsGrid { stats }
            }

            if predictions.is_loading() {
                div { class: "text-center py-12",
                    div { class: "animate-spin w-8 h-8 border-2 border-duel-400 border-t-transparent rounded-full mx-auto mb-4" }
                    p { class: "text-gray-500", "Loading predictions..." }
                }
            } else if let Some(error) = predictions.error() {
                p { class: "text-red-400 text-center py-12", "Error: {error}" }
            } else if ids.is_empty() {
                div { class: "text-center py-12 space-y-4",
                    p { class: "text-gray-500", "No predictions yet. Make your first prediction!" }
                    Button {
                        label: "Make Prediction".to_string(),
                        onclick: move |_| on_back.call(()),
                    }
                }
            } else {
                div { class: "space-y-3",
                    for id in ids {
                        PredictionItem { key: "{id}", id }
                    }
                }
            }
        }
    }
}

#[component]
fn StatsGrid(stats: UserStats) -> Element {
    let accuracy = stats.accuracy();

    rsx! {
        div { class: "grid grid-cols-2 md:grid-cols-5 gap-4",
            StatTile { label: "Total", value: stats.total.to_string() }
            StatTile { label: "Correct", value: stats.correct.to_string(), class: "text-green-400" }
            StatTile { label: "Incorrect", value: stats.incorrect.to_string(), class: "text-red-400" }
            StatTile { label: "Pending", value: stats.pending.to_string(), class: "text-yellow-400" }
            StatTile { label: "Accuracy", value: format!("{accuracy}%"), class: "text-duel-400" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatTileProps {
    label: &'static str,
    value: String,
    #[props(default = "text-gray-100")]
    class: &'static str,
}

#[component]
fn StatTile(props: StatTileProps) -> Element {
    rsx! {
        div { class: "p-4 rounded elevated text-center",
            p { class: "text-2xl font-bold {props.class}", "{props.value}" }
            p { class: "text-xs text-gray-500", "{props.label}" }
        }
    }
}
