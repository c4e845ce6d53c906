use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::components::{Badge, Card, Tone};

#[derive(Props, Clone, PartialEq)]
pub struct PlayerStatsProps {
    title: &'static str,
    #[props(!optional)]
    player: Option<Address>,
    record: PlayerRecord,
    #[props(default = false)]
    winner: bool,
    #[props(default = false)]
    is_viewer: bool,
}

/// One side of a duel: who it is and how their predictions went.
#[component]
pub fn PlayerStats(props: PlayerStatsProps) -> Element {
    let Some(player) = props.player else {
        return rsx! {
            Card { title: props.title.to_string(),
                p { class: "text-gray-500 text-center py-6", "⏳ Waiting for opponent to join..." }
            }
        };
    };

    let name = if props.is_viewer {
        "You".to_string()
    } else {
        short_address(&player)
    };
    let accuracy = props.record.accuracy();
    let width = accuracy_ratio(props.record.correct, props.record.total);

    rsx! {
        Card { title: props.title.to_string(),
            div { class: "space-y-3",
                div { class: "flex justify-between items-center",
                    span { class: "font-mono text-gray-300", "{name}" }
                    if props.winner {
                        Badge { label: "🏆 WINNER".to_string(), tone: Tone::Success }
                    }
                }
                StatRow {
                    label: "Total Predictions",
                    value: props.record.total.to_string(),
                }
                StatRow {
                    label: "Correct",
                    value: props.record.correct.to_string(),
                    highlight: props.record.correct > 0,
                }
                StatRow {
                    label: "Accuracy",
                    value: format!("{accuracy}%"),
                }
                div { class: "w-full h-2 bg-gray-800 rounded",
                    div {
                        class: "h-2 bg-duel-400 rounded",
                        style: "width: {width:.1}%",
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatRowProps {
    label: &'static str,
    value: String,
    #[props(default = false)]
    highlight: bool,
}

#[component]
pub fn StatRow(props: StatRowProps) -> Element {
    let value_class = if props.highlight {
        "text-duel-400 font-semibold"
    } else {
        "text-gray-300"
    };

    rsx! {
        div { class: "flex justify-between items-center",
            span { class: "text-gray-500", "{props.label}" }
            span { class: "{value_class} font-mono", "{props.value}" }
        }
    }
}
