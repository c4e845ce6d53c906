use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::hooks::{use_account, use_leaderboard};

#[component]
pub fn LeaderboardTab() -> Element {
    let account = use_account();
    let leaderboard = use_leaderboard();

    let body = match leaderboard.state() {
        ReadState::Ready(entries) if entries.is_empty() => rsx! {
            div { class: "text-center py-12",
                p { class: "text-gray-500", "No players yet. Be the first to make a prediction!" }
            }
        },
        ReadState::Ready(entries) => rsx! {
            div { class: "space-y-3",
                for entry in entries {
                    Row { key: "{entry.player:?}", is_viewer: account == Some(entry.player), entry }
                }
            }
        },
        ReadState::Failed(error) => rsx! {
            div { class: "text-center py-12",
                p { class: "text-red-400", "Error: {error}" }
            }
        },
        _ => rsx! {
            div { class: "text-center py-12",
                div { class: "animate-spin w-8 h-8 border-2 border-duel-400 border-t-transparent rounded-full mx-auto mb-4" }
                p { class: "text-gray-500", "Loading leaderboard..." }
            }
        },
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "flex justify-between items-center",
                h2 { class: "text-2xl font-bold", "🏆 Top Predictors" }
                button {
                    class: "text-sm text-gray-400 hover:text-gray-100",
                    onclick: move |_| leaderboard.refetch(),
                    "🔄 Refresh"
                }
            }
            {body}
            div { class: "p-4 rounded bg-orange-900/20",
                p { class: "text-sm text-gray-300",
                    strong { "Scoring: " }
                    "Earn {POINTS_PER_WIN} points for each correct prediction. Make more predictions to climb the leaderboard!"
                }
            }
        }
    }
}

#[component]
fn Row(entry: LeaderboardEntry, is_viewer: bool) -> Element {
    let rank = entry.rank_label();
    let row_class = match entry.rank {
        1 => "bg-yellow-500 text-gray-900",
        2 => "bg-gray-400 text-gray-900",
        3 => "bg-orange-500 text-gray-900",
        _ => "elevated",
    };
    let name = if is_viewer {
        "You".to_string()
    } else {
        short_address(&entry.player)
    };

    rsx! {
        div { class: "p-4 rounded flex items-center justify-between {row_class}",
            div { class: "flex items-center gap-4",
                span { class: "text-2xl font-bold w-8", "{rank}" }
                p { class: "font-mono text-sm", "{name}" }
            }
            div { class: "text-right",
                p { class: "text-2xl font-bold", "{entry.score}" }
                p { class: "text-xs opacity-75", "points" }
            }
        }
    }
}
