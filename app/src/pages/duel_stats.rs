use std::time::Duration;

use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::components::{Badge, Card, DirectionButtons, NetworkIndicator, PlayerStats, PriceCard, StatRow, Tone};
use crate::hooks::{alert, use_account, use_clock, use_duel, use_duel_predictions, use_write};
use crate::route::Route;

/// Full view of one duel: terms, payout, both players and their predictions.
#[component]
pub fn DuelStats(id: u64) -> Element {
    let duel_id = U256::from(id);
    let account = use_account();
    let duel = use_duel(Some(duel_id));
    let loaded = duel.value();

    let creator = loaded.as_ref().map(|duel| duel.creator);
    let opponent = loaded.as_ref().and_then(|duel| duel.opponent);
    let creator_predictions = use_duel_predictions(Some(duel_id), creator);
    let opponent_predictions = use_duel_predictions(Some(duel_id), opponent);

    let body = match (loaded, duel.error()) {
        (Some(duel), _) => {
            let viewer_side = account.and_then(|account| duel.side_of(&account));
            let viewer_predictions = match viewer_side {
                Some(Side::Creator) => creator_predictions.value(),
                Some(Side::Opponent) => opponent_predictions.value(),
                None => None,
            };
            let pending = viewer_predictions.as_deref().map(pending_count).unwrap_or(0);
            let active = duel.status == DuelStatus::Active;
            let has_opponent = duel.has_opponent();
            let creator_list = creator_predictions.value().unwrap_or_default();
            let opponent_list = opponent_predictions.value().unwrap_or_default();
            let creator_loading = creator_predictions.is_loading();
            let opponent_loading = opponent_predictions.is_loading();

            rsx! {
                Overview { duel: duel.clone() }

                if active && viewer_side.is_some() {
                    PredictPanel { duel_id, pending }
                }
                if active && viewer_side.is_none() {
                    div { class: "p-4 rounded border border-blue-800 bg-blue-900/20 text-center text-blue-200",
                        "👀 You are viewing this duel as a spectator. Only participants can make predictions."
                    }
                }

                div { class: "grid md:grid-cols-2 gap-6",
                    PlayerStats {
                        title: "👤 Creator",
                        player: Some(duel.creator),
                        record: duel.record(Side::Creator),
                        winner: duel.is_winner(Side::Creator),
                        is_viewer: viewer_side == Some(Side::Creator),
                    }
                    PlayerStats {
                        title: "👤 Opponent",
                        player: duel.opponent,
                        record: duel.record(Side::Opponent),
                        winner: duel.is_winner(Side::Opponent),
                        is_viewer: viewer_side == Some(Side::Opponent),
                    }
                }

                if has_opponent {
                    div { class: "grid md:grid-cols-2 gap-6",
                        PredictionList {
                            title: "Creator's Predictions",
                            predictions: creator_list,
                            loading: creator_loading,
                        }
                        PredictionList {
                            title: "Opponent's Predictions",
                            predictions: opponent_list,
                            loading: opponent_loading,
                        }
                    }
                }
            }
        }
        (None, Some(error)) => rsx! {
            Card {
                p { class: "text-red-400 text-center py-12", "Error loading duel: {error}" }
            }
        },
        (None, None) => rsx! {
            div { class: "text-center py-16",
                div { class: "animate-spin w-8 h-8 border-2 border-duel-400 border-t-transparent rounded-full mx-auto mb-4" }
                p { class: "text-gray-500", "Loading duel statistics..." }
            }
        },
    };

    rsx! {
        div { class: "max-w-6xl mx-auto space-y-6",
            div { class: "flex items-center justify-between",
                div { class: "flex items-center gap-4",
                    Link { to: Route::Home {}, class: "text-gray-400 hover:text-gray-100", "← Back" }
                    h1 { class: "text-2xl font-bold", "⚔️ Duel #{id} Statistics" }
                }
                div { class: "flex items-center gap-4",
                    button {
                        class: "text-sm text-gray-400 hover:text-gray-100",
                        onclick: move |_| duel.refetch(),
                        "🔄 Refresh"
                    }
                    NetworkIndicator {}
                }
            }
            {body}
        }
    }
}

/// Terms of the duel and how the pot is split.
#[component]
fn Overview(duel: Duel) -> Element {
    let now = use_clock(Duration::from_millis(u64::from(COUNTDOWN_REFRESH_MS)));

    let split = duel.pot();
    let stake = format_ether(split.stake);
    let pot = format_ether(split.pot);
    let fee = format_ether_fixed(split.fee, 6);
    let winner_takes = format_ether_fixed(split.winner, 6);
    let show_countdown = duel.has_opponent() && duel.status == DuelStatus::Active;
    let remaining = countdown(duel.end_time, now());
    let outcome = duel.outcome();

    rsx! {
        Card {
            div { class: "grid md:grid-cols-2 gap-6",
                div { class: "space-y-3",
                    h2 { class: "text-xl font-bold mb-4", "Duel Information" }
                    div { class: "flex justify-between items-center",
                        span { class: "text-gray-500", "Status" }
                        Badge { label: duel.status.label().to_string(), tone: Tone::from(duel.status) }
                    }
                    StatRow { label: "Stake (each)", value: format!("{stake} ETH"), highlight: true }
                    StatRow { label: "Total Pot", value: format!("{pot} ETH"), highlight: true }
                    StatRow { label: "Duration", value: duel.duration.label().to_string() }
                    if show_countdown {
                        StatRow { label: "Time Remaining", value: remaining }
                    }
                }
                div { class: "space-y-3",
                    h2 { class: "text-xl font-bold mb-4", "Prize Distribution" }
                    StatRow { label: "Platform Fee (3%)", value: format!("{fee} ETH") }
                    StatRow { label: "Winner Takes", value: format!("{winner_takes} ETH"), highlight: true }
                    match outcome {
                        DuelOutcome::Tie => rsx! {
                            div { class: "mt-4 p-3 rounded border border-blue-800 bg-blue-900/20 text-sm text-blue-200",
                                "🤝 "
                                strong { "Tie!" }
                                " Both players received their stakes back."
                            }
                        },
                        DuelOutcome::Winner(winner) => {
                            let winner = checksum(&winner);
                            rsx! {
                                div { class: "mt-4 p-3 rounded border border-yellow-800 bg-yellow-900/20",
                                    p { class: "text-sm text-yellow-200 mb-1", "🏆 " strong { "Winner:" } }
                                    p { class: "text-xs font-mono break-all", "{winner}" }
                                }
                            }
                        }
                        DuelOutcome::Undecided => rsx! {},
                    }
                }
            }
        }
    }
}

/// Higher/Lower for a participant of an active duel.
#[component]
fn PredictPanel(duel_id: U256, pending: usize) -> Element {
    let write = use_write();
    let status = write.status();
    let gate = SubmitGate::evaluate(write.is_busy(), pending);

    let on_predict = move |direction: Direction| {
        if pending > 0 {
            alert(&pending_alert(pending));
            return;
        }
        write.submit(WriteCall::MakeDuelPrediction {
            duel_id,
            symbol: SYMBOL.to_string(),
            predicted_higher: direction.is_higher(),
        });
    };

    let progress = if status.is_pending() {
        Some(("⏳ Awaiting wallet confirmation...", "Please confirm in your wallet"))
    } else if status.is_confirming() {
        Some(("⏳ Transaction confirming...", "Waiting for blockchain confirmation"))
    } else {
        None
    };

    rsx! {
        div { class: "p-6 rounded bg-duel-700 text-white space-y-4",
            h2 { class: "text-2xl font-bold", "⚔️ Make Your Prediction" }
            PriceCard {}
            p { class: "text-sm opacity-90",
                "Predict if {SYMBOL} price will be "
                strong { "higher or lower" }
                " in 24 hours. Each correct prediction counts toward your score!"
            }

            if status.is_success() {
                div { class: "p-3 rounded bg-green-600 text-center",
                    p { class: "font-bold", "✅ Prediction submitted successfully!" }
                    p { class: "text-sm opacity-90", "It will resolve in 24 hours" }
                }
            }
            if pending > 0 && !write.is_busy() {
                div { class: "p-3 rounded bg-orange-600 text-center",
                    p { class: "font-bold", "⏳ You have {pending} prediction(s) pending resolution" }
                    p { class: "text-sm opacity-90", "Wait for them to resolve before making a new prediction" }
                }
            }
            if let Some((headline, detail)) = progress {
                div { class: "p-3 rounded bg-blue-600 text-center",
                    p { class: "font-bold", "{headline}" }
                    p { class: "text-sm opacity-90", "{detail}" }
                }
            }

            DirectionButtons { gate, on_predict }
        }
    }
}

#[component]
fn PredictionList(title: &'static str, predictions: Vec<DuelPrediction>, loading: bool) -> Element {
    let count = predictions.len();
    let cards = predictions.into_iter().enumerate().map(|(index, prediction)| {
        rsx! {
            PredictionCard { key: "{index}", index: index + 1, prediction }
        }
    });

    rsx! {
        Card { title: format!("{title} ({count})"),
            if loading {
                div { class: "text-center py-4",
                    div { class: "animate-spin w-8 h-8 border-2 border-duel-400 border-t-transparent rounded-full mx-auto" }
                }
            } else if count == 0 {
                p { class: "text-gray-500 text-center py-4", "No predictions yet" }
            } else {
                div { class: "space-y-3 max-h-96 overflow-y-auto", {cards} }
            }
        }
    }
}

#[component]
fn PredictionCard(index: usize, prediction: DuelPrediction) -> Element {
    let now = use_clock(Duration::from_millis(u64::from(COUNTDOWN_REFRESH_MS)));

    let direction = prediction.direction().icon_label();
    let start = prediction.start_price();
    let date = format_timestamp(prediction.timestamp);
    let outcome = prediction.outcome();
    let border = match outcome {
        Outcome::Pending => "border-gray-600",
        Outcome::Won => "border-green-800 bg-green-900/20",
        Outcome::Lost => "border-red-800 bg-red-900/20",
    };
    let timing = if outcome.is_resolved() {
        None
    } else {
        Some(match resolves_in(prediction.resolution_time, now()) {
            Some(left) => format!("⏳ Resolves in {left}"),
            None => "⏳ Ready to resolve".to_string(),
        })
    };

    rsx! {
        div { class: "p-3 rounded border-2 {border}",
            div { class: "flex justify-between items-start mb-2",
                div {
                    p { class: "font-semibold text-sm", "Prediction #{index}" }
                    p { class: "text-xs text-gray-400", "{prediction.symbol}" }
                    p { class: "text-xs text-gray-500 mt-1", "🕐 {date}" }
                }
                if let Some(verdict) = prediction.verdict() {
                    Badge { label: verdict.to_string(), tone: Tone::from(outcome) }
                }
            }
            div { class: "text-xs space-y-1 text-gray-300",
                p { strong { "Direction: " } "{direction}" }
                p { strong { "Start Price: " } "{start}" }
                if let Some(timing) = timing {
                    p { class: "text-orange-400", "{timing}" }
                }
            }
        }
    }
}
