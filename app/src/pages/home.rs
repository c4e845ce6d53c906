use dioxus::prelude::*;

use crate::components::Button;
use crate::hooks::{use_account, use_wallet_actions, WalletAction};

use super::{DuelsTab, LeaderboardTab, MyPredictionsTab, PredictionsTab};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Predictions,
    MyPredictions,
    Duels,
    Leaderboard,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Predictions, Tab::MyPredictions, Tab::Duels, Tab::Leaderboard];

    fn label(self) -> &'static str {
        match self {
            Tab::Predictions => "📈 Predictions",
            Tab::MyPredictions => "📊 My Predictions",
            Tab::Duels => "⚔️ Duels",
            Tab::Leaderboard => "🏆 Leaderboard",
        }
    }
}

#[component]
pub fn Home() -> Element {
    let account = use_account();
    let mut tab = use_signal(|| Tab::Predictions);

    if account.is_none() {
        return rsx! { Welcome {} };
    }

    let current = tab();
    let tabs = Tab::ALL.map(|t| {
        let class = if t == current { "tab tab-active" } else { "tab" };
        (t, t.label(), class)
    });
    let content = match current {
        Tab::Predictions => rsx! { PredictionsTab {} },
        Tab::MyPredictions => rsx! {
            MyPredictionsTab { on_back: move |_| tab.set(Tab::Predictions) }
        },
        Tab::Duels => rsx! { DuelsTab {} },
        Tab::Leaderboard => rsx! { LeaderboardTab {} },
    };

    rsx! {
        div { class: "max-w-4xl mx-auto",
            nav { class: "flex gap-2 mb-6 overflow-x-auto",
                for (t, label, class) in tabs {
                    button {
                        key: "{label}",
                        class: "{class}",
                        onclick: move |_| tab.set(t),
                        "{label}"
                    }
                }
            }
            div { class: "card", {content} }
        }
    }
}

#[component]
fn Welcome() -> Element {
    let actions = use_wallet_actions();

    rsx! {
        div { class: "max-w-4xl mx-auto text-center py-16",
            h2 { class: "text-4xl font-bold mb-4", "Welcome to Crypto Prediction Duels!" }
            p { class: "text-xl text-gray-400 mb-12",
                "Predict crypto prices and challenge other players"
            }

            div { class: "grid md:grid-cols-3 gap-8 mb-12",
                FeatureCard {
                    title: "Make Predictions",
                    description: "Predict if ETH price will go up or down in 24 hours",
                    icon: "📈",
                }
                FeatureCard {
                    title: "Create Duels",
                    description: "Challenge players with real ETH stakes",
                    icon: "⚔️",
                }
                FeatureCard {
                    title: "Climb Leaderboard",
                    description: "Earn points and become the top predictor",
                    icon: "🏆",
                }
            }

            Button {
                label: "Connect Wallet to Start".to_string(),
                class: "text-lg px-8 py-3",
                onclick: move |_| actions.send(WalletAction::Connect),
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeatureCardProps {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        div { class: "card text-center",
            div { class: "text-4xl mb-4", "{props.icon}" }
            h3 { class: "text-lg font-semibold text-duel-400 mb-2", "{props.title}" }
            p { class: "text-gray-400", "{props.description}" }
        }
    }
}
