use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::components::{Badge, Button, Tone};
use crate::hooks::{use_duel, use_write};
use crate::route::Route;

/// A duel in the lobby list, with the join action for open duels.
#[component]
pub fn DuelItem(id: U256, #[props(!optional)] viewer: Option<Address>) -> Element {
    let duel = use_duel(Some(id));
    let join = use_write();

    let Some(duel) = duel.value() else {
        return rsx! {
            div { class: "animate-pulse h-24 bg-gray-800 rounded" }
        };
    };

    let stake = format_ether(duel.stake);
    let duration = duel.duration.label();
    let creator = label_for(duel.creator, viewer);
    let opponent = duel
        .opponent
        .map(|opponent| label_for(opponent, viewer))
        .unwrap_or_else(|| "Waiting...".to_string());
    let is_creator = viewer.map(|viewer| duel.is_creator(&viewer)).unwrap_or(false);
    let joining = join.is_busy();
    let join_label = if joining { "⏳ Joining..." } else { "🎯 Join Duel" };
    let stats_route = Route::DuelStats { id: duel.id.low_u64() };

    let (duel_id, duel_stake) = (duel.id, duel.stake);
    let on_join = move |_: MouseEvent| {
        join.submit(WriteCall::JoinDuel {
            duel_id,
            stake: duel_stake,
        });
    };

    rsx! {
        div { class: "p-4 rounded elevated border elevated-border space-y-3",
            div { class: "flex justify-between items-center",
                span { class: "font-semibold", "Duel #{id}" }
                Badge { label: duel.status.label().to_string(), tone: Tone::from(duel.status) }
            }
            div { class: "grid grid-cols-2 gap-2 text-sm",
                span { class: "text-gray-500", "Stake" }
                span { class: "font-mono text-right", "{stake} ETH" }
                span { class: "text-gray-500", "Duration" }
                span { class: "text-right", "{duration}" }
                span { class: "text-gray-500", "Creator" }
                span { class: "font-mono text-right", "{creator}" }
                span { class: "text-gray-500", "Opponent" }
                span { class: "font-mono text-right", "{opponent}" }
            }
            div { class: "flex justify-between items-center",
                if duel.has_opponent() {
                    span { class: "text-sm text-yellow-400", "⏳ In Progress" }
                } else if is_creator {
                    span { class: "text-sm text-gray-400", "⏰ Waiting" }
                } else {
                    Button {
                        label: join_label.to_string(),
                        disabled: joining || viewer.is_none(),
                        onclick: on_join,
                    }
                }
                Link {
                    to: stats_route,
                    class: "text-sm text-duel-400 hover:underline",
                    "📊 View Detailed Statistics"
                }
            }
        }
    }
}

fn label_for(player: Address, viewer: Option<Address>) -> String {
    if viewer == Some(player) {
        "You".to_string()
    } else {
        short_address(&player)
    }
}
