use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::components::{Button, DuelItem};
use crate::hooks::{alert, use_account, use_duel_count, use_write};

#[component]
pub fn DuelsTab() -> Element {
    let account = use_account();
    let count = use_duel_count();
    let create = use_write();
    let mut stake = use_signal(|| DEFAULT_STAKE.to_string());
    let mut duration = use_signal(|| DuelDuration::OneDay);

    let preview = winner_takes_preview(&stake.read());
    let creating = create.is_busy();
    let created = create.status().is_success();
    let create_label = if creating { "⏳ Creating Duel..." } else { "⚔️ Create Duel" };
    let total = count.value().unwrap_or_default();
    let ids = duel_ids(total);
    let contract = checksum(&CONTRACTS.duel_manager);
    let options = DuelDuration::ALL.map(|d| (u8::from(d), d.label()));

    let on_create = move |_: MouseEvent| match parse_stake(&stake.read()) {
        Ok(wei) => create.submit(WriteCall::CreateDuel {
            duration: duration(),
            stake: wei,
        }),
        Err(e) => alert(&e.to_string()),
    };

    rsx! {
        div { class: "space-y-6",
            h2 { class: "text-2xl font-bold", "Create a Duel" }

            div { class: "p-6 rounded bg-duel-700 text-white space-y-4",
                h3 { class: "text-xl font-bold", "Challenge Another Player" }

                div {
                    label { class: "block text-sm mb-2 opacity-90", "Stake Amount ({SYMBOL})" }
                    input {
                        r#type: "number",
                        step: "0.001",
                        min: "0.001",
                        placeholder: DEFAULT_STAKE,
                        class: "w-full px-4 py-2 rounded text-gray-900 font-semibold",
                        value: "{stake}",
                        oninput: move |e| stake.set(e.value()),
                    }
                    p { class: "text-xs opacity-75 mt-1",
                        "Winner takes {preview} {SYMBOL} (after 3% fee)"
                    }
                }

                div {
                    label { class: "block text-sm mb-2 opacity-90", "Duration" }
                    select {
                        class: "w-full px-4 py-2 rounded text-gray-900 font-semibold",
                        onchange: move |e| {
                            let picked = e
                                .value()
                                .parse::<u8>()
                                .ok()
                                .and_then(|raw| DuelDuration::try_from(raw).ok());
                            if let Some(picked) = picked {
                                duration.set(picked);
                            }
                        },
                        for (value, label) in options {
                            option {
                                key: "{value}",
                                value: "{value}",
                                selected: u8::from(duration()) == value,
                                "{label}"
                            }
                        }
                    }
                }

                Button {
                    label: create_label.to_string(),
                    class: "w-full py-3",
                    disabled: creating,
                    onclick: on_create,
                }

                if created {
                    div { class: "p-2 rounded bg-green-600 text-center", "✅ Duel created successfully!" }
                }
            }

            div {
                div { class: "flex justify-between items-center mb-4",
                    h3 { class: "text-xl font-bold", "Open Duels ({total})" }
                    button {
                        class: "text-sm text-gray-400 hover:text-gray-100",
                        onclick: move |_| count.refetch(),
                        "🔄 Refresh"
                    }
                }
                if ids.is_empty() {
                    div { class: "text-center py-8 rounded elevated",
                        p { class: "text-gray-500", "No open duels yet. Be the first to create one!" }
                    }
                } else {
                    div { class: "space-y-3",
                        for id in ids {
                            DuelItem { key: "{id}", id, viewer: account }
                        }
                    }
                }
            }

            div { class: "p-4 rounded bg-gray-700 text-sm text-gray-300 space-y-2",
                p {
                    strong { "Contract: " }
                    span { class: "font-mono break-all", "{contract}" }
                }
                p { strong { "How it works:" } }
                ul { class: "list-disc list-inside space-y-1",
                    li { "Create a duel with {SYMBOL} stake" }
                    li { "Another player joins with matching stake" }
                    li { "Both make predictions during the duel period" }
                    li { "Most correct predictions wins the pot (minus 3% fee)" }
                    li { "Ties result in refunds" }
                }
            }
        }
    }
}
