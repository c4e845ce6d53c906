use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::components::{Button, Card, Variant};
use crate::hooks::use_price;

/// Higher/Lower controls behind a submission gate.
#[component]
pub fn DirectionButtons(gate: SubmitGate, on_predict: EventHandler<Direction>) -> Element {
    let disabled = !gate.is_enabled();
    let higher = gate.label(Direction::Higher.icon_label());
    let lower = gate.label(Direction::Lower.icon_label());

    rsx! {
        div { class: "space-y-2",
            div { class: "grid grid-cols-2 gap-4",
                Button {
                    label: higher.to_string(),
                    variant: Variant::Higher,
                    disabled: disabled,
                    class: "py-4 text-lg",
                    onclick: move |_| on_predict.call(Direction::Higher),
                }
                Button {
                    label: lower.to_string(),
                    variant: Variant::Lower,
                    disabled: disabled,
                    class: "py-4 text-lg",
                    onclick: move |_| on_predict.call(Direction::Lower),
                }
            }
            if let Some(hint) = gate.hint() {
                p { class: "text-sm text-yellow-400 text-center", "{hint}" }
            }
        }
    }
}

/// Live oracle price for the traded symbol.
#[component]
pub fn PriceCard() -> Element {
    let price = use_price();

    let body = match price.state() {
        ReadState::Ready(point) => {
            let shown = point.display();
            let updated = format_timestamp(point.timestamp);
            rsx! {
                p { class: "text-4xl font-bold font-mono text-high", "{shown}" }
                p { class: "text-xs text-gray-500 mt-1", "Updated {updated}" }
            }
        }
        ReadState::Failed(e) => rsx! {
            p { class: "text-red-400", "Price unavailable: {e}" }
        },
        _ => rsx! {
            div { class: "animate-pulse h-10 bg-gray-700 rounded w-1/2" }
        },
    };

    rsx! {
        Card { title: format!("Current {SYMBOL} Price"),
            {body}
        }
    }
}
