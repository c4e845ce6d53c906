use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::hooks::{use_wallet_actions, WalletAction};
use crate::WalletState;

#[component]
pub fn WalletButton() -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let actions = use_wallet_actions();

    let connect_wallet = move |_: MouseEvent| actions.send(WalletAction::Connect);
    let disconnect_wallet = move |_: MouseEvent| actions.send(WalletAction::Disconnect);

    let account = wallet.read().account();

    match account {
        Some(address) => {
            let short = short_address(&address);
            rsx! {
                div { class: "flex items-center space-x-2",
                    span { class: "text-sm text-gray-400 font-mono", "{short}" }
                    button {
                        class: "btn btn-secondary text-sm",
                        onclick: disconnect_wallet,
                        "Disconnect"
                    }
                }
            }
        }
        None => rsx! {
            button {
                class: "btn btn-primary",
                onclick: connect_wallet,
                "Connect Wallet"
            }
        },
    }
}

/// Chain indicator; offers a switch when the wallet is elsewhere.
#[component]
pub fn NetworkIndicator() -> Element {
    let status = crate::hooks::use_network_status();
    let actions = use_wallet_actions();
    let chain_name = BASE_SEPOLIA.name;

    match status {
        Some(NetworkStatus::Correct) => rsx! {
            span { class: "text-sm text-green-400", "✓ {chain_name}" }
        },
        Some(NetworkStatus::Incorrect { .. }) => rsx! {
            button {
                class: "btn text-sm bg-yellow-600 hover:bg-yellow-500 text-black",
                onclick: move |_| actions.send(WalletAction::SwitchNetwork),
                "⚠️ Wrong Network - Click to Switch"
            }
        },
        None => rsx! {},
    }
}
