use dioxus::prelude::*;
use duels_api::prelude::*;

use crate::components::{NetworkIndicator, WalletButton};
use crate::hooks::use_wallet_provider;
use crate::route::Route;

#[component]
pub fn Layout() -> Element {
    use_wallet_provider();
    let mut menu_open = use_signal(|| false);
    let chain_name = BASE_SEPOLIA.name;

    rsx! {
        div { class: "min-h-screen flex flex-col",
            style: "background-color: var(--surface-base);",
            // Navigation
            nav { class: "border-b elevated-border backdrop-blur sticky top-0 z-50",
                style: "background-color: var(--surface-base);",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div { class: "flex justify-between h-16",
                        div { class: "flex items-center",
                            Link { to: Route::Home {}, class: "flex items-center space-x-2",
                                span { class: "text-2xl", "⚔️" }
                                span { class: "text-2xl font-bold text-duel-400", "Degen Duels" }
                            }
                        }

                        div { class: "hidden sm:flex sm:items-center sm:space-x-4",
                            NetworkIndicator {}
                            WalletButton {}
                        }

                        // Mobile menu toggle
                        div { class: "flex items-center sm:hidden",
                            button {
                                class: "text-mid hover:text-gold px-2 py-1",
                                onclick: move |_| menu_open.toggle(),
                                if menu_open() { "✕" } else { "☰" }
                            }
                        }
                    }
                }

                if menu_open() {
                    div { class: "sm:hidden px-4 pb-4 space-y-3",
                        NetworkIndicator {}
                        WalletButton {}
                    }
                }
            }

            // Main content
            main { class: "flex-1 w-full max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                Outlet::<Route> {}
            }

            // Footer
            footer { class: "border-t elevated-border py-8 mt-auto",
                div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center text-low",
                    p { "Degen Duels - Crypto Prediction Duels on {chain_name}" }
                    div { class: "text-sm mt-2 space-y-1",
                        ContractLink { label: "PredictionGame", address: CONTRACTS.prediction_game }
                        ContractLink { label: "DuelManager", address: CONTRACTS.duel_manager }
                        ContractLink { label: "PriceOracle", address: CONTRACTS.oracle }
                        ContractLink { label: "ETH/USD feed", address: ETH_USD_FEED }
                    }
                }
            }
        }
    }
}

#[component]
fn ContractLink(label: &'static str, address: Address) -> Element {
    let url = BASE_SEPOLIA.address_url(&address);
    let shown = checksum(&address);

    rsx! {
        p {
            "{label}: "
            a {
                href: "{url}",
                target: "_blank",
                class: "text-gold font-mono hover:underline",
                "{shown}"
            }
        }
    }
}
