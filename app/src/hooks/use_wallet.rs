use dioxus::prelude::*;
use duels_api::prelude::*;
use futures::StreamExt;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::WalletState;

use super::{alert, listen, DuelsClient};

/// What survives a reload: whether the user had connected, and as whom.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct StoredWallet {
    connected: bool,
    address: Option<Address>,
}

fn persist(state: &WalletState) {
    let stored = StoredWallet {
        connected: state.connected,
        address: state.address,
    };
    if let Err(e) = LocalStorage::set(WALLET_STORAGE_KEY, stored) {
        tracing::warn!("Failed to persist wallet: {}", e);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WalletAction {
    Connect,
    Disconnect,
    SwitchNetwork,
}

/// Owns the wallet connection: restores it on load, follows account and
/// chain changes, and runs connect/disconnect/switch requests.
pub fn use_wallet_provider() -> Coroutine<WalletAction> {
    let mut wallet = use_context::<Signal<WalletState>>();
    let client = use_context::<DuelsClient>();

    // Restore a previous session without prompting, then follow wallet events.
    let restore_client = client.clone();
    use_future(move || {
        let client = restore_client.clone();
        async move {
            let stored: StoredWallet = LocalStorage::get(WALLET_STORAGE_KEY).unwrap_or_default();
            if stored.connected {
                match client.accounts().await {
                    Ok(accounts) => match accounts.first() {
                        Some(address) => {
                            tracing::info!(?address, "wallet restored");
                            let chain_id = client.guard().chain_id().await.ok();
                            let mut state = wallet.write();
                            state.connected = true;
                            state.address = Some(*address);
                            state.chain_id = chain_id;
                        }
                        None => persist(&WalletState::default()),
                    },
                    Err(e) => tracing::warn!("Wallet restore failed: {}", e),
                }
            }

            let subscribed = listen(move |event| {
                let mut state = wallet.write();
                state.apply(event);
                persist(&state);
            });
            if let Err(e) = subscribed {
                tracing::warn!("Wallet events unavailable: {}", e);
            }
        }
    });

    use_coroutine(move |mut rx: UnboundedReceiver<WalletAction>| {
        let client = client.clone();
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    WalletAction::Connect => match client.connect().await {
                        Ok(address) => {
                            let chain_id = client.guard().chain_id().await.ok();
                            let mut state = wallet.write();
                            state.connected = true;
                            state.address = Some(address);
                            state.chain_id = chain_id;
                            persist(&state);
                        }
                        Err(e) => {
                            tracing::error!("Wallet connection failed: {}", e);
                            alert(&e.to_string());
                        }
                    },
                    WalletAction::Disconnect => {
                        let mut state = wallet.write();
                        *state = WalletState::default();
                        persist(&state);
                    }
                    WalletAction::SwitchNetwork => match client.guard().switch().await {
                        Ok(()) => {
                            let chain_id = client.guard().chain_id().await.ok();
                            wallet.write().chain_id = chain_id;
                        }
                        Err(e) => alert(&e.to_string()),
                    },
                }
            }
        }
    })
}

/// Sends wallet actions to the provider installed by the layout.
pub fn use_wallet_actions() -> Coroutine<WalletAction> {
    use_coroutine_handle::<WalletAction>()
}

pub fn use_account() -> Option<Address> {
    let wallet = use_context::<Signal<WalletState>>();
    let account = wallet.read().account();
    account
}

pub fn use_network_status() -> Option<NetworkStatus> {
    let wallet = use_context::<Signal<WalletState>>();
    let chain_id = wallet.read().chain_id;
    let client = use_context::<DuelsClient>();
    chain_id.map(|current| NetworkStatus::of(current, &client.config().chain))
}
