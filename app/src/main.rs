#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod route;

use dioxus::prelude::*;
use duels_api::prelude::*;
use hooks::{new_client, QueryClient, WalletEvent};
use route::Route;

fn main() {
    #[cfg(feature = "web")]
    {
        tracing_wasm::set_as_global_default();
        dioxus::launch(App);
    }

    #[cfg(feature = "desktop")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    // Global state providers
    use_context_provider(|| Signal::new(WalletState::default()));
    use_context_provider(new_client);
    use_context_provider(QueryClient::new);

    rsx! {
        Router::<Route> {}
    }
}

// Global state types
#[derive(Clone, Default, Debug, PartialEq)]
pub struct WalletState {
    pub connected: bool,
    pub address: Option<Address>,
    /// Chain the wallet reports, `None` until first asked.
    pub chain_id: Option<u64>,
}

impl WalletState {
    /// The account views act for; `None` once the user disconnected here.
    pub fn account(&self) -> Option<Address> {
        self.address.filter(|_| self.connected)
    }

    /// Follows a wallet notification. Account changes are ignored while
    /// disconnected so the extension cannot reconnect the app behind the user.
    pub fn apply(&mut self, event: WalletEvent) {
        match event {
            WalletEvent::AccountsChanged(_) if !self.connected => {}
            WalletEvent::AccountsChanged(accounts) => match accounts.first() {
                Some(address) => self.address = Some(*address),
                None => *self = WalletState::default(),
            },
            WalletEvent::ChainChanged(chain_id) => self.chain_id = Some(chain_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Address {
        Address::repeat_byte(0xaa)
    }

    fn connected() -> WalletState {
        WalletState {
            connected: true,
            address: Some(player()),
            chain_id: Some(84532),
        }
    }

    #[test]
    fn apply__accounts_changed_after_disconnect_stays_disconnected() {
        // given
        let mut state = WalletState::default();

        // when
        state.apply(WalletEvent::AccountsChanged(vec![Address::repeat_byte(0xbb)]));

        // then
        assert_eq!(state, WalletState::default());
        assert_eq!(state.account(), None);
    }

    #[test]
    fn apply__accounts_changed_while_connected_switches_account() {
        // given
        let mut state = connected();
        let other = Address::repeat_byte(0xbb);

        // when
        state.apply(WalletEvent::AccountsChanged(vec![other]));

        // then
        assert!(state.connected);
        assert_eq!(state.account(), Some(other));
    }

    #[test]
    fn apply__empty_accounts_disconnects() {
        // given
        let mut state = connected();

        // when
        state.apply(WalletEvent::AccountsChanged(vec![]));

        // then
        assert_eq!(state, WalletState::default());
    }

    #[test]
    fn apply__chain_changed_is_tracked_while_disconnected() {
        // given
        let mut state = WalletState::default();

        // when
        state.apply(WalletEvent::ChainChanged(1));

        // then
        assert_eq!(state.chain_id, Some(1));
        assert_eq!(state.account(), None);
    }

    #[test]
    fn account__hidden_when_not_connected() {
        let state = WalletState {
            connected: false,
            address: Some(player()),
            chain_id: None,
        };

        assert_eq!(state.account(), None);
    }
}
