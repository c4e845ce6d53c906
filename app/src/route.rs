use dioxus::prelude::*;

use crate::components::Layout;
use crate::pages::{DuelStats, Home};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/duels/:id")]
    DuelStats { id: u64 },
}
