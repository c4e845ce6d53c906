mod badge;
mod button;
mod card;
mod duel_item;
mod layout;
mod player_stats;
mod prediction_card;
mod prediction_item;
mod wallet_button;

pub use badge::{Badge, Tone};
pub use button::{Button, Variant};
pub use card::Card;
pub use duel_item::DuelItem;
pub use layout::Layout;
pub use player_stats::{PlayerStats, StatRow};
pub use prediction_card::{DirectionButtons, PriceCard};
pub use prediction_item::PredictionItem;
pub use wallet_button::{NetworkIndicator, WalletButton};
