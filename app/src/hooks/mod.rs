mod ethereum;
mod rpc;
mod use_clock;
mod use_duels;
mod use_leaderboard;
mod use_predictions;
mod use_query;
mod use_wallet;
mod use_write;

pub use ethereum::*;
pub use rpc::*;
pub use use_clock::{unix_now, use_clock};
pub use use_duels::{use_duel, use_duel_count, use_duel_predictions};
pub use use_leaderboard::{use_leaderboard, use_user_score};
pub use use_predictions::{use_active_prediction, use_prediction, use_price, use_user_predictions, use_user_stats};
pub use use_query::{new_client, use_read, DuelsClient, Query, QueryClient};
pub use use_wallet::{use_account, use_network_status, use_wallet_actions, use_wallet_provider, WalletAction};
pub use use_write::{use_write, WriteHandle};
