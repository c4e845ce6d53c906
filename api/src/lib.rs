pub mod abi;
pub mod client;
pub mod config;
pub mod consts;
pub mod error;
pub mod format;
pub mod gate;
pub mod network;
pub mod query;
pub mod read;
pub mod rpc;
pub mod state;
pub mod transport;
pub mod write;

pub mod prelude {
    pub use crate::client::*;
    pub use crate::config::*;
    pub use crate::consts::*;
    pub use crate::error::*;
    pub use crate::format::*;
    pub use crate::gate::*;
    pub use crate::network::*;
    pub use crate::query::*;
    pub use crate::read::*;
    pub use crate::state::*;
    pub use crate::transport::*;
    pub use crate::write::*;

    pub use ethers_core::types::{Address, H256, U256};
}

pub use ethers_core::types::{Address, H256, U256};
