//! Producers of candidate call signs for the ranker: the super check
//! partial dictionary, the contest log, and the cluster spot feed.

use log::info;

pub mod contact_log;
pub mod scp;
pub mod spots;

pub use contact_log::{CallHistory, ContactLog};
pub use scp::ScpDictionary;
pub use spots::{spot_calls, Spot};

pub fn init() {
    info!("sources module loaded");
}
