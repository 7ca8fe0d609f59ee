//! callcheck: a check-partial assistant for contest logging.
//!
//! Ranks the call sign being typed against a MASTER.SCP dictionary, the
//! contest log and the cluster spot feed, highlighting where each
//! suggestion differs.

pub mod check_window;
pub mod cli;
pub mod config;
pub mod error;
pub mod fuzzy_match;
pub mod renderer;
pub mod sources;
