//! Command-line interface for callcheck.
//! It uses the `clap` crate to parse arguments and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::AppPaths;

/// callcheck: dupe and partial-call checking against a call-sign
/// dictionary, the contest log and cluster spots.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Turn on verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preference file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding contest databases
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// MASTER.SCP file to use as the call-sign dictionary
    #[arg(long, global = true)]
    pub scp: Option<PathBuf>,

    /// Highlight colours for a light or dark background
    #[arg(long, value_enum, default_value_t = ModeArg::Auto, global = true)]
    pub mode: ModeArg,

    /// Mark differences with brackets instead of colours
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show suggestions for a single call sign
    Check {
        /// Call sign as typed
        call: String,
        /// JSON file with a list of cluster spots
        #[arg(short, long)]
        spots: Option<PathBuf>,
    },
    /// Read packets (one JSON object per line) from stdin and print the
    /// suggestion lists after each
    Listen,
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved paths, preferences and highlight colours
    Show,
    /// Write a preference file with default values if none exists
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Follow the preference file
    Auto,
    Dark,
    Light,
}

impl ModeArg {
    pub fn dark_mode_override(self) -> Option<bool> {
        match self {
            ModeArg::Auto => None,
            ModeArg::Dark => Some(true),
            ModeArg::Light => Some(false),
        }
    }
}

impl Cli {
    /// Level forced by `--verbose`; `None` keeps the environment's filter.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        self.verbose.then_some(log::LevelFilter::Debug)
    }

    /// Default locations with command-line overrides applied.
    pub fn paths(&self) -> AppPaths {
        let mut paths = AppPaths::default();
        if let Some(config) = &self.config {
            paths.config_file = config.clone();
        }
        if let Some(dir) = &self.data_dir {
            paths.user_data_dir = dir.clone();
        }
        if let Some(scp) = &self.scp {
            paths.scp_file = scp.clone();
        }
        paths
    }
}

/// Initializes the CLI module.
pub fn init() {
    log::info!("CLI module initialized.");
}
