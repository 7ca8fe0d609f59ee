use directories::ProjectDirs;
use log::info;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

pub mod preferences;
pub mod theme;

use preferences::Preferences;

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("", "", "callcheck"));

/// Directory holding the preference file.
pub static CONFIG_DIR: Lazy<PathBuf> = Lazy::new(|| {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
});

/// Directory holding contest databases.
pub static USER_DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
});

/// Directory holding bundled data such as MASTER.SCP.
pub static APP_DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.data_local_dir().join("data"))
        .unwrap_or_else(|| PathBuf::from("data"))
});

pub const CONFIG_FILE_NAME: &str = "callcheck.json";
pub const SCP_FILE_NAME: &str = "MASTER.SCP";

/// Resolved file locations, each overridable from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct AppPaths {
    pub config_file: PathBuf,
    pub user_data_dir: PathBuf,
    pub scp_file: PathBuf,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self {
            config_file: CONFIG_DIR.join(CONFIG_FILE_NAME),
            user_data_dir: USER_DATA_DIR.clone(),
            scp_file: APP_DATA_DIR.join(SCP_FILE_NAME),
        }
    }
}

impl AppPaths {
    pub fn database_path(&self, prefs: &Preferences) -> PathBuf {
        self.user_data_dir.join(&prefs.current_database)
    }
}

/// Current preferences together with the paths they were loaded from.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    paths: AppPaths,
    preferences: Preferences,
}

impl ConfigManager {
    pub async fn new(paths: AppPaths) -> Self {
        let preferences = Preferences::load_or_default(&paths.config_file).await;
        Self { paths, preferences }
    }

    /// Re-reads the preference file, e.g. after the logger switched databases.
    pub async fn reload(&mut self) -> &Preferences {
        self.preferences = Preferences::load_or_default(&self.paths.config_file).await;
        &self.preferences
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    pub fn database_path(&self) -> PathBuf {
        self.paths.database_path(&self.preferences)
    }

    pub fn scp_file(&self) -> &Path {
        &self.paths.scp_file
    }
}

pub fn init() {
    info!("config module loaded");
}
