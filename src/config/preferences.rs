use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use log::{error, info};

use super::theme::PaletteColors;
use crate::error::CheckError;

/// Contents of the shared preference file written by the logging program.
/// Unknown keys are ignored so the file can carry other settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// File name of the contest database inside the user data directory.
    #[serde(default = "default_current_database")]
    pub current_database: String,
    /// Contest number used to filter the log.
    #[serde(default)]
    pub contest: i64,
    #[serde(default)]
    pub darkmode: bool,
    /// Window colours, when the host reports them.
    #[serde(default)]
    pub palette: Option<PaletteColors>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            current_database: default_current_database(),
            contest: 0,
            darkmode: false,
            palette: None,
        }
    }
}

fn default_current_database() -> String { "ham.db".to_string() }

impl Preferences {
    pub async fn load_from(path: &Path) -> Result<Self, CheckError> {
        if !path.exists() {
            info!("Preference file not found at {:?}. Using defaults.", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).await?;
        let prefs: Self = serde_json::from_str(&content)?;
        info!("Loaded config file from {:?}", path);
        Ok(prefs)
    }

    /// Loads preferences, falling back to defaults when the file is
    /// unreadable or malformed.
    pub async fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path).await {
            Ok(prefs) => prefs,
            Err(e) => {
                error!("Error: {}", e);
                Self::default()
            }
        }
    }

    pub async fn save_to(&self, path: &Path) -> Result<(), CheckError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        info!("Preferences saved to: {:?}", path);
        Ok(())
    }

    /// Dark mode as reported by the window palette, else the `darkmode` flag.
    pub fn is_dark_mode(&self) -> bool {
        match &self.palette {
            Some(palette) => palette.is_dark().unwrap_or_else(|e| {
                error!("Ignoring window palette: {}", e);
                self.darkmode
            }),
            None => self.darkmode,
        }
    }
}
