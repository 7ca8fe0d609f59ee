use log::{error, info};
use std::path::Path;
use tokio::fs;

use crate::error::CheckError;

/// Shortest partial call that is looked up in the dictionary. Shorter
/// input matches too much of the list to be useful.
pub const MIN_PARTIAL_LEN: usize = 3;

/// Super check partial dictionary: the known active contest call signs
/// from a MASTER.SCP file.
#[derive(Debug, Clone, Default)]
pub struct ScpDictionary {
    calls: Vec<String>,
}

impl ScpDictionary {
    /// Parses MASTER.SCP text: one call per line, `#` starts a comment line.
    pub fn parse(content: &str) -> Self {
        let calls = content
            .lines()
            .filter(|line| !line.starts_with('#'))
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { calls }
    }

    pub async fn load(path: &Path) -> Result<Self, CheckError> {
        let content = fs::read_to_string(path).await?;
        let dictionary = Self::parse(&content);
        info!("Loaded {} calls from {:?}", dictionary.len(), path);
        Ok(dictionary)
    }

    /// Loads the dictionary, or an empty one when the file cannot be read.
    pub async fn load_or_empty(path: &Path) -> Self {
        Self::load(path).await.unwrap_or_else(|e| {
            error!("Could not read SCP file {:?}: {}", path, e);
            Self::default()
        })
    }

    /// Every known call containing `partial`, in file order.
    pub fn super_check(&self, partial: &str) -> Vec<String> {
        if partial.chars().count() < MIN_PARTIAL_LEN {
            return Vec::new();
        }
        self.calls
            .iter()
            .filter(|call| call.contains(partial))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
