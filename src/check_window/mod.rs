//! The check window: keeps three ranked suggestion lists (dictionary,
//! contest log, cluster spots) in step with the call sign being typed in
//! the logging program.

use log::{debug, error, info};

pub mod packet;

pub use packet::{Outbound, Packet};

use crate::config::theme::{HighlightStyles, StyleCache};
use crate::config::ConfigManager;
use crate::fuzzy_match::{self, ScoredCandidate};
use crate::sources::{spot_calls, CallHistory, ContactLog, ScpDictionary, Spot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Master,
    Log,
    Spots,
}

impl Pane {
    pub const ALL: [Pane; 3] = [Pane::Master, Pane::Log, Pane::Spots];

    pub fn title(&self) -> &'static str {
        match self {
            Pane::Master => "Master",
            Pane::Log => "Log",
            Pane::Spots => "Spots",
        }
    }
}

pub struct CheckWindow {
    config: ConfigManager,
    scp: ScpDictionary,
    history: Option<Box<dyn CallHistory>>,
    styles: StyleCache,
    dark_mode_override: Option<bool>,
    active: bool,
    call: String,
    master: Vec<ScoredCandidate>,
    logged: Vec<ScoredCandidate>,
    spotted: Vec<ScoredCandidate>,
}

impl CheckWindow {
    /// Loads the dictionary and opens the contest log named by the
    /// preferences. Either may be missing; the window then shows fewer lists.
    pub async fn new(config: ConfigManager) -> Self {
        let scp = ScpDictionary::load_or_empty(config.scp_file()).await;
        let history = open_history(&config).await;
        Self::with_sources(config, scp, history)
    }

    pub fn with_sources(
        config: ConfigManager,
        scp: ScpDictionary,
        history: Option<Box<dyn CallHistory>>,
    ) -> Self {
        Self {
            config,
            scp,
            history,
            styles: StyleCache::new(),
            dark_mode_override: None,
            active: false,
            call: String::new(),
            master: Vec::new(),
            logged: Vec::new(),
            spotted: Vec::new(),
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn call(&self) -> &str {
        &self.call
    }

    /// Processes one packet to completion.
    pub async fn handle(&mut self, packet: Packet) {
        match packet {
            Packet::UpdateLog => self.clear_lists(),
            other if !self.active => debug!("Check window inactive, ignoring {:?}", other),
            Packet::CallChanged { call } => {
                self.call = call;
                self.master_list();
                self.log_list().await;
            }
            Packet::CheckSpots { spots } => self.spot_list(&spots),
            Packet::NewDb => self.load_new_db().await,
        }
    }

    pub fn clear_lists(&mut self) {
        self.master.clear();
        self.logged.clear();
        self.spotted.clear();
    }

    fn master_list(&mut self) {
        let candidates = self.scp.super_check(&self.call);
        self.master = fuzzy_match::rank(&self.call, candidates);
    }

    async fn log_list(&mut self) {
        self.logged.clear();
        if self.call.is_empty() {
            return;
        }
        let Some(history) = &self.history else {
            return;
        };
        match history.like_calls(&self.call).await {
            Ok(calls) => self.logged = fuzzy_match::rank(&self.call, calls),
            Err(e) => error!("Log lookup for '{}' failed: {}", self.call, e),
        }
    }

    fn spot_list(&mut self, spots: &[Spot]) {
        self.spotted = fuzzy_match::rank(&self.call, spot_calls(spots));
    }

    async fn load_new_db(&mut self) {
        self.config.reload().await;
        self.history = open_history(&self.config).await;
        self.styles.invalidate();
        self.clear_lists();
    }

    pub fn pane(&self, pane: Pane) -> &[ScoredCandidate] {
        match pane {
            Pane::Master => &self.master,
            Pane::Log => &self.logged,
            Pane::Spots => &self.spotted,
        }
    }

    /// The packet that asks the main window to take over a picked call.
    pub fn select(&self, pane: Pane, index: usize) -> Option<Outbound> {
        self.pane(pane).get(index).map(|picked| Outbound::ChangeCall {
            call: picked.raw_call.clone(),
        })
    }

    /// Forces light or dark highlighting instead of following preferences.
    pub fn set_dark_mode_override(&mut self, dark: Option<bool>) {
        self.dark_mode_override = dark;
        self.styles.invalidate();
    }

    /// Called by the host when the desktop switches between light and dark.
    pub fn display_mode_changed(&mut self) {
        info!("Display mode changed, dropping cached highlight styles");
        self.styles.invalidate();
    }

    pub fn styles(&mut self) -> HighlightStyles {
        let dark = self
            .dark_mode_override
            .unwrap_or_else(|| self.config.preferences().is_dark_mode());
        self.styles.resolve(dark)
    }
}

async fn open_history(config: &ConfigManager) -> Option<Box<dyn CallHistory>> {
    let path = config.database_path();
    match ContactLog::open(&path, config.preferences().contest).await {
        Ok(log) => Some(Box::new(log)),
        Err(e) => {
            error!("Could not open contact log {:?}: {}", path, e);
            None
        }
    }
}

pub fn init() {
    info!("check_window module loaded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::theme::HighlightStyles;
    use crate::config::{AppPaths, CONFIG_FILE_NAME, SCP_FILE_NAME};
    use crate::sources::contact_log::tests::memory_log;
    use std::path::Path;

    const SCP: &str = "# test list\nW1AW\nK1AW\nW1AWX\nDL1ABC\n";

    async fn window(dir: &Path) -> CheckWindow {
        let paths = AppPaths {
            config_file: dir.join(CONFIG_FILE_NAME),
            user_data_dir: dir.to_path_buf(),
            scp_file: dir.join(SCP_FILE_NAME),
        };
        let config = ConfigManager::new(paths).await;
        let log = memory_log(0, &[("W1AW", 0), ("W1AAW", 0), ("N1MM", 0)]).await;
        let mut window =
            CheckWindow::with_sources(config, ScpDictionary::parse(SCP), Some(Box::new(log)));
        window.set_active(true);
        window
    }

    fn calls(ranked: &[ScoredCandidate]) -> Vec<&str> {
        ranked.iter().map(|c| c.raw_call.as_str()).collect()
    }

    fn spot(call: Option<&str>) -> Spot {
        Spot {
            callsign: call.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_call_changed_fills_master_and_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut window = window(dir.path()).await;

        window.handle(Packet::CallChanged { call: "W1AW".to_string() }).await;
        assert_eq!(window.call(), "W1AW");
        assert_eq!(calls(window.pane(Pane::Master)), vec!["W1AW", "W1AWX"]);
        assert_eq!(calls(window.pane(Pane::Log)), vec!["W1AW"]);
        assert_eq!(window.pane(Pane::Master)[0].diff_score, 0);

        window.handle(Packet::CallChanged { call: "1AW".to_string() }).await;
        assert_eq!(calls(window.pane(Pane::Log)), vec!["W1AW"]);
        assert_eq!(window.pane(Pane::Master).len(), 3);
    }

    #[tokio::test]
    async fn test_empty_call_clears_results() {
        let dir = tempfile::tempdir().unwrap();
        let mut window = window(dir.path()).await;
        window.handle(Packet::CallChanged { call: "W1AW".to_string() }).await;
        window.handle(Packet::CallChanged { call: String::new() }).await;
        assert!(window.pane(Pane::Master).is_empty());
        assert!(window.pane(Pane::Log).is_empty());
    }

    #[tokio::test]
    async fn test_spots_ranked_against_current_call() {
        let dir = tempfile::tempdir().unwrap();
        let mut window = window(dir.path()).await;
        window.handle(Packet::CallChanged { call: "W1AW".to_string() }).await;
        window
            .handle(Packet::CheckSpots {
                spots: vec![spot(Some("K1AW")), spot(None), spot(Some("")), spot(Some("W1AW"))],
            })
            .await;
        assert_eq!(calls(window.pane(Pane::Spots)), vec!["W1AW", "K1AW"]);
    }

    #[tokio::test]
    async fn test_inactive_window_ignores_all_but_update_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut window = window(dir.path()).await;
        window.handle(Packet::CallChanged { call: "W1AW".to_string() }).await;

        window.set_active(false);
        window.handle(Packet::CallChanged { call: "K1AW".to_string() }).await;
        assert_eq!(window.call(), "W1AW");
        assert!(!window.pane(Pane::Master).is_empty());

        window.handle(Packet::UpdateLog).await;
        for pane in Pane::ALL {
            assert!(window.pane(pane).is_empty());
        }
    }

    #[tokio::test]
    async fn test_select_emits_change_call() {
        let dir = tempfile::tempdir().unwrap();
        let mut window = window(dir.path()).await;
        window.handle(Packet::CallChanged { call: "W1AW".to_string() }).await;

        assert_eq!(
            window.select(Pane::Master, 1),
            Some(Outbound::ChangeCall { call: "W1AWX".to_string() })
        );
        assert_eq!(window.select(Pane::Spots, 0), None);
    }

    #[tokio::test]
    async fn test_new_db_reloads_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let mut window = window(dir.path()).await;
        window.handle(Packet::CallChanged { call: "W1AW".to_string() }).await;

        // No database file exists in the scratch directory.
        window.handle(Packet::NewDb).await;
        for pane in Pane::ALL {
            assert!(window.pane(pane).is_empty());
        }
        window.handle(Packet::CallChanged { call: "W1AW".to_string() }).await;
        assert!(window.pane(Pane::Log).is_empty());
        assert_eq!(calls(window.pane(Pane::Master)), vec!["W1AW", "W1AWX"]);
    }

    #[tokio::test]
    async fn test_styles_follow_mode_changes() {
        let dir = tempfile::tempdir().unwrap();
        let mut window = window(dir.path()).await;
        assert_eq!(window.styles(), HighlightStyles::light());

        window.set_dark_mode_override(Some(true));
        assert_eq!(window.styles(), HighlightStyles::dark());

        tokio::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"darkmode": false}"#)
            .await
            .unwrap();
        window.set_dark_mode_override(None);
        window.handle(Packet::NewDb).await;
        window.display_mode_changed();
        assert_eq!(window.styles(), HighlightStyles::light());
    }
}
