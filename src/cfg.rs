use std::{
    sync::{Mutex, MutexGuard},
    time::Duration,
};

use log::LevelFilter;
use serde::Deserialize;

/// Id of the `<script type="application/json">` element a page can use to
/// configure the dashboard.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-state-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Paths (`location.pathname`) that render the dashboard. State is only
    /// restored on these.
    pub restore_paths: Vec<String>,
    /// How long after opening a section form its inputs get cleared.
    pub section_form_clear_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            restore_paths: Vec::new(),
            section_form_clear_delay_ms: 500,
            log_level: LevelFilter::Info,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_restore_path(&self, path: &str) -> bool {
        self.restore_paths.iter().any(|p| p == path)
    }

    pub fn section_form_clear_delay(&self) -> Duration {
        Duration::from_millis(self.section_form_clear_delay_ms.into())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

static CONFIG: Mutex<Config> = Mutex::new(Config::new());

fn lock() -> MutexGuard<'static, Config> {
    match CONFIG.lock() {
        Ok(l) => l,
        Err(p) => p.into_inner(),
    }
}

/// Snapshot of the active configuration.
pub fn current() -> Config {
    lock().clone()
}

pub fn install(config: Config) {
    *lock() = config;
}
