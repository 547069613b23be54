use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::report::display::RefreshMode;

/// Hard ceiling on rounds; every buffer is allocated for the full run up front.
pub const MAX_SAMPLES: usize = 100_000;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sampling: SamplingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub samples: usize,
    pub tdelay_secs: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        SamplingConfig {
            samples: 10,
            tdelay_secs: 1,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hoststat").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "config file unreadable, using defaults");
            return Config::default();
        }
    };
    toml::from_str(&contents).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "invalid config file, using defaults");
        Config::default()
    })
}

/// Which report sections are printed each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricSelection {
    /// Memory, sessions and CPU.
    #[default]
    Both,
    /// Memory and CPU.
    SystemOnly,
    SessionsOnly,
}

impl MetricSelection {
    pub fn from_flags(system: bool, user: bool) -> Self {
        match (system, user) {
            (true, false) => MetricSelection::SystemOnly,
            (false, true) => MetricSelection::SessionsOnly,
            _ => MetricSelection::Both,
        }
    }

    pub fn includes_system(self) -> bool {
        matches!(self, MetricSelection::Both | MetricSelection::SystemOnly)
    }

    pub fn includes_sessions(self) -> bool {
        matches!(self, MetricSelection::Both | MetricSelection::SessionsOnly)
    }
}

/// Validated parameters for one run. Never changes once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub sample_count: usize,
    pub interval_secs: u64,
    pub show_graph: bool,
    pub refresh: RefreshMode,
    pub selection: MetricSelection,
}

impl RunConfig {
    pub fn new(
        sample_count: usize,
        interval_secs: u64,
        show_graph: bool,
        refresh: RefreshMode,
        selection: MetricSelection,
    ) -> Result<Self, ConfigError> {
        if sample_count > MAX_SAMPLES {
            return Err(ConfigError::TooManySamples {
                requested: sample_count,
                max: MAX_SAMPLES,
            });
        }
        Ok(RunConfig {
            sample_count,
            interval_secs,
            show_graph,
            refresh,
            selection,
        })
    }
}
