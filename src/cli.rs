use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, MetricSelection, RunConfig};
use crate::error::ConfigError;
use crate::report::display::RefreshMode;

#[derive(Debug, Parser)]
#[command(
    name = "hoststat",
    version,
    about = "Samples CPU, memory and session counters and prints a report",
    after_help = "Shortcut: `hoststat N T` is the same as `hoststat --samples=N --tdelay=T`."
)]
pub struct Cli {
    /// Show only the system block (memory and CPU)
    #[arg(long)]
    pub system: bool,

    /// Show only the user sessions block
    #[arg(long)]
    pub user: bool,

    /// Append ASCII trend graphs to memory and CPU lines
    #[arg(short = 'g', long = "graphics")]
    pub graphics: bool,

    /// Print each round below the last instead of redrawing in place
    #[arg(long)]
    pub sequential: bool,

    /// Number of sampling rounds
    #[arg(long, value_name = "N")]
    pub samples: Option<usize>,

    /// Seconds to wait between rounds
    #[arg(long, value_name = "T")]
    pub tdelay: Option<u64>,

    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Positional sample count (shortcut form)
    #[arg(value_name = "N")]
    pub samples_shortcut: Option<usize>,

    /// Positional delay in seconds (shortcut form)
    #[arg(value_name = "T")]
    pub tdelay_shortcut: Option<u64>,
}

impl Cli {
    /// Layers, lowest priority first: config file, positional shortcut,
    /// explicit `--samples` / `--tdelay`.
    pub fn run_config(&self, file: &Config) -> Result<RunConfig, ConfigError> {
        let shortcut = self.shortcut()?;
        let sample_count = self
            .samples
            .or(shortcut.map(|(n, _)| n))
            .unwrap_or(file.sampling.samples);
        let interval_secs = self
            .tdelay
            .or(shortcut.map(|(_, t)| t))
            .unwrap_or(file.sampling.tdelay_secs);
        let refresh = if self.sequential {
            RefreshMode::Sequential
        } else {
            RefreshMode::InPlace
        };

        RunConfig::new(
            sample_count,
            interval_secs,
            self.graphics,
            refresh,
            MetricSelection::from_flags(self.system, self.user),
        )
    }

    /// `hoststat N T` only counts when both numbers are given.
    fn shortcut(&self) -> Result<Option<(usize, u64)>, ConfigError> {
        match (self.samples_shortcut, self.tdelay_shortcut) {
            (Some(n), Some(t)) => Ok(Some((n, t))),
            (None, None) => Ok(None),
            _ => Err(ConfigError::IncompleteShortcut),
        }
    }
}
