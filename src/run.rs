use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::report::display::{self, Display, RefreshMode, RoundBuffers};
use crate::system::provider::SnapshotProvider;
use crate::system::snapshot::SystemIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Sampling(usize),
    Finalize,
    Done,
}

/// What a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub rounds_completed: usize,
    pub cpu_records: usize,
    pub memory_records: usize,
    /// Shutdown fired during an inter-round delay.
    pub interrupted: bool,
}

/// Drives the sampling rounds and owns their history for the whole run.
pub struct Runner {
    config: RunConfig,
    buffers: RoundBuffers,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        let buffers = RoundBuffers::new(config.sample_count);
        Self { config, buffers }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs every round, then the identity report.
    ///
    /// `shutdown` is only polled while waiting between rounds; when it
    /// completes the remaining rounds are skipped and the run finalizes.
    pub async fn run<P, W, S>(
        mut self,
        provider: &mut P,
        out: &mut W,
        shutdown: S,
    ) -> io::Result<RunSummary>
    where
        P: SnapshotProvider,
        W: Write,
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let rounds = self.config.sample_count;
        let delay = Duration::from_secs(self.config.interval_secs);
        let mut summary = RunSummary::default();
        let mut phase = Phase::Init;

        loop {
            debug!(?phase, "run phase");
            phase = match phase {
                Phase::Init if rounds == 0 => Phase::Finalize,
                Phase::Init => Phase::Sampling(0),
                Phase::Sampling(round) => {
                    Display::new(&self.config).render_round(
                        round,
                        provider,
                        &mut self.buffers,
                        out,
                    )?;
                    summary.rounds_completed = round + 1;

                    if round + 1 == rounds {
                        Phase::Finalize
                    } else {
                        let resumed = tokio::select! {
                            _ = tokio::time::sleep(delay) => true,
                            _ = &mut shutdown => false,
                        };
                        if resumed {
                            if self.config.refresh == RefreshMode::InPlace {
                                display::restore_cursor(out)?;
                            }
                            Phase::Sampling(round + 1)
                        } else {
                            debug!(round, "shutdown requested");
                            summary.interrupted = true;
                            Phase::Finalize
                        }
                    }
                }
                Phase::Finalize => {
                    let identity = provider.read_identity().unwrap_or_else(|err| {
                        warn!(error = %err, "system identity unavailable");
                        SystemIdentity::default()
                    });
                    display::write_identity(&identity, out)?;
                    out.flush()?;
                    Phase::Done
                }
                Phase::Done => break,
            };
        }

        summary.cpu_records = self.buffers.cpu.filled();
        summary.memory_records = self.buffers.memory.filled();
        Ok(summary)
    }
}
