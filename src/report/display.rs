use std::io::{self, Write};

use crossterm::cursor::{RestorePosition, SavePosition};
use crossterm::queue;
use tracing::warn;

use crate::config::{MetricSelection, RunConfig};
use crate::format::format_uptime;
use crate::system::provider::SnapshotProvider;
use crate::system::snapshot::{CpuSnapshot, MemorySnapshot, SystemIdentity};

use super::buffer::{RenderedRecord, RoundBuffer};
use super::delta::{cpu_usage_percent, memory_delta};
use super::graph::{cpu_graph, memory_graph};

pub const SEPARATOR: &str = "---------------------------------------";

/// How successive rounds share the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// Each round overwrites the previous one from a saved cursor position
    /// and replays all history recorded so far.
    #[default]
    InPlace,
    /// Nothing is overwritten. Each round prints a frame of exactly
    /// `sample_count` rows per metric with only its own row filled in.
    Sequential,
}

impl RefreshMode {
    /// Rows to print for one metric at `round`. `None` is a blank row, either
    /// padding or a round whose metric could not be read.
    ///
    /// In-place mode returns rounds `0..=round`, followed by blank rows up to
    /// the buffer capacity when `pad` is set. Sequential mode always returns
    /// `capacity` rows.
    pub fn frame<T>(self, buffer: &RoundBuffer<T>, round: usize, pad: bool) -> Vec<Option<&T>> {
        let capacity = buffer.capacity();
        match self {
            RefreshMode::InPlace => {
                let shown = (round + 1).min(capacity);
                let mut rows: Vec<Option<&T>> = (0..shown).map(|r| buffer.get(r)).collect();
                if pad {
                    rows.resize(capacity, None);
                }
                rows
            }
            RefreshMode::Sequential => (0..capacity)
                .map(|r| if r == round { buffer.get(r) } else { None })
                .collect(),
        }
    }
}

#[derive(Debug)]
pub struct CpuEntry {
    pub snapshot: CpuSnapshot,
    pub usage: f64,
    pub record: RenderedRecord,
}

#[derive(Debug)]
pub struct MemoryEntry {
    pub snapshot: MemorySnapshot,
    pub delta: f64,
    pub record: RenderedRecord,
}

/// Per-metric history for a whole run, sized once from the sample count.
#[derive(Debug)]
pub struct RoundBuffers {
    pub cpu: RoundBuffer<CpuEntry>,
    pub memory: RoundBuffer<MemoryEntry>,
}

impl RoundBuffers {
    pub fn new(rounds: usize) -> Self {
        Self {
            cpu: RoundBuffer::new(rounds),
            memory: RoundBuffer::new(rounds),
        }
    }
}

pub fn save_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, SavePosition)
}

pub fn restore_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, RestorePosition)
}

/// Runs one round: sample each selected metric, derive deltas, render
/// graphs, store the records and print the block.
pub struct Display<'a> {
    config: &'a RunConfig,
}

impl<'a> Display<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    pub fn render_round<P, W>(
        &self,
        round: usize,
        provider: &mut P,
        buffers: &mut RoundBuffers,
        out: &mut W,
    ) -> io::Result<()>
    where
        P: SnapshotProvider,
        W: Write,
    {
        let selection = self.config.selection;
        if selection.includes_system() {
            self.sample_memory(round, provider, &mut buffers.memory);
            self.sample_cpu(round, provider, &mut buffers.cpu);
        }

        if self.config.refresh == RefreshMode::InPlace {
            save_cursor(out)?;
        }
        self.write_parameters(round, provider, out)?;
        if selection.includes_system() {
            self.write_memory(round, &buffers.memory, out)?;
        }
        if selection.includes_sessions() {
            write_sessions(provider, out)?;
        }
        if selection.includes_system() {
            self.write_cpu(round, provider.core_count(), &buffers.cpu, out)?;
        }
        out.flush()
    }

    fn sample_memory<P: SnapshotProvider>(
        &self,
        round: usize,
        provider: &mut P,
        buffer: &mut RoundBuffer<MemoryEntry>,
    ) {
        let snapshot = match provider.read_memory() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(round, error = %err, "memory counters unavailable, skipping this round");
                return;
            }
        };
        let prev = buffer
            .latest_before(round)
            .map(|e| e.snapshot.physical_used_gb);
        let delta = memory_delta(prev, snapshot.physical_used_gb);
        let text = format!(
            "{:.2} GB / {:.2} GB  -- {:.2} GB / {:.2} GB",
            snapshot.physical_used_gb,
            snapshot.physical_total_gb,
            snapshot.virtual_used_gb,
            snapshot.virtual_total_gb
        );
        let graph = self
            .config
            .show_graph
            .then(|| memory_graph(delta, snapshot.physical_used_gb));
        let entry = MemoryEntry {
            snapshot,
            delta,
            record: RenderedRecord::new(round, text, graph),
        };
        if let Err(err) = buffer.record(round, entry) {
            warn!(round, error = %err, "memory record dropped");
        }
    }

    fn sample_cpu<P: SnapshotProvider>(
        &self,
        round: usize,
        provider: &mut P,
        buffer: &mut RoundBuffer<CpuEntry>,
    ) {
        let snapshot = match provider.read_cpu() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(round, error = %err, "cpu counters unavailable, skipping this round");
                return;
            }
        };
        let usage = cpu_usage_percent(buffer.latest_before(round).map(|e| &e.snapshot), &snapshot);
        let text = format!("total cpu use = {usage:.2}%");
        let graph = self.config.show_graph.then(|| cpu_graph(usage));
        let entry = CpuEntry {
            snapshot,
            usage,
            record: RenderedRecord::new(round, text, graph),
        };
        if let Err(err) = buffer.record(round, entry) {
            warn!(round, error = %err, "cpu record dropped");
        }
    }

    fn write_parameters<P: SnapshotProvider, W: Write>(
        &self,
        round: usize,
        provider: &mut P,
        out: &mut W,
    ) -> io::Result<()> {
        match self.config.refresh {
            RefreshMode::InPlace => writeln!(
                out,
                "Nbr of samples: {} -- every {} secs",
                self.config.sample_count, self.config.interval_secs
            )?,
            RefreshMode::Sequential => writeln!(out, ">>> iteration {round}")?,
        }
        match provider.self_memory_kb() {
            Some(kb) => writeln!(out, " Memory usage: {kb} kilobytes"),
            None => writeln!(out, " Memory usage: unavailable"),
        }
    }

    fn write_memory<W: Write>(
        &self,
        round: usize,
        buffer: &RoundBuffer<MemoryEntry>,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "### Memory ### (Phys.Used/Tot -- Virtual Used/Tot)")?;
        for row in self.config.refresh.frame(buffer, round, true) {
            match row {
                Some(entry) => writeln!(out, "{}", entry.record.line())?,
                None => writeln!(out)?,
            }
        }
        Ok(())
    }

    fn write_cpu<W: Write>(
        &self,
        round: usize,
        cores: usize,
        buffer: &RoundBuffer<CpuEntry>,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "Number of cores: {cores}")?;
        match buffer.get(round) {
            Some(entry) => writeln!(out, "{}", entry.record.text)?,
            None => writeln!(out, "total cpu use = n/a")?,
        }
        if !self.config.show_graph {
            return Ok(());
        }
        for row in self.config.refresh.frame(buffer, round, false) {
            match row.and_then(|e| e.record.graph.as_deref()) {
                Some(graph) => writeln!(out, "{graph}")?,
                None => writeln!(out)?,
            }
        }
        Ok(())
    }
}

fn write_sessions<P: SnapshotProvider, W: Write>(provider: &mut P, out: &mut W) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "### Sessions/users ###")?;
    match provider.read_sessions() {
        Ok(sessions) => {
            for s in sessions {
                writeln!(out, " {}\t{} ({})", s.user, s.line, s.host)?;
            }
        }
        Err(err) => warn!(error = %err, "session records unavailable"),
    }
    writeln!(out, "{SEPARATOR}")
}

/// The one-off report printed after the last round.
pub fn write_identity<W: Write>(identity: &SystemIdentity, out: &mut W) -> io::Result<()> {
    fn or_unknown(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or("unknown")
    }

    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "### System Information ###")?;
    writeln!(out, " System Name = {}", or_unknown(&identity.system_name))?;
    writeln!(
        out,
        " Machine Name = {}",
        or_unknown(&identity.machine_name)
    )?;
    writeln!(out, " Version = {}", or_unknown(&identity.version))?;
    writeln!(out, " Release = {}", or_unknown(&identity.release))?;
    writeln!(
        out,
        " Architecture = {}",
        or_unknown(&identity.architecture)
    )?;
    writeln!(
        out,
        " System running since last reboot: {}",
        format_uptime(identity.uptime_secs)
    )?;
    writeln!(out, "{SEPARATOR}")
}
