//! ASCII trend bars.
//!
//! Both bars are pure functions of their inputs so rendered history can be
//! compared byte-for-byte between runs.

use std::fmt::Write;

/// Upper bound on bar symbols in a single graph line. Longer bars are cut
/// here so a line never approaches the 1024-byte terminal line budget.
pub const MAX_BAR_SYMBOLS: usize = 1000;

const CPU_TICK: char = '|';
const MEMORY_HEADER: &str = "\t|";

/// Number of `|` ticks for a CPU usage value.
///
/// `2 + bonus + 2 * floor(usage)`, where the bonus is 2 when the fractional
/// part is at least one half, 1 when it is below one half, and 0 only for a
/// usage of exactly zero. Out-of-range input is clamped to `[0, 100]`.
pub fn cpu_bar_len(usage: f64) -> usize {
    let usage = if usage.is_finite() {
        usage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let whole = usage.floor();
    let bonus = if usage - whole >= 0.5 {
        2
    } else if usage != 0.0 {
        1
    } else {
        0
    };
    (2 + bonus + 2 * whole as usize).min(MAX_BAR_SYMBOLS)
}

/// `\t` + ticks + ` UU.UU`
pub fn cpu_graph(usage: f64) -> String {
    let len = cpu_bar_len(usage);
    let mut out = String::with_capacity(len + 16);
    out.push('\t');
    out.extend(std::iter::repeat_n(CPU_TICK, len));
    let _ = write!(out, " {usage:.2}");
    out
}

/// Direction of a memory change, as drawn by [`memory_graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryTrend {
    /// Exactly zero change.
    Unchanged,
    /// Positive but below 0.01 GB.
    Steady,
    /// At least 0.01 GB more; carries the `#` count.
    Rising(usize),
    /// Any decrease; carries the `:` count (may be zero for tiny drops).
    Falling(usize),
}

impl MemoryTrend {
    pub fn classify(delta: f64) -> Self {
        if delta == 0.0 {
            MemoryTrend::Unchanged
        } else if delta >= 0.01 {
            MemoryTrend::Rising(hundredths(delta))
        } else if delta < 0.0 {
            MemoryTrend::Falling(hundredths(-delta))
        } else {
            // 0 < delta < 0.01, and NaN
            MemoryTrend::Steady
        }
    }

    fn write_bar(self, out: &mut String) {
        match self {
            MemoryTrend::Unchanged | MemoryTrend::Steady => out.push('o'),
            MemoryTrend::Rising(n) => {
                out.extend(std::iter::repeat_n('#', n));
                out.push('*');
            }
            MemoryTrend::Falling(n) => {
                out.extend(std::iter::repeat_n(':', n));
                out.push('@');
            }
        }
    }
}

fn hundredths(magnitude: f64) -> usize {
    ((magnitude * 100.0).floor() as usize).min(MAX_BAR_SYMBOLS)
}

/// `\t|` + bar + ` D.DD (C.CC)` where D is the delta and C the current
/// physical usage, both in GB.
pub fn memory_graph(delta: f64, current: f64) -> String {
    let mut out = String::from(MEMORY_HEADER);
    MemoryTrend::classify(delta).write_bar(&mut out);
    let _ = write!(out, " {delta:.2} ({current:.2})");
    out
}
