use crate::system::snapshot::CpuSnapshot;

/// CPU busy percentage between two snapshots.
///
/// With no previous snapshot (round 0) this is the since-boot average,
/// `100 - idle * 100 / total`. It is kept as-is for compatibility even
/// though it is not a rate over the sampling window.
///
/// An empty window (no ticks elapsed, or counters that went backwards)
/// yields `0.0` rather than NaN. The result is always within `[0, 100]`.
pub fn cpu_usage_percent(prev: Option<&CpuSnapshot>, cur: &CpuSnapshot) -> f64 {
    let (idle, total) = match prev {
        None => (cur.idle_time, cur.total_time),
        Some(prev) => {
            let Some(total) = cur.total_time.checked_sub(prev.total_time) else {
                tracing::debug!(
                    prev = prev.total_time,
                    cur = cur.total_time,
                    "cpu counters went backwards"
                );
                return 0.0;
            };
            (cur.idle_time.saturating_sub(prev.idle_time), total)
        }
    };

    if total == 0 {
        tracing::debug!("empty cpu time window");
        return 0.0;
    }

    let usage = 100.0 - (idle as f64 * 100.0) / total as f64;
    usage.clamp(0.0, 100.0)
}

/// Signed change in a memory reading; zero when there is no history.
pub fn memory_delta(prev: Option<f64>, cur: f64) -> f64 {
    match prev {
        Some(prev) => cur - prev,
        None => 0.0,
    }
}
