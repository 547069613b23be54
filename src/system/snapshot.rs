/// Aggregate CPU time counters since boot, in whatever tick unit the
/// platform reports. Only ratios of deltas are ever used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuSnapshot {
    /// user + nice + system + idle + iowait + irq + softirq + steal + guest
    pub total_time: u64,
    pub idle_time: u64,
}

/// One instantaneous memory reading, in decimal gigabytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemorySnapshot {
    pub physical_used_gb: f64,
    pub physical_total_gb: f64,
    pub virtual_used_gb: f64,
    pub virtual_total_gb: f64,
}

const BYTES_PER_GB: f64 = 1_000_000_000.0;

impl MemorySnapshot {
    /// Builds a snapshot from raw RAM and swap byte counts.
    pub fn from_bytes(total_ram: u64, free_ram: u64, total_swap: u64, free_swap: u64) -> Self {
        let physical_total_gb = total_ram as f64 / BYTES_PER_GB;
        let physical_used_gb = total_ram.saturating_sub(free_ram) as f64 / BYTES_PER_GB;
        let swap_total_gb = total_swap as f64 / BYTES_PER_GB;
        let swap_used_gb = total_swap.saturating_sub(free_swap) as f64 / BYTES_PER_GB;

        MemorySnapshot {
            physical_used_gb,
            physical_total_gb,
            virtual_used_gb: physical_used_gb + swap_used_gb,
            virtual_total_gb: physical_total_gb + swap_total_gb,
        }
    }
}

/// A logged-in user session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: String,
    pub line: String,
    pub host: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemIdentity {
    pub system_name: Option<String>,
    pub machine_name: Option<String>,
    pub version: Option<String>,
    pub release: Option<String>,
    pub architecture: Option<String>,
    pub uptime_secs: u64,
}
