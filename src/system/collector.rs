use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use crate::error::ProviderError;

use super::platform;
use super::provider::SnapshotProvider;
use super::snapshot::{CpuSnapshot, MemorySnapshot, Session, SystemIdentity};

/// Production provider: sysinfo for memory, identity and self-reporting,
/// the platform layer for raw CPU ticks, utmp sessions and uname fields.
pub struct Collector {
    sys: System,
    pid: Pid,
    cores: usize,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        let cores = sys.cpus().len().max(1);
        Collector {
            sys,
            pid: Pid::from_u32(std::process::id()),
            cores,
        }
    }
}

impl SnapshotProvider for Collector {
    fn read_cpu(&mut self) -> Result<CpuSnapshot, ProviderError> {
        platform::cpu_counters()
    }

    fn read_memory(&mut self) -> Result<MemorySnapshot, ProviderError> {
        self.sys.refresh_memory();
        let total_ram = self.sys.total_memory();
        if total_ram == 0 {
            return Err(ProviderError::Malformed("memory counters (zero total RAM)"));
        }
        Ok(MemorySnapshot::from_bytes(
            total_ram,
            self.sys.free_memory(),
            self.sys.total_swap(),
            self.sys.free_swap(),
        ))
    }

    fn read_sessions(&mut self) -> Result<Vec<Session>, ProviderError> {
        platform::user_sessions()
    }

    fn read_identity(&mut self) -> Result<SystemIdentity, ProviderError> {
        Ok(SystemIdentity {
            system_name: platform::kernel_name().or_else(System::name),
            machine_name: System::host_name(),
            version: platform::kernel_build().or_else(System::os_version),
            release: System::kernel_version(),
            architecture: Some(std::env::consts::ARCH.to_string()),
            uptime_secs: System::uptime(),
        })
    }

    fn core_count(&self) -> usize {
        self.cores
    }

    fn self_memory_kb(&mut self) -> Option<u64> {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        self.sys.process(self.pid).map(|p| p.memory() / 1024)
    }
}
