#![allow(dead_code)]

use std::collections::VecDeque;

use hoststat::error::ProviderError;
use hoststat::system::provider::SnapshotProvider;
use hoststat::system::snapshot::{CpuSnapshot, MemorySnapshot, Session, SystemIdentity};

/// Replays canned snapshots in order. An exhausted or `None` entry fails
/// that read with `ProviderError::Unsupported`.
#[derive(Default)]
pub struct ScriptedProvider {
    pub cpu: VecDeque<Option<CpuSnapshot>>,
    pub memory: VecDeque<Option<MemorySnapshot>>,
    pub sessions: Vec<Session>,
    pub identity: Option<SystemIdentity>,
    pub cores: usize,
    pub cpu_reads: usize,
    pub memory_reads: usize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            cores: 4,
            identity: Some(identity()),
            ..Self::default()
        }
    }

    pub fn with_cpu(mut self, samples: &[(u64, u64)]) -> Self {
        self.cpu = samples
            .iter()
            .map(|&(total_time, idle_time)| {
                Some(CpuSnapshot {
                    total_time,
                    idle_time,
                })
            })
            .collect();
        self
    }

    pub fn with_physical_used(mut self, used_gb: &[f64]) -> Self {
        self.memory = used_gb.iter().map(|&used| Some(memory(used))).collect();
        self
    }
}

pub fn memory(physical_used_gb: f64) -> MemorySnapshot {
    MemorySnapshot {
        physical_used_gb,
        physical_total_gb: 8.0,
        virtual_used_gb: physical_used_gb + 0.5,
        virtual_total_gb: 10.0,
    }
}

pub fn identity() -> SystemIdentity {
    SystemIdentity {
        system_name: Some("Linux".into()),
        machine_name: Some("testhost".into()),
        version: Some("#1 SMP".into()),
        release: Some("6.1.0".into()),
        architecture: Some("x86_64".into()),
        uptime_secs: 329_250,
    }
}

impl SnapshotProvider for ScriptedProvider {
    fn read_cpu(&mut self) -> Result<CpuSnapshot, ProviderError> {
        self.cpu_reads += 1;
        self.cpu
            .pop_front()
            .flatten()
            .ok_or(ProviderError::Unsupported("scripted cpu"))
    }

    fn read_memory(&mut self) -> Result<MemorySnapshot, ProviderError> {
        self.memory_reads += 1;
        self.memory
            .pop_front()
            .flatten()
            .ok_or(ProviderError::Unsupported("scripted memory"))
    }

    fn read_sessions(&mut self) -> Result<Vec<Session>, ProviderError> {
        Ok(self.sessions.clone())
    }

    fn read_identity(&mut self) -> Result<SystemIdentity, ProviderError> {
        self.identity
            .clone()
            .ok_or(ProviderError::Unsupported("scripted identity"))
    }

    fn core_count(&self) -> usize {
        self.cores
    }

    fn self_memory_kb(&mut self) -> Option<u64> {
        Some(2048)
    }
}
