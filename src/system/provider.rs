use crate::error::ProviderError;

use super::snapshot::{CpuSnapshot, MemorySnapshot, Session, SystemIdentity};

/// Source of point-in-time counter readings.
///
/// Every call returns a fresh snapshot; implementations keep no history on
/// behalf of the caller.
pub trait SnapshotProvider {
    fn read_cpu(&mut self) -> Result<CpuSnapshot, ProviderError>;
    fn read_memory(&mut self) -> Result<MemorySnapshot, ProviderError>;
    fn read_sessions(&mut self) -> Result<Vec<Session>, ProviderError>;
    fn read_identity(&mut self) -> Result<SystemIdentity, ProviderError>;

    /// Number of logical CPUs currently online.
    fn core_count(&self) -> usize;

    /// Resident memory of the reporting process itself, in kilobytes.
    fn self_memory_kb(&mut self) -> Option<u64>;
}
