use crate::error::ProviderError;
use crate::system::snapshot::{CpuSnapshot, Session};

use super::{PlatformExtensions, unix};

pub struct Platform;

impl PlatformExtensions for Platform {
    fn cpu_counters() -> Result<CpuSnapshot, ProviderError> {
        // Mach host_statistics ticks are not exposed through a stable libc binding.
        Err(ProviderError::Unsupported("aggregate CPU time counters"))
    }

    fn user_sessions() -> Result<Vec<Session>, ProviderError> {
        Ok(unix::user_sessions())
    }

    fn kernel_name() -> Option<String> {
        unix::kernel_name()
    }

    fn kernel_build() -> Option<String> {
        unix::kernel_version()
    }
}
