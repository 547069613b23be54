use windows_sys::Win32::{Foundation::FILETIME, System::Threading::GetSystemTimes};

use crate::error::ProviderError;
use crate::system::snapshot::{CpuSnapshot, Session};

use super::PlatformExtensions;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn cpu_counters() -> Result<CpuSnapshot, ProviderError> {
        let empty = FILETIME {
            dwLowDateTime: 0,
            dwHighDateTime: 0,
        };
        let (mut idle, mut kernel, mut user) = (empty, empty, empty);
        let ok = unsafe { GetSystemTimes(&mut idle, &mut kernel, &mut user) };
        if ok == 0 {
            return Err(ProviderError::Io {
                source_name: "GetSystemTimes",
                source: std::io::Error::last_os_error(),
            });
        }
        // Kernel time already includes idle time.
        Ok(CpuSnapshot {
            total_time: filetime_ticks(&kernel) + filetime_ticks(&user),
            idle_time: filetime_ticks(&idle),
        })
    }

    fn user_sessions() -> Result<Vec<Session>, ProviderError> {
        Err(ProviderError::Unsupported("utmp session records"))
    }

    fn kernel_name() -> Option<String> {
        None
    }

    fn kernel_build() -> Option<String> {
        None
    }
}

fn filetime_ticks(ft: &FILETIME) -> u64 {
    (u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime)
}
