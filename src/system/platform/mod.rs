use crate::error::ProviderError;
use crate::system::snapshot::{CpuSnapshot, Session};

pub trait PlatformExtensions {
    fn cpu_counters() -> Result<CpuSnapshot, ProviderError>;
    fn user_sessions() -> Result<Vec<Session>, ProviderError>;
    /// Kernel name (`uname -s`), e.g. `Linux`.
    fn kernel_name() -> Option<String>;
    /// Kernel build string (`uname -v`), when the platform exposes one.
    fn kernel_build() -> Option<String>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(unix)]
mod unix;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn cpu_counters() -> Result<CpuSnapshot, ProviderError> {
    platform_impl::Platform::cpu_counters()
}

pub fn user_sessions() -> Result<Vec<Session>, ProviderError> {
    platform_impl::Platform::user_sessions()
}

pub fn kernel_name() -> Option<String> {
    platform_impl::Platform::kernel_name()
}

pub fn kernel_build() -> Option<String> {
    platform_impl::Platform::kernel_build()
}
