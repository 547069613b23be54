use crate::error::ProviderError;
use crate::system::snapshot::{CpuSnapshot, Session};

use super::{PlatformExtensions, unix};

const PROC_STAT: &str = "/proc/stat";
const KERNEL_VERSION: &str = "/proc/sys/kernel/version";

pub struct Platform;

impl PlatformExtensions for Platform {
    fn cpu_counters() -> Result<CpuSnapshot, ProviderError> {
        let contents = std::fs::read_to_string(PROC_STAT).map_err(|source| ProviderError::Io {
            source_name: PROC_STAT,
            source,
        })?;
        parse_proc_stat(&contents).ok_or(ProviderError::Malformed(PROC_STAT))
    }

    fn user_sessions() -> Result<Vec<Session>, ProviderError> {
        Ok(unix::user_sessions())
    }

    fn kernel_name() -> Option<String> {
        unix::kernel_name()
    }

    fn kernel_build() -> Option<String> {
        std::fs::read_to_string(KERNEL_VERSION)
            .ok()
            .map(|contents| contents.trim().to_string())
            .filter(|build| !build.is_empty())
            .or_else(unix::kernel_version)
    }
}

/// Parses the aggregate `cpu` line of `/proc/stat`.
///
/// Fields after the label: user nice system idle iowait irq softirq steal
/// guest guest_nice. The first nine are summed; guest_nice is ignored.
/// Older kernels that report fewer columns contribute zero for the missing
/// ones, but at least user..idle must be present.
fn parse_proc_stat(contents: &str) -> Option<CpuSnapshot> {
    let line = contents.lines().find(|l| l.starts_with("cpu "))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .take(9)
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    if fields.len() < 4 {
        return None;
    }
    Some(CpuSnapshot {
        total_time: fields.iter().sum(),
        idle_time: fields[3],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_name_matches_uname_command() {
        let output = std::process::Command::new("uname")
            .arg("-s")
            .output()
            .unwrap();
        let expected = String::from_utf8(output.stdout).unwrap();
        assert_eq!(Platform::kernel_name().as_deref(), Some(expected.trim()));
        assert_eq!(Platform::kernel_name().as_deref(), Some("Linux"));
    }

    #[test]
    fn parses_aggregate_cpu_line() {
        let stat = "cpu  100 5 50 800 20 3 2 1 4 9\ncpu0 50 2 25 400 10 1 1 0 2 4\nintr 12345\n";
        let snap = parse_proc_stat(stat).unwrap();
        assert_eq!(snap.idle_time, 800);
        assert_eq!(snap.total_time, 100 + 5 + 50 + 800 + 20 + 3 + 2 + 1 + 4);
    }

    #[test]
    fn short_line_is_accepted_with_four_columns() {
        let snap = parse_proc_stat("cpu 1 2 3 4\n").unwrap();
        assert_eq!(snap.total_time, 10);
        assert_eq!(snap.idle_time, 4);
    }

    #[test]
    fn rejects_missing_or_garbled_line() {
        assert!(parse_proc_stat("intr 1 2 3\n").is_none());
        assert!(parse_proc_stat("cpu  1 2 x 4\n").is_none());
        assert!(parse_proc_stat("cpu  1 2\n").is_none());
    }
}
