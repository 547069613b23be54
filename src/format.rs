const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// `D days HH:MM:SS (TH:MM:SS)`, where TH counts all hours including the
/// whole days.
pub fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / SECS_PER_DAY;
    let hours = (total_secs % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total_secs % SECS_PER_MINUTE;
    let total_hours = total_secs / SECS_PER_HOUR;
    let clock = format!("{minutes:02}:{seconds:02}");
    format!("{days} days {hours:02}:{clock} ({total_hours:02}:{clock})")
}
