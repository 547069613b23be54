use crate::system::snapshot::Session;

/// `uname -s`, e.g. `Linux` or `Darwin`.
pub fn kernel_name() -> Option<String> {
    uts_field(|uts| &uts.sysname[..])
}

/// `uname -v`, the kernel build string.
pub fn kernel_version() -> Option<String> {
    uts_field(|uts| &uts.version[..])
}

fn uts_field(pick: impl FnOnce(&libc::utsname) -> &[libc::c_char]) -> Option<String> {
    // utsname is plain fixed-size char arrays, so all-zero is a valid value.
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        return None;
    }
    let value = c_field(pick(&uts));
    (!value.is_empty()).then_some(value)
}

/// Walks the utmpx database and returns every `USER_PROCESS` entry.
pub fn user_sessions() -> Vec<Session> {
    let mut sessions = Vec::new();
    // getutxent returns a pointer into static storage that stays valid until
    // the next call; each entry is copied out before advancing.
    unsafe {
        libc::setutxent();
        loop {
            let entry = libc::getutxent();
            if entry.is_null() {
                break;
            }
            let entry = &*entry;
            if entry.ut_type == libc::USER_PROCESS {
                sessions.push(Session {
                    user: c_field(&entry.ut_user),
                    line: c_field(&entry.ut_line),
                    host: c_field(&entry.ut_host),
                });
            }
        }
        libc::endutxent();
    }
    sessions
}

/// utmp and utsname fields are fixed-size and only NUL-terminated when
/// shorter than the array.
fn c_field(raw: &[libc::c_char]) -> String {
    let bytes: Vec<u8> = raw
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_field_stops_at_nul() {
        let raw: [libc::c_char; 6] = [b'r' as _, b'o' as _, b'o' as _, b't' as _, 0, b'x' as _];
        assert_eq!(c_field(&raw), "root");
    }

    #[test]
    fn uname_reports_a_kernel_name() {
        let name = kernel_name().unwrap();
        assert!(!name.is_empty());
        assert!(!name.contains('\0'));
    }

    #[test]
    fn c_field_handles_unterminated_array() {
        let raw: [libc::c_char; 3] = [b'p' as _, b't' as _, b's' as _];
        assert_eq!(c_field(&raw), "pts");
    }
}
