//! UTF-16 path encoding for wide-character Windows APIs.
//!
//! Only the `Path` entry point is Windows-specific; the terminator logic is
//! also built for tests on every host.

use std::io;

#[cfg(windows)]
use std::os::windows::ffi::OsStrExt;
#[cfg(windows)]
use std::path::Path;

/// Native wide form of `path`, NUL-terminated, built fresh on every call.
#[cfg(windows)]
pub(crate) fn path_to_wide(path: &Path) -> io::Result<Vec<u16>> {
    terminate(path.as_os_str().encode_wide())
}

/// Append the NUL terminator. Interior NULs are rejected: the OS would
/// silently truncate at them.
fn terminate(units: impl IntoIterator<Item = u16>) -> io::Result<Vec<u16>> {
    let mut wide: Vec<u16> = units.into_iter().collect();
    if wide.contains(&0) {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"));
    }
    wide.push(0);
    Ok(wide)
}
