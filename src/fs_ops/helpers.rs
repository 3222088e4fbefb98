//! OS error classification helpers.
//!
//! Maps raw OS codes (libc on Unix, Win32 on Windows) into `Code`, falling back
//! to `io::ErrorKind`, and builds diagnostics with platform-aware hints.
//!
//! Usage:
//!   platform::make_dir(path).map_err(|e| FsError::from_io("create dir", path, &e))?;

use std::io;
use std::path::Path;

use crate::errors::Code;

/// Classify an OS error into the shared taxonomy.
pub(crate) fn classify(e: &io::Error) -> Code {
    if let Some(code) = e.raw_os_error() {
        if let Some(c) = classify_raw(code) {
            return c;
        }
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
            Code::PermissionDenied
        }
        io::ErrorKind::NotFound => Code::NotFound,
        io::ErrorKind::AlreadyExists => Code::AlreadyExists,
        io::ErrorKind::NotADirectory | io::ErrorKind::IsADirectory => Code::TypeMismatch,
        io::ErrorKind::Unsupported => Code::Unimplemented,
        _ => Code::Unknown,
    }
}

#[cfg(unix)]
fn classify_raw(code: i32) -> Option<Code> {
    match code {
        libc::EACCES | libc::EPERM | libc::EROFS => Some(Code::PermissionDenied),
        libc::ENOENT => Some(Code::NotFound),
        libc::EEXIST => Some(Code::AlreadyExists),
        libc::ENOTDIR | libc::EISDIR => Some(Code::TypeMismatch),
        libc::ENOSYS | libc::EOPNOTSUPP => Some(Code::Unimplemented),
        _ => None,
    }
}

#[cfg(windows)]
fn classify_raw(code: i32) -> Option<Code> {
    use windows_sys::Win32::Foundation::{
        ERROR_ACCESS_DENIED, ERROR_ALREADY_EXISTS, ERROR_CALL_NOT_IMPLEMENTED, ERROR_DIRECTORY,
        ERROR_FILE_EXISTS, ERROR_FILE_NOT_FOUND, ERROR_NOT_SUPPORTED, ERROR_PATH_NOT_FOUND,
        ERROR_WRITE_PROTECT,
    };
    match code as u32 {
        ERROR_ACCESS_DENIED | ERROR_WRITE_PROTECT => Some(Code::PermissionDenied),
        ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND => Some(Code::NotFound),
        ERROR_ALREADY_EXISTS | ERROR_FILE_EXISTS => Some(Code::AlreadyExists),
        ERROR_DIRECTORY => Some(Code::TypeMismatch),
        ERROR_NOT_SUPPORTED | ERROR_CALL_NOT_IMPLEMENTED => Some(Code::Unimplemented),
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn classify_raw(_code: i32) -> Option<Code> {
    None
}

/// Format a human-friendly message with op/path plus platform-aware hints.
pub(crate) fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" — permission denied; check ownership and mode bits of the parent.");
                }
                libc::EROFS => {
                    msg.push_str(" — read-only filesystem; cannot write here.");
                }
                libc::ENOTDIR => {
                    msg.push_str(" — a path segment is not a directory.");
                }
                libc::ENOTEMPTY => {
                    msg.push_str(" — directory not empty; another process may be writing into it.");
                }
                libc::EBUSY => {
                    msg.push_str(" — resource busy; a mount point or open handle may hold it.");
                }
                libc::ELOOP => {
                    msg.push_str(" — too many symbolic link levels (ELOOP); possible symlink cycle.");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str(" — filename or path too long; shorten path segments.");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" — access denied; check permissions."), // ERROR_ACCESS_DENIED
                32 => msg.push_str(" — sharing violation; file is in use."), // ERROR_SHARING_VIOLATION
                145 => msg.push_str(" — directory not empty."), // ERROR_DIR_NOT_EMPTY
                206 => msg.push_str(" — filename or path too long (MAX_PATH exceeded)."), // ERROR_FILENAME_EXCED_RANGE
                267 => msg.push_str(" — a path segment is not a directory."), // ERROR_DIRECTORY
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" — permission denied; check ownership and mode bits of the parent.");
            }
            io::ErrorKind::InvalidInput => {
                msg.push_str(" — path cannot be passed to the OS (embedded NUL?).");
            }
            io::ErrorKind::Unsupported => {
                msg.push_str(" — not ported to this platform.");
            }
            _ => {}
        }
    }

    msg
}
