//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic. Every function takes
//! a `&Path`, transcodes it for the native API per call and reports failures
//! as `io::Error` for `FsError::from_io` to classify.

#[cfg(any(windows, test))]
mod wide;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;
#[cfg(not(any(unix, windows)))]
mod unsupported;

#[cfg(unix)]
pub use unix::{entry_kind, make_dir, remove_dir, remove_file, FALLBACK_TEMP_DIR, TEMP_DIR_VARS};

#[cfg(windows)]
pub use windows::{entry_kind, make_dir, remove_dir, remove_file, FALLBACK_TEMP_DIR, TEMP_DIR_VARS};

#[cfg(not(any(unix, windows)))]
pub use unsupported::{
    entry_kind, make_dir, remove_dir, remove_file, FALLBACK_TEMP_DIR, TEMP_DIR_VARS,
};

/// Type of a filesystem entry as reported by a single stat-style call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Only reported when the query does not follow links.
    Symlink,
    /// Sockets, FIFOs, devices.
    Other,
}
