//! Existence queries.
//!
//! `dir_exists` is type-checked while `file_exists` accepts any entry type;
//! callers wanting "regular file" combine `file_exists && !dir_exists`.

use std::path::Path;
use tracing::trace;

use crate::errors::{FsError, Status};
use crate::platform::{self, EntryKind};

/// True iff `path` resolves (following symlinks) to a directory.
/// Missing paths, broken links and stat failures all yield `false`.
pub fn dir_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match platform::entry_kind(path, true) {
        Ok(kind) => kind == EntryKind::Directory,
        Err(e) => {
            trace!(path = %path.display(), error = %e, "dir_exists: stat failed");
            false
        }
    }
}

/// True iff `path` resolves to any existing entry: file, directory or other.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    platform::entry_kind(path.as_ref(), true).is_ok()
}

/// `Ok` if `path` is a directory, `NotFound` if nothing is there,
/// `TypeMismatch` if something else is, or the classified stat error.
pub fn is_directory(path: impl AsRef<Path>) -> Status {
    let path = path.as_ref();
    match platform::entry_kind(path, true) {
        Ok(EntryKind::Directory) => Ok(()),
        Ok(_) => Err(FsError::type_mismatch(path, "directory")),
        Err(e) => Err(FsError::from_io("stat", path, &e)),
    }
}
