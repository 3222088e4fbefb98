//! Directory creation: one level (`create_dir`) and the idempotent
//! `recursively_create`.

use std::path::Path;
use tracing::{debug, warn};

use super::exists::is_directory;
use crate::errors::{Code, FsError, Status};
use crate::platform;

/// Create a single directory.
///
/// - `Ok` if it was created here.
/// - `AlreadyExists` if a directory is already there.
/// - `TypeMismatch` if something else is there, or a parent segment is not a directory.
/// - `NotFound` if the parent does not exist.
pub fn create_dir(path: impl AsRef<Path>) -> Status {
    let path = path.as_ref();
    match platform::make_dir(path) {
        Ok(()) => {
            debug!(path = %path.display(), "created directory");
            Ok(())
        }
        Err(e) => {
            let err = FsError::from_io("create dir", path, &e);
            if err.code() != Code::AlreadyExists {
                return Err(err);
            }
            // A dangling link also reports EEXIST; only a resolvable directory counts.
            match is_directory(path) {
                Ok(()) => Err(err),
                Err(_) => Err(FsError::type_mismatch(path, "directory")),
            }
        }
    }
}

/// Ensure `path` and every missing ancestor exist as directories.
///
/// Returns `Ok` when the directory already exists, including when another
/// process created any segment first. Ancestors created before a failure are
/// left in place; the returned error always reflects that `path` itself was
/// not created.
pub fn recursively_create(path: impl AsRef<Path>) -> Status {
    let path = path.as_ref();
    let err = match create_dir(path) {
        Ok(()) => return Ok(()),
        Err(e) if e.code() == Code::AlreadyExists => return Ok(()),
        Err(e) => e,
    };

    if err.code() != Code::NotFound {
        log_failure(path, &err);
        return Err(err);
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => return Err(err),
    };
    recursively_create(parent)?;

    match create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.code() == Code::AlreadyExists => Ok(()),
        Err(e) => {
            log_failure(path, &e);
            Err(e)
        }
    }
}

fn log_failure(path: &Path, err: &FsError) {
    if err.code() == Code::PermissionDenied {
        warn!(path = %path.display(), error = %err, "recursive create stopped");
    } else {
        debug!(path = %path.display(), code = %err.code(), error = %err, "recursive create failed");
    }
}
