//! Temporary directory resolution.
//!
//! Pure lookup: the first non-empty override variable wins verbatim, else the
//! platform fallback constant. Nothing is probed on disk.

use std::path::PathBuf;
use tracing::trace;

use crate::config::{EnvSource, ProcessEnv};
use crate::platform::{FALLBACK_TEMP_DIR, TEMP_DIR_VARS};

/// Best directory for temporary files, read from the real process environment.
pub fn temp_dir() -> PathBuf {
    temp_dir_from(&ProcessEnv)
}

/// Same as [`temp_dir`], with the environment supplied by the caller.
pub fn temp_dir_from<E: EnvSource + ?Sized>(env: &E) -> PathBuf {
    for key in TEMP_DIR_VARS {
        if let Some(value) = env.var_os(key) {
            if !value.is_empty() {
                trace!(var = *key, value = %value.to_string_lossy(), "temp dir from environment");
                return PathBuf::from(value);
            }
        }
    }
    trace!(fallback = FALLBACK_TEMP_DIR, "temp dir fallback");
    PathBuf::from(FALLBACK_TEMP_DIR)
}
