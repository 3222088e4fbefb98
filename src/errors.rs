//! Typed status model for path_oracle.
//! Every fallible operation returns a `Status` (or `Result<T, FsError>`); OS
//! errors are classified into a small `Code` taxonomy at the syscall site.

use std::fmt;
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::fs_ops::helpers::{build_message, classify};

/// Outcome kinds shared by every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Ok,
    /// Only produced by the non-idempotent `create_dir`.
    AlreadyExists,
    PermissionDenied,
    NotFound,
    /// A path segment exists with the wrong entry type.
    TypeMismatch,
    /// The target platform has no port of this operation.
    Unimplemented,
    Unknown,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::Ok => "ok",
            Code::AlreadyExists => "already exists",
            Code::PermissionDenied => "permission denied",
            Code::NotFound => "not found",
            Code::TypeMismatch => "type mismatch",
            Code::Unimplemented => "unimplemented",
            Code::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed operation: never `Code::Ok`, never an empty message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FsError {
    code: Code,
    message: String,
}

impl FsError {
    /// Build an error from a code and diagnostic.
    ///
    /// `Code::Ok` is not a failure and is recorded as `Unknown`; an empty
    /// message is replaced by the code's description.
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        let code = if code == Code::Ok { Code::Unknown } else { code };
        let mut message = message.into();
        if message.trim().is_empty() {
            message = code.as_str().to_string();
        }
        Self { code, message }
    }

    /// Classify an OS error raised by `op` on `path`.
    pub fn from_io(op: &str, path: &Path, e: &io::Error) -> Self {
        Self::new(classify(e), build_message(op, path, e))
    }

    pub fn type_mismatch(path: &Path, expected: &str) -> Self {
        Self::new(
            Code::TypeMismatch,
            format!("'{}' exists but is not a {}", path.display(), expected),
        )
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of a mutating operation with no payload.
pub type Status = Result<(), FsError>;

/// Read the `Code` out of any result, `Code::Ok` for success.
pub trait StatusExt {
    fn code(&self) -> Code;
}

impl<T> StatusExt for Result<T, FsError> {
    fn code(&self) -> Code {
        match self {
            Ok(_) => Code::Ok,
            Err(e) => e.code(),
        }
    }
}
