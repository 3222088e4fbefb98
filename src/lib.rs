//! Core library for `path_oracle`.
//!
//! A small, stateless filesystem layer: existence checks, temp-dir lookup,
//! and single/recursive directory creation and recursive deletion. POSIX and
//! Win32 differences live in `platform`; every OS failure comes back as an
//! `FsError` carrying one of a handful of `Code`s.
//!
//! Note the deliberate asymmetry: [`dir_exists`] checks the entry type while
//! [`file_exists`] is true for any existing entry, directories included.

pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod logging;
pub mod platform;

pub use config::{EnvSource, LogLevel, ProcessEnv};
pub use errors::{Code, FsError, Status, StatusExt};
pub use fs_ops::{
    create_dir, dir_exists, file_exists, is_directory, recursively_create, recursively_delete,
    temp_dir, temp_dir_from,
};
pub use logging::{init_tracing, init_tracing_with_writer};
