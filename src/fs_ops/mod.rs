//! Filesystem operations: existence queries, temp-dir lookup, and
//! single/recursive create and recursive delete.
//!
//! All functions are stateless; every OS failure is classified into `Code`
//! at the call site and returned as `FsError`.

mod create;
mod delete;
mod exists;
pub(crate) mod helpers;
mod temp;

pub use create::{create_dir, recursively_create};
pub use delete::recursively_delete;
pub use exists::{dir_exists, file_exists, is_directory};
pub use temp::{temp_dir, temp_dir_from};
