//! Targets with neither POSIX nor Win32 filesystem calls.
//! Every operation reports `Unsupported`, which classifies as `Code::Unimplemented`.

use std::io;
use std::path::Path;

use super::EntryKind;

pub const FALLBACK_TEMP_DIR: &str = "/tmp";

pub const TEMP_DIR_VARS: &[&str] = &["TMPDIR"];

fn unported(op: &str) -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, format!("{op} is not ported to this target"))
}

pub fn entry_kind(_path: &Path, _follow: bool) -> io::Result<EntryKind> {
    Err(unported("stat"))
}

pub fn make_dir(_path: &Path) -> io::Result<()> {
    Err(unported("mkdir"))
}

pub fn remove_dir(_path: &Path) -> io::Result<()> {
    Err(unported("rmdir"))
}

pub fn remove_file(_path: &Path) -> io::Result<()> {
    Err(unported("unlink"))
}
