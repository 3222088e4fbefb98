use serial_test::serial;
use std::ffi::OsString;
use std::path::PathBuf;

use path_oracle::temp_dir;
use path_oracle::platform::FALLBACK_TEMP_DIR;

/// Saves TMPDIR and puts it back on drop.
struct SavedTmpdir(Option<OsString>);

impl SavedTmpdir {
    fn take() -> Self {
        Self(std::env::var_os("TMPDIR"))
    }
}

impl Drop for SavedTmpdir {
    fn drop(&mut self) {
        unsafe {
            match &self.0 {
                Some(v) => std::env::set_var("TMPDIR", v),
                None => std::env::remove_var("TMPDIR"),
            }
        }
    }
}

#[test]
#[serial]
fn tmpdir_override_is_returned_exactly() {
    let _saved = SavedTmpdir::take();
    unsafe {
        std::env::set_var("TMPDIR", "/custom/tmp");
    }
    assert_eq!(temp_dir(), PathBuf::from("/custom/tmp"));
}

#[cfg(unix)]
#[test]
#[serial]
fn no_tmpdir_uses_absolute_fallback() {
    let _saved = SavedTmpdir::take();
    unsafe {
        std::env::remove_var("TMPDIR");
    }
    assert!(std::env::var_os("TMPDIR").is_none());

    let tmp = temp_dir();
    assert_eq!(tmp, PathBuf::from(FALLBACK_TEMP_DIR));
    assert!(tmp.starts_with("/"));
}

#[cfg(unix)]
#[test]
#[serial]
fn empty_tmpdir_uses_fallback() {
    let _saved = SavedTmpdir::take();
    unsafe {
        std::env::set_var("TMPDIR", "");
    }
    assert_eq!(temp_dir(), PathBuf::from(FALLBACK_TEMP_DIR));
}
