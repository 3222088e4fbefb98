//! Unix implementations of platform helpers (POSIX stat/mkdir/rmdir/unlink).

use std::ffi::CString;
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use super::EntryKind;

/// Android has no shared /tmp; apps are expected to keep their own.
#[cfg(target_os = "android")]
pub const FALLBACK_TEMP_DIR: &str = "/data/local/tmp";
#[cfg(not(target_os = "android"))]
pub const FALLBACK_TEMP_DIR: &str = "/tmp";

pub const TEMP_DIR_VARS: &[&str] = &["TMPDIR"];

fn to_cstring(path: &Path) -> io::Result<CString> {
    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL"))
}

fn check(rc: libc::c_int) -> io::Result<()> {
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// stat(2) when `follow` is set, lstat(2) otherwise.
pub fn entry_kind(path: &Path, follow: bool) -> io::Result<EntryKind> {
    let c_path = to_cstring(path)?;
    let mut st: MaybeUninit<libc::stat> = MaybeUninit::uninit();
    let rc = unsafe {
        if follow {
            libc::stat(c_path.as_ptr(), st.as_mut_ptr())
        } else {
            libc::lstat(c_path.as_ptr(), st.as_mut_ptr())
        }
    };
    check(rc)?;
    let st = unsafe { st.assume_init() };
    Ok(match st.st_mode & libc::S_IFMT {
        libc::S_IFDIR => EntryKind::Directory,
        libc::S_IFREG => EntryKind::File,
        libc::S_IFLNK => EntryKind::Symlink,
        _ => EntryKind::Other,
    })
}

/// mkdir(2) with 0777 (the process umask applies).
pub fn make_dir(path: &Path) -> io::Result<()> {
    let c_path = to_cstring(path)?;
    check(unsafe { libc::mkdir(c_path.as_ptr(), 0o777) })
}

pub fn remove_dir(path: &Path) -> io::Result<()> {
    let c_path = to_cstring(path)?;
    check(unsafe { libc::rmdir(c_path.as_ptr()) })
}

/// unlink(2): removes files and symlinks alike, never the link target.
pub fn remove_file(path: &Path) -> io::Result<()> {
    let c_path = to_cstring(path)?;
    check(unsafe { libc::unlink(c_path.as_ptr()) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::symlink;
    use tempfile::tempdir;

    #[test]
    fn kinds_follow_and_no_follow() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"x").unwrap();
        let link = dir.path().join("l");
        symlink(dir.path(), &link).unwrap();

        assert_eq!(entry_kind(dir.path(), true).unwrap(), EntryKind::Directory);
        assert_eq!(entry_kind(&file, true).unwrap(), EntryKind::File);
        assert_eq!(entry_kind(&link, true).unwrap(), EntryKind::Directory);
        assert_eq!(entry_kind(&link, false).unwrap(), EntryKind::Symlink);
    }

    #[test]
    fn missing_path_is_enoent() {
        let dir = tempdir().unwrap();
        let err = entry_kind(&dir.path().join("nope"), false).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::ENOENT));
    }

    #[test]
    fn mkdir_then_rmdir() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        make_dir(&sub).unwrap();
        assert!(sub.is_dir());
        let again = make_dir(&sub).unwrap_err();
        assert_eq!(again.raw_os_error(), Some(libc::EEXIST));
        remove_dir(&sub).unwrap();
        assert!(!sub.exists());
    }

    #[test]
    fn unlink_symlink_keeps_target() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.txt");
        fs::write(&target, b"keep").unwrap();
        let link = dir.path().join("link");
        symlink(&target, &link).unwrap();
        remove_file(&link).unwrap();
        assert!(fs::symlink_metadata(&link).is_err());
        assert_eq!(fs::read(&target).unwrap(), b"keep");
    }

    #[test]
    fn nul_in_path_is_invalid_input() {
        let err = make_dir(Path::new("a\0b")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
