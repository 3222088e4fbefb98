//! Recursive deletion.
//!
//! Post-order walk with walkdir (`contents_first`), never following links:
//! a symlink is unlinked as an entry, its target is left alone. Entries that
//! disappear mid-walk (another process deleting the same tree) are skipped.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::errors::{Code, FsError, Status};
use crate::platform::{self, EntryKind};

/// Delete `path`: a file or link is unlinked, a directory is emptied
/// bottom-up and then removed. A missing `path` is `Ok`.
pub fn recursively_delete(path: impl AsRef<Path>) -> Status {
    // `link/` or `link/.` makes lstat resolve the link; drop trailing separators first.
    let root: PathBuf = path.as_ref().components().collect();
    let root = root.as_path();
    let kind = match platform::entry_kind(root, false) {
        Ok(kind) => kind,
        Err(e) => {
            let err = FsError::from_io("stat", root, &e);
            if err.code() == Code::NotFound {
                trace!(path = %root.display(), "nothing to delete");
                return Ok(());
            }
            return Err(stopped(root, err));
        }
    };

    if kind != EntryKind::Directory {
        return remove_entry(root, false).map_err(|e| stopped(root, e));
    }

    let walker = WalkDir::new(root)
        .contents_first(true)
        .follow_links(false)
        .follow_root_links(false);

    for entry in walker {
        match entry {
            Ok(entry) => {
                remove_entry(entry.path(), entry.file_type().is_dir()).map_err(|e| stopped(root, e))?;
            }
            Err(e) => {
                let at = e.path().unwrap_or(root);
                let err = match e.io_error() {
                    Some(io) => FsError::from_io("read dir", at, io),
                    None => FsError::new(Code::Unknown, format!("walk '{}': {}", at.display(), e)),
                };
                if err.code() == Code::NotFound {
                    trace!(path = %at.display(), "entry vanished during walk");
                    continue;
                }
                return Err(stopped(root, err));
            }
        }
    }

    debug!(path = %root.display(), "deleted directory tree");
    Ok(())
}

fn remove_entry(path: &Path, is_dir: bool) -> Status {
    let (op, res) = if is_dir {
        ("remove dir", platform::remove_dir(path))
    } else {
        ("remove file", platform::remove_file(path))
    };
    match res {
        Ok(()) => {
            trace!(path = %path.display(), op, "removed");
            Ok(())
        }
        Err(e) => {
            let err = FsError::from_io(op, path, &e);
            if err.code() == Code::NotFound {
                return Ok(());
            }
            Err(err)
        }
    }
}

fn stopped(root: &Path, err: FsError) -> FsError {
    if err.code() == Code::PermissionDenied {
        warn!(path = %root.display(), error = %err, "recursive delete stopped");
    } else {
        debug!(path = %root.display(), code = %err.code(), error = %err, "recursive delete failed");
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StatusExt;
    use crate::fs_ops::{dir_exists, file_exists};
    use assert_fs::prelude::*;

    #[test]
    fn missing_is_ok() {
        let temp = assert_fs::TempDir::new().unwrap();
        let p = temp.child("never");
        assert_eq!(recursively_delete(p.path()).code(), Code::Ok);
        assert_eq!(recursively_delete(p.path()).code(), Code::Ok);
    }

    #[test]
    fn single_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("f.txt");
        f.write_str("x").unwrap();
        assert!(file_exists(f.path()));
        assert_eq!(recursively_delete(f.path()).code(), Code::Ok);
        assert!(!file_exists(f.path()));
        assert!(dir_exists(temp.path()));
    }

    #[test]
    fn nested_tree() {
        let temp = assert_fs::TempDir::new().unwrap();
        let root = temp.child("root");
        root.child("a/b/c").create_dir_all().unwrap();
        root.child("a/one.txt").write_str("1").unwrap();
        root.child("a/b/two.txt").write_str("2").unwrap();
        root.child("a/b/c/three.txt").write_str("3").unwrap();
        root.child("empty").create_dir_all().unwrap();

        assert_eq!(recursively_delete(root.path()).code(), Code::Ok);
        assert!(!file_exists(root.path()));
        assert!(dir_exists(temp.path()));
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_not_followed() {
        let temp = assert_fs::TempDir::new().unwrap();
        let outside = temp.child("outside");
        outside.child("keep.txt").write_str("keep").unwrap();

        let root = temp.child("root");
        root.create_dir_all().unwrap();
        std::os::unix::fs::symlink(outside.path(), root.path().join("link")).unwrap();

        assert_eq!(recursively_delete(root.path()).code(), Code::Ok);
        assert!(!file_exists(root.path()));
        assert!(outside.child("keep.txt").path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_root_removes_only_the_link() {
        let temp = assert_fs::TempDir::new().unwrap();
        let real = temp.child("real");
        real.child("inner.txt").write_str("x").unwrap();
        let link = temp.child("link");
        std::os::unix::fs::symlink(real.path(), link.path()).unwrap();

        assert_eq!(recursively_delete(link.path()).code(), Code::Ok);
        assert!(std::fs::symlink_metadata(link.path()).is_err());
        assert!(real.child("inner.txt").path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_root_with_trailing_slash_keeps_target_contents() {
        let temp = assert_fs::TempDir::new().unwrap();
        let real = temp.child("real");
        real.child("keep.txt").write_str("keep").unwrap();
        real.child("sub").create_dir_all().unwrap();
        let link = temp.child("link");
        std::os::unix::fs::symlink(real.path(), link.path()).unwrap();

        for spelled in ["link/", "link/."] {
            if std::fs::symlink_metadata(link.path()).is_err() {
                std::os::unix::fs::symlink(real.path(), link.path()).unwrap();
            }
            let arg = temp.path().join(spelled);
            assert_eq!(recursively_delete(&arg).code(), Code::Ok, "{}", spelled);
            assert!(std::fs::symlink_metadata(link.path()).is_err(), "{}", spelled);
            assert!(real.child("keep.txt").path().exists(), "{}", spelled);
            assert!(real.child("sub").path().is_dir(), "{}", spelled);
        }
    }
}
