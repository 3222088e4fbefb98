//! Windows implementations of platform helpers (wide-character Win32 API).
//!
//! Notes:
//! - Paths are transcoded to NUL-terminated UTF-16 on every call.
//! - GetFileAttributesW reports the reparse point itself, not its target; a
//!   following query opens the path instead so dangling links fail like stat(2).
//! - Directory symlinks and junctions must be removed with RemoveDirectoryW.

use std::io;
use std::mem::MaybeUninit;
use std::path::Path;
use std::ptr;

use windows_sys::Win32::Foundation::{CloseHandle, INVALID_HANDLE_VALUE};
use windows_sys::Win32::Storage::FileSystem::{
    BY_HANDLE_FILE_INFORMATION, CreateDirectoryW, CreateFileW, DeleteFileW, FILE_ATTRIBUTE_DIRECTORY,
    FILE_ATTRIBUTE_REPARSE_POINT, FILE_FLAG_BACKUP_SEMANTICS, FILE_SHARE_DELETE, FILE_SHARE_READ,
    FILE_SHARE_WRITE, GetFileAttributesW, GetFileInformationByHandle, INVALID_FILE_ATTRIBUTES,
    OPEN_EXISTING, RemoveDirectoryW,
};

use super::wide::path_to_wide;
use super::EntryKind;

pub const FALLBACK_TEMP_DIR: &str = r"C:\Windows\Temp";

pub const TEMP_DIR_VARS: &[&str] = &["TMPDIR", "TMP", "TEMP"];

fn attributes(path: &Path) -> io::Result<u32> {
    let wide = path_to_wide(path)?;
    let attrs = unsafe { GetFileAttributesW(wide.as_ptr()) };
    if attrs == INVALID_FILE_ATTRIBUTES {
        return Err(io::Error::last_os_error());
    }
    Ok(attrs)
}

/// Attributes of whatever `path` finally resolves to. Opening without
/// FILE_FLAG_OPEN_REPARSE_POINT makes the OS traverse links, so a dangling
/// link is NotFound. BACKUP_SEMANTICS is required to open directories.
fn resolved_attributes(path: &Path) -> io::Result<u32> {
    let wide = path_to_wide(path)?;
    let handle = unsafe {
        CreateFileW(
            wide.as_ptr(),
            0, // query only
            FILE_SHARE_READ | FILE_SHARE_WRITE | FILE_SHARE_DELETE,
            ptr::null(),
            OPEN_EXISTING,
            FILE_FLAG_BACKUP_SEMANTICS,
            ptr::null_mut(),
        )
    };
    if handle == INVALID_HANDLE_VALUE {
        return Err(io::Error::last_os_error());
    }
    let mut info: MaybeUninit<BY_HANDLE_FILE_INFORMATION> = MaybeUninit::uninit();
    let ok = unsafe { GetFileInformationByHandle(handle, info.as_mut_ptr()) };
    let res = if ok == 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(unsafe { info.assume_init() }.dwFileAttributes)
    };
    unsafe { CloseHandle(handle) };
    res
}

pub fn entry_kind(path: &Path, follow: bool) -> io::Result<EntryKind> {
    let attrs = if follow {
        resolved_attributes(path)?
    } else {
        let attrs = attributes(path)?;
        if attrs & FILE_ATTRIBUTE_REPARSE_POINT != 0 {
            return Ok(EntryKind::Symlink);
        }
        attrs
    };
    if attrs & FILE_ATTRIBUTE_DIRECTORY != 0 {
        Ok(EntryKind::Directory)
    } else {
        Ok(EntryKind::File)
    }
}

pub fn make_dir(path: &Path) -> io::Result<()> {
    let wide = path_to_wide(path)?;
    if unsafe { CreateDirectoryW(wide.as_ptr(), ptr::null()) } == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

pub fn remove_dir(path: &Path) -> io::Result<()> {
    let wide = path_to_wide(path)?;
    if unsafe { RemoveDirectoryW(wide.as_ptr()) } == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Remove a file or a link. Directory links fail DeleteFileW and are retried
/// with RemoveDirectoryW, which removes the link and leaves the target alone.
pub fn remove_file(path: &Path) -> io::Result<()> {
    let wide = path_to_wide(path)?;
    if unsafe { DeleteFileW(wide.as_ptr()) } != 0 {
        return Ok(());
    }
    let err = io::Error::last_os_error();
    match attributes(path) {
        Ok(attrs) if attrs & FILE_ATTRIBUTE_DIRECTORY != 0 => remove_dir(path),
        _ => Err(err),
    }
}
