//! Platform-specific handling of the application directory.
//!
//! On Unix-like systems the leading `.` already hides the directory, so
//! nothing is done. On Windows the hidden attribute is set explicitly.

use std::path::Path;

use crate::error::Result;

/// Marks `dir` as hidden where the platform has a hidden attribute.
///
/// # Errors
/// Returns [`StoreError::Hide`](crate::StoreError::Hide) if the platform call fails.
#[cfg(windows)]
pub(crate) fn mark_hidden(dir: &Path) -> Result<()> {
    use std::os::windows::ffi::OsStrExt;

    use crate::error::StoreError;
    use windows_sys::Win32::Storage::FileSystem::{
        FILE_ATTRIBUTE_HIDDEN, GetFileAttributesW, INVALID_FILE_ATTRIBUTES, SetFileAttributesW,
    };

    let wide: Vec<u16> = dir.as_os_str().encode_wide().chain(Some(0)).collect();

    // SAFETY: `wide` is a NUL-terminated UTF-16 buffer that outlives both calls.
    let current = unsafe { GetFileAttributesW(wide.as_ptr()) };
    if current == INVALID_FILE_ATTRIBUTES {
        return Err(StoreError::Hide {
            path: dir.to_path_buf(),
            source: std::io::Error::last_os_error(),
        });
    }

    // SAFETY: as above.
    let ok = unsafe { SetFileAttributesW(wide.as_ptr(), current | FILE_ATTRIBUTE_HIDDEN) };
    if ok == 0 {
        return Err(StoreError::Hide {
            path: dir.to_path_buf(),
            source: std::io::Error::last_os_error(),
        });
    }

    Ok(())
}

#[cfg(not(windows))]
pub(crate) fn mark_hidden(_dir: &Path) -> Result<()> {
    Ok(())
}
