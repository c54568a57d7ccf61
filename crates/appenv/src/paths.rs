//! Location resolution for the application directory and env file.
//!
//! Responsibilities:
//! - Resolve the base directory (explicit, configured home, or user home).
//! - Validate caller-supplied directories.
//! - Discover an existing application directory below the home directory.
//!
//! Does NOT handle:
//! - Creating directories or files (see `store.rs`).
//! - Reading or writing the env file (see `format.rs`).
//!
//! Invariants:
//! - Discovery is deterministic: entries are visited depth-first in
//!   lexicographic file-name order and the first match wins.
//! - Symlinks are never followed during discovery, so cycles cannot occur.
//! - The conventional `<home>/.{APP}` location is checked before any scan.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, StoreError};
use crate::name::AppName;
use crate::options::StoreOptions;

/// Returns the directory used when the caller does not supply one.
pub(crate) fn home_dir(options: &StoreOptions) -> Result<PathBuf> {
    if let Some(home) = options.home_dir() {
        return Ok(home.to_path_buf());
    }

    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(StoreError::HomeDirUnavailable)
}

/// Ensures `dir` exists and is a directory.
pub(crate) fn validate_dir(dir: &Path) -> Result<()> {
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(StoreError::InvalidDirectory {
            path: dir.to_path_buf(),
        }),
    }
}

/// Finds the application directory below `root`.
///
/// Falls back to `root/.{APP}` when nothing matches, so a later open of the
/// env file reports the conventional location.
pub(crate) fn discover_storage_dir(root: &Path, app: &AppName, max_depth: usize) -> PathBuf {
    let conventional = root.join(app.dir_name());
    if conventional.join(app.file_name()).is_file() {
        tracing::debug!(path = %conventional.display(), "Using conventional application directory");
        return conventional;
    }

    match scan_for_storage_dir(root, app, max_depth) {
        Some(found) => {
            tracing::debug!(
                root = %root.display(),
                path = %found.display(),
                "Discovered application directory by scan"
            );
            found
        }
        None => {
            tracing::debug!(
                root = %root.display(),
                app = %app,
                "No application directory found by scan, using conventional location"
            );
            conventional
        }
    }
}

/// Walks `root` looking for a directory whose name contains the application
/// name and which holds the application's env file.
fn scan_for_storage_dir(root: &Path, app: &AppName, max_depth: usize) -> Option<PathBuf> {
    let file_name = app.file_name();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping unreadable entry during scan");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }
        if !entry.file_name().to_string_lossy().contains(app.as_str()) {
            continue;
        }

        let candidate = entry.path().join(&file_name);
        if candidate.is_file() {
            return Some(entry.into_path());
        }
    }

    None
}
