//! Error types for the variable store.
//!
//! Responsibilities:
//! - Define one error variant per failure the store can report.
//! - Carry the filesystem path involved in every I/O failure.
//!
//! Does NOT handle:
//! - Retrying or recovering from failures (callers decide).
//!
//! Invariants:
//! - Errors NEVER include variable values or raw file lines, only keys,
//!   paths and line numbers.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`VariableStore`](crate::VariableStore) operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The application name is empty or cannot be used as a path component.
    #[error("Invalid application name {name:?}: {reason}")]
    InvalidAppName { name: String, reason: &'static str },

    #[error("Unable to determine the user's home directory")]
    HomeDirUnavailable,

    /// A caller-supplied directory does not exist or is not a directory.
    #[error("The provided directory is not valid: {path}")]
    InvalidDirectory { path: PathBuf },

    #[error("Failed to create the application directory at {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create the env file at {path}")]
    FileProvision {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to mark {path} as hidden")]
    Hide {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open the env file at {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read the env file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank line had no `=` separator.
    ///
    /// SAFETY: only the line number is reported, never the line content.
    #[error("Malformed line {line} in env file at {path}: expected key=value")]
    MalformedLine { path: PathBuf, line: usize },

    /// Save was attempted before `initialize` or `load` established a location.
    #[error("Cannot save because the store has no directory or file path; call initialize or load first")]
    NotInitialized,

    #[error("Failed to write to the env file at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
