//! Application name normalization.
//!
//! Responsibilities:
//! - Normalize caller-supplied application names to one canonical case.
//! - Derive the directory and file names the store uses on disk.
//!
//! Invariants:
//! - A normalized name is non-empty, uppercase, and a single path component.
//! - Every path built from an application name goes through [`AppName`], so
//!   `demo`, `Demo` and `DEMO` always resolve to the same location.

use std::fmt;

use crate::constants::ENV_FILE_EXTENSION;
use crate::error::{Result, StoreError};

/// A validated, uppercased application name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    /// Normalize `raw` into an `AppName`.
    ///
    /// The name is uppercased as given; whitespace is not trimmed.
    ///
    /// # Errors
    /// Returns [`StoreError::InvalidAppName`] if the name is empty, is `.` or `..`,
    /// or contains a path separator.
    pub fn new(raw: &str) -> Result<Self> {
        let invalid = |reason| StoreError::InvalidAppName {
            name: raw.to_string(),
            reason,
        };

        if raw.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if raw == "." || raw == ".." {
            return Err(invalid("name must not be a relative path component"));
        }
        if raw.contains(['/', '\\']) {
            return Err(invalid("name must not contain path separators"));
        }

        Ok(Self(raw.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the application directory: `.{APP}`.
    pub fn dir_name(&self) -> String {
        format!(".{}", self.0)
    }

    /// Name of the persisted file: `.{APP}.env`.
    pub fn file_name(&self) -> String {
        format!(".{}.{}", self.0, ENV_FILE_EXTENSION)
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
