//! Store configuration.
//!
//! Responsibilities:
//! - Provide a builder-style `StoreOptions` for the few knobs a store has.
//!
//! Does NOT handle:
//! - Reading process environment variables (the store never does).
//!
//! Invariants:
//! - Defaults come from `constants.rs`.
//! - Builder methods override defaults; nothing else does.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_MAX_SCAN_DEPTH;

/// Options controlling where a store looks for its files.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    home_dir: Option<PathBuf>,
    max_scan_depth: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreOptions {
    pub fn new() -> Self {
        Self {
            home_dir: None,
            max_scan_depth: DEFAULT_MAX_SCAN_DEPTH,
        }
    }

    /// Use `home` instead of the user's home directory as the default base
    /// directory and as the root of the discovery scan.
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    /// Limit how deep the discovery scan descends below the home directory.
    pub fn with_max_scan_depth(mut self, depth: usize) -> Self {
        self.max_scan_depth = depth;
        self
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    pub fn max_scan_depth(&self) -> usize {
        self.max_scan_depth
    }
}
