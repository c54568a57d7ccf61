//! Centralized constants for the variable store.

/// Extension of the persisted file, giving `.{APP}.env`.
pub const ENV_FILE_EXTENSION: &str = "env";

/// Separator between key and value on each persisted line.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Default depth limit for the discovery scan below the home directory.
///
/// Depth 1 is the home directory's immediate children.
pub const DEFAULT_MAX_SCAN_DEPTH: usize = 6;
