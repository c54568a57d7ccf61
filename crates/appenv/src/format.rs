//! Line-oriented `key=value` codec for the persisted env file.
//!
//! Responsibilities:
//! - Write variables as one `key=value` line each.
//! - Parse lines back into key/value pairs, splitting on the first `=`.
//!
//! Does NOT handle:
//! - Opening, creating or locating files (see `store.rs` and `paths.rs`).
//! - Quoting or escaping; `=` in keys and newlines anywhere are not representable.
//!
//! Invariants:
//! - Entries with an empty value, or with a newline in key or value, are
//!   never written, so every written file parses back.
//! - Blank lines are ignored on read; any other line without `=` is rejected.
//! - A trailing `\r` is stripped so files written on Windows read back cleanly.
//! - Errors carry line numbers only, never line content.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::constants::KEY_VALUE_SEPARATOR;
use crate::error::{Result, StoreError};

/// Writes every entry with a non-empty value to `writer`.
///
/// Entries whose key or value contains a newline are skipped, since they
/// would split into a line without `=` and make the file unloadable.
///
/// Returns the number of lines written.
pub(crate) fn write_entries<'a, W, I>(writer: &mut W, entries: I) -> std::io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut written = 0;

    for (key, value) in entries {
        if value.is_empty() {
            continue;
        }
        if key.contains('\n') || value.contains('\n') {
            tracing::warn!(
                key = %key.escape_debug(),
                "Skipping variable containing a newline; it cannot be stored on one line"
            );
            continue;
        }
        if key.contains(KEY_VALUE_SEPARATOR) {
            tracing::warn!(
                key = %key,
                "Variable key contains '=' and will not read back under the same key"
            );
        }

        writeln!(writer, "{}{}{}", key, KEY_VALUE_SEPARATOR, value)?;
        written += 1;
    }

    Ok(written)
}

/// Parses every line of `reader` into key/value pairs in file order.
///
/// `path` is only used to label errors.
pub(crate) fn parse_entries<R: BufRead>(reader: R, path: &Path) -> Result<Vec<(String, String)>> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let line = line.strip_suffix('\r').unwrap_or(&line);

        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(KEY_VALUE_SEPARATOR)
            .ok_or_else(|| StoreError::MalformedLine {
                path: path.to_path_buf(),
                line: index + 1,
            })?;

        entries.push((key.to_string(), value.to_string()));
    }

    Ok(entries)
}
