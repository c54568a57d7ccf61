//! The variable store: in-memory variables plus their on-disk location.
//!
//! Responsibilities:
//! - Hold variables as strings, converting typed inputs to canonical form.
//! - Provision the application directory and empty env file (`initialize`).
//! - Persist variables to the env file (`save`) and read them back (`load`).
//!
//! Does NOT handle:
//! - Process environment variables (never read or written).
//! - Concurrent access from several threads or processes.
//! - Crash-safe writes; `save` truncates and rewrites in place.
//!
//! Invariants:
//! - `save` requires a location established by `initialize` or `load`.
//! - A failed `initialize` or `load` leaves both the variables and the
//!   previous location untouched.
//! - Variables are kept in key order, so `save` output is stable.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::format::{parse_entries, write_entries};
use crate::name::AppName;
use crate::options::StoreOptions;
use crate::paths::{discover_storage_dir, home_dir, validate_dir};
use crate::platform::mark_hidden;

/// Where a store's file lives on disk.
#[derive(Debug, Clone)]
struct Location {
    app: AppName,
    dir: PathBuf,
    path: PathBuf,
}

/// A private, per-application store of string variables.
///
/// Values are always held as strings. An empty value is treated as unset
/// when saving.
#[derive(Clone, Default)]
pub struct VariableStore {
    options: StoreOptions,
    location: Option<Location>,
    variables: BTreeMap<String, String>,
}

impl fmt::Debug for VariableStore {
    // Values may be secrets; only keys are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableStore")
            .field("app_name", &self.app_name())
            .field("storage_path", &self.storage_path())
            .field("keys", &self.variables.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl VariableStore {
    /// Creates an empty store with no location.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Creates an empty store with no location, using `options` for path resolution.
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            options,
            location: None,
            variables: BTreeMap::new(),
        }
    }

    /// Creates `<base>/.{APP}/` and an empty `.{APP}.env` inside it.
    ///
    /// `base` is `directory` when given, otherwise the home directory. The
    /// application directory must not exist yet, so an existing store is never
    /// truncated. In-memory variables are kept.
    ///
    /// # Errors
    /// - [`StoreError::InvalidAppName`] for an unusable `app_name`.
    /// - [`StoreError::InvalidDirectory`] if `directory` is not an existing directory.
    /// - [`StoreError::HomeDirUnavailable`] if no home directory can be determined.
    /// - [`StoreError::DirectoryCreation`] if the application directory cannot be created.
    /// - [`StoreError::Hide`] if the platform fails to mark it hidden.
    /// - [`StoreError::FileProvision`] if the env file cannot be created.
    pub fn initialize(&mut self, app_name: &str, directory: Option<&Path>) -> Result<()> {
        let app = AppName::new(app_name)?;
        let base = self.base_dir(directory)?;

        let dir = base.join(app.dir_name());
        fs::create_dir(&dir).map_err(|source| StoreError::DirectoryCreation {
            path: dir.clone(),
            source,
        })?;
        mark_hidden(&dir)?;

        let path = dir.join(app.file_name());
        File::create(&path).map_err(|source| StoreError::FileProvision {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(
            app = %app,
            path = %path.display(),
            "Initialized application store"
        );

        self.location = Some(Location { app, dir, path });
        Ok(())
    }

    /// Reads `.{APP}.env` and merges its entries over the in-memory variables.
    ///
    /// With `directory`, the file is read from that directory directly. Without
    /// it, the application directory is discovered below the home directory:
    /// `<home>/.{APP}` first, then a depth-first scan in file-name order for the
    /// first directory whose name contains `APP` and that holds the env file.
    ///
    /// # Errors
    /// - [`StoreError::InvalidAppName`] for an unusable `app_name`.
    /// - [`StoreError::InvalidDirectory`] if `directory` is not an existing directory.
    /// - [`StoreError::HomeDirUnavailable`] if no home directory can be determined.
    /// - [`StoreError::FileOpen`] if the env file cannot be opened.
    /// - [`StoreError::Read`] if the file cannot be read as UTF-8 text.
    /// - [`StoreError::MalformedLine`] if a non-blank line has no `=`.
    pub fn load(&mut self, app_name: &str, directory: Option<&Path>) -> Result<()> {
        let app = AppName::new(app_name)?;

        let dir = match directory {
            Some(dir) => {
                validate_dir(dir)?;
                dir.to_path_buf()
            }
            None => {
                let home = home_dir(&self.options)?;
                discover_storage_dir(&home, &app, self.options.max_scan_depth())
            }
        };

        let path = dir.join(app.file_name());
        let file = File::open(&path).map_err(|source| StoreError::FileOpen {
            path: path.clone(),
            source,
        })?;
        let entries = parse_entries(BufReader::new(file), &path)?;

        tracing::debug!(
            app = %app,
            path = %path.display(),
            entries = entries.len(),
            "Loaded application store"
        );

        self.variables.extend(entries);
        self.location = Some(Location { app, dir, path });
        Ok(())
    }

    /// Truncates the env file and writes every variable with a non-empty value.
    ///
    /// # Errors
    /// - [`StoreError::NotInitialized`] if no location has been established.
    /// - [`StoreError::Write`] if the file cannot be opened or written. The
    ///   file may be left partially written.
    pub fn save(&self) -> Result<()> {
        let location = self.location.as_ref().ok_or(StoreError::NotInitialized)?;
        let path = &location.path;
        let write_error = |source| StoreError::Write {
            path: path.clone(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        let written = write_entries(&mut writer, self.iter()).map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        tracing::debug!(
            path = %path.display(),
            entries = written,
            skipped = self.variables.len() - written,
            "Saved application store"
        );

        Ok(())
    }

    /// Stores `value` verbatim under `key`.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Stores the base-10 form of `value` under `key`.
    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.variables.insert(key.into(), value.to_string());
    }

    /// Stores the shortest decimal form of `value` that parses back to the
    /// same `f64`. Exponent notation is never used.
    pub fn set_float(&mut self, key: impl Into<String>, value: f64) {
        self.variables.insert(key.into(), value.to_string());
    }

    /// Returns the value for `key`, or `""` when absent.
    ///
    /// An absent key and a key set to `""` look the same here; use
    /// [`VariableStore::get`] to tell them apart.
    pub fn get_value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    /// Removes `key` from memory. The file changes on the next `save`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.variables.remove(key)
    }

    /// Drops all in-memory variables; the location is kept.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// The normalized application name, once a location is established.
    pub fn app_name(&self) -> Option<&str> {
        self.location.as_ref().map(|loc| loc.app.as_str())
    }

    pub fn storage_dir(&self) -> Option<&Path> {
        self.location.as_ref().map(|loc| loc.dir.as_path())
    }

    pub fn storage_path(&self) -> Option<&Path> {
        self.location.as_ref().map(|loc| loc.path.as_path())
    }

    fn base_dir(&self, directory: Option<&Path>) -> Result<PathBuf> {
        match directory {
            Some(dir) => {
                validate_dir(dir)?;
                Ok(dir.to_path_buf())
            }
            None => home_dir(&self.options),
        }
    }
}
