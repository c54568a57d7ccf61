//! Private per-application variable store for host applications.
//!
//! This crate keeps named string variables in memory and persists them to
//! `<base>/.{APP}/.{APP}.env`, one `key=value` pair per line. It never reads
//! or writes the process environment.
//!
//! ```no_run
//! use appenv::VariableStore;
//!
//! let mut store = VariableStore::new();
//! store.initialize("demo", None)?;
//! store.set_int("port", 8080);
//! store.save()?;
//!
//! let mut reloaded = VariableStore::new();
//! reloaded.load("demo", None)?;
//! assert_eq!(reloaded.get_value("port"), "8080");
//! # Ok::<(), appenv::StoreError>(())
//! ```

pub mod constants;
mod error;
mod format;
mod name;
mod options;
mod paths;
mod platform;
mod store;

pub use error::{Result, StoreError};
pub use name::AppName;
pub use options::StoreOptions;
pub use store::VariableStore;
