//! End-to-end tests for the variable store through its public API.
//!
//! Every test points the store at a `tempfile` home directory, so the real
//! home directory is never touched.

use std::fs;
use std::path::Path;

use appenv::{StoreError, StoreOptions, VariableStore};
use tempfile::TempDir;

fn store_in(home: &Path) -> VariableStore {
    VariableStore::with_options(StoreOptions::new().with_home_dir(home))
}

fn sorted_lines(path: &Path) -> Vec<String> {
    let mut lines: Vec<String> = fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}

/// initialize, set, save, then load into a fresh store.
#[test]
fn test_save_and_load_round_trip() {
    let home = TempDir::new().unwrap();

    let mut store = store_in(home.path());
    store.initialize("demo", None).unwrap();
    store.set_string("a", "1");
    store.set_string("b", "2");
    store.set_int("port", 8080);
    store.set_float("ratio", 0.1);
    store.save().unwrap();

    let mut reloaded = store_in(home.path());
    reloaded.load("demo", None).unwrap();

    assert_eq!(reloaded.get_value("a"), "1");
    assert_eq!(reloaded.get_value("b"), "2");
    assert_eq!(reloaded.get_value("port"), "8080");
    assert_eq!(reloaded.get_value("ratio"), "0.1");
    assert_eq!(reloaded.len(), 4);
}

#[test]
fn test_app_name_casing_is_irrelevant() {
    let home = TempDir::new().unwrap();

    let mut store = store_in(home.path());
    store.initialize("MyApp", None).unwrap();
    store.set_string("theme", "dark");
    store.save().unwrap();

    let mut reloaded = store_in(home.path());
    reloaded.load("myapp", None).unwrap();
    assert_eq!(reloaded.get_value("theme"), "dark");
    assert!(home.path().join(".MYAPP").join(".MYAPP.env").is_file());
}

#[test]
fn test_round_trip_with_explicit_directory() {
    let home = TempDir::new().unwrap();
    let base = TempDir::new().unwrap();

    let mut store = store_in(home.path());
    store.initialize("demo", Some(base.path())).unwrap();
    store.set_string("endpoint", "https://example.com/?a=b");
    store.save().unwrap();

    let storage_dir = base.path().join(".DEMO");
    let mut reloaded = store_in(home.path());
    reloaded.load("demo", Some(storage_dir.as_path())).unwrap();
    assert_eq!(reloaded.get_value("endpoint"), "https://example.com/?a=b");
}

#[test]
fn test_saved_file_format() {
    let home = TempDir::new().unwrap();

    let mut store = store_in(home.path());
    store.initialize("demo", None).unwrap();
    store.set_string("b", "2");
    store.set_string("a", "1");
    store.set_string("unset", "");
    store.save().unwrap();

    let path = home.path().join(".DEMO").join(".DEMO.env");
    assert_eq!(sorted_lines(&path), vec!["a=1", "b=2"]);
}

#[test]
fn test_empty_values_do_not_survive_reload() {
    let home = TempDir::new().unwrap();

    let mut store = store_in(home.path());
    store.initialize("demo", None).unwrap();
    store.set_string("c", "");
    store.save().unwrap();

    let mut reloaded = store_in(home.path());
    reloaded.load("demo", None).unwrap();
    assert!(!reloaded.contains("c"));
    assert_eq!(reloaded.get_value("c"), "");
}

#[test]
fn test_save_without_location_fails() {
    let store = VariableStore::new();
    assert!(matches!(store.save(), Err(StoreError::NotInitialized)));
}

#[test]
fn test_load_after_clear_restores_saved_values() {
    let home = TempDir::new().unwrap();

    let mut store = store_in(home.path());
    store.initialize("demo", None).unwrap();
    store.set_string("a", "1");
    store.save().unwrap();

    store.clear();
    assert_eq!(store.get_value("a"), "");

    store.load("demo", None).unwrap();
    assert_eq!(store.get_value("a"), "1");
}

#[test]
fn test_load_then_save_writes_back_to_discovered_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("apps").join("DEMO");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(".DEMO.env");
    fs::write(&path, "a=1\n").unwrap();

    let mut store = store_in(home.path());
    store.load("demo", None).unwrap();
    store.set_string("b", "2");
    store.save().unwrap();

    assert_eq!(store.storage_path(), Some(path.as_path()));
    assert_eq!(sorted_lines(&path), vec!["a=1", "b=2"]);
}

#[test]
fn test_load_reads_crlf_files() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".DEMO");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join(".DEMO.env"), "a=1\r\nb=2\r\n").unwrap();

    let mut store = store_in(home.path());
    store.load("demo", None).unwrap();
    assert_eq!(store.get_value("a"), "1");
    assert_eq!(store.get_value("b"), "2");
}

#[test]
fn test_invalid_app_name_is_rejected() {
    let home = TempDir::new().unwrap();
    let mut store = store_in(home.path());

    assert!(matches!(
        store.initialize("", None),
        Err(StoreError::InvalidAppName { .. })
    ));
    assert!(matches!(
        store.load("../escape", None),
        Err(StoreError::InvalidAppName { .. })
    ));
    assert_eq!(fs::read_dir(home.path()).unwrap().count(), 0);
}

#[test]
fn test_newline_value_does_not_make_store_unloadable() {
    let home = TempDir::new().unwrap();

    let mut store = store_in(home.path());
    store.initialize("demo", None).unwrap();
    store.set_string("good", "1");
    store.set_string("motd", "hello\nworld");
    store.save().unwrap();

    let mut reloaded = store_in(home.path());
    reloaded.load("demo", None).unwrap();
    assert_eq!(reloaded.get("good"), Some("1"));
    assert_eq!(reloaded.get("motd"), None);
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_save_reports_write_error_when_file_cannot_be_created() {
    let home = TempDir::new().unwrap();
    let mut store = store_in(home.path());
    store.initialize("demo", None).unwrap();
    store.set_string("a", "1");

    // A directory in place of the env file makes creation fail for any user.
    let path = store.storage_path().unwrap().to_path_buf();
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    match store.save() {
        Err(StoreError::Write { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Write error, got {:?}", other),
    }
}
