// tests/cache.rs
//
// LoadCache: hits while unchanged, reload on mtime change, explicit invalidation.
//
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use matchboard::cache::LoadCache;
use matchboard::data::Cell;
use matchboard::loader::LoadError;

fn tmp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("matchboard_cache_{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("mecze.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn set_mtime(path: &PathBuf, t: SystemTime) {
    File::options().write(true).open(path).unwrap().set_modified(t).unwrap();
}

#[test]
fn unchanged_file_is_served_from_cache() {
    let path = tmp_file("hit", "wynik\n1-0\n");
    let mut cache = LoadCache::new("-");

    let a = cache.get_or_load(&path).unwrap();
    let b = cache.get_or_load(&path).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);
}

#[test]
fn modified_file_is_reloaded() {
    let path = tmp_file("stale", "wynik\n1-0\n");
    let base = SystemTime::now() - Duration::from_secs(3600);
    set_mtime(&path, base);

    let mut cache = LoadCache::new("-");
    let a = cache.get_or_load(&path).unwrap();

    fs::write(&path, "wynik\n0-2\n").unwrap();
    set_mtime(&path, base + Duration::from_secs(60));

    let b = cache.get_or_load(&path).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(b.rows[0][0], Cell::Text("0-2".into()));
}

#[test]
fn invalidate_forces_a_fresh_load() {
    let path = tmp_file("invalidate", "wynik\n1-0\n");
    let mut cache = LoadCache::new("-");

    let a = cache.get_or_load(&path).unwrap();
    assert!(cache.invalidate(&path));
    assert!(!cache.invalidate(&path));
    let b = cache.get_or_load(&path).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(*a, *b);
}

#[test]
fn deleted_file_errors_and_drops_entry() {
    let path = tmp_file("deleted", "wynik\n1-0\n");
    let mut cache = LoadCache::new("-");
    cache.get_or_load(&path).unwrap();
    assert!(cache.contains(&path));

    fs::remove_file(&path).unwrap();
    let err = cache.get_or_load(&path).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
    assert!(!cache.contains(&path));
    assert!(cache.is_empty());
}

#[test]
fn clear_forgets_every_entry() {
    let a_path = tmp_file("clear_a", "wynik\n1-0\n");
    let b_path = tmp_file("clear_b", "wynik\n2-2\n");
    let mut cache = LoadCache::new("-");
    let a = cache.get_or_load(&a_path).unwrap();
    cache.get_or_load(&b_path).unwrap();
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
    assert!(!cache.contains(&a_path));

    let again = cache.get_or_load(&a_path).unwrap();
    assert!(!Arc::ptr_eq(&a, &again));
    assert_eq!(cache.len(), 1);
}

#[test]
fn placeholder_comes_from_the_cache_owner() {
    let path = tmp_file("placeholder", "przeciwnik,wynik\nLegia,\n");
    let mut cache = LoadCache::new("n/d");
    let ds = cache.get_or_load(&path).unwrap();
    assert_eq!(ds.rows[0][1], Cell::Text("n/d".into()));
}
