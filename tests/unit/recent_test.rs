//! Unit tests for the recent-folders cache against the file-backed store

use boardctl::{FileStore, KvStore, MemoryStore, RecentFolders, RECENT_LIMIT};
use tempfile::TempDir;

fn file_cache() -> (TempDir, RecentFolders<FileStore>) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().join("state"));
    (temp_dir, RecentFolders::new(store))
}

#[test]
fn recent_list_survives_a_reload() {
    let temp_dir = TempDir::new().unwrap();
    let state_dir = temp_dir.path().join("state");

    {
        let recent = RecentFolders::new(FileStore::new(state_dir.clone()));
        recent.add("/projects/alpha");
        recent.add("/projects/beta");
    }

    // A fresh cache over the same directory sees the persisted state
    let recent = RecentFolders::new(FileStore::new(state_dir));
    let entries = recent.load();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].path, "/projects/beta");
    assert_eq!(entries[1].path, "/projects/alpha");
}

#[test]
fn timestamps_round_trip_to_second_precision() {
    let (_temp_dir, recent) = file_cache();
    let written = recent.add("/projects/alpha");
    let reloaded = recent.load();

    assert_eq!(
        written[0].last_accessed.timestamp(),
        reloaded[0].last_accessed.timestamp()
    );
}

#[test]
fn dedup_holds_across_reloads() {
    let (_temp_dir, recent) = file_cache();
    recent.add("/a");
    recent.add("/b");
    recent.add("/a");

    let paths: Vec<String> = recent.load().into_iter().map(|e| e.path).collect();
    assert_eq!(paths, vec!["/a".to_string(), "/b".to_string()]);
}

#[test]
fn bound_holds_across_many_adds() {
    let (_temp_dir, recent) = file_cache();
    for i in 0..40 {
        recent.add(&format!("/folder-{}", i));
    }
    assert_eq!(recent.load().len(), RECENT_LIMIT);
}

#[test]
fn clear_removes_the_backing_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().join("state"));
    let recent = RecentFolders::new(store);

    recent.add("/a");
    recent.clear();

    let store = FileStore::new(temp_dir.path().join("state"));
    assert!(store.get("recent_folders").is_none());
}

#[test]
fn corrupt_file_is_treated_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::new(temp_dir.path().join("state"));
    store.set("recent_folders", "{{{ definitely not json").unwrap();

    let recent = RecentFolders::new(store);
    assert!(recent.load().is_empty());
}

#[test]
fn memory_store_behaves_like_the_file_store() {
    let recent = RecentFolders::new(MemoryStore::new());
    recent.add("/a");
    recent.add("/b");
    recent.add("/a");
    let paths: Vec<String> = recent.load().into_iter().map(|e| e.path).collect();
    assert_eq!(paths, vec!["/a".to_string(), "/b".to_string()]);
}
