//! Recent-folders cache
//!
//! A bounded, deduplicated, newest-first list of folder paths, persisted
//! through the [`KvStore`] port so it survives restarts. Storage problems
//! are never fatal: a missing or corrupt record degrades to an empty list
//! and a diagnostic, so the panel always has something valid to render.

pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use store::{FileStore, KvStore, MemoryStore};

/// Maximum number of entries kept in the recent-folders list.
pub const RECENT_LIMIT: usize = 20;

/// Storage key for the serialized recent-folders record.
pub const RECENT_KEY: &str = "recent_folders";

/// A single recently opened folder.
///
/// Serialized with the backend's field names (`lastAccessed` as an
/// ISO-8601 timestamp) so the stored record matches the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub path: String,
    #[serde(rename = "lastAccessed")]
    pub last_accessed: DateTime<Utc>,
}

/// Recent-folders cache over a key-value store.
///
/// Every mutation runs the full read-modify-write cycle against the
/// store: load the whole list, mutate, write the whole list back. Callers
/// on the UI thread therefore always observe a consistent snapshot.
pub struct RecentFolders<S: KvStore> {
    store: S,
}

impl<S: KvStore> RecentFolders<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted list.
    ///
    /// An absent key yields an empty list. A record that fails to parse
    /// is treated the same way, with a warning on the diagnostic channel.
    pub fn load(&self) -> Vec<RecentEntry> {
        let Some(raw) = self.store.get(RECENT_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("recent folders load failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Record that `path` was just opened and return the updated list.
    ///
    /// Dedup-then-prepend-then-truncate: any existing entry for the same
    /// path is removed, a fresh entry is prepended with the current time,
    /// and the list is truncated to [`RECENT_LIMIT`] before persisting.
    /// An empty path is a no-op.
    pub fn add(&self, path: &str) -> Vec<RecentEntry> {
        if path.is_empty() {
            return self.load();
        }

        let mut entries = self.load();
        entries.retain(|e| e.path != path);
        entries.insert(
            0,
            RecentEntry {
                path: path.to_string(),
                last_accessed: Utc::now(),
            },
        );
        entries.truncate(RECENT_LIMIT);

        self.persist(&entries);
        entries
    }

    /// Erase the persisted list.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(RECENT_KEY) {
            warn!("recent folders clear failed: {}", e);
        }
    }

    fn persist(&self, entries: &[RecentEntry]) {
        match serde_json::to_string(entries) {
            Ok(raw) => {
                if let Err(e) = self.store.set(RECENT_KEY, &raw) {
                    warn!("recent folders save failed: {}", e);
                }
            }
            Err(e) => warn!("recent folders save failed: {}", e),
        }
    }
}
