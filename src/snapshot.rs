//! Countdown snapshot persistence
//!
//! When the host signals that it is about to suspend, the engine writes a
//! `{captured_at, duration, remaining}` triple to a key-value snapshot store.
//! On resumption the snapshot is read back exactly once and reconciled
//! against wall-clock time. Absent or partially written snapshots are an
//! expected steady-state condition (first launch, cleared storage) and are
//! never surfaced as errors.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Store key for the wall-clock capture time, in unix seconds.
pub const CAPTURED_AT_KEY: &str = "captured_at";
/// Store key for the countdown duration at capture time.
pub const DURATION_KEY: &str = "duration";
/// Store key for the remaining seconds at capture time.
pub const REMAINING_KEY: &str = "remaining";

/// Key-value store collaborator the engine borrows for snapshot persistence.
///
/// Implementations must tolerate the absence of any key. The store is
/// assumed synchronous and fast (a local key-value write); if it is
/// unavailable the engine degrades to a no-op rather than failing the
/// countdown.
pub trait SnapshotStore: Send {
    fn put(&mut self, key: &str, value: i64);
    fn get(&self, key: &str) -> Option<i64>;
    fn remove(&mut self, key: &str);
}

/// A persisted countdown position, reconciled on resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Wall-clock time the snapshot was taken, in unix seconds
    pub captured_at: i64,
    /// Countdown duration at capture time
    pub duration: u32,
    /// Remaining seconds at capture time
    pub remaining: u32,
}

impl Snapshot {
    /// Write the snapshot fields under their well-known keys.
    pub fn write_to(&self, store: &mut dyn SnapshotStore) {
        store.put(CAPTURED_AT_KEY, self.captured_at);
        store.put(DURATION_KEY, i64::from(self.duration));
        store.put(REMAINING_KEY, i64::from(self.remaining));
    }

    /// Read a snapshot back from the store.
    ///
    /// Yields nothing when any key is missing or holds a value that cannot
    /// be a second count (e.g. negative), leaving the caller to carry on
    /// without one.
    pub fn read_from(store: &dyn SnapshotStore) -> Option<Self> {
        let captured_at = store.get(CAPTURED_AT_KEY)?;
        let duration = u32::try_from(store.get(DURATION_KEY)?).ok()?;
        let remaining = u32::try_from(store.get(REMAINING_KEY)?).ok()?;
        Some(Self {
            captured_at,
            duration,
            remaining,
        })
    }

    /// Remove the snapshot keys, invalidating the snapshot.
    pub fn clear(store: &mut dyn SnapshotStore) {
        store.remove(CAPTURED_AT_KEY);
        store.remove(DURATION_KEY);
        store.remove(REMAINING_KEY);
    }
}

/// In-memory snapshot store.
///
/// Clones share the same entries, so a test or host can keep a handle for
/// inspection after moving a clone into the engine.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    entries: Arc<Mutex<HashMap<String, i64>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn put(&mut self, key: &str, value: i64) {
        self.entries.lock().insert(key.to_string(), value);
    }

    fn get(&self, key: &str) -> Option<i64> {
        self.entries.lock().get(key).copied()
    }

    fn remove(&mut self, key: &str) {
        self.entries.lock().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemorySnapshotStore::new();
        store.put("a", 7);

        assert_eq!(store.get("a"), Some(7));

        store.remove("a");
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn memory_store_clones_share_entries() {
        let mut store = MemorySnapshotStore::new();
        let observer = store.clone();
        store.put("a", 7);

        assert_eq!(observer.get("a"), Some(7));
    }

    #[test]
    fn snapshot_round_trips_through_a_store() {
        let mut store = MemorySnapshotStore::new();
        let snapshot = Snapshot {
            captured_at: 1_700_000_000,
            duration: 15,
            remaining: 10,
        };
        snapshot.write_to(&mut store);

        assert_eq!(Snapshot::read_from(&store), Some(snapshot));
    }

    #[test]
    fn partial_snapshot_reads_as_absent() {
        let mut store = MemorySnapshotStore::new();
        store.put(CAPTURED_AT_KEY, 1_700_000_000);
        store.put(DURATION_KEY, 15);

        assert_eq!(Snapshot::read_from(&store), None);
    }

    #[test]
    fn negative_counts_read_as_absent() {
        let mut store = MemorySnapshotStore::new();
        store.put(CAPTURED_AT_KEY, 1_700_000_000);
        store.put(DURATION_KEY, 15);
        store.put(REMAINING_KEY, -3);

        assert_eq!(Snapshot::read_from(&store), None);
    }

    #[test]
    fn clear_invalidates_the_snapshot() {
        let mut store = MemorySnapshotStore::new();
        Snapshot {
            captured_at: 1,
            duration: 2,
            remaining: 1,
        }
        .write_to(&mut store);
        Snapshot::clear(&mut store);

        assert_eq!(Snapshot::read_from(&store), None);
    }
}
