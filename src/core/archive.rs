//! History of completed matches, persisted as one JSON array under a single key.
//!
//! Every mutation is a read-modify-write of the whole collection. There is no
//! locking; one active session per store is assumed.

use tracing::{info, warn};

use crate::config::ArchiveConfig;
use crate::constants::SAVED_MATCHES_KEY;
use crate::core::storage::KeyValueStore;
use crate::error::StorageError;
use crate::state::{aggregate, CategoryRegistry, Marker, MatchSetup, SavedMatch};

pub struct MatchArchive<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> MatchArchive<S> {
    /// Archive under the default `savedMatches` key.
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: SAVED_MATCHES_KEY.to_string(),
        }
    }

    pub fn with_config(store: S, config: &ArchiveConfig) -> Self {
        Self {
            store,
            key: config.storage_key.clone(),
        }
    }

    /// Save a completed match and return the stored record.
    ///
    /// Stats are computed here, from the markers and registry as they are now.
    pub fn append(
        &mut self,
        setup: MatchSetup,
        markers: &[Marker],
        registry: &CategoryRegistry,
    ) -> Result<SavedMatch, StorageError> {
        let stats = aggregate(markers, registry);
        let saved = SavedMatch::new(setup, markers, stats);

        let mut matches = self.load_for_update()?;
        matches.push(saved.clone());
        self.save_all(&matches)?;

        info!(match_id = %saved.id, total = matches.len(), "Saved match");
        Ok(saved)
    }

    /// All saved matches, oldest first.
    ///
    /// Missing or unreadable data is treated as an empty history.
    pub fn load_all(&self) -> Vec<SavedMatch> {
        match self.load_for_update() {
            Ok(matches) => matches,
            Err(err) => {
                warn!(key = %self.key, error = %err, "Failed to read saved matches");
                Vec::new()
            }
        }
    }

    /// Remove the match at `index` and return it.
    ///
    /// An out-of-range index leaves storage untouched and returns `Ok(None)`.
    pub fn delete_at(&mut self, index: usize) -> Result<Option<SavedMatch>, StorageError> {
        let mut matches = self.load_for_update()?;
        if index >= matches.len() {
            warn!(index, total = matches.len(), "No saved match at index");
            return Ok(None);
        }
        let removed = matches.remove(index);
        self.save_all(&matches)?;

        info!(match_id = %removed.id, total = matches.len(), "Deleted saved match");
        Ok(Some(removed))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current history for a read-modify-write.
    ///
    /// Read failures are returned so a write never replaces history it could
    /// not see. Missing or corrupt data still counts as empty.
    fn load_for_update(&self) -> Result<Vec<SavedMatch>, StorageError> {
        let Some(bytes) = self.store.read(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_slice(&bytes) {
            Ok(matches) => Ok(matches),
            Err(err) => {
                warn!(key = %self.key, error = %err, "Saved matches are corrupt, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&mut self, matches: &[SavedMatch]) -> Result<(), StorageError> {
        let json = serde_json::to_vec(matches)?;
        self.store.write(&self.key, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{FileStore, MemoryStore};
    use crate::state::{Color, MarkerStore, NormalizedPoint, PitchType};
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;
    use std::io;
    use tempfile::tempdir;

    /// Memory store whose reads can be switched to fail.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryStore,
        fail_reads: Cell<bool>,
    }

    impl KeyValueStore for FlakyStore {
        fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
            if self.fail_reads.get() {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
            }
            self.inner.read(key)
        }

        fn write(&mut self, key: &str, bytes: &[u8]) -> io::Result<()> {
            self.inner.write(key, bytes)
        }
    }

    fn setup(team_one: &str) -> MatchSetup {
        MatchSetup::new(
            team_one,
            "Mayo",
            Utc.with_ymd_and_hms(2024, 3, 1, 14, 0, 0).unwrap(),
            PitchType::Gaa,
        )
    }

    fn markers() -> Vec<Marker> {
        vec![
            Marker::new(NormalizedPoint::new(0.1, 0.1), Color::RED, "14"),
            Marker::new(NormalizedPoint::new(0.5, 0.5), Color::BLUE, "8"),
            Marker::new(NormalizedPoint::new(0.9, 0.9), Color::RED, "15"),
        ]
    }

    fn archive_with(count: usize) -> MatchArchive<MemoryStore> {
        let mut archive = MatchArchive::new(MemoryStore::new());
        let registry = CategoryRegistry::with_defaults();
        for i in 0..count {
            archive
                .append(setup(&format!("Team {}", i)), &markers(), &registry)
                .unwrap();
        }
        archive
    }

    #[test]
    fn test_empty_store_loads_nothing() {
        let archive = MatchArchive::new(MemoryStore::new());
        assert!(archive.load_all().is_empty());
    }

    #[test]
    fn test_corrupt_store_loads_nothing() {
        let mut store = MemoryStore::new();
        store.insert_raw(SAVED_MATCHES_KEY, "{ not json");
        let archive = MatchArchive::new(store);
        assert!(archive.load_all().is_empty());
    }

    #[test]
    fn test_append_then_load() {
        let mut archive = archive_with(1);
        let registry = CategoryRegistry::with_defaults();
        let mut directional = markers();
        directional[1].set_direction(NormalizedPoint::new(0.7, 0.2));

        let saved = archive.append(setup("Galway"), &directional, &registry).unwrap();
        assert_eq!(saved.stats.get("Shot"), 2);
        assert_eq!(saved.stats.get("Pass"), 1);

        let loaded = archive.load_all();
        assert_eq!(loaded.len(), 2);
        let last = loaded.last().unwrap();
        assert_eq!(last, &saved);
        assert_eq!(last.setup, setup("Galway"));
        assert_eq!(last.markers.len(), 3);

        let restored = last.display_markers();
        for (original, restored) in directional.iter().zip(&restored) {
            assert!(original.color.same_as(&restored.color));
            assert_eq!(original.end_point(), restored.end_point());
        }
    }

    #[test]
    fn test_saved_match_is_independent_of_live_markers() {
        let mut archive = MatchArchive::new(MemoryStore::new());
        let registry = CategoryRegistry::with_defaults();
        let mut live = markers();
        archive.append(setup("Cork"), &live, &registry).unwrap();

        live.pop();
        live[0].label = "99".to_string();

        let loaded = archive.load_all();
        assert_eq!(loaded[0].markers.len(), 3);
        assert_eq!(loaded[0].markers[0].number, "14");
    }

    #[test]
    fn test_delete_at_removes_only_that_record() {
        let mut archive = archive_with(3);
        let before = archive.load_all();

        let removed = archive.delete_at(1).unwrap().unwrap();
        assert_eq!(removed, before[1]);

        let after = archive.load_all();
        assert_eq!(after.len(), 2);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
    }

    #[test]
    fn test_delete_at_out_of_range() {
        let mut archive = archive_with(2);
        assert!(archive.delete_at(5).unwrap().is_none());
        assert_eq!(archive.load_all().len(), 2);
    }

    #[test]
    fn test_custom_storage_key() {
        let config = ArchiveConfig {
            storage_key: "testMatches".to_string(),
            ..Default::default()
        };
        let mut archive = MatchArchive::with_config(MemoryStore::new(), &config);
        archive
            .append(setup("Clare"), &markers(), &CategoryRegistry::with_defaults())
            .unwrap();
        assert!(archive.store().read("testMatches").unwrap().is_some());
        assert!(archive.store().read(SAVED_MATCHES_KEY).unwrap().is_none());
    }

    #[test]
    fn test_file_backed_archive_survives_reopen() {
        let dir = tempdir().unwrap();
        let registry = CategoryRegistry::with_defaults();
        let saved = {
            let mut archive = MatchArchive::new(FileStore::new(dir.path()));
            archive.append(setup("Tyrone"), &markers(), &registry).unwrap()
        };

        let reopened = MatchArchive::new(FileStore::new(dir.path()));
        assert_eq!(reopened.load_all(), vec![saved]);
    }

    #[test]
    fn test_read_error_does_not_overwrite_history() {
        let mut archive = MatchArchive::new(FlakyStore::default());
        let registry = CategoryRegistry::with_defaults();
        for team in ["Kerry", "Cork", "Clare"] {
            archive.append(setup(team), &markers(), &registry).unwrap();
        }

        archive.store().fail_reads.set(true);
        let result = archive.append(setup("Galway"), &markers(), &registry);
        assert!(matches!(result, Err(StorageError::Io(_))));
        assert!(matches!(archive.delete_at(0), Err(StorageError::Io(_))));
        assert!(archive.load_all().is_empty());

        archive.store().fail_reads.set(false);
        let loaded = archive.load_all();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].setup.team_one_name, "Kerry");

        archive.append(setup("Galway"), &markers(), &registry).unwrap();
        assert_eq!(archive.load_all().len(), 4);
    }

    #[test]
    fn test_append_over_corrupt_store_starts_fresh() {
        let mut store = MemoryStore::new();
        store.insert_raw(SAVED_MATCHES_KEY, "[{ broken");
        let mut archive = MatchArchive::new(store);
        archive
            .append(setup("Derry"), &markers(), &CategoryRegistry::with_defaults())
            .unwrap();
        assert_eq!(archive.load_all().len(), 1);
    }

    #[test]
    fn test_hand_built_nan_point_round_trips() {
        let mut archive = archive_with(1);
        let mut store = MarkerStore::new();
        let id = store
            .place(NormalizedPoint { x: f64::NAN, y: 0.2 }, Color::RED, "2")
            .unwrap()
            .id;
        store.make_directional(id, NormalizedPoint { x: 0.4, y: f64::NAN });

        let saved = archive
            .append(setup("Sligo"), store.markers(), &CategoryRegistry::with_defaults())
            .unwrap();

        let loaded = archive.load_all();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1], saved);
        let marker = &loaded[1].markers[0];
        assert_eq!((marker.x, marker.y), (0.5, 0.2));
        assert_eq!((marker.end_x, marker.end_y), (Some(0.4), Some(0.5)));
    }
}
