//! A live annotation session for one match.

use crate::core::archive::MatchArchive;
use crate::core::storage::KeyValueStore;
use crate::error::StorageError;
use crate::state::{aggregate, CategoryRegistry, MarkerStore, MatchSetup, SavedMatch, StatsSnapshot};

/// Everything the annotation screen edits while a match is being recorded.
///
/// The setup is fixed for the lifetime of the session; categories and markers
/// are freely editable.
#[derive(Debug, Clone)]
pub struct AnnotationSession {
    setup: MatchSetup,
    pub categories: CategoryRegistry,
    pub markers: MarkerStore,
}

impl AnnotationSession {
    /// Start a session with the default palette and no markers
    pub fn new(setup: MatchSetup) -> Self {
        Self::with_categories(setup, CategoryRegistry::with_defaults())
    }

    pub fn with_categories(setup: MatchSetup, categories: CategoryRegistry) -> Self {
        Self {
            setup,
            categories,
            markers: MarkerStore::new(),
        }
    }

    pub fn setup(&self) -> &MatchSetup {
        &self.setup
    }

    /// Current per-action counts.
    pub fn stats(&self) -> StatsSnapshot {
        aggregate(self.markers.markers(), &self.categories)
    }

    /// Save the session into the archive. The session keeps its markers.
    pub fn export<S: KeyValueStore>(
        &self,
        archive: &mut MatchArchive<S>,
    ) -> Result<SavedMatch, StorageError> {
        archive.append(self.setup.clone(), self.markers.markers(), &self.categories)
    }

    /// Drop all markers to start recording afresh.
    pub fn reset(&mut self) {
        self.markers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::state::{Color, NormalizedPoint, PitchType};
    use chrono::Utc;

    fn session() -> AnnotationSession {
        AnnotationSession::new(MatchSetup::new("Rovers", "City", Utc::now(), PitchType::Soccer))
    }

    #[test]
    fn test_stats_follow_markers() {
        let mut session = session();
        session.markers.place(NormalizedPoint::new(0.1, 0.1), Color::RED, "9");
        session.markers.place(NormalizedPoint::new(0.5, 0.5), Color::BLUE, "6");
        session.markers.place(NormalizedPoint::new(0.9, 0.9), Color::RED, "9");
        let stats = session.stats();
        assert_eq!(stats.get("Shot"), 2);
        assert_eq!(stats.get("Pass"), 1);
        assert_eq!(stats.len(), 2);

        session.markers.undo_last();
        assert_eq!(session.stats().get("Shot"), 1);
    }

    #[test]
    fn test_unselected_color_places_nothing() {
        let mut session = session();
        session.markers.place(NormalizedPoint::CENTER, Color::NONE, "9");
        assert!(session.markers.is_empty());
        assert!(session.stats().is_empty());
    }

    #[test]
    fn test_export_keeps_live_markers_separate() {
        let mut archive = MatchArchive::new(MemoryStore::new());
        let mut session = session();
        session.markers.place(NormalizedPoint::new(0.3, 0.3), Color::GREEN, "4");

        let saved = session.export(&mut archive).unwrap();
        assert_eq!(saved.stats.get("Tackle"), 1);
        assert_eq!(saved.setup, *session.setup());
        assert_eq!(session.markers.len(), 1);

        session.markers.place(NormalizedPoint::new(0.4, 0.4), Color::GREEN, "5");
        session.reset();
        assert!(session.markers.is_empty());

        let loaded = archive.load_all();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].markers.len(), 1);
    }

    #[test]
    fn test_custom_category_counts() {
        let mut session = session();
        let purple = Color::from_rgba8(128, 0, 128, 255);
        session.categories.register(purple, "Kick Out").unwrap();
        session.markers.place(NormalizedPoint::CENTER, purple, "1");
        assert_eq!(session.stats().get("Kick Out"), 1);
    }
}
