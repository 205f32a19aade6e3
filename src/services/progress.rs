// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Progress store: loads the user's stats from key-value storage.
//!
//! Load never fails. Missing, unreadable or malformed records all degrade to
//! the compiled-in defaults.

use crate::db::{keys, KeyValueStore, StoreError};
use crate::models::achievement::catalog;
use crate::models::{Achievement, SavedPhoto, UserStats, UserStatsPatch};
use serde_json::Value;
use std::sync::Arc;

/// Additive base for `community_likes` when recomputed from saved photos.
pub const COMMUNITY_LIKES_BASE: u32 = 24;

/// Owns access to the persisted progress record.
#[derive(Clone)]
pub struct ProgressStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load stats: defaults overlaid with the persisted record.
    ///
    /// When the persisted record has at least one key, `total_photos` and
    /// `community_likes` are recomputed from the saved photo list afterwards,
    /// overriding both the defaults and any persisted value for them.
    pub fn load(&self) -> UserStats {
        let mut stats = UserStats::default();

        let patch = self.read_patch();
        if patch.is_empty() {
            return stats;
        }
        stats.apply(&patch);

        let photos = self.read_saved_photos();
        stats.total_photos = u32::try_from(photos.len()).unwrap_or(u32::MAX);
        stats.community_likes = photos.iter().fold(COMMUNITY_LIKES_BASE, |sum, photo| {
            sum.saturating_add(photo.likes.unwrap_or(0))
        });

        tracing::debug!(
            points = stats.points,
            total_photos = stats.total_photos,
            community_likes = stats.community_likes,
            "Loaded persisted progress"
        );
        stats
    }

    /// Persist stats.
    ///
    /// Currently a no-op: progress is only ever read. A writer would
    /// serialize `stats` under [`keys::PROGRESS`].
    pub fn save(&self, stats: &UserStats) -> Result<(), StoreError> {
        tracing::debug!(points = stats.points, "Progress save skipped (read-only store)");
        Ok(())
    }

    /// The achievement catalog. Unlock state is not persisted.
    pub fn achievements(&self) -> Vec<Achievement> {
        catalog()
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read from store");
                None
            }
        }
    }

    fn read_patch(&self) -> UserStatsPatch {
        let Some(raw) = self.read_raw(keys::PROGRESS) else {
            return UserStatsPatch::default();
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(obj)) => UserStatsPatch::from_object(&obj),
            Ok(_) => {
                tracing::warn!(key = keys::PROGRESS, "Stored progress is not an object");
                UserStatsPatch::default()
            }
            Err(e) => {
                tracing::warn!(key = keys::PROGRESS, error = %e, "Malformed stored progress");
                UserStatsPatch::default()
            }
        }
    }

    fn read_saved_photos(&self) -> Vec<SavedPhoto> {
        let Some(raw) = self.read_raw(keys::PHOTOS) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
            Err(e) => {
                tracing::warn!(key = keys::PHOTOS, error = %e, "Malformed saved photo list");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    fn store_with(entries: &[(&str, &str)]) -> ProgressStore {
        ProgressStore::new(Arc::new(MemoryStore::with_entries(
            entries.iter().copied(),
        )))
    }

    #[test]
    fn test_absent_record_yields_defaults() {
        assert_eq!(store_with(&[]).load(), UserStats::default());
    }

    #[test]
    fn test_empty_object_yields_defaults() {
        let store = store_with(&[
            (keys::PROGRESS, "{}"),
            (keys::PHOTOS, r#"[{"likes":100}]"#),
        ]);
        assert_eq!(store.load(), UserStats::default());
    }

    #[test]
    fn test_shallow_merge_keeps_other_defaults() {
        let stats = store_with(&[(keys::PROGRESS, r#"{"points":500}"#)]).load();

        assert_eq!(stats.points, 500);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.streak, 3);
        assert_eq!(stats.challenges_completed, 8);
        assert_eq!(stats.rank, 847);
        // Recomputed from the (absent) photo list
        assert_eq!(stats.total_photos, 0);
        assert_eq!(stats.community_likes, 24);
    }

    #[test]
    fn test_malformed_record_yields_defaults() {
        for raw in [r#"{"points": 5"#, "not json", "[1,2,3]", "42", "null"] {
            let stats = store_with(&[(keys::PROGRESS, raw)]).load();
            assert_eq!(stats, UserStats::default(), "input: {raw}");
        }
    }

    #[test]
    fn test_community_likes_uses_additive_base() {
        let stats = store_with(&[
            (keys::PROGRESS, r#"{"streak":4}"#),
            (keys::PHOTOS, r#"[{"likes":5},{"likes":3}]"#),
        ])
        .load();

        assert_eq!(stats.community_likes, 32);
        assert_eq!(stats.total_photos, 2);
        assert_eq!(stats.streak, 4);
    }

    #[test]
    fn test_photos_without_likes_still_count() {
        let stats = store_with(&[
            (keys::PROGRESS, r#"{"level":2}"#),
            (keys::PHOTOS, r#"[{"likes":5},{},{"title":"x"},7]"#),
        ])
        .load();

        assert_eq!(stats.total_photos, 4);
        assert_eq!(stats.community_likes, 29);
    }

    #[test]
    fn test_recompute_overrides_persisted_totals() {
        let stats = store_with(&[
            (
                keys::PROGRESS,
                r#"{"totalPhotos":99,"communityLikes":999}"#,
            ),
            (keys::PHOTOS, r#"[{"likes":1}]"#),
        ])
        .load();

        assert_eq!(stats.total_photos, 1);
        assert_eq!(stats.community_likes, 25);
    }

    #[test]
    fn test_malformed_photo_list_counts_as_empty() {
        let stats = store_with(&[
            (keys::PROGRESS, r#"{"points":10}"#),
            (keys::PHOTOS, "[{"),
        ])
        .load();

        assert_eq!(stats.points, 10);
        assert_eq!(stats.total_photos, 0);
        assert_eq!(stats.community_likes, 24);
    }

    #[test]
    fn test_save_is_noop() {
        let backing = Arc::new(MemoryStore::new());
        let store = ProgressStore::new(backing.clone());

        let stats = UserStats {
            points: 999,
            ..UserStats::default()
        };
        store.save(&stats).unwrap();

        assert_eq!(backing.get(keys::PROGRESS).unwrap(), None);
        assert_eq!(store.load(), UserStats::default());
    }
}
