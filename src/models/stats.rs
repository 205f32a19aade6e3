// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User progress record and its persisted overlay.
//!
//! The persisted record under `fotografiarte_progress` may hold any subset of
//! the `UserStats` fields. It is decoded into a `UserStatsPatch` one field at a
//! time so a single malformed value never discards the rest of the record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Profile statistics for the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserStats {
    pub level: u32,
    /// Accumulated experience points
    pub points: u32,
    /// Consecutive days with a completed challenge
    pub streak: u32,
    pub challenges_completed: u32,
    pub total_photos: u32,
    pub community_likes: u32,
    /// Global ranking position (1 is best)
    pub rank: u32,
    pub join_date: NaiveDate,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            level: 1,
            points: 120,
            streak: 3,
            challenges_completed: 8,
            total_photos: 8,
            community_likes: 24,
            rank: 847,
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        }
    }
}

impl UserStats {
    /// Overlay every present field of `patch`; persisted values win.
    pub fn apply(&mut self, patch: &UserStatsPatch) {
        if let Some(v) = patch.level {
            self.level = v;
        }
        if let Some(v) = patch.points {
            self.points = v;
        }
        if let Some(v) = patch.streak {
            self.streak = v;
        }
        if let Some(v) = patch.challenges_completed {
            self.challenges_completed = v;
        }
        if let Some(v) = patch.total_photos {
            self.total_photos = v;
        }
        if let Some(v) = patch.community_likes {
            self.community_likes = v;
        }
        if let Some(v) = patch.rank {
            self.rank = v;
        }
        if let Some(v) = patch.join_date {
            self.join_date = v;
        }
    }
}

/// Partial `UserStats` as found in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStatsPatch {
    pub level: Option<u32>,
    pub points: Option<u32>,
    pub streak: Option<u32>,
    pub challenges_completed: Option<u32>,
    pub total_photos: Option<u32>,
    pub community_likes: Option<u32>,
    pub rank: Option<u32>,
    pub join_date: Option<NaiveDate>,
    /// Number of keys in the stored object, valid or not.
    key_count: usize,
}

impl UserStatsPatch {
    /// Decode a stored JSON object field by field.
    ///
    /// Fields with the wrong type, negative or fractional counters and
    /// unparseable dates are skipped. Unknown keys are ignored but still
    /// counted by [`UserStatsPatch::is_empty`].
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            level: counter(obj, "level"),
            points: counter(obj, "points"),
            streak: counter(obj, "streak"),
            challenges_completed: counter(obj, "challengesCompleted"),
            total_photos: counter(obj, "totalPhotos"),
            community_likes: counter(obj, "communityLikes"),
            rank: counter(obj, "rank"),
            join_date: obj.get("joinDate").and_then(parse_join_date),
            key_count: obj.len(),
        }
    }

    /// True when the stored object had no keys at all.
    pub fn is_empty(&self) -> bool {
        self.key_count == 0
    }
}

fn counter(obj: &Map<String, Value>, key: &str) -> Option<u32> {
    let value = obj.get(key)?;
    match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
        Some(n) => Some(n),
        None => {
            tracing::debug!(field = key, value = %value, "Ignoring invalid stored field");
            None
        }
    }
}

/// Accepts `YYYY-MM-DD` or a full RFC3339 timestamp.
fn parse_join_date(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
