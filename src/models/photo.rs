// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Photo models for the gallery, the community feed and saved captures.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A past challenge submission shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChallengePhoto {
    pub id: String,
    pub image_url: String,
    pub challenge_title: String,
    pub challenge_description: String,
    /// Feedback score (0-100)
    pub score: u32,
    pub likes: u32,
    /// Submission date (YYYY-MM-DD)
    pub date: String,
    pub category: String,
}

/// A photo in the community feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CommunityPhoto {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub challenge_title: String,
    pub technique: String,
    /// Image reference (data URL)
    pub image: String,
    pub likes: u32,
    pub comments: u32,
    pub is_liked: bool,
    pub time_ago: String,
    /// Author level
    pub level: u32,
}

impl CommunityPhoto {
    /// Flip the like flag and adjust the counter.
    ///
    /// Unliking an item whose counter is already 0 leaves it at 0.
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes = self.likes.saturating_add(1);
        }
        self.is_liked = !self.is_liked;
    }
}

/// An entry of the stored `fotografiarte_photos` list.
///
/// Only the like count matters for progress; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SavedPhoto {
    #[serde(default, deserialize_with = "lenient_likes")]
    pub likes: Option<u32>,
}

/// Non-numeric or negative like counts are treated as absent.
fn lenient_likes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u32::try_from(n).ok()))
}
