// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile route: stats, level progress and achievements.

use crate::models::{Achievement, UserStats};
use crate::services::achievements::{partition, percent_complete};
use crate::services::LevelProgress;
use crate::time_utils::format_member_since;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/profile", get(get_profile))
}

/// A locked achievement with its completion percentage, if it tracks one.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LockedAchievement {
    #[serde(flatten)]
    pub achievement: Achievement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_complete: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AchievementsView {
    pub unlocked: Vec<Achievement>,
    pub locked: Vec<LockedAchievement>,
    pub unlocked_count: usize,
    pub total: usize,
}

impl AchievementsView {
    pub fn from_achievements(achievements: &[Achievement]) -> Self {
        let (unlocked, locked) = partition(achievements);

        // Progress is meaningless once unlocked
        let unlocked: Vec<Achievement> = unlocked
            .into_iter()
            .map(|mut a| {
                a.progress = None;
                a.max_progress = None;
                a
            })
            .collect();

        let locked = locked
            .into_iter()
            .map(|a| LockedAchievement {
                percent_complete: percent_complete(&a),
                achievement: a,
            })
            .collect();

        Self {
            unlocked_count: unlocked.len(),
            total: achievements.len(),
            unlocked,
            locked,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileResponse {
    pub stats: UserStats,
    pub level_progress: LevelProgress,
    /// e.g. `enero de 2024`
    pub member_since: String,
    pub achievements: AchievementsView,
}

async fn get_profile(State(state): State<Arc<AppState>>) -> Json<ProfileResponse> {
    let stats = state.progress.load();
    let achievements = state.progress.achievements();

    Json(ProfileResponse {
        level_progress: LevelProgress::from_points(stats.points),
        member_since: format_member_since(stats.join_date),
        achievements: AchievementsView::from_achievements(&achievements),
        stats,
    })
}
