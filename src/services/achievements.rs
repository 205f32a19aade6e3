// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Achievement evaluation.
//!
//! Evaluation is read-only over the supplied unlock flags. Unlocking from live
//! stats only happens through [`evaluate`] with caller-provided rules; no
//! thresholds are built in.

use crate::models::{Achievement, UserStats};

/// Split achievements into `(unlocked, locked)`, keeping catalog order in each.
pub fn partition(achievements: &[Achievement]) -> (Vec<Achievement>, Vec<Achievement>) {
    achievements.iter().cloned().partition(|a| a.unlocked)
}

/// Rounded completion percentage for an achievement with progress counters.
///
/// Halves round up. Returns `None` when either counter is missing or the
/// goal is zero.
pub fn percent_complete(achievement: &Achievement) -> Option<u32> {
    let progress = u64::from(achievement.progress?);
    let max = u64::from(achievement.max_progress?);
    if max == 0 {
        return None;
    }
    // round(100 * p / m) with half-up, in integer arithmetic
    let pct = (200 * progress + max) / (2 * max);
    u32::try_from(pct).ok()
}

/// A `UserStats` counter an unlock rule can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatMetric {
    Level,
    Points,
    Streak,
    ChallengesCompleted,
    TotalPhotos,
    CommunityLikes,
}

impl StatMetric {
    pub fn read(&self, stats: &UserStats) -> u32 {
        match self {
            Self::Level => stats.level,
            Self::Points => stats.points,
            Self::Streak => stats.streak,
            Self::ChallengesCompleted => stats.challenges_completed,
            Self::TotalPhotos => stats.total_photos,
            Self::CommunityLikes => stats.community_likes,
        }
    }
}

/// Unlocks `achievement_id` once `metric` reaches `threshold`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockRule {
    pub achievement_id: String,
    pub metric: StatMetric,
    pub threshold: u32,
}

impl UnlockRule {
    pub fn new(achievement_id: impl Into<String>, metric: StatMetric, threshold: u32) -> Self {
        Self {
            achievement_id: achievement_id.into(),
            metric,
            threshold,
        }
    }
}

/// Apply unlock rules to a set of achievements.
///
/// For every locked achievement with a matching rule, progress is refreshed
/// from the stat (capped at `threshold`) and the achievement unlocks once the
/// threshold is met. Unlocked achievements never relock. Achievements with
/// no rule pass through unchanged, so an empty rule set is the identity.
pub fn evaluate(
    achievements: &[Achievement],
    stats: &UserStats,
    rules: &[UnlockRule],
) -> Vec<Achievement> {
    achievements
        .iter()
        .map(|a| {
            let mut a = a.clone();
            if a.unlocked {
                return a;
            }
            let Some(rule) = rules.iter().find(|r| r.achievement_id == a.id) else {
                return a;
            };

            let value = rule.metric.read(stats);
            if value >= rule.threshold {
                tracing::debug!(achievement = %a.id, value, "Achievement unlocked");
                a.unlocked = true;
                a.progress = None;
                a.max_progress = None;
            } else {
                a.progress = Some(value);
                a.max_progress = Some(rule.threshold);
            }
            a
        })
        .collect()
}
