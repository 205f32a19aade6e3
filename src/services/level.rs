// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Level progress derived from accumulated points.
//!
//! Every level spans a flat 200 points. There is no per-level scaling; the
//! client rounds and displays both derived values, so the modulo arithmetic
//! must stay exact.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Points needed to advance one level.
pub const POINTS_PER_LEVEL: u32 = 200;

/// Percentage of the current level completed, in `[0, 100)`.
pub fn level_progress_percent(points: u32) -> f64 {
    f64::from(points % POINTS_PER_LEVEL) / 2.0
}

/// Points still missing to reach the next level, in `(0, 200]`.
pub fn points_to_next_level(points: u32) -> u32 {
    POINTS_PER_LEVEL - points % POINTS_PER_LEVEL
}

/// Both derived values, as reported on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LevelProgress {
    pub percent: f64,
    pub points_to_next_level: u32,
}

impl LevelProgress {
    pub fn from_points(points: u32) -> Self {
        Self {
            percent: level_progress_percent(points),
            points_to_next_level: points_to_next_level(points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_points() {
        assert_eq!(points_to_next_level(120), 80);
        assert_eq!(level_progress_percent(120), 60.0);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_progress_percent(0), 0.0);
        assert_eq!(points_to_next_level(0), 200);

        assert_eq!(level_progress_percent(199), 99.5);
        assert_eq!(points_to_next_level(199), 1);

        assert_eq!(level_progress_percent(200), 0.0);
        assert_eq!(points_to_next_level(200), 200);

        assert_eq!(level_progress_percent(501), 50.5);
        assert_eq!(points_to_next_level(501), 99);
    }

    #[test]
    fn test_percent_always_below_hundred() {
        for points in (0..2_000).chain([u32::MAX - 1, u32::MAX]) {
            let pct = level_progress_percent(points);
            assert!((0.0..100.0).contains(&pct), "points={points} pct={pct}");
            assert_eq!(points_to_next_level(points), 200 - (points % 200));
        }
    }

    #[test]
    fn test_level_progress_bundle() {
        let progress = LevelProgress::from_points(120);
        assert_eq!(progress.percent, 60.0);
        assert_eq!(progress.points_to_next_level, 80);
    }
}
