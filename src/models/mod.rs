// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod achievement;
pub mod challenge;
pub mod photo;
pub mod stats;

pub use achievement::Achievement;
pub use challenge::{Challenge, Difficulty, Feedback};
pub use photo::{ChallengePhoto, CommunityPhoto, SavedPhoto};
pub use stats::{UserStats, UserStatsPatch};
