// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod achievements;
pub mod community;
pub mod gallery;
pub mod level;
pub mod progress;
pub mod submission;

pub use community::{CommunityFeed, FeedTab};
pub use gallery::{Gallery, ScoreTier};
pub use level::LevelProgress;
pub use progress::ProgressStore;
pub use submission::{
    ChallengeSession, FeedbackScorer, FixedFeedbackScorer, SubmissionState, TransitionError,
};
