// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fotografiarte: daily photography challenges with levels and achievements
//!
//! This crate provides the progression model (points, levels, streaks and
//! achievements), the challenge submission flow, and the JSON API the mobile
//! client uses for its gallery, challenge, community and profile views.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::KeyValueStore;
use services::{ChallengeSession, CommunityFeed, FeedbackScorer, Gallery, ProgressStore};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub progress: ProgressStore,
    pub gallery: Gallery,
    pub community: Mutex<CommunityFeed>,
    pub challenge: Mutex<ChallengeSession>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn KeyValueStore>,
        scorer: Arc<dyn FeedbackScorer>,
    ) -> Self {
        Self {
            config,
            progress: ProgressStore::new(store),
            gallery: Gallery::default(),
            community: Mutex::new(CommunityFeed::default()),
            challenge: Mutex::new(ChallengeSession::new(scorer)),
        }
    }
}
