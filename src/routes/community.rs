// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community feed routes.

use crate::error::{AppError, Result};
use crate::models::CommunityPhoto;
use crate::services::FeedTab;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/community", get(get_feed))
        .route("/community/{id}/like", post(toggle_like))
}

#[derive(Deserialize)]
struct FeedQuery {
    /// `trending` (default), `recent` or `top`
    tab: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FeedResponse {
    pub tab: String,
    pub photos: Vec<CommunityPhoto>,
}

async fn get_feed(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>> {
    let tab_name = query.tab.unwrap_or_else(|| "trending".to_string());
    let tab: FeedTab = tab_name.parse().map_err(AppError::BadRequest)?;

    let photos = state.community.lock().await.filter(tab);

    Ok(Json(FeedResponse {
        tab: tab_name,
        photos,
    }))
}

async fn toggle_like(
    State(state): State<Arc<AppState>>,
    Path(photo_id): Path<String>,
) -> Result<Json<CommunityPhoto>> {
    let photo = state
        .community
        .lock()
        .await
        .toggle_like(&photo_id)
        .ok_or_else(|| AppError::NotFound(format!("Photo {} not found", photo_id)))?;

    Ok(Json(photo))
}
