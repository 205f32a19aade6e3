// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gallery of past challenge photos.

use crate::error::{AppError, Result};
use crate::models::ChallengePhoto;
use crate::services::gallery::ALL_CATEGORIES;
use crate::services::ScoreTier;
use crate::time_utils::format_short_date;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_CATEGORY_LEN: usize = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/gallery", get(get_gallery))
}

#[derive(Deserialize)]
struct GalleryQuery {
    /// Category filter; `all` or absent shows everything
    category: Option<String>,
}

/// A gallery photo with its display extras.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GalleryPhoto {
    #[serde(flatten)]
    pub photo: ChallengePhoto,
    pub tier: ScoreTier,
    /// Date formatted for display, e.g. `15 ene 2024`
    pub display_date: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GalleryResponse {
    pub category: String,
    pub categories: Vec<String>,
    pub photos: Vec<GalleryPhoto>,
}

async fn get_gallery(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<GalleryResponse>> {
    let category = query
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());

    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(AppError::BadRequest(format!(
            "Category must be at most {} characters",
            MAX_CATEGORY_LEN
        )));
    }

    let photos = state
        .gallery
        .filter(&category)
        .into_iter()
        .map(|photo| GalleryPhoto {
            tier: ScoreTier::from_score(photo.score),
            display_date: format_short_date(&photo.date),
            photo,
        })
        .collect();

    Ok(Json(GalleryResponse {
        categories: state.gallery.categories(),
        category,
        photos,
    }))
}
