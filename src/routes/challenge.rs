// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily challenge and submission flow routes.

use crate::error::{AppError, Result};
use crate::models::Challenge;
use crate::services::SubmissionState;
use crate::AppState;
use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::{Validate, ValidationError};

/// Largest accepted image data URL (8 MiB of text).
pub const MAX_IMAGE_DATA_URL_LEN: usize = 8 * 1024 * 1024;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/challenge", get(get_challenge))
        .route(
            "/challenge/capture",
            post(capture).layer(DefaultBodyLimit::max(MAX_IMAGE_DATA_URL_LEN + 1024)),
        )
        .route("/challenge/retake", post(retake))
        .route("/challenge/submit", post(submit))
        .route("/challenge/reset", post(reset))
}

/// Today's challenge and where the user is in completing it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChallengeResponse {
    pub challenge: Challenge,
    pub session: SubmissionState,
}

/// Image picked from the camera or gallery.
#[derive(Debug, Deserialize, Validate)]
pub struct CaptureRequest {
    /// `data:image/...` URL. Absent when the picker was cancelled.
    #[validate(
        length(min = 1, max = 8388608),
        custom(function = "validate_image_data_url")
    )]
    pub image: Option<String>,
}

/// Accept only `data:image/<subtype>[;params],<payload>` with a decodable
/// payload when it is base64-encoded.
fn validate_image_data_url(image: &str) -> std::result::Result<(), ValidationError> {
    let invalid = |code: &'static str| Err(ValidationError::new(code));

    let Some(rest) = image.strip_prefix("data:image/") else {
        return invalid("not_an_image");
    };
    let Some((header, payload)) = rest.split_once(',') else {
        return invalid("malformed_data_url");
    };
    let subtype = header.split(';').next().unwrap_or("");
    if subtype.is_empty() {
        return invalid("not_an_image");
    }
    if payload.is_empty() {
        return invalid("empty_image");
    }
    if header.split(';').any(|param| param == "base64") && STANDARD.decode(payload).is_err() {
        return invalid("invalid_base64");
    }
    Ok(())
}

fn respond(state: &SubmissionState) -> Json<ChallengeResponse> {
    Json(ChallengeResponse {
        challenge: Challenge::today(),
        session: state.clone(),
    })
}

async fn get_challenge(State(state): State<Arc<AppState>>) -> Json<ChallengeResponse> {
    let session = state.challenge.lock().await;
    respond(session.state())
}

async fn capture(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CaptureRequest>,
) -> Result<Json<ChallengeResponse>> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid image: {}", e)))?;

    let mut session = state.challenge.lock().await;
    if let Some(image) = request.image {
        tracing::info!(bytes = image.len(), "Image captured");
        session.capture(image)?;
    }
    Ok(respond(session.state()))
}

async fn retake(State(state): State<Arc<AppState>>) -> Result<Json<ChallengeResponse>> {
    let mut session = state.challenge.lock().await;
    session.retake()?;
    Ok(respond(session.state()))
}

async fn submit(State(state): State<Arc<AppState>>) -> Result<Json<ChallengeResponse>> {
    let mut session = state.challenge.lock().await;
    session.submit()?;
    Ok(respond(session.state()))
}

async fn reset(State(state): State<Arc<AppState>>) -> Result<Json<ChallengeResponse>> {
    let mut session = state.challenge.lock().await;
    session.reset()?;
    tracing::info!("New challenge started");
    Ok(respond(session.state()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_image_data_urls() {
        assert!(validate_image_data_url("data:image/png;base64,iVBORw0KGgo=").is_ok());
        assert!(validate_image_data_url("data:image/svg+xml,%3Csvg%3E").is_ok());
    }

    #[test]
    fn test_rejects_non_images() {
        for bad in [
            "https://example.com/photo.jpg",
            "data:text/plain;base64,aGVsbG8=",
            "data:image/png;base64",
            "data:image/;base64,aGVsbG8=",
            "data:image/png;base64,",
            "data:image/png;base64,not*base64!",
        ] {
            assert!(validate_image_data_url(bad).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn test_capture_request_validation() {
        let ok = CaptureRequest {
            image: Some("data:image/jpeg;base64,/9j/4AAQ".to_string()),
        };
        assert!(ok.validate().is_ok());

        let cancelled = CaptureRequest { image: None };
        assert!(cancelled.validate().is_ok());

        let bad = CaptureRequest {
            image: Some("hello".to_string()),
        };
        assert!(bad.validate().is_err());
    }
}
