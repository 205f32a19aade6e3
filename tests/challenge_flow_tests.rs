// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Challenge submission flow over HTTP.
//!
//! Covers the capture → submit → reset cycle, retake, cancelled captures,
//! out-of-order actions and image validation.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::TEST_IMAGE;

#[tokio::test]
async fn test_get_challenge_starts_idle() {
    let (app, _) = common::create_test_app();

    let (status, body) = common::get_json(&app, "/challenge").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["challenge"]["title"], "Hora Dorada");
    assert_eq!(body["challenge"]["difficulty"], "Medio");
    assert_eq!(body["challenge"]["points"], 150);
    assert_eq!(body["challenge"]["tips"].as_array().unwrap().len(), 4);
    assert_eq!(body["session"]["state"], "idle");
}

#[tokio::test]
async fn test_capture_submit_reset_cycle() {
    let (app, state) = common::create_test_app();

    let (status, body) = common::post_json(
        &app,
        "/challenge/capture",
        Some(json!({ "image": TEST_IMAGE })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["state"], "captured");
    assert_eq!(body["session"]["image"], TEST_IMAGE);

    let (status, body) = common::post_json(&app, "/challenge/submit", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["state"], "submitted");
    assert_eq!(body["session"]["image"], TEST_IMAGE);

    let feedback = &body["session"]["feedback"];
    assert_eq!(feedback["score"], 87);
    assert_eq!(feedback["strengths"].as_array().unwrap().len(), 3);
    assert_eq!(feedback["improvements"].as_array().unwrap().len(), 2);
    assert_eq!(
        feedback["strengths"][0],
        "Excelente uso de la luz dorada"
    );
    assert!(feedback["overallComment"]
        .as_str()
        .unwrap()
        .starts_with("Una captura hermosa"));

    let (status, body) = common::post_json(&app, "/challenge/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["state"], "idle");
    assert!(body["session"].get("image").is_none());
    assert!(body["session"].get("feedback").is_none());

    let session = state.challenge.lock().await;
    assert!(!session.is_submitted());
    assert!(session.image().is_none());
    assert!(session.feedback().is_none());
}

#[tokio::test]
async fn test_retake_discards_capture() {
    let (app, _) = common::create_test_app();

    common::post_json(
        &app,
        "/challenge/capture",
        Some(json!({ "image": TEST_IMAGE })),
    )
    .await;

    let (status, body) = common::post_json(&app, "/challenge/retake", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["state"], "idle");
}

#[tokio::test]
async fn test_cancelled_capture_is_noop() {
    let (app, _) = common::create_test_app();

    let (status, body) =
        common::post_json(&app, "/challenge/capture", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["state"], "idle");
}

#[tokio::test]
async fn test_out_of_order_actions_conflict() {
    let (app, _) = common::create_test_app();

    for action in ["submit", "retake", "reset"] {
        let (status, body) =
            common::post_json(&app, &format!("/challenge/{action}"), None).await;
        assert_eq!(status, StatusCode::CONFLICT, "{action} from idle");
        assert_eq!(body["error"], "conflict");
    }

    common::post_json(
        &app,
        "/challenge/capture",
        Some(json!({ "image": TEST_IMAGE })),
    )
    .await;
    common::post_json(&app, "/challenge/submit", None).await;

    let (status, _) = common::post_json(
        &app,
        "/challenge/capture",
        Some(json!({ "image": TEST_IMAGE })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Still submitted with the original feedback
    let (_, body) = common::get_json(&app, "/challenge").await;
    assert_eq!(body["session"]["state"], "submitted");
    assert_eq!(body["session"]["feedback"]["score"], 87);
}

#[tokio::test]
async fn test_capture_rejects_non_image() {
    let (app, _) = common::create_test_app();

    for image in [
        "https://example.com/photo.jpg",
        "data:application/pdf;base64,JVBERi0=",
        "data:image/png;base64,@@@",
        "",
    ] {
        let (status, body) = common::post_json(
            &app,
            "/challenge/capture",
            Some(json!({ "image": image })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "image: {image:?}");
        assert_eq!(body["error"], "bad_request");
    }

    let (_, body) = common::get_json(&app, "/challenge").await;
    assert_eq!(body["session"]["state"], "idle");
}
