// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, MAX_IMAGE_BYTES};
use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::json;

#[tokio::test]
async fn test_ad_copy_returns_cleaned_text() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/ad-copy")
        .json(&json!({ "topic": "summer sale", "tone": "humorous" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["copy"], "Buy Now! Great deal. Act fast!");
    assert_eq!(app.ad_copy_client.calls(), 1);
}

#[tokio::test]
async fn test_ad_copy_empty_topic_is_rejected_without_calling_model() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/ad-copy")
        .json(&json!({ "topic": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Topic cannot be empty");
    assert_eq!(app.ad_copy_client.calls(), 0);
}

#[tokio::test]
async fn test_ad_copy_blank_model_output_is_bad_gateway() {
    let app = create_test_app();
    app.ad_copy_client.set_reply("**Headline:**");

    let response = app
        .server
        .post("/v1/ad-copy")
        .json(&json!({ "topic": "shoes" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Failed to generate ad copy. Please try again."
    );
}

#[tokio::test]
async fn test_caption_passes_content_type_through() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/caption")
        .bytes(Bytes::from_static(b"\x89PNG fake"))
        .content_type("image/png")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["caption"], "a golden retriever running on the beach");
    assert_eq!(
        body["hashtags"],
        json!(["#golden", "#retriever", "#running", "#beach", "#photography", "#ai"])
    );
    assert_eq!(app.caption_client.content_types(), vec!["image/png"]);
}

#[tokio::test]
async fn test_caption_without_image_is_rejected() {
    let app = create_test_app();

    let response = app.server.post("/v1/caption").content_type("image/png").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "No image selected"
    );
    assert_eq!(app.caption_client.calls(), 0);
}

#[tokio::test]
async fn test_caption_oversized_image_is_rejected() {
    let app = create_test_app();
    let image = vec![0u8; MAX_IMAGE_BYTES as usize + 1];

    let response = app
        .server
        .post("/v1/caption")
        .bytes(Bytes::from(image))
        .content_type("image/jpeg")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        format!("File size must be less than {} bytes", MAX_IMAGE_BYTES)
    );
    assert_eq!(app.caption_client.calls(), 0);
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let app = create_test_app();
    app.caption_client.set_failing();

    let response = app
        .server
        .post("/v1/caption")
        .bytes(Bytes::from_static(b"jpeg"))
        .content_type("image/jpeg")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<serde_json::Value>()["success"], false);
}

#[tokio::test]
async fn test_unknown_tone_is_validation_error() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/ad-copy")
        .json(&json!({ "topic": "shoes", "tone": "sarcastic" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Unknown tone: sarcastic"));
    assert_eq!(app.ad_copy_client.calls(), 0);
}

#[tokio::test]
async fn test_malformed_json_uses_error_body() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/ad-copy")
        .bytes(Bytes::from_static(b"{\"topic\": "))
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<serde_json::Value>()["success"], false);
    assert_eq!(app.ad_copy_client.calls(), 0);
}
