// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use wiremock::{
    matchers::{body_bytes, body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use content_studio::config::settings::InferenceSettings;
use content_studio::domain::models::generation::{GenerationError, PipelineKind};
use content_studio::domain::services::inference_client::{InferenceClient, InferenceError};
use content_studio::infrastructure::services::hugging_face_client::HuggingFaceClient;

const TEXT_MODEL: &str = "google/gemma-2-2b-it";
const IMAGE_MODEL: &str = "Salesforce/blip-image-captioning-base";

fn settings(base_url: &str, model: &str, api_key: Option<&str>) -> InferenceSettings {
    InferenceSettings {
        api_key: api_key.map(str::to_string),
        model: model.to_string(),
        base_url: base_url.to_string(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_generate_text_sends_prompt_with_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}", TEXT_MODEL)))
        .and(header("authorization", "Bearer hf_test"))
        .and(body_json(json!({ "inputs": "Write something" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "generated_text": " Sale! " }])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        HuggingFaceClient::new(&settings(&mock_server.uri(), TEXT_MODEL, Some("hf_test"))).unwrap();
    let text = client.generate_text("Write something").await.unwrap();

    assert_eq!(text.as_deref(), Some("Sale!"));
}

#[tokio::test]
async fn test_image_to_text_passes_bytes_and_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/models/{}", IMAGE_MODEL)))
        .and(header("content-type", "image/webp"))
        .and(body_bytes(b"RIFFwebp".to_vec()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "generated_text": "a cat sleeping on a sofa" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        HuggingFaceClient::new(&settings(&mock_server.uri(), IMAGE_MODEL, Some("hf_test"))).unwrap();
    let caption = client.image_to_text(b"RIFFwebp", "image/webp").await.unwrap();

    assert_eq!(caption.as_deref(), Some("a cat sleeping on a sofa"));
}

#[tokio::test]
async fn test_missing_key_never_reaches_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::new(&settings(&mock_server.uri(), TEXT_MODEL, Some("  ")))
        .unwrap();
    let err = client.generate_text("prompt").await.unwrap_err();

    assert!(matches!(err, InferenceError::MissingCredential));
    assert_eq!(
        err.into_generation_error(PipelineKind::AdCopy),
        GenerationError::Configuration {
            pipeline: PipelineKind::AdCopy
        }
    );
}

#[tokio::test]
async fn test_rejected_key_is_invalid_credential() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&mock_server)
        .await;

    let client =
        HuggingFaceClient::new(&settings(&mock_server.uri(), TEXT_MODEL, Some("hf_bad"))).unwrap();
    let err = client
        .generate_text("prompt")
        .await
        .unwrap_err()
        .into_generation_error(PipelineKind::AdCopy);

    assert_eq!(
        err.to_string(),
        "Invalid API key. Please check your Hugging Face API key."
    );
}

#[tokio::test]
async fn test_server_error_is_generic_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Model is loading"))
        .mount(&mock_server)
        .await;

    let client =
        HuggingFaceClient::new(&settings(&mock_server.uri(), IMAGE_MODEL, Some("hf_test"))).unwrap();
    let err = client
        .image_to_text(b"jpeg", "image/jpeg")
        .await
        .unwrap_err()
        .into_generation_error(PipelineKind::Caption);

    assert_eq!(err.to_string(), "Failed to generate caption. Please try again.");
}

#[tokio::test]
async fn test_unexpected_shape_yields_no_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "busy" })))
        .mount(&mock_server)
        .await;

    let client =
        HuggingFaceClient::new(&settings(&mock_server.uri(), TEXT_MODEL, Some("hf_test"))).unwrap();

    assert_eq!(client.generate_text("prompt").await.unwrap(), None);
}

#[tokio::test]
async fn test_unreachable_host_is_offline() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let base_url = format!("http://127.0.0.1:{}", port);

    let client = HuggingFaceClient::new(&settings(&base_url, TEXT_MODEL, Some("hf_test"))).unwrap();
    let err = client
        .generate_text("prompt")
        .await
        .unwrap_err()
        .into_generation_error(PipelineKind::AdCopy);

    assert_eq!(
        err.to_string(),
        "Please check your internet connection and try again."
    );
}
