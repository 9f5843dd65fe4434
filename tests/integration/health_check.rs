// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use content_studio::presentation::routes;
use tower::util::ServiceExt;

/// 健康检查测试
///
/// 验证健康检查端点是否正常工作
#[tokio::test]
async fn health_check_works() {
    let app = routes::routes();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn tone_catalogue_needs_no_services() {
    let app = routes::routes();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/tones")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let tones: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let ids: Vec<&str> = tones
        .as_array()
        .unwrap()
        .iter()
        .map(|tone| tone["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["professional", "casual", "humorous", "persuasive"]);
    assert_eq!(tones[1]["description"], "Friendly and conversational style");
}
