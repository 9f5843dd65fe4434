// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::config::settings::InferenceSettings;
use crate::domain::services::inference_client::{InferenceClient, InferenceError};

/// 推理服务的响应体
///
/// 可能是单个对象，也可能是数组（取第一个元素）
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Single(GeneratedText),
    Batch(Vec<GeneratedText>),
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: Option<String>,
}

impl GenerationResponse {
    fn into_text(self) -> Option<String> {
        let text = match self {
            GenerationResponse::Single(item) => item.generated_text,
            GenerationResponse::Batch(items) => {
                items.into_iter().next().and_then(|item| item.generated_text)
            }
        };
        text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
    }
}

/// 解析推理服务返回的 JSON
///
/// 只接受 `{ generated_text }` 或首元素带 `generated_text` 的数组，其他形状视为格式错误
pub fn parse_generated_text(body: &str) -> Result<Option<String>, InferenceError> {
    let response: GenerationResponse = serde_json::from_str(body)
        .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;
    Ok(response.into_text())
}

/// Hugging Face 推理服务客户端
///
/// # 配置
///
/// 每条管线使用独立的 [`InferenceSettings`]：
/// - `api_key` - Bearer 凭证，缺失时不发起任何网络请求
/// - `model` - 模型标识，拼接为 `{base_url}/models/{model}`
/// - `timeout_secs` - 单次请求超时
pub struct HuggingFaceClient {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: Url,
}

impl HuggingFaceClient {
    pub fn new(settings: &InferenceSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("content-studio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let endpoint = model_endpoint(&settings.base_url, &settings.model)?;

        Ok(Self {
            client,
            api_key: settings.credential().map(str::to_string),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn credential(&self) -> Result<&str, InferenceError> {
        self.api_key
            .as_deref()
            .ok_or(InferenceError::MissingCredential)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Option<String>, InferenceError> {
        let response = request.send().await.map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(
                endpoint = %self.endpoint,
                status = %status,
                "Inference API returned error: {}",
                error_text
            );
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    InferenceError::Unauthorized(error_text)
                }
                _ => InferenceError::RequestFailed(format!("{} - {}", status, error_text)),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| InferenceError::RequestFailed(e.to_string()))?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "Inference API responded");

        parse_generated_text(&body)
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, InferenceError> {
        let api_key = self.credential()?;

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .json(&serde_json::json!({ "inputs": prompt }));

        self.send(request).await
    }

    async fn image_to_text(
        &self,
        image: &[u8],
        content_type: &str,
    ) -> Result<Option<String>, InferenceError> {
        let api_key = self.credential()?;

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(CONTENT_TYPE, content_type)
            .body(image.to_vec());

        self.send(request).await
    }
}

/// 拼接模型端点 `{base_url}/models/{model}`
///
/// 模型标识中的 `/` 保留为路径分隔符
pub fn model_endpoint(base_url: &str, model: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(base_url)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("base_url cannot be a base: {}", base_url))?;
        segments.pop_if_empty().push("models");
        for part in model.split('/').filter(|p| !p.is_empty()) {
            segments.push(part);
        }
    }
    Ok(url)
}

fn classify_send_error(e: reqwest::Error) -> InferenceError {
    if e.is_connect() {
        InferenceError::Offline(e.to_string())
    } else {
        InferenceError::RequestFailed(e.to_string())
    }
}
