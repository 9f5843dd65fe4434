// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::generation::{GenerationError, PipelineKind};

/// 推理服务错误类型
#[derive(Error, Debug)]
pub enum InferenceError {
    /// 未配置 API 密钥，请求未发出
    #[error("API key not configured")]
    MissingCredential,

    /// 无法连接到推理服务
    #[error("Connection failed: {0}")]
    Offline(String),

    /// 推理服务拒绝了凭证
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// 响应格式无法识别
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl InferenceError {
    /// 转换为面向用户的生成错误
    pub fn into_generation_error(self, pipeline: PipelineKind) -> GenerationError {
        match self {
            InferenceError::MissingCredential => GenerationError::Configuration { pipeline },
            InferenceError::Offline(detail) => GenerationError::Network {
                pipeline,
                offline: true,
                detail,
            },
            InferenceError::Unauthorized(_) => GenerationError::InvalidCredential { pipeline },
            InferenceError::RequestFailed(detail) => GenerationError::Network {
                pipeline,
                offline: false,
                detail,
            },
            InferenceError::MalformedResponse(_) => GenerationError::EmptyResult { pipeline },
        }
    }
}

/// 推理服务客户端
///
/// 托管模型服务的抽象。返回 `Ok(None)` 表示调用成功但没有生成文本。
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// 文本生成：发送提示词，返回生成的文本
    async fn generate_text(&self, prompt: &str) -> Result<Option<String>, InferenceError>;

    /// 图片转文本：发送原始图片字节，内容类型原样透传
    async fn image_to_text(
        &self,
        image: &[u8],
        content_type: &str,
    ) -> Result<Option<String>, InferenceError>;
}
