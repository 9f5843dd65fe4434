// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};

use crate::domain::models::generation::GenerationError;
use crate::presentation::errors::AppError;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// 上传的图片
///
/// 请求体为原始图片字节，`Content-Type` 原样转发给推理服务
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Bytes,
    pub content_type: String,
}

impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            GenerationError::Validation(format!("Failed to read image: {}", e.body_text()))
        })?;

        Ok(Self {
            bytes,
            content_type,
        })
    }
}
