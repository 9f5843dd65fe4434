// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::ad_copy_request::{AdCopyRequestDto, AdCopyResponseDto};
use crate::application::dto::caption_response::CaptionResponseDto;
use crate::application::use_cases::caption_image::CaptionImageUseCase;
use crate::application::use_cases::generate_ad_copy::GenerateAdCopyUseCase;
use crate::application::use_cases::generation::GenerationUseCase;
use crate::domain::models::generation::{AdCopyRequest, CaptionRequest};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::image_upload::ImageUpload;
use crate::presentation::extractors::json_body::JsonBody;

/// 生成广告文案
///
/// 不依赖会话的一次性调用
pub async fn generate_ad_copy(
    Extension(use_case): Extension<Arc<GenerateAdCopyUseCase>>,
    JsonBody(payload): JsonBody<AdCopyRequestDto>,
) -> Result<Json<AdCopyResponseDto>, AppError> {
    let request = AdCopyRequest::new(payload.topic, payload.tone);
    let copy = use_case.execute(&request).await?;

    Ok(Json(AdCopyResponseDto {
        success: true,
        copy: copy.into_inner(),
    }))
}

/// 为请求体中的图片生成描述和话题标签
pub async fn caption_image(
    Extension(use_case): Extension<Arc<CaptionImageUseCase>>,
    upload: ImageUpload,
) -> Result<Json<CaptionResponseDto>, AppError> {
    let request = CaptionRequest::new(upload.bytes, upload.content_type);
    let result = use_case.execute(&request).await?;

    Ok(Json(result.into()))
}
