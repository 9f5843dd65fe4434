// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::ad_copy_request::{AdCopyRequestDto, AdCopyResponseDto};
use crate::application::dto::caption_response::CaptionResponseDto;
use crate::application::dto::session_response::{
    ImagePreviewResponseDto, SessionResponseDto, SwitchTabRequestDto, UiStateResponseDto,
};
use crate::application::use_cases::studio_session::{ClipboardTarget, StudioSessionUseCase};
use crate::presentation::errors::AppError;
use crate::presentation::extractors::image_upload::ImageUpload;
use crate::presentation::extractors::json_body::JsonBody;

type Studio = Extension<Arc<StudioSessionUseCase>>;

pub async fn create_session(
    Extension(studio): Studio,
) -> (StatusCode, Json<SessionResponseDto>) {
    let session = studio.create();
    (StatusCode::CREATED, Json(SessionResponseDto::from(&session)))
}

pub async fn get_session(
    Extension(studio): Studio,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponseDto>, AppError> {
    let session = studio.snapshot(id)?;
    Ok(Json(SessionResponseDto::from(&session)))
}

/// 入口页的"开始使用"
pub async fn enter(
    Extension(studio): Studio,
    Path(id): Path<Uuid>,
) -> Result<Json<UiStateResponseDto>, AppError> {
    let ui = studio.enter(id)?;
    Ok(Json(UiStateResponseDto { success: true, ui }))
}

pub async fn switch_tab(
    Extension(studio): Studio,
    Path(id): Path<Uuid>,
    JsonBody(payload): JsonBody<SwitchTabRequestDto>,
) -> Result<Json<UiStateResponseDto>, AppError> {
    let ui = studio.switch_tab(id, payload.tab)?;
    Ok(Json(UiStateResponseDto { success: true, ui }))
}

pub async fn select_image(
    Extension(studio): Studio,
    Path(id): Path<Uuid>,
    upload: ImageUpload,
) -> Result<Json<ImagePreviewResponseDto>, AppError> {
    let preview = studio.select_image(id, upload.bytes, upload.content_type)?;
    Ok(Json(ImagePreviewResponseDto {
        success: true,
        preview,
    }))
}

pub async fn remove_image(
    Extension(studio): Studio,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    studio.remove_image(id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn generate_caption(
    Extension(studio): Studio,
    Path(id): Path<Uuid>,
) -> Result<Json<CaptionResponseDto>, AppError> {
    let result = studio.generate_caption(id).await?;
    Ok(Json(result.into()))
}

pub async fn generate_ad_copy(
    Extension(studio): Studio,
    Path(id): Path<Uuid>,
    JsonBody(payload): JsonBody<AdCopyRequestDto>,
) -> Result<Json<AdCopyResponseDto>, AppError> {
    let copy = studio
        .generate_ad_copy(id, payload.topic, payload.tone)
        .await?;
    Ok(Json(AdCopyResponseDto {
        success: true,
        copy: copy.into_inner(),
    }))
}

/// 复制当前结果
///
/// 以纯文本返回，由前端写入剪贴板
pub async fn clipboard(
    Extension(studio): Studio,
    Path((id, target)): Path<(Uuid, ClipboardTarget)>,
) -> Result<impl IntoResponse, AppError> {
    let text = studio.clipboard_text(id, target)?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}
