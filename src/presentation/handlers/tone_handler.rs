// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Json;

use crate::application::dto::ad_copy_request::ToneDto;
use crate::domain::models::tone::Tone;

/// 语气目录
pub async fn list_tones() -> Json<Vec<ToneDto>> {
    Json(Tone::ALL.iter().copied().map(ToneDto::from).collect())
}
