// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::generation::CaptionResult;
use crate::domain::models::session::{StudioSession, Tab, UiState};
use crate::domain::models::tone::Tone;

/// 会话快照数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct SessionResponseDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub ui: UiState,
    pub image: ImageTabDto,
    pub copy: CopyTabDto,
}

/// 图片标签页快照
#[derive(Debug, Deserialize, Serialize)]
pub struct ImageTabDto {
    pub has_image: bool,
    pub content_type: Option<String>,
    pub size: Option<usize>,
    pub loading: bool,
    pub result: Option<CaptionResult>,
    pub error: Option<String>,
}

/// 文案标签页快照
#[derive(Debug, Deserialize, Serialize)]
pub struct CopyTabDto {
    pub topic: String,
    pub tone: Tone,
    pub loading: bool,
    pub result: Option<String>,
    pub error: Option<String>,
}

impl From<&StudioSession> for SessionResponseDto {
    fn from(session: &StudioSession) -> Self {
        let selected = session.image.selected.as_ref();
        Self {
            id: session.id,
            created_at: session.created_at,
            ui: session.state(),
            image: ImageTabDto {
                has_image: selected.is_some(),
                content_type: selected.map(|image| image.content_type.clone()),
                size: selected.map(|image| image.bytes.len()),
                loading: session.image.pipeline.is_loading(),
                result: session.image.pipeline.result().cloned(),
                error: session.image.pipeline.error().map(str::to_string),
            },
            copy: CopyTabDto {
                topic: session.copy.topic.clone(),
                tone: session.copy.tone,
                loading: session.copy.pipeline.is_loading(),
                result: session
                    .copy
                    .pipeline
                    .result()
                    .map(|copy| copy.as_str().to_string()),
                error: session.copy.pipeline.error().map(str::to_string),
            },
        }
    }
}

/// 切换标签页请求
#[derive(Debug, Deserialize, Serialize)]
pub struct SwitchTabRequestDto {
    pub tab: Tab,
}

/// 界面状态响应
#[derive(Debug, Deserialize, Serialize)]
pub struct UiStateResponseDto {
    pub success: bool,
    pub ui: UiState,
}

/// 图片预览响应
#[derive(Debug, Deserialize, Serialize)]
pub struct ImagePreviewResponseDto {
    pub success: bool,
    /// data URL 形式的预览
    pub preview: String,
}
