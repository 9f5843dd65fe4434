// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::generation::CaptionResult;

/// 图片描述响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct CaptionResponseDto {
    pub success: bool,
    pub caption: String,
    pub hashtags: Vec<String>,
}

impl From<CaptionResult> for CaptionResponseDto {
    fn from(result: CaptionResult) -> Self {
        Self {
            success: true,
            caption: result.caption,
            hashtags: result.hashtags,
        }
    }
}
