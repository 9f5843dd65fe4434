// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::tone::Tone;

/// 广告文案请求数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct AdCopyRequestDto {
    /// 产品、服务或主题
    #[serde(default)]
    pub topic: String,
    /// 语气，缺省为 professional
    #[serde(default)]
    pub tone: Tone,
}

/// 广告文案响应数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct AdCopyResponseDto {
    pub success: bool,
    /// 清理后的文案
    pub copy: String,
}

/// 语气选项数据传输对象
#[derive(Debug, Deserialize, Serialize)]
pub struct ToneDto {
    pub id: Tone,
    pub name: String,
    pub description: String,
}

impl From<Tone> for ToneDto {
    fn from(tone: Tone) -> Self {
        Self {
            id: tone,
            name: tone.display_name().to_string(),
            description: tone.description().to_string(),
        }
    }
}
