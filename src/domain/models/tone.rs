// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::models::generation::GenerationError;

/// 广告文案语气
///
/// 用户可选择的四种固定文案风格预设。反序列化经由 [`FromStr`]，不区分大小写
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Humorous,
    Persuasive,
}

impl Tone {
    /// 全部语气，按展示顺序排列
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Humorous,
        Tone::Persuasive,
    ];

    /// 语气标识符，同时用于提示词
    pub fn id(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Humorous => "humorous",
            Tone::Persuasive => "persuasive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Humorous => "Humorous",
            Tone::Persuasive => "Persuasive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tone::Professional => "Formal and business-oriented tone",
            Tone::Casual => "Friendly and conversational style",
            Tone::Humorous => "Light-hearted and entertaining approach",
            Tone::Persuasive => "Compelling and action-oriented messaging",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tone {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GenerationError::Validation(format!("Unknown tone: {}", s)))
    }
}

impl TryFrom<String> for Tone {
    type Error = GenerationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
