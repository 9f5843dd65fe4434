// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::models::tone::Tone;

/// 生成管线类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineKind {
    /// 广告文案生成
    AdCopy,
    /// 图片描述与话题标签
    Caption,
}

impl PipelineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineKind::AdCopy => "ad_copy",
            PipelineKind::Caption => "caption",
        }
    }

    /// 面向用户的名称，用于错误信息
    pub fn label(&self) -> &'static str {
        match self {
            PipelineKind::AdCopy => "ad copy",
            PipelineKind::Caption => "caption",
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 生成错误类型
///
/// 所有错误都在组件边界处恢复，不会导致进程退出
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// 缺少所需的 API 密钥，在任何网络调用之前返回
    #[error(
        "Inference API key for {} is not configured. Please set STUDIO__{}__API_KEY.",
        .pipeline.label(),
        .pipeline.as_str().to_uppercase()
    )]
    Configuration { pipeline: PipelineKind },

    /// 调用成功但没有产生可用文本（包括清理后为空）
    #[error("Failed to generate {}. Please try again.", .pipeline.label())]
    EmptyResult { pipeline: PipelineKind },

    /// 网络请求失败
    #[error("{}", network_message(.pipeline, .offline))]
    Network {
        pipeline: PipelineKind,
        offline: bool,
        detail: String,
    },

    /// 上游拒绝了凭证
    #[error("Invalid API key. Please check your Hugging Face API key.")]
    InvalidCredential { pipeline: PipelineKind },

    /// 输入未通过校验，不会触达网络层
    #[error("{0}")]
    Validation(String),

    /// 当前标签页已有请求在处理中
    #[error("A {} request is already in progress", .pipeline.label())]
    Busy { pipeline: PipelineKind },
}

fn network_message(pipeline: &PipelineKind, offline: &bool) -> String {
    if *offline {
        "Please check your internet connection and try again.".to_string()
    } else {
        format!("Failed to generate {}. Please try again.", pipeline.label())
    }
}

/// 广告文案生成请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdCopyRequest {
    pub topic: String,
    pub tone: Tone,
}

impl AdCopyRequest {
    pub fn new(topic: impl Into<String>, tone: Tone) -> Self {
        Self {
            topic: topic.into(),
            tone,
        }
    }

    /// 构造发送给文本生成模型的提示词
    pub fn prompt(&self) -> String {
        format!(
            "Write a compelling ad copy in a {} tone for:\n\"{}\".\nKeep it engaging, concise, and well-structured.",
            self.tone, self.topic
        )
    }
}

/// 图片描述请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRequest {
    pub image: Bytes,
    pub content_type: String,
}

impl CaptionRequest {
    pub fn new(image: Bytes, content_type: impl Into<String>) -> Self {
        Self {
            image,
            content_type: content_type.into(),
        }
    }
}

/// 清理后的广告文案，保证非空
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CleanedAdCopy(String);

impl CleanedAdCopy {
    /// 空字符串视为生成失败
    pub fn new(text: String) -> Option<Self> {
        if text.is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CleanedAdCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 图片描述结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionResult {
    pub caption: String,
    pub hashtags: Vec<String>,
}

impl CaptionResult {
    /// 话题标签以单个空格连接，供复制使用
    pub fn hashtag_line(&self) -> String {
        self.hashtags.join(" ")
    }
}
