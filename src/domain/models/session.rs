// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bytes::Bytes;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::generation::{
    CaptionResult, CleanedAdCopy, GenerationError, PipelineKind,
};
use crate::domain::models::tone::Tone;

/// 标签页
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// 图片描述
    Image,
    /// 广告文案
    Copy,
}

impl Tab {
    pub fn pipeline(&self) -> PipelineKind {
        match self {
            Tab::Image => PipelineKind::Caption,
            Tab::Copy => PipelineKind::AdCopy,
        }
    }
}

/// 界面状态
///
/// `Loading -> Gated -> Active{tab}`，其中 `Loading -> Gated` 由时间驱动
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UiState {
    /// 启动画面
    Loading,
    /// 入口页，等待用户点击开始
    Gated,
    /// 工作区
    Active { tab: Tab },
}

/// 会话错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid state transition: cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

impl UiState {
    fn name(&self) -> &'static str {
        match self {
            UiState::Loading => "loading",
            UiState::Gated => "gated",
            UiState::Active { .. } => "active",
        }
    }
}

/// 单个标签页的生成状态
///
/// 两个标签页共用同一套状态形状：加载标记、最近一次成功结果、最近一次错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineState<T> {
    pipeline: PipelineKind,
    loading: bool,
    result: Option<T>,
    error: Option<String>,
}

impl<T> PipelineState<T> {
    pub fn new(pipeline: PipelineKind) -> Self {
        Self {
            pipeline,
            loading: false,
            result: None,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 开始一次请求
    ///
    /// 已有请求在处理中时拒绝，并且不改动任何状态
    pub fn begin(&mut self) -> Result<(), GenerationError> {
        if self.loading {
            return Err(GenerationError::Busy {
                pipeline: self.pipeline,
            });
        }
        self.loading = true;
        self.error = None;
        Ok(())
    }

    /// 结束请求并记录结果
    ///
    /// 失败只设置错误信息，保留之前成功的结果
    pub fn finish(&mut self, outcome: Result<T, GenerationError>) {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// 记录一个未进入网络层的错误，例如输入校验失败
    pub fn fail(&mut self, error: &GenerationError) {
        self.error = Some(error.to_string());
    }

    pub fn reset(&mut self) {
        self.result = None;
        self.error = None;
    }
}

/// 用户选择的图片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub bytes: Bytes,
    pub content_type: String,
}

/// 图片描述标签页
#[derive(Debug, Clone)]
pub struct ImageTab {
    pub selected: Option<SelectedImage>,
    pub pipeline: PipelineState<CaptionResult>,
}

/// 广告文案标签页
#[derive(Debug, Clone)]
pub struct CopyTab {
    pub topic: String,
    pub tone: Tone,
    pub pipeline: PipelineState<CleanedAdCopy>,
}

/// 工作室会话
///
/// 持有界面状态以及两个互相独立的标签页状态，切换标签页不会清除另一个标签页的结果
#[derive(Debug, Clone)]
pub struct StudioSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
    splash_delay: Duration,
    state: UiState,
    pub image: ImageTab,
    pub copy: CopyTab,
}

impl StudioSession {
    pub fn new(splash_delay: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            last_seen_at: now,
            splash_delay,
            state: UiState::Loading,
            image: ImageTab {
                selected: None,
                pipeline: PipelineState::new(PipelineKind::Caption),
            },
            copy: CopyTab {
                topic: String::new(),
                tone: Tone::default(),
                pipeline: PipelineState::new(PipelineKind::AdCopy),
            },
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// 根据当前时间推进启动画面状态
    pub fn refresh(&mut self, now: DateTime<Utc>) -> UiState {
        self.last_seen_at = now;
        if self.state == UiState::Loading && now >= self.created_at + self.splash_delay {
            self.state = UiState::Gated;
        }
        self.state
    }

    /// 离开入口页进入工作区，默认显示图片标签页
    pub fn enter(&mut self) -> Result<UiState, SessionError> {
        match self.state {
            UiState::Gated => {
                self.state = UiState::Active { tab: Tab::Image };
                Ok(self.state)
            }
            UiState::Active { .. } => Ok(self.state),
            UiState::Loading => Err(SessionError::InvalidTransition {
                action: "enter",
                state: self.state.name(),
            }),
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) -> Result<UiState, SessionError> {
        match self.state {
            UiState::Active { .. } => {
                self.state = UiState::Active { tab };
                Ok(self.state)
            }
            _ => Err(SessionError::InvalidTransition {
                action: "switch tab",
                state: self.state.name(),
            }),
        }
    }

    /// 只有当前显示的标签页可以提交生成请求
    pub fn ensure_tab_shown(&self, tab: Tab) -> Result<(), SessionError> {
        match self.state {
            UiState::Active { tab: shown } if shown == tab => Ok(()),
            UiState::Active { .. } => Err(SessionError::InvalidTransition {
                action: "generate on a hidden tab",
                state: self.state.name(),
            }),
            _ => Err(SessionError::InvalidTransition {
                action: "generate",
                state: self.state.name(),
            }),
        }
    }

    pub fn select_image(&mut self, image: SelectedImage) {
        self.image.selected = Some(image);
        self.image.pipeline.error = None;
    }

    /// 移除图片时同时清除结果和错误
    pub fn remove_image(&mut self) {
        self.image.selected = None;
        self.image.pipeline.reset();
    }

    pub fn is_idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_seen_at < cutoff
            && !self.image.pipeline.is_loading()
            && !self.copy.pipeline.is_loading()
    }
}
