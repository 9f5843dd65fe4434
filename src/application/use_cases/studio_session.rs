// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::application::use_cases::caption_image::CaptionImageUseCase;
use crate::application::use_cases::generate_ad_copy::GenerateAdCopyUseCase;
use crate::application::use_cases::generation::GenerationUseCase;
use crate::domain::models::generation::{
    AdCopyRequest, CaptionRequest, CaptionResult, CleanedAdCopy, GenerationError,
};
use crate::domain::models::session::{
    PipelineState, SelectedImage, SessionError, StudioSession, Tab, UiState,
};
use crate::domain::models::tone::Tone;
use crate::infrastructure::session_store::SessionStore;
use crate::utils::validators;

/// 会话操作错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StudioError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Nothing to copy for {0:?}")]
    NothingToCopy(ClipboardTarget),
}

/// 复制目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardTarget {
    /// 图片描述
    Caption,
    /// 以空格连接的话题标签
    Hashtags,
    /// 广告文案
    Copy,
}

fn caption_slot(session: &mut StudioSession) -> &mut PipelineState<CaptionResult> {
    &mut session.image.pipeline
}

fn copy_slot(session: &mut StudioSession) -> &mut PipelineState<CleanedAdCopy> {
    &mut session.copy.pipeline
}

/// 工作室会话用例
///
/// 每个标签页同一时间最多一个进行中的请求。切换标签页不会取消进行中的请求，
/// 请求结果写回发起它的标签页。
pub struct StudioSessionUseCase {
    store: Arc<SessionStore>,
    ad_copy: Arc<GenerateAdCopyUseCase>,
    caption: Arc<CaptionImageUseCase>,
}

impl StudioSessionUseCase {
    pub fn new(
        store: Arc<SessionStore>,
        ad_copy: Arc<GenerateAdCopyUseCase>,
        caption: Arc<CaptionImageUseCase>,
    ) -> Self {
        Self {
            store,
            ad_copy,
            caption,
        }
    }

    pub fn create(&self) -> StudioSession {
        let session = self.store.create();
        info!(session_id = %session.id, "Studio session started");
        session
    }

    pub fn snapshot(&self, id: Uuid) -> Result<StudioSession, StudioError> {
        Ok(self.store.with_session(id, |session| session.clone())?)
    }

    /// 离开入口页
    pub fn enter(&self, id: Uuid) -> Result<UiState, StudioError> {
        Ok(self.store.with_session(id, |session| session.enter())??)
    }

    pub fn switch_tab(&self, id: Uuid, tab: Tab) -> Result<UiState, StudioError> {
        Ok(self
            .store
            .with_session(id, |session| session.switch_tab(tab))??)
    }

    /// 选择图片
    ///
    /// 校验失败时在图片标签页上记录错误，保留之前选择的图片
    ///
    /// # 返回值
    ///
    /// 图片预览用的 data URL
    pub fn select_image(
        &self,
        id: Uuid,
        image: Bytes,
        content_type: String,
    ) -> Result<String, StudioError> {
        let max_bytes = self.caption.max_image_bytes();
        self.store.with_session(id, |session| -> Result<String, StudioError> {
            session.ensure_tab_shown(Tab::Image)?;
            if let Err(e) = validators::validate_image(&image, max_bytes) {
                session.image.pipeline.fail(&e);
                return Err(e.into());
            }
            let preview = validators::to_data_url(&image, &content_type);
            session.select_image(SelectedImage {
                bytes: image,
                content_type,
            });
            Ok(preview)
        })?
    }

    pub fn remove_image(&self, id: Uuid) -> Result<(), StudioError> {
        self.store.with_session(id, |session| -> Result<(), StudioError> {
            session.ensure_tab_shown(Tab::Image)?;
            session.remove_image();
            Ok(())
        })?
    }

    /// 为已选择的图片生成描述和话题标签
    pub async fn generate_caption(&self, id: Uuid) -> Result<CaptionResult, StudioError> {
        self.run_in_tab(
            id,
            Tab::Image,
            &self.caption,
            |session| match &session.image.selected {
                Some(image) => Ok(CaptionRequest::new(
                    image.bytes.clone(),
                    image.content_type.clone(),
                )),
                None => Err(GenerationError::Validation("No image selected".to_string())),
            },
            caption_slot,
        )
        .await
    }

    /// 生成广告文案，主题和语气保存在文案标签页中
    pub async fn generate_ad_copy(
        &self,
        id: Uuid,
        topic: String,
        tone: Tone,
    ) -> Result<CleanedAdCopy, StudioError> {
        self.run_in_tab(
            id,
            Tab::Copy,
            &self.ad_copy,
            |session| {
                session.copy.topic = topic.clone();
                session.copy.tone = tone;
                Ok(AdCopyRequest::new(topic, tone))
            },
            copy_slot,
        )
        .await
    }

    /// 当前结果的复制文本
    pub fn clipboard_text(&self, id: Uuid, target: ClipboardTarget) -> Result<String, StudioError> {
        let text = self.store.with_session(id, |session| match target {
            ClipboardTarget::Caption => session
                .image
                .pipeline
                .result()
                .map(|result| result.caption.clone()),
            ClipboardTarget::Hashtags => session
                .image
                .pipeline
                .result()
                .map(CaptionResult::hashtag_line),
            ClipboardTarget::Copy => session
                .copy
                .pipeline
                .result()
                .map(|copy| copy.as_str().to_string()),
        })?;
        text.ok_or(StudioError::NothingToCopy(target))
    }

    /// 在标签页上执行一次生成
    ///
    /// 1. 持有会话锁：检查标签页可见、是否忙碌，构造并校验请求，设置加载标记
    /// 2. 释放锁后在独立任务中调用推理服务并写回结果
    /// 3. 调用方只等待该任务；调用方被丢弃时任务照常完成并清除加载标记
    ///
    /// 失败只记录错误，保留之前的结果
    async fn run_in_tab<U, B>(
        &self,
        id: Uuid,
        tab: Tab,
        use_case: &Arc<U>,
        build: B,
        slot: fn(&mut StudioSession) -> &mut PipelineState<U::Output>,
    ) -> Result<U::Output, StudioError>
    where
        U: GenerationUseCase + 'static,
        U::Request: 'static,
        U::Output: Clone + 'static,
        B: FnOnce(&mut StudioSession) -> Result<U::Request, GenerationError>,
    {
        let request = self.store.with_session(id, |session| -> Result<U::Request, StudioError> {
            session.ensure_tab_shown(tab)?;
            if slot(session).is_loading() {
                return Err(StudioError::from(GenerationError::Busy {
                    pipeline: tab.pipeline(),
                }));
            }

            let request = build(session).and_then(|request| {
                use_case.validate(&request)?;
                Ok(request)
            });
            match request {
                Ok(request) => {
                    slot(session).begin()?;
                    Ok(request)
                }
                Err(e) => {
                    slot(session).fail(&e);
                    Err(e.into())
                }
            }
        })??;

        let store = self.store.clone();
        let use_case = Arc::clone(use_case);
        let task = tokio::spawn(async move {
            let outcome = use_case.produce(&request).await;
            write_back(&store, id, tab, slot, outcome.clone());
            outcome
        });

        match task.await {
            Ok(outcome) => Ok(outcome?),
            Err(e) => {
                error!(session_id = %id, tab = ?tab, "Generation task aborted: {}", e);
                let err = GenerationError::EmptyResult {
                    pipeline: tab.pipeline(),
                };
                write_back(&self.store, id, tab, slot, Err(err.clone()));
                Err(err.into())
            }
        }
    }
}

/// 将生成结果写回发起请求的标签页
fn write_back<T>(
    store: &SessionStore,
    id: Uuid,
    tab: Tab,
    slot: fn(&mut StudioSession) -> &mut PipelineState<T>,
    outcome: Result<T, GenerationError>,
) {
    if store
        .with_session(id, |session| slot(session).finish(outcome))
        .is_err()
    {
        warn!(session_id = %id, tab = ?tab, "Session disappeared before generation finished");
    }
}

#[cfg(test)]
#[path = "studio_session_test.rs"]
mod tests;
