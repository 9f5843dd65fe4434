// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::use_cases::generation::GenerationUseCase;
use crate::domain::models::generation::{
    CaptionRequest, CaptionResult, GenerationError, PipelineKind,
};
use crate::domain::services::hashtag_extractor;
use crate::domain::services::inference_client::InferenceClient;
use crate::utils::validators;

/// 图片描述用例
///
/// 图片转文本后从描述中提取话题标签
pub struct CaptionImageUseCase {
    client: Arc<dyn InferenceClient>,
    max_image_bytes: u64,
}

impl CaptionImageUseCase {
    pub fn new(client: Arc<dyn InferenceClient>, max_image_bytes: u64) -> Self {
        Self {
            client,
            max_image_bytes,
        }
    }

    pub fn max_image_bytes(&self) -> u64 {
        self.max_image_bytes
    }
}

#[async_trait]
impl GenerationUseCase for CaptionImageUseCase {
    type Request = CaptionRequest;
    type Output = CaptionResult;

    fn pipeline(&self) -> PipelineKind {
        PipelineKind::Caption
    }

    fn validate(&self, request: &CaptionRequest) -> Result<(), GenerationError> {
        validators::validate_image(&request.image, self.max_image_bytes)
    }

    async fn generate(&self, request: &CaptionRequest) -> Result<CaptionResult, GenerationError> {
        let pipeline = self.pipeline();
        let caption = self
            .client
            .image_to_text(&request.image, &request.content_type)
            .await
            .map_err(|e| e.into_generation_error(pipeline))?
            .ok_or(GenerationError::EmptyResult { pipeline })?;

        let hashtags = hashtag_extractor::extract(&caption);
        Ok(CaptionResult { caption, hashtags })
    }
}
