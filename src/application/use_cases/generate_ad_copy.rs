// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::application::use_cases::generation::GenerationUseCase;
use crate::domain::models::generation::{
    AdCopyRequest, CleanedAdCopy, GenerationError, PipelineKind,
};
use crate::domain::services::ad_copy_cleaner;
use crate::domain::services::inference_client::InferenceClient;
use crate::utils::validators;

/// 广告文案生成用例
pub struct GenerateAdCopyUseCase {
    client: Arc<dyn InferenceClient>,
}

impl GenerateAdCopyUseCase {
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GenerationUseCase for GenerateAdCopyUseCase {
    type Request = AdCopyRequest;
    type Output = CleanedAdCopy;

    fn pipeline(&self) -> PipelineKind {
        PipelineKind::AdCopy
    }

    fn validate(&self, request: &AdCopyRequest) -> Result<(), GenerationError> {
        validators::validate_topic(&request.topic).map(|_| ())
    }

    async fn generate(&self, request: &AdCopyRequest) -> Result<CleanedAdCopy, GenerationError> {
        let pipeline = self.pipeline();
        let raw = self
            .client
            .generate_text(&request.prompt())
            .await
            .map_err(|e| e.into_generation_error(pipeline))?
            .ok_or(GenerationError::EmptyResult { pipeline })?;

        let cleaned = ad_copy_cleaner::clean(&raw);
        debug!(
            raw_len = raw.len(),
            cleaned_len = cleaned.len(),
            tone = %request.tone,
            "Ad copy cleaned"
        );

        CleanedAdCopy::new(cleaned).ok_or(GenerationError::EmptyResult { pipeline })
    }
}
