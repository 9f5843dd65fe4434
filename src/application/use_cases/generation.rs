// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::time::Instant;
use tracing::{info, warn};

use crate::domain::models::generation::{GenerationError, PipelineKind};
use crate::infrastructure::metrics::{record_generation, record_rejected};

/// 生成用例
///
/// 两条管线共用的抽象：按请求类型和变换函数参数化。
/// 执行顺序固定为 校验 -> 调用推理服务 -> 变换输出，校验失败时不会发起网络请求。
#[async_trait]
pub trait GenerationUseCase: Send + Sync {
    type Request: Send + Sync;
    type Output: Send;

    fn pipeline(&self) -> PipelineKind;

    /// 校验请求，不访问网络
    fn validate(&self, request: &Self::Request) -> Result<(), GenerationError>;

    /// 调用推理服务并变换输出
    async fn generate(&self, request: &Self::Request) -> Result<Self::Output, GenerationError>;

    /// 调用 [`generate`](Self::generate) 并记录日志和指标
    async fn produce(&self, request: &Self::Request) -> Result<Self::Output, GenerationError> {
        let pipeline = self.pipeline();
        let started = Instant::now();
        let outcome = self.generate(request).await;
        let elapsed = started.elapsed();

        match &outcome {
            Ok(_) => {
                info!(pipeline = %pipeline, elapsed_ms = elapsed.as_millis() as u64, "Generation succeeded");
            }
            Err(e) => {
                warn!(pipeline = %pipeline, elapsed_ms = elapsed.as_millis() as u64, error = ?e, "Generation failed");
            }
        }
        record_generation(pipeline, outcome_label(&outcome), elapsed);

        outcome
    }

    /// 校验后执行
    async fn execute(&self, request: &Self::Request) -> Result<Self::Output, GenerationError> {
        if let Err(e) = self.validate(request) {
            record_rejected(self.pipeline(), "validation");
            return Err(e);
        }
        self.produce(request).await
    }
}

/// 指标中使用的结果标签
pub fn outcome_label<T>(outcome: &Result<T, GenerationError>) -> &'static str {
    match outcome {
        Ok(_) => "success",
        Err(GenerationError::Configuration { .. }) => "configuration",
        Err(GenerationError::EmptyResult { .. }) => "empty_result",
        Err(GenerationError::Network { offline: true, .. }) => "offline",
        Err(GenerationError::Network { .. }) => "network",
        Err(GenerationError::InvalidCredential { .. }) => "invalid_credential",
        Err(GenerationError::Validation(_)) => "validation",
        Err(GenerationError::Busy { .. }) => "busy",
    }
}
