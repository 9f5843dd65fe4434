// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::domain::models::generation::GenerationError;
use crate::presentation::errors::AppError;

/// JSON 请求体
///
/// 与 [`Json`] 相同，但格式错误、缺少 `Content-Type` 或字段取值非法时
/// 返回 400 和统一的错误响应体
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| GenerationError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}
