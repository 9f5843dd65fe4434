// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::studio_session::StudioError;
use crate::domain::models::generation::GenerationError;
use crate::domain::models::session::SessionError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn status(&self) -> StatusCode {
        if let Some(e) = self.0.downcast_ref::<GenerationError>() {
            return generation_status(e);
        }
        if let Some(e) = self.0.downcast_ref::<SessionError>() {
            return session_status(e);
        }
        match self.0.downcast_ref::<StudioError>() {
            Some(StudioError::Generation(e)) => generation_status(e),
            Some(StudioError::Session(e)) => session_status(e),
            Some(StudioError::NothingToCopy(_)) => StatusCode::NOT_FOUND,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn generation_status(error: &GenerationError) -> StatusCode {
    match error {
        GenerationError::Validation(_) => StatusCode::BAD_REQUEST,
        GenerationError::Busy { .. } => StatusCode::CONFLICT,
        GenerationError::Configuration { .. } => StatusCode::SERVICE_UNAVAILABLE,
        GenerationError::EmptyResult { .. }
        | GenerationError::Network { .. }
        | GenerationError::InvalidCredential { .. } => StatusCode::BAD_GATEWAY,
    }
}

fn session_status(error: &SessionError) -> StatusCode {
    match error {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
        SessionError::InvalidTransition { .. } => StatusCode::CONFLICT,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        }

        let body = Json(json!({ "success": false, "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
