// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::caption_image::CaptionImageUseCase;
use crate::application::use_cases::generate_ad_copy::GenerateAdCopyUseCase;
use crate::application::use_cases::studio_session::StudioSessionUseCase;
use crate::presentation::handlers::{generation_handler, session_handler, tone_handler};

/// 路由依赖的用例集合
#[derive(Clone)]
pub struct AppServices {
    pub ad_copy: Arc<GenerateAdCopyUseCase>,
    pub caption: Arc<CaptionImageUseCase>,
    pub studio: Arc<StudioSessionUseCase>,
}

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由，尚未注入依赖
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/v1/tones", get(tone_handler::list_tones));

    let generation_routes = Router::new()
        .route("/v1/ad-copy", post(generation_handler::generate_ad_copy))
        .route("/v1/caption", post(generation_handler::caption_image));

    let session_routes = Router::new()
        .route("/v1/sessions", post(session_handler::create_session))
        .route("/v1/sessions/{id}", get(session_handler::get_session))
        .route("/v1/sessions/{id}/enter", post(session_handler::enter))
        .route("/v1/sessions/{id}/tab", put(session_handler::switch_tab))
        .route(
            "/v1/sessions/{id}/image",
            put(session_handler::select_image).delete(session_handler::remove_image),
        )
        .route(
            "/v1/sessions/{id}/caption",
            post(session_handler::generate_caption),
        )
        .route(
            "/v1/sessions/{id}/ad-copy",
            post(session_handler::generate_ad_copy),
        )
        .route(
            "/v1/sessions/{id}/clipboard/{target}",
            get(session_handler::clipboard),
        );

    Router::new()
        .merge(public_routes)
        .merge(generation_routes)
        .merge(session_routes)
}

/// 组装完整应用
///
/// 请求体上限为图片上限的两倍，超出图片上限但未超出请求体上限的上传
/// 由校验器给出明确的错误信息
pub fn build_app(services: AppServices) -> Router {
    let body_limit = usize::try_from(services.caption.max_image_bytes())
        .unwrap_or(usize::MAX)
        .saturating_mul(2);

    routes()
        .layer(Extension(services.ad_copy))
        .layer(Extension(services.caption))
        .layer(Extension(services.studio))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
