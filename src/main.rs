// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

use content_studio::application::use_cases::caption_image::CaptionImageUseCase;
use content_studio::application::use_cases::generate_ad_copy::GenerateAdCopyUseCase;
use content_studio::application::use_cases::studio_session::StudioSessionUseCase;
use content_studio::config::settings::Settings;
use content_studio::infrastructure::metrics;
use content_studio::infrastructure::services::hugging_face_client::HuggingFaceClient;
use content_studio::infrastructure::session_store::SessionStore;
use content_studio::presentation::routes::{self, AppServices};
use content_studio::utils::telemetry;
use content_studio::workers::SessionReaper;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting content-studio...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    metrics::init_metrics(&settings.metrics);

    if settings.ad_copy.credential().is_none() {
        warn!("Ad copy API key is not configured, ad copy requests will be rejected");
    }
    if settings.caption.credential().is_none() {
        warn!("Caption API key is not configured, caption requests will be rejected");
    }

    // 3. Inference clients
    let ad_copy_client = Arc::new(HuggingFaceClient::new(&settings.ad_copy)?);
    let caption_client = Arc::new(HuggingFaceClient::new(&settings.caption)?);
    info!(
        ad_copy = %ad_copy_client.endpoint(),
        caption = %caption_client.endpoint(),
        "Inference clients initialized"
    );

    // 4. Use cases
    let ad_copy = Arc::new(GenerateAdCopyUseCase::new(ad_copy_client));
    let caption = Arc::new(CaptionImageUseCase::new(
        caption_client,
        settings.upload.max_image_bytes,
    ));

    let splash_delay = chrono::Duration::from_std(Duration::from_millis(
        settings.session.splash_delay_ms,
    ))?;
    let store = Arc::new(SessionStore::new(splash_delay));
    let studio = Arc::new(StudioSessionUseCase::new(
        store.clone(),
        ad_copy.clone(),
        caption.clone(),
    ));

    // 5. Start workers
    let _reaper = SessionReaper::from_settings(store, &settings.session).start();

    // 6. Start HTTP server
    let app = routes::build_app(AppServices {
        ad_copy,
        caption,
        studio,
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
