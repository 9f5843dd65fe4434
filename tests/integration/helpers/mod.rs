// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use content_studio::application::use_cases::caption_image::CaptionImageUseCase;
use content_studio::application::use_cases::generate_ad_copy::GenerateAdCopyUseCase;
use content_studio::application::use_cases::studio_session::StudioSessionUseCase;
use content_studio::domain::services::inference_client::{InferenceClient, InferenceError};
use content_studio::infrastructure::session_store::SessionStore;
use content_studio::presentation::routes::{self, AppServices};

/// 记录调用次数的推理客户端
pub struct CountingClient {
    reply: Mutex<Result<Option<String>, String>>,
    calls: AtomicUsize,
    content_types: Mutex<Vec<String>>,
}

impl CountingClient {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(Ok(Some(text.to_string()))),
            calls: AtomicUsize::new(0),
            content_types: Mutex::new(Vec::new()),
        })
    }

    pub fn set_reply(&self, text: &str) {
        *self.reply.lock().unwrap() = Ok(Some(text.to_string()));
    }

    /// 之后的调用以请求失败结束
    pub fn set_failing(&self) {
        *self.reply.lock().unwrap() = Err("503 Service Unavailable".to_string());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn content_types(&self) -> Vec<String> {
        self.content_types.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Result<Option<String>, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .lock()
            .unwrap()
            .clone()
            .map_err(InferenceError::RequestFailed)
    }
}

#[async_trait]
impl InferenceClient for CountingClient {
    async fn generate_text(&self, _prompt: &str) -> Result<Option<String>, InferenceError> {
        self.next_reply()
    }

    async fn image_to_text(
        &self,
        _image: &[u8],
        content_type: &str,
    ) -> Result<Option<String>, InferenceError> {
        self.content_types
            .lock()
            .unwrap()
            .push(content_type.to_string());
        self.next_reply()
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub ad_copy_client: Arc<CountingClient>,
    pub caption_client: Arc<CountingClient>,
}

pub const MAX_IMAGE_BYTES: u64 = 1024;

pub fn create_test_app() -> TestApp {
    let ad_copy_client = CountingClient::replying(
        "**Headline:** Buy Now! Body Copy: Great deal. Call to Action: Act fast!",
    );
    let caption_client = CountingClient::replying("a golden retriever running on the beach");

    let ad_copy = Arc::new(GenerateAdCopyUseCase::new(ad_copy_client.clone()));
    let caption = Arc::new(CaptionImageUseCase::new(
        caption_client.clone(),
        MAX_IMAGE_BYTES,
    ));
    let store = Arc::new(SessionStore::new(chrono::Duration::zero()));
    let studio = Arc::new(StudioSessionUseCase::new(
        store,
        ad_copy.clone(),
        caption.clone(),
    ));

    let app = routes::build_app(AppServices {
        ad_copy,
        caption,
        studio,
    });
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        ad_copy_client,
        caption_client,
    }
}
