// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::settings::SessionSettings;
use crate::infrastructure::session_store::SessionStore;

/// 空闲会话清理工作器
///
/// 定期移除长时间没有访问的会话
pub struct SessionReaper {
    store: Arc<SessionStore>,
    interval: Duration,
    idle_timeout: chrono::Duration,
}

impl SessionReaper {
    pub fn new(store: Arc<SessionStore>, interval: Duration, idle_timeout: Duration) -> Self {
        Self {
            store,
            interval,
            idle_timeout: chrono::Duration::from_std(idle_timeout)
                .unwrap_or(chrono::Duration::MAX),
        }
    }

    pub fn from_settings(store: Arc<SessionStore>, settings: &SessionSettings) -> Self {
        Self::new(
            store,
            Duration::from_secs(settings.reap_interval_secs.max(1)),
            Duration::from_secs(settings.idle_timeout_secs),
        )
    }

    /// 运行工作器
    pub async fn run(&self) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Session reaper started"
        );

        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;
            self.reap_once();
        }
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// 执行一次清理
    ///
    /// # 返回值
    ///
    /// 被清理的会话数量
    pub fn reap_once(&self) -> usize {
        let cutoff = Utc::now()
            .checked_sub_signed(self.idle_timeout)
            .unwrap_or(chrono::DateTime::<Utc>::MIN_UTC);
        let purged = self.store.purge_idle(cutoff);
        if purged > 0 {
            info!("Purged {} idle sessions", purged);
        } else {
            debug!(remaining = self.store.len(), "No idle sessions to purge");
        }
        purged
    }
}
