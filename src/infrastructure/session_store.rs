// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::domain::models::session::{SessionError, StudioSession};

/// 内存会话存储
///
/// 会话只存在于进程内存中，不做持久化。闭包在持有条目锁时执行，
/// 调用方不得在闭包内等待异步操作。
pub struct SessionStore {
    sessions: DashMap<Uuid, StudioSession>,
    splash_delay: Duration,
}

impl SessionStore {
    pub fn new(splash_delay: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            splash_delay,
        }
    }

    /// 创建新会话，初始状态为启动画面
    pub fn create(&self) -> StudioSession {
        let session = StudioSession::new(self.splash_delay);
        self.sessions.insert(session.id, session.clone());
        debug!(session_id = %session.id, "Session created");
        session
    }

    /// 在会话上执行闭包
    ///
    /// 执行前先根据当前时间推进启动画面状态
    pub fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut StudioSession) -> R,
    ) -> Result<R, SessionError> {
        let mut entry = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound(id))?;
        entry.refresh(Utc::now());
        Ok(f(entry.value_mut()))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// 清理空闲会话，正在处理请求的会话不会被清理
    ///
    /// # 返回值
    ///
    /// 被清理的会话数量
    pub fn purge_idle(&self, cutoff: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| !session.is_idle_since(cutoff));
        before.saturating_sub(self.sessions.len())
    }
}
