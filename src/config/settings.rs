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

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// 环境变量前缀，例如 `STUDIO__AD_COPY__API_KEY`
pub const ENV_PREFIX: &str = "STUDIO";

/// 选择环境配置文件的变量名
pub const APP_ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// 图片大小上限 10 MiB
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// 应用程序配置设置
///
/// 包含服务器、两个推理管线、上传、启动画面和指标等配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 广告文案推理配置
    pub ad_copy: InferenceSettings,
    /// 图片描述推理配置
    pub caption: InferenceSettings,
    /// 上传配置
    pub upload: UploadSettings,
    /// 会话配置
    pub session: SessionSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 推理服务配置设置
///
/// 两条管线各自持有独立命名的密钥
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceSettings {
    /// API密钥，缺失时生成请求直接返回配置错误
    pub api_key: Option<String>,
    /// 模型标识
    pub model: String,
    /// 推理服务基础URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 上传配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    /// 图片大小上限（字节）
    pub max_image_bytes: u64,
}

/// 会话配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// 启动画面持续时间（毫秒）
    pub splash_delay_ms: u64,
    /// 空闲会话过期时间（秒）
    pub idle_timeout_secs: u64,
    /// 过期会话清理间隔（秒）
    pub reap_interval_secs: u64,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl InferenceSettings {
    /// 密钥为空字符串时视为未配置
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 以及 `STUDIO__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Path::new("config"), None)
    }

    /// 从指定目录加载配置
    ///
    /// # 参数
    ///
    /// * `config_dir` - 配置文件目录
    /// * `env_source` - 替代进程环境变量的来源，测试中使用；给定时 `APP_ENVIRONMENT` 也从中读取
    pub fn load(
        config_dir: &Path,
        env_source: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        // An injected source replaces the process environment entirely
        let env = match &env_source {
            Some(source) => source.get(APP_ENVIRONMENT_VAR).cloned(),
            None => std::env::var(APP_ENVIRONMENT_VAR).ok(),
        }
        .unwrap_or_else(|| "default".to_string());
        let default_file = config_dir.join("default");
        let env_file = config_dir.join(&env);

        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default inference settings
            .set_default("ad_copy.model", "google/gemma-2-2b-it")?
            .set_default("ad_copy.base_url", "https://api-inference.huggingface.co")?
            .set_default("ad_copy.timeout_secs", 120)?
            .set_default("caption.model", "Salesforce/blip-image-captioning-base")?
            .set_default("caption.base_url", "https://api-inference.huggingface.co")?
            .set_default("caption.timeout_secs", 120)?
            // Default upload settings
            .set_default("upload.max_image_bytes", DEFAULT_MAX_IMAGE_BYTES)?
            // Default session settings
            .set_default("session.splash_delay_ms", 2000)?
            .set_default("session.idle_timeout_secs", 3600)?
            .set_default("session.reap_interval_secs", 300)?
            // Default metrics settings
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")?
            .add_source(File::from(default_file).required(false))
            .add_source(File::from(env_file).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(env_source),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 校验配置
    ///
    /// 推理服务基础URL必须可解析，超时时间必须大于0
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, inference) in [("ad_copy", &self.ad_copy), ("caption", &self.caption)] {
            Url::parse(&inference.base_url).map_err(|e| {
                ConfigError::Message(format!("{}.base_url is invalid: {}", name, e))
            })?;
            if inference.model.trim().is_empty() {
                return Err(ConfigError::Message(format!(
                    "{}.model cannot be empty",
                    name
                )));
            }
            if inference.timeout_secs == 0 {
                return Err(ConfigError::Message(format!(
                    "{}.timeout_secs must be greater than 0",
                    name
                )));
            }
        }
        if self.upload.max_image_bytes == 0 {
            return Err(ConfigError::Message(
                "upload.max_image_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
