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

use base64::{engine::general_purpose, Engine as _};

use crate::domain::models::generation::GenerationError;

const MIB: u64 = 1024 * 1024;

/// 校验广告主题
///
/// # 返回值
///
/// * `Ok(&str)` - 去除首尾空白后的主题
/// * `Err(GenerationError::Validation)` - 主题为空
pub fn validate_topic(topic: &str) -> Result<&str, GenerationError> {
    let trimmed = topic.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::Validation(
            "Topic cannot be empty".to_string(),
        ));
    }
    Ok(trimmed)
}

/// 校验上传图片
///
/// # 参数
///
/// * `image` - 图片字节
/// * `max_bytes` - 大小上限
pub fn validate_image(image: &[u8], max_bytes: u64) -> Result<(), GenerationError> {
    if image.is_empty() {
        return Err(GenerationError::Validation("No image selected".to_string()));
    }
    if image.len() as u64 > max_bytes {
        return Err(GenerationError::Validation(format!(
            "File size must be less than {}",
            format_size(max_bytes)
        )));
    }
    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// 生成图片预览用的 data URL
pub fn to_data_url(image: &[u8], content_type: &str) -> String {
    format!(
        "data:{};base64,{}",
        content_type,
        general_purpose::STANDARD.encode(image)
    )
}
