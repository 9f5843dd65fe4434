// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

/// 每条描述最多生成的话题标签数
pub const MAX_COMPUTED_HASHTAGS: usize = 5;

/// 词长必须大于该值才会成为话题标签（按清理前的 UTF-16 码元数计算）
pub const MIN_WORD_LENGTH: usize = 3;

/// 无条件追加的固定话题标签
pub const FIXED_HASHTAGS: [&str; 2] = ["#photography", "#ai"];

/// 从图片描述中提取话题标签
///
/// # 参数
///
/// * `caption` - 模型生成的描述文本
///
/// # 返回值
///
/// 去重后的计算标签（最多5个，保持首次出现顺序），后接 `#photography` 和 `#ai`。
/// 固定标签不参与去重，即使与计算标签重复也会追加。
pub fn extract(caption: &str) -> Vec<String> {
    let lowered = caption.to_lowercase();

    let computed = lowered
        .split(' ')
        .filter(|word| word.encode_utf16().count() > MIN_WORD_LENGTH)
        .map(to_hashtag)
        .take(MAX_COMPUTED_HASHTAGS);

    let mut seen = HashSet::new();
    let mut hashtags: Vec<String> = computed.filter(|tag| seen.insert(tag.clone())).collect();

    hashtags.extend(FIXED_HASHTAGS.iter().map(|tag| tag.to_string()));
    hashtags
}

fn to_hashtag(word: &str) -> String {
    let mut tag = String::with_capacity(word.len() + 1);
    tag.push('#');
    tag.extend(word.chars().filter(|c| c.is_ascii_alphanumeric()));
    tag
}
