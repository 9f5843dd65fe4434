// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 广告文案清理
//!
//! 去除生成模型常带的结构化标注：加粗标记以及 `Headline:`、`Body Copy:`、
//! `Call to Action:` 标签。规则按顺序执行，标签可能包在加粗标记中，
//! 因此加粗规则必须先执行。

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static HEADLINE_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Headline:\s*").unwrap());
static BODY_COPY_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Body Copy:\s*").unwrap());
static CALL_TO_ACTION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Call to Action:\s*").unwrap());

/// 清理原始广告文案
///
/// 1. 删除所有 `**text**` 片段（整段删除，不保留内部文字）
/// 2. 删除第一个 `Headline:` 标签及其后空白
/// 3. 删除第一个 `Body Copy:` 标签及其后空白
/// 4. 删除第一个 `Call to Action:` 标签及其后空白
/// 5. 去除首尾空白
///
/// 返回空字符串表示清理后没有剩余内容，由调用方视为生成失败
pub fn clean(raw: &str) -> String {
    let text = BOLD_SPAN.replace_all(raw, "");
    let text = HEADLINE_LABEL.replace(&text, "");
    let text = BODY_COPY_LABEL.replace(&text, "");
    let text = CALL_TO_ACTION_LABEL.replace(&text, "");
    text.trim().to_string()
}
