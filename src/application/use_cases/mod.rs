// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// - 生成（generation）：两条管线共用的生成用例抽象
/// - 广告文案（generate_ad_copy）
/// - 图片描述（caption_image）
/// - 工作室会话（studio_session）：界面状态与标签页上的生成流程
pub mod caption_image;
pub mod generate_ad_copy;
pub mod generation;
pub mod studio_session;
