// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 广告文案清理（ad_copy_cleaner）：去除模型输出中的加粗标记和结构标签
/// - 话题标签提取（hashtag_extractor）：从图片描述中派生话题标签
/// - 推理客户端（inference_client）：托管推理服务的抽象接口
pub mod ad_copy_cleaner;
pub mod hashtag_extractor;
pub mod inference_client;
