// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：生成请求与结果、会话状态
/// - 服务（services）：文案清理、话题标签提取以及推理服务接口
///
/// 领域层不依赖于任何外部实现。
pub mod models;
pub mod services;
