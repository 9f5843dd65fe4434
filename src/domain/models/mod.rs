// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 生成（generation）：生成请求、结果以及错误分类
/// - 会话（session）：界面状态机与标签页状态
/// - 语气（tone）：广告文案的语气预设
pub mod generation;
pub mod session;
pub mod tone;
