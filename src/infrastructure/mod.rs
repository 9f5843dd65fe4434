// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - 指标（metrics）：Prometheus 指标导出与生成请求计数
/// - 服务实现（services）：推理服务客户端的具体实现
/// - 会话存储（session_store）：进程内会话存储
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod metrics;
pub mod services;
pub mod session_store;
