// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供后台维护任务
pub mod session_reaper;

pub use session_reaper::SessionReaper;
