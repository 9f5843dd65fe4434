// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// 提供从HTTP请求中提取数据的工具
pub mod image_upload;
pub mod json_body;
