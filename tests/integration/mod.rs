// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

mod generation_routes_test;
mod health_check;
pub mod helpers;
mod hugging_face_client_test;
