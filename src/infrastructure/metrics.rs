// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::settings::MetricsSettings;
use crate::domain::models::generation::PipelineKind;

/// 初始化指标系统
///
/// 未启用时不安装导出器，`metrics` 宏调用为空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(
                "Invalid metrics address {}: {}. Metrics exporter not started.",
                settings.listen_addr, e
            );
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        "generation_requests_total",
        "Total number of generation requests by pipeline and outcome"
    );
    describe_histogram!(
        "generation_duration_seconds",
        "Duration of inference calls in seconds"
    );

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次生成请求
pub fn record_generation(pipeline: PipelineKind, outcome: &'static str, elapsed: Duration) {
    counter!(
        "generation_requests_total",
        "pipeline" => pipeline.as_str(),
        "outcome" => outcome
    )
    .increment(1);
    histogram!("generation_duration_seconds", "pipeline" => pipeline.as_str())
        .record(elapsed.as_secs_f64());
}

/// 记录一次未进入推理服务就被拒绝的请求
pub fn record_rejected(pipeline: PipelineKind, outcome: &'static str) {
    counter!(
        "generation_requests_total",
        "pipeline" => pipeline.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}
