// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `resmon watch` command: periodic sampling, one line per sample.

use resource_monitor::{MonitorConfig, ResourceMonitor};
use std::time::Duration;

pub async fn execute(config: &MonitorConfig, count: usize, interval_ms: u64) -> anyhow::Result<()> {
    let mut monitor = ResourceMonitor::from_config(config);
    let interval = Duration::from_millis(interval_ms);

    for i in 0..count {
        if i > 0 {
            tokio::time::sleep(interval).await;
        }
        let metrics = monitor.current_metrics();
        let health = monitor.check_resource_health();
        println!(
            "[{:>4}] {}  cpu={} mem={} disk={}",
            i + 1,
            metrics.summary(),
            health.cpu,
            health.memory,
            health.disk,
        );
    }

    if let Some(summary) = monitor.metrics_summary() {
        println!(
            "{} samples retained, worst level {}",
            summary.history_size,
            summary.health_status.worst(),
        );
    }
    Ok(())
}
