// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `resmon summary` command: sample, then print the metrics summary.

use resource_monitor::{MonitorConfig, ResourceMonitor};

pub async fn execute(config: &MonitorConfig, samples: usize, json: bool) -> anyhow::Result<()> {
    let mut monitor = ResourceMonitor::from_config(config);
    for _ in 0..samples {
        monitor.current_metrics();
    }

    let summary = monitor.metrics_summary();

    if json {
        // An empty history prints `{}`.
        let value = match &summary {
            Some(s) => serde_json::to_value(s)?,
            None => serde_json::json!({}),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let Some(summary) = summary else {
        println!("No samples taken.");
        return Ok(());
    };

    println!("Latest:        {}", summary.latest.summary());
    println!("History size:  {}", summary.history_size);
    for (resource, level) in summary.health_status.to_map() {
        println!("  {resource:<8} {level}");
    }
    println!(
        "Available:     {}",
        if summary.health_status.is_available() { "yes" } else { "no" }
    );
    Ok(())
}
