// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `resmon status` command: one sample with per-resource health.
//!
//! On hosts without procfs the readings show zeros; the command still works.

use super::usage_bar;
use resource_monitor::{MonitorConfig, ResourceMonitor};

pub async fn execute(config: &MonitorConfig, strict: bool) -> anyhow::Result<()> {
    let mut monitor = ResourceMonitor::from_config(config);
    let metrics = monitor.current_metrics();
    let health = monitor.check_resource_health();
    let t = monitor.thresholds();

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            resmon · System Resource Status           ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── CPU ────────────────────────────────────────────────────
    println!("  CPU");
    println!(
        "   Usage:        {:>5.1}%  {}  {}",
        metrics.cpu_percent,
        usage_bar(metrics.cpu_percent, health.cpu),
        health.cpu,
    );
    println!("   Thresholds:   {:.0}% / {:.0}%", t.cpu_warning, t.cpu_critical);
    println!();

    // ── Memory ─────────────────────────────────────────────────
    println!("  Memory");
    println!(
        "   Usage:        {:>5.1}%  {}  {}",
        metrics.memory_percent,
        usage_bar(metrics.memory_percent, health.memory),
        health.memory,
    );
    println!("   Available:    {:.0} MB", metrics.memory_available_mb);
    println!("   Thresholds:   {:.0}% / {:.0}%", t.memory_warning, t.memory_critical);
    println!();

    // ── Disk ───────────────────────────────────────────────────
    println!("  Disk ({})", config.disk_path.display());
    println!(
        "   Usage:        {:>5.1}%  {}  {}",
        metrics.disk_percent,
        usage_bar(metrics.disk_percent, health.disk),
        health.disk,
    );
    println!("   Thresholds:   {:.0}% / {:.0}%", t.disk_warning, t.disk_critical);
    println!();

    // ── Overall Assessment ─────────────────────────────────────
    let available = health.is_available();
    println!("  Assessment");
    println!("   Worst level:  {}", health.worst());
    if available {
        println!("   Status:       accepting work");
    } else {
        println!("   Status:       RESOURCE CRITICAL, shed load");
    }
    println!();
    println!("{}", metrics.summary());

    if strict && !available {
        anyhow::bail!("resources not available: {}", health.worst());
    }
    Ok(())
}
