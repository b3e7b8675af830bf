// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: the public monitor API end to end.
//!
//! Tests that need real OS figures skip themselves when `/proc/stat` is
//! missing; everything else runs against fixture collectors.

use resource_monitor::{
    get_resource_monitor, Collector, MemoryReading, MonitorConfig, MonitorError, ResourceLevel,
    ResourceMetrics, ResourceMonitor, ResourceThresholds,
};
use std::path::Path;
use std::time::{Duration, Instant};

// ── Helpers ────────────────────────────────────────────────────

fn on_linux_host() -> bool {
    Path::new("/proc/stat").exists() && Path::new("/proc/meminfo").exists()
}

/// Always reports the same figures.
struct Constant(f64, f64, f64);

impl Collector for Constant {
    fn cpu_percent(&mut self) -> Result<f64, MonitorError> {
        Ok(self.0)
    }

    fn memory(&mut self) -> Result<MemoryReading, MonitorError> {
        Ok(MemoryReading {
            percent: self.1,
            available_mb: 4096.0,
        })
    }

    fn disk_percent(&mut self) -> Result<f64, MonitorError> {
        Ok(self.2)
    }
}

/// Reports an increasing CPU figure so samples are distinguishable.
struct Counting(f64);

impl Collector for Counting {
    fn cpu_percent(&mut self) -> Result<f64, MonitorError> {
        self.0 += 1.0;
        Ok(self.0)
    }

    fn memory(&mut self) -> Result<MemoryReading, MonitorError> {
        Ok(MemoryReading {
            percent: 10.0,
            available_mb: 1.0,
        })
    }

    fn disk_percent(&mut self) -> Result<f64, MonitorError> {
        Ok(10.0)
    }
}

/// Fails every read, like an unsupported platform.
struct Unavailable;

impl Collector for Unavailable {
    fn cpu_percent(&mut self) -> Result<f64, MonitorError> {
        Err(MonitorError::NotAvailable {
            path: "/proc/stat".into(),
        })
    }

    fn memory(&mut self) -> Result<MemoryReading, MonitorError> {
        Err(MonitorError::NotAvailable {
            path: "/proc/meminfo".into(),
        })
    }

    fn disk_percent(&mut self) -> Result<f64, MonitorError> {
        Err(MonitorError::ReadError {
            path: "/".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}

fn assert_in_range(m: &ResourceMetrics) {
    assert!((0.0..=100.0).contains(&m.cpu_percent), "cpu {}", m.cpu_percent);
    assert!((0.0..=100.0).contains(&m.memory_percent), "mem {}", m.memory_percent);
    assert!((0.0..=100.0).contains(&m.disk_percent), "disk {}", m.disk_percent);
    assert!(m.memory_available_mb >= 0.0);
}

// ── Real host ──────────────────────────────────────────────────

#[test]
fn real_metrics_within_valid_ranges() {
    let mut monitor = ResourceMonitor::new();
    for _ in 0..5 {
        assert_in_range(&monitor.current_metrics());
    }
    assert_eq!(monitor.history_len(), 5);
}

#[test]
fn real_sampling_is_non_blocking() {
    let mut monitor = ResourceMonitor::new();
    let start = Instant::now();
    for _ in 0..20 {
        monitor.current_metrics();
    }
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn real_memory_reading_is_populated() {
    if !on_linux_host() {
        return;
    }
    let m = ResourceMonitor::new().current_metrics();
    assert!(m.memory_percent > 0.0);
    assert!(m.memory_available_mb > 0.0);
}

#[test]
fn tiny_critical_threshold_is_critical() {
    if !on_linux_host() {
        return;
    }
    let thresholds = ResourceThresholds {
        cpu_warning: 1.0,
        cpu_critical: 0.1,
        ..Default::default()
    };
    let mut monitor = ResourceMonitor::with_thresholds(thresholds);
    assert_eq!(monitor.check_resource_health().cpu, ResourceLevel::Critical);
    assert!(!monitor.is_resource_available());
}

#[test]
fn full_monitoring_cycle() {
    let mut monitor = ResourceMonitor::new();
    for _ in 0..3 {
        monitor.current_metrics();
    }
    let health = monitor.check_resource_health();
    let summary = monitor.metrics_summary().expect("history is not empty");
    assert_eq!(summary.history_size, 3);
    assert_eq!(summary.health_status, health);
    assert_eq!(monitor.is_resource_available(), health.is_available());
}

// ── Fixture collectors ─────────────────────────────────────────

#[test]
fn fifo_eviction_keeps_most_recent() {
    for k in [1usize, 2, 7, 10] {
        for m in [1usize, 3, 12] {
            let mut monitor = ResourceMonitor::builder()
                .max_history(k)
                .collector(Box::new(Counting(0.0)))
                .build();
            for _ in 0..(k + m) {
                monitor.current_metrics();
            }
            assert_eq!(monitor.history_len(), k);
            let cpus: Vec<f64> = monitor.history().map(|s| s.cpu_percent).collect();
            let expected: Vec<f64> = ((m + 1)..=(k + m)).map(|i| i as f64).collect();
            assert_eq!(cpus, expected, "k={k} m={m}");
        }
    }
}

#[test]
fn disabled_monitoring_yields_zeros() {
    let mut monitor = ResourceMonitor::with_collector(Box::new(Constant(99.0, 99.0, 99.0)));
    monitor.set_monitoring_enabled(false);
    for _ in 0..3 {
        let m = monitor.current_metrics();
        assert_eq!(m.cpu_percent, 0.0);
        assert_eq!(m.memory_percent, 0.0);
        assert_eq!(m.memory_available_mb, 0.0);
        assert_eq!(m.disk_percent, 0.0);
        assert!(m.timestamp > 0.0);
    }
    let health = monitor.check_resource_health();
    assert_eq!(health.worst(), ResourceLevel::Healthy);
}

#[test]
fn collector_failure_never_surfaces() {
    let mut monitor = ResourceMonitor::with_collector(Box::new(Unavailable));
    let m = monitor.current_metrics();
    assert!(m.is_zeroed());
    assert!(monitor.is_resource_available());
    assert_eq!(monitor.metrics_summary().map(|s| s.history_size), Some(1));
}

#[test]
fn health_keys_and_levels() {
    let mut monitor = ResourceMonitor::with_collector(Box::new(Constant(70.0, 90.0, 10.0)));
    let health = monitor.check_resource_health();
    let map = health.to_map();
    assert_eq!(map.len(), 3);
    assert_eq!(map["cpu"].as_str(), "warning");
    assert_eq!(map["memory"].as_str(), "critical");
    assert_eq!(map["disk"].as_str(), "healthy");
    assert!(!monitor.is_resource_available());
}

#[test]
fn inverted_thresholds_check_critical_first() {
    let thresholds = ResourceThresholds::default().with_cpu(10.0, 0.1);
    let mut monitor = ResourceMonitor::builder()
        .thresholds(thresholds)
        .collector(Box::new(Constant(5.0, 10.0, 10.0)))
        .build();
    assert_eq!(monitor.check_resource_health().cpu, ResourceLevel::Critical);
}

#[test]
fn summary_tracks_latest_sample() {
    let mut monitor = ResourceMonitor::with_collector(Box::new(Counting(0.0)));
    assert!(monitor.metrics_summary().is_none());

    let mut last = None;
    for _ in 0..4 {
        last = Some(monitor.current_metrics());
    }
    let summary = monitor.metrics_summary().unwrap();
    assert_eq!(summary.history_size, 4);
    assert_eq!(summary.latest.to_dict(), last.unwrap().to_dict());
}

#[test]
fn monitors_are_independent() {
    let mut a = ResourceMonitor::with_collector(Box::new(Constant(1.0, 1.0, 1.0)));
    let mut b = ResourceMonitor::with_collector(Box::new(Constant(1.0, 1.0, 1.0)));
    a.current_metrics();
    a.current_metrics();
    b.current_metrics();
    assert_eq!(a.history_len(), 2);
    assert_eq!(b.history_len(), 1);

    a.thresholds.cpu_warning = 0.0;
    assert_eq!(b.thresholds.cpu_warning, 70.0);
}

#[test]
fn config_drives_construction() {
    let config = MonitorConfig::from_toml(
        r#"
max_history = 2
monitoring_enabled = false

[thresholds]
disk_warning = 1.0
"#,
    )
    .unwrap();
    let mut monitor = ResourceMonitor::from_config(&config);
    for _ in 0..5 {
        assert!(monitor.current_metrics().is_zeroed());
    }
    assert_eq!(monitor.history_len(), 2);
    assert_eq!(monitor.thresholds.disk_warning, 1.0);
}

// ── Process-wide accessor ──────────────────────────────────────

#[test]
fn global_monitor_is_shared() {
    let first = get_resource_monitor();
    first.current_metrics();
    first.current_metrics();

    let second = get_resource_monitor();
    assert!(std::ptr::eq(first, second));
    assert!(second.lock().history_len() >= 2);
    assert!(second.metrics_summary().is_some());
}
