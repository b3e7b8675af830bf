// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # resource-monitor
//!
//! Samples host CPU, memory and disk utilisation on demand, classifies
//! pressure against configurable thresholds and keeps a bounded rolling
//! history. The result is a single availability signal a host process can
//! use for admission control: "should I accept more work right now?"
//!
//! # Components
//! - [`ResourceMetrics`]: one immutable sample.
//! - [`ResourceThresholds`]: warning/critical cut-offs per resource.
//! - [`HistoryBuffer`]: the most recent N samples, FIFO eviction.
//! - [`Sampler`]: turns [`Collector`] readings into samples.
//! - [`HealthStatus`] / [`ResourceLevel`]: threshold classification.
//! - [`ResourceMonitor`]: the facade tying it together.
//! - [`get_resource_monitor`]: one shared monitor per process.
//!
//! # Graceful Degradation
//! No monitor operation returns an error. If the OS facilities are missing
//! (non-Linux, containers without procfs) or a read fails, the sample is
//! zeroed and a warning is logged. Disabling monitoring produces the same
//! zeroed shape without touching the OS.
//!
//! # Example
//! ```no_run
//! use resource_monitor::get_resource_monitor;
//!
//! let monitor = get_resource_monitor();
//! if monitor.is_resource_available() {
//!     println!("accepting work");
//! } else {
//!     println!("shedding load: {:?}", monitor.check_resource_health());
//! }
//! ```

mod collector;
mod config;
mod error;
mod global;
mod health;
mod history;
mod metrics;
mod monitor;
mod sampler;
mod thresholds;

pub use collector::{
    Collector, CpuSampler, CpuTimes, DiskUsage, MemoryInfo, MemoryReading, SystemCollector,
    DEFAULT_DISK_PATH,
};
pub use config::MonitorConfig;
pub use error::MonitorError;
pub use global::{get_resource_monitor, SharedMonitor};
pub use health::{HealthStatus, ResourceLevel};
pub use history::{HistoryBuffer, DEFAULT_MAX_HISTORY};
pub use metrics::ResourceMetrics;
pub use monitor::{MetricsSummary, ResourceMonitor, ResourceMonitorBuilder};
pub use sampler::Sampler;
pub use thresholds::ResourceThresholds;
