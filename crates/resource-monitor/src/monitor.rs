// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`ResourceMonitor`] facade.
//!
//! Owns one set of thresholds, one bounded history and the sampler. Every
//! public operation is infallible and synchronous: sampling reads a few
//! procfs files and one `statvfs` call, then returns.
//!
//! A monitor is not internally synchronised. Share one across threads by
//! wrapping it in a [`SharedMonitor`](crate::SharedMonitor).

use crate::{
    Collector, HealthStatus, HistoryBuffer, MonitorConfig, ResourceMetrics, ResourceThresholds,
    Sampler, SystemCollector,
};
use crate::history::DEFAULT_MAX_HISTORY;
use std::fmt;
use std::path::PathBuf;

/// Snapshot of the monitor state returned by
/// [`ResourceMonitor::metrics_summary`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MetricsSummary {
    /// The most recent sample.
    pub latest: ResourceMetrics,
    /// Number of samples currently held in history.
    pub history_size: usize,
    /// Classification of `latest`.
    pub health_status: HealthStatus,
}

/// Samples host resources, keeps a bounded history and classifies health.
///
/// # Example
/// ```no_run
/// use resource_monitor::{ResourceMonitor, ResourceThresholds};
///
/// let mut monitor = ResourceMonitor::with_thresholds(
///     ResourceThresholds::default().with_cpu(60.0, 85.0),
/// );
/// if monitor.is_resource_available() {
///     // accept more work
/// }
/// ```
pub struct ResourceMonitor {
    /// Classification cut-offs, applied on the next health query.
    pub thresholds: ResourceThresholds,
    history: HistoryBuffer,
    monitoring_enabled: bool,
    sampler: Sampler,
}

impl ResourceMonitor {
    /// Creates a monitor with default thresholds and a 100-sample history.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a monitor with custom thresholds.
    pub fn with_thresholds(thresholds: ResourceThresholds) -> Self {
        Self::builder().thresholds(thresholds).build()
    }

    /// Creates a monitor that reads from a caller-supplied collector.
    pub fn with_collector(collector: Box<dyn Collector>) -> Self {
        Self::builder().collector(collector).build()
    }

    /// Creates a monitor from a loaded configuration.
    pub fn from_config(config: &MonitorConfig) -> Self {
        Self::builder()
            .thresholds(config.thresholds)
            .max_history(config.max_history)
            .monitoring_enabled(config.monitoring_enabled)
            .disk_path(config.disk_path.clone())
            .build()
    }

    pub fn builder() -> ResourceMonitorBuilder {
        ResourceMonitorBuilder::default()
    }

    /// Takes a fresh sample, appends it to history and returns it.
    ///
    /// While monitoring is disabled, or if the collector fails, the sample
    /// is zeroed. Zeroed samples are stored like any other.
    pub fn current_metrics(&mut self) -> ResourceMetrics {
        let metrics = self.sampler.sample(self.monitoring_enabled);
        self.history.push(metrics);
        metrics
    }

    /// Classifies the latest sample, sampling first if history is empty.
    pub fn check_resource_health(&mut self) -> HealthStatus {
        let latest = match self.history.latest() {
            Some(metrics) => *metrics,
            None => self.current_metrics(),
        };
        HealthStatus::classify(&latest, &self.thresholds)
    }

    /// Returns `true` iff no resource is currently critical.
    pub fn is_resource_available(&mut self) -> bool {
        self.check_resource_health().is_available()
    }

    /// Summarises the latest sample, or `None` if nothing has been sampled.
    ///
    /// Never samples on its own.
    pub fn metrics_summary(&self) -> Option<MetricsSummary> {
        let latest = *self.history.latest()?;
        Some(MetricsSummary {
            latest,
            history_size: self.history.len(),
            health_status: HealthStatus::classify(&latest, &self.thresholds),
        })
    }

    /// Turns OS sampling on or off, effective from the next sample.
    pub fn set_monitoring_enabled(&mut self, enabled: bool) {
        if enabled != self.monitoring_enabled {
            tracing::info!(
                "resource monitoring {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        self.monitoring_enabled = enabled;
    }

    pub fn is_monitoring_enabled(&self) -> bool {
        self.monitoring_enabled
    }

    pub fn thresholds(&self) -> &ResourceThresholds {
        &self.thresholds
    }

    pub fn thresholds_mut(&mut self) -> &mut ResourceThresholds {
        &mut self.thresholds
    }

    /// Samples held, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &ResourceMetrics> + ExactSizeIterator {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The most recent sample, without taking a new one.
    pub fn latest(&self) -> Option<&ResourceMetrics> {
        self.history.latest()
    }

    pub fn max_history(&self) -> usize {
        self.history.capacity()
    }

    /// Changes history capacity; the oldest surplus is evicted immediately.
    pub fn set_max_history(&mut self, max_history: usize) {
        self.history.set_capacity(max_history);
        tracing::info!("history capacity set to {}", self.history.capacity());
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for ResourceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResourceMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceMonitor")
            .field("thresholds", &self.thresholds)
            .field("history_len", &self.history.len())
            .field("max_history", &self.history.capacity())
            .field("monitoring_enabled", &self.monitoring_enabled)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ResourceMonitor`]; every setting is optional.
pub struct ResourceMonitorBuilder {
    thresholds: ResourceThresholds,
    max_history: usize,
    monitoring_enabled: bool,
    disk_path: Option<PathBuf>,
    collector: Option<Box<dyn Collector>>,
}

impl Default for ResourceMonitorBuilder {
    fn default() -> Self {
        Self {
            thresholds: ResourceThresholds::default(),
            max_history: DEFAULT_MAX_HISTORY,
            monitoring_enabled: true,
            disk_path: None,
            collector: None,
        }
    }
}

impl ResourceMonitorBuilder {
    pub fn thresholds(mut self, thresholds: ResourceThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// History capacity; values below 1 are raised to 1.
    pub fn max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    pub fn monitoring_enabled(mut self, enabled: bool) -> Self {
        self.monitoring_enabled = enabled;
        self
    }

    /// Mount path for disk utilisation. Ignored when a custom collector is set.
    pub fn disk_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.disk_path = Some(path.into());
        self
    }

    pub fn collector(mut self, collector: Box<dyn Collector>) -> Self {
        self.collector = Some(collector);
        self
    }

    pub fn build(self) -> ResourceMonitor {
        let collector = match (self.collector, self.disk_path) {
            (Some(collector), _) => collector,
            (None, Some(path)) => Box::new(SystemCollector::with_disk_path(path)),
            (None, None) => Box::new(SystemCollector::new()),
        };

        ResourceMonitor {
            thresholds: self.thresholds,
            history: HistoryBuffer::new(self.max_history),
            monitoring_enabled: self.monitoring_enabled,
            sampler: Sampler::new(collector),
        }
    }
}
