// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Turns collector readings into [`ResourceMetrics`].
//!
//! The sampler is where the collector's fallible reads meet the monitor's
//! infallible API. Any collector error collapses to a zeroed sample, the
//! same shape produced when monitoring is disabled.

use crate::metrics::unix_now;
use crate::{Collector, MonitorError, ResourceMetrics};
use std::fmt;

/// Produces one [`ResourceMetrics`] per call.
pub struct Sampler {
    collector: Box<dyn Collector>,
    last_timestamp: f64,
}

impl Sampler {
    pub fn new(collector: Box<dyn Collector>) -> Self {
        Self {
            collector,
            last_timestamp: 0.0,
        }
    }

    /// Takes one sample.
    ///
    /// When `enabled` is false the collector is not touched and a zeroed
    /// sample is returned. Collector failures also yield a zeroed sample.
    pub fn sample(&mut self, enabled: bool) -> ResourceMetrics {
        let timestamp = self.next_timestamp();

        if !enabled {
            return ResourceMetrics::zeroed(timestamp);
        }

        match self.collect(timestamp) {
            Ok(metrics) => {
                tracing::debug!("sampled: {}", metrics.summary());
                metrics
            }
            Err(e) => {
                tracing::warn!("resource collection failed, reporting zeros: {e}");
                ResourceMetrics::zeroed(timestamp)
            }
        }
    }

    fn collect(&mut self, timestamp: f64) -> Result<ResourceMetrics, MonitorError> {
        let cpu = self.collector.cpu_percent()?;
        let memory = self.collector.memory()?;
        let disk = self.collector.disk_percent()?;

        Ok(ResourceMetrics {
            cpu_percent: clamp_percent(cpu),
            memory_percent: clamp_percent(memory.percent),
            memory_available_mb: non_negative(memory.available_mb),
            disk_percent: clamp_percent(disk),
            timestamp,
        })
    }

    /// Wall-clock seconds, never earlier than the previous sample.
    fn next_timestamp(&mut self) -> f64 {
        self.last_timestamp = unix_now().max(self.last_timestamp);
        self.last_timestamp
    }
}

impl fmt::Debug for Sampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sampler")
            .field("last_timestamp", &self.last_timestamp)
            .finish_non_exhaustive()
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
