// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Point-in-time resource sample.
//!
//! A [`ResourceMetrics`] is the immutable result of one sampling pass. It is
//! what the monitor stores in its history and what the health classifier
//! compares against the configured thresholds.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// One sampling pass over CPU, memory and disk.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResourceMetrics {
    /// CPU utilisation in percent, `[0, 100]`.
    pub cpu_percent: f64,
    /// Memory utilisation in percent, `[0, 100]`.
    pub memory_percent: f64,
    /// Memory available to new allocations, in megabytes.
    pub memory_available_mb: f64,
    /// Utilisation of the monitored filesystem in percent, `[0, 100]`.
    pub disk_percent: f64,
    /// Seconds since the Unix epoch when the sample was taken.
    pub timestamp: f64,
}

impl ResourceMetrics {
    /// Creates a sample from raw values.
    pub fn new(
        cpu_percent: f64,
        memory_percent: f64,
        memory_available_mb: f64,
        disk_percent: f64,
        timestamp: f64,
    ) -> Self {
        Self {
            cpu_percent,
            memory_percent,
            memory_available_mb,
            disk_percent,
            timestamp,
        }
    }

    /// A sample with every numeric field zeroed, stamped at `timestamp`.
    ///
    /// Produced when monitoring is disabled or the collector fails.
    pub fn zeroed(timestamp: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, timestamp)
    }

    /// Returns `true` if all four resource readings are zero.
    pub fn is_zeroed(&self) -> bool {
        self.cpu_percent == 0.0
            && self.memory_percent == 0.0
            && self.memory_available_mb == 0.0
            && self.disk_percent == 0.0
    }

    /// Returns the sample as a flat name → value mapping.
    pub fn to_dict(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("cpu_percent", self.cpu_percent),
            ("memory_percent", self.memory_percent),
            ("memory_available_mb", self.memory_available_mb),
            ("disk_percent", self.disk_percent),
            ("timestamp", self.timestamp),
        ])
    }

    /// Returns a one-line summary suitable for logging or CLI display.
    ///
    /// # Example output
    /// ```text
    /// CPU 12.5%, Mem 41.0% (2456 MB avail), Disk 63.2%
    /// ```
    pub fn summary(&self) -> String {
        format!(
            "CPU {:.1}%, Mem {:.1}% ({:.0} MB avail), Disk {:.1}%",
            self.cpu_percent, self.memory_percent, self.memory_available_mb, self.disk_percent,
        )
    }
}

/// Current wall-clock time in seconds since the Unix epoch.
pub(crate) fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
