// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Threshold-based health classification.
//!
//! Each resource value `v` is compared against its `(warning, critical)`
//! pair, critical first:
//!
//! | condition              | level      |
//! |------------------------|------------|
//! | `v >= critical`        | `critical` |
//! | `v >= warning`         | `warning`  |
//! | otherwise              | `healthy`  |
//!
//! Because the critical check runs first, an inverted pair
//! (`warning > critical`) still classifies deterministically.

use crate::{ResourceMetrics, ResourceThresholds};
use std::collections::BTreeMap;
use std::fmt;

/// Health of a single resource.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceLevel {
    Healthy,
    Warning,
    Critical,
}

impl ResourceLevel {
    /// Classifies `value` against a `(warning, critical)` pair.
    pub fn classify(value: f64, warning: f64, critical: f64) -> Self {
        if value >= critical {
            Self::Critical
        } else if value >= warning {
            Self::Warning
        } else {
            Self::Healthy
        }
    }

    /// The lowercase status string: `healthy`, `warning` or `critical`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for ResourceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-resource health derived from one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthStatus {
    pub cpu: ResourceLevel,
    pub memory: ResourceLevel,
    pub disk: ResourceLevel,
}

impl HealthStatus {
    /// Classifies every resource in `metrics` against `thresholds`.
    pub fn classify(metrics: &ResourceMetrics, thresholds: &ResourceThresholds) -> Self {
        Self {
            cpu: ResourceLevel::classify(
                metrics.cpu_percent,
                thresholds.cpu_warning,
                thresholds.cpu_critical,
            ),
            memory: ResourceLevel::classify(
                metrics.memory_percent,
                thresholds.memory_warning,
                thresholds.memory_critical,
            ),
            disk: ResourceLevel::classify(
                metrics.disk_percent,
                thresholds.disk_warning,
                thresholds.disk_critical,
            ),
        }
    }

    /// Returns `true` iff no resource is critical.
    pub fn is_available(&self) -> bool {
        self.worst() != ResourceLevel::Critical
    }

    /// The most severe level across all resources.
    pub fn worst(&self) -> ResourceLevel {
        self.cpu.max(self.memory).max(self.disk)
    }

    /// Returns exactly the keys `cpu`, `memory` and `disk`.
    pub fn to_map(&self) -> BTreeMap<&'static str, ResourceLevel> {
        BTreeMap::from([("cpu", self.cpu), ("memory", self.memory), ("disk", self.disk)])
    }
}
