// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Warning/critical cut-offs per resource.
//!
//! # TOML Format
//! ```toml
//! cpu_warning = 70.0
//! cpu_critical = 90.0
//! memory_warning = 75.0
//! memory_critical = 90.0
//! disk_warning = 80.0
//! disk_critical = 95.0
//! ```
//!
//! Every field is optional in TOML and falls back to its default.
//! A warning cut-off above its critical counterpart is accepted as-is;
//! the classifier checks the critical cut-off first.

/// Threshold configuration for the health classifier, in percent.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ResourceThresholds {
    pub cpu_warning: f64,
    pub cpu_critical: f64,
    pub memory_warning: f64,
    pub memory_critical: f64,
    pub disk_warning: f64,
    pub disk_critical: f64,
}

impl Default for ResourceThresholds {
    fn default() -> Self {
        Self {
            cpu_warning: 70.0,
            cpu_critical: 90.0,
            memory_warning: 75.0,
            memory_critical: 90.0,
            disk_warning: 80.0,
            disk_critical: 95.0,
        }
    }
}

impl ResourceThresholds {
    /// Overrides the CPU `(warning, critical)` pair.
    pub fn with_cpu(mut self, warning: f64, critical: f64) -> Self {
        self.cpu_warning = warning;
        self.cpu_critical = critical;
        self
    }

    /// Overrides the memory `(warning, critical)` pair.
    pub fn with_memory(mut self, warning: f64, critical: f64) -> Self {
        self.memory_warning = warning;
        self.memory_critical = critical;
        self
    }

    /// Overrides the disk `(warning, critical)` pair.
    pub fn with_disk(mut self, warning: f64, critical: f64) -> Self {
        self.disk_warning = warning;
        self.disk_critical = critical;
        self
    }
}
