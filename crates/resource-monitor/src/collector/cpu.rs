// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CPU utilisation from `/proc/stat`.
//!
//! The aggregate `cpu` line holds cumulative jiffies per state since boot.
//! Utilisation is the busy fraction of the jiffies elapsed since the
//! previous read, so no sampling interval is ever slept through. The very
//! first read is taken against a zero baseline, which yields the average
//! utilisation since boot.

use super::procfs::read_procfs_file;
use crate::MonitorError;
use std::path::{Path, PathBuf};

/// Default path to the kernel CPU statistics file.
const PROC_STAT_PATH: &str = "/proc/stat";

/// Cumulative CPU time counters from the aggregate `cpu` line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTimes {
    /// Jiffies spent idle or waiting on I/O.
    pub idle: u64,
    /// Jiffies across all states (guest time is already folded into user).
    pub total: u64,
}

impl CpuTimes {
    /// Parses the content of a `/proc/stat`-formatted string.
    pub(crate) fn parse(content: &str, source_path: &Path) -> Result<Self, MonitorError> {
        let line = content
            .lines()
            .find(|l| l.split_whitespace().next() == Some("cpu"))
            .ok_or_else(|| MonitorError::ParseError {
                path: source_path.display().to_string(),
                detail: "aggregate 'cpu' line not found".to_string(),
            })?;

        // Format: "cpu user nice system idle iowait irq softirq steal guest guest_nice"
        let fields = line
            .split_whitespace()
            .skip(1)
            .take(8)
            .map(|s| {
                s.parse::<u64>().map_err(|_| MonitorError::ParseError {
                    path: source_path.display().to_string(),
                    detail: format!("expected integer jiffies, got '{s}'"),
                })
            })
            .collect::<Result<Vec<u64>, _>>()?;

        if fields.len() < 4 {
            return Err(MonitorError::ParseError {
                path: source_path.display().to_string(),
                detail: format!("expected at least 4 cpu fields, got {}", fields.len()),
            });
        }

        let iowait = fields.get(4).copied().unwrap_or(0);
        Ok(Self {
            idle: fields[3] + iowait,
            total: fields.iter().sum(),
        })
    }
}

/// Stateful, non-blocking CPU utilisation reader.
#[derive(Debug, Clone)]
pub struct CpuSampler {
    path: PathBuf,
    last: CpuTimes,
    last_percent: f64,
}

impl CpuSampler {
    pub fn new() -> Self {
        Self::with_path(PROC_STAT_PATH)
    }

    /// Reads counters from a specific file (for testing).
    pub(crate) fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last: CpuTimes::default(),
            last_percent: 0.0,
        }
    }

    /// Returns utilisation in percent since the previous call.
    ///
    /// When no jiffies have elapsed since the previous call the last
    /// computed value is returned again.
    pub fn sample(&mut self) -> Result<f64, MonitorError> {
        let content = read_procfs_file(&self.path)?;
        let now = CpuTimes::parse(&content, &self.path)?;
        Ok(self.update(now))
    }

    fn update(&mut self, now: CpuTimes) -> f64 {
        let total_delta = now.total.saturating_sub(self.last.total);
        let idle_delta = now.idle.saturating_sub(self.last.idle);

        if total_delta > 0 {
            let busy = 1.0 - (idle_delta as f64 / total_delta as f64);
            self.last_percent = (busy * 100.0).clamp(0.0, 100.0);
        }

        self.last = now;
        self.last_percent
    }
}

impl Default for CpuSampler {
    fn default() -> Self {
        Self::new()
    }
}
