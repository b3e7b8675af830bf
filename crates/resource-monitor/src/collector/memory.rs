// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! System memory via `/proc/meminfo`.
//!
//! Only `MemTotal` and `MemAvailable` are used. `MemAvailable` already
//! accounts for reclaimable cache and buffers, so it is the kernel's best
//! estimate of what a new allocation can use without swapping.

use super::procfs::read_procfs_file;
use crate::MonitorError;
use std::path::Path;

/// Default path to the kernel memory info file.
const MEMINFO_PATH: &str = "/proc/meminfo";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// System memory state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryInfo {
    /// Total physical memory in bytes.
    pub total_bytes: u64,
    /// Available memory in bytes.
    pub available_bytes: u64,
    /// `total - available`, in bytes.
    pub used_bytes: u64,
}

impl MemoryInfo {
    /// Reads current memory information from `/proc/meminfo`.
    pub fn read() -> Result<Self, MonitorError> {
        Self::read_from(Path::new(MEMINFO_PATH))
    }

    /// Reads memory information from a specific file (for testing).
    pub(crate) fn read_from(path: &Path) -> Result<Self, MonitorError> {
        let content = read_procfs_file(path)?;
        Self::parse(&content, path)
    }

    /// Parses the content of a `/proc/meminfo`-formatted string.
    pub(crate) fn parse(content: &str, source_path: &Path) -> Result<Self, MonitorError> {
        let mut total_kb: Option<u64> = None;
        let mut available_kb: Option<u64> = None;

        for line in content.lines() {
            let mut parts = line.split_whitespace();
            let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };
            match key {
                "MemTotal:" => total_kb = Some(parse_kb_value(value, source_path)?),
                "MemAvailable:" => available_kb = Some(parse_kb_value(value, source_path)?),
                _ => {}
            }

            if total_kb.is_some() && available_kb.is_some() {
                break;
            }
        }

        let total_kb = total_kb.ok_or_else(|| MonitorError::ParseError {
            path: source_path.display().to_string(),
            detail: "MemTotal not found".to_string(),
        })?;
        let available_kb = available_kb.ok_or_else(|| MonitorError::ParseError {
            path: source_path.display().to_string(),
            detail: "MemAvailable not found".to_string(),
        })?;

        let total_bytes = total_kb * 1024;
        let available_bytes = (available_kb * 1024).min(total_bytes);

        Ok(Self {
            total_bytes,
            available_bytes,
            used_bytes: total_bytes - available_bytes,
        })
    }

    /// Returns the memory utilisation as a fraction in `[0.0, 1.0]`.
    pub fn utilisation(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        self.used_bytes as f64 / self.total_bytes as f64
    }

    /// Returns available memory in megabytes.
    pub fn available_mb(&self) -> f64 {
        self.available_bytes as f64 / BYTES_PER_MB
    }

    /// Returns total memory in megabytes.
    pub fn total_mb(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_MB
    }
}

/// Parses a numeric string from `/proc/meminfo` (values are in kB).
fn parse_kb_value(s: &str, source_path: &Path) -> Result<u64, MonitorError> {
    s.parse::<u64>().map_err(|_| MonitorError::ParseError {
        path: source_path.display().to_string(),
        detail: format!("expected integer kB value, got '{s}'"),
    })
}
