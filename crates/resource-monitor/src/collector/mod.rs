// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! OS-level resource collection.
//!
//! The [`Collector`] trait is the boundary between the monitor and the
//! operating system. [`SystemCollector`] is the default implementation:
//! - **CPU** from `/proc/stat`, as a delta against the previous read.
//! - **Memory** from `/proc/meminfo`.
//! - **Disk** from `statvfs(2)` on a configured mount path.
//!
//! Every read is non-blocking: nothing here sleeps across a measurement
//! window, so repeated sampling costs only a few file reads.

mod cpu;
mod disk;
mod memory;
mod procfs;

pub use cpu::{CpuSampler, CpuTimes};
pub use disk::DiskUsage;
pub use memory::MemoryInfo;

use crate::MonitorError;
use std::path::{Path, PathBuf};

/// Default filesystem whose utilisation is reported.
pub const DEFAULT_DISK_PATH: &str = "/";

/// Memory figures needed for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryReading {
    /// Utilisation in percent.
    pub percent: f64,
    /// Available memory in megabytes.
    pub available_mb: f64,
}

/// Source of raw utilisation figures.
///
/// Implementations must return immediately; a CPU reading in particular
/// must not wait for an averaging interval.
pub trait Collector: Send {
    /// Current CPU utilisation in percent.
    fn cpu_percent(&mut self) -> Result<f64, MonitorError>;

    /// Current memory utilisation and available memory.
    fn memory(&mut self) -> Result<MemoryReading, MonitorError>;

    /// Current utilisation of the monitored filesystem in percent.
    fn disk_percent(&mut self) -> Result<f64, MonitorError>;
}

/// Reads CPU, memory and disk figures from the host OS.
#[derive(Debug)]
pub struct SystemCollector {
    cpu: CpuSampler,
    disk_path: PathBuf,
}

impl SystemCollector {
    /// Creates a collector reporting disk usage for `/`.
    pub fn new() -> Self {
        Self::with_disk_path(DEFAULT_DISK_PATH)
    }

    /// Creates a collector reporting disk usage for the filesystem at `path`.
    pub fn with_disk_path(path: impl Into<PathBuf>) -> Self {
        Self {
            cpu: CpuSampler::new(),
            disk_path: path.into(),
        }
    }

    pub fn disk_path(&self) -> &Path {
        &self.disk_path
    }
}

impl Default for SystemCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector for SystemCollector {
    fn cpu_percent(&mut self) -> Result<f64, MonitorError> {
        self.cpu.sample()
    }

    fn memory(&mut self) -> Result<MemoryReading, MonitorError> {
        let info = MemoryInfo::read()?;
        Ok(MemoryReading {
            percent: info.utilisation() * 100.0,
            available_mb: info.available_mb(),
        })
    }

    fn disk_percent(&mut self) -> Result<f64, MonitorError> {
        DiskUsage::read(&self.disk_path).map(|usage| usage.percent())
    }
}
