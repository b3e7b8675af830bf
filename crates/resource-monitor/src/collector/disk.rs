// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Filesystem utilisation via `statvfs(2)`.
//!
//! Utilisation follows `df`: blocks reserved for root are excluded, so the
//! percentage is `used / (used + available-to-unprivileged)`.

use crate::MonitorError;
use std::path::Path;

/// Space accounting for one filesystem, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub total_bytes: u64,
    /// Bytes in use (`total - free`, root reserve counted as free).
    pub used_bytes: u64,
    /// Bytes available to unprivileged users.
    pub available_bytes: u64,
}

impl DiskUsage {
    /// Queries the filesystem containing `path`.
    #[cfg(unix)]
    pub fn read(path: &Path) -> Result<Self, MonitorError> {
        use std::ffi::CString;
        use std::os::unix::ffi::OsStrExt;

        let c_path =
            CString::new(path.as_os_str().as_bytes()).map_err(|_| MonitorError::ParseError {
                path: path.display().to_string(),
                detail: "path contains an interior NUL byte".to_string(),
            })?;

        // SAFETY: `c_path` is a valid NUL-terminated string and `stat` is a
        // properly sized, zero-initialised out-parameter.
        let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
        let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
        if rc != 0 {
            return Err(MonitorError::ReadError {
                path: path.display().to_string(),
                source: std::io::Error::last_os_error(),
            });
        }

        #[allow(clippy::unnecessary_cast)]
        let (blocks, bfree, bavail, frsize) = (
            stat.f_blocks as u64,
            stat.f_bfree as u64,
            stat.f_bavail as u64,
            stat.f_frsize as u64,
        );

        Ok(Self::from_blocks(blocks, bfree, bavail, frsize))
    }

    #[cfg(not(unix))]
    pub fn read(path: &Path) -> Result<Self, MonitorError> {
        Err(MonitorError::NotAvailable {
            path: path.display().to_string(),
        })
    }

    /// Builds usage from raw `statvfs` block counts.
    pub(crate) fn from_blocks(blocks: u64, bfree: u64, bavail: u64, frsize: u64) -> Self {
        Self {
            total_bytes: blocks.saturating_mul(frsize),
            used_bytes: blocks.saturating_sub(bfree).saturating_mul(frsize),
            available_bytes: bavail.saturating_mul(frsize),
        }
    }

    /// Utilisation in percent, `[0, 100]`.
    pub fn percent(&self) -> f64 {
        let denom = self.used_bytes.saturating_add(self.available_bytes);
        if denom == 0 {
            return 0.0;
        }
        (self.used_bytes as f64 / denom as f64 * 100.0).clamp(0.0, 100.0)
    }
}
