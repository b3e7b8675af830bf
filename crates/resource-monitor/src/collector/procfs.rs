// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

use crate::MonitorError;
use std::path::Path;

/// Reads a procfs file and returns its trimmed content.
///
/// A missing file maps to [`MonitorError::NotAvailable`] so callers can
/// tell "not Linux" apart from a genuine read failure.
pub(crate) fn read_procfs_file(path: &Path) -> Result<String, MonitorError> {
    if !path.exists() {
        return Err(MonitorError::NotAvailable {
            path: path.display().to_string(),
        });
    }
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|e| MonitorError::ReadError {
            path: path.display().to_string(),
            source: e,
        })
}
