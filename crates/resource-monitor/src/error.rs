// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for resource monitoring.
//!
//! These only ever surface from the [`Collector`](crate::Collector) seam and
//! from configuration loading. The [`ResourceMonitor`](crate::ResourceMonitor)
//! API itself is infallible: collector errors are collapsed to a zero sample.

/// Errors that can occur when reading system resources or loading config.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// Failed to read a procfs file or query a filesystem.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to parse a numeric value from a system file.
    #[error("failed to parse value from {path}: {detail}")]
    ParseError { path: String, detail: String },

    /// The expected OS facility does not exist on this platform.
    #[error("resource source not available: {path}")]
    NotAvailable { path: String },

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}
