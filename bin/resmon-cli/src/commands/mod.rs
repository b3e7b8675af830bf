// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

pub mod status;
pub mod summary;
pub mod watch;

use resource_monitor::ResourceLevel;
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber on stderr.
///
/// `RUST_LOG` takes precedence over the `-v` count.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Creates a visual usage bar (0-100 percent scale).
pub(crate) fn usage_bar(percent: f64, level: ResourceLevel) -> String {
    let filled = ((percent / 100.0) * 20.0).round() as usize;
    let filled = filled.min(20);
    let empty = 20 - filled;
    let symbol = match level {
        ResourceLevel::Critical => "#",
        ResourceLevel::Warning => "=",
        ResourceLevel::Healthy => "-",
    };
    format!("[{}{}]", symbol.repeat(filled), ".".repeat(empty))
}
