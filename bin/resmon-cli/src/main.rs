// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # resmon
//!
//! Command-line interface for the resource-monitor crate.
//!
//! ## Usage
//! ```bash
//! # One sample with per-resource health
//! resmon status
//!
//! # Gate a job on resource availability
//! resmon status --strict && ./run-batch.sh
//!
//! # Ten samples, half a second apart
//! resmon watch --count 10 --interval-ms 500
//!
//! # Machine-readable summary
//! resmon summary --samples 3 --json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use resource_monitor::MonitorConfig;

#[derive(Parser)]
#[command(
    name = "resmon",
    about = "CPU, memory and disk health monitor for admission control",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (thresholds, history, disk path).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take one sample and display per-resource health.
    Status {
        /// Exit with an error when any resource is critical.
        #[arg(long)]
        strict: bool,
    },

    /// Sample repeatedly, printing one line per sample.
    Watch {
        /// Number of samples to take.
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Delay between samples in milliseconds.
        #[arg(short, long, default_value_t = 1000)]
        interval_ms: u64,
    },

    /// Take samples and print the metrics summary.
    Summary {
        /// Number of samples to take before summarising.
        #[arg(short, long, default_value_t = 1)]
        samples: usize,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => MonitorConfig::from_file(path)?,
        None => MonitorConfig::default(),
    };
    tracing::debug!("using configuration: {config:?}");

    match cli.command {
        Commands::Status { strict } => commands::status::execute(&config, strict).await,
        Commands::Watch { count, interval_ms } => {
            commands::watch::execute(&config, count, interval_ms).await
        }
        Commands::Summary { samples, json } => {
            commands::summary::execute(&config, samples, json).await
        }
    }
}
