// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Monitor configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! max_history = 100
//! monitoring_enabled = true
//! disk_path = "/"
//!
//! [thresholds]
//! cpu_warning = 70.0
//! cpu_critical = 90.0
//! memory_warning = 75.0
//! memory_critical = 90.0
//! disk_warning = 80.0
//! disk_critical = 95.0
//! ```
//!
//! Every key is optional and falls back to the default shown above.

use crate::collector::DEFAULT_DISK_PATH;
use crate::history::DEFAULT_MAX_HISTORY;
use crate::{MonitorError, ResourceThresholds};
use std::path::{Path, PathBuf};

/// Configuration for a [`ResourceMonitor`](crate::ResourceMonitor).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Number of samples retained in history.
    pub max_history: usize,
    /// Whether sampling reads the OS at all.
    pub monitoring_enabled: bool,
    /// Mount path whose filesystem utilisation is reported.
    pub disk_path: PathBuf,
    /// Health classification cut-offs.
    pub thresholds: ResourceThresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
            monitoring_enabled: true,
            disk_path: PathBuf::from(DEFAULT_DISK_PATH),
            thresholds: ResourceThresholds::default(),
        }
    }
}

impl MonitorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, MonitorError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MonitorError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, MonitorError> {
        toml::from_str(toml_str)
            .map_err(|e| MonitorError::Config(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, MonitorError> {
        toml::to_string_pretty(self)
            .map_err(|e| MonitorError::Config(format!("TOML serialise error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = MonitorConfig::default();
        assert_eq!(c.max_history, 100);
        assert!(c.monitoring_enabled);
        assert_eq!(c.disk_path, PathBuf::from("/"));
        assert_eq!(c.thresholds, ResourceThresholds::default());
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
max_history = 10
monitoring_enabled = false
disk_path = "/var"

[thresholds]
cpu_warning = 60.0
cpu_critical = 85.0
"#;
        let c = MonitorConfig::from_toml(toml).unwrap();
        assert_eq!(c.max_history, 10);
        assert!(!c.monitoring_enabled);
        assert_eq!(c.disk_path, PathBuf::from("/var"));
        assert_eq!(c.thresholds.cpu_warning, 60.0);
        assert_eq!(c.thresholds.cpu_critical, 85.0);
        assert_eq!(c.thresholds.memory_warning, 75.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let c = MonitorConfig::from_toml("").unwrap();
        assert_eq!(c, MonitorConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = MonitorConfig::from_toml("max_history = \"lots\"");
        assert!(matches!(result, Err(MonitorError::Config(_))));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = MonitorConfig {
            max_history: 7,
            thresholds: ResourceThresholds::default().with_disk(50.0, 60.0),
            ..Default::default()
        };
        let back = MonitorConfig::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_from_missing_file() {
        let result = MonitorConfig::from_file(Path::new("/nonexistent/resmon.toml"));
        assert!(matches!(result, Err(MonitorError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = std::env::temp_dir().join("resmon_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config_test.toml");
        std::fs::write(&path, "max_history = 3\n").unwrap();
        let c = MonitorConfig::from_file(&path).unwrap();
        assert_eq!(c.max_history, 3);
        let _ = std::fs::remove_file(&path);
    }
}
