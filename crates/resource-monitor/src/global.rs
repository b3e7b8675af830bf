// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Process-wide monitor and the thread-safe wrapper around it.

use crate::{HealthStatus, MetricsSummary, ResourceMetrics, ResourceMonitor};
use once_cell::sync::OnceCell;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`ResourceMonitor`] behind a mutex, safe to share between threads.
///
/// Every access serialises on the lock, so history appends and threshold
/// updates from different callers never interleave.
#[derive(Debug)]
pub struct SharedMonitor {
    inner: Mutex<ResourceMonitor>,
}

impl SharedMonitor {
    pub fn new(monitor: ResourceMonitor) -> Self {
        Self {
            inner: Mutex::new(monitor),
        }
    }

    /// Locks the monitor for exclusive access.
    ///
    /// A poisoned lock is recovered: the monitor holds no invariant that a
    /// panicking caller could leave half-updated.
    pub fn lock(&self) -> MutexGuard<'_, ResourceMonitor> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`ResourceMonitor::current_metrics`].
    pub fn current_metrics(&self) -> ResourceMetrics {
        self.lock().current_metrics()
    }

    /// See [`ResourceMonitor::check_resource_health`].
    pub fn check_resource_health(&self) -> HealthStatus {
        self.lock().check_resource_health()
    }

    /// See [`ResourceMonitor::is_resource_available`].
    pub fn is_resource_available(&self) -> bool {
        self.lock().is_resource_available()
    }

    /// See [`ResourceMonitor::metrics_summary`].
    pub fn metrics_summary(&self) -> Option<MetricsSummary> {
        self.lock().metrics_summary()
    }

    /// See [`ResourceMonitor::set_monitoring_enabled`].
    pub fn set_monitoring_enabled(&self, enabled: bool) {
        self.lock().set_monitoring_enabled(enabled);
    }
}

static RESOURCE_MONITOR: OnceCell<SharedMonitor> = OnceCell::new();

/// Returns the process-wide monitor, constructing it on first use.
///
/// Every call returns the same instance, so all callers share one history
/// and one set of thresholds. There is no teardown.
pub fn get_resource_monitor() -> &'static SharedMonitor {
    RESOURCE_MONITOR.get_or_init(|| {
        tracing::debug!("initialising process-wide resource monitor");
        SharedMonitor::new(ResourceMonitor::new())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_same_instance() {
        let a = get_resource_monitor();
        let b = get_resource_monitor();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_state_visible_through_both_references() {
        let a = get_resource_monitor();
        let before = a.lock().history_len();
        a.current_metrics();
        a.current_metrics();
        let b = get_resource_monitor();
        let guard = b.lock();
        assert!(guard.history_len() >= (before + 2).min(guard.max_history()));
    }

    #[test]
    fn test_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| get_resource_monitor() as *const SharedMonitor as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_shared_across_threads() {
        let shared = Arc::new(SharedMonitor::new(ResourceMonitor::builder().max_history(1000).build()));
        shared.set_monitoring_enabled(false);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = Arc::clone(&shared);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        s.current_metrics();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(shared.lock().history_len(), 100);
        assert_eq!(shared.metrics_summary().map(|s| s.history_size), Some(100));
        assert!(shared.is_resource_available());
    }

    #[test]
    fn test_poisoned_lock_recovered() {
        let shared = Arc::new(SharedMonitor::new(ResourceMonitor::new()));
        let s = Arc::clone(&shared);
        let _ = std::thread::spawn(move || {
            let _guard = s.lock();
            panic!("poison the lock");
        })
        .join();
        shared.set_monitoring_enabled(false);
        assert!(shared.current_metrics().is_zeroed());
    }
}
