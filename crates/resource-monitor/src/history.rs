// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Bounded, insertion-ordered sample history with FIFO eviction.

use crate::ResourceMetrics;
use std::collections::VecDeque;

/// Default number of samples retained by a monitor.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// The most recent `capacity` samples, oldest first.
///
/// Capacity is clamped to at least 1 so the latest sample is always kept.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: VecDeque<ResourceMetrics>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Creates an empty buffer holding at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity.min(DEFAULT_MAX_HISTORY)),
            capacity,
        }
    }

    /// Appends a sample, evicting the oldest entries beyond capacity.
    pub fn push(&mut self, metrics: ResourceMetrics) {
        self.samples.push_back(metrics);
        self.evict();
    }

    /// Changes the capacity, evicting the oldest surplus immediately.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict();
    }

    fn evict(&mut self) {
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recently appended sample.
    pub fn latest(&self) -> Option<&ResourceMetrics> {
        self.samples.back()
    }

    /// Iterates samples from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ResourceMetrics> + ExactSizeIterator {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}
