// SPDX-License-Identifier: MPL-2.0
//! Capacity-bounded storage for lifecycle events.
//!
//! The log keeps the most recent events and evicts the oldest ones once
//! full, so a long-lived manager cannot grow without bound.

use std::collections::VecDeque;

use crate::config::{DEFAULT_EVENT_LOG_CAPACITY, MAX_EVENT_LOG_CAPACITY, MIN_EVENT_LOG_CAPACITY};

use super::events::LifecycleEvent;

/// A bounded event log, oldest events first.
///
/// # Example
///
/// ```
/// use iced_notify::diagnostics::EventLog;
///
/// let log = EventLog::with_capacity(64);
/// assert_eq!(log.capacity(), 64);
/// assert!(log.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<LifecycleEvent>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    /// Creates a log with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_LOG_CAPACITY)
    }

    /// Creates a log with the given capacity, clamped to the configured
    /// bounds.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_EVENT_LOG_CAPACITY, MAX_EVENT_LOG_CAPACITY);
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an event, evicting the oldest one when full.
    pub fn push(&mut self, event: LifecycleEvent) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Returns the events in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &LifecycleEvent> {
        self.events.iter()
    }

    /// Returns the number of stored events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true when no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the maximum number of stored events.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discards all stored events. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Exports the stored events as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let events: Vec<&LifecycleEvent> = self.events.iter().collect();
        serde_json::to_string(&events)
    }
}
