// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types for notification activity tracking.
//!
//! This module defines the events the manager records while notifications
//! move through their lifecycle, for debugging and activity reports.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::notifications::NotificationId;

/// Why a notification left the `Open` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The auto-hide countdown ran out.
    Expired,
    /// The user clicked the dismiss control.
    Dismissed,
    /// A newer notification with the same tag took its place.
    Replaced,
    /// The owning code closed it through its handle.
    Manual,
}

/// A lifecycle event with the engine time at which it occurred.
///
/// `elapsed` is the manager's accumulated tick time, not wall-clock time,
/// so logs captured under synthetic ticks carry meaningful timestamps too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleEvent {
    /// Engine time of the event.
    pub elapsed: Duration,
    /// The kind and data of the event.
    #[serde(flatten)]
    pub kind: LifecycleEventKind,
}

impl LifecycleEvent {
    /// Creates a new event stamped with the given engine time.
    #[must_use]
    pub fn new(elapsed: Duration, kind: LifecycleEventKind) -> Self {
        Self { elapsed, kind }
    }
}

/// The kind and associated data of a lifecycle event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LifecycleEventKind {
    /// Entity constructed by `notify`.
    Created { id: NotificationId },
    /// Entity buffered because the surface was not ready yet.
    Buffered { id: NotificationId },
    /// Entity transitioned to `Open` and mounted.
    Opened { id: NotificationId },
    /// `old` was closed in place to make room for `new` under a shared tag.
    Replaced {
        old: NotificationId,
        new: NotificationId,
    },
    /// An auto-hide countdown started or restarted.
    CountdownStarted { id: NotificationId },
    /// An auto-hide countdown was suspended.
    CountdownPaused { id: NotificationId },
    /// Entity transitioned to `Closed`.
    Closed {
        id: NotificationId,
        reason: CloseReason,
    },
    /// Entity discarded after its exit delay.
    Removed { id: NotificationId },
}
