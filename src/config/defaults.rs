// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-hide**: countdown duration and concurrent-countdown limit
//! - **Timing**: tick interval, reveal deferral, post-close removal delay
//! - **Event Log**: lifecycle event log capacity

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Default countdown duration before an auto-hide notification closes
/// itself (in seconds).
pub const DEFAULT_AUTO_HIDE_SECS: f32 = 5.0;

/// Minimum allowed auto-hide duration (in seconds).
pub const MIN_AUTO_HIDE_SECS: f32 = 0.5;

/// Maximum allowed auto-hide duration (in seconds).
pub const MAX_AUTO_HIDE_SECS: f32 = 300.0;

/// Default number of notifications that may run an auto-hide countdown
/// at the same time. Eligible notifications beyond this limit stay paused
/// until a slot frees up.
pub const DEFAULT_AUTO_HIDE_LIMIT: usize = 3;

/// Minimum allowed concurrent-countdown limit.
pub const MIN_AUTO_HIDE_LIMIT: usize = 1;

/// Maximum allowed concurrent-countdown limit.
pub const MAX_AUTO_HIDE_LIMIT: usize = 16;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Interval between `Message::Tick` deliveries (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 100;

/// Number of ticks a freshly appended notification stays mounted but
/// invisible, so its entry transition has a frame to start from.
pub const REVEAL_TICKS: u8 = 2;

/// Delay between closing a notification and detaching its node (in
/// milliseconds), leaving room for the exit transition.
pub const REMOVAL_DELAY_MS: u64 = 500;

// ==========================================================================
// Event Log Defaults
// ==========================================================================

/// Default capacity of the lifecycle event log.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 256;

/// Minimum event log capacity.
pub const MIN_EVENT_LOG_CAPACITY: usize = 16;

/// Maximum event log capacity.
pub const MAX_EVENT_LOG_CAPACITY: usize = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Auto-hide validation
    assert!(MIN_AUTO_HIDE_SECS > 0.0);
    assert!(MAX_AUTO_HIDE_SECS > MIN_AUTO_HIDE_SECS);
    assert!(DEFAULT_AUTO_HIDE_SECS >= MIN_AUTO_HIDE_SECS);
    assert!(DEFAULT_AUTO_HIDE_SECS <= MAX_AUTO_HIDE_SECS);
    assert!(MIN_AUTO_HIDE_LIMIT > 0);
    assert!(MAX_AUTO_HIDE_LIMIT >= MIN_AUTO_HIDE_LIMIT);
    assert!(DEFAULT_AUTO_HIDE_LIMIT >= MIN_AUTO_HIDE_LIMIT);
    assert!(DEFAULT_AUTO_HIDE_LIMIT <= MAX_AUTO_HIDE_LIMIT);

    // Timing validation
    assert!(TICK_INTERVAL_MS > 0);
    assert!(REVEAL_TICKS > 0);
    assert!(REMOVAL_DELAY_MS > 0);

    // Event log validation
    assert!(MIN_EVENT_LOG_CAPACITY > 0);
    assert!(MAX_EVENT_LOG_CAPACITY >= MIN_EVENT_LOG_CAPACITY);
    assert!(DEFAULT_EVENT_LOG_CAPACITY >= MIN_EVENT_LOG_CAPACITY);
    assert!(DEFAULT_EVENT_LOG_CAPACITY <= MAX_EVENT_LOG_CAPACITY);
};
