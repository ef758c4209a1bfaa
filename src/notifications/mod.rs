// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle engine.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction, and close themselves after a countdown unless paused.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` entity with its state machine
//! - [`manager`] - `Manager` for queuing, tag replacement, and countdown slots
//! - [`renderer`] - `Renderer` capability the manager mounts entities into
//! - [`sanitizer`] - tag/category label normalization
//!
//! # Usage
//!
//! ```ignore
//! use iced_notify::notifications::{Manager, Message, NotifyConfig};
//!
//! // Create a manager around a renderer and mark the surface ready.
//! let mut manager = Manager::new(surface);
//! manager.surface_ready();
//!
//! // Push a notification; a later one with the same tag replaces it.
//! let handle = manager.notify("Image saved", NotifyConfig::new().with_tag("save"));
//!
//! // Pump timing from your runtime's tick.
//! manager.handle_message(&Message::Tick(delta));
//! ```
//!
//! # Design Considerations
//!
//! - At most `auto_hide_limit` countdowns run at once; further eligible
//!   notifications wait paused, in display order, for a freed slot.
//! - One open notification per non-empty tag; newer ones replace in place.
//! - All timing flows through `Manager::tick`, so tests drive the engine
//!   with synthetic deltas and a recording renderer.

mod manager;
mod notification;
mod renderer;
mod sanitizer;

pub use manager::{Manager, Message, NotificationHandle};
pub use notification::{Content, Notification, NotificationId, NotifyConfig, State};
pub use renderer::{BoxBounds, Renderer};
pub use sanitizer::sanitize;
