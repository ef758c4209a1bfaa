// SPDX-License-Identifier: MPL-2.0
//! Iced integration: overlay surface, toast widgets, and timing plumbing.
//!
//! This layer follows the Elm-style "state down, messages up" pattern: the
//! widgets read the manager and surface state, and every interaction comes
//! back as a [`Message`](crate::notifications::Message) for
//! `Manager::handle_message`.
//!
//! # Components
//!
//! - [`surface`] - `IcedSurface`, the renderer backing the overlay
//! - [`toast`] - toast card and overlay widget views
//! - [`theme`] - design tokens and category accent mapping
//!
//! # Wiring
//!
//! ```ignore
//! // In your application's subscription():
//! iced_notify::ui::tick_subscription().map(AppMessage::Notifications)
//!
//! // In update():
//! AppMessage::Notifications(message) => self.toasts.handle_message(&message),
//!
//! // In view(), layered over your content:
//! Toast::view_overlay(&self.toasts).map(AppMessage::Notifications)
//! ```

mod surface;
pub mod theme;
mod toast;

use std::time::Duration;

use crate::config::TICK_INTERVAL_MS;
use crate::notifications::Message;

pub use surface::{IcedSurface, MountedToast};
pub use toast::Toast;

/// Periodic tick driving reveal, countdown, and removal timing.
///
/// Batch this into your application's subscriptions whenever notifications
/// may be on screen.
pub fn tick_subscription() -> iced::Subscription<Message> {
    let interval = Duration::from_millis(TICK_INTERVAL_MS);
    iced::time::every(interval).map(|_| Message::Tick(Duration::from_millis(TICK_INTERVAL_MS)))
}
