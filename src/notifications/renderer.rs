// SPDX-License-Identifier: MPL-2.0
//! Renderer capability consumed by the notification manager.
//!
//! The engine never touches widgets or layout directly; everything visual
//! goes through this trait. A renderer keeps its own node-per-id bookkeeping
//! and must not mutate lifecycle state — user interactions travel back into
//! the manager as [`Message`](super::Message) values instead.

use super::notification::{Notification, NotificationId};

/// On-screen box of a mounted notification, in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Mounts, unmounts, and animates notification nodes.
///
/// Contract:
/// - `mount` attaches a node for the entity, initially *invisible*; the
///   manager flips visibility via `set_visible` (immediately for tag
///   replacements, after the reveal deferral otherwise). `before` positions
///   the node ahead of an already-mounted entity instead of appending.
/// - `set_visible(_, false)` starts the exit fade of a closing entity.
/// - `measure_box`/`freeze` capture and pin a node's current box so layout
///   does not jump while a tagged notification is replaced in place.
/// - `show_surface`/`hide_surface` toggle the shared overlay container; the
///   manager hides it only after the last node is unmounted.
pub trait Renderer {
    fn mount(&mut self, notification: &Notification, before: Option<NotificationId>);
    fn unmount(&mut self, id: NotificationId);
    fn set_visible(&mut self, id: NotificationId, visible: bool);
    fn measure_box(&mut self, id: NotificationId) -> Option<BoxBounds>;
    fn freeze(&mut self, id: NotificationId, bounds: BoxBounds);
    fn show_surface(&mut self);
    fn hide_surface(&mut self);
}
