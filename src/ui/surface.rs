// SPDX-License-Identifier: MPL-2.0
//! Overlay surface state backing the Iced toast widgets.
//!
//! `IcedSurface` implements the engine's [`Renderer`] contract by tracking
//! which notifications are mounted, in what order, and with what visual
//! state. The widget layer reads this state back when building the overlay;
//! nothing here touches Iced types, so the surface is unit-testable on its
//! own.

use std::collections::HashMap;

use crate::notifications::{BoxBounds, Notification, NotificationId, Renderer};

/// Visual bookkeeping for one mounted notification.
#[derive(Debug, Clone)]
pub struct MountedToast {
    id: NotificationId,
    visible: bool,
    frozen: Option<BoxBounds>,
}

impl MountedToast {
    /// Returns the notification this node belongs to.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns whether the node is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the pinned box while the node is frozen in place.
    #[must_use]
    pub fn frozen(&self) -> Option<BoxBounds> {
        self.frozen
    }
}

/// Renderer implementation for Iced overlays.
///
/// Owns the node-per-id mapping the engine correlates against. Measured
/// bounds arrive from the application's layout pass via
/// [`report_bounds`](Self::report_bounds); until a node has been reported
/// it simply cannot be frozen, which degrades to a replacement without the
/// pinned-box polish.
#[derive(Debug, Clone, Default)]
pub struct IcedSurface {
    toasts: Vec<MountedToast>,
    bounds: HashMap<NotificationId, BoxBounds>,
    shown: bool,
}

impl IcedSurface {
    /// Creates an empty, hidden surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the overlay container is shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Returns the mounted toasts in display order.
    pub fn toasts(&self) -> impl Iterator<Item = &MountedToast> {
        self.toasts.iter()
    }

    /// Returns the number of mounted toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns true when nothing is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Records a node's laid-out box, making it measurable for the
    /// freeze-in-place step of tag replacement.
    pub fn report_bounds(&mut self, id: NotificationId, bounds: BoxBounds) {
        if self.toasts.iter().any(|toast| toast.id == id) {
            self.bounds.insert(id, bounds);
        }
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.toasts.iter().position(|toast| toast.id == id)
    }
}

impl Renderer for IcedSurface {
    fn mount(&mut self, notification: &Notification, before: Option<NotificationId>) {
        let toast = MountedToast {
            id: notification.id(),
            visible: false,
            frozen: None,
        };
        match before.and_then(|id| self.position(id)) {
            Some(index) => self.toasts.insert(index, toast),
            None => self.toasts.push(toast),
        }
    }

    fn unmount(&mut self, id: NotificationId) {
        self.toasts.retain(|toast| toast.id != id);
        self.bounds.remove(&id);
    }

    fn set_visible(&mut self, id: NotificationId, visible: bool) {
        if let Some(index) = self.position(id) {
            self.toasts[index].visible = visible;
        }
    }

    fn measure_box(&mut self, id: NotificationId) -> Option<BoxBounds> {
        self.bounds.get(&id).copied()
    }

    fn freeze(&mut self, id: NotificationId, bounds: BoxBounds) {
        if let Some(index) = self.position(id) {
            self.toasts[index].frozen = Some(bounds);
        }
    }

    fn show_surface(&mut self) {
        self.shown = true;
    }

    fn hide_surface(&mut self) {
        self.shown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotifyConfig;

    fn mounted(surface: &mut IcedSurface, before: Option<NotificationId>) -> NotificationId {
        let notification = Notification::new("x".into(), NotifyConfig::new());
        let id = notification.id();
        surface.mount(&notification, before);
        id
    }

    #[test]
    fn mount_appends_in_order() {
        let mut surface = IcedSurface::new();
        let a = mounted(&mut surface, None);
        let b = mounted(&mut surface, None);
        let order: Vec<_> = surface.toasts().map(MountedToast::id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn mount_before_inserts_at_target_position() {
        let mut surface = IcedSurface::new();
        let a = mounted(&mut surface, None);
        let b = mounted(&mut surface, None);
        let c = mounted(&mut surface, Some(b));
        let order: Vec<_> = surface.toasts().map(MountedToast::id).collect();
        assert_eq!(order, vec![a, c, b]);
    }

    #[test]
    fn mount_before_unknown_id_appends() {
        let mut surface = IcedSurface::new();
        let a = mounted(&mut surface, None);
        let ghost = Notification::new("g".into(), NotifyConfig::new()).id();
        let b = mounted(&mut surface, Some(ghost));
        let order: Vec<_> = surface.toasts().map(MountedToast::id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn nodes_mount_invisible_until_revealed() {
        let mut surface = IcedSurface::new();
        let id = mounted(&mut surface, None);
        assert!(!surface.toasts().next().unwrap().is_visible());
        surface.set_visible(id, true);
        assert!(surface.toasts().next().unwrap().is_visible());
    }

    #[test]
    fn measure_requires_reported_bounds() {
        let mut surface = IcedSurface::new();
        let id = mounted(&mut surface, None);
        assert!(surface.measure_box(id).is_none());

        let bounds = BoxBounds {
            x: 4.0,
            y: 8.0,
            width: 320.0,
            height: 48.0,
        };
        surface.report_bounds(id, bounds);
        assert_eq!(surface.measure_box(id), Some(bounds));
    }

    #[test]
    fn report_bounds_ignores_unmounted_ids() {
        let mut surface = IcedSurface::new();
        let ghost = Notification::new("g".into(), NotifyConfig::new()).id();
        surface.report_bounds(ghost, BoxBounds::default());
        assert!(surface.measure_box(ghost).is_none());
    }

    #[test]
    fn freeze_pins_the_given_box() {
        let mut surface = IcedSurface::new();
        let id = mounted(&mut surface, None);
        let bounds = BoxBounds {
            x: 0.0,
            y: 0.0,
            width: 280.0,
            height: 40.0,
        };
        surface.freeze(id, bounds);
        assert_eq!(surface.toasts().next().unwrap().frozen(), Some(bounds));
    }

    #[test]
    fn unmount_forgets_node_and_bounds() {
        let mut surface = IcedSurface::new();
        let id = mounted(&mut surface, None);
        surface.report_bounds(id, BoxBounds::default());
        surface.unmount(id);
        assert!(surface.is_empty());
        assert!(surface.measure_box(id).is_none());
    }

    #[test]
    fn show_and_hide_toggle_surface() {
        let mut surface = IcedSurface::new();
        assert!(!surface.is_shown());
        surface.show_surface();
        assert!(surface.is_shown());
        surface.hide_surface();
        assert!(!surface.is_shown());
    }
}
