// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit and integration tests.
//!
//! The `RecordingRenderer` stands in for a real surface: it captures every
//! renderer call in order so tests can assert on the exact mount/visibility
//! sequence the engine produced.

use crate::notifications::{BoxBounds, Notification, NotificationId, Renderer};

/// One captured renderer invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum RendererCall {
    Mount {
        id: NotificationId,
        before: Option<NotificationId>,
    },
    Unmount {
        id: NotificationId,
    },
    SetVisible {
        id: NotificationId,
        visible: bool,
    },
    Freeze {
        id: NotificationId,
    },
    ShowSurface,
    HideSurface,
}

/// A renderer that records calls instead of drawing.
///
/// `measure_box` answers with `bounds`, so replacement freezing is
/// exercised by default; set it to `None` to simulate a node that cannot
/// be measured.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    /// Every call in invocation order.
    pub calls: Vec<RendererCall>,
    /// The box reported for any mounted notification.
    pub bounds: Option<BoxBounds>,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRenderer {
    /// Creates a recorder with a fixed measurable box.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            bounds: Some(BoxBounds {
                x: 0.0,
                y: 0.0,
                width: 320.0,
                height: 48.0,
            }),
        }
    }

    /// Returns the ids mounted so far, in mount order.
    #[must_use]
    pub fn mount_order(&self) -> Vec<NotificationId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RendererCall::Mount { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn mount(&mut self, notification: &Notification, before: Option<NotificationId>) {
        self.calls.push(RendererCall::Mount {
            id: notification.id(),
            before,
        });
    }

    fn unmount(&mut self, id: NotificationId) {
        self.calls.push(RendererCall::Unmount { id });
    }

    fn set_visible(&mut self, id: NotificationId, visible: bool) {
        self.calls.push(RendererCall::SetVisible { id, visible });
    }

    fn measure_box(&mut self, _id: NotificationId) -> Option<BoxBounds> {
        self.bounds
    }

    fn freeze(&mut self, id: NotificationId, _bounds: BoxBounds) {
        self.calls.push(RendererCall::Freeze { id });
    }

    fn show_surface(&mut self) {
        self.calls.push(RendererCall::ShowSurface);
    }

    fn hide_surface(&mut self) {
        self.calls.push(RendererCall::HideSurface);
    }
}
