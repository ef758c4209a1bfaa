// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, tag replacement, and
//! dismissal of notifications. It limits how many notifications run an
//! auto-hide countdown at once and drives all timing from an explicit
//! tick pump, so nothing here reads the wall clock.

use std::collections::VecDeque;
use std::time::Duration;

use crate::config::{
    Config, DEFAULT_AUTO_HIDE_LIMIT, DEFAULT_AUTO_HIDE_SECS, MAX_AUTO_HIDE_LIMIT,
    MAX_AUTO_HIDE_SECS, MIN_AUTO_HIDE_LIMIT, MIN_AUTO_HIDE_SECS, REMOVAL_DELAY_MS, REVEAL_TICKS,
};
use crate::diagnostics::{CloseReason, EventLog, LifecycleEvent, LifecycleEventKind};

use super::notification::{Content, Notification, NotificationId, NotifyConfig, State};
use super::renderer::Renderer;

/// Messages for notification state changes, forwarded by the renderer layer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close a specific notification (click on its dismiss control).
    Dismiss(NotificationId),
    /// Pointer entered the overlay surface; suspend every countdown.
    PointerEntered,
    /// Pointer left the overlay surface; resume eligible countdowns.
    PointerExited,
    /// Advance reveal, countdown, and removal timing by the elapsed delta.
    Tick(Duration),
}

/// Caller-side handle to a notification.
///
/// Stays valid for the entity's whole life and beyond; operations on a
/// closed or removed notification are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationHandle(NotificationId);

impl NotificationHandle {
    /// Returns the underlying notification ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.0
    }
}

/// Manages the notification queue, display order, and countdown slots.
///
/// One instance owns every entity and the renderer it mounts them into.
/// All state mutation happens inside single `&mut self` calls, so the
/// open-count and slot invariants hold between any two operations.
#[derive(Debug)]
pub struct Manager<R: Renderer> {
    renderer: R,
    /// Mounted entities in display order, open ones and closed ones whose
    /// exit delay has not elapsed yet.
    entries: Vec<Notification>,
    /// Notifications created before the surface was ready (FIFO).
    pending: VecDeque<Notification>,
    surface_ready: bool,
    surface_shown: bool,
    open_count: usize,
    auto_hide_duration: Duration,
    auto_hide_limit: usize,
    /// Optional lifecycle event capture.
    log: Option<EventLog>,
    /// Accumulated tick time, used to stamp logged events.
    elapsed: Duration,
}

impl<R: Renderer> Manager<R> {
    /// Creates a manager with the default tunables, owning `renderer`.
    ///
    /// The surface starts not-ready: notifications are buffered until
    /// [`surface_ready`](Self::surface_ready) is called once.
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            entries: Vec::new(),
            pending: VecDeque::new(),
            surface_ready: false,
            surface_shown: false,
            open_count: 0,
            auto_hide_duration: Duration::from_secs_f32(DEFAULT_AUTO_HIDE_SECS),
            auto_hide_limit: DEFAULT_AUTO_HIDE_LIMIT,
            log: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Attaches a lifecycle event log. Events from before the attachment
    /// are not replayed.
    pub fn attach_log(&mut self, log: EventLog) {
        self.log = Some(log);
    }

    /// Returns the attached event log, if any.
    #[must_use]
    pub fn event_log(&self) -> Option<&EventLog> {
        self.log.as_ref()
    }

    /// Queues or displays a new notification.
    ///
    /// Never fails: a tag or category that sanitizes to nothing simply
    /// degrades to absent. Before the surface is ready the entity is
    /// buffered; afterwards it starts immediately.
    pub fn notify(&mut self, content: impl Into<Content>, config: NotifyConfig) -> NotificationHandle {
        let notification = Notification::new(content.into(), config);
        let id = notification.id();
        self.record(LifecycleEventKind::Created { id });

        if self.surface_ready {
            self.start(notification);
        } else {
            self.record(LifecycleEventKind::Buffered { id });
            self.pending.push_back(notification);
        }
        NotificationHandle(id)
    }

    /// Marks the display surface initialized and flushes the pre-ready
    /// buffer in FIFO order. One-time event; later calls are no-ops.
    pub fn surface_ready(&mut self) {
        if self.surface_ready {
            return;
        }
        self.surface_ready = true;
        while let Some(notification) = self.pending.pop_front() {
            self.start(notification);
        }
    }

    /// Closes a notification explicitly. No-op unless it is open.
    pub fn close(&mut self, handle: NotificationHandle) {
        self.close_with(handle.id(), CloseReason::Manual);
    }

    /// Suspends a notification's countdown. No-op if already paused.
    pub fn pause(&mut self, handle: NotificationHandle) {
        let id = handle.id();
        let Some(entry) = self.entries.iter_mut().find(|n| n.id() == id) else {
            return;
        };
        if entry.pause() {
            self.record(LifecycleEventKind::CountdownPaused { id });
        }
    }

    /// Restarts a notification's countdown from the full duration. No-op
    /// unless it is open, paused, and configured to auto-hide.
    pub fn resume(&mut self, handle: NotificationHandle) {
        let id = handle.id();
        let duration = self.auto_hide_duration;
        let Some(entry) = self.entries.iter_mut().find(|n| n.id() == id) else {
            return;
        };
        if entry.resume(duration) {
            self.record(LifecycleEventKind::CountdownStarted { id });
        }
    }

    /// Suspends every open notification's countdown (page-wide pause,
    /// e.g. while the pointer hovers over the surface).
    pub fn pause_all(&mut self) {
        let mut paused = Vec::new();
        for entry in &mut self.entries {
            if entry.state() == State::Open && entry.pause() {
                paused.push(entry.id());
            }
        }
        for id in paused {
            self.record(LifecycleEventKind::CountdownPaused { id });
        }
    }

    /// Resumes the first `auto_hide_limit` eligible notifications in
    /// display order. The global counterpart of [`pause_all`](Self::pause_all).
    pub fn resume_eligible(&mut self) {
        self.promote_eligible();
    }

    /// Advances all timing by `delta`: reveal deferrals, auto-hide
    /// countdowns (expiry closes the notification), and exit delays
    /// (expiry detaches the node and reclaims the slot).
    pub fn tick(&mut self, delta: Duration) {
        self.elapsed += delta;

        // Removal first: exit delays armed by a close during this same
        // tick start counting on the next one.
        let mut removable = Vec::new();
        for entry in &mut self.entries {
            if entry.tick_removal(delta) {
                removable.push(entry.id());
            }
        }
        for id in removable {
            self.remove(id);
        }

        // Reveal: mounted-invisible entities become visible once their
        // deferral runs out.
        let mut reveal = Vec::new();
        for entry in &mut self.entries {
            if entry.state() == State::Open && entry.tick_reveal() {
                reveal.push(entry.id());
            }
        }
        for id in reveal {
            self.renderer.set_visible(id, true);
        }

        // Countdowns: close everything that expired this tick.
        let mut expired = Vec::new();
        for entry in &mut self.entries {
            if entry.tick_countdown(delta) {
                expired.push(entry.id());
            }
        }
        for id in expired {
            self.close_with(id, CloseReason::Expired);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.close_with(*id, CloseReason::Dismissed);
            }
            Message::PointerEntered => self.pause_all(),
            Message::PointerExited => self.resume_eligible(),
            Message::Tick(delta) => self.tick(*delta),
        }
    }

    // ----------------------------------------------------------------------
    // Accessors
    // ----------------------------------------------------------------------

    /// Returns the number of notifications currently in the `Open` state.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Returns the number of notifications waiting for the surface.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the mounted notifications in display order (open ones and
    /// closed ones awaiting removal).
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Looks up a notification by id, mounted or still buffered.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries
            .iter()
            .find(|n| n.id() == id)
            .or_else(|| self.pending.iter().find(|n| n.id() == id))
    }

    /// Returns whether the surface has been marked ready.
    #[must_use]
    pub fn is_surface_ready(&self) -> bool {
        self.surface_ready
    }

    /// Returns the renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the renderer mutably, for input plumbing the renderer needs
    /// (e.g. reporting measured bounds).
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    // ----------------------------------------------------------------------
    // Tunables
    // ----------------------------------------------------------------------

    /// Sets the auto-hide countdown duration, clamped to the configured
    /// bounds. Running countdowns keep their remaining time; the new value
    /// applies from the next (re)start.
    pub fn set_auto_hide_duration(&mut self, duration: Duration) {
        let secs = duration
            .as_secs_f32()
            .clamp(MIN_AUTO_HIDE_SECS, MAX_AUTO_HIDE_SECS);
        self.auto_hide_duration = Duration::from_secs_f32(secs);
    }

    /// Returns the current auto-hide countdown duration.
    #[must_use]
    pub fn auto_hide_duration(&self) -> Duration {
        self.auto_hide_duration
    }

    /// Sets the concurrent-countdown limit, clamped to the configured
    /// bounds. Raising it promotes starved notifications immediately;
    /// lowering it lets running countdowns finish and only affects which
    /// notifications are promoted afterwards.
    pub fn set_auto_hide_limit(&mut self, limit: usize) {
        self.auto_hide_limit = limit.clamp(MIN_AUTO_HIDE_LIMIT, MAX_AUTO_HIDE_LIMIT);
        self.promote_eligible();
    }

    /// Returns the current concurrent-countdown limit.
    #[must_use]
    pub fn auto_hide_limit(&self) -> usize {
        self.auto_hide_limit
    }

    /// Applies a loaded configuration onto the tunables. Absent fields
    /// leave the current values untouched.
    pub fn apply_config(&mut self, config: &Config) {
        if let Some(secs) = config.auto_hide_seconds {
            let secs = secs.clamp(MIN_AUTO_HIDE_SECS, MAX_AUTO_HIDE_SECS);
            self.set_auto_hide_duration(Duration::from_secs_f32(secs));
        }
        if let Some(limit) = config.auto_hide_limit {
            self.set_auto_hide_limit(limit);
        }
    }

    // ----------------------------------------------------------------------
    // Lifecycle internals
    // ----------------------------------------------------------------------

    /// Opens a notification: tag replacement, mount, then a countdown slot
    /// if one is free.
    fn start(&mut self, mut notification: Notification) {
        let id = notification.id();
        if !notification.mark_open() {
            return;
        }
        self.open_count += 1;

        // Tag replacement: every open notification sharing the tag is
        // frozen in place and closed before the new one mounts where the
        // first of them stood.
        let mut replaced = Vec::new();
        let mut insert_at = None;
        if let Some(tag) = notification.tag() {
            for (index, entry) in self.entries.iter().enumerate() {
                if entry.state() == State::Open && entry.tag() == Some(tag) {
                    if insert_at.is_none() {
                        insert_at = Some(index);
                    }
                    replaced.push(entry.id());
                }
            }
        }
        let before = insert_at.map(|index| self.entries[index].id());

        for old in &replaced {
            if let Some(bounds) = self.renderer.measure_box(*old) {
                self.renderer.freeze(*old, bounds);
            }
            self.close_with(*old, CloseReason::Replaced);
        }

        if !self.surface_shown {
            self.renderer.show_surface();
            self.surface_shown = true;
        }
        self.renderer.mount(&notification, before);

        if before.is_some() {
            // Takes the replaced notification's place; visible right away.
            self.renderer.set_visible(id, true);
        } else {
            // Appended: two-phase reveal so the entry transition can run.
            notification.set_reveal(REVEAL_TICKS);
        }

        match insert_at {
            Some(index) => self.entries.insert(index, notification),
            None => self.entries.push(notification),
        }

        self.record(LifecycleEventKind::Opened { id });
        for old in replaced {
            self.record(LifecycleEventKind::Replaced { old, new: id });
        }

        // Countdown slot for the new entity only; everything already
        // running or starved keeps its state until the next close.
        let position = self
            .entries
            .iter()
            .filter(|n| n.is_eligible())
            .position(|n| n.id() == id);
        if let Some(position) = position {
            if position < self.auto_hide_limit {
                let duration = self.auto_hide_duration;
                if let Some(entry) = self.entries.iter_mut().find(|n| n.id() == id) {
                    if entry.resume(duration) {
                        self.record(LifecycleEventKind::CountdownStarted { id });
                    }
                }
            }
        }
    }

    /// `Open → Closed`: cancels the countdown, frees the slot, promotes
    /// the next eligible countdowns, and starts the exit fade. No-op (and
    /// `false`) unless the entity is open, so closing twice has the same
    /// observable effect as closing once.
    fn close_with(&mut self, id: NotificationId, reason: CloseReason) -> bool {
        let Some(index) = self.entries.iter().position(|n| n.id() == id) else {
            return false;
        };
        if !self.entries[index].mark_closed() {
            return false;
        }
        self.open_count -= 1;
        self.record(LifecycleEventKind::Closed { id, reason });

        // Synchronous with the close: the freed slot is handed on before
        // anything else observes the state.
        self.promote_eligible();

        self.renderer.set_visible(id, false);
        self.entries[index].arm_removal(Duration::from_millis(REMOVAL_DELAY_MS));
        true
    }

    /// Detaches a node whose exit delay elapsed and discards the entity.
    /// Hides the surface after the last node leaves.
    fn remove(&mut self, id: NotificationId) {
        let Some(index) = self.entries.iter().position(|n| n.id() == id) else {
            return;
        };
        self.entries.remove(index);
        self.record(LifecycleEventKind::Removed { id });

        if self.entries.is_empty() && self.surface_shown {
            self.renderer.hide_surface();
            self.surface_shown = false;
        }
        self.renderer.unmount(id);
    }

    /// Resumes the first `auto_hide_limit` eligible notifications in
    /// display order. Deliberately a global recompute rather than a
    /// freed-slot handoff: out-of-order closes promote the same entities
    /// either way only under this policy. Resuming a running countdown is
    /// a no-op, so no notification ever holds two timers.
    fn promote_eligible(&mut self) {
        let limit = self.auto_hide_limit;
        let duration = self.auto_hide_duration;
        let mut started = Vec::new();
        let mut seen = 0;
        for entry in &mut self.entries {
            if !entry.is_eligible() {
                continue;
            }
            if seen >= limit {
                break;
            }
            seen += 1;
            if entry.resume(duration) {
                started.push(entry.id());
            }
        }
        for id in started {
            self.record(LifecycleEventKind::CountdownStarted { id });
        }
    }

    fn record(&mut self, kind: LifecycleEventKind) {
        if let Some(log) = &mut self.log {
            log.push(LifecycleEvent::new(self.elapsed, kind));
        }
    }
}
