// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` entity with its lifecycle state
//! machine, the `Content` payload, and the `NotifyConfig` options struct.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::sanitizer::sanitize;

/// Unique identifier for a notification.
///
/// Renderers correlate their visual nodes to entities through this id; it is
/// the only handle the engine ever shares with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Message payload of a notification.
///
/// Opaque to the engine beyond being handed to the renderer, which decides
/// how each variant is presented.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// A single line of plain text.
    Text(String),
    /// Structured multi-line content, one entry per line.
    Lines(Vec<String>),
    /// Pre-rendered markup the renderer may interpret.
    Markup(String),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Vec<String>> for Content {
    fn from(lines: Vec<String>) -> Self {
        Content::Lines(lines)
    }
}

/// Per-notification options, immutable after creation.
///
/// `tag` and `category` pass through [`sanitize`] when the entity is
/// constructed; a label that reduces to nothing is dropped to `None`.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Close automatically after the countdown elapses. Defaults to `true`.
    pub auto_hide: bool,
    /// Replacement key: at most one open notification per non-empty tag.
    pub tag: Option<String>,
    /// Optional title line shown above the content.
    pub title: Option<String>,
    /// Free-text classification label, used by renderers for styling.
    pub category: Option<String>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NotifyConfig {
    /// Creates the default configuration: auto-hide on, no tag, no title,
    /// no category.
    #[must_use]
    pub fn new() -> Self {
        Self {
            auto_hide: true,
            tag: None,
            title: None,
            category: None,
        }
    }

    /// Disables the auto-hide countdown; the notification stays until
    /// closed explicitly.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.auto_hide = false;
        self
    }

    /// Sets the replacement tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the title line.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the classification category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Lifecycle state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Created but not yet displayed (pre-ready buffer).
    Queued,
    /// Mounted and lifecycle-active.
    Open,
    /// Terminal; awaiting node removal.
    Closed,
}

/// A single queued or displayed notification.
///
/// The manager owns the lifecycle; renderers hold only the id. State moves
/// `Queued → Open → Closed`, each transition exactly once. The countdown,
/// reveal, and removal fields are advanced by the manager's tick pump.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    content: Content,
    config: NotifyConfig,
    state: State,
    /// Countdown suspended. Starts `true`; cleared the first time the
    /// limiter grants a slot.
    paused: bool,
    /// Remaining auto-hide countdown while running.
    remaining: Option<Duration>,
    /// Render opportunities left before the mounted node becomes visible.
    reveal_ticks: Option<u8>,
    /// Remaining exit delay once closed.
    removal: Option<Duration>,
}

impl Notification {
    /// Creates a new notification in the `Queued` state.
    ///
    /// `tag` and `category` are sanitized here; labels that reduce to an
    /// empty string are treated as absent.
    pub fn new(content: Content, mut config: NotifyConfig) -> Self {
        config.tag = config
            .tag
            .as_deref()
            .map(sanitize)
            .filter(|tag| !tag.is_empty());
        config.category = config
            .category
            .as_deref()
            .map(sanitize)
            .filter(|category| !category.is_empty());

        Self {
            id: NotificationId::new(),
            content,
            config,
            state: State::Queued,
            paused: true,
            remaining: None,
            reveal_ticks: None,
            removal: None,
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the message payload.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Returns the creation-time configuration.
    #[must_use]
    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the sanitized replacement tag, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.config.tag.as_deref()
    }

    /// Returns the title line, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.config.title.as_deref()
    }

    /// Returns the sanitized category, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.config.category.as_deref()
    }

    /// Returns whether the countdown is suspended.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns whether an auto-hide countdown is currently running.
    #[must_use]
    pub fn is_counting_down(&self) -> bool {
        self.remaining.is_some()
    }

    /// Returns whether this entity occupies a countdown slot: open and
    /// configured to auto-hide. Closed entities never count.
    #[must_use]
    pub fn is_eligible(&self) -> bool {
        self.state == State::Open && self.config.auto_hide
    }

    // ----------------------------------------------------------------------
    // Lifecycle transitions, driven by the manager
    // ----------------------------------------------------------------------

    /// `Queued → Open`. Returns `false` (and does nothing) from any other
    /// state, so an entity opens at most once.
    pub(crate) fn mark_open(&mut self) -> bool {
        if self.state != State::Queued {
            return false;
        }
        self.state = State::Open;
        true
    }

    /// `Open → Closed`. Cancels the countdown and any pending reveal.
    /// Returns `false` (and does nothing) unless currently open.
    pub(crate) fn mark_closed(&mut self) -> bool {
        if self.state != State::Open {
            return false;
        }
        self.state = State::Closed;
        self.paused = true;
        self.remaining = None;
        self.reveal_ticks = None;
        true
    }

    /// Suspends the countdown. No-op if already paused.
    pub(crate) fn pause(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.paused = true;
        self.remaining = None;
        true
    }

    /// Starts the countdown from the full duration. A resume is never a
    /// continuation of elapsed time. No-op unless paused, open, and
    /// configured to auto-hide; resuming a running countdown is therefore
    /// a no-op and never produces a second timer.
    pub(crate) fn resume(&mut self, full: Duration) -> bool {
        if !self.paused || !self.is_eligible() {
            return false;
        }
        self.paused = false;
        self.remaining = Some(full);
        true
    }

    /// Defers visibility for `ticks` render opportunities.
    pub(crate) fn set_reveal(&mut self, ticks: u8) {
        self.reveal_ticks = Some(ticks);
    }

    /// Advances the reveal deferral. Returns `true` on the tick the node
    /// should become visible.
    pub(crate) fn tick_reveal(&mut self) -> bool {
        match self.reveal_ticks {
            Some(1) => {
                self.reveal_ticks = None;
                true
            }
            Some(ticks) => {
                self.reveal_ticks = Some(ticks - 1);
                false
            }
            None => false,
        }
    }

    /// Advances the running countdown. Returns `true` on the tick it
    /// expires; the countdown is cleared so expiry fires once.
    pub(crate) fn tick_countdown(&mut self, delta: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let left = remaining.saturating_sub(delta);
        if left.is_zero() {
            self.remaining = None;
            self.paused = true;
            true
        } else {
            self.remaining = Some(left);
            false
        }
    }

    /// Arms the post-close exit delay.
    pub(crate) fn arm_removal(&mut self, delay: Duration) {
        self.removal = Some(delay);
    }

    /// Advances the exit delay. Returns `true` on the tick the node should
    /// be detached.
    pub(crate) fn tick_removal(&mut self, delta: Duration) -> bool {
        let Some(removal) = self.removal else {
            return false;
        };
        let left = removal.saturating_sub(delta);
        if left.is_zero() {
            self.removal = None;
            true
        } else {
            self.removal = Some(left);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(notification: &mut Notification) {
        assert!(notification.mark_open());
    }

    #[test]
    fn notification_ids_are_unique() {
        let a = Notification::new("a".into(), NotifyConfig::new());
        let b = Notification::new("b".into(), NotifyConfig::new());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn new_notification_starts_queued_and_paused() {
        let n = Notification::new("hello".into(), NotifyConfig::new());
        assert_eq!(n.state(), State::Queued);
        assert!(n.is_paused());
        assert!(!n.is_counting_down());
    }

    #[test]
    fn tag_is_sanitized_at_creation() {
        let n = Notification::new("x".into(), NotifyConfig::new().with_tag("foo bar!!"));
        assert_eq!(n.tag(), Some("foo-bar"));
    }

    #[test]
    fn tag_reducing_to_empty_is_dropped() {
        let n = Notification::new("x".into(), NotifyConfig::new().with_tag("!!!"));
        assert_eq!(n.tag(), None);
    }

    #[test]
    fn category_is_sanitized_like_tag() {
        let n = Notification::new("x".into(), NotifyConfig::new().with_category("warn ing"));
        assert_eq!(n.category(), Some("warn-ing"));
    }

    #[test]
    fn mark_open_only_succeeds_from_queued() {
        let mut n = Notification::new("x".into(), NotifyConfig::new());
        assert!(n.mark_open());
        assert!(!n.mark_open());
        assert!(n.mark_closed());
        assert!(!n.mark_open());
    }

    #[test]
    fn mark_closed_only_succeeds_from_open() {
        let mut n = Notification::new("x".into(), NotifyConfig::new());
        assert!(!n.mark_closed());
        open(&mut n);
        assert!(n.mark_closed());
        assert!(!n.mark_closed());
    }

    #[test]
    fn resume_requires_open_auto_hide_and_paused() {
        let mut sticky = Notification::new("x".into(), NotifyConfig::new().sticky());
        open(&mut sticky);
        assert!(!sticky.resume(Duration::from_secs(5)));

        let mut n = Notification::new("x".into(), NotifyConfig::new());
        assert!(!n.resume(Duration::from_secs(5))); // still queued
        open(&mut n);
        assert!(n.resume(Duration::from_secs(5)));
        assert!(!n.resume(Duration::from_secs(5))); // already running
    }

    #[test]
    fn resume_restarts_from_full_duration() {
        let mut n = Notification::new("x".into(), NotifyConfig::new());
        open(&mut n);
        assert!(n.resume(Duration::from_secs(5)));
        assert!(!n.tick_countdown(Duration::from_secs(3)));
        assert!(n.pause());
        assert!(n.resume(Duration::from_secs(5)));
        // A full five seconds again, not the two that were left.
        assert!(!n.tick_countdown(Duration::from_secs(4)));
        assert!(n.tick_countdown(Duration::from_secs(1)));
    }

    #[test]
    fn countdown_expires_exactly_once() {
        let mut n = Notification::new("x".into(), NotifyConfig::new());
        open(&mut n);
        assert!(n.resume(Duration::from_millis(200)));
        assert!(!n.tick_countdown(Duration::from_millis(100)));
        assert!(n.tick_countdown(Duration::from_millis(100)));
        assert!(!n.tick_countdown(Duration::from_millis(100)));
        assert!(n.is_paused());
    }

    #[test]
    fn mark_closed_cancels_countdown_and_reveal() {
        let mut n = Notification::new("x".into(), NotifyConfig::new());
        open(&mut n);
        n.set_reveal(2);
        assert!(n.resume(Duration::from_secs(5)));
        assert!(n.mark_closed());
        assert!(!n.is_counting_down());
        assert!(!n.tick_reveal());
        assert!(!n.is_eligible());
    }

    #[test]
    fn reveal_fires_after_configured_ticks() {
        let mut n = Notification::new("x".into(), NotifyConfig::new());
        open(&mut n);
        n.set_reveal(2);
        assert!(!n.tick_reveal());
        assert!(n.tick_reveal());
        assert!(!n.tick_reveal());
    }

    #[test]
    fn removal_fires_after_delay_elapses() {
        let mut n = Notification::new("x".into(), NotifyConfig::new());
        open(&mut n);
        n.mark_closed();
        n.arm_removal(Duration::from_millis(500));
        assert!(!n.tick_removal(Duration::from_millis(300)));
        assert!(n.tick_removal(Duration::from_millis(300)));
        assert!(!n.tick_removal(Duration::from_millis(300)));
    }

    #[test]
    fn config_builder_sets_all_fields() {
        let config = NotifyConfig::new()
            .sticky()
            .with_tag("upload")
            .with_title("Upload")
            .with_category("progress");
        assert!(!config.auto_hide);
        assert_eq!(config.tag.as_deref(), Some("upload"));
        assert_eq!(config.title.as_deref(), Some("Upload"));
        assert_eq!(config.category.as_deref(), Some("progress"));
    }

    #[test]
    fn content_conversions() {
        assert_eq!(Content::from("hi"), Content::Text("hi".to_string()));
        assert_eq!(
            Content::from(vec!["a".to_string(), "b".to_string()]),
            Content::Lines(vec!["a".to_string(), "b".to_string()])
        );
    }
}
