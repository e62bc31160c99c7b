// SPDX-License-Identifier: MPL-2.0
//! Toast request payloads.
//!
//! A [`ToastRequest`] describes one toast occurrence: its message, a
//! status tag the presentation layer may style by, and optional overrides
//! of the surface's mount defaults. Requests are immutable once enqueued;
//! the queue owns them until dequeue, then the surface owns them for the
//! displayed lifetime.

use crate::gesture::SwipeDirection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Message status tag, used by the presentation layer to pick styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastStatus {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

/// Where on the screen the toast surface is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Top,
    Bottom,
    Center,
}

/// Host callback attached to a toast request.
pub type ToastCallback = Box<dyn Fn()>;

/// The payload for one toast occurrence.
///
/// Every field except the message is optional; unset fields fall back to
/// the mounted surface's defaults. Built with the status constructors and
/// builder methods:
///
/// ```
/// use iced_toaster::{SwipeDirection, ToastRequest};
/// use std::time::Duration;
///
/// let request = ToastRequest::success("Saved")
///     .duration(Duration::from_secs(5))
///     .swipe_directions(vec![SwipeDirection::Up]);
/// assert_eq!(request.message(), "Saved");
/// ```
pub struct ToastRequest {
    message: String,
    status: ToastStatus,
    duration: Option<Duration>,
    always_visible: Option<bool>,
    animation_in_timing: Option<Duration>,
    animation_out_timing: Option<Duration>,
    swipe_directions: Option<Vec<SwipeDirection>>,
    position: Option<Position>,
    offset: Option<f32>,
    on_press: Option<ToastCallback>,
    on_hide: Option<ToastCallback>,
}

impl ToastRequest {
    /// Creates a request with the given message and status.
    pub fn new(message: impl Into<String>, status: ToastStatus) -> Self {
        Self {
            message: message.into(),
            status,
            duration: None,
            always_visible: None,
            animation_in_timing: None,
            animation_out_timing: None,
            swipe_directions: None,
            position: None,
            offset: None,
            on_press: None,
            on_hide: None,
        }
    }

    /// Creates a success request.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStatus::Success)
    }

    /// Creates a danger request.
    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message, ToastStatus::Danger)
    }

    /// Creates a warning request.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastStatus::Warning)
    }

    /// Creates an info request.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStatus::Info)
    }

    /// Overrides how long the toast stays visible before auto-hiding.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Exempts the toast from the auto-hide timer.
    ///
    /// An always-visible toast is dismissed only by an explicit `hide`
    /// call, a press, or a user swipe.
    #[must_use]
    pub fn always_visible(mut self, always_visible: bool) -> Self {
        self.always_visible = Some(always_visible);
        self
    }

    /// Overrides the enter animation duration.
    #[must_use]
    pub fn animation_in_timing(mut self, timing: Duration) -> Self {
        self.animation_in_timing = Some(timing);
        self
    }

    /// Overrides the exit animation duration.
    #[must_use]
    pub fn animation_out_timing(mut self, timing: Duration) -> Self {
        self.animation_out_timing = Some(timing);
        self
    }

    /// Overrides the directions the toast may be swiped away in.
    #[must_use]
    pub fn swipe_directions(mut self, directions: Vec<SwipeDirection>) -> Self {
        self.swipe_directions = Some(directions);
        self
    }

    /// Overrides the screen anchor for this toast.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Overrides the extra offset (px) from the anchored edge.
    #[must_use]
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the callback invoked when the toast is pressed.
    #[must_use]
    pub fn on_press(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_press = Some(Box::new(callback));
        self
    }

    /// Sets the callback invoked after the toast has fully hidden.
    #[must_use]
    pub fn on_hide(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_hide = Some(Box::new(callback));
        self
    }

    /// The message to display.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The status tag.
    #[must_use]
    pub fn status(&self) -> ToastStatus {
        self.status
    }

    /// Per-request visible duration, if overridden.
    #[must_use]
    pub fn duration_override(&self) -> Option<Duration> {
        self.duration
    }

    /// Per-request always-visible flag, if overridden.
    #[must_use]
    pub fn always_visible_override(&self) -> Option<bool> {
        self.always_visible
    }

    /// Per-request enter timing, if overridden.
    #[must_use]
    pub fn animation_in_override(&self) -> Option<Duration> {
        self.animation_in_timing
    }

    /// Per-request exit timing, if overridden.
    #[must_use]
    pub fn animation_out_override(&self) -> Option<Duration> {
        self.animation_out_timing
    }

    /// Per-request swipe allow-list, if overridden.
    #[must_use]
    pub fn swipe_directions_override(&self) -> Option<&[SwipeDirection]> {
        self.swipe_directions.as_deref()
    }

    /// Per-request position, if overridden.
    #[must_use]
    pub fn position_override(&self) -> Option<Position> {
        self.position
    }

    /// Per-request offset, if overridden.
    #[must_use]
    pub fn offset_override(&self) -> Option<f32> {
        self.offset
    }

    /// Invokes the press callback, if any.
    pub(crate) fn notify_press(&self) {
        if let Some(callback) = &self.on_press {
            callback();
        }
    }

    /// Invokes the hide callback, if any.
    pub(crate) fn notify_hide(&self) {
        if let Some(callback) = &self.on_hide {
            callback();
        }
    }
}

impl fmt::Debug for ToastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRequest")
            .field("message", &self.message)
            .field("status", &self.status)
            .field("duration", &self.duration)
            .field("always_visible", &self.always_visible)
            .field("animation_in_timing", &self.animation_in_timing)
            .field("animation_out_timing", &self.animation_out_timing)
            .field("swipe_directions", &self.swipe_directions)
            .field("position", &self.position)
            .field("offset", &self.offset)
            .field("on_press", &self.on_press.as_ref().map(|_| "…"))
            .field("on_hide", &self.on_hide.as_ref().map(|_| "…"))
            .finish()
    }
}
