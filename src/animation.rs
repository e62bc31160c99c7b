// SPDX-License-Identifier: MPL-2.0
//! Slide animation driver.
//!
//! Wraps the translatable offset of one toast surface and slides it to or
//! from an offscreen position over a fixed duration. The driver is
//! tick-driven: the host calls [`AnimationDriver::tick`] with its frame
//! clock and the driver reports each completed transition exactly once.

use crate::gesture::SwipeDirection;
use iced_core::Vector;
use std::time::{Duration, Instant};

/// Translation magnitude standing in for "fully offscreen" (px).
pub const OFFSCREEN_DISTANCE: f32 = 1000.0;

/// A named slide transition: which axis moves and toward which edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideTransition {
    /// Enter from below the viewport, settling at the neutral offset.
    SlideInUp,
    /// Enter from above the viewport, settling at the neutral offset.
    SlideInDown,
    SlideOutUp,
    SlideOutDown,
    SlideOutLeft,
    SlideOutRight,
}

impl SlideTransition {
    /// Returns true for the entering transitions.
    #[must_use]
    pub fn is_enter(self) -> bool {
        matches!(self, Self::SlideInUp | Self::SlideInDown)
    }

    /// The exit transition that slides out along the given swipe direction.
    #[must_use]
    pub fn exit_along(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Up => Self::SlideOutUp,
            SwipeDirection::Down => Self::SlideOutDown,
            SwipeDirection::Left => Self::SlideOutLeft,
            SwipeDirection::Right => Self::SlideOutRight,
        }
    }

    /// Target translation once the transition has finished.
    fn target(self) -> Vector {
        match self {
            Self::SlideInUp | Self::SlideInDown => Vector::new(0.0, 0.0),
            Self::SlideOutUp => Vector::new(0.0, -OFFSCREEN_DISTANCE),
            Self::SlideOutDown => Vector::new(0.0, OFFSCREEN_DISTANCE),
            Self::SlideOutLeft => Vector::new(-OFFSCREEN_DISTANCE, 0.0),
            Self::SlideOutRight => Vector::new(OFFSCREEN_DISTANCE, 0.0),
        }
    }

    /// Starting translation forced before an enter transition begins.
    ///
    /// Entering-from-below starts at a large positive vertical offset,
    /// entering-from-above at a large negative one, with the orthogonal
    /// axis zeroed. This guarantees a visually correct entry regardless
    /// of any residual offset left by a prior swipe.
    fn enter_preset(self) -> Option<Vector> {
        match self {
            Self::SlideInUp => Some(Vector::new(0.0, OFFSCREEN_DISTANCE)),
            Self::SlideInDown => Some(Vector::new(0.0, -OFFSCREEN_DISTANCE)),
            _ => None,
        }
    }
}

/// The single animation currently in flight.
#[derive(Debug, Clone, Copy)]
struct ActiveAnimation {
    transition: SlideTransition,
    from: Vector,
    to: Vector,
    started_at: Instant,
    duration: Duration,
}

/// Drives the slide translation of one toast surface.
///
/// At most one animation runs per driver instance: a second `animate`
/// call while one is in flight is dropped rather than queued, and the
/// caller treats it as an already-resolved no-op.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    translation: Vector,
    active: Option<ActiveAnimation>,
}

impl AnimationDriver {
    /// Creates an idle driver at the neutral translation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts sliding toward the transition's target over `duration`.
    ///
    /// Returns `false` without touching the running animation when one is
    /// already in flight. Enter transitions first preset the translation
    /// offscreen (see [`SlideTransition`]).
    pub fn animate(
        &mut self,
        transition: SlideTransition,
        duration: Duration,
        now: Instant,
    ) -> bool {
        if self.active.is_some() {
            log::debug!("animation dropped, another is in flight: {:?}", transition);
            return false;
        }

        if let Some(preset) = transition.enter_preset() {
            self.translation = preset;
        }

        self.active = Some(ActiveAnimation {
            transition,
            from: self.translation,
            to: transition.target(),
            started_at: now,
            duration,
        });
        true
    }

    /// Advances the in-flight animation to `now`.
    ///
    /// Interpolates the translation and, when the animation finishes this
    /// tick, returns its transition. Each started animation resolves
    /// exactly once; subsequent ticks return `None` until the next
    /// `animate` call.
    pub fn tick(&mut self, now: Instant) -> Option<SlideTransition> {
        let active = self.active?;

        let elapsed = now.saturating_duration_since(active.started_at);
        if elapsed >= active.duration || active.duration.is_zero() {
            self.translation = active.to;
            self.active = None;
            return Some(active.transition);
        }

        let progress = elapsed.as_secs_f32() / active.duration.as_secs_f32();
        let eased = ease_in_out(progress);
        self.translation = Vector::new(
            active.from.x + (active.to.x - active.from.x) * eased,
            active.from.y + (active.to.y - active.from.y) * eased,
        );
        None
    }

    /// Returns true while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Current slide translation of the surface.
    #[must_use]
    pub fn translation(&self) -> Vector {
        self.translation
    }
}

/// Quadratic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
