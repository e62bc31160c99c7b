// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture classification.
//!
//! Pure logic that turns a stream of cumulative 2D drag deltas into a
//! dominant swipe direction and decides, on release, whether the swipe
//! dismisses the toast. The recognizer never touches the view: tracking
//! offsets and spring-back are the transition controller's job.

use iced_core::Vector;
use serde::{Deserialize, Serialize};

/// Minimum movement (px, either axis) before a drag claims the gesture.
///
/// Keeps plain taps from being misread as the start of a swipe.
pub const DEFAULT_CLAIM_THRESHOLD: f32 = 4.0;

/// Accumulated distance (px) a swipe must travel to dismiss the toast.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

/// One of the four directions a toast can be swiped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    /// Classifies a cumulative drag delta into its dominant direction.
    ///
    /// The horizontal axis wins only when `|dx|` is strictly greater than
    /// `|dy|`; on a tie the vertical axis decides. Zero-vs-positive `dx`
    /// maps to `Right`, zero-vs-positive `dy` maps to `Down`.
    #[must_use]
    pub fn classify(delta: Vector) -> Self {
        if delta.x.abs() > delta.y.abs() {
            if delta.x < 0.0 {
                Self::Left
            } else {
                Self::Right
            }
        } else if delta.y < 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    /// Signed distance traveled "outward" along this direction.
    ///
    /// Positive values mean the drag moved toward the direction's edge of
    /// the screen, so a single threshold comparison works for all four
    /// directions.
    #[must_use]
    pub fn accumulated_distance(self, delta: Vector) -> f32 {
        match self {
            Self::Up => -delta.y,
            Self::Down => delta.y,
            Self::Right => delta.x,
            Self::Left => -delta.x,
        }
    }

    /// Returns true if this direction moves along the horizontal axis.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// The swipe passed the distance threshold in an allowed direction.
    Completed(SwipeDirection),
    /// The drag was released short of the threshold or in a disallowed
    /// direction. The view must spring back to its neutral offset.
    Abandoned,
}

/// Live gesture session: cumulative delta plus the direction classified
/// on the most recent move. Discarded on release.
#[derive(Debug, Clone, Copy)]
struct SwipeSession {
    delta: Vector,
    direction: SwipeDirection,
}

/// Classifies per-frame drag deltas for one toast surface.
///
/// Fed with *cumulative* deltas measured from the start of the drag, the
/// way a pan gesture reports them. The direction is re-classified on every
/// move, so a drag that starts leftward and ends upward resolves as `Up`.
#[derive(Debug)]
pub struct SwipeRecognizer {
    claim_threshold: f32,
    swipe_threshold: f32,
    allowed: Vec<SwipeDirection>,
    session: Option<SwipeSession>,
}

impl SwipeRecognizer {
    /// Creates a recognizer with the given allow-list and default thresholds.
    #[must_use]
    pub fn new(allowed: Vec<SwipeDirection>) -> Self {
        Self {
            claim_threshold: DEFAULT_CLAIM_THRESHOLD,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            allowed,
            session: None,
        }
    }

    /// Replaces the allowed swipe directions.
    pub fn set_allowed(&mut self, allowed: Vec<SwipeDirection>) {
        self.allowed = allowed;
    }

    /// Sets the swipe completion threshold in px.
    pub fn set_swipe_threshold(&mut self, threshold: f32) {
        self.swipe_threshold = threshold;
    }

    /// Sets the gesture claim threshold in px.
    pub fn set_claim_threshold(&mut self, threshold: f32) {
        self.claim_threshold = threshold;
    }

    /// Returns true if the given direction is in the allow-list.
    #[must_use]
    pub fn is_allowed(&self, direction: SwipeDirection) -> bool {
        self.allowed.contains(&direction)
    }

    /// Returns the direction classified on the most recent move, if a
    /// drag is in progress.
    #[must_use]
    pub fn current_direction(&self) -> Option<SwipeDirection> {
        self.session.map(|s| s.direction)
    }

    /// Returns true while a claimed drag is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Feeds one pointer move with the cumulative delta since drag start.
    ///
    /// Returns the pan offset the view should track, restricted to the
    /// classified axis, when the gesture is claimed and the direction is
    /// allowed. Returns `None` for unclaimed moves, disallowed directions
    /// and zero deltas (which are ignored entirely: no reclassification).
    pub fn on_move(&mut self, delta: Vector) -> Option<Vector> {
        if delta.x == 0.0 && delta.y == 0.0 {
            return None;
        }

        let claimed = self.session.is_some()
            || delta.x.abs() >= self.claim_threshold
            || delta.y.abs() >= self.claim_threshold;
        if !claimed {
            return None;
        }

        let direction = SwipeDirection::classify(delta);
        self.session = Some(SwipeSession { delta, direction });

        if !self.is_allowed(direction) {
            return None;
        }

        // Track only the dominant axis; the orthogonal component is ignored
        // so the toast does not drift diagonally under the finger.
        if direction.is_horizontal() {
            Some(Vector::new(delta.x, 0.0))
        } else {
            Some(Vector::new(0.0, delta.y))
        }
    }

    /// Resolves the drag on pointer release.
    ///
    /// Completion requires both the accumulated distance along the
    /// direction classified *at release time* to exceed the swipe
    /// threshold and that direction to be in the allow-list. Returns
    /// `None` when no drag was in progress.
    pub fn on_release(&mut self) -> Option<SwipeOutcome> {
        let session = self.session.take()?;
        let distance = session.direction.accumulated_distance(session.delta);

        if distance > self.swipe_threshold && self.is_allowed(session.direction) {
            Some(SwipeOutcome::Completed(session.direction))
        } else {
            Some(SwipeOutcome::Abandoned)
        }
    }

    /// Drops any in-progress session without resolving it.
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
