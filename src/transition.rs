// SPDX-License-Identifier: MPL-2.0
//! Open/close transition state machine for one toast surface.
//!
//! Sequences show → hold → hide with clear state transitions:
//! - Idle: nothing on screen
//! - Opening: enter animation in flight
//! - Visible: holding, auto-hide timer armed unless always-visible
//! - Closing: exit animation in flight
//!
//! `Closing → Opening` is also legal: it happens when the desired
//! visibility flips back to shown before the hide animation finished.
//! At most one transition is in flight per controller; a second open or
//! close while one runs is dropped, and the completion handler re-checks
//! the desired visibility to self-heal.

use crate::animation::{AnimationDriver, SlideTransition};
use crate::gesture::SwipeDirection;
use crate::interaction::{InteractionHandle, SharedScheduler};
use crate::request::Position;
use iced_core::Vector;
use std::time::{Duration, Instant};

/// Visibility state of one toast surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    #[default]
    Idle,
    Opening,
    Visible,
    Closing,
}

/// Notifications emitted as a toast transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
    /// Fires just before the exit animation starts.
    WillHide,
    /// Fires after the exit animation finished and the state settled to
    /// idle. Drives the queue's next dequeue downstream.
    Hidden,
}

/// Enter transition for a surface anchored at `position`.
fn enter_transition(position: Position) -> SlideTransition {
    match position {
        // Top and center toasts drop in from above, bottom toasts rise
        // in from below.
        Position::Top | Position::Center => SlideTransition::SlideInDown,
        Position::Bottom => SlideTransition::SlideInUp,
    }
}

/// Default exit: the entry direction, reversed.
fn default_exit(position: Position) -> SlideTransition {
    match position {
        Position::Top | Position::Center => SlideTransition::SlideOutUp,
        Position::Bottom => SlideTransition::SlideOutDown,
    }
}

/// Orchestrates the open/close sequence of one toast surface.
///
/// Owns the animation driver, the live swipe offset, the auto-hide timer
/// and the interaction-suppression handle. All state is per-instance:
/// multiple independent surfaces never cross-talk.
pub struct TransitionController {
    state: VisibilityState,
    /// What the caller last asked for; re-checked when a transition
    /// settles so a request that arrived mid-flight is not lost.
    desired_visible: bool,
    driver: AnimationDriver,
    scheduler: SharedScheduler,
    interaction: Option<InteractionHandle>,
    /// Live drag offset while the user swipes; reset on open and on an
    /// abandoned swipe.
    swipe_offset: Vector,
    /// Direction of the swipe that triggered the current close, if any.
    last_swipe: Option<SwipeDirection>,
    position: Position,
    enter_timing: Duration,
    exit_timing: Duration,
    duration: Duration,
    always_visible: bool,
    auto_hide_at: Option<Instant>,
}

impl TransitionController {
    /// Creates an idle controller bound to the given interaction scheduler.
    #[must_use]
    pub fn new(scheduler: SharedScheduler) -> Self {
        Self {
            state: VisibilityState::Idle,
            desired_visible: false,
            driver: AnimationDriver::new(),
            scheduler,
            interaction: None,
            swipe_offset: Vector::new(0.0, 0.0),
            last_swipe: None,
            position: Position::Top,
            enter_timing: Duration::from_millis(crate::config::DEFAULT_ANIMATION_TIMING_MS),
            exit_timing: Duration::from_millis(crate::config::DEFAULT_ANIMATION_TIMING_MS),
            duration: Duration::from_millis(crate::config::DEFAULT_DURATION_MS),
            always_visible: false,
            auto_hide_at: None,
        }
    }

    /// Applies the timing and placement resolved for the toast about to
    /// be shown.
    pub fn configure(
        &mut self,
        duration: Duration,
        always_visible: bool,
        enter_timing: Duration,
        exit_timing: Duration,
        position: Position,
    ) {
        self.duration = duration;
        self.always_visible = always_visible;
        self.enter_timing = enter_timing;
        self.exit_timing = exit_timing;
        self.position = position;
    }

    /// Records the desired visibility and dispatches a transition when
    /// none is in flight.
    ///
    /// While a transition runs the request is only recorded; the
    /// completion handler re-reads it and dispatches the follow-up
    /// transition, so rapid toggles always settle on the last value.
    pub fn set_visible(&mut self, visible: bool, now: Instant) -> Option<ToastEvent> {
        self.desired_visible = visible;
        if !visible {
            self.auto_hide_at = None;
        }

        if self.is_in_flight() {
            log::debug!("visibility change to {visible} deferred until the transition settles");
            return None;
        }

        match (visible, self.state) {
            (true, VisibilityState::Idle) => {
                self.open(now);
                None
            }
            // Already visible: re-arm the hold timer for the (possibly
            // reconfigured) toast.
            (true, VisibilityState::Visible) => {
                self.arm_auto_hide(now);
                None
            }
            (false, VisibilityState::Visible) => self.close(now),
            _ => None,
        }
    }

    /// Starts the enter transition.
    ///
    /// Dropped when a transition is already in flight. Resets the swipe
    /// offset to neutral, clears any stale swipe direction, acquires the
    /// interaction handle and slides the content in.
    pub fn open(&mut self, now: Instant) {
        if self.is_in_flight() {
            log::debug!("open dropped, a transition is in flight");
            return;
        }

        self.desired_visible = true;
        self.swipe_offset = Vector::new(0.0, 0.0);
        self.last_swipe = None;
        self.acquire_interaction();
        self.state = VisibilityState::Opening;

        let started = self
            .driver
            .animate(enter_transition(self.position), self.enter_timing, now);
        debug_assert!(started, "driver must be idle when no transition is in flight");
    }

    /// Starts the exit transition and reports `WillHide`.
    ///
    /// Dropped when a transition is already in flight; a no-op when
    /// nothing is visible. The content slides out along the last
    /// classified swipe direction when the close was swipe-triggered,
    /// otherwise along the reversed entry direction.
    pub fn close(&mut self, now: Instant) -> Option<ToastEvent> {
        if self.is_in_flight() {
            log::debug!("close dropped, a transition is in flight");
            return None;
        }
        if self.state == VisibilityState::Idle {
            return None;
        }

        self.desired_visible = false;
        self.auto_hide_at = None;
        self.acquire_interaction();
        self.state = VisibilityState::Closing;

        let transition = match self.last_swipe {
            Some(direction) => SlideTransition::exit_along(direction),
            None => default_exit(self.position),
        };
        let started = self.driver.animate(transition, self.exit_timing, now);
        debug_assert!(started, "driver must be idle when no transition is in flight");

        Some(ToastEvent::WillHide)
    }

    /// Advances the animation and the auto-hide timer to `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastEvent> {
        let mut events = Vec::new();

        if let Some(settled) = self.driver.tick(now) {
            match self.state {
                VisibilityState::Opening => {
                    self.release_interaction();
                    self.state = VisibilityState::Visible;
                    if self.desired_visible {
                        self.arm_auto_hide(now);
                    } else if let Some(event) = self.close(now) {
                        // Hide was requested while the enter animation ran.
                        events.push(event);
                    }
                }
                VisibilityState::Closing => {
                    self.release_interaction();
                    self.state = VisibilityState::Idle;
                    if self.desired_visible {
                        // Visibility flipped back on mid-hide: reopen
                        // instead of finalizing.
                        self.open(now);
                    } else {
                        events.push(ToastEvent::Hidden);
                    }
                }
                VisibilityState::Idle | VisibilityState::Visible => {
                    log::debug!("animation {settled:?} settled outside a transition");
                }
            }
        }

        if self.state == VisibilityState::Visible && !self.always_visible {
            if let Some(deadline) = self.auto_hide_at {
                if now >= deadline {
                    self.auto_hide_at = None;
                    self.desired_visible = false;
                    if let Some(event) = self.close(now) {
                        events.push(event);
                    }
                }
            }
        }

        events
    }

    /// Records the direction of a completed swipe so the next close
    /// animates along it.
    pub fn notify_swipe(&mut self, direction: SwipeDirection) {
        self.last_swipe = Some(direction);
    }

    /// Updates the live drag offset. Ignored unless the toast is holding
    /// visible (dragging mid-transition would fight the animation).
    pub fn set_swipe_offset(&mut self, offset: Vector) {
        if self.state == VisibilityState::Visible {
            self.swipe_offset = offset;
        }
    }

    /// Springs the drag offset back to neutral after an abandoned swipe.
    pub fn reset_swipe_offset(&mut self) {
        self.swipe_offset = Vector::new(0.0, 0.0);
    }

    /// Toggles the always-visible exemption, re-arming or disarming the
    /// auto-hide timer as needed.
    pub fn set_always_visible(&mut self, always_visible: bool, now: Instant) {
        self.always_visible = always_visible;
        if always_visible {
            self.auto_hide_at = None;
        } else if self.state == VisibilityState::Visible && self.desired_visible {
            self.arm_auto_hide(now);
        }
    }

    /// Current visibility state.
    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// True while the toast is holding fully visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state == VisibilityState::Visible
    }

    /// True while an enter or exit animation is in flight.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self.state,
            VisibilityState::Opening | VisibilityState::Closing
        )
    }

    /// The visibility the caller last asked for.
    #[must_use]
    pub fn desired_visible(&self) -> bool {
        self.desired_visible
    }

    /// Combined translation the renderer should apply: the slide
    /// animation plus the live drag offset.
    #[must_use]
    pub fn render_translation(&self) -> Vector {
        let slide = self.driver.translation();
        Vector::new(slide.x + self.swipe_offset.x, slide.y + self.swipe_offset.y)
    }

    fn arm_auto_hide(&mut self, now: Instant) {
        if !self.always_visible {
            self.auto_hide_at = Some(now + self.duration);
        }
    }

    fn acquire_interaction(&mut self) {
        if self.interaction.is_none() {
            self.interaction = Some(self.scheduler.borrow_mut().create_handle());
        }
    }

    fn release_interaction(&mut self) {
        if let Some(handle) = self.interaction.take() {
            self.scheduler.borrow_mut().clear_handle(handle);
        }
    }
}

impl Drop for TransitionController {
    fn drop(&mut self) {
        // An outstanding handle must not leak suppression state into the
        // host scheduler past the surface's lifetime.
        self.release_interaction();
        self.auto_hide_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::OFFSCREEN_DISTANCE;
    use crate::interaction::InteractionTracker;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn controller(tracker: &Rc<RefCell<InteractionTracker>>) -> TransitionController {
        let scheduler: SharedScheduler = tracker.clone();
        let mut controller = TransitionController::new(scheduler);
        controller.configure(ms(2000), false, ms(600), ms(600), Position::Top);
        controller
    }

    /// Ticks every 50ms until the controller leaves its transitional
    /// states, returning all events in order.
    fn settle(
        controller: &mut TransitionController,
        now: &mut Instant,
    ) -> Vec<ToastEvent> {
        let mut events = Vec::new();
        for _ in 0..100 {
            if !controller.is_in_flight() {
                break;
            }
            *now += ms(50);
            events.extend(controller.tick(*now));
        }
        events
    }

    #[test]
    fn open_transitions_through_opening_to_visible() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let mut now = Instant::now();

        controller.open(now);
        assert_eq!(controller.state(), VisibilityState::Opening);
        assert_eq!(tracker.borrow().outstanding(), 1);

        settle(&mut controller, &mut now);
        assert_eq!(controller.state(), VisibilityState::Visible);
        assert_eq!(tracker.borrow().outstanding(), 0);
        assert_eq!(controller.render_translation(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn double_open_starts_exactly_one_animation() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let now = Instant::now();

        controller.open(now);
        controller.open(now);

        assert_eq!(tracker.borrow().outstanding(), 1);
        assert_eq!(controller.state(), VisibilityState::Opening);
    }

    #[test]
    fn close_reports_will_hide_then_hidden() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let mut now = Instant::now();

        controller.open(now);
        settle(&mut controller, &mut now);

        let will_hide = controller.close(now);
        assert_eq!(will_hide, Some(ToastEvent::WillHide));

        let events = settle(&mut controller, &mut now);
        assert_eq!(events, vec![ToastEvent::Hidden]);
        assert_eq!(controller.state(), VisibilityState::Idle);
        assert_eq!(tracker.borrow().outstanding(), 0);
    }

    #[test]
    fn close_when_idle_is_a_no_op() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);

        assert!(controller.close(Instant::now()).is_none());
        assert_eq!(controller.state(), VisibilityState::Idle);
        assert_eq!(tracker.borrow().outstanding(), 0);
    }

    #[test]
    fn hide_requested_while_opening_closes_after_entry() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let mut now = Instant::now();

        controller.set_visible(true, now);
        assert_eq!(controller.state(), VisibilityState::Opening);

        // Request hide mid-entry; it must be deferred, not dropped.
        controller.set_visible(false, now);
        assert_eq!(controller.state(), VisibilityState::Opening);

        let events = settle(&mut controller, &mut now);
        assert_eq!(events, vec![ToastEvent::WillHide, ToastEvent::Hidden]);
        assert_eq!(controller.state(), VisibilityState::Idle);
        assert_eq!(tracker.borrow().outstanding(), 0);
    }

    #[test]
    fn show_requested_while_closing_reopens() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let mut now = Instant::now();

        controller.set_visible(true, now);
        settle(&mut controller, &mut now);
        controller.set_visible(false, now);
        assert_eq!(controller.state(), VisibilityState::Closing);

        controller.set_visible(true, now);

        let events = settle(&mut controller, &mut now);
        // The hide never finalizes: no Hidden event, and the toast ends
        // up holding visible again.
        assert!(!events.contains(&ToastEvent::Hidden));
        assert_eq!(controller.state(), VisibilityState::Visible);
        assert_eq!(tracker.borrow().outstanding(), 0);
    }

    #[test]
    fn rapid_toggling_settles_on_last_requested_value() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let mut now = Instant::now();

        controller.set_visible(true, now);
        controller.set_visible(false, now);
        controller.set_visible(true, now);

        settle(&mut controller, &mut now);
        assert_eq!(controller.state(), VisibilityState::Visible);
        assert!(controller.desired_visible());
    }

    #[test]
    fn auto_hide_fires_at_deadline_and_not_before() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let mut now = Instant::now();

        controller.set_visible(true, now);
        settle(&mut controller, &mut now);
        let shown_at = now;

        // Just before the deadline: still visible.
        now = shown_at + ms(1999);
        assert!(controller.tick(now).is_empty());
        assert_eq!(controller.state(), VisibilityState::Visible);

        // At the deadline: the close begins.
        now = shown_at + ms(2000);
        let events = controller.tick(now);
        assert_eq!(events, vec![ToastEvent::WillHide]);
        assert_eq!(controller.state(), VisibilityState::Closing);

        let events = settle(&mut controller, &mut now);
        assert_eq!(events, vec![ToastEvent::Hidden]);
    }

    #[test]
    fn always_visible_never_auto_hides() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        controller.configure(ms(2000), true, ms(600), ms(600), Position::Top);
        let mut now = Instant::now();

        controller.set_visible(true, now);
        settle(&mut controller, &mut now);

        now += ms(60_000);
        assert!(controller.tick(now).is_empty());
        assert_eq!(controller.state(), VisibilityState::Visible);
    }

    #[test]
    fn clearing_always_visible_arms_the_timer() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        controller.configure(ms(1000), true, ms(600), ms(600), Position::Top);
        let mut now = Instant::now();

        controller.set_visible(true, now);
        settle(&mut controller, &mut now);

        controller.set_always_visible(false, now);
        now += ms(1000);
        let events = controller.tick(now);
        assert_eq!(events, vec![ToastEvent::WillHide]);
    }

    #[test]
    fn swipe_triggered_close_exits_along_the_swipe() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let mut now = Instant::now();

        controller.set_visible(true, now);
        settle(&mut controller, &mut now);

        controller.notify_swipe(SwipeDirection::Right);
        controller.set_visible(false, now);
        settle(&mut controller, &mut now);

        assert_eq!(
            controller.render_translation(),
            Vector::new(OFFSCREEN_DISTANCE, 0.0)
        );
    }

    #[test]
    fn programmatic_close_never_replays_a_stale_swipe_direction() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let mut now = Instant::now();

        // First toast dismissed by swiping right.
        controller.set_visible(true, now);
        settle(&mut controller, &mut now);
        controller.notify_swipe(SwipeDirection::Right);
        controller.set_visible(false, now);
        settle(&mut controller, &mut now);

        // Second toast closed by the timer: it must exit upward (the
        // reversed top entry), not rightward.
        controller.set_visible(true, now);
        settle(&mut controller, &mut now);
        controller.set_visible(false, now);
        settle(&mut controller, &mut now);

        assert_eq!(
            controller.render_translation(),
            Vector::new(0.0, -OFFSCREEN_DISTANCE)
        );
    }

    #[test]
    fn bottom_position_enters_from_below_and_exits_downward() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        controller.configure(ms(2000), false, ms(600), ms(600), Position::Bottom);
        let mut now = Instant::now();

        controller.set_visible(true, now);
        assert!(controller.render_translation().y > 0.0);
        settle(&mut controller, &mut now);

        controller.set_visible(false, now);
        settle(&mut controller, &mut now);
        assert_eq!(
            controller.render_translation(),
            Vector::new(0.0, OFFSCREEN_DISTANCE)
        );
    }

    #[test]
    fn open_resets_a_residual_swipe_offset() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let mut now = Instant::now();

        controller.set_visible(true, now);
        settle(&mut controller, &mut now);
        controller.set_swipe_offset(Vector::new(42.0, 0.0));
        assert_eq!(controller.render_translation(), Vector::new(42.0, 0.0));

        controller.set_visible(false, now);
        settle(&mut controller, &mut now);
        controller.set_visible(true, now);

        // Freshly opening: the drag offset must be gone.
        assert_eq!(controller.render_translation().x, 0.0);
    }

    #[test]
    fn swipe_offset_is_ignored_mid_transition() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let now = Instant::now();

        controller.set_visible(true, now);
        controller.set_swipe_offset(Vector::new(42.0, 0.0));
        assert_eq!(controller.render_translation().x, 0.0);
    }

    #[test]
    fn drop_releases_an_outstanding_handle() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);

        controller.open(Instant::now());
        assert_eq!(tracker.borrow().outstanding(), 1);

        drop(controller);
        assert_eq!(tracker.borrow().outstanding(), 0);
    }

    #[test]
    fn at_most_one_interaction_handle_is_ever_outstanding() {
        let tracker = InteractionTracker::shared();
        let mut controller = controller(&tracker);
        let mut now = Instant::now();

        for _ in 0..3 {
            controller.set_visible(true, now);
            assert!(tracker.borrow().outstanding() <= 1);
            settle(&mut controller, &mut now);
            controller.set_visible(false, now);
            assert!(tracker.borrow().outstanding() <= 1);
            settle(&mut controller, &mut now);
            assert_eq!(tracker.borrow().outstanding(), 0);
        }
    }
}
