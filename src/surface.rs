// SPDX-License-Identifier: MPL-2.0
//! The mounted toast surface.
//!
//! A [`ToastSurface`] lives in the host's UI state for as long as toasts
//! can appear. On mount it registers its show/hide entry points with the
//! queue; the queue posts commands into a mailbox that the surface drains
//! on its next tick, so a dequeue triggered from deep inside a hide
//! completion never re-enters the surface. On drop it deregisters.
//!
//! The host drives the surface with its frame clock (`tick`), forwards
//! raw drag deltas and release events, and renders the active request at
//! [`ToastSurface::render_translation`].

use crate::config::ToasterConfig;
use crate::gesture::{SwipeOutcome, SwipeRecognizer};
use crate::interaction::SharedScheduler;
use crate::queue::{QueueController, SurfaceBinding};
use crate::request::{Position, ToastRequest};
use crate::toaster::Toaster;
use crate::transition::{ToastEvent, TransitionController, VisibilityState};
use iced_core::Vector;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::time::Instant;

/// Command posted by the queue into the surface's mailbox.
#[derive(Debug)]
enum SurfaceCommand {
    Show(ToastRequest),
    Hide,
}

type Mailbox = Rc<RefCell<VecDeque<SurfaceCommand>>>;

/// Owns the active toast and its transition machinery.
pub struct ToastSurface {
    config: ToasterConfig,
    current: Option<ToastRequest>,
    controller: TransitionController,
    recognizer: SwipeRecognizer,
    mailbox: Mailbox,
    queue: Weak<RefCell<QueueController>>,
    /// Events produced between ticks (swipe releases, direct hide calls),
    /// delivered with the next tick's batch.
    pending_events: Vec<ToastEvent>,
}

impl ToastSurface {
    /// Mounts a surface: registers its entry points with the toaster's
    /// queue and dispatches any requests that were buffered while no
    /// surface was mounted.
    #[must_use]
    pub fn mount(toaster: &Toaster, config: ToasterConfig, scheduler: SharedScheduler) -> Self {
        let mailbox: Mailbox = Rc::new(RefCell::new(VecDeque::new()));

        let show_mailbox = Rc::clone(&mailbox);
        let hide_mailbox = Rc::clone(&mailbox);
        let binding = SurfaceBinding::new(
            move |request| {
                show_mailbox
                    .borrow_mut()
                    .push_back(SurfaceCommand::Show(request));
            },
            move || hide_mailbox.borrow_mut().push_back(SurfaceCommand::Hide),
        );

        let mut recognizer = SwipeRecognizer::new(config.swipe_directions.clone());
        recognizer.set_swipe_threshold(config.swipe_threshold);
        recognizer.set_claim_threshold(config.claim_threshold);

        let queue = Rc::downgrade(toaster.queue());
        toaster.queue().borrow_mut().bind(binding);

        Self {
            config,
            current: None,
            controller: TransitionController::new(scheduler),
            recognizer,
            mailbox,
            queue,
            pending_events: Vec::new(),
        }
    }

    /// Shows a toast immediately, bypassing the queue.
    ///
    /// This is the imperative entry point the queue binding forwards to;
    /// hosts normally go through [`Toaster::show`] instead. Resolves the
    /// request's overrides against the mount defaults and starts the
    /// enter transition.
    pub fn show_toastable(&mut self, request: ToastRequest, now: Instant) {
        let duration = request.duration_override().unwrap_or(self.config.duration());
        let always_visible = request
            .always_visible_override()
            .unwrap_or(self.config.always_visible);
        let enter = request
            .animation_in_override()
            .unwrap_or(self.config.animation_in());
        let exit = request
            .animation_out_override()
            .unwrap_or(self.config.animation_out());
        let position = request.position_override().unwrap_or(self.config.position);

        let allowed = request
            .swipe_directions_override()
            .map(<[_]>::to_vec)
            .unwrap_or_else(|| self.config.swipe_directions.clone());
        self.recognizer.set_allowed(allowed);
        self.recognizer.cancel();

        self.controller
            .configure(duration, always_visible, enter, exit, position);
        self.current = Some(request);

        if let Some(event) = self.controller.set_visible(true, now) {
            self.pending_events.push(event);
        }
    }

    /// Begins hiding the active toast. No-op when nothing is showing.
    pub fn hide_toastable(&mut self, now: Instant) {
        if self.current.is_none() {
            return;
        }
        if let Some(event) = self.controller.set_visible(false, now) {
            self.pending_events.push(event);
        }
    }

    /// Advances the surface to `now` and returns the events that fired.
    ///
    /// Drains queued show/hide commands, drives the transition state
    /// machine, and on a finalized hide invokes the request's hide
    /// callback and hands control back to the queue, which may
    /// immediately dispatch the next request.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastEvent> {
        let mut events = std::mem::take(&mut self.pending_events);

        self.drain_mailbox(now);
        events.append(&mut self.pending_events);

        for event in self.controller.tick(now) {
            events.push(event);
            if event == ToastEvent::Hidden {
                self.finalize_hidden();
                // The queue may already have posted the next request.
                self.drain_mailbox(now);
                events.append(&mut self.pending_events);
            }
        }

        events
    }

    /// Feeds one pointer move with the cumulative drag delta.
    ///
    /// Ignored while no toast is holding visible; a drag must not fight
    /// an in-flight animation.
    pub fn drag_move(&mut self, delta: Vector) {
        if self.current.is_none() || !self.controller.is_visible() {
            return;
        }
        if let Some(pan) = self.recognizer.on_move(delta) {
            self.controller.set_swipe_offset(pan);
        }
    }

    /// Resolves the drag on pointer release.
    ///
    /// A completed swipe closes the toast along the swiped direction; an
    /// abandoned one springs the view back to its neutral offset.
    pub fn drag_release(&mut self, now: Instant) {
        match self.recognizer.on_release() {
            Some(SwipeOutcome::Completed(direction)) => {
                self.controller.notify_swipe(direction);
                if let Some(event) = self.controller.set_visible(false, now) {
                    self.pending_events.push(event);
                }
            }
            Some(SwipeOutcome::Abandoned) => self.controller.reset_swipe_offset(),
            None => {}
        }
    }

    /// Handles a press on the toast body.
    ///
    /// Always-visible toasts hide on press (it is their only passive
    /// dismissal); the request's press callback fires either way.
    pub fn press(&mut self, now: Instant) {
        let Some(request) = &self.current else {
            return;
        };
        let always_visible = request
            .always_visible_override()
            .unwrap_or(self.config.always_visible);

        if always_visible {
            if let Some(event) = self.controller.set_visible(false, now) {
                self.pending_events.push(event);
            }
        }
        if let Some(request) = &self.current {
            request.notify_press();
        }
    }

    /// The toast currently owned by the surface, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ToastRequest> {
        self.current.as_ref()
    }

    /// True while the toast is holding fully visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    /// Current visibility state of the transition machine.
    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.controller.state()
    }

    /// Translation the renderer should apply to the toast content.
    #[must_use]
    pub fn render_translation(&self) -> Vector {
        self.controller.render_translation()
    }

    /// Screen anchor resolved for the active toast.
    #[must_use]
    pub fn position(&self) -> Position {
        self.current
            .as_ref()
            .and_then(ToastRequest::position_override)
            .unwrap_or(self.config.position)
    }

    /// Edge offset (px) resolved for the active toast.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.current
            .as_ref()
            .and_then(ToastRequest::offset_override)
            .unwrap_or(self.config.offset)
    }

    fn drain_mailbox(&mut self, now: Instant) {
        loop {
            let command = self.mailbox.borrow_mut().pop_front();
            match command {
                Some(SurfaceCommand::Show(request)) => self.show_toastable(request, now),
                Some(SurfaceCommand::Hide) => self.hide_toastable(now),
                None => break,
            }
        }
    }

    fn finalize_hidden(&mut self) {
        if let Some(request) = self.current.take() {
            request.notify_hide();
        }
        self.recognizer.cancel();
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().process_next();
        }
    }
}

impl Drop for ToastSurface {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            if let Ok(mut queue) = queue.try_borrow_mut() {
                queue.unbind();
            }
        }
    }
}
