// SPDX-License-Identifier: MPL-2.0
//! FIFO queue serializing toast requests.
//!
//! Callers may request a toast at any time; the queue guarantees that at
//! most one request is active (dequeued but not yet hidden) and that
//! requests display strictly in arrival order. The mounted surface
//! registers its show/hide entry points here and deregisters on
//! teardown; with no registrant the queue buffers requests instead of
//! failing.

use crate::request::ToastRequest;
use std::collections::VecDeque;
use std::fmt;

/// The show/hide entry points a mounted toast surface registers.
pub struct SurfaceBinding {
    show: Box<dyn FnMut(ToastRequest)>,
    hide: Box<dyn FnMut()>,
}

impl SurfaceBinding {
    /// Creates a binding from the surface's two entry points.
    pub fn new(show: impl FnMut(ToastRequest) + 'static, hide: impl FnMut() + 'static) -> Self {
        Self {
            show: Box::new(show),
            hide: Box::new(hide),
        }
    }
}

impl fmt::Debug for SurfaceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceBinding").finish_non_exhaustive()
    }
}

/// Serializes toast requests for one surface.
#[derive(Debug, Default)]
pub struct QueueController {
    pending: VecDeque<ToastRequest>,
    /// True from dequeue until the surface reports the toast hidden.
    active: bool,
    surface: Option<SurfaceBinding>,
}

impl QueueController {
    /// Creates an empty queue with no surface bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request; shows it immediately when the queue is idle.
    ///
    /// There is no bound on queue length and no deduplication: identical
    /// requests are shown one after the other, in order.
    pub fn enqueue(&mut self, request: ToastRequest) {
        self.pending.push_back(request);
        if !self.active {
            self.process_next();
        }
    }

    /// Dequeues the head request and forwards it to the bound surface.
    ///
    /// Also the completion callback the surface invokes after a toast
    /// finished hiding, closing the hide → next-show loop. An empty queue
    /// is the normal terminal state: the active flag clears and nothing
    /// else happens. With no surface bound, requests stay buffered.
    pub fn process_next(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            log::debug!("no toast surface bound, keeping {} request(s) buffered", self.pending.len());
            self.active = false;
            return;
        };

        match self.pending.pop_front() {
            None => self.active = false,
            Some(request) => {
                self.active = true;
                (surface.show)(request);
            }
        }
    }

    /// Asks the bound surface to begin hiding the active toast.
    ///
    /// Silent no-op when no surface is bound or nothing is active.
    pub fn hide(&mut self) {
        match self.surface.as_mut() {
            Some(surface) => (surface.hide)(),
            None => log::debug!("hide requested with no toast surface bound"),
        }
    }

    /// Registers a mounted surface.
    ///
    /// If requests were buffered while unbound and nothing is active,
    /// the head request is dispatched immediately.
    pub fn bind(&mut self, binding: SurfaceBinding) {
        self.surface = Some(binding);
        if !self.active && !self.pending.is_empty() {
            self.process_next();
        }
    }

    /// Deregisters the surface; subsequent calls buffer or no-op.
    pub fn unbind(&mut self) {
        self.surface = None;
        self.active = false;
    }

    /// True while a surface is registered.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.surface.is_some()
    }

    /// True from dequeue until the surface reports the toast hidden.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of requests waiting behind the active one.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
