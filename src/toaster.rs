// SPDX-License-Identifier: MPL-2.0
//! Caller-facing handle for showing and hiding toasts.
//!
//! A [`Toaster`] is a cheap, cloneable handle over one request queue.
//! Any part of the host application may hold a clone and call
//! [`Toaster::show`]; the queue serializes the requests for whichever
//! surface is currently mounted. Everything runs on the host's UI
//! thread: the handle is reference-counted, not thread-safe.

use crate::queue::QueueController;
use crate::request::ToastRequest;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle over a toast request queue.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
    queue: Rc<RefCell<QueueController>>,
}

impl Toaster {
    /// Creates a toaster with an empty queue and no surface mounted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a toast for display.
    ///
    /// Shows immediately when nothing is on screen; otherwise the request
    /// waits its turn. Safe to call before a surface is mounted: requests
    /// buffer until one registers.
    pub fn show(&self, request: ToastRequest) {
        self.queue.borrow_mut().enqueue(request);
    }

    /// Requests dismissal of whatever toast is currently visible.
    ///
    /// A no-op when nothing is visible or no surface is mounted.
    pub fn hide(&self) {
        self.queue.borrow_mut().hide();
    }

    /// Number of requests waiting behind the active one.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending()
    }

    /// True from dequeue until the surface reports the toast hidden.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.queue.borrow().is_active()
    }

    /// True while a surface is mounted and registered.
    #[must_use]
    pub fn is_surface_mounted(&self) -> bool {
        self.queue.borrow().is_bound()
    }

    pub(crate) fn queue(&self) -> &Rc<RefCell<QueueController>> {
        &self.queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_queue() {
        let toaster = Toaster::new();
        let clone = toaster.clone();

        toaster.show(ToastRequest::info("shared"));
        assert_eq!(clone.pending(), 1);
    }

    #[test]
    fn hide_before_mount_does_not_panic() {
        let toaster = Toaster::new();
        toaster.hide();
        assert!(!toaster.is_active());
    }
}
