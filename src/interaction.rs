// SPDX-License-Identifier: MPL-2.0
//! Interaction-suppression handles.
//!
//! While a toast transition animates, the host's interaction scheduler
//! should defer lower-priority work. The transition controller acquires a
//! handle when a transition starts and releases it exactly once when the
//! transition settles, whatever the outcome.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Opaque token for one in-progress transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractionHandle(u64);

/// Contract with the host's interaction scheduler.
///
/// Implementations must tolerate a handle being cleared that was already
/// cleared or never issued; the controller guarantees it only happens on
/// teardown races, but the scheduler must not panic on it.
pub trait InteractionScheduler {
    /// Marks the start of a transition and returns its handle.
    fn create_handle(&mut self) -> InteractionHandle;

    /// Marks the end of the transition identified by `handle`.
    fn clear_handle(&mut self, handle: InteractionHandle);
}

/// Shared scheduler reference for the single-threaded cooperative model.
pub type SharedScheduler = Rc<RefCell<dyn InteractionScheduler>>;

/// Default scheduler that only counts outstanding handles.
///
/// Useful on its own for hosts without an interaction scheduler, and in
/// tests to assert the acquire/release pairing.
#[derive(Debug, Default)]
pub struct InteractionTracker {
    next_id: u64,
    outstanding: HashSet<u64>,
}

impl InteractionTracker {
    /// Creates a tracker with no outstanding handles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles acquired but not yet released.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    /// Wraps a fresh tracker for sharing with a transition controller.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }
}

impl InteractionScheduler for InteractionTracker {
    fn create_handle(&mut self) -> InteractionHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.outstanding.insert(id);
        InteractionHandle(id)
    }

    fn clear_handle(&mut self, handle: InteractionHandle) {
        self.outstanding.remove(&handle.0);
    }
}
