// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` provides queued, swipe-dismissible toast notifications
//! for applications built with the Iced GUI toolkit.
//!
//! Toast requests from anywhere in the application are serialized into a
//! FIFO queue and displayed one at a time: each toast slides in, holds
//! for its duration (or until swiped away), slides out, and only then is
//! the next request dispatched. The crate owns the scheduling, the
//! transition state machine and the swipe gesture recognition; rendering
//! the toast content is left to the host, which reads the active request
//! and its translation off the mounted [`ToastSurface`].
//!
//! ```
//! use iced_toaster::{config::ToasterConfig, InteractionTracker, ToastRequest, ToastSurface, Toaster};
//! use std::time::Instant;
//!
//! let toaster = Toaster::new();
//! let mut surface = ToastSurface::mount(
//!     &toaster,
//!     ToasterConfig::default(),
//!     InteractionTracker::shared(),
//! );
//!
//! toaster.show(ToastRequest::success("Saved"));
//! let _events = surface.tick(Instant::now());
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod animation;
pub mod config;
pub mod error;
pub mod gesture;
pub mod interaction;
pub mod queue;
pub mod request;
pub mod surface;
pub mod toaster;
pub mod transition;

pub use animation::{AnimationDriver, SlideTransition};
pub use config::ToasterConfig;
pub use error::{Error, Result};
pub use gesture::{SwipeDirection, SwipeOutcome, SwipeRecognizer};
pub use interaction::{InteractionHandle, InteractionScheduler, InteractionTracker};
pub use queue::{QueueController, SurfaceBinding};
pub use request::{Position, ToastRequest, ToastStatus};
pub use surface::ToastSurface;
pub use toaster::Toaster;
pub use transition::{ToastEvent, TransitionController, VisibilityState};
