#![forbid(unsafe_code)]

//! Rubberband Runtime
//!
//! Stateful half of the drag-to-select engine.
//!
//! # Key Components
//!
//! - [`DragController`] - Idle/Pending/Dragging state machine and selection
//!   recomputation
//! - [`AutoScroller`] - Self-rescheduling edge auto-scroll loop
//! - [`ScrollSurface`] - Geometry queries and commands against the host
//!   container
//! - [`FrameScheduler`] - Animation-frame requests and revocation
//!
//! # How it fits in the system
//! The host forwards its native pointer, key, scroll and frame events to a
//! [`DragController`] and renders [`DragController::selection_rect`] plus the
//! committed selection. Value types come from `rubberband-core`.

pub mod autoscroll;
pub mod controller;
pub mod frame;
pub mod surface;

pub use autoscroll::{AutoScroller, FrameTick, ScrollStep, edge_scroll_step};
pub use controller::{DragController, DragEffect, DragPhase, NoopReason};
pub use frame::{FrameHandle, FrameScheduler, SelectionHost};
pub use surface::{ScrollSurface, SurfaceMetrics};
