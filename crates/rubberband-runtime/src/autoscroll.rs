#![forbid(unsafe_code)]

//! Edge-triggered auto-scroll while dragging.
//!
//! Once a press has become a drag, the container scrolls on its own whenever
//! the gesture's tip sits inside a band along any viewport edge. The loop is a
//! self-rescheduling frame task: each fired frame inspects the tip, issues at
//! most one `scroll_by` command and requests the next frame.
//!
//! # Invariants
//!
//! 1. At most one frame request is pending at a time.
//! 2. After [`AutoScroller::stop`] no pending request remains, and a late
//!    delivery of the revoked handle is ignored.
//! 3. A step never exceeds `max_scroll_step` on either axis.
//! 4. If the surface or the drag vector is gone when a frame fires, the loop
//!    ends without rescheduling.

use rubberband_core::{DragVector, Point, SelectConfig, Size, clamp};

use crate::frame::{FrameHandle, FrameScheduler, SelectionHost};

/// One auto-scroll command. An axis outside every band has a zero delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStep {
    pub dx: f64,
    pub dy: f64,
}

/// Compute the scroll step for a tip in container-relative coordinates.
///
/// The right/bottom band wins over the left/top band when a container is
/// narrower than two bands and the tip sits in both.
#[must_use]
pub fn edge_scroll_step(tip: Point, viewport: Size, config: &SelectConfig) -> Option<ScrollStep> {
    let dx = axis_step(tip.x, viewport.width, config);
    let dy = axis_step(tip.y, viewport.height, config);
    if dx.is_none() && dy.is_none() {
        return None;
    }
    Some(ScrollStep {
        dx: dx.unwrap_or(0.0),
        dy: dy.unwrap_or(0.0),
    })
}

fn axis_step(position: f64, extent: f64, config: &SelectConfig) -> Option<f64> {
    let band = config.edge_band;
    let cap = config.max_scroll_step;
    let far_gap = extent - position;
    if far_gap < band {
        Some(clamp(band - far_gap, 0.0, cap))
    } else if position < band {
        Some(-clamp(band - position, 0.0, cap))
    } else {
        None
    }
}

/// What a fired frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameTick {
    /// The handle was not the pending one (revoked or foreign); nothing ran.
    Stale,
    /// The surface or drag vector was gone; the loop ended.
    Stopped,
    /// Tip outside every band; next frame requested.
    Idle,
    /// A scroll command was issued; next frame requested.
    Scrolled(ScrollStep),
}

/// Owner of the loop's pending frame request.
#[derive(Debug, Default)]
pub struct AutoScroller {
    pending: Option<FrameHandle>,
}

impl AutoScroller {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Whether a frame request is outstanding.
    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Begin the loop. No-op while already running.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.pending.is_none() {
            let handle = scheduler.request_frame();
            tracing::trace!(handle = handle.get(), "auto-scroll started");
            self.pending = Some(handle);
        }
    }

    /// End the loop, revoking the pending frame.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
            tracing::trace!(handle = handle.get(), "auto-scroll stopped");
        }
    }

    /// Run one tick for a fired frame.
    pub fn on_frame<H: SelectionHost + ?Sized>(
        &mut self,
        handle: FrameHandle,
        drag: Option<&DragVector>,
        config: &SelectConfig,
        host: &mut H,
    ) -> FrameTick {
        if self.pending != Some(handle) {
            return FrameTick::Stale;
        }
        self.pending = None;

        let (Some(metrics), Some(drag)) = (host.metrics(), drag) else {
            tracing::trace!("auto-scroll ended: surface or gesture gone");
            return FrameTick::Stopped;
        };

        let step = edge_scroll_step(drag.terminal_point(), metrics.viewport.size(), config);
        if let Some(step) = step {
            tracing::trace!(dx = step.dx, dy = step.dy, "auto-scroll step");
            host.scroll_by(step.dx, step.dy);
        }

        self.pending = Some(host.request_frame());

        match step {
            Some(step) => FrameTick::Scrolled(step),
            None => FrameTick::Idle,
        }
    }
}
