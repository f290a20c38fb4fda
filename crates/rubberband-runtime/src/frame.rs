#![forbid(unsafe_code)]

//! Animation-frame scheduling.
//!
//! The auto-scroll loop runs once per frame. Hosts expose their frame source
//! (a browser's `requestAnimationFrame`, a UI toolkit's vsync callback, a
//! test clock) through [`FrameScheduler`]. A request returns a
//! [`FrameHandle`]; when the frame fires, the host passes that handle back to
//! the controller. Revoking a request with
//! [`cancel_frame`](FrameScheduler::cancel_frame) guarantees the handle will
//! not be delivered.

use crate::surface::ScrollSurface;

/// Token identifying one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

impl FrameHandle {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A source of animation frames.
pub trait FrameScheduler {
    /// Request one callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Revoke a pending request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Everything a [`DragController`](crate::DragController) needs from its host.
pub trait SelectionHost: ScrollSurface + FrameScheduler {}

impl<T: ScrollSurface + FrameScheduler + ?Sized> SelectionHost for T {}
