#![forbid(unsafe_code)]

//! The host surface the engine queries and commands.
//!
//! The engine never owns the visual tree. A [`ScrollSurface`] answers
//! geometry queries about the scrollable container and its items, and accepts
//! the handful of commands the engine issues (scroll, focus, pointer capture).
//!
//! # Coordinate spaces
//!
//! - `viewport` and item rectangles are in the host's viewport space (the
//!   space pointer positions arrive in).
//! - `scroll` is the container's current scroll offset.
//! - `content` is the full scrollable size of the container.

use rubberband_core::{ItemId, Point, Rect, Size};

/// Snapshot of the container's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceMetrics {
    /// Container rectangle in viewport coordinates.
    pub viewport: Rect,
    /// Horizontal/vertical scroll offsets.
    pub scroll: Point,
    /// Full scrollable content size.
    pub content: Size,
}

impl SurfaceMetrics {
    /// Content-space bounds `(0, 0, content.width, content.height)`.
    #[must_use]
    pub const fn content_bounds(&self) -> Rect {
        Rect::from_size(self.content)
    }

    /// Translate a viewport-space rectangle into content space.
    #[must_use]
    pub fn to_content(&self, rect: Rect) -> Rect {
        rect.translate(
            self.scroll.x - self.viewport.x,
            self.scroll.y - self.viewport.y,
        )
    }
}

/// A scrollable container of selectable items.
pub trait ScrollSurface {
    /// Current geometry, or `None` when the container is unavailable
    /// (e.g. unmounted). Handlers treat `None` as "do nothing".
    fn metrics(&self) -> Option<SurfaceMetrics>;

    /// Visit every candidate item with its viewport rectangle.
    ///
    /// Items without a usable identifier are reported with `None` and never
    /// enter a selection.
    fn for_each_item(&self, visit: &mut dyn FnMut(Option<&ItemId>, Rect));

    /// Scroll the container by a delta.
    fn scroll_by(&mut self, dx: f64, dy: f64);

    /// Give the container keyboard focus.
    fn focus(&mut self);

    /// Route all further events of `pointer_id` to the container.
    fn capture_pointer(&mut self, pointer_id: u32);
}
