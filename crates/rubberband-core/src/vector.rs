#![forbid(unsafe_code)]

//! Anchored drag vectors.
//!
//! A [`DragVector`] is the single source of truth for "where did the gesture
//! start, and how far has it moved". It is an immutable `Copy` value: every
//! transformation returns a new vector.
//!
//! The same type also carries the scroll adjustment of a gesture. In that
//! role the anchor holds the scroll offsets at pointer-down and the magnitude
//! the scroll delta accumulated since, so that
//! `drag.add(scroll).to_rect()` expresses the swept area in content
//! coordinates regardless of how far the container has scrolled.

use crate::geometry::{Point, Rect};

/// An anchor point plus a signed displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragVector {
    /// Anchor x.
    pub x: f64,
    /// Anchor y.
    pub y: f64,
    /// Signed horizontal displacement from the anchor.
    pub magnitude_x: f64,
    /// Signed vertical displacement from the anchor.
    pub magnitude_y: f64,
}

impl DragVector {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, magnitude_x: f64, magnitude_y: f64) -> Self {
        Self {
            x,
            y,
            magnitude_x,
            magnitude_y,
        }
    }

    /// A zero-length vector anchored at `anchor`.
    #[inline]
    #[must_use]
    pub const fn anchored_at(anchor: Point) -> Self {
        Self::new(anchor.x, anchor.y, 0.0, 0.0)
    }

    /// Same anchor, with the tip moved to `tip`.
    #[inline]
    #[must_use]
    pub fn with_terminal(&self, tip: Point) -> Self {
        Self::new(self.x, self.y, tip.x - self.x, tip.y - self.y)
    }

    #[inline]
    #[must_use]
    pub const fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Normalize into an axis-aligned rectangle with non-negative size.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.x.min(self.x + self.magnitude_x),
            self.y.min(self.y + self.magnitude_y),
            self.magnitude_x.abs(),
            self.magnitude_y.abs(),
        )
    }

    /// Euclidean length of the displacement.
    #[inline]
    #[must_use]
    pub fn diagonal_length(&self) -> f64 {
        (self.magnitude_x * self.magnitude_x + self.magnitude_y * self.magnitude_y).sqrt()
    }

    /// Component-wise sum of anchors and magnitudes.
    #[must_use]
    pub fn add(&self, other: &DragVector) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.magnitude_x + other.magnitude_x,
            self.magnitude_y + other.magnitude_y,
        )
    }

    /// Cap the displacement so the tip never passes the far (right/bottom)
    /// edge of `bounds`, measured from the origin. The anchor is untouched and
    /// negative displacements are left as they are.
    #[must_use]
    pub fn clamp_to(&self, bounds: &Rect) -> Self {
        Self::new(
            self.x,
            self.y,
            (bounds.width - self.x).min(self.magnitude_x),
            (bounds.height - self.y).min(self.magnitude_y),
        )
    }

    /// The gesture's current tip.
    #[inline]
    #[must_use]
    pub fn terminal_point(&self) -> Point {
        Point::new(self.x + self.magnitude_x, self.y + self.magnitude_y)
    }
}
