#![forbid(unsafe_code)]

//! Core: geometry, drag vectors, selection maps, input types and tuning.
//!
//! # Role in Rubberband
//! `rubberband-core` holds the pure value types of the drag-to-select engine.
//! Nothing here touches a host surface or keeps mutable state between calls;
//! every operation is a total function over plain numbers.
//!
//! # Primary responsibilities
//! - **Geometry**: [`Rect`], [`Point`], [`Size`], the edge-inclusive
//!   [`intersects`] test and [`clamp`].
//! - **DragVector**: anchor + signed displacement describing a gesture.
//! - **SelectionMap**: identifier set with cheap shallow equality.
//! - **Events**: pointer buttons, key codes and key dispositions.
//! - **SelectConfig**: activation threshold and auto-scroll tuning.
//!
//! # How it fits in the system
//! `rubberband-runtime` drives a `DragController` with these types and talks
//! to the host through its surface traits. Hosts depend on both crates.

pub mod config;
pub mod event;
pub mod geometry;
pub mod selection;
pub mod vector;

pub use config::{ConfigError, KeyScrollReset, SelectConfig};
pub use event::{KeyCode, KeyDisposition, PointerButton, PointerEvent};
pub use geometry::{Point, Rect, Size, clamp, intersects};
pub use selection::{ItemId, SelectionMap, mappings_equal};
pub use vector::DragVector;
