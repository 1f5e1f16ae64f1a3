//! Anchor placement for **string-bean** thread art.
//!
//! Anchors are the pins a thread is wound around. This crate computes where
//! they sit on a frame, either evenly around a circle or at equal arc-length
//! intervals along a rectangle perimeter.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Point`, `Rect` |
//! | [`anchors`] | `circle_anchors`, `rectangle_anchors`, `AnchorShape` |
//! | [`error`] | `AnchorError` |
//!
//! # Quick start
//!
//! ```rust
//! use string_bean_geom::{circle_anchors, rectangle_anchors};
//!
//! let ring = circle_anchors(4, 10.0, 10.0, 5.0).unwrap();
//! assert_eq!(ring.len(), 4);
//!
//! let frame = rectangle_anchors(4, 10.0, 10.0).unwrap();
//! assert_eq!(frame[0].x, 0.0);
//! ```

pub mod anchors;
pub mod coords;
pub mod error;

pub use anchors::{
    circle_anchors, inscribed_radius, rectangle_anchors, AnchorSet, AnchorShape,
};
pub use coords::{Point, Rect};
pub use error::AnchorError;
