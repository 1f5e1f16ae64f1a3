//! Coordinate types shared by the layouts, the planner and the SVG writer.
//!
//! Canonical space:
//! - Pixels (image pixels for planning, output units for drawing)
//! - Origin top-left
//! - +X right, +Y down

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
