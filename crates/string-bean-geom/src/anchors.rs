//! Anchor layouts.
//!
//! Both layouts return points in placement order; callers index into the
//! result, so the order is part of the contract.

use core::f64::consts::TAU;

use crate::coords::{Point, Rect};
use crate::error::AnchorError;

/// Ordered anchor positions.
pub type AnchorSet = Vec<Point>;

/// Computes `count` anchors evenly spaced around a circle.
///
/// The circle is centred on `(width / 2, height / 2)`. The first anchor sits at
/// angle 0 (`(cx + radius, cy)`) and each following anchor advances the angle by
/// `2π / count`. With +Y pointing down this walks clockwise on screen.
///
/// `count == 0` yields an empty set.
pub fn circle_anchors(
    count: usize,
    width: f64,
    height: f64,
    radius: f64,
) -> Result<AnchorSet, AnchorError> {
    let width = AnchorError::check_finite("width", width)?;
    let height = AnchorError::check_finite("height", height)?;
    let radius = AnchorError::check_finite("radius", radius)?;

    let center = Point::new(width / 2.0, height / 2.0);
    let step = TAU / count as f64;

    Ok((0..count)
        .map(|anchor| anchor as f64 * step)
        .map(|angle| {
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect())
}

/// Computes `count` anchors along the perimeter of the rectangle `(0,0)..(width,height)`.
///
/// The walk starts at the top-left corner and runs clockwise (top, right,
/// bottom, left) in steps of `perimeter / count`. The first anchor is always
/// `(0,0)`; the last one stops one step short of returning to it.
///
/// `count == 0` yields an empty set, same as [`circle_anchors`].
pub fn rectangle_anchors(count: usize, width: f64, height: f64) -> Result<AnchorSet, AnchorError> {
    let width = AnchorError::check_finite("width", width)?;
    let height = AnchorError::check_finite("height", height)?;

    if count == 0 {
        return Ok(Vec::new());
    }

    let perimeter = 2.0 * width + 2.0 * height;
    let gap = perimeter / count as f64;

    let mut anchors = Vec::with_capacity(count);
    anchors.push(Point::zero());

    anchors.extend((1..count).map(|step| {
        let walked = gap * step as f64;

        if walked < width {
            // top, left to right
            Point::new(walked, 0.0)
        } else if walked < width + height {
            // right, top to bottom
            Point::new(width, along_edge(walked - width, height))
        } else if walked < 2.0 * width + height {
            // bottom, right to left
            Point::new(along_edge(2.0 * width - (walked - height), width), height)
        } else {
            // left, bottom to top
            Point::new(0.0, along_edge(height + 2.0 * width - (walked - height), height))
        }
    }));

    Ok(anchors)
}

/// Keeps a coordinate on its edge when rounding pushes it past a corner.
#[inline]
fn along_edge(value: f64, extent: f64) -> f64 {
    if extent >= 0.0 { value.clamp(0.0, extent) } else { value }
}

/// Largest circle radius that fits inside a `width` x `height` box.
#[inline]
pub fn inscribed_radius(width: f64, height: f64) -> f64 {
    width.min(height) / 2.0
}

/// Frame shape the anchors are laid out on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnchorShape {
    /// Circle centred in the bounds. `None` uses the inscribed radius; an
    /// explicit radius is capped to it.
    Circle { radius: Option<f64> },
    /// Rectangle covering the whole bounds.
    Rectangle,
}

impl Default for AnchorShape {
    fn default() -> Self {
        Self::Circle { radius: None }
    }
}

impl AnchorShape {
    /// Lays out `count` anchors inside `bounds`, offset by its origin.
    pub fn anchors(self, count: usize, bounds: Rect) -> Result<AnchorSet, AnchorError> {
        let origin = Point::new(
            AnchorError::check_finite("x", bounds.origin.x)?,
            AnchorError::check_finite("y", bounds.origin.y)?,
        );
        let (width, height) = (bounds.width(), bounds.height());

        let anchors = match self {
            Self::Circle { radius } => {
                circle_anchors(count, width, height, fitted_radius(width, height, radius)?)?
            }
            Self::Rectangle => rectangle_anchors(count, width, height)?,
        };

        Ok(anchors.into_iter().map(|p| p + origin).collect())
    }

    /// Returns the same shape with its explicit radius (if any) rescaled from
    /// `from` to `to`, keeping the radius proportional to the inscribed radius.
    pub fn rescaled(self, from: Rect, to: Rect) -> Self {
        match self {
            Self::Circle { radius: Some(r) } => {
                let from_r = inscribed_radius(from.width(), from.height());
                let to_r = inscribed_radius(to.width(), to.height());
                let radius = if from_r > 0.0 { r * to_r / from_r } else { to_r };
                Self::Circle {
                    radius: Some(radius),
                }
            }
            other => other,
        }
    }
}

/// Explicit radius capped to the inscribed one, or the inscribed one itself.
fn fitted_radius(width: f64, height: f64, radius: Option<f64>) -> Result<f64, AnchorError> {
    let fit = inscribed_radius(width, height);
    match radius {
        Some(r) => Ok(AnchorError::check_finite("radius", r)?.min(fit)),
        None => Ok(fit),
    }
}
