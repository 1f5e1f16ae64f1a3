use super::Point;

/// Axis-aligned frame bounds in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Point,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Point::new(w, h),
        }
    }

    /// Rectangle spanning `(0,0)` to `(width, height)`.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Box through the centres of the outermost pixels of a `width` x
    /// `height` image, `(0,0)` to `(width - 1, height - 1)`.
    ///
    /// Every point inside it truncates to a cell within the image, so anchors
    /// laid out on it always trace at least one pixel.
    #[inline]
    pub fn pixel_bounds(width: usize, height: usize) -> Self {
        Self::from_size(width.saturating_sub(1) as f64, height.saturating_sub(1) as f64)
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_size_starts_at_origin() {
        let rect = Rect::from_size(10.0, 6.0);
        assert_eq!(rect.origin, Point::zero());
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 6.0);
    }

    #[test]
    fn pixel_bounds_stay_inside_image() {
        assert_eq!(Rect::pixel_bounds(10, 4), Rect::from_size(9.0, 3.0));
    }

    #[test]
    fn pixel_bounds_of_empty_image() {
        assert_eq!(Rect::pixel_bounds(0, 0), Rect::from_size(0.0, 0.0));
    }
}
