//! Line rasterisation onto the pixel grid.

use crate::PixelIntensity;

/// Traces the grid cells crossed by the segment `(x0, y0) -> (x1, y1)`.
///
/// Coordinates are truncated to cells first; every visited cell has weight
/// `1.0`. The walk visits `1 + |dx| + |dy|` cells, stepping along one axis at a
/// time. See <https://playtechs.blogspot.com/2007/03/raytracing-on-grid.html>.
///
/// Coordinates saturate to the `i32` range so the cell arithmetic cannot
/// overflow. Cells left of or above the origin wrap to huge indices; callers
/// are expected to bounds-check against the image.
pub fn grid_raytrace(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
) -> impl Iterator<Item = PixelIntensity> {
    let (x0, y0) = (to_cell(x0), to_cell(y0));
    let (x1, y1) = (to_cell(x1), to_cell(y1));

    let mut dx = (x1 - x0).abs();
    let mut dy = (y1 - y0).abs();
    let mut x = x0;
    let mut y = y0;

    let n = 1 + dx + dy;
    let x_inc = (x1 - x0).signum();
    let y_inc = (y1 - y0).signum();

    let mut error = dx - dy;
    dx *= 2;
    dy *= 2;

    (0..n).map(move |_| {
        let cell = ((x as usize, y as usize), 1.0);

        if error > 0 {
            x += x_inc;
            error -= dy;
        } else {
            y += y_inc;
            error += dx;
        }

        cell
    })
}

/// Truncates a coordinate to its cell index, saturating at the `i32` range.
#[inline]
fn to_cell(v: f64) -> i64 {
    v.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<(usize, usize)> {
        grid_raytrace(x0, y0, x1, y1).map(|(cell, _)| cell).collect()
    }

    #[test]
    fn diagonal_trace_matches_reference() {
        let expected = vec![
            (2, 5),
            (3, 5),
            (3, 6),
            (4, 6),
            (4, 7),
            (5, 7),
            (5, 8),
            (6, 8),
        ];
        assert_eq!(cells(2.0, 5.0, 6.0, 8.0), expected);
    }

    #[test]
    fn reverse_trace_is_reversed() {
        let mut forward = cells(2.0, 5.0, 6.0, 8.0);
        forward.reverse();
        assert_eq!(cells(6.0, 8.0, 2.0, 5.0), forward);
    }

    #[test]
    fn horizontal_trace() {
        assert_eq!(cells(1.0, 3.0, 4.0, 3.0), vec![(1, 3), (2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn single_cell_trace() {
        assert_eq!(cells(2.7, 2.2, 2.1, 2.9), vec![(2, 2)]);
    }

    #[test]
    fn every_cell_has_full_intensity() {
        assert!(grid_raytrace(0.0, 0.0, 9.0, 4.0).all(|(_, intensity)| intensity == 1.0));
    }

    #[test]
    fn huge_coordinates_saturate() {
        let start: Vec<_> = grid_raytrace(0.0, 0.0, 1e300, 0.0)
            .take(3)
            .map(|(cell, _)| cell)
            .collect();
        assert_eq!(start, vec![(0, 0), (1, 0), (2, 0)]);

        let mut across = grid_raytrace(-1e300, -1e300, 1e300, 1e300);
        assert!(across.next().is_some());
    }
}
