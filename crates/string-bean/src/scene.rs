//! Rendering a planned move list as SVG.

use std::io::Write;

use string_bean_geom::Point;

use crate::SceneError;

const LINE_STYLE: &str = "stroke:rgb(0,0,0); stroke-width:1";

/// One thread segment in output coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ThreadLine {
    pub from: Point,
    pub to: Point,
}

/// Recorded thread segments for one output canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadScene {
    width: f64,
    height: f64,
    opacity: f64,
    lines: Vec<ThreadLine>,
}

impl ThreadScene {
    #[inline]
    pub fn new(width: f64, height: f64, opacity: f64) -> Self {
        Self {
            width,
            height,
            opacity,
            lines: Vec::new(),
        }
    }

    /// Builds a scene by connecting consecutive moves through `anchors`.
    ///
    /// `anchors` must be laid out for the output canvas, not the planning image.
    pub fn from_moves(
        width: f64,
        height: f64,
        opacity: f64,
        anchors: &[Point],
        moves: &[usize],
    ) -> Result<Self, SceneError> {
        let lookup = |index: usize| {
            anchors
                .get(index)
                .copied()
                .ok_or(SceneError::AnchorIndex {
                    index,
                    count: anchors.len(),
                })
        };

        let mut scene = Self::new(width, height, opacity);
        for pair in moves.windows(2) {
            scene.push_line(lookup(pair[0])?, lookup(pair[1])?);
        }
        Ok(scene)
    }

    #[inline]
    pub fn push_line(&mut self, from: Point, to: Point) {
        self.lines.push(ThreadLine { from, to });
    }

    #[inline]
    pub fn lines(&self) -> &[ThreadLine] {
        &self.lines
    }

    /// Writes the scene as a standalone SVG document.
    pub fn write_svg<W: Write>(&self, mut out: W) -> Result<(), SceneError> {
        writeln!(
            out,
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            self.width, self.height
        )?;

        for line in &self.lines {
            writeln!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" opacity="{}" style="{LINE_STYLE}" />"#,
                line.from.x, line.from.y, line.to.x, line.to.y, self.opacity
            )?;
        }

        write!(out, "</svg>")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> Vec<Point> {
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)]
    }

    fn render(scene: &ThreadScene) -> String {
        let mut buf = Vec::new();
        scene.write_svg(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn from_moves_connects_consecutive_anchors() {
        let scene = ThreadScene::from_moves(10.0, 10.0, 0.2, &anchors(), &[0, 2, 1]).unwrap();
        assert_eq!(
            scene.lines(),
            &[
                ThreadLine {
                    from: Point::new(0.0, 0.0),
                    to: Point::new(10.0, 10.0),
                },
                ThreadLine {
                    from: Point::new(10.0, 10.0),
                    to: Point::new(10.0, 0.0),
                },
            ]
        );
    }

    #[test]
    fn from_moves_single_move_has_no_lines() {
        let scene = ThreadScene::from_moves(10.0, 10.0, 0.2, &anchors(), &[1]).unwrap();
        assert!(scene.lines().is_empty());
    }

    #[test]
    fn from_moves_rejects_unknown_anchor() {
        let err = ThreadScene::from_moves(10.0, 10.0, 0.2, &anchors(), &[0, 7]).unwrap_err();
        assert!(matches!(err, SceneError::AnchorIndex { index: 7, count: 3 }));
    }

    #[test]
    fn svg_has_one_line_per_chord() {
        let scene = ThreadScene::from_moves(850.0, 600.0, 0.15, &anchors(), &[0, 1, 2, 0]).unwrap();
        let svg = render(&scene);

        assert!(svg.starts_with(r#"<svg width="850" height="600""#));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<line ").count(), 3);
        assert_eq!(svg.matches(r#"style="stroke:rgb(0,0,0); stroke-width:1""#).count(), 3);
        assert!(svg.contains(r#"<line x1="0" y1="0" x2="10" y2="0" opacity="0.15""#));
    }
}
