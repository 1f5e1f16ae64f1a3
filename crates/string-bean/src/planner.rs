use string_bean_geom::Point;

use crate::{PixelIntensity, PlanError, PlannerConfig, PlanningStrategy};

/// Greedy chord planner for thread art.
///
/// The planner keeps an inverted copy of the grayscale image (how much
/// darkness is still missing per pixel). Each step it tries every chord from
/// the current anchor to the anchors outside the configured gap, takes the
/// one with the lowest average penalty and subtracts it from the mask.
///
/// # Examples
///
/// ```
/// use string_bean::{grid_raytrace, CountTracker, PlannerConfig, ThreadPlanner};
/// use string_bean::geom::Point;
///
/// let anchors = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 2.0)];
/// let (width, height) = (10, 10);
/// let image_mask = vec![255; width * height];
///
/// let mut planner = ThreadPlanner::new(
///     PlannerConfig::default(),
///     &anchors,
///     grid_raytrace,
///     width,
///     height,
///     &image_mask,
/// )
/// .unwrap();
///
/// let moves = planner.get_moves(0, CountTracker(5)).unwrap();
/// assert_eq!(moves.len(), 6);
/// ```
pub struct ThreadPlanner<'a, I, S>
where
    I: IntoIterator<Item = PixelIntensity>,
    S: Fn(f64, f64, f64, f64) -> I,
{
    /// line weight scaled into the u8 pixel range
    line_weight: f64,
    anchors: &'a [Point],
    anchor_gap_count: usize,
    lightness_penalty: f64,
    line_algorithm: S,
    image_width: usize,
    image_height: usize,
    image_mask_inverted: Vec<f64>,
}

impl<'a, I, S> ThreadPlanner<'a, I, S>
where
    I: IntoIterator<Item = PixelIntensity>,
    S: Fn(f64, f64, f64, f64) -> I,
{
    /// Constructs a planner.
    ///
    /// * `anchors` - anchor coordinates in image pixels, ideally forming a convex frame
    /// * `line_algorithm` - returns the cells (and coverage) best representing a
    ///   segment between two points, e.g. [`grid_raytrace`](crate::grid_raytrace)
    /// * `image_mask` - row-major grayscale pixels, `image_width * image_height` long
    pub fn new(
        config: PlannerConfig,
        anchors: &'a [Point],
        line_algorithm: S,
        image_width: usize,
        image_height: usize,
        image_mask: &[u8],
    ) -> Result<Self, PlanError> {
        if !(0.0..=1.0).contains(&config.line_weight) {
            return Err(PlanError::LineWeight(config.line_weight));
        }

        let expected = image_width
            .checked_mul(image_height)
            .ok_or(PlanError::ImageSize {
                width: image_width,
                height: image_height,
            })?;
        if image_mask.len() != expected {
            return Err(PlanError::MaskSize {
                width: image_width,
                height: image_height,
                expected,
                actual: image_mask.len(),
            });
        }

        let image_mask_inverted = image_mask
            .iter()
            .map(|v| f64::from(u8::MAX - v))
            .collect();

        Ok(Self {
            line_weight: f64::from(u8::MAX) * config.line_weight,
            anchors,
            anchor_gap_count: config.anchor_gap_count,
            lightness_penalty: config.lightness_penalty,
            line_algorithm,
            image_width,
            image_height,
            image_mask_inverted,
        })
    }

    /// Darkness still missing per pixel, row-major.
    #[inline]
    pub fn image_mask_inverted(&self) -> &[f64] {
        &self.image_mask_inverted
    }

    /// Plans moves starting at `start_anchor` until `strategy` reports completion.
    ///
    /// The returned list starts with `start_anchor`; each following entry is
    /// the anchor the thread travels to next.
    pub fn get_moves<P>(
        &mut self,
        start_anchor: usize,
        mut strategy: P,
    ) -> Result<Vec<usize>, PlanError>
    where
        P: PlanningStrategy<Self>,
    {
        if start_anchor >= self.anchors.len() {
            return Err(PlanError::StartAnchor {
                index: start_anchor,
                count: self.anchors.len(),
            });
        }

        let mut anchor = start_anchor;
        let mut moves = vec![start_anchor];

        while !strategy.completed(self, &moves) {
            let next = self.next_anchor(anchor).ok_or(PlanError::NoCandidate {
                anchors: self.anchors.len(),
                gap: self.anchor_gap_count,
            })?;
            log::trace!("chord {anchor} -> {next}");

            self.apply_line(self.anchors[anchor], self.anchors[next]);

            anchor = next;
            moves.push(anchor);
        }

        log::debug!(
            "planned {} chords over {} anchors",
            moves.len() - 1,
            self.anchors.len()
        );
        Ok(moves)
    }

    /// Lowest-penalty anchor outside the gap around `current`.
    fn next_anchor(&self, current: usize) -> Option<usize> {
        let count = self.anchors.len();
        // all anchors - gap on both sides - current anchor
        let search_size = count.checked_sub(2 * self.anchor_gap_count + 1)?;

        (0..search_size)
            .map(|i| (current + i + self.anchor_gap_count + 1) % count)
            .map(|next| {
                (
                    next,
                    self.penalty(self.anchors[current], self.anchors[next]),
                )
            })
            .min_by(|x, y| x.1.total_cmp(&y.1))
            .map(|(next, _)| next)
    }

    /// Subtracts a chord from the remaining darkness.
    fn apply_line(&mut self, src: Point, dst: Point) {
        for ((x, y), intensity) in self.trace_line(src, dst) {
            self.image_mask_inverted[x + y * self.image_width] -= intensity * self.line_weight;
        }
    }

    /// Average per-pixel penalty of drawing a chord.
    ///
    /// Pixels the chord would over-darken count `lightness_penalty` times
    /// their overshoot. An empty trace has penalty `-inf`.
    fn penalty(&self, src: Point, dst: Point) -> f64 {
        let line = self.trace_line(src, dst);

        if line.is_empty() {
            return f64::NEG_INFINITY;
        }

        let line_length = line.len() as f64;
        let line_penalty: f64 = line
            .into_iter()
            .map(|((x, y), intensity)| {
                self.image_mask_inverted[x + y * self.image_width] - intensity * self.line_weight
            })
            .map(|p| if p < 0.0 { -self.lightness_penalty * p } else { p })
            .sum();

        line_penalty / line_length
    }

    /// Cells of the chord that fall inside the image.
    fn trace_line(&self, src: Point, dst: Point) -> Vec<PixelIntensity> {
        (self.line_algorithm)(src.x, src.y, dst.x, dst.y)
            .into_iter()
            .filter(|((x, y), _)| *x < self.image_width && *y < self.image_height)
            .collect()
    }
}
