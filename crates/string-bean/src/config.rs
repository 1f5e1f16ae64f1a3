/// Tuning knobs for [`ThreadPlanner`](crate::ThreadPlanner).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Opacity of one thread pass, in `[0, 1]`.
    pub line_weight: f64,
    /// Anchors skipped on each side of the current anchor when searching.
    pub anchor_gap_count: usize,
    /// Multiplier applied to pixels a chord would over-darken.
    pub lightness_penalty: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            line_weight: 0.2,
            anchor_gap_count: 0,
            lightness_penalty: 5.0,
        }
    }
}
