//! Stop conditions for [`ThreadPlanner::get_moves`].

use crate::{PixelIntensity, ThreadPlanner};

/// Decides when the planner stops adding chords.
pub trait PlanningStrategy<P> {
    /// Called before every step with the moves planned so far.
    fn completed(&mut self, planner: &P, moves: &[usize]) -> bool;
}

/// Stops after a fixed number of chords.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CountTracker(pub u32);

impl<Z> PlanningStrategy<Z> for CountTracker {
    fn completed(&mut self, _: &Z, moves: &[usize]) -> bool {
        // moves include the start anchor, so n chords means n + 1 entries
        moves.len() as u64 > u64::from(self.0)
    }
}

/// Stops once the total remaining darkness drops below a target.
///
/// Computing the loss walks the whole mask, so it only runs every `wait`
/// steps. The interval halves after each miss, down to [`LossTracker::MIN_WAIT`].
#[derive(Debug, Clone, PartialEq)]
pub struct LossTracker {
    wait: usize,
    current: usize,
    target_loss: f64,
}

impl LossTracker {
    /// Planning never exceeds this many moves.
    pub const HARD_STOP: usize = 3000;
    pub const MIN_WAIT: usize = 20;

    pub fn new(wait: usize, target_loss: f64) -> Self {
        Self {
            wait,
            current: 0,
            target_loss,
        }
    }

    #[inline]
    pub fn wait(&self) -> usize {
        self.wait
    }
}

impl<'a, I, S> PlanningStrategy<ThreadPlanner<'a, I, S>> for LossTracker
where
    I: IntoIterator<Item = PixelIntensity>,
    S: Fn(f64, f64, f64, f64) -> I,
{
    fn completed(&mut self, planner: &ThreadPlanner<'a, I, S>, moves: &[usize]) -> bool {
        if moves.len() > Self::HARD_STOP {
            log::debug!("loss tracker hit the hard stop at {} moves", moves.len());
            return true;
        }

        if self.current >= self.wait {
            let loss: f64 = planner.image_mask_inverted().iter().map(|v| v.abs()).sum();
            log::debug!(
                "loss {loss:.1} after {} moves (target {})",
                moves.len(),
                self.target_loss
            );

            if loss < self.target_loss {
                return true;
            }

            self.wait = (self.wait / 2).max(Self::MIN_WAIT);
            self.current = 0;
        }

        self.current += 1;

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid_raytrace, PlannerConfig};
    use string_bean_geom::Point;

    const ANCHORS: [Point; 3] = [
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(0.0, 3.0),
    ];

    // ── CountTracker ──────────────────────────────────────────────────────

    #[test]
    fn count_tracker_completes_after_n_chords() {
        let mut tracker = CountTracker(2);
        assert!(!tracker.completed(&(), &[0]));
        assert!(!tracker.completed(&(), &[0, 1]));
        assert!(tracker.completed(&(), &[0, 1, 2]));
    }

    // ── LossTracker ───────────────────────────────────────────────────────

    #[test]
    fn loss_tracker_stops_on_white_image() {
        let planner = ThreadPlanner::new(
            PlannerConfig::default(),
            &ANCHORS,
            grid_raytrace,
            4,
            4,
            &[255; 16],
        )
        .unwrap();
        let mut tracker = LossTracker::new(0, 1.0);
        assert!(tracker.completed(&planner, &[0]));
    }

    #[test]
    fn loss_tracker_halves_wait_on_miss() {
        let planner = ThreadPlanner::new(
            PlannerConfig::default(),
            &ANCHORS,
            grid_raytrace,
            4,
            4,
            &[0; 16],
        )
        .unwrap();
        let mut tracker = LossTracker::new(100, 1.0);

        for _ in 0..100 {
            assert!(!tracker.completed(&planner, &[0]));
        }
        assert_eq!(tracker.wait(), 100);

        // the 101st call evaluates the loss, misses, and shortens the interval
        assert!(!tracker.completed(&planner, &[0]));
        assert_eq!(tracker.wait(), 50);
    }

    #[test]
    fn loss_tracker_wait_has_floor() {
        let planner = ThreadPlanner::new(
            PlannerConfig::default(),
            &ANCHORS,
            grid_raytrace,
            4,
            4,
            &[0; 16],
        )
        .unwrap();
        let mut tracker = LossTracker::new(0, 1.0);
        assert!(!tracker.completed(&planner, &[0]));
        assert_eq!(tracker.wait(), LossTracker::MIN_WAIT);
    }

    #[test]
    fn loss_tracker_hard_stop() {
        let planner = ThreadPlanner::new(
            PlannerConfig::default(),
            &ANCHORS,
            grid_raytrace,
            4,
            4,
            &[0; 16],
        )
        .unwrap();
        let mut tracker = LossTracker::new(1000, 0.0);
        let moves = vec![0; LossTracker::HARD_STOP + 1];
        assert!(tracker.completed(&planner, &moves));
    }
}
