//! Thread art planner.
//!
//! Given a grayscale image and a set of anchors on a frame, the planner picks
//! a sequence of chords (anchor to anchor) whose accumulated darkness best
//! matches the image. The resulting move list can be rendered with
//! [`scene::ThreadScene`].

pub mod config;
pub mod error;
pub mod logging;
pub mod planner;
pub mod raster;
pub mod scene;
pub mod strategy;

pub use config::PlannerConfig;
pub use error::{PlanError, SceneError};
pub use planner::ThreadPlanner;
pub use raster::grid_raytrace;
pub use scene::{ThreadLine, ThreadScene};
pub use strategy::{CountTracker, LossTracker, PlanningStrategy};

pub use string_bean_geom as geom;

/// A traced pixel cell and how strongly the chord covers it.
pub type PixelIntensity = ((usize, usize), f64);
