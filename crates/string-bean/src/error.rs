use thiserror::Error;

/// Failure while constructing a planner or computing moves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("line weight {0} is outside [0, 1]")]
    LineWeight(f64),

    #[error("image dimensions {width}x{height} overflow the address space")]
    ImageSize { width: usize, height: usize },

    #[error("image mask has {actual} pixels, expected {expected} for {width}x{height}")]
    MaskSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("start anchor {index} is out of range for {count} anchors")]
    StartAnchor { index: usize, count: usize },

    #[error("no candidate anchors: {anchors} anchors leave none outside a gap of {gap} per side")]
    NoCandidate { anchors: usize, gap: usize },
}

/// Failure while building or writing a rendered scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("move references anchor {index}, but only {count} anchors exist")]
    AnchorIndex { index: usize, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
