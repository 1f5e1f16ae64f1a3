use thiserror::Error;

/// Rejected input to an anchor layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnchorError {
    #[error("invalid argument `{name}`: {value} is not finite")]
    InvalidArgument { name: &'static str, value: f64 },
}

impl AnchorError {
    /// Returns `Ok(value)` when finite, else an `InvalidArgument` naming the input.
    pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::InvalidArgument { name, value })
        }
    }
}
