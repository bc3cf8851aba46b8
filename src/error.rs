//! Errors returned while evaluating a curve.

use thiserror::Error;

/// Reasons a [`Curve`](crate::Curve) can't be evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// The control polygon needs at least three points, i.e. one interior point.
    #[error("curve needs at least 3 control points, found {found}")]
    InsufficientControlPoints {
        /// Number of control points the polygon had
        found: usize,
    },
}
