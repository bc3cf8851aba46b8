//! Turning curves into something drawable: polylines and animation parameters.

use std::time::Duration;

use nalgebra::{RealField, Vector2};

use crate::curve::Curve;
use crate::error::CurveError;

/// Approximate a curve by `resolution + 1` points evenly spaced in `t` over `[0, 1]`.
///
/// The first and last point are the curve's endpoints. A `resolution` of 0 is treated as 1.
pub fn polyline<T: RealField>(
    curve: &Curve<T>,
    resolution: usize,
) -> Result<Vec<Vector2<T>>, CurveError> {
    let resolution = resolution.max(1);
    let steps: T = nalgebra::convert(resolution as f64);
    (0..=resolution)
        .map(|i| curve.evaluate(nalgebra::convert::<f64, T>(i as f64) / steps.clone()))
        .collect()
}

/// Maps wall clock time onto a curve parameter repeating once per period.
///
/// The parameter runs backwards from 1 towards 0, i.e. the animated point travels
/// from the curve's end to its start and then jumps back to the end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationClock {
    period: Duration,
}

impl AnimationClock {
    /// Create a clock completing one cycle every `period`
    pub fn new(period: Duration) -> Self {
        AnimationClock { period }
    }

    /// Time for one cycle
    pub fn period(&self) -> Duration {
        self.period
    }

    /// The curve parameter at `elapsed` time since the animation started.
    ///
    /// A zero period freezes the parameter at 1.
    pub fn parameter(&self, elapsed: Duration) -> f64 {
        if self.period.is_zero() {
            return 1.0;
        }
        let period = self.period.as_secs_f64();
        let phase = elapsed.as_secs_f64() % period;
        (period - phase) / period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quadratic() -> Curve {
        let mut curve = Curve::new();
        curve.set_start(Vector2::new(0.0, 0.0));
        curve.set_end(Vector2::new(100.0, 0.0));
        curve.push(Vector2::new(50.0, 100.0));
        curve
    }

    #[test]
    fn polyline_hits_endpoints() {
        let points = polyline(&quadratic(), 100).unwrap();
        assert_eq!(points.len(), 101);
        assert_eq!(points[0], Vector2::new(0.0, 0.0));
        assert_eq!(points[50], Vector2::new(50.0, 50.0));
        assert_eq!(points[100], Vector2::new(100.0, 0.0));
    }

    #[test]
    fn polyline_zero_resolution() {
        let points = polyline(&quadratic(), 0).unwrap();
        assert_eq!(points, vec![Vector2::new(0.0, 0.0), Vector2::new(100.0, 0.0)]);
    }

    #[test]
    fn polyline_needs_interior_point() {
        let curve: Curve = Curve::new();
        assert!(polyline(&curve, 10).is_err());
    }

    #[test]
    fn clock_runs_backwards() {
        let clock = AnimationClock::new(Duration::from_secs(2));
        assert_relative_eq!(clock.parameter(Duration::ZERO), 1.0);
        assert_relative_eq!(clock.parameter(Duration::from_millis(500)), 0.75);
        assert_relative_eq!(clock.parameter(Duration::from_secs(1)), 0.5);
        assert_relative_eq!(clock.parameter(Duration::from_millis(1500)), 0.25);
        assert_relative_eq!(clock.parameter(Duration::from_secs(2)), 1.0);
        assert_relative_eq!(clock.parameter(Duration::from_secs(5)), 0.5);
    }

    #[test]
    fn clock_without_period() {
        let clock = AnimationClock::new(Duration::ZERO);
        assert_eq!(clock.parameter(Duration::from_secs(3)), 1.0);
    }
}
