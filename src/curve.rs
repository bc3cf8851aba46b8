//! The curve's control polygon and de castlejau's algorithm evaluating it.

use log::debug;
use nalgebra::{RealField, Vector2};
use smallvec::SmallVec;

use crate::bounding_box::BoundingBox;
use crate::construction::{castlejau_step, Construction};
use crate::error::CurveError;

/// Control points, stored on the stack for cubic curves and lower
pub type Points<T> = SmallVec<[Vector2<T>; 4]>;

/// Edges between consecutive control points or their interpolations
pub type Edges<T> = SmallVec<[Edge<T>; 4]>;

/// Get the point `t` of the way from `p` to `q`.
///
/// `t` isn't clamped, values outside of `[0, 1]` extrapolate along the line.
pub fn lerp<T: RealField>(p: &Vector2<T>, q: &Vector2<T>, t: T) -> Vector2<T> {
    p + (q - p) * t
}

/// A directed line segment between two points.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<T: RealField> {
    /// Point the edge starts at i.e. `t = 0`
    pub from: Vector2<T>,

    /// Point the edge ends at i.e. `t = 1`
    pub to: Vector2<T>,
}

impl<T: RealField> Edge<T> {
    /// Create an edge from `from` to `to`
    pub fn new(from: Vector2<T>, to: Vector2<T>) -> Self {
        Edge { from, to }
    }

    /// Get the point `t` of the way along the edge. See [`lerp`].
    pub fn lerp(&self, t: T) -> Vector2<T> {
        lerp(&self.from, &self.to, t)
    }
}

/// Bezier curve of arbitrary degree built up point by point.
///
/// The curve is made of two endpoints, which can be placed and replaced independently,
/// and an ordered list of interior points which can only be appended to.
///
/// The control polygon used for evaluation is `[start, reversed interior points, end]`:
/// the first interior point pushed ends up next to `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve<T: RealField = f64> {
    start: Option<Vector2<T>>,
    end: Option<Vector2<T>>,
    interior: Vec<Vector2<T>>,
}

impl<T: RealField> Default for Curve<T> {
    fn default() -> Self {
        Curve {
            start: None,
            end: None,
            interior: Vec::new(),
        }
    }
}

impl<T: RealField> Curve<T> {
    /// Create a curve without any points placed
    pub fn new() -> Self {
        Self::default()
    }

    /// Place (or replace) the curve's starting point
    pub fn set_start(&mut self, point: Vector2<T>) {
        debug!("Set start to {:?}", point.as_slice());
        self.start = Some(point);
    }

    /// Place (or replace) the curve's end point
    pub fn set_end(&mut self, point: Vector2<T>) {
        debug!("Set end to {:?}", point.as_slice());
        self.end = Some(point);
    }

    /// Append an interior control point
    pub fn push(&mut self, point: Vector2<T>) {
        debug!(
            "Appended interior point #{} at {:?}",
            self.interior.len(),
            point.as_slice()
        );
        self.interior.push(point);
    }

    /// The starting point, if placed yet
    pub fn start(&self) -> Option<&Vector2<T>> {
        self.start.as_ref()
    }

    /// The end point, if placed yet
    pub fn end(&self) -> Option<&Vector2<T>> {
        self.end.as_ref()
    }

    /// The interior points in the order they were pushed
    pub fn interior(&self) -> &[Vector2<T>] {
        &self.interior
    }

    /// Returns the curve's degree which is one lower than its number of control points
    pub fn degree(&self) -> usize {
        self.interior.len() + 1
    }

    /// The control polygon evaluation runs on.
    ///
    /// Endpoints which haven't been placed yet are taken to be the origin.
    pub fn control_polygon(&self) -> Points<T> {
        let mut points = Points::with_capacity(self.interior.len() + 2);
        points.push(self.start.clone().unwrap_or_else(Vector2::zeros));
        points.extend(self.interior.iter().rev().cloned());
        points.push(self.end.clone().unwrap_or_else(Vector2::zeros));
        points
    }

    /// The control polygon's edges, i.e. its consecutive pairs of points
    pub fn edges(&self) -> Edges<T> {
        self.control_polygon()
            .windows(2)
            .map(|pair| Edge::new(pair[0].clone(), pair[1].clone()))
            .collect()
    }

    /// Get the point on the curve at position `t`.
    ///
    /// This method uses de castlejau's algorithm: the control polygon's edges are
    /// interpolated pairwise into one edge less, until only two edges remain whose
    /// interpolations are interpolated a last time.
    ///
    /// `t` is usually between 0 and 1 but isn't clamped.
    pub fn evaluate(&self, t: T) -> Result<Vector2<T>, CurveError> {
        let edges = self.checked_edges()?;
        Ok(reduce(&edges, t))
    }

    /// Run de castlejau's algorithm step by step.
    ///
    /// The returned iterator yields every level of interpolated edges,
    /// starting at the control polygon and ending with a single edge.
    pub fn construction(&self, t: T) -> Result<Construction<T>, CurveError> {
        let edges = self.checked_edges()?;
        Ok(Construction::new(edges, t))
    }

    /// Constructs an axis aligned bounding box containing all control points.
    ///
    /// This box will also contain the whole curve between 0 and 1.
    /// Returns `None` if the curve can't be evaluated yet.
    pub fn bounding_box(&self) -> Option<BoundingBox<T>> {
        if self.interior.is_empty() {
            return None;
        }
        BoundingBox::from_points(self.control_polygon())
    }

    fn checked_edges(&self) -> Result<Edges<T>, CurveError> {
        if self.interior.is_empty() {
            return Err(CurveError::InsufficientControlPoints {
                found: self.interior.len() + 2,
            });
        }
        Ok(self.edges())
    }
}

/// Reduce the edges by one per recursion until two are left to compute the final point from.
fn reduce<T: RealField>(edges: &[Edge<T>], t: T) -> Vector2<T> {
    match edges {
        [first, second] => {
            let a = first.lerp(t.clone());
            let b = second.lerp(t.clone());
            lerp(&a, &b, t)
        }
        [_, _, _, ..] => reduce(&castlejau_step(edges, t.clone()), t),
        _ => unreachable!("curves are checked to have at least two edges"),
    }
}
