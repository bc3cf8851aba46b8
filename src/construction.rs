//! Step by step trace of de castlejau's algorithm.
//!
//! [`Curve::evaluate`](crate::Curve::evaluate) only returns the final point.
//! Animating the algorithm needs every intermediate edge as well,
//! which [`Construction`] yields level by level using the same interpolation step.

use nalgebra::{RealField, Vector2};

use crate::curve::{Edge, Edges};

/// One level of the construction
#[derive(Clone, Debug, PartialEq)]
pub struct Level<T: RealField> {
    /// How many interpolation steps produced this level; the control polygon is at depth 0
    pub depth: usize,

    /// The level's edges, one less than on the previous level
    pub edges: Edges<T>,
}

/// Iterator over the levels of de castlejau's algorithm for a fixed `t`.
///
/// Starts with the control polygon's edges and stops after the level containing a single edge.
/// The curve's point lies on this last edge (see [`Construction::point`]).
#[derive(Clone, Debug)]
pub struct Construction<T: RealField> {
    next: Option<Level<T>>,
    t: T,
}

impl<T: RealField> Construction<T> {
    pub(crate) fn new(edges: Edges<T>, t: T) -> Self {
        Construction {
            next: Some(Level { depth: 0, edges }),
            t,
        }
    }

    /// The parameter the construction runs for
    pub fn parameter(&self) -> T {
        self.t.clone()
    }

    /// Run the remaining steps and return the curve's point.
    ///
    /// Returns `None` if the iterator was already exhausted.
    pub fn point(self) -> Option<Vector2<T>> {
        let t = self.t.clone();
        let level = self.last()?;
        level.edges.first().map(|edge| edge.lerp(t))
    }
}

impl<T: RealField> Iterator for Construction<T> {
    type Item = Level<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let level = self.next.take()?;
        if level.edges.len() > 1 {
            self.next = Some(Level {
                depth: level.depth + 1,
                edges: castlejau_step(&level.edges, self.t.clone()),
            });
        }
        Some(level)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every level has one edge less than the one before
        let len = self.next.as_ref().map_or(0, |level| level.edges.len());
        (len, Some(len))
    }
}

impl<T: RealField> ExactSizeIterator for Construction<T> {}

/// Performs a single step of de castlejau's algorithm
///
/// i.e. combines `n` edges into `n - 1` edges by connecting the points `t` along consecutive edges
pub(crate) fn castlejau_step<T: RealField>(edges: &[Edge<T>], t: T) -> Edges<T> {
    edges
        .windows(2)
        .map(|pair| Edge::new(pair[0].lerp(t.clone()), pair[1].lerp(t.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Curve;
    use approx::assert_relative_eq;

    fn cubic() -> Curve {
        let mut curve = Curve::new();
        curve.set_start(Vector2::new(0.0, 0.0));
        curve.set_end(Vector2::new(30.0, 0.0));
        curve.push(Vector2::new(20.0, 10.0));
        curve.push(Vector2::new(10.0, 10.0));
        curve
    }

    #[test]
    fn levels_shrink_to_one_edge() {
        let construction = cubic().construction(0.5).unwrap();
        assert_eq!(construction.len(), 3);
        let levels: Vec<_> = construction.collect();
        assert_eq!(
            levels.iter().map(|l| l.edges.len()).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
        assert_eq!(
            levels.iter().map(|l| l.depth).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn first_level_is_control_polygon() {
        let curve = cubic();
        let mut construction = curve.construction(0.25).unwrap();
        assert_eq!(construction.next().unwrap().edges, curve.edges());
    }

    #[test]
    fn step_interpolates_consecutive_edges() {
        let curve = cubic();
        let level = curve.construction(0.5).unwrap().nth(1).unwrap();
        // Control polygon (0,0) (10,10) (20,10) (30,0)
        assert_relative_eq!(level.edges[0].from, Vector2::new(5.0, 5.0));
        assert_relative_eq!(level.edges[0].to, Vector2::new(15.0, 10.0));
        assert_relative_eq!(level.edges[1].from, Vector2::new(15.0, 10.0));
        assert_relative_eq!(level.edges[1].to, Vector2::new(25.0, 5.0));
    }

    #[test]
    fn point_matches_evaluation() {
        let curve = cubic();
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let point = curve.construction(t).unwrap().point().unwrap();
            assert_relative_eq!(point, curve.evaluate(t).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn exhausted_construction_has_no_point() {
        let mut construction = cubic().construction(0.5).unwrap();
        construction.by_ref().for_each(drop);
        assert_eq!(construction.len(), 0);
        assert_eq!(construction.point(), None);
    }
}
