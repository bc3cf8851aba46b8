//! Axis aligned bounding boxes

use nalgebra::{RealField, Vector2};

/// Axis aligned box given by its smallest and largest corner
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox<T: RealField> {
    /// Corner with the smallest coordinates
    pub min: Vector2<T>,

    /// Corner with the largest coordinates
    pub max: Vector2<T>,
}

impl<T: RealField> BoundingBox<T> {
    /// Smallest box containing all points or `None` if there are none
    pub fn from_points<I: IntoIterator<Item = Vector2<T>>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bb = BoundingBox {
            min: first.clone(),
            max: first,
        };
        for p in points {
            bb.min = bb.min.inf(&p);
            bb.max = bb.max.sup(&p);
        }
        Some(bb)
    }

    /// Checks whether a point lies inside the box or on its border
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }

    /// Width and height
    pub fn size(&self) -> Vector2<T> {
        &self.max - &self.min
    }

    /// Grow the box by `margin` in every direction
    pub fn expand(&self, margin: T) -> Self {
        let margin = Vector2::new(margin.clone(), margin);
        BoundingBox {
            min: &self.min - &margin,
            max: &self.max + margin,
        }
    }
}
