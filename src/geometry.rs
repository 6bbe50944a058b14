//! A few useful geometric types

use itertools::Itertools;
use nalgebra::Vector2;
use rayon::prelude::*;

pub type Point2D = Vector2<f64>;

/// Euclidean distance between two points.
pub fn distance(a: &Point2D, b: &Point2D) -> f64 {
    (a - b).norm()
}

/// Mean position of a set of points.
///
/// Panics if `points` is empty.
pub(crate) fn center(points: &[Point2D]) -> Point2D {
    assert!(!points.is_empty());
    let total = points.len() as f64;
    points.par_iter().sum::<Point2D>() / total
}

/// A 2D axis-aligned bounding box.
///
/// Describes the domain a set of points lives in, e.g. the region initial
/// k-means centers are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    p_min: Point2D,
    p_max: Point2D,
}

impl BoundingBox {
    /// Constructs the box spanning `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// Panics if a minimum is greater than the matching maximum.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        assert!(
            min_x <= max_x && min_y <= max_y,
            "Cannot create a BoundingBox with inverted extents.",
        );
        Self {
            p_min: Point2D::new(min_x, min_y),
            p_max: Point2D::new(max_x, max_y),
        }
    }

    /// Constructs the smallest box that contains every point of the slice.
    ///
    /// Panics if `points` is empty.
    pub fn from_points(points: &[Point2D]) -> Self {
        assert!(
            !points.is_empty(),
            "Cannot create a BoundingBox from an empty set of points.",
        );

        let (min_x, max_x) = extents(points.iter().map(|p| p.x));
        let (min_y, max_y) = extents(points.iter().map(|p| p.y));

        Self {
            p_min: Point2D::new(min_x, min_y),
            p_max: Point2D::new(max_x, max_y),
        }
    }

    pub fn p_min(&self) -> &Point2D {
        &self.p_min
    }

    pub fn p_max(&self) -> &Point2D {
        &self.p_max
    }

    /// Returns whether the given point is inside the box, within a small
    /// epsilon.
    pub fn contains(&self, point: &Point2D) -> bool {
        let eps = 10. * f64::EPSILON;
        self.p_min
            .iter()
            .zip(self.p_max.iter())
            .zip(point.iter())
            .all(|((min, max), coord)| *coord < *max + eps && *coord > *min - eps)
    }
}

fn extents(coords: impl Iterator<Item = f64>) -> (f64, f64) {
    use itertools::MinMaxResult::*;

    match coords.minmax() {
        MinMax(min, max) => (min, max),
        OneElement(only) => (only, only),
        NoElements => unreachable!(),
    }
}
