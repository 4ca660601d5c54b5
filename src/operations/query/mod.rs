mod point_index;
mod self_intersections;

pub use point_index::PointIndex;
pub use self_intersections::FindSelfIntersections;

use crate::math::Point3;

/// Parameters controlling self-intersection detection.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionParams {
    /// Maximum distance between two samples for them to count as touching.
    pub threshold: f64,
    /// Pairs whose indices differ by this much or less are curve neighbours,
    /// never crossings.
    pub adjacency_window: usize,
    /// Number of nearest samples examined around each sample, itself included.
    pub neighbors: usize,
}

impl Default for IntersectionParams {
    fn default() -> Self {
        Self {
            threshold: 0.001,
            adjacency_window: 5,
            neighbors: 10,
        }
    }
}

/// Two samples of a curve that lie close in space but far apart along the
/// curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionCandidate {
    /// Index of the querying sample.
    pub i: usize,
    /// Index of the nearby sample.
    pub j: usize,
    /// Position of sample `i`.
    pub point_i: Point3,
    /// Position of sample `j`.
    pub point_j: Point3,
}

impl IntersectionCandidate {
    /// Returns the distance between the two samples.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.point_j - self.point_i).norm()
    }

    /// Returns the number of samples between the two along the curve.
    #[must_use]
    pub fn index_gap(&self) -> usize {
        self.i.abs_diff(self.j)
    }
}
