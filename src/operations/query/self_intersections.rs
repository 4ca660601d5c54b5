use tracing::{debug, warn};

use crate::math::{is_finite, Point3};

use super::{IntersectionCandidate, IntersectionParams, PointIndex};

/// Finds places where a densely sampled curve comes back onto itself.
///
/// Every sample is queried against a spatial index for its nearest
/// neighbours within the distance threshold. A neighbour is reported when it
/// is not at the exact same position and lies more than the adjacency window
/// away along the curve.
///
/// This flags near-coincident visits, not verified crossings of segments. A
/// crossing is reported from both sides, so `(i, j)` and `(j, i)` both
/// appear, and neighbouring samples around one crossing each produce their
/// own candidates.
///
/// Samples with a non-finite coordinate take no part in the search.
#[derive(Debug)]
pub struct FindSelfIntersections<'a> {
    curve: &'a [Point3],
    params: IntersectionParams,
}

impl<'a> FindSelfIntersections<'a> {
    /// Creates a new self-intersection search with default parameters.
    #[must_use]
    pub fn new(curve: &'a [Point3]) -> Self {
        Self {
            curve,
            params: IntersectionParams::default(),
        }
    }

    /// Overrides the search parameters.
    #[must_use]
    pub fn with_params(mut self, params: IntersectionParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the search, returning candidates in curve order of `i`.
    ///
    /// An empty result means no self-intersections were found.
    #[must_use]
    pub fn execute(&self) -> Vec<IntersectionCandidate> {
        let skipped = self.curve.iter().filter(|p| !is_finite(p)).count();
        if skipped > 0 {
            warn!(skipped, "ignoring samples with non-finite coordinates");
        }

        let index = PointIndex::new(self.curve);
        let mut candidates = Vec::new();

        for (i, point) in self.curve.iter().enumerate() {
            let neighbours =
                index.nearest_within(point, self.params.neighbors, self.params.threshold);

            for (j, distance) in neighbours {
                if distance > 0.0 && i.abs_diff(j) > self.params.adjacency_window {
                    candidates.push(IntersectionCandidate {
                        i,
                        j,
                        point_i: *point,
                        point_j: self.curve[j],
                    });
                }
            }
        }

        debug!(
            samples = self.curve.len(),
            candidates = candidates.len(),
            "self-intersection search complete"
        );
        candidates
    }
}
