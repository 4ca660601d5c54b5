use rstar::primitives::GeomWithData;
use rstar::RTree;

use crate::math::{is_finite, Point3};

/// A sample position tagged with its index in the source sequence.
type IndexedPoint = GeomWithData<[f64; 3], usize>;

/// Spatial index over an ordered point sequence, answering bounded
/// nearest-neighbour queries by sample index.
pub struct PointIndex {
    tree: RTree<IndexedPoint>,
}

impl PointIndex {
    /// Builds an index over `points`.
    ///
    /// Points with a non-finite coordinate are left out; they are never
    /// returned as neighbours.
    #[must_use]
    pub fn new(points: &[Point3]) -> Self {
        let indexed: Vec<IndexedPoint> = points
            .iter()
            .enumerate()
            .filter(|(_, p)| is_finite(p))
            .map(|(i, p)| IndexedPoint::new([p.x, p.y, p.z], i))
            .collect();

        Self {
            tree: RTree::bulk_load(indexed),
        }
    }

    /// Number of indexed points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Check if the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Finds up to `k` nearest points to `query` within `max_distance`.
    ///
    /// Returns `(index, distance)` pairs sorted by increasing distance. A
    /// point at the query position itself is included at distance zero. A
    /// non-finite query has no neighbours.
    #[must_use]
    pub fn nearest_within(&self, query: &Point3, k: usize, max_distance: f64) -> Vec<(usize, f64)> {
        if !is_finite(query) {
            return Vec::new();
        }
        let max_dist_sq = max_distance * max_distance;

        self.tree
            .nearest_neighbor_iter_with_distance_2(&[query.x, query.y, query.z])
            .take(k)
            .take_while(|(_, dist_sq)| *dist_sq <= max_dist_sq)
            .map(|(item, dist_sq)| (item.data, dist_sq.sqrt()))
            .collect()
    }
}

impl std::fmt::Debug for PointIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointIndex")
            .field("size", &self.tree.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_points(n: u32, spacing: f64) -> Vec<Point3> {
        (0..n)
            .map(|i| Point3::new(f64::from(i) * spacing, 0.0, 0.0))
            .collect()
    }

    #[test]
    fn size_matches_input() {
        let index = PointIndex::new(&line_points(7, 1.0));
        assert_eq!(index.len(), 7);
        assert!(!index.is_empty());
        assert!(PointIndex::new(&[]).is_empty());
    }

    #[test]
    fn nearest_are_sorted_and_include_self() {
        let pts = line_points(10, 1.0);
        let index = PointIndex::new(&pts);
        let hits = index.nearest_within(&pts[4], 3, 10.0);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0], (4, 0.0));
        assert!(hits[1].1 <= hits[2].1);
        let mut others = vec![hits[1].0, hits[2].0];
        others.sort_unstable();
        assert_eq!(others, vec![3, 5]);
    }

    #[test]
    fn distance_bound_limits_results() {
        let pts = line_points(10, 1.0);
        let index = PointIndex::new(&pts);
        let hits = index.nearest_within(&pts[0], 10, 2.5);
        let found: Vec<usize> = hits.iter().map(|&(i, _)| i).collect();
        assert_eq!(found, vec![0, 1, 2]);
    }

    #[test]
    fn bound_is_inclusive() {
        let pts = line_points(3, 0.5);
        let index = PointIndex::new(&pts);
        assert_eq!(index.nearest_within(&pts[0], 10, 0.5).len(), 2);
    }

    #[test]
    fn non_finite_points_are_left_out() {
        let mut pts = line_points(6, 1.0);
        pts[2] = Point3::new(f64::NAN, 0.0, 0.0);
        pts[4] = Point3::new(2.0, f64::INFINITY, 0.0);
        let index = PointIndex::new(&pts);
        assert_eq!(index.len(), 4);

        let found: Vec<usize> = index
            .nearest_within(&pts[3], 10, 1.5)
            .iter()
            .map(|&(i, _)| i)
            .collect();
        assert_eq!(found, vec![3]);
        assert!(index.nearest_within(&pts[2], 10, 100.0).is_empty());
        assert!(index.nearest_within(&pts[4], 10, 100.0).is_empty());
    }

    #[test]
    fn planar_points_share_an_axis() {
        // Every point has z = 0 and many share x, which must not trip the index.
        let pts: Vec<Point3> = (0..200)
            .map(|i| Point3::new(0.0, f64::from(i % 10), f64::from(i / 10)))
            .collect();
        let index = PointIndex::new(&pts);
        let hits = index.nearest_within(&Point3::new(0.0, 5.0, 5.0), 5, 1.0);
        assert_eq!(hits.len(), 5);
        assert_eq!(hits[0], (55, 0.0));
    }
}
