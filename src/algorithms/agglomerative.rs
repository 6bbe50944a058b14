//! Bottom-up agglomerative hierarchical clustering with a pluggable linkage
//! criterion.
//!
//! Every input point starts out as its own leaf cluster; the two closest
//! clusters of the pool are merged into a binary node, over and over, until a
//! single tree remains.  "Closest" is decided by the linkage criterion,
//! single linkage by default.

use super::Error;
use crate::geometry::{distance, Point2D};
use rayon::prelude::*;

/// A cluster tree built by agglomerative merging.
///
/// A tree over `n` input points has exactly `n` leaves and `n - 1` inner
/// nodes.  Nodes are never mutated once built, only composed into larger
/// nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum ClusterTree {
    /// A single input point.
    Leaf(Point2D),

    /// Two sub-clusters merged into one.
    Node {
        left: Box<ClusterTree>,
        right: Box<ClusterTree>,
    },
}

impl ClusterTree {
    /// Points under this tree, leaves in left-to-right order.
    pub fn points(&self) -> Vec<Point2D> {
        fn collect(tree: &ClusterTree, out: &mut Vec<Point2D>) {
            match tree {
                ClusterTree::Leaf(point) => out.push(*point),
                ClusterTree::Node { left, right } => {
                    collect(left, out);
                    collect(right, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}

/// Linkage criterion: decides which pair of pool clusters to merge next.
pub trait Linkage {
    /// Returns the positions of the two clusters to merge; the first becomes
    /// the left child of the new node, the second the right child.
    ///
    /// Implementations must return two distinct positions within
    /// `0..pool.len()`, and are only called on pools of at least two
    /// clusters.
    fn merge_pair(&self, pool: &[ClusterTree]) -> (usize, usize);
}

/// Single linkage: the distance between two clusters is the minimum Euclidean
/// distance over all pairs of points drawn one from each cluster.
///
/// The scan is exhaustive over unordered pool pairs and their point pairs.
/// Ties keep the earliest pair in scan order (lowest left position, then
/// lowest right position).
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleLinkage;

impl Linkage for SingleLinkage {
    fn merge_pair(&self, pool: &[ClusterTree]) -> (usize, usize) {
        let cluster_points: Vec<Vec<Point2D>> = pool.iter().map(ClusterTree::points).collect();

        // Closest right-hand partner of the cluster at `first`, scanning in
        // order so ties keep the earliest pair.
        let closest_pair_from = |first: usize| {
            let mut nearest = (f64::INFINITY, first, first);
            for second in (first + 1)..pool.len() {
                for left_point in &cluster_points[first] {
                    for right_point in &cluster_points[second] {
                        let pair_distance = distance(left_point, right_point);
                        if pair_distance < nearest.0 {
                            nearest = (pair_distance, first, second);
                        }
                    }
                }
            }
            nearest
        };

        let (_, first, second) = (0..pool.len())
            .into_par_iter()
            .map(closest_pair_from)
            .reduce(
                || (f64::INFINITY, usize::MAX, usize::MAX),
                // Smaller distance wins; on equal distances the pair the
                // sequential scan reaches first, i.e. the lower left position.
                |nearest, candidate| {
                    if candidate.0 < nearest.0
                        || (candidate.0 == nearest.0 && candidate.1 < nearest.1)
                    {
                        candidate
                    } else {
                        nearest
                    }
                },
            );
        (first, second)
    }
}

/// Merges `points` into a single cluster tree using [`SingleLinkage`].
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), grappe::Error> {
/// use grappe::agglomerative_clustering;
/// use grappe::Point2D;
///
/// let points = vec![
///     Point2D::new(0., 0.),
///     Point2D::new(1., 0.),
///     Point2D::new(10., 0.),
/// ];
///
/// let root = agglomerative_clustering(points)?;
/// assert_eq!(root.points().len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn agglomerative_clustering(points: Vec<Point2D>) -> Result<ClusterTree, Error> {
    agglomerative_clustering_with(points, &SingleLinkage)
}

/// Merges `points` into a single cluster tree using a caller-supplied linkage
/// criterion.
///
/// A single input point yields a lone leaf without any merge.  Fails with
/// [`Error::EmptyInput`] when `points` is empty.
pub fn agglomerative_clustering_with<L>(
    points: Vec<Point2D>,
    linkage: &L,
) -> Result<ClusterTree, Error>
where
    L: Linkage,
{
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut pool: Vec<ClusterTree> = points.into_iter().map(ClusterTree::Leaf).collect();

    // Every merge shrinks the pool by exactly one, so a pool of n clusters
    // needs n - 1 steps; the ceiling only guards against linkage
    // implementations that break their contract.
    let max_steps = 2 * pool.len() + 10;
    for step in 0..max_steps {
        if pool.len() == 1 {
            break;
        }
        let (first, second) = linkage.merge_pair(&pool);
        assert_ne!(first, second, "Linkage returned the same position twice.");
        tracing::trace!(step, first, second, pool_size = pool.len(), "merge");

        // Remove the higher position first so the lower one does not shift.
        let (low, high) = if first < second {
            (first, second)
        } else {
            (second, first)
        };
        let high_cluster = pool.remove(high);
        let low_cluster = pool.remove(low);
        let (left, right) = if first < second {
            (low_cluster, high_cluster)
        } else {
            (high_cluster, low_cluster)
        };
        pool.push(ClusterTree::Node {
            left: Box::new(left),
            right: Box::new(right),
        });
    }

    Ok(pool.swap_remove(0))
}
