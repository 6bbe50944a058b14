//! An implementation of Lloyd's iterative k-means partitioning: points are
//! repeatedly assigned to their nearest center and centers recomputed as the
//! mean of their members, until the assignment reaches a fixed point.

use super::Error;
use crate::geometry::{self, distance, BoundingBox, Point2D};
use rayon::prelude::*;

/// Number of steps after which [`KMeans::cluster_all_steps`] gives up on
/// reaching a fixed point.
const MAX_STEPS: usize = 100_000;

/// Diagnostics for a full k-means run.
#[derive(Clone, Copy, Debug, Default)]
pub struct Metadata {
    /// Number of steps performed.
    pub steps: usize,

    /// Whether the assignment reached a fixed point before the step ceiling.
    pub converged: bool,

    /// Total loss of the final assignment.
    pub loss: f64,
}

/// # K-means clustering engine
///
/// Holds a set of input points together with `cluster_count` centers, and
/// refines the point-to-center assignment step by step.  A step assigns every
/// point to its nearest center (ties go to the lowest center index), then
/// moves each center to the mean position of its members.  A center whose
/// cluster came out empty keeps its previous position.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), grappe::Error> {
/// use grappe::KMeans;
/// use grappe::Point2D;
///
/// let points = vec![
///     Point2D::new(0., 0.),
///     Point2D::new(0., 1.),
///     Point2D::new(10., 0.),
///     Point2D::new(10., 1.),
/// ];
/// let centers = vec![Point2D::new(0., 0.), Point2D::new(10., 0.)];
///
/// let mut k_means = KMeans::with_centers(points, 2, centers)?;
/// let metadata = k_means.cluster_all_steps();
///
/// assert!(metadata.converged);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct KMeans {
    points: Vec<Point2D>,
    centers: Vec<Point2D>,

    /// Per-cluster member indices into `points`, in encounter order.  The
    /// buckets partition `0..points.len()` after every assignment phase.
    clusters: Vec<Vec<usize>>,
}

impl KMeans {
    /// Creates an engine with `cluster_count` centers drawn uniformly at
    /// random inside `domain`.
    pub fn new<R>(
        points: Vec<Point2D>,
        cluster_count: usize,
        domain: &BoundingBox,
        rng: &mut R,
    ) -> Result<Self, Error>
    where
        R: rand::Rng,
    {
        check_input(&points, cluster_count)?;
        let centers = crate::generator::uniform(cluster_count, domain, rng);
        Ok(Self {
            points,
            centers,
            clusters: vec![Vec::new(); cluster_count],
        })
    }

    /// Creates an engine starting from caller-supplied centers.
    ///
    /// Fails with [`Error::InputLenMismatch`] when the number of centers does
    /// not match `cluster_count`.
    pub fn with_centers(
        points: Vec<Point2D>,
        cluster_count: usize,
        centers: Vec<Point2D>,
    ) -> Result<Self, Error> {
        check_input(&points, cluster_count)?;
        if centers.len() != cluster_count {
            return Err(Error::InputLenMismatch {
                expected: cluster_count,
                actual: centers.len(),
            });
        }
        Ok(Self {
            points,
            centers,
            clusters: vec![Vec::new(); cluster_count],
        })
    }

    /// Runs one assignment phase followed by one update phase.
    pub fn cluster_step(&mut self) {
        self.assign_to_nearest_center();
        self.update_centers();
    }

    /// Repeats [`cluster_step`][Self::cluster_step] until the assignment no
    /// longer changes between two consecutive steps, capped at a fixed step
    /// ceiling.  Hitting the ceiling is not an error; it is reported through
    /// the `converged` flag of the returned [`Metadata`].
    pub fn cluster_all_steps(&mut self) -> Metadata {
        let mut steps = 0;
        let mut converged = false;
        while steps < MAX_STEPS {
            let previous = self.clusters.clone();
            self.cluster_step();
            steps += 1;
            if previous == self.clusters {
                converged = true;
                break;
            }
        }
        let loss = self.total_loss();
        tracing::info!(steps, converged, loss, "k-means done");
        Metadata {
            steps,
            converged,
            loss,
        }
    }

    /// Sum over all clusters of the Euclidean distances from each member
    /// point to its cluster's center.
    pub fn total_loss(&self) -> f64 {
        self.clusters
            .par_iter()
            .zip(&self.centers)
            .map(|(cluster, center)| {
                cluster
                    .iter()
                    .map(|point_id| distance(&self.points[*point_id], center))
                    .sum::<f64>()
            })
            .sum()
    }

    /// Current cluster membership, flattened.  Each point is labeled with the
    /// index of the cluster it belongs to.
    pub fn clusters(&self) -> Vec<(Point2D, String)> {
        self.clusters
            .iter()
            .zip(0..)
            .flat_map(|(cluster, cluster_id)| {
                cluster
                    .iter()
                    .map(move |point_id| (self.points[*point_id], cluster_id.to_string()))
            })
            .collect()
    }

    /// Current centers, each labeled with its own index.
    pub fn cluster_centers(&self) -> Vec<(Point2D, String)> {
        self.centers
            .iter()
            .zip(0..)
            .map(|(center, center_id)| (*center, center_id.to_string()))
            .collect()
    }

    /// Per-cluster member indices into the input points.
    pub fn assignments(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    /// Current center positions.
    pub fn centers(&self) -> &[Point2D] {
        &self.centers
    }

    fn assign_to_nearest_center(&mut self) {
        let centers = &self.centers;
        let nearest: Vec<usize> = self
            .points
            .par_iter()
            .map(|point| nearest_center(point, centers))
            .collect();

        for bucket in &mut self.clusters {
            bucket.clear();
        }
        for (point_id, center_id) in nearest.into_iter().enumerate() {
            self.clusters[center_id].push(point_id);
        }
    }

    fn update_centers(&mut self) {
        for (center, cluster) in self.centers.iter_mut().zip(&self.clusters) {
            // An empty cluster keeps its previous center.
            if cluster.is_empty() {
                continue;
            }
            let members: Vec<Point2D> = cluster
                .iter()
                .map(|point_id| self.points[*point_id])
                .collect();
            *center = geometry::center(&members);
        }
    }
}

fn check_input(points: &[Point2D], cluster_count: usize) -> Result<(), Error> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }
    if cluster_count == 0 {
        return Err(Error::ZeroClusters);
    }
    Ok(())
}

/// Index of the center closest to `point`.  Ties keep the lowest index.
fn nearest_center(point: &Point2D, centers: &[Point2D]) -> usize {
    let mut nearest = 0;
    let mut nearest_distance = f64::INFINITY;
    for (center_id, center) in centers.iter().enumerate() {
        let distance_to_center = distance(point, center);
        if distance_to_center < nearest_distance {
            nearest_distance = distance_to_center;
            nearest = center_id;
        }
    }
    nearest
}
