//! Random point generation, to seed test inputs and initial cluster centers.
//!
//! Every sampler takes its random source as a parameter so callers can seed
//! it and reproduce runs exactly.

use crate::geometry::{BoundingBox, Point2D};
use rand::Rng;
use rand_distr::Distribution as _;
use rand_distr::Normal;
use std::f64::consts::TAU;

pub use rand_distr::NormalError;

/// `n` points drawn uniformly at random inside `domain`.
pub fn uniform<R>(n: usize, domain: &BoundingBox, rng: &mut R) -> Vec<Point2D>
where
    R: Rng,
{
    let p_min = domain.p_min();
    let p_max = domain.p_max();
    (0..n)
        .map(|_| {
            Point2D::new(
                rng.gen_range(p_min.x..=p_max.x),
                rng.gen_range(p_min.y..=p_max.y),
            )
        })
        .collect()
}

/// `n` points normally distributed around `center`, with a separate standard
/// deviation per axis.
pub fn normal<R>(
    n: usize,
    center: Point2D,
    std_dev_x: f64,
    std_dev_y: f64,
    rng: &mut R,
) -> Result<Vec<Point2D>, NormalError>
where
    R: Rng,
{
    let x_distribution = Normal::new(center.x, std_dev_x)?;
    let y_distribution = Normal::new(center.y, std_dev_y)?;
    Ok((0..n)
        .map(|_| Point2D::new(x_distribution.sample(rng), y_distribution.sample(rng)))
        .collect())
}

/// `n` points spread along the circle of the given `radius` around `center`:
/// angles are uniform, radii normally distributed around `radius`.
pub fn normal_ring<R>(
    n: usize,
    center: Point2D,
    radius: f64,
    radius_std_dev: f64,
    rng: &mut R,
) -> Result<Vec<Point2D>, NormalError>
where
    R: Rng,
{
    let radius_distribution = Normal::new(radius, radius_std_dev)?;
    Ok((0..n)
        .map(|_| {
            let sampled_radius = radius_distribution.sample(rng);
            let angle = rng.gen_range(0.0..TAU);
            center + Point2D::new(angle.sin() * sampled_radius, angle.cos() * sampled_radius)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance;
    use rand::SeedableRng as _;

    #[test]
    fn uniform_points_land_in_the_domain() {
        let domain = BoundingBox::new(-3., 4., 10., 11.);
        let mut rng = rand_pcg::Pcg64::seed_from_u64(1);

        let points = uniform(500, &domain, &mut rng);

        assert_eq!(points.len(), 500);
        for point in &points {
            assert!(domain.contains(point));
        }
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let domain = BoundingBox::new(0., 1., 0., 1.);
        let mut first_rng = rand_pcg::Pcg64::seed_from_u64(42);
        let mut second_rng = rand_pcg::Pcg64::seed_from_u64(42);

        assert_eq!(
            uniform(100, &domain, &mut first_rng),
            uniform(100, &domain, &mut second_rng),
        );
    }

    #[test]
    fn normal_points_spread_around_the_center() {
        let center = Point2D::new(5., -2.);
        let mut rng = rand_pcg::Pcg64::seed_from_u64(7);

        let points = normal(1000, center, 1., 1., &mut rng).unwrap();

        let mean = points.iter().sum::<Point2D>() / points.len() as f64;
        assert!(distance(&mean, &center) < 0.5);
    }

    #[test]
    fn negative_deviation_is_rejected() {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(0);

        assert!(normal(10, Point2D::new(0., 0.), -1., 1., &mut rng).is_err());
    }

    #[test]
    fn ring_points_stay_near_the_target_radius() {
        let center = Point2D::new(1., 1.);
        let mut rng = rand_pcg::Pcg64::seed_from_u64(3);

        let points = normal_ring(200, center, 5., 0.1, &mut rng).unwrap();

        for point in &points {
            let radius = distance(point, &center);
            assert!((radius - 5.).abs() < 1.);
        }
    }

    #[test]
    fn zero_points_requested() {
        let domain = BoundingBox::new(0., 1., 0., 1.);
        let mut rng = rand_pcg::Pcg64::seed_from_u64(0);

        assert!(uniform(0, &domain, &mut rng).is_empty());
    }
}
