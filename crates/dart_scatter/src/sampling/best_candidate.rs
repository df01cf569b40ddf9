//! Best-candidate (Mitchell's) position sampling strategy.
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geometry::{Domain, Point};
use crate::sampling::{uniform_point, PositionSampling};

/// Best-candidate (Mitchell's) sampling over a rectangular domain.
///
/// Brute force: every candidate is compared against every accepted point, so a run
/// costs `O(count^2 * sample_size)` distance evaluations.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BestCandidateSampling {
    /// Number of points to produce.
    pub count: usize,
    /// Uniform candidates drawn per point. Higher values give better blue noise at higher cost.
    pub sample_size: usize,
}

impl BestCandidateSampling {
    /// Create a new best-candidate sampler with a target `count` and `sample_size` trials per point.
    pub fn new(count: usize, sample_size: usize) -> Self {
        Self { count, sample_size }
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(Error::InvalidConfig("sample_size must be >= 1".into()));
        }
        Ok(())
    }
}

impl PositionSampling for BestCandidateSampling {
    fn generate(&self, domain: Domain, rng: &mut dyn RngCore) -> Result<Vec<Point>> {
        self.validate()?;
        domain.validate()?;

        let mut points: Vec<Point> = Vec::with_capacity(self.count);
        if self.count == 0 {
            return Ok(points);
        }

        points.push(uniform_point(&domain, rng));

        while points.len() < self.count {
            // Draw the candidates and keep the one farthest from the existing set
            let mut best = uniform_point(&domain, rng);
            let mut best_d2 = nearest_distance_squared(best, &points);

            for _ in 1..self.sample_size {
                let candidate = uniform_point(&domain, rng);
                let d2 = nearest_distance_squared(candidate, &points);
                if d2 > best_d2 {
                    best_d2 = d2;
                    best = candidate;
                }
            }

            points.push(best);
        }

        debug!(
            "Best candidate run finished | points: {} | samples per point: {}.",
            points.len(),
            self.sample_size
        );

        Ok(points)
    }
}

/// Run best-candidate sampling: exactly `count` points, `sample_size` candidates each.
pub fn best_candidate(
    count: usize,
    sample_size: usize,
    domain: Domain,
    rng: &mut dyn RngCore,
) -> Result<Vec<Point>> {
    BestCandidateSampling::new(count, sample_size).generate(domain, rng)
}

fn nearest_distance_squared(candidate: Point, points: &[Point]) -> f32 {
    points
        .iter()
        .map(|q| q.distance_squared(candidate))
        .fold(f32::INFINITY, f32::min)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn empty_for_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = best_candidate(0, 16, Domain::new(10.0, 10.0), &mut rng).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            best_candidate(10, 0, Domain::new(10.0, 10.0), &mut rng),
            Err(Error::InvalidConfig(_))
        ));
        assert!(best_candidate(10, 16, Domain::new(0.0, 10.0), &mut rng).is_err());
        assert!(best_candidate(10, 16, Domain::new(10.0, -5.0), &mut rng).is_err());
    }

    #[test]
    fn single_point_lands_in_domain() {
        let domain = Domain::new(640.0, 480.0);
        for seed in 0..10u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let points = best_candidate(1, 30, domain, &mut rng).unwrap();
            assert_eq!(points.len(), 1);
            assert!(domain.contains(points[0]));
        }
    }

    #[test]
    fn count_and_bounds_are_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        let domain = Domain::new(9.0, 5.0);
        let points = best_candidate(128, 16, domain, &mut rng).unwrap();
        assert_eq!(points.len(), 128);
        for p in points {
            assert!(p.x >= 0.0 && p.x < 9.0);
            assert!(p.y >= 0.0 && p.y < 5.0);
        }
    }

    #[test]
    fn more_samples_spread_points_further() {
        fn min_gap(points: &[Point]) -> f32 {
            let mut min = f32::MAX;
            for i in 0..points.len() {
                for j in (i + 1)..points.len() {
                    min = min.min(points[i].distance(points[j]));
                }
            }
            min
        }

        let domain = Domain::new(100.0, 100.0);
        let mut low = 0.0;
        let mut high = 0.0;
        for seed in 0..5u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            low += min_gap(&best_candidate(200, 1, domain, &mut rng).unwrap());
            let mut rng = StdRng::seed_from_u64(seed);
            high += min_gap(&best_candidate(200, 50, domain, &mut rng).unwrap());
        }
        assert!(high > low, "sample_size 50 gap {high} <= sample_size 1 gap {low}");
    }

    #[test]
    fn determinism_for_same_seed() {
        let s = BestCandidateSampling::new(64, 8);
        let domain = Domain::new(10.0, 10.0);

        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let pa = s.generate(domain, &mut rng_a).unwrap();
        let pb = s.generate(domain, &mut rng_b).unwrap();
        assert_eq!(pa, pb);

        let mut rng_c = StdRng::seed_from_u64(456);
        let pc = s.generate(domain, &mut rng_c).unwrap();
        assert_ne!(pa, pc);
    }
}
