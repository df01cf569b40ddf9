//! Sampling strategies for generating point sets in a 2D domain.
//!
//! Every strategy implements [`PositionSampling`] and draws its randomness from an
//! explicitly passed [`RngCore`], so runs are reproducible with a seeded generator.
use rand::RngCore;

use crate::error::Result;
use crate::geometry::{Domain, Point};

pub mod best_candidate;
pub mod grid;
pub mod poisson_disc;
pub mod uniform_random;

pub use best_candidate::{best_candidate, BestCandidateSampling};
pub use grid::{CellCoord, CellGrid, NEIGHBOR_OFFSETS};
pub use poisson_disc::{
    poisson_disc, PoissonDiscRun, PoissonDiscSampler, PoissonDiscSampling, DEFAULT_MAX_ATTEMPTS,
};
pub use uniform_random::UniformRandomSampling;

/// Trait for position sampling.
pub trait PositionSampling: Send + Sync {
    /// Produce a point set inside `domain`.
    ///
    /// Returns [`crate::error::Error::InvalidConfig`] before doing any work when the
    /// strategy parameters or the domain are unusable.
    fn generate(&self, domain: Domain, rng: &mut dyn RngCore) -> Result<Vec<Point>>;
}

const UNIT_24: f32 = 1.0 / (1u32 << 24) as f32;

/// Generate a random float in the range [0, 1).
///
/// Uses the top 24 bits of one `u32` draw so the result is exactly representable
/// and never rounds up to 1.0.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * UNIT_24
}

/// Compute the next smaller representable float value.
///
/// Returns a value that is strictly less than the input, useful for
/// ensuring bounds are strictly inside a domain.
#[inline]
pub(crate) fn next_down(val: f32) -> f32 {
    if val.is_nan() {
        return f32::NAN;
    }

    if val == f32::NEG_INFINITY {
        return f32::NEG_INFINITY;
    }

    if val == f32::INFINITY {
        return f32::MAX;
    }

    if val == 0.0 {
        return -f32::MIN_POSITIVE;
    }

    let bits = val.to_bits();
    if val > 0.0 {
        f32::from_bits(bits.saturating_sub(1))
    } else {
        f32::from_bits(bits.saturating_add(1))
    }
}

/// Draw one point uniformly from `domain`, kept strictly inside the right/top edges.
pub(crate) fn uniform_point(domain: &Domain, rng: &mut dyn RngCore) -> Point {
    let x = (rand01(rng) * domain.width).clamp(0.0, next_down(domain.width));
    let y = (rand01(rng) * domain.height).clamp(0.0, next_down(domain.height));
    Point::new(x, y)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Returns the same word forever; pins `rand01` to a known value.
    pub(crate) struct FixedRng {
        pub value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one_for_max_input() {
        let mut rng = FixedRng { value: u32::MAX };
        let result = rand01(&mut rng);
        assert!(result < 1.0);
        assert_eq!(result, 1.0 - UNIT_24);
    }

    #[test]
    fn rand01_values_in_range() {
        let test_values = [0, 1, 255, 256, 100_000, u32::MAX / 2, u32::MAX - 1, u32::MAX];

        for value in test_values {
            let mut rng = FixedRng { value };
            let result = rand01(&mut rng);
            assert!(
                (0.0..1.0).contains(&result),
                "rand01({}) = {} is out of range [0,1)",
                value,
                result
            );
        }
    }

    #[test]
    fn rand01_midpoint_is_half() {
        let mut rng = FixedRng {
            value: 1u32 << 31,
        };
        assert_eq!(rand01(&mut rng), 0.5);
    }

    #[test]
    fn next_down_handles_edge_cases() {
        assert!(next_down(1.0) < 1.0);
        assert!(next_down(0.5) < 0.5);

        let down_min_pos = next_down(f32::MIN_POSITIVE);
        assert!(down_min_pos >= 0.0);
        assert!(down_min_pos < f32::MIN_POSITIVE);

        assert_eq!(next_down(0.0), -f32::MIN_POSITIVE);
        assert!(next_down(-1.0) < -1.0);

        assert_eq!(next_down(f32::INFINITY), f32::MAX);
        assert_eq!(next_down(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(next_down(f32::NAN).is_nan());
    }

    #[test]
    fn uniform_point_stays_inside_domain_at_extremes() {
        let domain = Domain::new(3.0, 7.0);
        for value in [0, u32::MAX] {
            let mut rng = FixedRng { value };
            let p = uniform_point(&domain, &mut rng);
            assert!(domain.contains(p), "{p:?} escaped {domain:?}");
        }
    }
}
