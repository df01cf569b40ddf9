//! Uniform random position sampling strategy.
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Domain, Point};
use crate::sampling::{uniform_point, PositionSampling};

/// Uniform i.i.d. random sampling over a rectangular domain.
///
/// The white-noise reference the blue-noise samplers are compared against.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct UniformRandomSampling {
    /// Number of points to generate.
    pub count: usize,
    /// Floor each coordinate to a whole number (pixel positions).
    pub snap_to_pixels: bool,
}

impl UniformRandomSampling {
    /// Create a new uniform random sampler that generates `count` points.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            snap_to_pixels: false,
        }
    }

    /// Sets whether coordinates are floored to integers.
    pub fn with_snap_to_pixels(mut self, snap_to_pixels: bool) -> Self {
        self.snap_to_pixels = snap_to_pixels;
        self
    }
}

impl PositionSampling for UniformRandomSampling {
    fn generate(&self, domain: Domain, rng: &mut dyn RngCore) -> Result<Vec<Point>> {
        domain.validate()?;

        let mut out = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let p = uniform_point(&domain, rng);
            if self.snap_to_pixels {
                out.push(Point::new(p.x.floor(), p.y.floor()));
            } else {
                out.push(p);
            }
        }

        Ok(out)
    }
}
