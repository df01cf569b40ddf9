#![forbid(unsafe_code)]
//! dart_scatter: blue-noise point sets for stippling, dithering and procedural placement.
//!
//! Modules:
//! - geometry: points, distances and the rectangular sampling domain
//! - sampling: Poisson-disc dart throwing over a uniform grid index, Mitchell's
//!   best-candidate baseline, and uniform random points
//!
//! Samplers only produce coordinates; drawing them is left to the caller.
pub mod error;
pub mod geometry;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use dart_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{distance, Domain, Point};
    pub use crate::sampling::{
        best_candidate, poisson_disc, BestCandidateSampling, CellGrid, PoissonDiscRun,
        PoissonDiscSampler, PoissonDiscSampling, PositionSampling, UniformRandomSampling,
    };
}
