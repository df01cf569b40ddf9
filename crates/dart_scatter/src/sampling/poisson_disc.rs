//! Poisson-disc (blue-noise) position sampling strategy.
//!
//! Dart throwing with an active frontier: a random active point spawns up to
//! `max_attempts` candidates in the annulus `[r, 2r)` around it, the first candidate
//! with no neighbour closer than `r` is accepted, and a point whose attempts all fail
//! is retired into the output. The run ends when the frontier is empty.
use std::f32::consts::TAU;

use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::geometry::{Domain, Point};
use crate::sampling::grid::CellGrid;
use crate::sampling::{rand01, uniform_point, PositionSampling};

/// Candidates tried around an active point before it is retired.
pub const DEFAULT_MAX_ATTEMPTS: usize = 30;

/// Poisson-disc sampling strategy.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PoissonDiscSampling {
    /// Minimum distance between samples in domain units.
    pub min_distance: f32,
    /// Candidates generated around an active point before it is retired.
    pub max_attempts: usize,
}

impl PoissonDiscSampling {
    /// Create a new strategy with the given minimum distance and [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the per-point attempt budget.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_distance must be finite and > 0".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be >= 1".into()));
        }
        Ok(())
    }

    /// Prepare a single run over `domain`.
    pub fn sampler(&self, domain: Domain) -> Result<PoissonDiscSampler> {
        PoissonDiscSampler::new(self.clone(), domain)
    }
}

impl PositionSampling for PoissonDiscSampling {
    fn generate(&self, domain: Domain, rng: &mut dyn RngCore) -> Result<Vec<Point>> {
        Ok(self.sampler(domain)?.run(rng).points)
    }
}

/// Run Poisson-disc sampling over `domain` and return the retired points.
pub fn poisson_disc(
    min_distance: f32,
    max_attempts: usize,
    domain: Domain,
    rng: &mut dyn RngCore,
) -> Result<Vec<Point>> {
    PoissonDiscSampling::new(min_distance)
        .with_max_attempts(max_attempts)
        .generate(domain, rng)
}

/// Outcome of one sampling run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct PoissonDiscRun {
    /// Points in the order they were retired from the frontier.
    pub points: Vec<Point>,
    /// Candidates drawn around active points.
    pub candidates_generated: usize,
    /// Candidates that fell outside the domain.
    pub rejected_outside: usize,
    /// Candidates that had a neighbour closer than the minimum distance.
    pub rejected_too_close: usize,
    /// True when the run was stopped before the frontier drained.
    pub cancelled: bool,
}

impl PoissonDiscRun {
    /// Candidates that were accepted, excluding the initial seed point.
    pub fn candidates_accepted(&self) -> usize {
        self.candidates_generated - self.rejected_outside - self.rejected_too_close
    }
}

/// State of a single run: the grid index and the active frontier.
///
/// Consumed by [`PoissonDiscSampler::run`], so every run starts from a fresh grid.
#[derive(Debug)]
pub struct PoissonDiscSampler {
    config: PoissonDiscSampling,
    domain: Domain,
    grid: CellGrid,
    frontier: Vec<Point>,
}

impl PoissonDiscSampler {
    /// Validate `config` and `domain`, then allocate the grid.
    pub fn new(config: PoissonDiscSampling, domain: Domain) -> Result<Self> {
        config.validate()?;
        domain.validate()?;
        let grid = CellGrid::new(domain, config.min_distance)?;

        Ok(Self {
            config,
            domain,
            grid,
            frontier: Vec::new(),
        })
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Run until the frontier is empty.
    pub fn run(self, rng: &mut dyn RngCore) -> PoissonDiscRun {
        self.run_until(rng, || false)
    }

    /// Run until the frontier is empty or `should_stop` returns true.
    ///
    /// `should_stop` is polled once per frontier iteration. A stopped run still holds
    /// a valid point set: every retired point respects the minimum distance.
    pub fn run_until(
        mut self,
        rng: &mut dyn RngCore,
        mut should_stop: impl FnMut() -> bool,
    ) -> PoissonDiscRun {
        let mut report = PoissonDiscRun::default();

        debug!(
            "Poisson disc run: r = {} | k = {} | grid {}x{} (cell {:.4}).",
            self.config.min_distance,
            self.config.max_attempts,
            self.grid.cols(),
            self.grid.rows(),
            self.grid.cell_size(),
        );

        let seed = uniform_point(&self.domain, rng);
        self.grid.insert(seed);
        self.frontier.push(seed);

        while !self.frontier.is_empty() {
            if should_stop() {
                report.cancelled = true;
                warn!(
                    "Poisson disc run cancelled with {} active points remaining.",
                    self.frontier.len()
                );
                break;
            }

            let idx = pick_index(self.frontier.len(), rng);
            let current = self.frontier[idx];

            match self.spawn_around(current, rng, &mut report) {
                Some(accepted) => {
                    self.grid.insert(accepted);
                    self.frontier.push(accepted);
                }
                None => {
                    self.frontier.swap_remove(idx);
                    report.points.push(current);
                }
            }
        }

        info!(
            "Poisson disc run finished | points: {} | candidates: {} | outside: {} | too close: {}.",
            report.points.len(),
            report.candidates_generated,
            report.rejected_outside,
            report.rejected_too_close,
        );

        report
    }

    /// First valid candidate in the annulus around `center`, if any of the attempts succeed.
    fn spawn_around(
        &self,
        center: Point,
        rng: &mut dyn RngCore,
        report: &mut PoissonDiscRun,
    ) -> Option<Point> {
        let r = self.config.min_distance;

        for _ in 0..self.config.max_attempts {
            let angle = rand01(rng) * TAU;
            let radius = r + rand01(rng) * r;
            let candidate = Point::new(
                center.x + angle.cos() * radius,
                center.y + angle.sin() * radius,
            );
            report.candidates_generated += 1;

            if !self.domain.contains(candidate) {
                report.rejected_outside += 1;
                continue;
            }
            if self.grid.has_neighbor_within(candidate, r) {
                report.rejected_too_close += 1;
                continue;
            }
            return Some(candidate);
        }

        None
    }
}

/// Uniform index into a non-empty collection of `len` items.
///
/// Drawn from a full 64-bit word so every index stays reachable however large the
/// frontier grows; the modulo bias is below `len / 2^64`.
#[inline]
fn pick_index(len: usize, rng: &mut dyn RngCore) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}
