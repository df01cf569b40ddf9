//! Uniform background grid used to answer "is anything closer than `r`?" in constant time.
//!
//! Cells are `r / sqrt(2)` wide, so a cell's diagonal equals the minimum distance and
//! no cell can ever hold two accepted points. A neighbour query only has to look at
//! the fixed [`NEIGHBOR_OFFSETS`] pattern around the candidate's own cell.
use std::f32::consts::SQRT_2;

use crate::error::{Error, Result};
use crate::geometry::{Domain, Point};
use crate::sampling::next_down;

/// Cells that can hold a point strictly closer than `r` to a point in the centre cell.
///
/// The 5x5 block around the centre minus its four corners. A corner cell is at least one
/// full cell away on both axes, i.e. about `cell_size * sqrt(2) = r`, so it can only
/// hold points at distance `>= r`. The centre cell is included.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 21] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, -1),
    (0, -2),
    (1, 0),
    (2, 0),
    (-1, 0),
    (-2, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Upper bound on grid cells (about 12 GiB of slots).
pub const MAX_CELLS: usize = 1 << 30;

/// Largest cell size whose diagonal, computed the way distances are compared,
/// stays strictly below `min_distance`.
fn cell_size_for(min_distance: f32) -> f32 {
    let limit = min_distance * min_distance;
    let mut cell_size = min_distance / SQRT_2;
    while cell_size * cell_size + cell_size * cell_size >= limit {
        cell_size = next_down(cell_size);
    }
    cell_size
}

/// Integer cell coordinate. May lie outside the grid for points outside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub col: isize,
    pub row: isize,
}

impl CellCoord {
    pub const fn new(col: isize, row: isize) -> Self {
        Self { col, row }
    }

    #[inline]
    pub fn offset(self, (dc, dr): (isize, isize)) -> Self {
        Self::new(self.col + dc, self.row + dr)
    }
}

/// Flat row-major arena of optional points, one slot per cell.
#[derive(Debug, Clone)]
pub struct CellGrid {
    domain: Domain,
    min_distance: f32,
    cell_size: f32,
    cols: usize,
    rows: usize,
    cells: Vec<Option<Point>>,
    len: usize,
}

impl CellGrid {
    /// Allocate an empty grid covering `domain` for the given minimum distance.
    pub fn new(domain: Domain, min_distance: f32) -> Result<Self> {
        domain.validate()?;
        if !min_distance.is_finite() || min_distance <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_distance must be finite and > 0".into(),
            ));
        }

        let cell_size = cell_size_for(min_distance);
        let cols = ((domain.width / cell_size).ceil() as usize).max(1);
        let rows = ((domain.height / cell_size).ceil() as usize).max(1);
        let too_large = || {
            Error::InvalidConfig(format!(
                "grid of {cols}x{rows} cells is too large; increase min_distance"
            ))
        };
        let cell_count = cols
            .checked_mul(rows)
            .filter(|&count| count <= MAX_CELLS)
            .ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(cell_count).map_err(|_| too_large())?;
        cells.resize(cell_count, None);

        Ok(Self {
            domain,
            min_distance,
            cell_size,
            cols,
            rows,
            cells,
            len: 0,
        })
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `floor(coord / cell_size)` per axis, without clamping.
    #[inline]
    pub fn cell_of(&self, point: Point) -> CellCoord {
        CellCoord::new(
            (point.x / self.cell_size).floor() as isize,
            (point.y / self.cell_size).floor() as isize,
        )
    }

    /// Cell a point is stored under. In-domain points that round onto the far
    /// edge are pulled back into the last column/row.
    #[inline]
    fn home_cell(&self, point: Point) -> CellCoord {
        let cell = self.cell_of(point);
        if !self.domain.contains(point) {
            return cell;
        }
        CellCoord::new(
            cell.col.clamp(0, self.cols as isize - 1),
            cell.row.clamp(0, self.rows as isize - 1),
        )
    }

    #[inline]
    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.col < 0 || cell.row < 0 {
            return None;
        }
        let (col, row) = (cell.col as usize, cell.row as usize);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Point stored in `cell`, or `None` when the cell is empty or out of range.
    pub fn get(&self, cell: CellCoord) -> Option<Point> {
        self.index(cell).and_then(|idx| self.cells[idx])
    }

    /// Store `point` in its cell.
    ///
    /// # Panics
    ///
    /// Panics if `point` lies outside the domain or its cell is already occupied.
    /// Either means the minimum-distance check was skipped or broken.
    pub fn insert(&mut self, point: Point) {
        assert!(
            self.domain.contains(point),
            "point {point:?} lies outside the grid domain {:?}",
            self.domain
        );
        let cell = self.home_cell(point);
        let idx = match self.index(cell) {
            Some(idx) => idx,
            None => panic!("cell ({}, {}) is outside the grid", cell.col, cell.row),
        };
        if let Some(existing) = self.cells[idx] {
            panic!(
                "grid cell ({}, {}) already holds {existing:?}; cannot insert {point:?}",
                cell.col, cell.row
            );
        }
        self.cells[idx] = Some(point);
        self.len += 1;
    }

    /// True iff a stored point lies strictly closer than `min_distance` to `candidate`.
    ///
    /// Only the [`NEIGHBOR_OFFSETS`] cells around the candidate are inspected, which is
    /// exhaustive as long as `min_distance` does not exceed the distance the grid was
    /// built for. A point at exactly `min_distance` does not count. A candidate whose
    /// own cell is already occupied always collides, since it could never be inserted.
    pub fn has_neighbor_within(&self, candidate: Point, min_distance: f32) -> bool {
        debug_assert!(
            min_distance <= self.min_distance,
            "query distance {min_distance} exceeds grid distance {}",
            self.min_distance
        );
        let limit = min_distance * min_distance;
        let home = self.home_cell(candidate);
        if self.get(home).is_some() {
            return true;
        }

        NEIGHBOR_OFFSETS.iter().any(|&offset| {
            self.get(home.offset(offset))
                .is_some_and(|existing| existing.distance_squared(candidate) < limit)
        })
    }

    /// Occupied cells in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }
}
