//! Grid coordinates and square-grid geometry.
//!
//! Every per-cell array in the workspace (terrain, belief, horizon) is a flat
//! row-major `Vec` of length `dim²`.  [`Grid`] owns the mapping between
//! [`Cell`] and flat index and is the single place where bounds are checked.

use std::fmt;

use crate::{HuntError, HuntResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// A `(row, col)` coordinate, 0-indexed.
///
/// `Ord` is row-major, which is also the tie-break order of every ranking
/// function.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Sum of absolute row and column differences.
    #[inline]
    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// One greedy orthogonal step toward `dest`.
    ///
    /// Closes the row gap first, then the column gap.  Returns `self` when
    /// already at `dest`.  Repeated application reaches `dest` in exactly
    /// `self.manhattan(dest)` steps and never leaves the bounding box of the
    /// two cells, so it stays on-grid whenever both endpoints are.
    pub fn step_toward(self, dest: Cell) -> Cell {
        use std::cmp::Ordering::*;
        match (self.row.cmp(&dest.row), self.col.cmp(&dest.col)) {
            (Less, _)        => Cell::new(self.row + 1, self.col),
            (Greater, _)     => Cell::new(self.row - 1, self.col),
            (Equal, Less)    => Cell::new(self.row, self.col + 1),
            (Equal, Greater) => Cell::new(self.row, self.col - 1),
            (Equal, Equal)   => self,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Cell {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Dimensions of a square `dim × dim` grid.
///
/// Cheap to copy; holds no cell data.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dim: usize,
}

impl Grid {
    /// A `dim × dim` grid.  `dim` must be at least 1.
    pub fn new(dim: usize) -> HuntResult<Self> {
        if dim == 0 {
            return Err(HuntError::InvalidConfig("grid dimension must be positive".into()));
        }
        Ok(Self { dim })
    }

    #[inline]
    pub fn dim(self) -> usize {
        self.dim
    }

    /// Number of cells (`dim²`).
    #[inline]
    pub fn len(self) -> usize {
        self.dim * self.dim
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row < self.dim && cell.col < self.dim
    }

    /// Return `cell` unchanged if it is on the grid, `OutOfBounds` otherwise.
    #[inline]
    pub fn check(self, cell: Cell) -> HuntResult<Cell> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(HuntError::OutOfBounds { cell, dim: self.dim })
        }
    }

    /// Row-major flat index.  The caller guarantees `cell` is in bounds.
    #[inline]
    pub fn index(self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "{cell} out of bounds for dim {}", self.dim);
        cell.row * self.dim + cell.col
    }

    /// Inverse of [`index`][Self::index].
    #[inline]
    pub fn cell_at(self, index: usize) -> Cell {
        Cell::new(index / self.dim, index % self.dim)
    }

    /// Every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.len()).map(move |i| self.cell_at(i))
    }

    /// Orthogonal neighbors of `cell`: up, down, left, right (those that exist).
    ///
    /// 2 at a corner, 3 on an edge, 4 in the interior; none when `dim == 1`.
    pub fn neighbors(self, cell: Cell) -> HuntResult<Vec<Cell>> {
        let Cell { row, col } = self.check(cell)?;
        let mut out = Vec::with_capacity(4);
        if row != 0 {
            out.push(Cell::new(row - 1, col));
        }
        if row + 1 != self.dim {
            out.push(Cell::new(row + 1, col));
        }
        if col != 0 {
            out.push(Cell::new(row, col - 1));
        }
        if col + 1 != self.dim {
            out.push(Cell::new(row, col + 1));
        }
        Ok(out)
    }

    /// In-bounds cells within Manhattan distance `radius` of `center`, in
    /// row-major order.  `center` itself is included.
    pub fn diamond(self, center: Cell, radius: usize) -> impl Iterator<Item = Cell> {
        let last = self.dim - 1;
        let rows = center.row.saturating_sub(radius)..=center.row.saturating_add(radius).min(last);
        rows.flat_map(move |row| {
            let reach = radius - row.abs_diff(center.row);
            let cols = center.col.saturating_sub(reach)..=center.col.saturating_add(reach).min(last);
            cols.map(move |col| Cell::new(row, col))
        })
    }
}
