//! Triangular lattice geometry.
//!
//! A board of `size` rows is laid out as a jagged triangle. For `size = 5`:
//!
//! ```text
//!         0
//!        1 2
//!       3 4 5
//!      6 7 8 9
//!    10 11 12 13 14
//! ```
//!
//! A coordinate `(row, col)` lies on the board iff `0 <= col <= row < size`.
//! Move generation probes many off-board coordinates, so lookups report
//! validity through [`Geometry::probe`] instead of failing.

use crate::constants::{DIRECTIONS, MAX_SIZE, Offset};

/// A hole on the board, as a flat row-major index.
pub type Hole = usize;

/// Number of holes on a triangular board with `size` rows.
#[inline]
pub fn triangle_num(size: usize) -> usize {
    size * (size + 1) / 2
}

/// Precomputed coordinate tables for one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    size: usize,
    /// Row and column of every hole, indexed by hole.
    coords: Vec<(usize, usize)>,
}

impl Geometry {
    /// Build the tables for a board with `size` rows.
    ///
    /// Panics if `size` exceeds [`MAX_SIZE`]; callers validate user input first.
    pub fn new(size: usize) -> Self {
        assert!(size <= MAX_SIZE, "board size {size} exceeds {MAX_SIZE}");
        let coords = (0..size)
            .flat_map(|row| (0..=row).map(move |col| (row, col)))
            .collect();
        Self { size, coords }
    }

    /// Number of rows.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of holes.
    #[inline]
    pub fn num_holes(&self) -> usize {
        self.coords.len()
    }

    /// Row and column of `hole`.
    #[inline]
    pub fn row_col(&self, hole: Hole) -> (usize, usize) {
        self.coords[hole]
    }

    /// Whether `(row, col)` lies on the board.
    #[inline]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        0 <= col && col <= row && row < self.size as isize
    }

    /// Hole at `(row, col)`. The coordinate must be on the board.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> Hole {
        assert!(
            col <= row && row < self.size,
            "({row}, {col}) is off a board of size {}",
            self.size
        );
        triangle_num(row) + col
    }

    /// Hole at `(row, col)`, or `None` when the coordinate is off the board.
    #[inline]
    pub fn probe(&self, row: isize, col: isize) -> Option<Hole> {
        self.contains(row, col)
            .then(|| self.index_of(row as usize, col as usize))
    }

    /// Hole reached from `hole` by stepping `offset`, if it exists.
    #[inline]
    pub fn step(&self, hole: Hole, offset: Offset) -> Option<Hole> {
        let (row, col) = self.row_col(hole);
        self.probe(row as isize + offset.0, col as isize + offset.1)
    }

    /// The six (adjacent, far) direction pairs.
    #[inline]
    pub fn directions(&self) -> &'static [(Offset, Offset); 6] {
        &DIRECTIONS
    }

    /// Hole halfway between `start` and `end`, if they are two apart on one lattice line.
    ///
    /// The midpoint of two holes on a line is the average of their coordinates.
    pub fn midpoint(&self, start: Hole, end: Hole) -> Option<Hole> {
        let (r1, c1) = self.row_col(start);
        let (r2, c2) = self.row_col(end);
        let dr = r2 as isize - r1 as isize;
        let dc = c2 as isize - c1 as isize;
        DIRECTIONS
            .iter()
            .any(|&(_, far)| far == (dr, dc))
            .then(|| self.index_of((r1 + r2) / 2, (c1 + c2) / 2))
    }
}
