//! Board limits and search defaults.
//!
//! Holes are numbered row-major from the apex: row `r` holds `r + 1` holes,
//! so a board of `size` rows has `size * (size + 1) / 2` holes.

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest supported board (rows). 15 rows gives 120 holes.
pub const MAX_SIZE: usize = 15;

/// Row/column step on the triangular lattice.
pub type Offset = (isize, isize);

/// The six jump directions as (adjacent, far) offsets.
///
/// Order matters: legal moves are listed by destination hole and then by
/// the index into this table, which keeps every search reproducible.
pub const DIRECTIONS: [(Offset, Offset); 6] = [
    ((-1, -1), (-2, -2)), // up-left
    ((-1, 0), (-2, 0)),   // up-right
    ((0, -1), (0, -2)),   // left
    ((0, 1), (0, 2)),     // right
    ((1, 0), (2, 0)),     // down-left
    ((1, 1), (2, 2)),     // down-right
];

// =============================================================================
// Search Parameters
// =============================================================================

/// Bound value before any terminal board has been recorded.
pub const NO_BOUND: usize = usize::MAX;

/// Fewest pegs a non-empty board can ever be reduced to.
pub const PEG_FLOOR: usize = 1;
