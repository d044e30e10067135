//! Board state and jump moves.
//!
//! A [`Board`] is an immutable snapshot: applying a move always produces a new
//! board, leaving the original untouched. Legal moves are computed eagerly on
//! construction so the search can test for terminal states without extra work.

use std::fmt;
use std::sync::Arc;

use crate::constants::PEG_FLOOR;
use crate::geometry::{Geometry, Hole};

/// A jump: the peg at `start` leaps over `middle` and lands in `end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Hole,
    pub middle: Hole,
    pub end: Hole,
}

impl Move {
    /// Build the move from `start` to `end`, deriving the jumped hole.
    ///
    /// Returns `None` if the holes are not two apart on a lattice line.
    pub fn between(geometry: &Geometry, start: Hole, end: Hole) -> Option<Self> {
        geometry
            .midpoint(start, end)
            .map(|middle| Move { start, middle, end })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} (over {})", self.start, self.end, self.middle)
    }
}

/// One state of a triangular peg-solitaire board.
#[derive(Clone, Debug)]
pub struct Board {
    geometry: Arc<Geometry>,
    /// `true` where a peg stands.
    holes: Vec<bool>,
    /// Cached count of `true` entries in `holes`.
    pegs: usize,
    /// Legal moves, by destination hole and then direction.
    moves: Vec<Move>,
    /// Moves applied since the root board.
    history: Vec<Move>,
}

impl Board {
    /// Create a root board of `size` rows with the given holes empty.
    pub fn root(size: usize, empty: &[Hole]) -> Self {
        Self::with_geometry(Arc::new(Geometry::new(size)), empty)
    }

    /// Create a root board on shared geometry with the given holes empty.
    pub fn with_geometry(geometry: Arc<Geometry>, empty: &[Hole]) -> Self {
        let mut holes = vec![true; geometry.num_holes()];
        for &hole in empty {
            assert!(hole < holes.len(), "hole {hole} is off the board");
            holes[hole] = false;
        }
        Self::from_parts(geometry, holes, Vec::new())
    }

    fn from_parts(geometry: Arc<Geometry>, holes: Vec<bool>, history: Vec<Move>) -> Self {
        let pegs = holes.iter().filter(|&&h| h).count();
        let mut board = Board {
            geometry,
            holes,
            pegs,
            moves: Vec::new(),
            history,
        };
        board.moves = board.legal_moves();
        board
    }

    /// Enumerate every jump that lands in an empty hole.
    ///
    /// Working backwards from each empty hole `e`, a move exists along a
    /// direction when the adjacent hole and the hole beyond it both hold pegs.
    fn legal_moves(&self) -> Vec<Move> {
        let g = &*self.geometry;
        let mut moves = Vec::new();
        for end in (0..self.holes.len()).filter(|&h| !self.holes[h]) {
            for &(adjacent, far) in g.directions() {
                let (Some(middle), Some(start)) = (g.step(end, adjacent), g.step(end, far)) else {
                    continue;
                };
                if self.holes[middle] && self.holes[start] {
                    moves.push(Move { start, middle, end });
                }
            }
        }
        moves
    }

    /// Geometry shared by this board and all its descendants.
    #[inline]
    pub fn geometry(&self) -> &Arc<Geometry> {
        &self.geometry
    }

    /// Number of rows.
    #[inline]
    pub fn size(&self) -> usize {
        self.geometry.size()
    }

    /// Number of pegs left on the board.
    #[inline]
    pub fn pegs(&self) -> usize {
        self.pegs
    }

    /// Fewest pegs any descendant of this board could end with.
    #[inline]
    pub fn peg_floor(&self) -> usize {
        self.pegs.min(PEG_FLOOR)
    }

    /// Whether a peg stands in `hole`.
    #[inline]
    pub fn has_peg(&self, hole: Hole) -> bool {
        self.holes[hole]
    }

    /// Peg occupancy of every hole.
    #[inline]
    pub fn occupancy(&self) -> &[bool] {
        &self.holes
    }

    /// Holes without a peg, in ascending order.
    pub fn empty_holes(&self) -> impl Iterator<Item = Hole> + '_ {
        (0..self.holes.len()).filter(|&h| !self.holes[h])
    }

    /// Legal moves from this board.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Moves applied since the root board.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// A board is terminal when no move is possible.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.moves.is_empty()
    }

    /// Whether `m` is one of this board's legal moves.
    pub fn is_legal(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Return the board that results from playing `m`.
    ///
    /// Panics if `m` is not legal here; moves are only ever taken from [`Board::moves`].
    pub fn apply(&self, m: &Move) -> Board {
        assert!(
            self.holes[m.start] && self.holes[m.middle] && !self.holes[m.end],
            "illegal move {m}"
        );
        debug_assert!(self.is_legal(m), "move {m} is not on the board's move list");

        let mut holes = self.holes.clone();
        holes[m.start] = false;
        holes[m.middle] = false;
        holes[m.end] = true;

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(*m);

        Self::from_parts(Arc::clone(&self.geometry), holes, history)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.geometry.size() == other.geometry.size()
            && self.holes == other.holes
            && self.history == other.history
    }
}

impl Eq for Board {}

/// Renders the board as a centred triangle: `o` for a peg, `.` for an empty hole.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let mut hole = 0;
        for row in 0..size {
            write!(f, "{}", " ".repeat(size - row - 1))?;
            for col in 0..=row {
                let ch = if self.holes[hole] { 'o' } else { '.' };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
                hole += 1;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
