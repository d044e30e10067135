//! Exhaustive depth-first search with a best-so-far bound.
//!
//! The search walks every path from a root board to every terminal board,
//! keeping the terminal with the fewest pegs. Peg count drops by exactly one
//! per move and a non-empty board never drops below one peg, so once the bound
//! reaches a board's floor (see [`Board::peg_floor`]) nothing below that board
//! can improve on it and the subtree is cut.
//!
//! The bound sits behind the [`Bound`] trait so the same traversal runs with a
//! task-local bound ([`LocalBound`]) or one shared by all tasks ([`SharedBound`]).

use std::fmt;
use std::ops::{Add, AddAssign};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::board::Board;
use crate::constants::NO_BOUND;
use crate::geometry::Hole;

/// A terminal board together with the hole that was empty at its root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub start: Hole,
    pub board: Board,
}

impl Outcome {
    /// Pegs left on the terminal board.
    #[inline]
    pub fn pegs(&self) -> usize {
        self.board.pegs()
    }

    /// Whether this outcome should replace `other`: fewer pegs, or as many
    /// pegs from a lower starting hole.
    pub fn beats(&self, other: &Outcome) -> bool {
        (self.pegs(), self.start) < (other.pegs(), other.start)
    }
}

/// Best-so-far bookkeeping consulted and updated by [`search`].
pub trait Bound {
    /// Pegs on the best terminal recorded so far, or [`NO_BOUND`].
    fn best_pegs(&self) -> usize;

    /// Record the terminal `board` reached from `start` if it beats the
    /// current best. Returns whether it was recorded.
    fn offer(&mut self, start: Hole, board: &Board) -> bool;
}

/// Bound owned by a single search task.
#[derive(Debug, Default)]
pub struct LocalBound {
    best: Option<Outcome>,
}

impl LocalBound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self) -> Option<&Outcome> {
        self.best.as_ref()
    }

    pub fn into_best(self) -> Option<Outcome> {
        self.best
    }
}

impl Bound for LocalBound {
    fn best_pegs(&self) -> usize {
        self.best.as_ref().map_or(NO_BOUND, Outcome::pegs)
    }

    fn offer(&mut self, start: Hole, board: &Board) -> bool {
        if board.pegs() > self.best_pegs() {
            return false;
        }
        let candidate = Outcome {
            start,
            board: board.clone(),
        };
        match &self.best {
            Some(best) if !candidate.beats(best) => false,
            _ => {
                self.best = Some(candidate);
                true
            }
        }
    }
}

/// Bound shared by concurrently running searches.
///
/// The outcome lives behind a mutex and every update compares and replaces it
/// under that one lock. The peg count is mirrored in an atomic so the hot
/// pruning check never takes the lock; the mirror only ever decreases, and a
/// stale read only means less pruning.
#[derive(Debug)]
pub struct SharedBound {
    pegs: AtomicUsize,
    best: Mutex<Option<Outcome>>,
}

impl Default for SharedBound {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedBound {
    pub fn new() -> Self {
        Self {
            pegs: AtomicUsize::new(NO_BOUND),
            best: Mutex::new(None),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Outcome>> {
        self.best.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current best outcome.
    pub fn best(&self) -> Option<Outcome> {
        self.lock().clone()
    }

    pub fn into_best(self) -> Option<Outcome> {
        self.best.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Bound for &SharedBound {
    fn best_pegs(&self) -> usize {
        self.pegs.load(Ordering::Acquire)
    }

    fn offer(&mut self, start: Hole, board: &Board) -> bool {
        // Cheap rejection before cloning or locking.
        if board.pegs() > self.best_pegs() {
            return false;
        }
        let candidate = Outcome {
            start,
            board: board.clone(),
        };
        let mut best = self.lock();
        match &*best {
            Some(current) if !candidate.beats(current) => false,
            _ => {
                self.pegs.store(candidate.pegs(), Ordering::Release);
                *best = Some(candidate);
                true
            }
        }
    }
}

/// Counters collected while searching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards entered, including the root.
    pub visited: u64,
    /// Terminal boards reached.
    pub terminals: u64,
    /// Non-terminal boards whose subtree was cut by the bound.
    pub pruned: u64,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.visited += rhs.visited;
        self.terminals += rhs.terminals;
        self.pruned += rhs.pruned;
    }
}

impl Add for SearchStats {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "visited={} terminals={} pruned={}",
            self.visited, self.terminals, self.pruned
        )
    }
}

/// Search every path below `root`, recording terminals in `bound`.
///
/// `start` identifies the root in recorded outcomes. The best terminal found
/// is read back from the bound once this returns.
pub fn search<B: Bound>(root: &Board, start: Hole, bound: &mut B) -> SearchStats {
    let mut stats = SearchStats::default();
    explore(root, start, bound, &mut stats);
    stats
}

fn explore<B: Bound>(board: &Board, start: Hole, bound: &mut B, stats: &mut SearchStats) {
    stats.visited += 1;

    if board.is_terminal() {
        stats.terminals += 1;
        bound.offer(start, board);
        return;
    }

    if bound.best_pegs() <= board.peg_floor() {
        stats.pruned += 1;
        return;
    }

    for m in board.moves() {
        let next = board.apply(m);
        explore(&next, start, bound, stats);
    }
}

/// Run a self-contained search from `root` and return its best terminal.
pub fn best_from(root: &Board, start: Hole) -> (Option<Outcome>, SearchStats) {
    let mut bound = LocalBound::new();
    let stats = search(root, start, &mut bound);
    (bound.into_best(), stats)
}
