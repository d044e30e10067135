//! Parallel solve over every starting hole.
//!
//! One search task runs per hole, each from the root board with only that hole
//! empty. Tasks run on a rayon pool and the per-hole results are reduced to a
//! single winner: fewest pegs, then lowest starting hole.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};
use rayon::prelude::*;

use crate::board::{Board, Move};
use crate::constants::MAX_SIZE;
use crate::geometry::{Geometry, Hole};
use crate::search::{LocalBound, Outcome, SearchStats, SharedBound, search};

/// How the pruning bound is scoped across tasks.
///
/// The solver runs with [`Discipline::Shared`]. [`Discipline::Independent`]
/// exists for reproducible runs in tests, where the exact winning line must
/// not depend on scheduling.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Discipline {
    /// One bound for all tasks; a strong result from one hole prunes the rest.
    #[default]
    Shared,
    /// Each task owns its bound; results do not depend on scheduling.
    Independent,
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discipline::Shared => write!(f, "shared"),
            Discipline::Independent => write!(f, "independent"),
        }
    }
}

/// Solver settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Rows on the board.
    pub size: usize,
    pub discipline: Discipline,
    /// Worker threads; `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl SolverConfig {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            discipline: Discipline::default(),
            threads: None,
        }
    }

    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Reject settings the solver cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_SIZE {
            bail!("board size must be between 1 and {MAX_SIZE}, got {}", self.size);
        }
        if self.threads == Some(0) {
            bail!("worker count must be positive");
        }
        Ok(())
    }
}

/// The winning line for a board size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Hole left empty at the start.
    pub start: Hole,
    /// Terminal board reached; its history is the winning line.
    pub board: Board,
    /// Counters summed over all tasks.
    pub stats: SearchStats,
}

impl Solution {
    /// Pegs left at the end of the winning line.
    pub fn pegs(&self) -> usize {
        self.board.pegs()
    }

    /// The winning move sequence.
    pub fn moves(&self) -> &[Move] {
        self.board.history()
    }
}

/// One-based report: `<start>, <move count>` then `<from>, <to>` per move.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {}", self.start + 1, self.moves().len())?;
        for m in self.moves() {
            writeln!(f, "{}, {}", m.start + 1, m.end + 1)?;
        }
        Ok(())
    }
}

/// Pick the best outcome: fewest pegs, ties to the lowest starting hole.
///
/// Among outcomes equal on both, the first one seen is kept.
pub fn reduce<I>(outcomes: I) -> Option<Outcome>
where
    I: IntoIterator<Item = Outcome>,
{
    outcomes.into_iter().fold(None, |best, o| match best {
        Some(b) if !o.beats(&b) => Some(b),
        _ => Some(o),
    })
}

/// Search every starting hole and return the best line.
pub fn solve(config: &SolverConfig) -> Result<Solution> {
    config.validate()?;
    let geometry = Arc::new(Geometry::new(config.size));
    let holes = geometry.num_holes();
    info!(
        "solving size {} ({holes} holes) with {} bound",
        config.size, config.discipline
    );

    let t0 = Instant::now();
    let (best, stats) = run_in_pool(config.threads, || match config.discipline {
        Discipline::Independent => solve_independent(&geometry),
        Discipline::Shared => solve_shared(&geometry),
    })?;
    let best = best.ok_or_else(|| anyhow!("no starting hole reached a terminal board"))?;

    info!(
        "best: {} pegs from hole {} in {:.2?} ({stats})",
        best.pegs(),
        best.start,
        t0.elapsed()
    );
    Ok(Solution {
        start: best.start,
        board: best.board,
        stats,
    })
}

fn solve_independent(geometry: &Arc<Geometry>) -> (Option<Outcome>, SearchStats) {
    // `collect` keeps results in hole order so the reduction can break ties.
    let results: Vec<(Option<Outcome>, SearchStats)> = (0..geometry.num_holes())
        .into_par_iter()
        .map(|start| {
            let root = Board::with_geometry(Arc::clone(geometry), &[start]);
            let mut bound = LocalBound::new();
            let stats = search(&root, start, &mut bound);
            debug!(
                "hole {start}: {:?} pegs ({stats})",
                bound.best().map(Outcome::pegs)
            );
            (bound.into_best(), stats)
        })
        .collect();

    let mut total = SearchStats::default();
    let mut outcomes = Vec::with_capacity(results.len());
    for (outcome, stats) in results {
        total += stats;
        outcomes.extend(outcome);
    }
    (reduce(outcomes), total)
}

fn solve_shared(geometry: &Arc<Geometry>) -> (Option<Outcome>, SearchStats) {
    let shared = SharedBound::new();
    let total = (0..geometry.num_holes())
        .into_par_iter()
        .map(|start| {
            let root = Board::with_geometry(Arc::clone(geometry), &[start]);
            let mut bound = &shared;
            let stats = search(&root, start, &mut bound);
            debug!("hole {start}: done ({stats})");
            stats
        })
        .reduce(SearchStats::default, |a, b| a + b);
    (shared.into_best(), total)
}

/// Run `f` on a dedicated pool of `threads` workers, or on the global pool.
fn run_in_pool<R, F>(threads: Option<usize>, f: F) -> Result<R>
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    match threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .thread_name(|i| format!("peg-worker-{i}"))
                .build()
                .context("failed to build worker pool")?;
            debug!("running on {n} workers");
            Ok(pool.install(f))
        }
        None => {
            debug!("running on {} workers", rayon::current_num_threads());
            Ok(f())
        }
    }
}
