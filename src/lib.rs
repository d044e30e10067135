//! Peg-Solver: exhaustive search for triangular peg solitaire.
//!
//! Given a triangular board of `size` rows, the solver starts one search per
//! hole (with only that hole empty), runs them in parallel, and reports the
//! move sequence that leaves the fewest pegs.
//!
//! ## Modules
//!
//! - [`constants`] - Direction table and limits
//! - [`geometry`] - Hole numbering and the triangular lattice
//! - [`board`] - Immutable board states and jump moves
//! - [`search`] - Depth-first search with a best-so-far bound
//! - [`solver`] - Parallel search over every starting hole
//!
//! ## Example
//!
//! ```
//! use peg_solver::solver::{Discipline, SolverConfig, solve};
//!
//! let config = SolverConfig::new(4).with_discipline(Discipline::Independent);
//! let solution = solve(&config)?;
//!
//! assert_eq!(solution.pegs(), 1);
//! assert_eq!(solution.start, 1);
//! print!("{solution}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod board;
pub mod constants;
pub mod geometry;
pub mod search;
pub mod solver;
