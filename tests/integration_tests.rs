//! Integration tests for peg-solver
//!
//! Known optima (fewest pegs, exhaustively checked):
//! - size 3: 2 pegs, first reached from hole 0
//! - size 4: 1 peg, lowest starting hole 1; holes 0, 6, 9 leave 3 and hole 4 is stuck at 9
//! - size 5: 1 peg from every starting hole

use fastrand::Rng;

use peg_solver::board::{Board, Move};
use peg_solver::geometry::{Geometry, triangle_num};
use peg_solver::search::best_from;
use peg_solver::solver::{Discipline, SolverConfig, solve};

// =============================================================================
// Helper functions
// =============================================================================

/// Walk `steps` random moves from `board`, stopping early at a terminal board.
fn random_walk(board: &Board, steps: usize, rng: &mut Rng) -> Board {
    let mut current = board.clone();
    for _ in 0..steps {
        if current.is_terminal() {
            break;
        }
        let m = current.moves()[rng.usize(..current.moves().len())];
        current = current.apply(&m);
    }
    current
}

/// A spread of reachable boards of `size` rows.
fn reachable_boards(size: usize, rng: &mut Rng) -> Vec<Board> {
    let mut boards = Vec::new();
    for start in 0..triangle_num(size) {
        let root = Board::root(size, &[start]);
        for steps in 0..6 {
            boards.push(random_walk(&root, steps, rng));
        }
    }
    boards
}

fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| format!("{}-{}", m.start, m.end))
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Geometry
// =============================================================================

#[test]
fn test_geometry_round_trip_all_sizes() {
    for size in 1..=15 {
        let g = Geometry::new(size);
        assert_eq!(g.num_holes(), triangle_num(size));
        for hole in 0..g.num_holes() {
            let (row, col) = g.row_col(hole);
            assert!(col <= row && row < size);
            assert_eq!(g.index_of(row, col), hole);
        }
    }
}

// =============================================================================
// Board properties
// =============================================================================

#[test]
fn test_apply_removes_exactly_one_peg() {
    let mut rng = Rng::with_seed(11);
    for board in reachable_boards(5, &mut rng) {
        for m in board.moves() {
            assert_eq!(board.apply(m).pegs(), board.pegs() - 1);
        }
    }
}

#[test]
fn test_moves_are_legal_jumps() {
    let mut rng = Rng::with_seed(12);
    for board in reachable_boards(6, &mut rng) {
        let g = board.geometry();
        for m in board.moves() {
            assert!(board.has_peg(m.start), "start of {m} must hold a peg");
            assert!(board.has_peg(m.middle), "middle of {m} must hold a peg");
            assert!(!board.has_peg(m.end), "end of {m} must be empty");
            assert_eq!(g.midpoint(m.start, m.end), Some(m.middle));
        }
    }
}

#[test]
fn test_moves_are_deterministic_and_complete() {
    let mut rng = Rng::with_seed(13);
    for board in reachable_boards(5, &mut rng) {
        let g = board.geometry();
        // Brute force: every (start, end) pair two apart on a line.
        let mut expected = Vec::new();
        for end in board.empty_holes() {
            for start in 0..g.num_holes() {
                if let Some(m) = Move::between(g, start, end) {
                    if board.has_peg(m.start) && board.has_peg(m.middle) {
                        expected.push(m);
                    }
                }
            }
        }
        let mut actual = board.moves().to_vec();
        assert!(actual.windows(2).all(|w| w[0].end <= w[1].end));
        actual.sort_by_key(|m| (m.end, m.start));
        expected.sort_by_key(|m| (m.end, m.start));
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_history_is_append_only() {
    let mut rng = Rng::with_seed(14);
    for board in reachable_boards(5, &mut rng) {
        for m in board.moves() {
            let next = board.apply(m);
            assert_eq!(&next.history()[..board.history().len()], board.history());
            assert_eq!(next.history().last(), Some(m));
            assert_eq!(next.history().len(), board.history().len() + 1);
        }
    }
}

#[test]
fn test_every_line_terminates() {
    let mut rng = Rng::with_seed(15);
    for size in 1..=7 {
        for start in 0..triangle_num(size) {
            let root = Board::root(size, &[start]);
            // Each move removes a peg, so no line is longer than the peg count.
            let end = random_walk(&root, root.pegs(), &mut rng);
            assert!(end.is_terminal());
            assert_eq!(end.history().len(), root.pegs() - end.pegs());
        }
    }
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_search_size_three_corner() {
    let (best, _) = best_from(&Board::root(3, &[0]), 0);
    let best = best.unwrap();
    assert_eq!(best.pegs(), 2);
    assert_eq!(format_moves(best.board.history()), "3-0 5-3 0-5");
}

#[test]
fn test_search_size_four_per_hole() {
    let expected = [3, 1, 1, 1, 9, 1, 3, 1, 1, 3];
    for (start, &pegs) in expected.iter().enumerate() {
        let (best, _) = best_from(&Board::root(4, &[start]), start);
        assert_eq!(best.unwrap().pegs(), pegs, "starting hole {start}");
    }
}

// =============================================================================
// Solver
// =============================================================================

#[test]
fn test_solve_small_sizes() {
    for discipline in [Discipline::Independent, Discipline::Shared] {
        let config = |size| SolverConfig::new(size).with_discipline(discipline);

        let s1 = solve(&config(1)).unwrap();
        assert_eq!(s1.pegs(), 0);
        assert_eq!(s1.to_string(), "1, 0\n");

        let s2 = solve(&config(2)).unwrap();
        assert_eq!(s2.pegs(), 2);
        assert_eq!(s2.start, 0);

        let s3 = solve(&config(3)).unwrap();
        assert_eq!(s3.pegs(), 2);
    }
}

#[test]
fn test_solve_size_four_independent() {
    let config = SolverConfig::new(4).with_discipline(Discipline::Independent);
    let solution = solve(&config).unwrap();
    assert_eq!(solution.pegs(), 1);
    assert_eq!(solution.start, 1);
    assert_eq!(
        solution.to_string(),
        "2, 8\n7, 2\n1, 4\n6, 1\n4, 6\n10, 3\n1, 6\n8, 10\n10, 3\n"
    );
}

#[test]
fn test_independent_is_reproducible() {
    let config = SolverConfig::new(4).with_discipline(Discipline::Independent);
    let a = solve(&config).unwrap();
    let b = solve(&config.clone().with_threads(1)).unwrap();
    let c = solve(&config.clone().with_threads(3)).unwrap();
    assert_eq!(a.start, b.start);
    assert_eq!(a.board, b.board);
    assert_eq!(a.stats, b.stats);
    assert_eq!(b.board, c.board);
}

#[test]
fn test_shared_finds_optimum() {
    for (size, pegs) in [(3, 2), (4, 1), (5, 1)] {
        let config = SolverConfig::new(size).with_threads(4);
        let solution = solve(&config).unwrap();
        assert_eq!(solution.pegs(), pegs, "size {size}");
        assert_eq!(
            solution.moves().len(),
            triangle_num(size) - 1 - pegs,
            "size {size}"
        );
        // Replay the line from its root to check it is legal.
        let mut board = Board::root(size, &[solution.start]);
        for m in solution.moves() {
            assert!(board.is_legal(m), "{m} is not legal");
            board = board.apply(m);
        }
        assert_eq!(board, solution.board);
        assert!(board.is_terminal());
    }
}

#[test]
fn test_size_five_independent() {
    let config = SolverConfig::new(5).with_discipline(Discipline::Independent);
    let solution = solve(&config).unwrap();
    assert_eq!(solution.pegs(), 1);
    assert_eq!(solution.start, 0);
    assert_eq!(solution.moves().len(), 13);
}

#[test]
fn test_invalid_size_is_rejected() {
    assert!(solve(&SolverConfig::new(0)).is_err());
    assert!(solve(&SolverConfig::new(16)).is_err());
}
