//! Depth-first Knight's Tour search ordered by Warnsdorff's rule.
//!
//! The search is the classic recursive backtracker, run on an explicit frame
//! stack so that boards with many squares cannot overflow the call stack.
//! Each frame holds the candidate squares of one node, already sorted by
//! ascending onward degree, and the index of the next one to try.

use std::time::Instant;

use crate::schema::{Algorithm, Square, TourResult};

use super::board::Board;
use super::TourSolver;

/// One level of the search: candidates from the square at the same depth in the path.
#[derive(Debug)]
struct Frame {
    candidates: Vec<Square>,
    next: usize,
}

/// Warnsdorff-ordered backtracking solver.
///
/// An instance holds its board and path for a single run; construct a new
/// solver for every run.
#[derive(Debug)]
pub struct BacktrackingSolver {
    board: Board,
    path: Vec<Square>,
    nodes_visited: u64,
    backtracks: u64,
}

impl BacktrackingSolver {
    /// Create a solver for an `n`×`n` board.
    pub fn new(n: usize) -> Self {
        Self {
            board: Board::new(n),
            path: Vec::with_capacity(n * n),
            nodes_visited: 0,
            backtracks: 0,
        }
    }

    /// Squares placed on the board during the last run.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    /// Squares removed again during the last run.
    pub fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Current board marking.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Place `square` as the next step and return true if the tour is complete.
    fn descend(&mut self, square: Square) -> bool {
        let step = self.path.len();
        self.board.mark(square, step);
        self.path.push(square);
        self.nodes_visited += 1;
        step + 1 == self.board.size() * self.board.size()
    }

    /// Undo the most recent step.
    fn retreat(&mut self) {
        if let Some(square) = self.path.pop() {
            self.board.unmark(square);
            self.backtracks += 1;
        }
    }

    /// Search for a tour from `start`, leaving the tour in `self.path` on success.
    ///
    /// On failure every step is undone, so the path ends up empty.
    fn search(&mut self, start: Square) -> bool {
        if self.descend(start) {
            return true;
        }

        let mut stack = vec![Frame {
            candidates: self.board.ordered_moves(start),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if frame.next < frame.candidates.len() {
                let square = frame.candidates[frame.next];
                frame.next += 1;

                if self.descend(square) {
                    return true;
                }
                let candidates = self.board.ordered_moves(square);
                stack.push(Frame {
                    candidates,
                    next: 0,
                });
            } else {
                // Dead end: every candidate of this node failed.
                stack.pop();
                self.retreat();
            }
        }

        false
    }
}

impl TourSolver for BacktrackingSolver {
    fn board_size(&self) -> usize {
        self.board.size()
    }

    fn run(&mut self, start_row: usize, start_col: usize) -> TourResult {
        let start_time = Instant::now();

        let success = self.search(Square::new(start_row, start_col));

        let elapsed = start_time.elapsed().as_secs_f64();
        log::debug!(
            "backtracking from ({start_row}, {start_col}): success={success}, nodes={}, backtracks={}",
            self.nodes_visited,
            self.backtracks,
        );
        if success {
            log::info!("Backtracking found a tour in {elapsed:.4}s");
        }

        TourResult::new(
            Algorithm::Backtracking,
            self.board.size(),
            self.path.clone(),
            elapsed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::is_knight_path;
    use proptest::prelude::*;

    #[test]
    fn test_five_by_five_from_corner() {
        let result = BacktrackingSolver::new(5).run(0, 0);
        assert!(result.success);
        assert_eq!(result.steps, 25);
        assert_eq!(result.path[0], Square::new(0, 0));
        assert!(result.is_valid_path());
        assert_eq!(result.algorithm, Algorithm::Backtracking);
    }

    #[test]
    fn test_five_by_five_known_order() {
        let result = BacktrackingSolver::new(5).run(0, 0);
        let prefix: Vec<(usize, usize)> =
            result.path[..6].iter().map(|&sq| sq.into()).collect();
        assert_eq!(prefix, vec![(0, 0), (2, 1), (4, 0), (3, 2), (4, 4), (2, 3)]);
        assert_eq!(result.path.last(), Some(&Square::new(2, 0)));
    }

    #[test]
    fn test_five_by_five_majority_colour_starts() {
        for r in 0..5 {
            for c in 0..5 {
                if (r + c) % 2 == 0 {
                    let result = BacktrackingSolver::new(5).run(r, c);
                    assert!(result.success, "no tour from ({r}, {c})");
                }
            }
        }
    }

    #[test]
    fn test_four_by_four_has_no_tour() {
        let result = BacktrackingSolver::new(4).run(0, 0);
        assert!(!result.success);
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_three_by_three_has_no_tour() {
        let mut solver = BacktrackingSolver::new(3);
        let result = solver.run(0, 0);
        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.steps, 0);
        assert_eq!(solver.board().visited(), 0);
        assert_eq!(solver.nodes_visited(), solver.backtracks());
    }

    #[test]
    fn test_single_square_board() {
        let result = BacktrackingSolver::new(1).run(0, 0);
        assert!(result.success);
        assert_eq!(result.path, vec![Square::new(0, 0)]);
    }

    #[test]
    fn test_eight_by_eight() {
        let mut solver = BacktrackingSolver::new(8);
        let result = solver.run(0, 0);
        assert!(result.success);
        assert_eq!(result.steps, 64);
        assert!(result.is_valid_path());

        // The board records visiting order.
        for (step, &square) in result.path.iter().enumerate() {
            assert_eq!(solver.board().get(square), Some(step));
        }
    }

    #[test]
    fn test_deterministic() {
        let a = BacktrackingSolver::new(6).run(2, 3);
        let b = BacktrackingSolver::new(6).run(2, 3);
        assert_eq!(a.path, b.path);
        assert_eq!(a.success, b.success);
    }

    #[test]
    fn test_deep_board_does_not_overflow() {
        let result = BacktrackingSolver::new(40).run(0, 0);
        assert!(result.success);
        assert_eq!(result.steps, 1600);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_paths_are_legal(
            n in prop::sample::select(vec![1usize, 2, 3, 4, 6]),
            r in 0usize..6,
            c in 0usize..6,
        ) {
            let (r, c) = (r % n, c % n);
            let result = BacktrackingSolver::new(n).run(r, c);

            prop_assert_eq!(result.steps, result.path.len());
            prop_assert_eq!(result.success, result.steps == n * n);
            prop_assert!(is_knight_path(&result.path, n));
            if result.success {
                prop_assert_eq!(result.path[0], Square::new(r, c));
            }
        }
    }
}
