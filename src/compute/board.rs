//! Occupancy grid used by the backtracking search.

use crate::schema::{KNIGHT_MOVES, Square};

/// An N×N grid holding the move index at which each square was visited.
///
/// Owned by a single search; squares are marked on descent and unmarked on
/// backtrack, so the grid always mirrors the current partial path.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Option<usize>>,
}

impl Board {
    /// Create an empty board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, square: Square) -> usize {
        square.row * self.size + square.col
    }

    /// Move index at which `square` was visited, if any.
    #[inline]
    pub fn get(&self, square: Square) -> Option<usize> {
        self.cells[self.index(square)]
    }

    #[inline]
    pub fn mark(&mut self, square: Square, step: usize) {
        let idx = self.index(square);
        self.cells[idx] = Some(step);
    }

    #[inline]
    pub fn unmark(&mut self, square: Square) {
        let idx = self.index(square);
        self.cells[idx] = None;
    }

    /// Squares reachable by one knight move that are on the board and unvisited,
    /// in `KNIGHT_MOVES` order.
    pub fn valid_moves(&self, from: Square) -> impl Iterator<Item = Square> + '_ {
        KNIGHT_MOVES
            .into_iter()
            .filter_map(move |delta| from.offset(delta, self.size))
            .filter(move |&sq| self.get(sq).is_none())
    }

    /// Warnsdorff degree: number of valid onward moves from `square`.
    pub fn degree(&self, square: Square) -> usize {
        self.valid_moves(square).count()
    }

    /// Valid moves from `from`, stably sorted by ascending degree.
    pub fn ordered_moves(&self, from: Square) -> Vec<Square> {
        let mut moves: Vec<Square> = self.valid_moves(from).collect();
        moves.sort_by_key(|&sq| self.degree(sq));
        moves
    }

    /// Number of visited squares.
    pub fn visited(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
