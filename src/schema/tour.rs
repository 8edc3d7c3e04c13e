//! Board coordinates, knight moves and the result record shared by all solvers.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The eight knight-move offsets as `(d_row, d_col)`.
///
/// The order is fixed: backtracking tie-breaks and genome move indices both
/// depend on it.
pub const KNIGHT_MOVES: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// A square on the board, serialized as a `(row, col)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a knight-move offset, returning `None` if the target leaves an
    /// `n`×`n` board.
    #[inline]
    pub fn offset(self, (d_row, d_col): (isize, isize), n: usize) -> Option<Square> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < n && col < n).then_some(Square { row, col })
    }

    /// Whether `other` is exactly one knight move away.
    pub fn is_knight_move_to(self, other: Square) -> bool {
        let d_row = self.row.abs_diff(other.row);
        let d_col = self.col.abs_diff(other.col);
        (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1)
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Square> for (usize, usize) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Which solver produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "Backtracking")]
    Backtracking,
    #[serde(rename = "Cultural Algorithm")]
    Cultural,
}

impl Algorithm {
    /// Display name used in results and run logs.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Backtracking => "Backtracking",
            Algorithm::Cultural => "Cultural Algorithm",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single solver run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourResult {
    /// Solver that produced this result.
    pub algorithm: Algorithm,
    /// Side length of the board searched.
    pub board_size: usize,
    /// True iff the path covers every square.
    pub success: bool,
    /// Visited squares in visiting order.
    pub path: Vec<Square>,
    /// Wall-clock time of the run in seconds.
    pub time: f64,
    /// Number of squares in `path`.
    pub steps: usize,
}

impl TourResult {
    /// Build a result from a path; `steps` and `success` are derived from it.
    pub fn new(algorithm: Algorithm, board_size: usize, path: Vec<Square>, time: f64) -> Self {
        let steps = path.len();
        Self {
            algorithm,
            board_size,
            success: steps == board_size * board_size,
            path,
            time,
            steps,
        }
    }

    /// Number of squares on the board (N²).
    #[inline]
    pub fn total_squares(&self) -> usize {
        self.board_size * self.board_size
    }

    /// The `"steps/total"` label used by run logs.
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.steps, self.total_squares())
    }

    /// Check that the path stays on the board, never repeats a square and
    /// only takes knight moves.
    pub fn is_valid_path(&self) -> bool {
        is_knight_path(&self.path, self.board_size)
    }
}

/// Whether `path` is a legal, non-self-intersecting knight path on an `n`×`n` board.
pub fn is_knight_path(path: &[Square], n: usize) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    if !path
        .iter()
        .all(|sq| sq.row < n && sq.col < n && seen.insert(*sq))
    {
        return false;
    }
    path.windows(2).all(|w| w[0].is_knight_move_to(w[1]))
}
