//! Compute module - Knight's Tour solvers.

mod backtracking;
mod board;
mod comparison;
pub mod cultural;

pub use backtracking::*;
pub use board::*;
pub use comparison::*;
pub use cultural::{CulturalSolver, GenerationProgress, StopReason};

use crate::schema::TourResult;

/// Common interface of the tour solvers.
///
/// Callers must pass a start square inside the board; solvers do not check it.
pub trait TourSolver {
    /// Side length of the board this solver was built for.
    fn board_size(&self) -> usize;

    /// Search for a tour from `(start_row, start_col)`.
    fn run(&mut self, start_row: usize, start_col: usize) -> TourResult;
}
