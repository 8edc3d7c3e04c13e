//! Knight's Tour - find a knight's path that visits every square of an N×N board once.
//!
//! Two independent solvers share one result record so their runs can be
//! benchmarked or displayed side by side:
//!
//! - `BacktrackingSolver`: depth-first search ordered by Warnsdorff's rule
//!   (fewest onward moves first). Deterministic.
//! - `CulturalSolver`: a population of random move sequences evolved under a
//!   belief space holding the best partial tour. Stochastic, best effort.
//!
//! # Architecture
//!
//! - `schema`: Configuration and result types
//! - `compute`: The solvers and the comparison runner
//!
//! # Example
//!
//! ```rust,no_run
//! use knights_tour::{BacktrackingSolver, TourSolver};
//!
//! let mut solver = BacktrackingSolver::new(8);
//! let result = solver.run(0, 0);
//!
//! println!("{}: success={} steps={} in {:.4}s",
//!     result.algorithm, result.success, result.steps, result.time);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{BacktrackingSolver, Comparison, CulturalSolver, TourSolver, compare};
pub use schema::{Algorithm, CulturalConfig, RunConfig, Square, TourResult};
