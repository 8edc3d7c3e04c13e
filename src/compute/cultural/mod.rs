//! Cultural algorithm for the Knight's Tour.
//!
//! A population of random move sequences evolves under the guidance of a
//! belief space holding the best partial tour seen so far.
//!
//! # Overview
//!
//! - **Genomes** (`genome`): move-index sequences, decoding and guided mutation
//! - **Belief space** (`belief`): best genome, score and path of the run
//! - **Search** (`search`): evaluation, elitist reproduction and the generation loop
//!
//! # Example
//!
//! ```rust,no_run
//! use knights_tour::compute::{CulturalSolver, TourSolver};
//! use knights_tour::schema::CulturalConfig;
//!
//! let config = CulturalConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//! let mut solver = CulturalSolver::with_config(8, config);
//! let result = solver.run_with_callback(0, 0, |progress| {
//!     println!("Generation {}: best = {}/{}",
//!         progress.generation, progress.best_score, progress.total_squares);
//! });
//!
//! println!("Reached {} squares", result.steps);
//! ```

mod belief;
mod genome;
mod search;

pub use belief::BeliefSpace;
pub use genome::{Genome, GenomeRng, decode_path, failure_index};
pub use search::{Candidate, CulturalSolver, EvolutionHistory, GenerationProgress, StopReason};
