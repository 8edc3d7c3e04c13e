//! Side-by-side runs of both solvers.

use serde::{Deserialize, Serialize};

use crate::schema::{Algorithm, CulturalConfig, TourResult};

use super::{BacktrackingSolver, CulturalSolver, TourSolver};

/// Results of running both solvers from the same start square.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Side length of the board.
    pub board_size: usize,
    pub backtracking: TourResult,
    pub cultural: TourResult,
}

impl Comparison {
    /// Algorithm with the shorter wall-clock time.
    pub fn faster(&self) -> Algorithm {
        if self.cultural.time < self.backtracking.time {
            Algorithm::Cultural
        } else {
            Algorithm::Backtracking
        }
    }

    /// Both results, backtracking first.
    pub fn results(&self) -> [&TourResult; 2] {
        [&self.backtracking, &self.cultural]
    }
}

/// Run both solvers concurrently, each on its own instance.
pub fn compare(board_size: usize, start: (usize, usize), cultural: &CulturalConfig) -> Comparison {
    let (row, col) = start;
    let (backtracking, cultural) = rayon::join(
        || BacktrackingSolver::new(board_size).run(row, col),
        || CulturalSolver::with_config(board_size, cultural.clone()).run(row, col),
    );

    log::debug!(
        "comparison on {board_size}x{board_size}: backtracking {}/{} in {:.4}s, cultural {}/{} in {:.4}s",
        backtracking.steps,
        board_size * board_size,
        backtracking.time,
        cultural.steps,
        board_size * board_size,
        cultural.time
    );

    Comparison {
        board_size,
        backtracking,
        cultural,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Square;

    #[test]
    fn test_compare_runs_both() {
        let config = CulturalConfig {
            population_size: 20,
            max_generations: 30,
            random_seed: Some(1),
            ..Default::default()
        };
        let comparison = compare(5, (0, 0), &config);

        assert_eq!(comparison.backtracking.algorithm, Algorithm::Backtracking);
        assert_eq!(comparison.cultural.algorithm, Algorithm::Cultural);
        assert!(comparison.backtracking.success);
        assert_eq!(comparison.cultural.path[0], Square::new(0, 0));
        assert!(comparison.results().iter().all(|r| r.is_valid_path()));
    }

    #[test]
    fn test_faster() {
        let mut comparison = compare(
            1,
            (0, 0),
            &CulturalConfig {
                population_size: 2,
                max_generations: 1,
                random_seed: Some(3),
                ..Default::default()
            },
        );
        comparison.backtracking.time = 2.0;
        comparison.cultural.time = 1.0;
        assert_eq!(comparison.faster(), Algorithm::Cultural);

        comparison.cultural.time = 3.0;
        assert_eq!(comparison.faster(), Algorithm::Backtracking);
    }
}
