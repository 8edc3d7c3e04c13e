//! Configuration types for Knight's Tour runs.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Board size and nothing else: all a solver needs to be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Side length N of the N×N board.
    pub board_size: usize,
}

impl SolverConfig {
    /// Total number of squares (N²).
    #[inline]
    pub fn total_squares(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Validate board size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::InvalidBoardSize);
        }
        Ok(())
    }

    /// Check that a start square lies on the board.
    ///
    /// Solvers assume this has been checked by the caller.
    pub fn validate_start(&self, row: usize, col: usize) -> Result<(), ConfigError> {
        if row >= self.board_size || col >= self.board_size {
            return Err(ConfigError::StartOutOfBounds {
                row,
                col,
                board_size: self.board_size,
            });
        }
        Ok(())
    }
}

/// Parameters of the cultural algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CulturalConfig {
    /// Number of genomes per generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Generation limit.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,
    /// Fraction of the ranked population used as the breeding pool.
    #[serde(default = "default_elite_fraction")]
    pub elite_fraction: f32,
    /// Per-gene re-randomization probability inside the mutation window.
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f32,
    /// Maximum number of genes before the failure point the window may reach back.
    #[serde(default = "default_mutation_lookback")]
    pub mutation_lookback: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for CulturalConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            max_generations: default_max_generations(),
            elite_fraction: default_elite_fraction(),
            mutation_rate: default_mutation_rate(),
            mutation_lookback: default_mutation_lookback(),
            random_seed: None,
        }
    }
}

fn default_population_size() -> usize {
    150
}
fn default_max_generations() -> usize {
    2000
}
fn default_elite_fraction() -> f32 {
    0.3
}
fn default_mutation_rate() -> f32 {
    0.2
}
fn default_mutation_lookback() -> usize {
    5
}

impl CulturalConfig {
    /// Size of the breeding pool: `floor(population_size * elite_fraction)`, at least one.
    pub fn breeding_pool_size(&self) -> usize {
        ((self.population_size as f32 * self.elite_fraction) as usize).max(1)
    }

    /// Validate cultural algorithm parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        if !(0.0..=1.0).contains(&self.elite_fraction) {
            return Err(ConfigError::InvalidFraction {
                name: "elite_fraction",
                value: self.elite_fraction,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidFraction {
                name: "mutation_rate",
                value: self.mutation_rate,
            });
        }
        Ok(())
    }
}

/// Which solver(s) a run invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmChoice {
    #[default]
    Backtracking,
    Cultural,
    /// Run both, each on its own solver instance.
    Compare,
}

impl std::str::FromStr for AlgorithmChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backtracking" => Ok(Self::Backtracking),
            "cultural" => Ok(Self::Cultural),
            "compare" => Ok(Self::Compare),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Top-level configuration for a CLI run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Side length of the board.
    pub board_size: usize,
    /// Start square as `(row, col)`.
    #[serde(default)]
    pub start: (usize, usize),
    /// Solver selection.
    #[serde(default)]
    pub algorithm: AlgorithmChoice,
    /// Cultural algorithm parameters.
    #[serde(default)]
    pub cultural: CulturalConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            start: (0, 0),
            algorithm: AlgorithmChoice::default(),
            cultural: CulturalConfig::default(),
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Board-only view of this configuration.
    pub fn solver(&self) -> SolverConfig {
        SolverConfig {
            board_size: self.board_size,
        }
    }

    /// Validate the whole run configuration, including the start square.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let solver = self.solver();
        solver.validate()?;
        solver.validate_start(self.start.0, self.start.1)?;
        if self.algorithm != AlgorithmChoice::Backtracking {
            self.cultural.validate()?;
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Board size must be non-zero")]
    InvalidBoardSize,
    #[error("Start square ({row}, {col}) is outside the {board_size}x{board_size} board")]
    StartOutOfBounds {
        row: usize,
        col: usize,
        board_size: usize,
    },
    #[error("Population size must be non-zero")]
    EmptyPopulation,
    #[error("Generation limit must be non-zero")]
    NoGenerations,
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidFraction { name: &'static str, value: f32 },
    #[error("Unknown algorithm: {0} (expected backtracking, cultural or compare)")]
    UnknownAlgorithm(String),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_valid() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cultural.population_size, 150);
        assert_eq!(config.cultural.max_generations, 2000);
    }

    #[test]
    fn test_start_out_of_bounds() {
        let config = RunConfig {
            board_size: 5,
            start: (5, 0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds { row: 5, col: 0, .. })
        ));
    }

    #[test]
    fn test_zero_board_rejected() {
        let solver = SolverConfig { board_size: 0 };
        assert!(matches!(
            solver.validate(),
            Err(ConfigError::InvalidBoardSize)
        ));
    }

    #[test]
    fn test_solver_view() {
        let config = RunConfig::default();
        let solver = config.solver();
        assert_eq!(solver.board_size, 8);
        assert_eq!(solver.total_squares(), 64);
        assert_eq!(SolverConfig { board_size: 1 }.total_squares(), 1);
    }

    #[test]
    fn test_cultural_validation() {
        let mut cultural = CulturalConfig {
            population_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            cultural.validate(),
            Err(ConfigError::EmptyPopulation)
        ));

        cultural.population_size = 10;
        cultural.max_generations = 0;
        assert!(matches!(
            cultural.validate(),
            Err(ConfigError::NoGenerations)
        ));

        cultural.max_generations = 50;
        cultural.mutation_rate = 1.5;
        assert!(matches!(
            cultural.validate(),
            Err(ConfigError::InvalidFraction { name: "mutation_rate", .. })
        ));
    }

    #[test]
    fn test_breeding_pool_size() {
        assert_eq!(CulturalConfig::default().breeding_pool_size(), 45);

        let tiny = CulturalConfig {
            population_size: 2,
            ..Default::default()
        };
        assert_eq!(tiny.breeding_pool_size(), 1);
    }

    #[test]
    fn test_algorithm_choice_parse() {
        assert_eq!(
            "compare".parse::<AlgorithmChoice>().unwrap(),
            AlgorithmChoice::Compare
        );
        assert!("genetic".parse::<AlgorithmChoice>().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.json");
        fs::write(
            &path,
            r#"{ "board_size": 6, "start": [1, 2], "algorithm": "cultural",
                 "cultural": { "population_size": 40, "random_seed": 7 } }"#,
        )
        .unwrap();

        let config = RunConfig::from_path(&path).unwrap();
        assert_eq!(config.board_size, 6);
        assert_eq!(config.start, (1, 2));
        assert_eq!(config.algorithm, AlgorithmChoice::Cultural);
        assert_eq!(config.cultural.population_size, 40);
        assert_eq!(config.cultural.max_generations, 2000);
        assert_eq!(config.cultural.random_seed, Some(7));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = RunConfig::from_path(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
