//! Belief space: the best-known solution guiding reproduction.

use serde::{Deserialize, Serialize};

use crate::schema::Square;

use super::genome::{Genome, failure_index};
use super::search::Candidate;

/// Best genome, score and path seen so far within one run.
///
/// The score only ever increases; a candidate replaces the current best only
/// if it scores strictly higher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeliefSpace {
    /// Best genome found.
    pub genome: Genome,
    /// Path length achieved by `genome`.
    pub score: usize,
    /// Path decoded from `genome`.
    pub path: Vec<Square>,
}

impl BeliefSpace {
    /// An empty belief space (score 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `candidate` if it beats the current best. Returns true on improvement.
    pub fn observe(&mut self, candidate: &Candidate) -> bool {
        if candidate.score <= self.score {
            return false;
        }
        self.genome = candidate.genome.clone();
        self.score = candidate.score;
        self.path = candidate.path.clone();
        true
    }

    /// Genome position where the best path stopped extending.
    #[inline]
    pub fn failure_index(&self) -> usize {
        failure_index(self.score)
    }

    /// Whether the best path covers all `total_squares`.
    #[inline]
    pub fn is_complete(&self, total_squares: usize) -> bool {
        self.score == total_squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(score: usize, tag: u8) -> Candidate {
        Candidate {
            genome: Genome {
                moves: vec![tag; 4],
            },
            score,
            path: (0..score).map(|i| Square::new(i, 0)).collect(),
        }
    }

    #[test]
    fn test_observe_improves() {
        let mut belief = BeliefSpace::new();
        assert!(belief.observe(&candidate(3, 1)));
        assert_eq!(belief.score, 3);
        assert_eq!(belief.path.len(), 3);
        assert_eq!(belief.failure_index(), 2);
    }

    #[test]
    fn test_observe_never_regresses() {
        let mut belief = BeliefSpace::new();
        belief.observe(&candidate(5, 1));
        assert!(!belief.observe(&candidate(4, 2)));
        assert_eq!(belief.score, 5);
        assert_eq!(belief.genome.moves, vec![1; 4]);
    }

    #[test]
    fn test_ties_keep_first() {
        let mut belief = BeliefSpace::new();
        belief.observe(&candidate(5, 1));
        assert!(!belief.observe(&candidate(5, 2)));
        assert_eq!(belief.genome.moves, vec![1; 4]);
    }

    #[test]
    fn test_is_complete() {
        let mut belief = BeliefSpace::new();
        belief.observe(&candidate(4, 0));
        assert!(belief.is_complete(4));
        assert!(!belief.is_complete(9));
    }
}
