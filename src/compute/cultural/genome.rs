//! Genome representation, decoding and mutation for the cultural algorithm.
//!
//! A genome is a fixed-length list of move indices into `KNIGHT_MOVES`. It is
//! decoded into a path by simulating the moves from the start square until a
//! move leaves the board or lands on a visited square.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::{KNIGHT_MOVES, Square};

/// A sequence of knight-move choices, each in `0..8`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genome {
    pub moves: Vec<u8>,
}

impl Genome {
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Decode into the longest legal path this genome describes from `start`.
    pub fn decode(&self, start: Square, n: usize) -> Vec<Square> {
        decode_path(&self.moves, start, n)
    }
}

/// Follow `moves` from `start`, stopping at the first move that leaves the
/// `n`×`n` board or revisits a square. The start square is always included.
pub fn decode_path(moves: &[u8], start: Square, n: usize) -> Vec<Square> {
    let mut visited = vec![false; n * n];
    let mut path = Vec::with_capacity(moves.len() + 1);

    visited[start.row * n + start.col] = true;
    path.push(start);

    let mut current = start;
    for &idx in moves {
        let Some(next) = current.offset(KNIGHT_MOVES[idx as usize], n) else {
            break;
        };
        let slot = &mut visited[next.row * n + next.col];
        if *slot {
            break;
        }
        *slot = true;
        path.push(next);
        current = next;
    }

    path
}

/// Random number generator wrapper for genome operations.
pub struct GenomeRng {
    rng: StdRng,
}

impl GenomeRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniformly random move index.
    #[inline]
    pub fn random_move(&mut self) -> u8 {
        self.rng.gen_range(0..KNIGHT_MOVES.len() as u8)
    }

    /// Generate a genome of `len` uniformly random moves.
    pub fn random_genome(&mut self, len: usize) -> Genome {
        Genome {
            moves: (0..len).map(|_| self.random_move()).collect(),
        }
    }

    /// Uniform index into a slice of length `len` (> 0).
    #[inline]
    pub fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Knowledge-guided mutation.
    ///
    /// `failure_index` is where the best-known genome stops extending its path.
    /// The window starts up to `lookback` genes before it (drawn uniformly from
    /// `0..=lookback`) and runs to the end of the genome; each gene in the window
    /// is re-randomized with probability `rate`. Returns the window start, or
    /// `None` if `failure_index` lies past the genome and nothing was mutated.
    pub fn guided_mutate(
        &mut self,
        genome: &mut Genome,
        failure_index: usize,
        lookback: usize,
        rate: f32,
    ) -> Option<usize> {
        if failure_index >= genome.len() {
            return None;
        }

        let back = self.rng.gen_range(0..=lookback);
        let window_start = failure_index.saturating_sub(back);

        for k in window_start..genome.len() {
            if self.rng.r#gen::<f32>() < rate {
                genome.moves[k] = self.random_move();
            }
        }

        Some(window_start)
    }
}

/// Index of the best genome's first failing move, given its score (path length).
#[inline]
pub fn failure_index(best_score: usize) -> usize {
    best_score.saturating_sub(1)
}
