//! RNG module - spawn randomization
//!
//! New pieces are drawn uniformly from the seven kinds. The generator is
//! seedable so a game can be replayed from its seed, and a scripted cycle is
//! available for tests and demos that need a known piece order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

#[derive(Debug, Clone)]
enum Source {
    Uniform(StdRng),
    Cycle { kinds: Vec<PieceKind>, next: usize },
}

/// Picks the kind of each newly spawned piece
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    source: Source,
}

impl PieceRandomizer {
    /// Uniform choice driven by a seeded generator
    pub fn new(seed: u64) -> Self {
        Self {
            source: Source::Uniform(StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform choice seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            source: Source::Uniform(StdRng::from_entropy()),
        }
    }

    /// Repeat `kinds` in order, forever.
    ///
    /// An empty list falls back to the full catalog order.
    pub fn cycle(kinds: Vec<PieceKind>) -> Self {
        let kinds = if kinds.is_empty() {
            PieceKind::ALL.to_vec()
        } else {
            kinds
        };
        Self {
            source: Source::Cycle { kinds, next: 0 },
        }
    }

    /// Draw the kind of the next piece
    pub fn next_kind(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Uniform(rng) => *PieceKind::ALL.choose(rng).unwrap_or(&PieceKind::I),
            Source::Cycle { kinds, next } => {
                let kind = kinds[*next % kinds.len()];
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::from_entropy()
    }
}
