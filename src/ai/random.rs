use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::EngineError;
use crate::game::{Game, Move};

use super::engine::Engine;

/// An engine that selects uniformly at random from legal moves.
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn select_move(&mut self, game: &Game) -> Result<Move, EngineError> {
        let moves = game.legal_moves();
        if moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }
        Ok(moves[self.rng.random_range(0..moves.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
