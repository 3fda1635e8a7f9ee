//! A minimal automated opponent. It deliberately has no evaluation: it
//! enumerates legal moves through the same public contract a UI goes
//! through and picks one uniformly at random. Exists to exercise the
//! engine boundary and to drive the demo frontend.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::game::GameState;
use crate::types::{MoveError, MoveOutcome, Square, PROMOTION_CHOICES};

pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new(seed: Option<u64>) -> RandomBot {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomBot { rng }
    }

    /// Pick a (from, to) uniformly over all legal moves of the side to
    /// move, or `None` when that side has none.
    pub fn choose(&mut self, game: &GameState) -> Option<(Square, Square)> {
        let mut candidates: Vec<(Square, Square)> = Vec::new();
        for from in Board::squares() {
            let set = game.legal_destinations(from);
            candidates.extend(set.moves.iter().map(|&to| (from, to)));
            candidates.extend(set.attacks.iter().map(|&to| (from, to)));
        }
        candidates.choose(&mut self.rng).copied()
    }

    /// Play one full turn: choose, apply, resolve a promotion if one
    /// comes up. Returns `Ok(false)` when the side to move has no legal
    /// move (the game is already classified as over).
    pub fn play_turn(&mut self, game: &mut GameState) -> Result<bool, MoveError> {
        let (from, to) = match self.choose(game) {
            Some(choice) => choice,
            None => return Ok(false),
        };
        if game.try_move(from, to)? == MoveOutcome::PromotionPending {
            let kind = *PROMOTION_CHOICES
                .choose(&mut self.rng)
                .expect("promotion choices are non-empty");
            game.promote_pawn(kind)?;
        }
        Ok(true)
    }
}
