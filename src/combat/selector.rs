use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::combat::state::Combatant;

/// Capability for choosing which move a combatant uses on its turn.
///
/// Implementations must return an index into `combatant.moves`; the move
/// list is guaranteed non-empty by catalog validation. Interactive
/// implementations handle invalid input themselves by re-prompting.
pub trait MoveSelector {
    fn select_move(&mut self, combatant: &Combatant) -> usize;
}

/// Uniform-random move selection, used for the automated opponent.
#[derive(Debug)]
pub struct RandomSelector {
    rng: SmallRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        RandomSelector {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, combatant: &Combatant) -> usize {
        self.rng.gen_range(0..combatant.moves.len())
    }
}
