use crate::BOMB_PROBABILITY;
use crate::game::GameState;
use crate::game::Move;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Random opponent. Holds its bomb until a coin flip at
/// [`BOMB_PROBABILITY`] says to spend it, then plays uniformly
/// over the standard moves for the rest of the game.
pub struct Robot<R = SmallRng> {
    rng: R,
}

impl Default for Robot {
    fn default() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> Robot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick this round's move, marking the bomb as spent on `state` if drawn.
    pub fn choose(&mut self, state: &mut GameState) -> Move {
        if !state.bomb_used_by_bot() && self.rng.random_bool(BOMB_PROBABILITY) {
            log::debug!("bot spends its bomb in round {}", state.upcoming_round());
            state.mark_special_used_by_bot();
            return Move::Bomb;
        }
        let ref mut rng = self.rng;
        Move::STANDARD
            .choose(rng)
            .copied()
            .unwrap_or(Move::Rock)
    }
}
