use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Coord, ShotOutcome},
    game::RoundSummary,
};

/// Interface implemented by whoever is taking the shots.
pub trait Player {
    /// Choose the next target given the visible board. `None` ends the
    /// session (e.g. end of input).
    fn select_target(&mut self, rng: &mut SmallRng, view: &Board) -> Option<Coord>;

    /// Inform the player of the outcome of its last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _outcome: ShotOutcome) {}

    /// Inform the player that the round was won.
    fn handle_round_won(&mut self, _summary: RoundSummary) {}

    /// Whether another round should follow.
    fn play_again(&mut self) -> bool {
        false
    }
}
