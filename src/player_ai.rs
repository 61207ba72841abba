#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use rand::{rngs::SmallRng, Rng};

use crate::{
    board::Board,
    common::{Coord, ShotOutcome},
    game::RoundSummary,
    player::Player,
};

/// Automated player that fires uniformly at cells not yet targeted.
pub struct RandomPlayer {
    rounds_left: usize,
    results: Vec<RoundSummary>,
}

impl RandomPlayer {
    /// A player that keeps going until it has won `rounds` rounds.
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds_left: rounds,
            results: Vec::new(),
        }
    }

    /// Summaries of the rounds won so far.
    pub fn results(&self) -> &[RoundSummary] {
        &self.results
    }
}

impl Player for RandomPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, view: &Board) -> Option<Coord> {
        let open: Vec<Coord> = (0..view.size())
            .flat_map(|r| (0..view.size()).map(move |c| Coord::new(r, c)))
            .filter(|c| view.cell(*c).is_some_and(|cell| !cell.is_targeted()))
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[rng.random_range(0..open.len())])
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: ShotOutcome) {
        log::trace!("random player fired at {}: {:?}", coord, outcome);
    }

    fn handle_round_won(&mut self, summary: RoundSummary) {
        self.results.push(summary);
        self.rounds_left = self.rounds_left.saturating_sub(1);
    }

    fn play_again(&mut self) -> bool {
        self.rounds_left > 0
    }
}
