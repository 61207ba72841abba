//! Outer game loop: one fresh engine per round until the player stops.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    common::GameError,
    config::GameConfig,
    game::{GameEngine, RoundSummary},
    player::Player,
};

/// Outcome of a whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    /// Rounds played to a win, in order.
    pub rounds: Vec<RoundSummary>,
    /// Set when the player stopped supplying targets mid-round.
    pub abandoned: bool,
}

/// Drive a placed round until it is won or the player gives up.
///
/// Returns `Ok(None)` if the player stops supplying targets.
pub fn play_round<P: Player + ?Sized>(
    engine: &mut GameEngine,
    player: &mut P,
    rng: &mut SmallRng,
) -> Result<Option<RoundSummary>, GameError> {
    while !engine.is_won() {
        let Some(coord) = player.select_target(rng, engine.view()) else {
            return Ok(None);
        };
        let outcome = engine.submit_shot(coord)?;
        player.handle_shot_result(coord, outcome);
    }
    let summary = engine.summary();
    if let Some(summary) = summary {
        player.handle_round_won(summary);
    }
    Ok(summary)
}

/// Play rounds with `config` until `player` declines another.
///
/// Every round draws its layout from the same `rng`, so consecutive rounds
/// get independent fleets.
pub fn run_session<P: Player + ?Sized>(
    config: &GameConfig,
    player: &mut P,
    rng: &mut SmallRng,
) -> Result<SessionSummary, GameError> {
    let mut session = SessionSummary::default();
    loop {
        let mut engine = GameEngine::start_round(config.clone(), rng)?;
        match play_round(&mut engine, player, rng)? {
            Some(summary) => session.rounds.push(summary),
            None => {
                session.abandoned = true;
                break;
            }
        }
        if !player.play_again() {
            break;
        }
    }
    log::info!(
        "session over after {} rounds{}",
        session.rounds.len(),
        if session.abandoned { " (abandoned)" } else { "" }
    );
    Ok(session)
}
