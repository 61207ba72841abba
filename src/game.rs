use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Coord, GameError, ShotOutcome},
    config::GameConfig,
};

/// How many times a dead-ended fleet layout is thrown away and redrawn.
pub const MAX_FLEET_RESTARTS: usize = 64;

/// Phase of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundPhase {
    /// Empty board, fleet not yet placed.
    Setup,
    /// Fleet placement under way.
    Placing,
    /// Accepting shots.
    InProgress,
    /// Every ship cell has been sunk.
    Won,
}

/// End-of-round summary handed to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSummary {
    pub shots: usize,
    pub ship_cells: usize,
}

/// Core round logic: one board, one fleet, one shot counter.
///
/// A new round means a new `GameEngine`; nothing carries over.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    phase: RoundPhase,
    shots: usize,
}

impl GameEngine {
    /// Create an engine in [`RoundPhase::Setup`] with an empty board.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let board = Board::try_new(config.board_size())?;
        Ok(Self {
            config,
            board,
            phase: RoundPhase::Setup,
            shots: 0,
        })
    }

    /// Build an engine and place its fleet, ready for the first shot.
    pub fn start_round<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self, GameError> {
        let mut engine = Self::new(config)?;
        engine.place_fleet(rng)?;
        Ok(engine)
    }

    /// Place every ship of the fleet, in order, using `rng`.
    ///
    /// If earlier ships leave no legal run for a later one, the board is
    /// cleared and the whole fleet redrawn, at most [`MAX_FLEET_RESTARTS`]
    /// times.
    pub fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.expect_phase(RoundPhase::Setup)?;
        self.phase = RoundPhase::Placing;

        let mut restarts = 0;
        loop {
            match self.try_place_fleet(rng) {
                Ok(()) => break,
                Err(BoardError::UnableToPlaceShip { length }) if restarts < MAX_FLEET_RESTARTS => {
                    restarts += 1;
                    log::debug!(
                        "no room for length {}, redrawing fleet (restart {})",
                        length,
                        restarts
                    );
                    self.board = Board::try_new(self.config.board_size())?;
                }
                Err(e) => {
                    self.board = Board::try_new(self.config.board_size())?;
                    self.phase = RoundPhase::Setup;
                    return Err(e.into());
                }
            }
        }

        log::debug!("fleet placed: {:?}", self.board.ships());
        self.phase = RoundPhase::InProgress;
        Ok(())
    }

    fn try_place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for &length in self.config.fleet() {
            let placement = self.board.random_placement(rng, length)?;
            self.board.place(placement)?;
        }
        Ok(())
    }

    /// Fire at `coord`.
    ///
    /// Only `Hit` and `Miss` count towards the shot total; a repeat or an
    /// out-of-bounds coordinate leaves the round unchanged.
    pub fn submit_shot(&mut self, coord: Coord) -> Result<ShotOutcome, GameError> {
        self.expect_phase(RoundPhase::InProgress)?;
        let outcome = self.board.resolve_shot(coord);
        log::debug!("shot at ({}, {}): {:?}", coord.row, coord.col, outcome);
        if outcome.counts() {
            self.shots += 1;
            if self.board.all_sunk() {
                self.phase = RoundPhase::Won;
                log::info!("round won in {} shots", self.shots);
            }
        }
        Ok(outcome)
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_won(&self) -> bool {
        self.phase == RoundPhase::Won
    }

    /// Counted shots this round.
    pub fn shot_count(&self) -> usize {
        self.shots
    }

    /// Read-only board for rendering.
    pub fn view(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Summary once the round is won, `None` before that.
    pub fn summary(&self) -> Option<RoundSummary> {
        self.is_won().then(|| RoundSummary {
            shots: self.shots,
            ship_cells: self.config.total_ship_cells(),
        })
    }
}
