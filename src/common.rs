//! Common types for the game: coordinates, shot outcomes and error enums.

use core::fmt;

use crate::ship::Placement;

/// A `(row, col)` position on the board, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    /// Player-facing form, e.g. `B5` for row 4, column 1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.col).ok().filter(|c| *c < 26) {
            Some(c) => write!(f, "{}{}", (b'A' + c) as char, self.row + 1),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Result of resolving a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// An intact ship cell was struck and is now sunk.
    Hit,
    /// Open water; the cell is now marked as a miss.
    Miss,
    /// The cell was resolved earlier. Nothing changed.
    AlreadyTargeted,
    /// The coordinate lies outside the board. Nothing changed.
    OutOfBounds,
}

impl ShotOutcome {
    /// Whether the shot consumed a turn.
    pub fn counts(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Miss)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// `place` was called for a run that `can_place` rejects.
    InvariantViolation(Placement),
    /// Ship length is zero or longer than the board.
    InvalidLength { length: usize, board_size: usize },
    /// No legal run remains for a ship of this length.
    UnableToPlaceShip { length: usize },
    /// `size * size` cells do not fit in `usize`.
    TooLarge { size: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvariantViolation(p) => write!(
                f,
                "Invariant violation: cannot place length {} {:?} run at {}",
                p.length, p.orientation, p.start
            ),
            BoardError::InvalidLength { length, board_size } => write!(
                f,
                "Ship length {} is invalid on a {}x{} board",
                length, board_size, board_size
            ),
            BoardError::UnableToPlaceShip { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            BoardError::TooLarge { size } => {
                write!(f, "Board of size {} has too many cells", size)
            }
        }
    }
}

/// Errors raised while validating a [`GameConfig`](crate::GameConfig).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyBoard,
    /// Board wider than the column letters `A..=Z`.
    BoardTooLarge { board_size: usize, max: usize },
    EmptyFleet,
    ShipLength { length: usize, board_size: usize },
    FleetTooLarge { cells: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "Board size must be at least 1"),
            ConfigError::BoardTooLarge { board_size, max } => write!(
                f,
                "Board size {} exceeds the maximum of {}",
                board_size, max
            ),
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::ShipLength { length, board_size } => write!(
                f,
                "Ship length {} does not fit a board of size {}",
                length, board_size
            ),
            ConfigError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
        }
    }
}

/// Errors returned by the round engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Config(ConfigError),
    /// Operation not allowed in the current phase of the round.
    WrongPhase {
        expected: crate::game::RoundPhase,
        actual: crate::game::RoundPhase,
    },
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Config(e) => write!(f, "Config error: {}", e),
            GameError::WrongPhase { expected, actual } => write!(
                f,
                "Round is {:?}, operation requires {:?}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            GameError::Config(e) => Some(e),
            GameError::WrongPhase { .. } => None,
        }
    }
}
