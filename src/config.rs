//! Default board dimension, fleet, and the runtime round configuration.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::common::ConfigError;

pub const BOARD_SIZE: usize = 7;
/// Largest board whose columns can still be named by a single letter.
pub const MAX_BOARD_SIZE: usize = 26;
pub const NUM_SHIPS: usize = 7;
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in the default fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Board dimension and ordered fleet for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    board_size: usize,
    fleet: Vec<usize>,
}

impl GameConfig {
    /// Build a configuration, rejecting fleets that cannot fit the board.
    pub fn new(board_size: usize, fleet: Vec<usize>) -> Result<Self, ConfigError> {
        let config = Self { board_size, fleet };
        config.validate()?;
        Ok(config)
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Ship lengths in placement order.
    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Sum of all ship lengths.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }

    /// Check the board is non-empty and every ship fits, alone and together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                board_size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        for &length in &self.fleet {
            if length == 0 || length > self.board_size {
                return Err(ConfigError::ShipLength {
                    length,
                    board_size: self.board_size,
                });
            }
        }
        let cells = self
            .fleet
            .iter()
            .try_fold(0usize, |acc, &len| acc.checked_add(len))
            .unwrap_or(usize::MAX);
        let capacity = self.board_size * self.board_size;
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
        }
    }
}
