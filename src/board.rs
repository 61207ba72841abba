//! Game board state: a square grid of cells plus the runs placed on it.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;
use rand::Rng;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::ship::{Orientation, Placement};

/// State of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    ShipIntact,
    Miss,
    ShipSunk,
}

impl Cell {
    /// Whether a shot has already resolved this cell.
    pub fn is_targeted(&self) -> bool {
        matches!(self, Cell::Miss | Cell::ShipSunk)
    }
}

/// Square `size × size` grid stored row-major, origin at the top-left.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Placement>,
}

impl Board {
    /// Create an empty board (every cell `Empty`, no ships placed).
    ///
    /// # Panics
    ///
    /// If `size * size` overflows `usize`; use [`Board::try_new`] for
    /// untrusted sizes.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(board) => board,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible constructor: returns `Err(TooLarge)` if `size * size` overflows.
    pub fn try_new(size: usize) -> Result<Self, BoardError> {
        let cells = size
            .checked_mul(size)
            .ok_or(BoardError::TooLarge { size })?;
        Ok(Board {
            size,
            cells: core::iter::repeat(Cell::Empty).take(cells).collect(),
            ships: Vec::new(),
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < self.size && coord.col < self.size {
            Some(coord.row * self.size + coord.col)
        } else {
            None
        }
    }

    /// Cell at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Runs placed so far, in placement order.
    pub fn ships(&self) -> &[Placement] {
        &self.ships
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks(0) panics; an empty board has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Owned copy of the grid for display.
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// True iff every cell of the run is in bounds and `Empty`.
    pub fn can_place(&self, placement: Placement) -> bool {
        placement.length > 0
            && placement.cells().all(|c| {
                c.and_then(|c| self.cell(c))
                    .is_some_and(|cell| cell == Cell::Empty)
            })
    }

    /// Mark the run as `ShipIntact`.
    ///
    /// The caller must have checked [`Board::can_place`]; a run that fails
    /// that check is rejected with [`BoardError::InvariantViolation`] and the
    /// board is left untouched.
    pub fn place(&mut self, placement: Placement) -> Result<(), BoardError> {
        if !self.can_place(placement) {
            return Err(BoardError::InvariantViolation(placement));
        }
        for coord in placement.cells().flatten() {
            if let Some(i) = self.index(coord) {
                self.cells[i] = Cell::ShipIntact;
            }
        }
        self.ships.push(placement);
        Ok(())
    }

    /// Every run of `length` that could be placed right now.
    pub fn legal_placements(&self, length: usize) -> impl Iterator<Item = Placement> + '_ {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .filter_map(move |orient| orient.max_start(self.size, length).map(|m| (orient, m)))
            .flat_map(move |(orient, (max_r, max_c))| {
                (0..=max_r).flat_map(move |r| {
                    (0..=max_c).map(move |c| Placement::new(Coord::new(r, c), length, orient))
                })
            })
            .filter(move |p| self.can_place(*p))
    }

    /// Draw a random legal run for a ship of `length`.
    ///
    /// Orientation is drawn first, then a start position uniformly from the
    /// range that keeps the run on the board; collisions are resampled. The
    /// loop only starts once at least one legal run is known to exist.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Placement, BoardError> {
        if length == 0 || length > self.size {
            return Err(BoardError::InvalidLength {
                length,
                board_size: self.size,
            });
        }
        if self.legal_placements(length).next().is_none() {
            return Err(BoardError::UnableToPlaceShip { length });
        }
        let mut attempts = 0usize;
        loop {
            attempts += 1;
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient.max_start(self.size, length) {
                Some(m) => m,
                None => continue,
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            let placement = Placement::new(Coord::new(r, c), length, orient);
            if self.can_place(placement) {
                log::trace!("placed length {} after {} draws", length, attempts);
                return Ok(placement);
            }
        }
    }

    /// Resolve a shot at `coord`, applying the cell transition.
    pub fn resolve_shot(&mut self, coord: Coord) -> ShotOutcome {
        let Some(i) = self.index(coord) else {
            return ShotOutcome::OutOfBounds;
        };
        match self.cells[i] {
            Cell::ShipIntact => {
                self.cells[i] = Cell::ShipSunk;
                ShotOutcome::Hit
            }
            Cell::Empty => {
                self.cells[i] = Cell::Miss;
                ShotOutcome::Miss
            }
            Cell::Miss | Cell::ShipSunk => ShotOutcome::AlreadyTargeted,
        }
    }

    /// Number of ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::ShipIntact).count()
    }

    /// Returns `true` when no `ShipIntact` cell remains.
    pub fn all_sunk(&self) -> bool {
        !self.cells.contains(&Cell::ShipIntact)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}> {{", self.size)?;
        for row in self.rows() {
            write!(f, "  ")?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::ShipIntact => '■',
                    Cell::Miss => 'o',
                    Cell::ShipSunk => 'x',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "  ships: {:?}\n}}", self.ships)
    }
}
