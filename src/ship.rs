//! Ship runs: orientation, start cell and length.

use core::fmt;

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step `(d_row, d_col)` along the run.
    pub fn direction(&self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    /// Largest legal start `(row, col)` for a run of `length` on a `size` board.
    ///
    /// Horizontal runs may start on any row but only up to column
    /// `size - length`; vertical runs are the transpose. Returns `None` when
    /// the run cannot fit at all.
    pub fn max_start(&self, size: usize, length: usize) -> Option<(usize, usize)> {
        if length == 0 || length > size {
            return None;
        }
        Some(match self {
            Orientation::Horizontal => (size - 1, size - length),
            Orientation::Vertical => (size - length, size - 1),
        })
    }
}

/// A straight run of `length` cells beginning at `start`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub start: Coord,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(start: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            start,
            length,
            orientation,
        }
    }

    /// Cells of the run, `start + i * direction` for `i in 0..length`.
    ///
    /// Yields `None` for a step that would overflow `usize`; callers treat
    /// that the same as out of bounds.
    pub fn cells(&self) -> impl Iterator<Item = Option<Coord>> + '_ {
        let (dr, dc) = self.orientation.direction();
        (0..self.length).map(move |i| {
            let row = self.start.row.checked_add(i * dr)?;
            let col = self.start.col.checked_add(i * dc)?;
            Some(Coord::new(row, col))
        })
    }

    /// Whether the run covers `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == Some(coord))
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placement {{ start: ({}, {}), length: {}, orientation: {:?} }}",
            self.start.row, self.start.col, self.length, self.orientation
        )
    }
}
