use super::Player;

pub const BOARD_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    /// Player whose mark occupies this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Player::A),
            Cell::B => Some(Player::B),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A 15x15 grid addressed as `(x, y)`: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the cell at column `x`, row `y`
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not below [`BOARD_SIZE`]; see [`Board::try_get`].
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    /// Like [`Board::get`], but `None` for coordinates off the grid
    pub fn try_get(&self, x: isize, y: isize) -> Option<Cell> {
        if Self::in_bounds(x, y) {
            Some(self.cells[y as usize][x as usize])
        } else {
            None
        }
    }

    pub fn in_bounds(x: isize, y: isize) -> bool {
        (0..BOARD_SIZE as isize).contains(&x) && (0..BOARD_SIZE as isize).contains(&y)
    }

    /// Write `cell` at `(x, y)` if that cell is still empty.
    /// Returns whether the board changed.
    pub fn set_if_empty(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        let slot = &mut self.cells[y][x];
        if !slot.is_empty() {
            return false;
        }
        *slot = cell;
        true
    }

    /// Number of marked cells
    #[cfg(test)]
    pub(crate) fn filled(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
