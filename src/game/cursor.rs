use super::board::BOARD_SIZE;

const MAX: usize = BOARD_SIZE - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Selected cell. Both axes stay within `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: usize,
    y: usize,
}

impl Cursor {
    /// Centre of the board, where every session starts
    pub const START: Cursor = Cursor { x: 7, y: 7 };

    /// Build a cursor, clamping both coordinates onto the board
    pub fn new(x: usize, y: usize) -> Self {
        Cursor {
            x: x.min(MAX),
            y: y.min(MAX),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Step one cell, staying put at the edge
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.y = self.y.saturating_sub(1),
            Direction::Down => self.y = (self.y + 1).min(MAX),
            Direction::Left => self.x = self.x.saturating_sub(1),
            Direction::Right => self.x = (self.x + 1).min(MAX),
        }
    }
}
