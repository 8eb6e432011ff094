//! Five-in-a-row detection.
//!
//! Rather than counting outward from the last move, the detector walks the
//! four complete lines that pass through it (row, column and both diagonals)
//! and looks for any run of [`WIN_LENGTH`] of the mover's marks. Only the
//! newly placed cell can have created such a run on those lines, so a hit
//! anywhere on them means the move won.

use super::board::{Board, Cell, BOARD_SIZE};
use super::Player;

/// Marks in a row needed to win. Longer runs also win.
pub const WIN_LENGTH: usize = 5;

/// Check whether `player`, having just marked `(x, y)`, now has five in a row
pub fn has_won(board: &Board, player: Player, x: usize, y: usize) -> bool {
    let target = player.to_cell();
    let (x, y) = (x as isize, y as isize);
    let size = BOARD_SIZE as isize;

    let horizontal = (0..size).filter_map(|col| board.try_get(col, y));
    let vertical = (0..size).filter_map(|row| board.try_get(x, row));
    // Walk every row and keep the diagonal's cell only where its column
    // lands on the board; edge diagonals come out shorter.
    let main_diagonal = (0..size).filter_map(|row| board.try_get(x - y + row, row));
    let anti_diagonal = (0..size).filter_map(|row| board.try_get(x + y - row, row));

    contains_run(horizontal, target)
        || contains_run(vertical, target)
        || contains_run(main_diagonal, target)
        || contains_run(anti_diagonal, target)
}

fn contains_run(line: impl Iterator<Item = Cell>, target: Cell) -> bool {
    let mut run = 0;
    for cell in line {
        if cell == target {
            run += 1;
            if run >= WIN_LENGTH {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
