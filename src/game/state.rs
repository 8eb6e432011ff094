use super::board::{Board, Cell};
use super::cursor::{Cursor, Direction};
use super::win::has_won;
use super::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

/// What a call to [`GameState::place_mark`] did. Refused placements leave the
/// session untouched and are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Mark written, turn passed to the other player
    Placed,
    /// Mark written and it completed five in a row
    Won,
    /// Cell under the cursor already holds a mark
    Occupied,
    /// The game has already been won
    GameOver,
}

/// Everything a renderer needs, copied out of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub cursor: Cursor,
    pub current_player: Player,
    pub status: GameStatus,
    pub message: String,
}

/// One play session: board, cursor, whose turn it is, and whether someone
/// has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    cursor: Cursor,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            cursor: Cursor::START,
            current_player: Player::A, // A starts
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }

    /// Move the cursor one cell. Still allowed after a win so the players can
    /// look over the final board.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor.step(direction);
    }

    /// Put the current player's mark under the cursor
    pub fn place_mark(&mut self) -> Placement {
        if self.is_over() {
            return Placement::GameOver;
        }

        let (x, y) = (self.cursor.x(), self.cursor.y());
        let player = self.current_player;
        if !self.board.set_if_empty(x, y, player.to_cell()) {
            return Placement::Occupied;
        }

        if has_won(&self.board, player, x, y) {
            // Winner keeps the turn so the status line names them
            self.status = GameStatus::Won(player);
            Placement::Won
        } else {
            self.current_player = player.other();
            Placement::Placed
        }
    }

    /// Start over: empty board, centred cursor, A to move
    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    pub fn status_message(&self) -> String {
        let mark = self.current_player.mark();
        match self.status {
            GameStatus::InProgress => format!("{mark} is to move"),
            GameStatus::Won(winner) => format!("{} has won", winner.mark()),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            cursor: self.cursor,
            current_player: self.current_player,
            status: self.status,
            message: self.status_message(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl Snapshot {
    /// Cell at column `x`, row `y`; both must be below [`crate::game::BOARD_SIZE`]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.board.get(x, y)
    }

    pub fn is_cursor(&self, x: usize, y: usize) -> bool {
        self.cursor.x() == x && self.cursor.y() == y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BOARD_SIZE;

    /// Walk the cursor to `(x, y)` using single steps, as a player would
    fn move_to(state: &mut GameState, x: usize, y: usize) {
        while state.cursor().x() < x {
            state.move_cursor(Direction::Right);
        }
        while state.cursor().x() > x {
            state.move_cursor(Direction::Left);
        }
        while state.cursor().y() < y {
            state.move_cursor(Direction::Down);
        }
        while state.cursor().y() > y {
            state.move_cursor(Direction::Up);
        }
    }

    fn play(state: &mut GameState, x: usize, y: usize) -> Placement {
        move_to(state, x, y);
        state.place_mark()
    }

    /// A plays `a_moves`, B answers with `b_moves` in between
    fn play_alternating(
        state: &mut GameState,
        a_moves: &[(usize, usize)],
        b_moves: &[(usize, usize)],
    ) -> Placement {
        let mut last = Placement::Placed;
        for (i, &(x, y)) in a_moves.iter().enumerate() {
            last = play(state, x, y);
            if let Some(&(bx, by)) = b_moves.get(i) {
                if last == Placement::Placed {
                    play(state, bx, by);
                }
            }
        }
        last
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.cursor(), Cursor::new(7, 7));
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.status_message(), "o is to move");
    }

    #[test]
    fn test_place_mark_alternates_turn() {
        let mut state = GameState::initial();
        assert_eq!(state.place_mark(), Placement::Placed);
        assert_eq!(state.board().get(7, 7), Cell::A);
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.status_message(), "x is to move");

        assert_eq!(play(&mut state, 7, 8), Placement::Placed);
        assert_eq!(state.board().get(7, 8), Cell::B);
        assert_eq!(state.current_player(), Player::A);
    }

    #[test]
    fn test_place_on_occupied_cell_is_ignored() {
        let mut state = GameState::initial();
        state.place_mark();
        let before = state;

        assert_eq!(state.place_mark(), Placement::Occupied);
        assert_eq!(state.place_mark(), Placement::Occupied);
        assert_eq!(state, before);
    }

    #[test]
    fn test_horizontal_win() {
        let mut state = GameState::initial();
        let a: Vec<_> = (0..5).map(|x| (x, 7)).collect();
        let b: Vec<_> = (0..4).map(|x| (x, 0)).collect();

        assert_eq!(play_alternating(&mut state, &a, &b), Placement::Won);
        assert_eq!(state.status(), GameStatus::Won(Player::A));
        assert_eq!(state.cursor(), Cursor::new(4, 7));
        assert_eq!(state.status_message(), "o has won");
    }

    #[test]
    fn test_vertical_win_for_b() {
        let mut state = GameState::initial();
        let a = [(0, 0), (2, 0), (4, 0), (6, 0), (8, 0), (10, 0)];
        let b: Vec<_> = (5..10).map(|y| (12, y)).collect();

        for i in 0..5 {
            assert_eq!(play(&mut state, a[i].0, a[i].1), Placement::Placed);
            let expected = if i == 4 { Placement::Won } else { Placement::Placed };
            assert_eq!(play(&mut state, b[i].0, b[i].1), expected);
        }
        assert_eq!(state.status(), GameStatus::Won(Player::B));
        assert_eq!(state.status_message(), "x has won");
    }

    #[test]
    fn test_diagonal_wins() {
        let mut state = GameState::initial();
        let a: Vec<_> = (0..5).map(|i| (2 + i, 6 + i)).collect();
        let b: Vec<_> = (0..4).map(|i| (i, 0)).collect();
        assert_eq!(play_alternating(&mut state, &a, &b), Placement::Won);
        assert_eq!(state.status(), GameStatus::Won(Player::A));

        state.reset();
        let a: Vec<_> = (0..5).map(|i| (13 - i, 1 + i)).collect();
        assert_eq!(play_alternating(&mut state, &a, &b), Placement::Won);
        assert_eq!(state.status(), GameStatus::Won(Player::A));
    }

    #[test]
    fn test_four_does_not_win() {
        let mut state = GameState::initial();
        let a: Vec<_> = (0..4).map(|i| (3 + i, 3 + i)).collect();
        let b: Vec<_> = (0..4).map(|i| (i, 14)).collect();
        play_alternating(&mut state, &a, &b);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_winning_placement_keeps_turn() {
        let mut state = GameState::initial();
        let a: Vec<_> = (0..5).map(|x| (x, 7)).collect();
        let b: Vec<_> = (0..4).map(|x| (x, 0)).collect();
        play_alternating(&mut state, &a, &b);
        assert_eq!(state.current_player(), Player::A);
    }

    #[test]
    fn test_no_placement_after_win() {
        let mut state = GameState::initial();
        let a: Vec<_> = (0..5).map(|x| (x, 7)).collect();
        let b: Vec<_> = (0..4).map(|x| (x, 0)).collect();
        play_alternating(&mut state, &a, &b);

        move_to(&mut state, 10, 10);
        let before = *state.board();
        assert_eq!(state.place_mark(), Placement::GameOver);
        assert_eq!(state.board(), &before);
        assert_eq!(state.status(), GameStatus::Won(Player::A));
        assert_eq!(state.current_player(), Player::A);
    }

    #[test]
    fn test_cursor_moves_after_win() {
        let mut state = GameState::initial();
        let a: Vec<_> = (0..5).map(|x| (x, 7)).collect();
        let b: Vec<_> = (0..4).map(|x| (x, 0)).collect();
        play_alternating(&mut state, &a, &b);

        state.move_cursor(Direction::Up);
        assert_eq!(state.cursor(), Cursor::new(4, 6));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = GameState::initial();
        let a: Vec<_> = (0..5).map(|x| (x, 7)).collect();
        let b: Vec<_> = (0..4).map(|x| (x, 0)).collect();
        play_alternating(&mut state, &a, &b);
        move_to(&mut state, 0, 14);

        state.reset();
        assert_eq!(state, GameState::initial());

        // Mid-game reset as well
        state.place_mark();
        state.move_cursor(Direction::Left);
        state.reset();
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_alternation_follows_move_count() {
        let mut state = GameState::initial();
        play(&mut state, 7, 7); // A
        play(&mut state, 7, 8); // B
        play(&mut state, 6, 7); // A
        play(&mut state, 0, 0); // B
        play(&mut state, 8, 7); // A
        play(&mut state, 0, 1); // B
        play(&mut state, 5, 7); // A

        for (x, y) in [(7, 7), (6, 7), (8, 7), (5, 7)] {
            assert_eq!(state.board().get(x, y), Cell::A);
        }
        assert_eq!(state.board().get(7, 8), Cell::B);
        assert_eq!(state.board().filled(), 7);
        // Seven non-winning placements: B is next
        assert_eq!(state.current_player(), Player::B);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_failed_placement_does_not_flip_turn() {
        let mut state = GameState::initial();
        state.place_mark();
        assert_eq!(state.current_player(), Player::B);
        state.place_mark();
        assert_eq!(state.current_player(), Player::B);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut state = GameState::initial();
        state.place_mark();
        let snapshot = state.snapshot();

        state.move_cursor(Direction::Right);
        state.place_mark();

        assert_eq!(snapshot.cell(7, 7), Cell::A);
        assert_eq!(snapshot.cell(8, 7), Cell::Empty);
        assert!(snapshot.is_cursor(7, 7));
        assert_eq!(snapshot.current_player, Player::B);
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot.message, "x is to move");
        assert_eq!(snapshot.cell(BOARD_SIZE - 1, BOARD_SIZE - 1), Cell::Empty);
    }
}
