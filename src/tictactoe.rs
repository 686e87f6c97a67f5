/*
tictactoe.rs

Copyright 2026 Gamebox contributors

This file is part of Gamebox.

Gamebox is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gamebox is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gamebox. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Two-player tic-tac-toe with a session score tally.

/// The eight winning lines, as cell indexes of the 3x3 board.
const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The two players. O plays first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    O,
    X,
}

impl Player {
    /// The other player.
    fn other(&self) -> Player {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }
}

/// Result of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was rejected (occupied cell or finished round).
    Rejected,

    /// The move was played; the round continues.
    Placed,

    /// The move won the round along the given line.
    Won([usize; 3]),

    /// The move filled the board without a winner.
    Draw,
}

/// Tic-tac-toe round and session state.
pub struct Game {
    /// The nine cells, row-major.
    board: [Option<Player>; 9],

    /// The player whose turn it is.
    current: Player,

    /// Whether the round is finished.
    round_over: bool,

    /// Rounds won by O in this session.
    pub score_o: u32,

    /// Rounds won by X in this session.
    pub score_x: u32,

    /// Drawn rounds in this session.
    pub score_draw: u32,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a [`Game`] object.
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            current: Player::O,
            round_over: false,
            score_o: 0,
            score_x: 0,
            score_draw: 0,
        }
    }

    /// Return the board cells.
    pub fn board(&self) -> &[Option<Player>; 9] {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Whether the round is finished.
    pub fn is_round_over(&self) -> bool {
        self.round_over
    }

    /// Place the current player's mark on a cell.
    ///
    /// Occupied cells and finished rounds reject the move. A winning move
    /// updates the session tally and reports the winning line; filling the
    /// board without a winner is a draw.
    pub fn place(&mut self, cell: usize) -> MoveOutcome {
        if self.round_over || cell >= 9 || self.board[cell].is_some() {
            return MoveOutcome::Rejected;
        }
        self.board[cell] = Some(self.current);

        if let Some(line) = self.winning_line() {
            self.round_over = true;
            match self.current {
                Player::O => self.score_o += 1,
                Player::X => self.score_x += 1,
            }
            return MoveOutcome::Won(line);
        }

        if self.board.iter().all(|c| c.is_some()) {
            self.round_over = true;
            self.score_draw += 1;
            return MoveOutcome::Draw;
        }

        self.current = self.current.other();
        MoveOutcome::Placed
    }

    /// Return the winning line of the current player, if any.
    fn winning_line(&self) -> Option<[usize; 3]> {
        WINNING_LINES.into_iter().find(|line| {
            line.iter()
                .all(|cell| self.board[*cell] == Some(self.current))
        })
    }

    /// Start a new round. The session tally is kept and O plays first.
    pub fn restart(&mut self) {
        self.board = [None; 9];
        self.current = Player::O;
        self.round_over = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn o_plays_first_and_turns_alternate() {
        let mut game: Game = Game::new();
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.place(4), MoveOutcome::Placed);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let mut game: Game = Game::new();
        game.place(4);
        assert_eq!(game.place(4), MoveOutcome::Rejected);
        // The turn does not change on a rejected move
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn row_win_reports_the_line_and_scores() {
        let mut game: Game = Game::new();
        game.place(0); // O
        game.place(3); // X
        game.place(1); // O
        game.place(4); // X
        assert_eq!(game.place(2), MoveOutcome::Won([0, 1, 2]));
        assert!(game.is_round_over());
        assert_eq!(game.score_o, 1);
        assert_eq!(game.place(5), MoveOutcome::Rejected);
    }

    #[test]
    fn anti_diagonal_win_for_x() {
        let mut game: Game = Game::new();
        game.place(0); // O
        game.place(2); // X
        game.place(1); // O
        game.place(4); // X
        game.place(5); // O
        assert_eq!(game.place(6), MoveOutcome::Won([2, 4, 6]));
        assert_eq!(game.score_x, 1);
    }

    #[test]
    fn full_board_without_winner_is_a_draw() {
        let mut game: Game = Game::new();
        // O X O / O X X / X O O
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            let outcome: MoveOutcome = game.place(cell);
            assert_ne!(outcome, MoveOutcome::Rejected);
        }
        assert!(game.is_round_over());
        assert_eq!(game.score_draw, 1);
    }

    #[test]
    fn restart_keeps_the_tally() {
        let mut game: Game = Game::new();
        game.place(0);
        game.place(3);
        game.place(1);
        game.place(4);
        game.place(2); // O wins
        game.restart();
        assert_eq!(game.score_o, 1);
        assert_eq!(game.current_player(), Player::O);
        assert!(game.board().iter().all(|c| c.is_none()));
    }
}
