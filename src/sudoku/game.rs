/*
game.rs

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

//! Manage the status of a Sudoku game in progress.

use std::time::{Duration, Instant};

use super::Difficulty;
use super::board::{Board, GRID_SIZE};
use super::generator::{Generator, Puzzle};
use super::solver::{self, SolveStep};

/// Starting score for a new puzzle.
const START_SCORE: u32 = 1000;

/// Points deducted when the player asks for a board check or a hint.
const ASSIST_COST: u32 = 10;

/// Maximum time bonus awarded on completion.
const TIME_BONUS: u64 = 500;

/// State of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Waiting,
    Playing,
    Solving,
    Complete,
}

/// Manage the status of the Sudoku game in progress.
pub struct Game {
    /// The puzzle board being played.
    pub board: Board,

    /// The solution the puzzle was generated with.
    solution: [[u8; GRID_SIZE]; GRID_SIZE],

    /// Difficulty of the current puzzle.
    pub difficulty: Difficulty,

    /// Current score.
    score: u32,

    /// Number of board checks the player requested.
    pub checks_used: usize,

    /// Number of hints the player requested.
    pub hints_used: usize,

    /// Current state of the game.
    state: GameState,

    /// Time when the game started. Used to compute the game duration.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,
}

impl Game {
    /// Start a new game at the given difficulty level.
    pub fn new(difficulty: Difficulty) -> Self {
        let puzzle: Puzzle = Generator::new().generate(difficulty);
        Self {
            board: puzzle.board,
            solution: puzzle.solution,
            difficulty,
            score: START_SCORE,
            checks_used: 0,
            hints_used: 0,
            state: GameState::Playing,
            start_time: Instant::now(),
            pause_duration: None,
        }
    }

    /// Return the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Return the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Enter a digit in a cell. A value of 0 empties the cell.
    ///
    /// The move is rejected when the game is not in progress, when the cell
    /// is a given from the original puzzle, or when the value is out of
    /// range. Completing the board ends the game and adds the time bonus.
    pub fn enter(&mut self, row: usize, col: usize, value: u8) -> bool {
        if self.state != GameState::Playing || value > 9 {
            return false;
        }
        if row >= GRID_SIZE || col >= GRID_SIZE || self.board.is_original(row, col) {
            return false;
        }
        self.board.set(row, col, value);
        if value != 0 {
            self.check_completion();
        }
        true
    }

    /// Check the board for conflicts. Costs [`ASSIST_COST`] points.
    pub fn check(&mut self) -> Vec<(usize, usize)> {
        if self.state != GameState::Playing {
            return Vec::new();
        }
        self.checks_used += 1;
        self.score = self.score.saturating_sub(ASSIST_COST);
        self.board.conflicts()
    }

    /// Fill the first empty cell with its solution value. Costs
    /// [`ASSIST_COST`] points. Return the filled cell, or None when the
    /// board is full or the game is over.
    pub fn hint(&mut self) -> Option<(usize, usize, u8)> {
        if self.state != GameState::Playing {
            return None;
        }
        let (row, col, value) = self.board.hint(&self.solution)?;
        self.hints_used += 1;
        self.score = self.score.saturating_sub(ASSIST_COST);
        self.board.set(row, col, value);
        self.check_completion();
        Some((row, col, value))
    }

    /// Restore the board to the original puzzle.
    pub fn reset(&mut self) {
        if self.state == GameState::Solving {
            return;
        }
        self.board.reset_to_original();
        if self.state == GameState::Complete {
            self.state = GameState::Playing;
        }
    }

    /// Solve the puzzle automatically and return the step trace for the
    /// animation. The board is reset to the original puzzle first, and the
    /// score drops to zero.
    pub fn auto_solve(&mut self) -> Vec<SolveStep> {
        if self.state != GameState::Playing {
            return Vec::new();
        }
        self.state = GameState::Solving;
        self.board.reset_to_original();

        let mut board: Board = self.board.clone();
        // Generated puzzles are always solvable
        let steps: Vec<SolveStep> = solver::solve(&mut board).unwrap_or_default();
        self.board = board;
        self.score = 0;
        self.state = GameState::Complete;
        steps
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        if self.state == GameState::Playing && self.pause_duration.is_none() {
            self.pause_duration = Some(self.start_time.elapsed());
        }
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        // Refresh the game elapsed time by removing the pause time.
        if let Some(d) = self.pause_duration.take() {
            self.start_time += self.start_time.elapsed() - d;
        }
    }

    /// Return the game duration.
    pub fn duration(&self) -> Duration {
        match self.pause_duration {
            Some(d) => d,
            None => self.start_time.elapsed(),
        }
    }

    /// Mark the game complete and award the time bonus when the board is
    /// correctly filled.
    fn check_completion(&mut self) {
        if self.board.is_complete() {
            self.state = GameState::Complete;
            let elapsed: u64 = self.start_time.elapsed().as_secs();
            self.score += TIME_BONUS.saturating_sub(elapsed) as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn givens_cannot_be_edited() {
        let mut game: Game = Game::new(Difficulty::Easy);
        let mut given: Option<(usize, usize)> = None;
        'outer: for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if game.board.is_original(row, col) {
                    given = Some((row, col));
                    break 'outer;
                }
            }
        }
        let (row, col) = given.expect("a puzzle always has givens");
        let before: u8 = game.board.get(row, col);
        assert!(!game.enter(row, col, 1));
        assert_eq!(game.board.get(row, col), before);
    }

    #[test]
    fn check_and_hint_cost_points() {
        let mut game: Game = Game::new(Difficulty::Easy);
        assert_eq!(game.score(), START_SCORE);
        game.check();
        assert_eq!(game.score(), START_SCORE - ASSIST_COST);
        let hint = game.hint();
        assert!(hint.is_some());
        assert_eq!(game.score(), START_SCORE - 2 * ASSIST_COST);
        assert_eq!(game.checks_used, 1);
        assert_eq!(game.hints_used, 1);
    }

    #[test]
    fn hints_alone_complete_the_puzzle() {
        let mut game: Game = Game::new(Difficulty::Easy);
        while game.state() == GameState::Playing {
            assert!(game.hint().is_some());
        }
        assert_eq!(game.state(), GameState::Complete);
        assert!(game.board.is_complete());
    }

    #[test]
    fn auto_solve_zeroes_the_score() {
        let mut game: Game = Game::new(Difficulty::Medium);
        let steps: Vec<SolveStep> = game.auto_solve();
        assert!(!steps.is_empty());
        assert_eq!(game.score(), 0);
        assert_eq!(game.state(), GameState::Complete);
        assert!(game.board.is_complete());
    }

    #[test]
    fn moves_rejected_after_completion() {
        let mut game: Game = Game::new(Difficulty::Easy);
        game.auto_solve();
        assert!(!game.enter(0, 0, 5));
        assert!(game.hint().is_none());
    }
}
