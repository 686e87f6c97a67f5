/*
generator.rs

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

//! Generate random Sudoku puzzles.
//!
//! The generator fills an empty grid with a randomized backtracking search,
//! keeps the completed grid as the solution, and then removes a number of
//! cells that depends on the difficulty level.

use log::debug;
use rand::seq::SliceRandom;
use std::time::Instant;

use super::Difficulty;
use super::board::{Board, GRID_SIZE};

/// A generated puzzle together with its solution.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// The puzzle board. The remaining cells are frozen as givens.
    pub board: Board,

    /// The completed grid the puzzle was carved from.
    pub solution: [[u8; GRID_SIZE]; GRID_SIZE],

    /// Difficulty level the puzzle was generated for.
    pub difficulty: Difficulty,
}

/// Sudoku puzzle generator.
pub struct Generator {
    /// Number of recursive calls it took to fill the last grid.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last puzzle.
    pub duration: f32,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a [`Generator`] object.
    pub fn new() -> Self {
        Self {
            iteration: 0,
            duration: 0.0,
        }
    }

    /// Generate a puzzle for the given difficulty level.
    ///
    /// The grid is first completely filled by trying the digits 1 to 9 in a
    /// random order for each empty cell, backtracking on dead ends. The
    /// search always terminates: an empty grid is always solvable. The
    /// completed grid is saved as the solution, and then
    /// [`Difficulty::cells_to_remove`] shuffled cells are emptied. Removing
    /// cells never touches the saved solution.
    pub fn generate(&mut self, difficulty: Difficulty) -> Puzzle {
        self.iteration = 0;
        let start: Instant = Instant::now();

        let mut board: Board = Board::new();
        // Cannot fail on an empty grid
        self.fill(&mut board);
        let solution: [[u8; GRID_SIZE]; GRID_SIZE] = board.grid();

        self.remove_cells(&mut board, difficulty.cells_to_remove());
        board.save_as_original();

        self.duration = start.elapsed().as_secs_f32();
        debug!(
            "Generated a {difficulty} puzzle: iterations = {}  duration = {}s",
            self.iteration, self.duration
        );

        Puzzle {
            board,
            solution,
            difficulty,
        }
    }

    /// Recursively fill the board. Return `true` when the grid is complete.
    fn fill(&mut self, board: &mut Board) -> bool {
        let (row, col) = match board.find_empty() {
            Some(cell) => cell,
            None => return true,
        };

        self.iteration += 1;

        let mut digits: [u8; GRID_SIZE] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(&mut rand::rng());

        for digit in digits {
            if board.is_valid(row, col, digit) {
                board.set(row, col, digit);
                if self.fill(board) {
                    return true;
                }
                // Dead end, undo the placement
                board.set(row, col, 0);
            }
        }
        false
    }

    /// Empty `count` cells, picked in a shuffled order.
    fn remove_cells(&self, board: &mut Board, count: usize) {
        let mut positions: Vec<(usize, usize)> = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                positions.push((row, col));
            }
        }
        positions.shuffle(&mut rand::rng());

        for (row, col) in positions.into_iter().take(count) {
            board.set(row, col, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_solved(grid: &[[u8; GRID_SIZE]; GRID_SIZE]) {
        let mut board: Board = Board::new();
        board.load(*grid);
        assert!(board.is_complete());
    }

    #[test]
    fn solution_satisfies_uniqueness() {
        let mut generator: Generator = Generator::new();
        let puzzle: Puzzle = generator.generate(Difficulty::Medium);
        assert_solved(&puzzle.solution);
    }

    #[test]
    fn difficulty_controls_removed_cells() {
        let mut generator: Generator = Generator::new();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let puzzle: Puzzle = generator.generate(difficulty);
            assert_eq!(puzzle.board.count_empty(), difficulty.cells_to_remove());
        }
    }

    #[test]
    fn remaining_cells_match_the_solution() {
        let mut generator: Generator = Generator::new();
        let puzzle: Puzzle = generator.generate(Difficulty::Hard);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value: u8 = puzzle.board.get(row, col);
                if value != 0 {
                    assert_eq!(value, puzzle.solution[row][col]);
                    assert!(puzzle.board.is_original(row, col));
                }
            }
        }
    }
}
