/*
board.rs

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

//! The 9x9 Sudoku grid and its validity rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns in the grid.
pub const GRID_SIZE: usize = 9;

/// Side of a 3x3 box.
pub const BOX_SIZE: usize = 3;

/// A 9x9 Sudoku grid.
///
/// Cell values are digits between 1 and 9, with 0 marking an empty cell.
/// In addition to the playing grid, the object keeps the original puzzle
/// grid. The cells that are given in the original puzzle cannot be edited by
/// the player.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Board {
    /// Current playing grid.
    grid: [[u8; GRID_SIZE]; GRID_SIZE],

    /// The puzzle as it was generated. Non-zero cells are givens.
    original: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Create an empty [`Board`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether placing `digit` at `(row, col)` respects the Sudoku rules.
    ///
    /// The digit must not already appear in the row, in the column, or in the
    /// containing 3x3 box. The probed cell itself is ignored, so the method
    /// can also verify a digit that is already placed.
    pub fn is_valid(&self, row: usize, col: usize, digit: u8) -> bool {
        for c in 0..GRID_SIZE {
            if c != col && self.grid[row][c] == digit {
                return false;
            }
        }

        for r in 0..GRID_SIZE {
            if r != row && self.grid[r][col] == digit {
                return false;
            }
        }

        let box_row: usize = (row / BOX_SIZE) * BOX_SIZE;
        let box_col: usize = (col / BOX_SIZE) * BOX_SIZE;
        for r in box_row..box_row + BOX_SIZE {
            for c in box_col..box_col + BOX_SIZE {
                if (r != row || c != col) && self.grid[r][c] == digit {
                    return false;
                }
            }
        }
        true
    }

    /// Return the first empty cell in row-major order, or None if the grid
    /// is full.
    pub fn find_empty(&self) -> Option<(usize, usize)> {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.grid[row][col] == 0 {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Set the value of a cell. A value of 0 empties the cell.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.grid[row][col] = value;
    }

    /// Get the value of a cell.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.grid[row][col]
    }

    /// Empty the whole grid.
    pub fn clear(&mut self) {
        self.grid = [[0; GRID_SIZE]; GRID_SIZE];
    }

    /// Return a copy of the current grid.
    pub fn grid(&self) -> [[u8; GRID_SIZE]; GRID_SIZE] {
        self.grid
    }

    /// Load the provided grid as the current playing grid.
    pub fn load(&mut self, grid: [[u8; GRID_SIZE]; GRID_SIZE]) {
        self.grid = grid;
    }

    /// Freeze the current grid as the original puzzle.
    pub fn save_as_original(&mut self) {
        self.original = self.grid;
    }

    /// Whether the cell is a given from the original puzzle.
    pub fn is_original(&self, row: usize, col: usize) -> bool {
        self.original[row][col] != 0
    }

    /// Restore the playing grid to the original puzzle.
    pub fn reset_to_original(&mut self) {
        self.grid = self.original;
    }

    /// Whether every cell has a value.
    pub fn is_full(&self) -> bool {
        self.find_empty().is_none()
    }

    /// Whether the grid is full and every placement is valid.
    pub fn is_complete(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if !self.is_valid(row, col, self.grid[row][col]) {
                    return false;
                }
            }
        }
        true
    }

    /// Return the cells whose value conflicts with another cell in the same
    /// row, column, or box.
    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        let mut ret: Vec<(usize, usize)> = Vec::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let digit: u8 = self.grid[row][col];
                if digit != 0 && !self.is_valid(row, col, digit) {
                    ret.push((row, col));
                }
            }
        }
        ret
    }

    /// Return the first empty cell together with its value in the provided
    /// solution grid, or None if the grid is full.
    pub fn hint(&self, solution: &[[u8; GRID_SIZE]; GRID_SIZE]) -> Option<(usize, usize, u8)> {
        self.find_empty()
            .map(|(row, col)| (row, col, solution[row][col]))
    }

    /// Return the number of empty cells.
    pub fn count_empty(&self) -> usize {
        let mut count: usize = 0;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.grid[row][col] == 0 {
                    count += 1;
                }
            }
        }
        count
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..GRID_SIZE {
            if row % BOX_SIZE == 0 && row != 0 {
                writeln!(f, "------+-------+------")?;
            }
            for col in 0..GRID_SIZE {
                if col % BOX_SIZE == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                match self.grid[row][col] {
                    0 => write!(f, ". ")?,
                    v => write!(f, "{v} ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize, u8)]) -> Board {
        let mut board: Board = Board::new();
        for (row, col, digit) in cells {
            board.set(*row, *col, *digit);
        }
        board
    }

    #[test]
    fn rejects_duplicate_in_row() {
        let board: Board = board_with(&[(4, 0, 7)]);
        assert!(!board.is_valid(4, 8, 7));
        assert!(board.is_valid(4, 8, 6));
    }

    #[test]
    fn rejects_duplicate_in_column() {
        let board: Board = board_with(&[(0, 3, 2)]);
        assert!(!board.is_valid(8, 3, 2));
    }

    #[test]
    fn rejects_duplicate_in_box() {
        let board: Board = board_with(&[(3, 3, 5)]);
        assert!(!board.is_valid(5, 5, 5));
        // Same digit outside the box, row, and column is fine
        assert!(board.is_valid(0, 0, 5));
    }

    #[test]
    fn placed_digit_stays_valid_for_itself() {
        let board: Board = board_with(&[(2, 2, 9)]);
        assert!(board.is_valid(2, 2, 9));
    }

    #[test]
    fn find_empty_is_row_major() {
        let mut board: Board = Board::new();
        assert_eq!(board.find_empty(), Some((0, 0)));
        board.set(0, 0, 1);
        assert_eq!(board.find_empty(), Some((0, 1)));
    }

    #[test]
    fn reset_restores_givens_only() {
        let mut board: Board = board_with(&[(0, 0, 3)]);
        board.save_as_original();
        board.set(0, 1, 8);
        assert!(board.is_original(0, 0));
        assert!(!board.is_original(0, 1));
        board.reset_to_original();
        assert_eq!(board.get(0, 0), 3);
        assert_eq!(board.get(0, 1), 0);
    }

    #[test]
    fn conflicts_lists_both_cells() {
        let board: Board = board_with(&[(0, 0, 4), (0, 5, 4)]);
        let conflicts: Vec<(usize, usize)> = board.conflicts();
        assert_eq!(conflicts, vec![(0, 0), (0, 5)]);
    }

    #[test]
    fn count_empty_tracks_sets() {
        let mut board: Board = Board::new();
        assert_eq!(board.count_empty(), 81);
        board.set(1, 1, 6);
        assert_eq!(board.count_empty(), 80);
    }
}
