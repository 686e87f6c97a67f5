/*
solver.rs

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

//! Backtracking Sudoku solver with a replayable step trace.
//!
//! The solver records every decision the backtracking search makes. A front
//! end replays the trace one step per tick to animate the search; stopping
//! the animation is simply dropping the remaining steps.

use log::debug;

use super::board::Board;

/// One decision of the backtracking search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStep {
    /// The search probes `digit` at the cell.
    Try { row: usize, col: usize, digit: u8 },

    /// The digit is valid and gets placed.
    Place { row: usize, col: usize, digit: u8 },

    /// Dead end: the cell is emptied again.
    Backtrack { row: usize, col: usize },
}

/// Errors raised by the solver.
#[derive(Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The board cannot be completed. This does not happen for generated
    /// puzzles, which are solvable by construction.
    Unsolvable,
}

/// Solve the board in place and return the recorded step trace.
///
/// The search tries the digits 1 to 9 in ascending order for each empty cell
/// in row-major order, so the trace is deterministic for a given board.
///
/// # Errors
///
/// Return [`SolveError::Unsolvable`] when no digit assignment completes the
/// board. The board is left untouched in that case.
pub fn solve(board: &mut Board) -> Result<Vec<SolveStep>, SolveError> {
    let mut steps: Vec<SolveStep> = Vec::new();
    if solve_recursive(board, &mut steps) {
        debug!("Solved in {} steps", steps.len());
        Ok(steps)
    } else {
        Err(SolveError::Unsolvable)
    }
}

/// Recursively solve the board, recording every probe, placement, and undo.
fn solve_recursive(board: &mut Board, steps: &mut Vec<SolveStep>) -> bool {
    let (row, col) = match board.find_empty() {
        Some(cell) => cell,
        None => return true,
    };

    for digit in 1..=9 {
        steps.push(SolveStep::Try { row, col, digit });
        if board.is_valid(row, col, digit) {
            board.set(row, col, digit);
            steps.push(SolveStep::Place { row, col, digit });

            if solve_recursive(board, steps) {
                return true;
            }

            board.set(row, col, 0);
            steps.push(SolveStep::Backtrack { row, col });
        }
    }
    false
}

/// Replay a step trace on a board.
///
/// This is what an animation does one step per tick; replaying the full
/// trace on the starting board yields the solved grid.
pub fn apply_step(board: &mut Board, step: &SolveStep) {
    match step {
        SolveStep::Try { .. } => (),
        SolveStep::Place { row, col, digit } => board.set(*row, *col, *digit),
        SolveStep::Backtrack { row, col } => board.set(*row, *col, 0),
    }
}
