/*
minesweeper.rs

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

//! Minesweeper on a fixed 9x9 board with 10 mines.

use log::debug;
use rand::Rng;
use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

/// Number of rows and columns.
pub const BOARD_SIZE: usize = 9;

/// Number of mines on the board.
pub const MINE_COUNT: usize = 10;

/// The eight neighbor offsets.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One cell of the board.
#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    /// Whether the cell holds a mine.
    mine: bool,

    /// Number of mines in the eight neighbor cells.
    count: u8,
}

/// Result of revealing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The move was rejected (already revealed, flagged, or game over).
    Rejected,

    /// Safe cells were revealed.
    Revealed,

    /// The cell held a mine: the game is lost.
    Mine,

    /// The reveal uncovered the last safe cell: the game is won.
    Won,
}

/// Minesweeper game state.
pub struct Board {
    /// The grid of cells.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],

    /// Set of the revealed cells.
    revealed: HashSet<(usize, usize)>,

    /// Set of the flagged cells.
    flagged: HashSet<(usize, usize)>,

    /// Whether the player hit a mine.
    pub game_over: bool,

    /// Whether the player revealed every safe cell.
    pub game_won: bool,

    /// Number of reveal moves.
    pub moves: usize,

    /// Time of the first reveal. The clock starts on the first move.
    started: Option<Instant>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new board with randomly placed mines.
    pub fn new() -> Self {
        let mut cells: [[Cell; BOARD_SIZE]; BOARD_SIZE] =
            [[Cell::default(); BOARD_SIZE]; BOARD_SIZE];

        // Place the mines on distinct random cells
        let mut placed: usize = 0;
        while placed < MINE_COUNT {
            let row: usize = rand::rng().random_range(0..BOARD_SIZE);
            let col: usize = rand::rng().random_range(0..BOARD_SIZE);
            if !cells[row][col].mine {
                cells[row][col].mine = true;
                placed += 1;
            }
        }

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !cells[row][col].mine {
                    cells[row][col].count = Self::adjacent_mines(&cells, row, col);
                }
            }
        }

        Self {
            cells,
            revealed: HashSet::new(),
            flagged: HashSet::new(),
            game_over: false,
            game_won: false,
            moves: 0,
            started: None,
        }
    }

    /// Count the mines in the eight cells around `(row, col)`.
    fn adjacent_mines(cells: &[[Cell; BOARD_SIZE]; BOARD_SIZE], row: usize, col: usize) -> u8 {
        let mut count: u8 = 0;
        for (dr, dc) in DIRECTIONS {
            let r: i32 = row as i32 + dr;
            let c: i32 = col as i32 + dc;
            if (0..BOARD_SIZE as i32).contains(&r)
                && (0..BOARD_SIZE as i32).contains(&c)
                && cells[r as usize][c as usize].mine
            {
                count += 1;
            }
        }
        count
    }

    /// Whether the cell holds a mine.
    pub fn is_mine(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].mine
    }

    /// Number of mines around the cell.
    pub fn count(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col].count
    }

    /// Whether the cell has been revealed.
    pub fn is_revealed(&self, row: usize, col: usize) -> bool {
        self.revealed.contains(&(row, col))
    }

    /// Whether the cell is flagged.
    pub fn is_flagged(&self, row: usize, col: usize) -> bool {
        self.flagged.contains(&(row, col))
    }

    /// Number of revealed cells.
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Time elapsed since the first reveal, or zero before the first move.
    pub fn duration(&self) -> Duration {
        match self.started {
            Some(t) => t.elapsed(),
            None => Duration::ZERO,
        }
    }

    /// Number of mines minus the number of flags.
    pub fn remaining_mines(&self) -> i32 {
        MINE_COUNT as i32 - self.flagged.len() as i32
    }

    /// Toggle a flag on an unrevealed cell.
    ///
    /// The move is silently rejected on revealed cells or when the game is
    /// over.
    pub fn toggle_flag(&mut self, row: usize, col: usize) {
        if self.game_over || self.game_won || self.revealed.contains(&(row, col)) {
            return;
        }
        if !self.flagged.remove(&(row, col)) {
            self.flagged.insert((row, col));
        }
    }

    /// Reveal a cell.
    ///
    /// Revealing a mine loses the game and exposes every mine. Revealing a
    /// zero-count cell flood-fills its neighborhood with a breadth-first
    /// search that never crosses a mine.
    pub fn reveal(&mut self, row: usize, col: usize) -> RevealOutcome {
        if self.game_over
            || self.game_won
            || self.revealed.contains(&(row, col))
            || self.flagged.contains(&(row, col))
        {
            return RevealOutcome::Rejected;
        }

        self.moves += 1;
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }

        if self.cells[row][col].mine {
            self.game_over = true;
            self.reveal_all_mines();
            debug!("Mine hit at ({row}, {col}) after {} moves", self.moves);
            return RevealOutcome::Mine;
        }

        self.flood_reveal(row, col);

        let safe_cells: usize = BOARD_SIZE * BOARD_SIZE - MINE_COUNT;
        if self.revealed.len() == safe_cells {
            self.game_won = true;
            return RevealOutcome::Won;
        }
        RevealOutcome::Revealed
    }

    /// Breadth-first flood fill from a safe cell. Cells with a non-zero
    /// count stop the expansion.
    fn flood_reveal(&mut self, row: usize, col: usize) {
        let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
        let mut visited: HashSet<(usize, usize)> = HashSet::new();

        queue.push_back((row, col));
        visited.insert((row, col));

        while let Some((r, c)) = queue.pop_front() {
            self.revealed.insert((r, c));

            if self.cells[r][c].count != 0 {
                continue;
            }
            for (dr, dc) in DIRECTIONS {
                let nr: i32 = r as i32 + dr;
                let nc: i32 = c as i32 + dc;
                if !(0..BOARD_SIZE as i32).contains(&nr) || !(0..BOARD_SIZE as i32).contains(&nc) {
                    continue;
                }
                let next: (usize, usize) = (nr as usize, nc as usize);
                if !visited.contains(&next) && !self.cells[next.0][next.1].mine {
                    queue.push_back(next);
                    visited.insert(next);
                }
            }
        }
    }

    /// Expose every mine. Called when the game is lost.
    fn reveal_all_mines(&mut self) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col].mine {
                    self.revealed.insert((row, col));
                }
            }
        }
    }
}
