/*
hanoi.rs

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

//! Tower of Hanoi with a recursive auto-solver.
//!
//! The solver produces the complete ordered move list up front. An animation
//! consumes one move per tick; stopping it is dropping the rest of the list.

use log::debug;

/// Number of disks of a standard game.
pub const DISK_COUNT: u8 = 5;

/// The three pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    fn index(&self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }
}

/// Tower of Hanoi game state.
pub struct Game {
    /// The three pegs as stacks of disk sizes, largest at the bottom.
    pegs: [Vec<u8>; 3],

    /// Number of disks in play.
    disk_count: u8,

    /// Number of moves played.
    pub moves: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DISK_COUNT)
    }
}

impl Game {
    /// Create a game with all disks stacked on peg A.
    pub fn new(disk_count: u8) -> Self {
        let mut first: Vec<u8> = Vec::with_capacity(disk_count as usize);
        for size in (1..=disk_count).rev() {
            first.push(size);
        }
        Self {
            pegs: [first, Vec::new(), Vec::new()],
            disk_count,
            moves: 0,
        }
    }

    /// Return the disks on a peg, bottom first.
    pub fn peg(&self, peg: Peg) -> &[u8] {
        &self.pegs[peg.index()]
    }

    /// Minimum number of moves to solve the puzzle (2^n - 1).
    pub fn min_moves(&self) -> usize {
        (1 << self.disk_count) - 1
    }

    /// Whether a disk can move from `source` to `target`.
    ///
    /// The source must have a disk, and the moved disk must land on an empty
    /// peg or on a larger disk.
    pub fn can_move(&self, source: Peg, target: Peg) -> bool {
        if source == target {
            return false;
        }
        let disk: u8 = match self.pegs[source.index()].last() {
            Some(d) => *d,
            None => return false,
        };
        match self.pegs[target.index()].last() {
            Some(top) => disk < *top,
            None => true,
        }
    }

    /// Move the top disk from `source` to `target`.
    ///
    /// Invalid moves are rejected and return `false`.
    pub fn move_disk(&mut self, source: Peg, target: Peg) -> bool {
        if !self.can_move(source, target) {
            return false;
        }
        let disk: u8 = self.pegs[source.index()].pop().expect("validated above");
        self.pegs[target.index()].push(disk);
        self.moves += 1;
        true
    }

    /// Whether all disks reached peg C.
    pub fn is_won(&self) -> bool {
        self.pegs[Peg::C.index()].len() == self.disk_count as usize
    }

    /// Return the move list that solves the puzzle from the initial
    /// position, computed by the classic recursive decomposition: move n-1
    /// disks to the auxiliary peg, move the largest disk to the target, and
    /// move the n-1 disks on top of it.
    pub fn solution(&self) -> Vec<(Peg, Peg)> {
        let mut solution: Vec<(Peg, Peg)> = Vec::with_capacity(self.min_moves());
        Self::solve(self.disk_count, Peg::A, Peg::C, Peg::B, &mut solution);
        debug!("Solution for {} disks: {} moves", self.disk_count, solution.len());
        solution
    }

    /// Recursively build the move list for `n` disks.
    fn solve(n: u8, source: Peg, target: Peg, auxiliary: Peg, moves: &mut Vec<(Peg, Peg)>) {
        if n == 0 {
            return;
        }
        Self::solve(n - 1, source, auxiliary, target, moves);
        moves.push((source, target));
        Self::solve(n - 1, auxiliary, target, source, moves);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disks_start_on_peg_a() {
        let game: Game = Game::new(5);
        assert_eq!(game.peg(Peg::A), &[5, 4, 3, 2, 1]);
        assert!(game.peg(Peg::B).is_empty());
        assert!(game.peg(Peg::C).is_empty());
    }

    #[test]
    fn larger_disk_cannot_rest_on_smaller() {
        let mut game: Game = Game::new(3);
        assert!(game.move_disk(Peg::A, Peg::C)); // Disk 1
        assert!(!game.move_disk(Peg::A, Peg::C)); // Disk 2 on disk 1
        assert!(game.move_disk(Peg::A, Peg::B)); // Disk 2 to the free peg
        assert_eq!(game.moves, 2);
    }

    #[test]
    fn empty_source_is_rejected() {
        let mut game: Game = Game::new(2);
        assert!(!game.move_disk(Peg::B, Peg::C));
        assert!(!game.move_disk(Peg::A, Peg::A));
    }

    #[test]
    fn min_moves_is_two_to_the_n_minus_one() {
        assert_eq!(Game::new(5).min_moves(), 31);
        assert_eq!(Game::new(3).min_moves(), 7);
    }

    #[test]
    fn solution_wins_in_minimum_moves() {
        for disk_count in 1..=6 {
            let mut game: Game = Game::new(disk_count);
            let solution: Vec<(Peg, Peg)> = game.solution();
            assert_eq!(solution.len(), game.min_moves());
            for (source, target) in solution {
                assert!(game.move_disk(source, target));
            }
            assert!(game.is_won());
            assert_eq!(game.moves, game.min_moves());
        }
    }

    #[test]
    fn solution_can_stop_mid_way() {
        let mut game: Game = Game::new(4);
        let solution: Vec<(Peg, Peg)> = game.solution();
        // Play only half the moves: every prefix is legal
        for (source, target) in solution.into_iter().take(7) {
            assert!(game.move_disk(source, target));
        }
        assert!(!game.is_won());
    }
}
