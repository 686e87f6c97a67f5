/*
highscores.rs

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

//! Manage high scores for the games.
//!
//! The main object, [`HighScores`], maintains a list of high scores for each game.
//! This object is saved when the user completes a game and makes it to the scoreboard, and
//! is restored when Gamebox starts.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Score {
    /// How long did it take for completing the game.
    pub time: Duration,

    /// Number of moves or mistakes, depending on the game.
    pub counter: usize,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for a game.
#[derive(Serialize, Deserialize, Debug, Clone)]
struct GameHighScoreBoard {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl GameHighScoreBoard {
    /// Create a [`GameHighScoreBoard`] object.
    fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    fn add_score(&mut self, time: Duration, counter: usize) -> Option<usize> {
        let mut new_score_position: Option<usize> = None;
        let mut tmp_top: Vec<Score> = Vec::with_capacity(BOARD_SIZE);
        let mut i: usize = 0;

        for score in &self.top {
            // Insert the new score to the temporary board
            if time < score.time && new_score_position.is_none() {
                new_score_position = Some(i + 1);
                tmp_top.push(Score {
                    time,
                    counter,
                    when: SystemTime::now(),
                });
                i += 1;
            }
            // Do not add more scores than the board size
            if i >= BOARD_SIZE {
                break;
            }
            tmp_top.push(*score);
            i += 1;
        }
        // If the board is not full and the new score has not been added yet, then add the new
        // score at the end of the board
        if i < BOARD_SIZE && new_score_position.is_none() {
            new_score_position = Some(i + 1);
            tmp_top.push(Score {
                time,
                counter,
                when: SystemTime::now(),
            });
        }
        self.top = tmp_top;
        new_score_position
    }
}

/// List of the scoreboards for the games.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HighScores {
    /// Map of the [`GameHighScoreBoard`] scoreboards indexed by the game.
    ///
    /// The game index is a string in the format "<game_name>@@<variant>", where the variant
    /// is the difficulty level or "classic" for games without levels.
    board: HashMap<String, GameHighScoreBoard>,

    /// Best point totals indexed by the game name, for the games that keep a single
    /// best-score integer instead of a time-based scoreboard.
    best: HashMap<String, u32>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
            best: HashMap::new(),
        }
    }

    /// Return the string that is used as an index for the list of scoreboards.
    fn build_key(&self, game_name: &str, variant: &str) -> String {
        format!("{game_name}@@{variant}")
    }

    /// Add the a score to the scoreboard of the provided game and return the position in the
    /// scoreboard, or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(
        &mut self,
        game_name: &str,
        variant: &str,
        time: Duration,
        counter: usize,
    ) -> Option<usize> {
        let key: String = self.build_key(game_name, variant);
        let scoreboard: &mut GameHighScoreBoard =
            self.board.entry(key).or_insert(GameHighScoreBoard::new());

        scoreboard.add_score(time, counter)
    }

    /// Return the list of [`Score`] for the given game.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_score(&self, game_name: &str, variant: &str) -> Option<&Vec<Score>> {
        let key: String = self.build_key(game_name, variant);

        match self.board.get(&key) {
            Some(b) => Some(&b.top),
            None => None,
        }
    }

    /// Return the scoreboards of a game, as (variant, scores) tuples.
    pub fn boards_for(&self, game_name: &str) -> Vec<(&str, &Vec<Score>)> {
        let prefix: String = format!("{game_name}@@");
        let mut boards: Vec<(&str, &Vec<Score>)> = self
            .board
            .iter()
            .filter_map(|(key, b)| {
                key.strip_prefix(prefix.as_str())
                    .map(|variant| (variant, &b.top))
            })
            .collect();
        boards.sort_by_key(|(variant, _)| *variant);
        boards
    }

    /// Record a point total for the given game and return whether it beats the stored best.
    pub fn add_best(&mut self, game_name: &str, points: u32) -> bool {
        match self.best.get(game_name) {
            Some(best) if *best >= points => false,
            _ => {
                self.best.insert(game_name.to_string(), points);
                true
            }
        }
    }

    /// Return the best point total of the given game.
    pub fn best(&self, game_name: &str) -> Option<u32> {
        self.best.get(game_name).copied()
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any game)
    pub fn is_empty(&self) -> bool {
        self.board.len() == 0 && self.best.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_score_takes_the_top_spot() {
        let mut highscores: HighScores = HighScores::new();
        assert!(highscores.is_empty());
        let position: Option<usize> =
            highscores.add_score("sudoku", "easy", Duration::from_secs(300), 2);
        assert_eq!(position, Some(1));
        assert!(!highscores.is_empty());
    }

    #[test]
    fn faster_times_rank_higher() {
        let mut highscores: HighScores = HighScores::new();
        highscores.add_score("sudoku", "easy", Duration::from_secs(300), 0);
        highscores.add_score("sudoku", "easy", Duration::from_secs(500), 0);
        let position: Option<usize> =
            highscores.add_score("sudoku", "easy", Duration::from_secs(400), 0);
        assert_eq!(position, Some(2));

        let scores: &Vec<Score> = highscores.get_score("sudoku", "easy").unwrap();
        assert_eq!(scores.len(), 3);
        assert!(scores[0].time < scores[1].time && scores[1].time < scores[2].time);
    }

    #[test]
    fn slow_score_does_not_place_on_a_full_board() {
        let mut highscores: HighScores = HighScores::new();
        for seconds in 1..=10 {
            highscores.add_score("minesweeper", "classic", Duration::from_secs(seconds), 0);
        }
        let position: Option<usize> =
            highscores.add_score("minesweeper", "classic", Duration::from_secs(60), 0);
        assert!(position.is_none());
        let scores: &Vec<Score> = highscores.get_score("minesweeper", "classic").unwrap();
        assert_eq!(scores.len(), 10);
    }

    #[test]
    fn boards_are_keyed_by_game_and_variant() {
        let mut highscores: HighScores = HighScores::new();
        highscores.add_score("sudoku", "easy", Duration::from_secs(300), 0);
        highscores.add_score("sudoku", "hard", Duration::from_secs(900), 0);
        highscores.add_score("hanoi", "classic", Duration::from_secs(120), 31);

        assert!(highscores.get_score("sudoku", "medium").is_none());
        let boards: Vec<(&str, &Vec<Score>)> = highscores.boards_for("sudoku");
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].0, "easy");
        assert_eq!(boards[1].0, "hard");
    }

    #[test]
    fn best_only_improves() {
        let mut highscores: HighScores = HighScores::new();
        assert!(highscores.best("snake").is_none());
        assert!(highscores.add_best("snake", 120));
        assert!(!highscores.add_best("snake", 90));
        assert!(!highscores.add_best("snake", 120));
        assert!(highscores.add_best("snake", 150));
        assert_eq!(highscores.best("snake"), Some(150));
    }
}
