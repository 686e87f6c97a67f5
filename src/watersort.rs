/*
watersort.rs

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

//! Water-sort puzzle: pour colored segments between tubes until each tube
//! holds a single color.

use rand::seq::SliceRandom;

/// Number of tubes filled at the start.
pub const FILLED_TUBES: usize = 3;

/// Number of empty tubes.
pub const EMPTY_TUBES: usize = 2;

/// Number of segments a tube can hold.
pub const TUBE_CAPACITY: usize = 4;

/// Points awarded for each newly completed tube.
const TUBE_POINTS: u32 = 50;

/// Water colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
    Green,
}

/// A tube of water segments, top of the liquid at the end of the vector.
#[derive(Debug, Clone, Default)]
pub struct Tube {
    segments: Vec<Color>,
}

impl Tube {
    /// Return the segments, bottom first.
    pub fn segments(&self) -> &[Color] {
        &self.segments
    }

    /// Color of the topmost segment.
    pub fn top(&self) -> Option<Color> {
        self.segments.last().copied()
    }

    /// Whether the tube has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the tube is filled to capacity.
    pub fn is_full(&self) -> bool {
        self.segments.len() == TUBE_CAPACITY
    }

    /// Whether the tube is full of a single color.
    pub fn is_complete(&self) -> bool {
        self.is_full() && self.segments.iter().all(|c| *c == self.segments[0])
    }
}

/// One performed pour, recorded for undo.
#[derive(Debug, Clone)]
struct Pour {
    from: usize,
    to: usize,
    count: usize,
}

/// Water-sort game state.
pub struct Game {
    /// The tubes, filled ones first.
    tubes: Vec<Tube>,

    /// Pour history for undo.
    history: Vec<Pour>,

    /// Current score.
    pub score: u32,

    /// Number of pours played. Undo does not count.
    pub moves: usize,

    /// Number of completed tubes after the last pour.
    sorted_tubes: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with three shuffled tubes and two empty ones.
    pub fn new() -> Self {
        let colors: [Color; FILLED_TUBES] = [Color::Red, Color::Blue, Color::Green];
        let mut pool: Vec<Color> = Vec::with_capacity(FILLED_TUBES * TUBE_CAPACITY);
        for color in colors {
            for _ in 0..TUBE_CAPACITY {
                pool.push(color);
            }
        }
        pool.shuffle(&mut rand::rng());

        let mut tubes: Vec<Tube> = Vec::with_capacity(FILLED_TUBES + EMPTY_TUBES);
        for _ in 0..FILLED_TUBES {
            let mut tube: Tube = Tube::default();
            for _ in 0..TUBE_CAPACITY {
                tube.segments.push(pool.pop().expect("pool holds 12 segments"));
            }
            tubes.push(tube);
        }
        for _ in 0..EMPTY_TUBES {
            tubes.push(Tube::default());
        }

        Self {
            tubes,
            history: Vec::new(),
            score: 0,
            moves: 0,
            sorted_tubes: 0,
        }
    }

    /// Return the tubes.
    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    /// Number of completed tubes.
    pub fn sorted_tubes(&self) -> usize {
        self.sorted_tubes
    }

    /// Whether a pour from one tube to another is allowed: the source has
    /// water, the destination is not full, and the destination is empty or
    /// its top color matches.
    pub fn can_pour(&self, from: usize, to: usize) -> bool {
        if from == to || from >= self.tubes.len() || to >= self.tubes.len() {
            return false;
        }
        let source: &Tube = &self.tubes[from];
        let dest: &Tube = &self.tubes[to];
        match (source.top(), dest.top()) {
            (None, _) => false,
            (Some(_), None) => !dest.is_full(),
            (Some(s), Some(d)) => !dest.is_full() && s == d,
        }
    }

    /// Pour from one tube to another.
    ///
    /// The whole contiguous run of the source's top color flows, bounded by
    /// the destination capacity. Invalid pours are rejected and return
    /// `false`.
    pub fn pour(&mut self, from: usize, to: usize) -> bool {
        if !self.can_pour(from, to) {
            return false;
        }
        let color: Color = self.tubes[from].top().expect("validated above");

        let mut count: usize = 0;
        while self.tubes[from].top() == Some(color) && !self.tubes[to].is_full() {
            self.tubes[from].segments.pop();
            self.tubes[to].segments.push(color);
            count += 1;
        }

        self.history.push(Pour { from, to, count });
        self.moves += 1;
        self.award_completed_tubes();
        true
    }

    /// Undo the last pour. Does not count as a move.
    pub fn undo(&mut self) -> bool {
        let pour: Pour = match self.history.pop() {
            Some(p) => p,
            None => return false,
        };
        for _ in 0..pour.count {
            let color: Color = self.tubes[pour.to]
                .segments
                .pop()
                .expect("history matches the tubes");
            self.tubes[pour.from].segments.push(color);
        }
        self.sorted_tubes = self.tubes.iter().filter(|t| t.is_complete()).count();
        true
    }

    /// Whether every non-empty tube is complete and all three colors are
    /// sorted.
    pub fn is_complete(&self) -> bool {
        let filled: usize = self.tubes.iter().filter(|t| !t.is_empty()).count();
        filled == FILLED_TUBES && self.tubes.iter().all(|t| t.is_empty() || t.is_complete())
    }

    /// Count the completed tubes and award points for the new ones.
    fn award_completed_tubes(&mut self) {
        let sorted: usize = self.tubes.iter().filter(|t| t.is_complete()).count();
        if sorted > self.sorted_tubes {
            self.score += (sorted - self.sorted_tubes) as u32 * TUBE_POINTS;
        }
        self.sorted_tubes = sorted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a game with fixed tube contents.
    fn game_with(tubes: Vec<Vec<Color>>) -> Game {
        let mut game: Game = Game::new();
        game.tubes = tubes
            .into_iter()
            .map(|segments| Tube { segments })
            .collect();
        game.history.clear();
        game.score = 0;
        game.moves = 0;
        game.sorted_tubes = game.tubes.iter().filter(|t| t.is_complete()).count();
        game
    }

    #[test]
    fn new_game_has_five_tubes_and_twelve_segments() {
        let game: Game = Game::new();
        assert_eq!(game.tubes().len(), FILLED_TUBES + EMPTY_TUBES);
        let segments: usize = game.tubes().iter().map(|t| t.segments().len()).sum();
        assert_eq!(segments, FILLED_TUBES * TUBE_CAPACITY);
        assert!(game.tubes()[3].is_empty());
        assert!(game.tubes()[4].is_empty());
    }

    #[test]
    fn pour_moves_the_whole_color_run() {
        use Color::*;
        let mut game: Game = game_with(vec![
            vec![Blue, Red, Red],
            vec![Red],
            vec![],
        ]);
        assert!(game.pour(0, 1));
        assert_eq!(game.tubes()[0].segments(), &[Blue]);
        assert_eq!(game.tubes()[1].segments(), &[Red, Red, Red]);
        assert_eq!(game.moves, 1);
    }

    #[test]
    fn pour_stops_at_capacity() {
        use Color::*;
        let mut game: Game = game_with(vec![
            vec![Red, Red, Red],
            vec![Blue, Red, Red],
        ]);
        assert!(game.pour(0, 1));
        // Destination had one free slot: only one segment flows
        assert_eq!(game.tubes()[0].segments(), &[Red, Red]);
        assert!(game.tubes()[1].is_full());
    }

    #[test]
    fn mismatched_top_colors_are_rejected() {
        use Color::*;
        let mut game: Game = game_with(vec![vec![Red], vec![Blue]]);
        assert!(!game.can_pour(0, 1));
        assert!(!game.pour(0, 1));
        assert!(!game.pour(0, 0));
        assert_eq!(game.moves, 0);
    }

    #[test]
    fn completing_a_tube_scores_fifty() {
        use Color::*;
        let mut game: Game = game_with(vec![
            vec![Red, Red, Red],
            vec![Blue, Red],
            vec![],
        ]);
        assert!(game.pour(1, 0));
        assert_eq!(game.score, 50);
        assert_eq!(game.sorted_tubes(), 1);
    }

    #[test]
    fn undo_restores_the_tubes_without_counting_a_move() {
        use Color::*;
        let mut game: Game = game_with(vec![
            vec![Blue, Red, Red],
            vec![Red],
            vec![],
        ]);
        assert!(game.pour(0, 1));
        assert!(game.undo());
        assert_eq!(game.tubes()[0].segments(), &[Blue, Red, Red]);
        assert_eq!(game.tubes()[1].segments(), &[Red]);
        assert_eq!(game.moves, 1);
        assert!(!game.undo());
    }

    #[test]
    fn complete_when_all_colors_are_sorted() {
        use Color::*;
        let game: Game = game_with(vec![
            vec![Red, Red, Red, Red],
            vec![Blue, Blue, Blue, Blue],
            vec![Green, Green, Green, Green],
            vec![],
            vec![],
        ]);
        assert!(game.is_complete());
    }

    #[test]
    fn incomplete_while_a_color_is_split() {
        use Color::*;
        let game: Game = game_with(vec![
            vec![Red, Red, Red],
            vec![Blue, Blue, Blue, Blue],
            vec![Green, Green, Green, Green],
            vec![Red],
            vec![],
        ]);
        assert!(!game.is_complete());
    }
}
