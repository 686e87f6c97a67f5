/*
snake.rs

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

//! Snake on a 20x20 grid.
//!
//! The body is a deque of cells with the head at the front. The game
//! advances one cell per tick; the tick interval shrinks as the score grows.

use log::debug;
use rand::Rng;
use std::collections::VecDeque;

/// Number of rows and columns of the playing field.
pub const GRID_SIZE: i32 = 20;

/// Tick interval at the start of a game, in milliseconds.
pub const INITIAL_SPEED_MS: u64 = 150;

/// Fastest allowed tick interval, in milliseconds.
const MIN_SPEED_MS: u64 = 60;

/// Points awarded for eating the food.
const FOOD_POINTS: u32 = 10;

/// A movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid offset of the direction.
    fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Whether the other direction is the exact opposite.
    fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// State of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Waiting,
    Playing,
    Paused,
    GameOver,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved to an empty cell.
    Moved,

    /// The snake ate the food and grew.
    Ate,

    /// The snake hit a wall or itself.
    Died,

    /// The game is not running.
    Idle,
}

/// Snake game state.
pub struct Game {
    /// Body cells, head at the front.
    body: VecDeque<(i32, i32)>,

    /// Direction applied on the last tick.
    direction: Direction,

    /// Direction queued for the next tick.
    next_direction: Direction,

    /// Position of the food.
    food: (i32, i32),

    /// Current score.
    pub score: u32,

    /// Current tick interval in milliseconds.
    pub speed_ms: u64,

    /// Current state of the game.
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game in the waiting state with the initial snake.
    pub fn new() -> Self {
        let mut game: Game = Self {
            body: VecDeque::new(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: (10, 10),
            score: 0,
            speed_ms: INITIAL_SPEED_MS,
            state: GameState::Waiting,
        };
        game.reset();
        game
    }

    /// Reset the snake to its three starting segments and re-place the food.
    fn reset(&mut self) {
        self.body.clear();
        // Head first, moving right from the middle of the grid
        self.body.push_back((9, 10));
        self.body.push_back((8, 10));
        self.body.push_back((7, 10));
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.speed_ms = INITIAL_SPEED_MS;
        self.place_food();
    }

    /// Start a new round.
    pub fn start(&mut self) {
        self.reset();
        self.state = GameState::Playing;
    }

    /// Return the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Return the body cells, head first.
    pub fn body(&self) -> &VecDeque<(i32, i32)> {
        &self.body
    }

    /// Return the food position.
    pub fn food(&self) -> (i32, i32) {
        self.food
    }

    /// Return the snake length.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether the snake has no segments. The snake always has segments;
    /// this exists for completeness with [`Game::len`].
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Queue a direction change for the next tick.
    ///
    /// Reversing into the body is ignored, as is steering while the game is
    /// not running.
    pub fn steer(&mut self, direction: Direction) {
        if self.state == GameState::Playing && !self.direction.is_opposite(direction) {
            self.next_direction = direction;
        }
    }

    /// Toggle the paused state.
    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            other => other,
        };
    }

    /// Advance the game by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != GameState::Playing {
            return TickOutcome::Idle;
        }

        self.direction = self.next_direction;
        let (dx, dy) = self.direction.delta();
        let head: (i32, i32) = *self.body.front().expect("snake always has a head");
        let new_head: (i32, i32) = (head.0 + dx, head.1 + dy);

        if !Self::in_bounds(new_head) || self.body.contains(&new_head) {
            self.state = GameState::GameOver;
            debug!("Game over at {new_head:?} with score {}", self.score);
            return TickOutcome::Died;
        }

        self.body.push_front(new_head);

        if new_head == self.food {
            self.score += FOOD_POINTS;
            self.place_food();
            // Speed up every 50 points
            if self.score % 50 == 0 && self.speed_ms > MIN_SPEED_MS {
                self.speed_ms -= 10;
            }
            return TickOutcome::Ate;
        }

        self.body.pop_back();
        TickOutcome::Moved
    }

    /// Whether the cell is on the grid.
    fn in_bounds((x, y): (i32, i32)) -> bool {
        (0..GRID_SIZE).contains(&x) && (0..GRID_SIZE).contains(&y)
    }

    /// Place the food on a random cell outside the snake body.
    fn place_food(&mut self) {
        loop {
            let candidate: (i32, i32) = (
                rand::rng().random_range(0..GRID_SIZE),
                rand::rng().random_range(0..GRID_SIZE),
            );
            if !self.body.contains(&candidate) {
                self.food = candidate;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_three_segments_heading_right() {
        let mut game: Game = Game::new();
        assert_eq!(game.state(), GameState::Waiting);
        game.start();
        assert_eq!(game.len(), 3);
        assert_eq!(game.body().front(), Some(&(9, 10)));
    }

    #[test]
    fn moving_keeps_the_length() {
        let mut game: Game = Game::new();
        game.start();
        game.food = (0, 0);
        assert_eq!(game.tick(), TickOutcome::Moved);
        assert_eq!(game.len(), 3);
        assert_eq!(game.body().front(), Some(&(10, 10)));
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut game: Game = Game::new();
        game.start();
        game.food = (10, 10);
        assert_eq!(game.tick(), TickOutcome::Ate);
        assert_eq!(game.len(), 4);
        assert_eq!(game.score, 10);
    }

    #[test]
    fn reversal_is_ignored() {
        let mut game: Game = Game::new();
        game.start();
        game.food = (0, 0);
        game.steer(Direction::Left);
        game.tick();
        assert_eq!(game.body().front(), Some(&(10, 10)));
    }

    #[test]
    fn wall_collision_ends_the_game() {
        let mut game: Game = Game::new();
        game.start();
        game.food = (0, 0);
        // Head starts at x = 9, the wall is at x = 20
        for _ in 0..10 {
            assert_eq!(game.tick(), TickOutcome::Moved);
        }
        assert_eq!(game.tick(), TickOutcome::Died);
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(game.tick(), TickOutcome::Idle);
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut game: Game = Game::new();
        game.start();
        game.food = (10, 10);
        game.tick(); // Grow to 4 segments
        game.food = (0, 0);
        // Turn back onto the body: down, then left, then up
        game.steer(Direction::Down);
        game.tick();
        game.steer(Direction::Left);
        game.tick();
        game.steer(Direction::Up);
        assert_eq!(game.tick(), TickOutcome::Died);
    }

    #[test]
    fn speed_increases_every_fifty_points() {
        let mut game: Game = Game::new();
        game.start();
        game.score = 40;
        game.food = *game.body().front().unwrap();
        game.food.0 += 1;
        game.tick();
        assert_eq!(game.score, 50);
        assert_eq!(game.speed_ms, INITIAL_SPEED_MS - 10);
    }

    #[test]
    fn pause_blocks_ticks() {
        let mut game: Game = Game::new();
        game.start();
        game.toggle_pause();
        assert_eq!(game.state(), GameState::Paused);
        assert_eq!(game.tick(), TickOutcome::Idle);
        game.toggle_pause();
        assert_eq!(game.state(), GameState::Playing);
    }
}
