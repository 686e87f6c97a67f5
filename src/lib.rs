/*
lib.rs

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

//! A collection of single-player game engines.
//!
//! Each game lives in its own module and is fully self-contained: it owns its
//! board or card model, validates the player's moves, and keeps its score.
//! Invalid moves never panic; they are rejected through the return value.
//!
//! The games that animate an automatic solver ([`sudoku`], [`hanoi`]) expose
//! the solver result as an ordered list of steps. A frontend consumes one
//! step per tick and stops an animation by dropping the remaining steps.
//!
//! The [`highscores`] and [`saver`] modules handle the scoreboards that are
//! shared by all the games, and [`cli_options`] implements the developer
//! command-line interface.

pub mod cli_options;
pub mod config;
pub mod freecell;
pub mod hanoi;
pub mod highscores;
pub mod memory;
pub mod minesweeper;
pub mod routefinder;
pub mod saver;
pub mod snake;
pub mod solitaire;
pub mod sudoku;
pub mod tictactoe;
pub mod watersort;
