/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers working on the game engines.
//! In command-line mode, Gamebox can generate Sudoku puzzles, trace the Sudoku solver, compute
//! shortest routes, print Tower of Hanoi solutions, and display the saved scoreboards.
//!
//! # Examples
//!
//! List the games:
//!
//! ```
//! $ gamebox --ls
//! freecell
//! hanoi
//! memory
//! minesweeper
//! routefinder
//! snake
//! solitaire
//! sudoku
//! tictactoe
//! watersort
//! ```
//!
//! Generate two hard Sudoku puzzles and print the timing statistics:
//!
//! ```
//! $ gamebox -p -f hard -c 2 -s
//! ```
//!
//! Compute the shortest route between two locations:
//!
//! ```
//! $ gamebox --route A E
//! A -> B -> D -> E (distance 6)
//! ```

use chrono::{DateTime, Local};
use clap::Parser;
use log::debug;
use std::env;

use crate::config::COPYRIGHT_NOTICE;
use crate::hanoi;
use crate::highscores::HighScores;
use crate::routefinder;
use crate::saver::highscores::SaverHighScores;
use crate::sudoku;
use crate::sudoku::generator::{Generator, Puzzle};
use crate::sudoku::solver::{self, SolveStep};

/// Names of the games, as used by `--ls` and `--scores`.
const GAMES: [&str; 10] = [
    "freecell",
    "hanoi",
    "memory",
    "minesweeper",
    "routefinder",
    "snake",
    "solitaire",
    "sudoku",
    "tictactoe",
    "watersort",
];

/// Developer utilities for the Gamebox game engines.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE, ignore_errors = true)]
struct Args {
    /// List the games
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Generate Sudoku puzzles
    #[arg(short, long, default_value_t = false, group = "generate")]
    puzzle: bool,

    /// Trace the Sudoku solver on a generated puzzle
    #[arg(short, long, default_value_t = false, group = "generate")]
    trace: bool,

    /// Difficulty level for the puzzle
    #[arg(value_enum, short = 'f', long, default_value_t=sudoku::Difficulty::Medium, requires = "generate")]
    difficulty: sudoku::Difficulty,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1, requires = "puzzle")]
    count: usize,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false, requires = "puzzle")]
    summary: bool,

    /// Compute the shortest route between two locations
    #[arg(short, long, num_args = 2, value_names = ["FROM", "TO"])]
    route: Option<Vec<String>>,

    /// Print the Tower of Hanoi solution for the given number of disks
    #[arg(long, value_name = "DISKS")]
    hanoi: Option<u8>,

    /// Display the saved scoreboards of a game
    #[arg(long, value_name = "GAME")]
    scores: Option<String>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
pub fn parse() -> Option<u8> {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if args.ls {
        for game in GAMES {
            println!("{game}");
        }
        return Some(0);
    }

    if args.puzzle {
        return Some(generate_puzzles(args.difficulty, args.count, args.summary));
    }

    if args.trace {
        return Some(trace_solver(args.difficulty));
    }

    if let Some(route) = args.route {
        return Some(print_route(&route[0], &route[1]));
    }

    if let Some(disks) = args.hanoi {
        return Some(print_hanoi_solution(disks));
    }

    if let Some(game) = args.scores {
        return Some(print_scores(&game));
    }

    None
}

/// Generate and print Sudoku puzzles, with optional timing statistics.
fn generate_puzzles(difficulty: sudoku::Difficulty, count: usize, summary: bool) -> u8 {
    let mut generator: Generator = Generator::new();
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;

    for i in 0..count {
        debug!("Iteration {i}");
        let puzzle: Puzzle = generator.generate(difficulty);
        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        iterations += generator.iteration;

        println!("{}", puzzle.board);
        println!();
    }

    // Print some stats
    if summary && count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}",
            total,
            total / count as f32,
            max,
            iterations / count
        );
    }
    0
}

/// Generate a puzzle, solve it, and print a summary of the solver trace.
fn trace_solver(difficulty: sudoku::Difficulty) -> u8 {
    let mut generator: Generator = Generator::new();
    let mut puzzle: Puzzle = generator.generate(difficulty);
    let empty: usize = puzzle.board.count_empty();

    let steps: Vec<SolveStep> = match solver::solve(&mut puzzle.board) {
        Ok(steps) => steps,
        Err(solver::SolveError::Unsolvable) => {
            eprintln!("Bug: the generated puzzle cannot be solved");
            return 1;
        }
    };

    let mut tries: usize = 0;
    let mut placements: usize = 0;
    let mut backtracks: usize = 0;
    for step in &steps {
        match step {
            SolveStep::Try { .. } => tries += 1,
            SolveStep::Place { .. } => placements += 1,
            SolveStep::Backtrack { .. } => backtracks += 1,
        }
    }

    println!("{}", puzzle.board);
    println!(
        "
      empty cells = {empty}
      total steps = {}
            tries = {tries}
       placements = {placements}
       backtracks = {backtracks}",
        steps.len()
    );
    0
}

/// Print the shortest route between two locations.
fn print_route(start: &str, end: &str) -> u8 {
    if start == end {
        eprintln!("The start and the destination must differ");
        return 1;
    }
    let map: routefinder::Map = routefinder::Map::new();
    if !map.contains(start) || !map.contains(end) {
        eprintln!(
            "Unknown location. The locations are: {}",
            routefinder::LOCATIONS.join(", ")
        );
        return 1;
    }
    let route: routefinder::Route = map.shortest_route(start, end);
    match route.distance {
        Some(distance) => println!("{} (distance {distance})", route.path.join(" -> ")),
        None => {
            eprintln!("No route from {start} to {end}");
            return 1;
        }
    }
    0
}

/// Print the move list that solves the Tower of Hanoi for the given number of disks.
fn print_hanoi_solution(disks: u8) -> u8 {
    if disks == 0 || disks > 16 {
        eprintln!("The number of disks must be between 1 and 16");
        return 1;
    }
    let game: hanoi::Game = hanoi::Game::new(disks);
    let solution: Vec<(hanoi::Peg, hanoi::Peg)> = game.solution();
    for (i, (source, target)) in solution.iter().enumerate() {
        println!("{:3}. {source:?} -> {target:?}", i + 1);
    }
    println!("{} moves", solution.len());
    0
}

/// Display the saved scoreboards of a game.
fn print_scores(game: &str) -> u8 {
    if !GAMES.contains(&game) {
        eprintln!("Unknown game {game}. Use --ls to list the games.");
        return 1;
    }

    let highscores: HighScores = match crate::config::data_dir() {
        Ok(data_dir) => match SaverHighScores::new(data_dir).get_highscores() {
            Ok(Some(highscores)) => highscores,
            Ok(None) => {
                println!("No saved scores");
                return 0;
            }
            Err(error) => {
                eprintln!("Cannot read the high scores: {error}");
                return 1;
            }
        },
        Err(error) => {
            eprintln!("Cannot locate the data directory: {error}");
            return 1;
        }
    };

    let mut printed: bool = false;
    if let Some(best) = highscores.best(game) {
        println!("Best score: {best}");
        printed = true;
    }
    for (variant, scores) in highscores.boards_for(game) {
        println!("{game} {variant}:");
        for (position, score) in scores.iter().enumerate() {
            let dt: DateTime<Local> = DateTime::from(score.when);
            println!(
                "{:3}. {}s ({} moves) on {}",
                position + 1,
                score.time.as_secs(),
                score.counter,
                dt.format("%c")
            );
        }
        printed = true;
    }
    if !printed {
        println!("No saved scores for {game}");
    }
    0
}
