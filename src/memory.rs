/*
memory.rs

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

//! Memory match: find the eight symbol pairs among sixteen face-down cards.
//!
//! The UI flips mismatched cards back after a delay; here the pending pair
//! stays face up until [`Game::resolve`] settles it, which is the tick the
//! animation would fire on.

use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Number of distinct symbols. Each appears on two cards.
pub const PAIR_COUNT: usize = 8;

/// Points awarded for a match.
const MATCH_POINTS: u32 = 100;

/// Points deducted on a mismatch.
const MISMATCH_PENALTY: u32 = 10;

/// State of one card.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// Symbol index, 0 to [`PAIR_COUNT`] - 1.
    pub symbol: u8,

    /// Whether the card is face up.
    pub flipped: bool,

    /// Whether the card found its pair.
    pub matched: bool,
}

/// Result of flipping a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The flip was rejected (face-up card, matched card, or pending pair).
    Rejected,

    /// The first card of a pair is now face up.
    First,

    /// The second card matched the first.
    Matched,

    /// The second card did not match; [`Game::resolve`] flips both back.
    Mismatched,

    /// The last pair was matched: the game is complete.
    Complete,
}

/// Memory match game state.
pub struct Game {
    /// Card states, keyed by card index.
    cards: HashMap<usize, Card>,

    /// Indexes of the currently face-up, unmatched cards (at most two).
    flipped: Vec<usize>,

    /// Whether the two flipped cards are waiting to be flipped back.
    pending_mismatch: bool,

    /// Current score.
    pub score: u32,

    /// Number of pair attempts.
    pub moves: usize,

    /// Number of matched pairs.
    pub matched_pairs: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with the sixteen cards shuffled.
    pub fn new() -> Self {
        let mut symbols: Vec<u8> = Vec::with_capacity(PAIR_COUNT * 2);
        for symbol in 0..PAIR_COUNT as u8 {
            symbols.push(symbol);
            symbols.push(symbol);
        }
        symbols.shuffle(&mut rand::rng());

        let mut cards: HashMap<usize, Card> = HashMap::with_capacity(symbols.len());
        for (index, symbol) in symbols.into_iter().enumerate() {
            cards.insert(
                index,
                Card {
                    symbol,
                    flipped: false,
                    matched: false,
                },
            );
        }

        Self {
            cards,
            flipped: Vec::with_capacity(2),
            pending_mismatch: false,
            score: 0,
            moves: 0,
            matched_pairs: 0,
        }
    }

    /// Number of cards on the board.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the board has no cards. The board always has cards; this
    /// exists for completeness with [`Game::len`].
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Return the state of a card.
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(&index)
    }

    /// Whether all pairs were found.
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == PAIR_COUNT
    }

    /// Flip a card face up.
    ///
    /// Flipping the second card of an attempt counts a move and settles the
    /// pair: a match locks both cards and scores, a mismatch waits for
    /// [`Game::resolve`].
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.pending_mismatch || self.flipped.len() >= 2 {
            return FlipOutcome::Rejected;
        }
        let card: &mut Card = match self.cards.get_mut(&index) {
            Some(c) => c,
            None => return FlipOutcome::Rejected,
        };
        if card.flipped || card.matched {
            return FlipOutcome::Rejected;
        }
        card.flipped = true;
        self.flipped.push(index);

        if self.flipped.len() < 2 {
            return FlipOutcome::First;
        }

        self.moves += 1;
        let first: usize = self.flipped[0];
        let second: usize = self.flipped[1];
        if self.cards[&first].symbol == self.cards[&second].symbol {
            self.cards.get_mut(&first).expect("card exists").matched = true;
            self.cards.get_mut(&second).expect("card exists").matched = true;
            self.flipped.clear();
            self.score += MATCH_POINTS;
            self.matched_pairs += 1;
            if self.is_complete() {
                FlipOutcome::Complete
            } else {
                FlipOutcome::Matched
            }
        } else {
            self.score = self.score.saturating_sub(MISMATCH_PENALTY);
            self.pending_mismatch = true;
            FlipOutcome::Mismatched
        }
    }

    /// Flip a pending mismatched pair back face down.
    pub fn resolve(&mut self) {
        if !self.pending_mismatch {
            return;
        }
        for index in self.flipped.drain(..) {
            if let Some(card) = self.cards.get_mut(&index) {
                card.flipped = false;
            }
        }
        self.pending_mismatch = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Return two indexes holding the same symbol and one holding another.
    fn pair_and_odd(game: &Game) -> (usize, usize, usize) {
        let mut pair: Option<(usize, usize)> = None;
        for i in 0..game.len() {
            for j in i + 1..game.len() {
                if game.card(i).unwrap().symbol == game.card(j).unwrap().symbol {
                    pair = Some((i, j));
                    break;
                }
            }
            if pair.is_some() {
                break;
            }
        }
        let (a, b) = pair.expect("every symbol appears twice");
        let odd: usize = (0..game.len())
            .find(|i| game.card(*i).unwrap().symbol != game.card(a).unwrap().symbol)
            .expect("more than one symbol");
        (a, b, odd)
    }

    #[test]
    fn board_holds_eight_pairs() {
        let game: Game = Game::new();
        assert_eq!(game.len(), PAIR_COUNT * 2);
        let mut counts: HashMap<u8, usize> = HashMap::new();
        for index in 0..game.len() {
            *counts.entry(game.card(index).unwrap().symbol).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), PAIR_COUNT);
        assert!(counts.values().all(|c| *c == 2));
    }

    #[test]
    fn matching_pair_scores_and_locks() {
        let mut game: Game = Game::new();
        let (a, b, _) = pair_and_odd(&game);
        assert_eq!(game.flip(a), FlipOutcome::First);
        assert_eq!(game.flip(b), FlipOutcome::Matched);
        assert_eq!(game.score, 100);
        assert_eq!(game.moves, 1);
        assert_eq!(game.matched_pairs, 1);
        assert!(game.card(a).unwrap().matched);
        // Matched cards cannot be flipped again
        assert_eq!(game.flip(a), FlipOutcome::Rejected);
    }

    #[test]
    fn mismatch_deducts_and_resolves_face_down() {
        let mut game: Game = Game::new();
        let (a, _, odd) = pair_and_odd(&game);
        game.score = 25;
        game.flip(a);
        assert_eq!(game.flip(odd), FlipOutcome::Mismatched);
        assert_eq!(game.score, 15);
        // The pair is locked until resolved
        assert_eq!(game.flip(a), FlipOutcome::Rejected);
        game.resolve();
        assert!(!game.card(a).unwrap().flipped);
        assert!(!game.card(odd).unwrap().flipped);
        assert_eq!(game.flip(a), FlipOutcome::First);
    }

    #[test]
    fn score_never_goes_negative() {
        let mut game: Game = Game::new();
        let (a, _, odd) = pair_and_odd(&game);
        game.flip(a);
        game.flip(odd);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn matching_every_pair_completes_the_game() {
        let mut game: Game = Game::new();
        let mut by_symbol: HashMap<u8, Vec<usize>> = HashMap::new();
        for index in 0..game.len() {
            by_symbol
                .entry(game.card(index).unwrap().symbol)
                .or_default()
                .push(index);
        }
        let mut outcomes: Vec<FlipOutcome> = Vec::new();
        for indexes in by_symbol.values() {
            game.flip(indexes[0]);
            outcomes.push(game.flip(indexes[1]));
        }
        assert!(game.is_complete());
        assert_eq!(game.score, PAIR_COUNT as u32 * 100);
        assert_eq!(outcomes.last(), Some(&FlipOutcome::Complete));
    }
}
