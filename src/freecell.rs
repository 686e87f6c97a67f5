/*
freecell.rs

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

//! FreeCell: all 52 cards dealt face up over eight columns, with four free
//! cells holding one card each.
//!
//! Unlike Klondike, empty columns accept any card, not just kings.

use log::debug;
use rand::seq::SliceRandom;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 8;

/// Number of free cells.
pub const CELL_COUNT: usize = 4;

/// Number of ranks per suit.
const KING: u8 = 13;

/// The four suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Whether the suit is red.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    /// Index of the suit's foundation pile.
    fn index(&self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }
}

/// A playing card. Rank 1 is the ace, 13 the king. Every card is face up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    /// Whether the other card may rest on this one in the tableau:
    /// alternating color, one rank lower.
    fn accepts(&self, other: &Card) -> bool {
        self.suit.is_red() != other.suit.is_red() && other.rank + 1 == self.rank
    }
}

/// Snapshot of the whole layout, for undo.
#[derive(Clone)]
struct Snapshot {
    columns: [Vec<Card>; COLUMN_COUNT],
    cells: [Option<Card>; CELL_COUNT],
    foundations: [Vec<Card>; 4],
    moves: usize,
}

/// FreeCell game state.
pub struct Game {
    /// The eight tableau columns, bottom card first.
    columns: [Vec<Card>; COLUMN_COUNT],

    /// The four free cells.
    cells: [Option<Card>; CELL_COUNT],

    /// The four foundations, indexed by [`Suit::index`].
    foundations: [Vec<Card>; 4],

    /// Snapshots for undo.
    history: Vec<Snapshot>,

    /// Number of moves played.
    pub moves: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a game with a shuffled deck dealt over the columns: the first
    /// four columns take seven cards, the last four take six.
    pub fn new() -> Self {
        let mut deck: Vec<Card> = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in 1..=KING {
                deck.push(Card { suit, rank });
            }
        }
        deck.shuffle(&mut rand::rng());

        let mut columns: [Vec<Card>; COLUMN_COUNT] = Default::default();
        for (index, column) in columns.iter_mut().enumerate() {
            let size: usize = if index < 4 { 7 } else { 6 };
            for _ in 0..size {
                column.push(deck.pop().expect("deck holds 52 cards"));
            }
        }

        Self {
            columns,
            cells: [None; CELL_COUNT],
            foundations: Default::default(),
            history: Vec::new(),
            moves: 0,
        }
    }

    /// Return a tableau column, bottom card first.
    pub fn column(&self, index: usize) -> &[Card] {
        &self.columns[index]
    }

    /// Return the card in a free cell.
    pub fn cell(&self, index: usize) -> Option<Card> {
        self.cells[index]
    }

    /// Return a foundation pile.
    pub fn foundation(&self, suit: Suit) -> &[Card] {
        &self.foundations[suit.index()]
    }

    /// Number of cards on the foundations.
    pub fn founded(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    /// Whether all 52 cards reached the foundations.
    pub fn is_won(&self) -> bool {
        self.founded() == 52
    }

    /// Whether the last `count` cards of a column form a movable sequence:
    /// alternating colors, descending by one.
    fn is_sequence(&self, column: usize, count: usize) -> bool {
        let cards: &[Card] = &self.columns[column];
        if count == 0 || count > cards.len() {
            return false;
        }
        let suffix: &[Card] = &cards[cards.len() - count..];
        suffix.windows(2).all(|pair| pair[0].accepts(&pair[1]))
    }

    /// Whether a card may land on a column. Empty columns accept any card.
    fn fits_column(&self, card: &Card, column: usize) -> bool {
        match self.columns[column].last() {
            Some(top) => top.accepts(card),
            None => true,
        }
    }

    /// Whether a card may land on its foundation: ace on an empty pile,
    /// otherwise one rank above the top card.
    fn fits_foundation(&self, card: &Card) -> bool {
        match self.foundations[card.suit.index()].last() {
            Some(top) => top.rank + 1 == card.rank,
            None => card.rank == 1,
        }
    }

    /// Move the last `count` cards of a column to another column. The cards
    /// must form a sequence and its lead card must fit the destination.
    pub fn column_to_column(&mut self, from: usize, count: usize, to: usize) -> bool {
        if from == to || from >= COLUMN_COUNT || to >= COLUMN_COUNT {
            return false;
        }
        if !self.is_sequence(from, count) {
            return false;
        }
        let start: usize = self.columns[from].len() - count;
        let lead: Card = self.columns[from][start];
        if !self.fits_column(&lead, to) {
            return false;
        }
        self.snapshot();
        let suffix: Vec<Card> = self.columns[from].split_off(start);
        self.columns[to].extend(suffix);
        self.moves += 1;
        true
    }

    /// Move the top card of a column to an empty free cell.
    pub fn column_to_cell(&mut self, from: usize, cell: usize) -> bool {
        if from >= COLUMN_COUNT || cell >= CELL_COUNT || self.cells[cell].is_some() {
            return false;
        }
        if self.columns[from].is_empty() {
            return false;
        }
        self.snapshot();
        self.cells[cell] = self.columns[from].pop();
        self.moves += 1;
        true
    }

    /// Move a free-cell card to a column.
    pub fn cell_to_column(&mut self, cell: usize, to: usize) -> bool {
        if cell >= CELL_COUNT || to >= COLUMN_COUNT {
            return false;
        }
        let card: Card = match self.cells[cell] {
            Some(c) if self.fits_column(&c, to) => c,
            _ => return false,
        };
        self.snapshot();
        self.cells[cell] = None;
        self.columns[to].push(card);
        self.moves += 1;
        true
    }

    /// Move the top card of a column to its foundation.
    pub fn column_to_foundation(&mut self, from: usize) -> bool {
        if from >= COLUMN_COUNT {
            return false;
        }
        let card: Card = match self.columns[from].last() {
            Some(c) if self.fits_foundation(c) => *c,
            _ => return false,
        };
        self.snapshot();
        self.columns[from].pop();
        self.foundations[card.suit.index()].push(card);
        self.moves += 1;
        true
    }

    /// Move a free-cell card to its foundation.
    pub fn cell_to_foundation(&mut self, cell: usize) -> bool {
        if cell >= CELL_COUNT {
            return false;
        }
        let card: Card = match self.cells[cell] {
            Some(c) if self.fits_foundation(&c) => c,
            _ => return false,
        };
        self.snapshot();
        self.cells[cell] = None;
        self.foundations[card.suit.index()].push(card);
        self.moves += 1;
        true
    }

    /// Repeatedly send column tops and free-cell cards that fit their
    /// foundations, until nothing moves. Returns the number of cards moved.
    pub fn auto_move(&mut self) -> usize {
        let mut sent: usize = 0;
        loop {
            let mut progressed: bool = false;
            for from in 0..COLUMN_COUNT {
                if self.column_to_foundation(from) {
                    progressed = true;
                    sent += 1;
                }
            }
            for cell in 0..CELL_COUNT {
                if self.cell_to_foundation(cell) {
                    progressed = true;
                    sent += 1;
                }
            }
            if !progressed {
                break;
            }
        }
        if sent > 0 {
            debug!("Auto-moved {sent} cards to the foundations");
        }
        sent
    }

    /// Undo the last move.
    pub fn undo(&mut self) -> bool {
        let snapshot: Snapshot = match self.history.pop() {
            Some(s) => s,
            None => return false,
        };
        self.columns = snapshot.columns;
        self.cells = snapshot.cells;
        self.foundations = snapshot.foundations;
        self.moves = snapshot.moves;
        true
    }

    /// Record the current layout for undo.
    fn snapshot(&mut self) {
        self.history.push(Snapshot {
            columns: self.columns.clone(),
            cells: self.cells,
            foundations: self.foundations.clone(),
            moves: self.moves,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(suit: Suit, rank: u8) -> Card {
        Card { suit, rank }
    }

    /// Build a game with empty piles everywhere.
    fn empty_game() -> Game {
        let mut game: Game = Game::new();
        game.columns = Default::default();
        game.cells = [None; CELL_COUNT];
        game.foundations = Default::default();
        game.history.clear();
        game.moves = 0;
        game
    }

    #[test]
    fn deal_covers_all_cards() {
        let game: Game = Game::new();
        let sizes: Vec<usize> = (0..COLUMN_COUNT).map(|i| game.column(i).len()).collect();
        assert_eq!(sizes, vec![7, 7, 7, 7, 6, 6, 6, 6]);
        assert!((0..CELL_COUNT).all(|i| game.cell(i).is_none()));
        assert_eq!(game.founded(), 0);
    }

    #[test]
    fn sequence_move_requires_alternating_descending_cards() {
        let mut game: Game = empty_game();
        game.columns[0].push(card(Suit::Spades, 9));
        game.columns[0].push(card(Suit::Hearts, 8));
        game.columns[0].push(card(Suit::Clubs, 7));
        game.columns[1].push(card(Suit::Diamonds, 10));

        // The black 9 leads the run onto the red 10
        assert!(game.column_to_column(0, 3, 1));
        assert_eq!(game.column(1).len(), 4);
        assert!(game.column(0).is_empty());
    }

    #[test]
    fn broken_sequence_is_rejected() {
        let mut game: Game = empty_game();
        game.columns[0].push(card(Suit::Spades, 9));
        game.columns[0].push(card(Suit::Clubs, 8)); // Same color as the 9
        game.columns[1].push(card(Suit::Diamonds, 10));
        assert!(!game.column_to_column(0, 2, 1));
        assert_eq!(game.moves, 0);
    }

    #[test]
    fn empty_columns_accept_any_card() {
        let mut game: Game = empty_game();
        game.columns[0].push(card(Suit::Hearts, 4));
        assert!(game.column_to_column(0, 1, 5));
        assert_eq!(game.column(5).len(), 1);
    }

    #[test]
    fn free_cells_hold_a_single_card() {
        let mut game: Game = empty_game();
        game.columns[0].push(card(Suit::Hearts, 4));
        game.columns[0].push(card(Suit::Spades, 3));

        assert!(game.column_to_cell(0, 0));
        assert_eq!(game.cell(0), Some(card(Suit::Spades, 3)));
        // The cell is occupied
        assert!(!game.column_to_cell(0, 0));

        assert!(game.cell_to_column(0, 0));
        assert_eq!(game.column(0).len(), 2);
        assert!(game.cell(0).is_none());
    }

    #[test]
    fn foundations_build_up_by_suit() {
        let mut game: Game = empty_game();
        game.columns[0].push(card(Suit::Clubs, 2));
        assert!(!game.column_to_foundation(0));

        game.columns[0].push(card(Suit::Clubs, 1));
        assert!(game.column_to_foundation(0));
        assert!(game.column_to_foundation(0));
        assert_eq!(game.foundation(Suit::Clubs).len(), 2);
    }

    #[test]
    fn auto_move_drains_everything_it_can() {
        let mut game: Game = empty_game();
        // Ace buried under the 2: first pass founds the ace on another
        // column, then the 2 follows
        game.columns[0].push(card(Suit::Hearts, 2));
        game.columns[1].push(card(Suit::Hearts, 1));
        game.cells[2] = Some(card(Suit::Hearts, 3));
        game.columns[2].push(card(Suit::Spades, 5));

        assert_eq!(game.auto_move(), 3);
        assert_eq!(game.foundation(Suit::Hearts).len(), 3);
        assert!(game.cell(2).is_none());
        assert_eq!(game.column(2).len(), 1);
    }

    #[test]
    fn undo_restores_the_layout() {
        let mut game: Game = empty_game();
        game.columns[0].push(card(Suit::Hearts, 4));
        assert!(game.column_to_cell(0, 1));
        assert!(game.undo());
        assert_eq!(game.column(0).len(), 1);
        assert!(game.cell(1).is_none());
        assert_eq!(game.moves, 0);
        assert!(!game.undo());
    }

    #[test]
    fn won_when_the_foundations_are_full() {
        let mut game: Game = empty_game();
        for suit in Suit::ALL {
            for rank in 1..=KING {
                game.foundations[suit.index()].push(card(suit, rank));
            }
        }
        assert!(game.is_won());
    }
}
