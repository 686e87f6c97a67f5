/*
solitaire.rs

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

//! Klondike solitaire with a one-card draw.
//!
//! Seven tableau columns, a stock and waste, and four per-suit foundations.
//! Undo restores full-state snapshots.

use log::debug;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 7;

/// Number of ranks per suit.
pub const KING: u8 = 13;

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

/// A playing card. Rank 1 is the ace, 13 the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
    pub face_up: bool,
}

impl Card {
    fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Whether the other card may rest on this one in the tableau:
    /// alternating color, one rank lower.
    fn accepts_in_tableau(&self, other: &Card) -> bool {
        self.suit.is_red() != other.suit.is_red() && other.rank + 1 == self.rank
    }
}

/// A suggested move, in the order [`Game::hint`] probes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Move the waste card to its foundation.
    WasteToFoundation,

    /// Move the top card of a column to its foundation.
    TableauToFoundation(usize),

    /// Move the waste card to a column.
    WasteToTableau(usize),

    /// Move the face-up suffix starting at `index` to another column.
    TableauToTableau {
        from: usize,
        index: usize,
        to: usize,
    },

    /// Draw from the stock.
    Draw,

    /// Recycle the waste into the stock.
    Recycle,
}

/// Snapshot of the whole layout, for undo.
#[derive(Clone)]
struct Snapshot {
    stock: VecDeque<Card>,
    waste: Vec<Card>,
    foundations: [Vec<Card>; 4],
    columns: [Vec<Card>; COLUMN_COUNT],
    moves: usize,
}

/// Klondike game state.
pub struct Game {
    /// Face-down draw pile, next card at the front.
    stock: VecDeque<Card>,

    /// Face-up discard pile, playable card at the end.
    waste: Vec<Card>,

    /// The four foundations, indexed by [`Suit::index`].
    foundations: [Vec<Card>; 4],

    /// The seven tableau columns, bottom card first.
    columns: [Vec<Card>; COLUMN_COUNT],

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
    /// Create a game with a shuffled deck dealt out.
    pub fn new() -> Self {
        let mut deck: Vec<Card> = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in 1..=KING {
                deck.push(Card::new(suit, rank));
            }
        }
        deck.shuffle(&mut rand::rng());

        let mut columns: [Vec<Card>; COLUMN_COUNT] = Default::default();
        for (index, column) in columns.iter_mut().enumerate() {
            for _ in 0..=index {
                column.push(deck.pop().expect("deck holds 52 cards"));
            }
            column.last_mut().expect("column is not empty").face_up = true;
        }

        Self {
            stock: deck.into_iter().collect(),
            waste: Vec::new(),
            foundations: Default::default(),
            columns,
            history: Vec::new(),
            moves: 0,
        }
    }

    /// Return the stock size.
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Return the waste pile, playable card at the end.
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    /// Return a foundation pile.
    pub fn foundation(&self, suit: Suit) -> &[Card] {
        &self.foundations[suit.index()]
    }

    /// Return a tableau column, bottom card first.
    pub fn column(&self, index: usize) -> &[Card] {
        &self.columns[index]
    }

    /// Number of cards on the foundations.
    pub fn founded(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    /// Whether all 52 cards reached the foundations.
    pub fn is_won(&self) -> bool {
        self.founded() == 52
    }

    /// Draw a card from the stock onto the waste, or recycle the waste into
    /// the stock when the stock is empty. Both count as moves.
    pub fn draw(&mut self) -> bool {
        if let Some(mut card) = self.stock.pop_front() {
            self.snapshot();
            card.face_up = true;
            self.waste.push(card);
            self.moves += 1;
            return true;
        }
        if self.waste.is_empty() {
            return false;
        }
        self.snapshot();
        // Last discarded card ends up at the bottom of the stock
        while let Some(mut card) = self.waste.pop() {
            card.face_up = false;
            self.stock.push_back(card);
        }
        self.moves += 1;
        debug!("Recycled the waste: {} cards back in the stock", self.stock.len());
        true
    }

    /// Whether a card may land on a column: kings on empty columns,
    /// otherwise alternating color and one rank lower than the top card.
    fn fits_column(&self, card: &Card, column: usize) -> bool {
        match self.columns[column].last() {
            Some(top) => top.face_up && top.accepts_in_tableau(card),
            None => card.rank == KING,
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

    /// Move the waste card to its foundation.
    pub fn waste_to_foundation(&mut self) -> bool {
        let card: Card = match self.waste.last() {
            Some(c) if self.fits_foundation(c) => *c,
            _ => return false,
        };
        self.snapshot();
        self.waste.pop();
        self.foundations[card.suit.index()].push(card);
        self.moves += 1;
        true
    }

    /// Move the waste card to a column.
    pub fn waste_to_tableau(&mut self, column: usize) -> bool {
        if column >= COLUMN_COUNT {
            return false;
        }
        let card: Card = match self.waste.last() {
            Some(c) if self.fits_column(c, column) => *c,
            _ => return false,
        };
        self.snapshot();
        self.waste.pop();
        self.columns[column].push(card);
        self.moves += 1;
        true
    }

    /// Move the top card of a column to its foundation. An uncovered
    /// face-down card flips up.
    pub fn tableau_to_foundation(&mut self, column: usize) -> bool {
        if column >= COLUMN_COUNT {
            return false;
        }
        let card: Card = match self.columns[column].last() {
            Some(c) if c.face_up && self.fits_foundation(c) => *c,
            _ => return false,
        };
        self.snapshot();
        self.columns[column].pop();
        self.foundations[card.suit.index()].push(card);
        self.flip_exposed(column);
        self.moves += 1;
        true
    }

    /// Move the face-up suffix of a column starting at `index` to another
    /// column. An uncovered face-down card flips up.
    pub fn tableau_to_tableau(&mut self, from: usize, index: usize, to: usize) -> bool {
        if from == to || from >= COLUMN_COUNT || to >= COLUMN_COUNT {
            return false;
        }
        let lead: Card = match self.columns[from].get(index) {
            Some(c) if c.face_up => *c,
            _ => return false,
        };
        if !self.fits_column(&lead, to) {
            return false;
        }
        self.snapshot();
        let suffix: Vec<Card> = self.columns[from].split_off(index);
        self.columns[to].extend(suffix);
        self.flip_exposed(from);
        self.moves += 1;
        true
    }

    /// Flip the top card of a column face up, if it is face down.
    fn flip_exposed(&mut self, column: usize) {
        if let Some(card) = self.columns[column].last_mut() {
            card.face_up = true;
        }
    }

    /// Suggest the first legal move, probing foundation moves first, then
    /// tableau moves, then the stock.
    pub fn hint(&self) -> Option<Hint> {
        if let Some(card) = self.waste.last() {
            if self.fits_foundation(card) {
                return Some(Hint::WasteToFoundation);
            }
        }
        for from in 0..COLUMN_COUNT {
            if let Some(card) = self.columns[from].last() {
                if card.face_up && self.fits_foundation(card) {
                    return Some(Hint::TableauToFoundation(from));
                }
            }
        }
        if let Some(card) = self.waste.last() {
            for to in 0..COLUMN_COUNT {
                if self.fits_column(card, to) {
                    return Some(Hint::WasteToTableau(to));
                }
            }
        }
        for from in 0..COLUMN_COUNT {
            for (index, card) in self.columns[from].iter().enumerate() {
                if !card.face_up {
                    continue;
                }
                // Moving a full column led by a king to an empty column
                // achieves nothing
                let uncovers: bool = index > 0 || card.rank != KING;
                for to in 0..COLUMN_COUNT {
                    if from != to && uncovers && self.fits_column(card, to) {
                        return Some(Hint::TableauToTableau { from, index, to });
                    }
                }
            }
        }
        if !self.stock.is_empty() {
            return Some(Hint::Draw);
        }
        if !self.waste.is_empty() {
            return Some(Hint::Recycle);
        }
        None
    }

    /// Undo the last move.
    pub fn undo(&mut self) -> bool {
        let snapshot: Snapshot = match self.history.pop() {
            Some(s) => s,
            None => return false,
        };
        self.stock = snapshot.stock;
        self.waste = snapshot.waste;
        self.foundations = snapshot.foundations;
        self.columns = snapshot.columns;
        self.moves = snapshot.moves;
        true
    }

    /// Record the current layout for undo.
    fn snapshot(&mut self) {
        self.history.push(Snapshot {
            stock: self.stock.clone(),
            waste: self.waste.clone(),
            foundations: self.foundations.clone(),
            columns: self.columns.clone(),
            moves: self.moves,
        });
    }
}
