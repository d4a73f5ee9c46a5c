//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::EmptyDeckError;

/// An ordered deck of cards, drawn from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the full deck in canonical order: suit-major
    /// (spades, hearts, diamonds, clubs), rank-minor (Ace through King).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a stacked deck that yields `draws` in the given order.
    ///
    /// ```
    /// use bjsolo::{Card, Deck, Suit};
    ///
    /// let mut deck = Deck::from_draws(&[Card::new(Suit::Hearts, 1), Card::new(Suit::Clubs, 9)]);
    /// assert_eq!(deck.draw().unwrap().rank, 1);
    /// assert_eq!(deck.draw().unwrap().rank, 9);
    /// assert!(deck.draw().is_err());
    /// ```
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Shuffles the deck in place into a uniformly random permutation.
    ///
    /// This is the Fisher-Yates shuffle: from the last index down to 1, each
    /// position is swapped with a uniformly chosen position at or below it.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
