//! The state of a single round.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{DealerHand, Hand};
use crate::result::{Outcome, Resolution};

use super::GamePhase;

/// Cards needed for the initial deal.
const INITIAL_CARDS: usize = 4;

/// Deck, both hands, and phase of one round.
///
/// `Round` is a plain value: every transition mutates it in place and never
/// touches anything outside it. [`crate::Game`] owns one behind a lock and
/// supplies freshly shuffled decks, but a round can also be driven directly.
///
/// ```
/// use bjsolo::{Card, Deck, GamePhase, Outcome, Round, Suit};
///
/// let mut round = Round::new();
/// let deck = Deck::from_draws(&[
///     Card::new(Suit::Spades, 1),
///     Card::new(Suit::Hearts, 13),
///     Card::new(Suit::Clubs, 9),
///     Card::new(Suit::Diamonds, 7),
/// ]);
/// round.deal(deck).unwrap();
/// assert_eq!(round.phase(), GamePhase::Resolved);
/// assert_eq!(round.outcome(), Some(Outcome::PlayerBlackjack));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(super) deck: Deck,
    pub(super) player: Hand,
    pub(super) dealer: DealerHand,
    pub(super) phase: GamePhase,
    pub(super) resolution: Option<Resolution>,
}

impl Round {
    /// Creates an idle round holding an unshuffled deck.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deck: Deck::new(),
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: GamePhase::Idle,
            resolution: None,
        }
    }

    /// Starts a new round from `deck`, dealing player, player, dealer, dealer.
    ///
    /// A player blackjack resolves the round on the spot. This is accepted in
    /// any phase and discards the previous round.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck` holds fewer than four cards; the current
    /// round is left untouched.
    pub fn deal(&mut self, deck: Deck) -> Result<(), DealError> {
        if deck.len() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        self.deal_from(deck);
        Ok(())
    }

    /// Deals from a deck already known to hold enough cards.
    pub(super) fn deal_from(&mut self, deck: Deck) {
        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.resolution = None;
        self.phase = GamePhase::Dealing;

        for _ in 0..2 {
            if let Ok(card) = self.deck.draw() {
                self.player.add_card(card);
            }
        }
        for _ in 0..2 {
            if let Ok(card) = self.deck.draw() {
                self.dealer.add_card(card);
            }
        }

        self.phase = GamePhase::PlayerTurn;
        log::debug!(
            "dealt player {} / dealer up {}",
            self.player.value(),
            self.dealer.visible_value()
        );

        if self.player.is_blackjack() {
            self.finish(Outcome::PlayerBlackjack, Vec::new(), false);
        }
    }

    /// Ends the round and records its resolution.
    pub(super) fn finish(
        &mut self,
        outcome: Outcome,
        dealer_drawn: Vec<Card>,
        deck_exhausted: bool,
    ) -> Resolution {
        self.dealer.reveal_hole();
        self.phase = GamePhase::Resolved;

        let resolution = Resolution {
            outcome,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            dealer_drawn,
            deck_exhausted,
        };
        log::info!(
            "round resolved: {:?} (player {}, dealer {})",
            outcome,
            resolution.player_value,
            resolution.dealer_value
        );

        self.resolution = Some(resolution.clone());
        resolution
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the resolution once the round has ended.
    #[must_use]
    pub const fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// Returns the outcome once the round has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.resolution.as_ref().map(|r| r.outcome)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
