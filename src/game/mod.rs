//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DealError};
use crate::options::GameOptions;
use crate::result::{Outcome, Resolution};
use crate::sync::Lock;
use crate::view::TableView;

mod actions;
mod dealer;
mod round;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use round::Round;
pub use state::GamePhase;

/// A single-player blackjack table against an automated dealer.
///
/// The game owns the current [`Round`] and the random number generator
/// used to shuffle. Each action runs to completion under an internal lock,
/// including the dealer's whole turn on [`Game::stand`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The round being played.
    round: Lock<Round>,
    /// Random number generator.
    rng: Lock<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// No round is dealt until [`Game::start_round`] is called.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::{Game, GameOptions, GamePhase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// game.start_round();
    /// assert_ne!(game.phase(), GamePhase::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            round: Lock::new(Round::new()),
            rng: Lock::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates a fresh 52-card deck shuffled with the game's generator.
    fn shuffled_deck(&self) -> Deck {
        let mut deck = Deck::new();
        self.rng.with(|rng| deck.shuffle(rng));
        deck
    }

    /// Starts a new round with a freshly shuffled deck.
    ///
    /// Any previous round is discarded. If the player is dealt a blackjack
    /// the round is already resolved when this returns.
    pub fn start_round(&self) {
        log::debug!("starting round");
        let deck = self.shuffled_deck();
        self.round.with(|round| round.deal_from(deck));
    }

    /// Starts a new round from a prepared deck, e.g. [`Deck::from_draws`].
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than four cards.
    pub fn start_round_with(&self, deck: Deck) -> Result<(), DealError> {
        log::debug!("starting round from a prepared deck of {}", deck.len());
        self.round.with(|round| round.deal(deck))
    }

    /// Player action: Hit.
    ///
    /// Returns the drawn card, or `None` if the deck was empty.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&self) -> Result<Option<Card>, ActionError> {
        let policy = self.options.exhaustion;
        self.round.with(|round| round.hit(policy))
    }

    /// Player action: Stand. The dealer plays out and the round resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&self) -> Result<Resolution, ActionError> {
        self.round.with(Round::stand)
    }

    /// Returns a snapshot of the table.
    pub fn view(&self) -> TableView {
        let language = self.options.language;
        self.round.with(|round| TableView::of(round, language))
    }

    /// Returns a copy of the current round.
    pub fn round(&self) -> Round {
        self.round.with(|round| round.clone())
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.round.with(|round| round.phase())
    }

    /// Returns the outcome of the current round, if resolved.
    pub fn outcome(&self) -> Option<Outcome> {
        self.round.with(|round| round.outcome())
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.round.with(|round| round.deck().len())
    }
}
