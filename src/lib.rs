//! A single-player blackjack engine against an automated dealer, with
//! optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals each round from a freshly
//! shuffled 52-card deck, accepts hit and stand, plays the dealer's turn,
//! and exposes a [`TableView`] snapshot after every transition.
//!
//! # Example
//!
//! ```
//! use bjsolo::{Game, GameOptions, GamePhase};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start_round();
//! if game.phase() == GamePhase::PlayerTurn {
//!     let resolution = game.stand().unwrap();
//!     println!("{}", resolution.outcome);
//! }
//! assert_eq!(game.phase(), GamePhase::Resolved);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
mod sync;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, EmptyDeckError};
pub use game::{DEALER_STANDS_ON, Game, GamePhase, Round};
pub use hand::{DealerHand, Hand};
pub use options::{ExhaustionPolicy, GameOptions, Language};
pub use result::{Outcome, Participant, Resolution};
pub use view::TableView;
