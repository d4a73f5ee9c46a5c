//! Error types for game operations.

use thiserror::Error;

/// A draw was attempted on an exhausted deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Hit or stand outside the player's turn.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than four cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}
