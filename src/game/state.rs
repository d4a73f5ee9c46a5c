//! Round phase.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// No round has been dealt yet.
    #[default]
    Idle,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended; only a new deal is accepted.
    Resolved,
}

impl GamePhase {
    /// Returns whether hit and stand are currently accepted.
    #[must_use]
    pub const fn accepts_actions(self) -> bool {
        matches!(self, Self::PlayerTurn)
    }

    /// Returns whether the dealer's second card is face down.
    #[must_use]
    pub const fn hides_hole_card(self) -> bool {
        matches!(self, Self::Dealing | Self::PlayerTurn)
    }
}
