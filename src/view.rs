//! Read-only snapshot of the table for a presentation layer.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{GamePhase, Round};
use crate::options::Language;
use crate::result::Outcome;

/// What the player can see after a transition.
///
/// Taking two views without an action in between yields equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Current phase.
    pub phase: GamePhase,
    /// The player's cards in draw order.
    pub player_cards: Vec<Card>,
    /// The dealer's cards in draw order, hole card included.
    pub dealer_cards: Vec<Card>,
    /// Whether the dealer's second card must be shown face down.
    pub dealer_hole_hidden: bool,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's displayed value; only the up card while the hole is hidden.
    pub dealer_value: u8,
    /// Outcome once resolved.
    pub outcome: Option<Outcome>,
    /// Outcome message once resolved.
    pub message: Option<&'static str>,
    /// Whether hit and stand are accepted.
    pub can_act: bool,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

impl TableView {
    /// Builds the view of `round`, with messages in `language`.
    #[must_use]
    pub fn of(round: &Round, language: Language) -> Self {
        let phase = round.phase();
        let dealer = round.dealer();
        let dealer_hole_hidden = phase.hides_hole_card();
        let outcome = round.outcome();

        Self {
            phase,
            player_cards: round.player().cards().to_vec(),
            dealer_cards: dealer.cards().to_vec(),
            dealer_hole_hidden,
            player_value: round.player().value(),
            dealer_value: if dealer_hole_hidden {
                dealer.visible_value()
            } else {
                dealer.value()
            },
            outcome,
            message: outcome.map(|o| o.message(language)),
            can_act: phase.accepts_actions(),
            cards_remaining: round.deck().len(),
        }
    }
}
