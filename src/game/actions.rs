extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::options::ExhaustionPolicy;
use crate::result::{Outcome, Resolution};

use super::{GamePhase, Round};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase.accepts_actions() {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting resolves the round. Returns `None` when the deck was empty;
    /// `policy` decides whether that resolves the round or is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn hit(&mut self, policy: ExhaustionPolicy) -> Result<Option<Card>, ActionError> {
        self.ensure_player_turn()?;

        let Ok(card) = self.deck.draw() else {
            log::warn!("player hit on an empty deck ({policy:?})");
            if policy == ExhaustionPolicy::Resolve {
                self.resolve_exhausted();
            }
            return Ok(None);
        };

        self.player.add_card(card);
        log::trace!("player draws {card}, value {}", self.player.value());

        if self.player.is_bust() {
            self.finish(Outcome::PlayerBust, Vec::new(), false);
        }

        Ok(Some(card))
    }

    /// Player action: Stand (hand over to the dealer).
    ///
    /// Reveals the hole card; a dealer blackjack wins outright, otherwise the
    /// dealer plays out their hand. The round is always resolved afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player's turn.
    pub fn stand(&mut self) -> Result<Resolution, ActionError> {
        self.ensure_player_turn()?;

        self.phase = GamePhase::DealerTurn;
        self.dealer.reveal_hole();
        log::debug!(
            "player stands on {}, dealer shows {}",
            self.player.value(),
            self.dealer.value()
        );

        if self.dealer.is_blackjack() {
            return Ok(self.finish(Outcome::DealerBlackjack, Vec::new(), false));
        }

        Ok(self.dealer_play())
    }

    /// Ends the round early because the deck ran dry during the player's turn.
    fn resolve_exhausted(&mut self) {
        let outcome = if self.dealer.is_blackjack() {
            Outcome::DealerBlackjack
        } else {
            Outcome::compare(self.player.value(), self.dealer.value())
        };
        self.finish(outcome, Vec::new(), true);
    }
}
