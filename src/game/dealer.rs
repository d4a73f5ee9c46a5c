extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::{Outcome, Resolution};

use super::Round;

/// The dealer keeps drawing below this value.
pub const DEALER_STANDS_ON: u8 = 17;

impl Round {
    /// Dealer plays their hand and the round is resolved.
    ///
    /// The dealer first draws until matching the player's total (when the
    /// player is not bust), then keeps drawing below 17. Both loops stop on
    /// the first bust. An empty deck stops the dealer where they are.
    pub(super) fn dealer_play(&mut self) -> Resolution {
        let player_value = self.player.value();
        let mut drawn = Vec::new();
        let mut exhausted = false;

        while player_value <= 21 && self.dealer.value() < player_value {
            if !self.dealer_draw(&mut drawn) {
                exhausted = true;
                break;
            }
        }

        while !exhausted && self.dealer.value() < DEALER_STANDS_ON {
            if !self.dealer_draw(&mut drawn) {
                exhausted = true;
            }
        }

        let outcome = Outcome::compare(player_value, self.dealer.value());
        self.finish(outcome, drawn, exhausted)
    }

    /// Draws one dealer card. Returns `false` if the deck is empty.
    fn dealer_draw(&mut self, drawn: &mut Vec<Card>) -> bool {
        match self.deck.draw() {
            Ok(card) => {
                self.dealer.add_card(card);
                drawn.push(card);
                log::trace!("dealer draws {card}, value {}", self.dealer.value());
                true
            }
            Err(err) => {
                log::warn!("dealer stops drawing: {err}");
                false
            }
        }
    }
}
