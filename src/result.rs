//! Round outcome types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::options::Language;

/// A side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Participant {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player was dealt a natural 21.
    PlayerBlackjack,
    /// Dealer held a natural 21 when the player stood.
    DealerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher value.
    PlayerWin,
    /// Dealer has the higher value.
    DealerWin,
    /// Equal values.
    Push,
}

impl Outcome {
    /// Compares final hand values.
    ///
    /// ```
    /// use bjsolo::Outcome;
    ///
    /// assert_eq!(Outcome::compare(18, 18), Outcome::Push);
    /// assert_eq!(Outcome::compare(18, 23), Outcome::DealerBust);
    /// assert_eq!(Outcome::compare(22, 23), Outcome::PlayerBust);
    /// ```
    #[must_use]
    pub const fn compare(player_value: u8, dealer_value: u8) -> Self {
        if player_value > 21 {
            Self::PlayerBust
        } else if dealer_value > 21 {
            Self::DealerBust
        } else if player_value > dealer_value {
            Self::PlayerWin
        } else if player_value < dealer_value {
            Self::DealerWin
        } else {
            Self::Push
        }
    }

    /// Returns who won, or `None` for a push.
    #[must_use]
    pub const fn winner(self) -> Option<Participant> {
        match self {
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin => {
                Some(Participant::Player)
            }
            Self::DealerBlackjack | Self::PlayerBust | Self::DealerWin => {
                Some(Participant::Dealer)
            }
            Self::Push => None,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self, language: Language) -> &'static str {
        match language {
            Language::English => match self {
                Self::PlayerBlackjack => "Blackjack! You win!",
                Self::DealerBlackjack => "Dealer has blackjack! Dealer wins!",
                Self::PlayerBust => "You lose! (Bust)",
                Self::DealerBust => "Dealer busts! You win!",
                Self::PlayerWin => "You win!",
                Self::DealerWin => "Dealer wins!",
                Self::Push => "Push!",
            },
            Language::German => match self {
                Self::PlayerBlackjack => "Blackjack! Du gewinnst!",
                Self::DealerBlackjack => "Dealer hat Blackjack! Dealer gewinnt!",
                Self::PlayerBust => "Du hast verloren! (Überkauft)",
                Self::DealerBust => "Dealer überkauft! Du gewinnst!",
                Self::PlayerWin => "Du gewinnst!",
                Self::DealerWin => "Dealer gewinnt!",
                Self::Push => "Unentschieden!",
            },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message(Language::English))
    }
}

/// Final record of a resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The outcome category.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Cards the dealer drew after the initial deal.
    pub dealer_drawn: Vec<Card>,
    /// Whether the deck ran out before the round could be played out.
    pub deck_exhausted: bool,
}
