//! Hand scoring tests.

use bjsolo::hand::score;
use bjsolo::{Card, DealerHand, Hand, Outcome, Suit};

const fn card(rank: u8) -> Card {
    Card::new(Suit::Spades, rank)
}

fn hand_of(ranks: &[u8]) -> Hand {
    let mut hand = Hand::new();
    for &rank in ranks {
        hand.add_card(card(rank));
    }
    hand
}

#[test]
fn scores_with_ace_demotion() {
    let cases: &[(&[u8], u8)] = &[
        (&[], 0),
        (&[1], 11),
        (&[1, 1], 12),
        (&[1, 1, 1], 13),
        (&[1, 1, 1, 1], 14),
        (&[1, 13], 21),
        (&[1, 1, 9], 21),
        (&[5, 6, 13], 21),
        (&[10, 9, 5], 24),
        (&[11, 12, 13], 30),
        (&[1, 10, 10], 21),
        (&[1, 1, 10, 10], 22),
    ];

    for (ranks, expected) in cases {
        let cards: Vec<Card> = ranks.iter().map(|&rank| card(rank)).collect();
        assert_eq!(score(&cards), *expected, "ranks {ranks:?}");
    }
}

#[test]
fn soft_and_hard_hands() {
    assert!(hand_of(&[1, 6]).is_soft());
    assert!(!hand_of(&[1, 6, 10]).is_soft());
    assert!(!hand_of(&[10, 7]).is_soft());
    assert_eq!(hand_of(&[1, 6, 10]).value(), 17);
}

#[test]
fn blackjack_needs_exactly_two_cards() {
    assert!(hand_of(&[1, 12]).is_blackjack());
    assert!(!hand_of(&[7, 7, 7]).is_blackjack());
    assert!(hand_of(&[10, 10, 2]).is_bust());
    assert!(!hand_of(&[1, 1, 10, 9]).is_bust());
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(Card::new(Suit::Hearts, 1));
    dealer.add_card(Card::new(Suit::Clubs, 6));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);

    dealer.reveal_hole();
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 0);
}

#[test]
fn card_codes() {
    assert_eq!(Card::new(Suit::Spades, 1).to_string(), "AS");
    assert_eq!(Card::new(Suit::Hearts, 10).to_string(), "10H");
    assert_eq!(Card::new(Suit::Diamonds, 12).to_string(), "QD");
    assert_eq!(Card::new(Suit::Clubs, 7).label(), "7");
}

#[test]
fn outcome_comparison_order() {
    assert_eq!(Outcome::compare(22, 25), Outcome::PlayerBust);
    assert_eq!(Outcome::compare(12, 22), Outcome::DealerBust);
    assert_eq!(Outcome::compare(20, 19), Outcome::PlayerWin);
    assert_eq!(Outcome::compare(17, 19), Outcome::DealerWin);
    assert_eq!(Outcome::compare(19, 19), Outcome::Push);
}
