use std::collections::HashSet;

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::deck::Deck;

#[test]
fn same_seed_same_order() {
    let mut a = Deck::new_with_seed(7);
    let mut b = Deck::new_with_seed(7);
    for _ in 0..52 {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn first_52_draws_are_distinct() {
    let mut deck = Deck::new_with_seed(11);
    let mut seen = HashSet::new();
    for _ in 0..52 {
        assert!(seen.insert(deck.draw()));
    }
    assert_eq!(seen.len(), 52);
}

#[test]
fn exhausted_deck_refills_instead_of_failing() {
    let mut deck = Deck::new_with_seed(3);
    for _ in 0..52 {
        deck.draw();
    }
    assert_eq!(deck.remaining(), 0);
    // 53rd draw comes from a fresh shuffled pile
    let _ = deck.draw();
    assert_eq!(deck.remaining(), 51);
}

#[test]
fn stacked_deck_draws_in_given_order() {
    let order = vec![
        Card {
            suit: Suit::Spades,
            rank: Rank::Ace,
        },
        Card {
            suit: Suit::Hearts,
            rank: Rank::King,
        },
    ];
    let mut deck = Deck::stacked(order.clone());
    assert_eq!(deck.draw(), order[0]);
    assert_eq!(deck.draw(), order[1]);
}

#[test]
fn burn_discards_one_card() {
    let mut deck = Deck::new_with_seed(5);
    deck.burn();
    assert_eq!(deck.remaining(), 51);
}
