use holdem_engine::cards::{Card, Rank as R, Suit as S};
use holdem_engine::hand::{evaluate_five, evaluate_seven, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Spades, R::Ace),
        c(S::Spades, R::King),
        c(S::Spades, R::Queen),
        c(S::Spades, R::Jack),
        c(S::Spades, R::Ten),
    ];
    let rank = evaluate_five(&cards);
    assert_eq!(rank.category, Category::StraightFlush);
    assert_eq!(rank.tiebreaks[0], 14);
}

#[test]
fn wheel_straight_plays_ace_low() {
    let wheel = [
        c(S::Hearts, R::Ace),
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
        c(S::Spades, R::Five),
    ];
    let rank = evaluate_five(&wheel);
    assert_eq!(rank.category, Category::Straight);
    assert_eq!(rank.tiebreaks[0], 5);

    let six_high = [
        c(S::Hearts, R::Two),
        c(S::Clubs, R::Three),
        c(S::Diamonds, R::Four),
        c(S::Spades, R::Five),
        c(S::Hearts, R::Six),
    ];
    let stronger = evaluate_five(&six_high);
    assert_eq!(stronger.category, Category::Straight);
    assert_eq!(stronger.tiebreaks[0], 6);
    assert!(stronger > rank);
}

#[test]
fn quads_carry_quad_rank_then_kicker() {
    let cards = [
        c(S::Clubs, R::Nine),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Nine),
        c(S::Clubs, R::King),
    ];
    let rank = evaluate_five(&cards);
    assert_eq!(rank.category, Category::FourOfAKind);
    assert_eq!(rank.tiebreaks, [9, 13, 0, 0, 0]);
}

#[test]
fn full_house_carries_trips_then_pair() {
    let cards = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
    ];
    let rank = evaluate_five(&cards);
    assert_eq!(rank.category, Category::FullHouse);
    assert_eq!(rank.tiebreaks, [13, 12, 0, 0, 0]);
}

#[test]
fn flush_carries_full_descending_rank_list() {
    let cards = [
        c(S::Diamonds, R::Two),
        c(S::Diamonds, R::Seven),
        c(S::Diamonds, R::Jack),
        c(S::Diamonds, R::Queen),
        c(S::Diamonds, R::Four),
    ];
    let rank = evaluate_five(&cards);
    assert_eq!(rank.category, Category::Flush);
    assert_eq!(rank.tiebreaks, [12, 11, 7, 4, 2]);
}

#[test]
fn two_pair_carries_pairs_then_kicker() {
    let cards = [
        c(S::Clubs, R::Ten),
        c(S::Diamonds, R::Ten),
        c(S::Hearts, R::Three),
        c(S::Spades, R::Three),
        c(S::Clubs, R::Ace),
    ];
    let rank = evaluate_five(&cards);
    assert_eq!(rank.category, Category::TwoPair);
    assert_eq!(rank.tiebreaks, [10, 3, 14, 0, 0]);
}

#[test]
fn one_pair_kickers_descend() {
    let cards = [
        c(S::Clubs, R::Eight),
        c(S::Diamonds, R::Eight),
        c(S::Hearts, R::King),
        c(S::Spades, R::Five),
        c(S::Clubs, R::Two),
    ];
    let rank = evaluate_five(&cards);
    assert_eq!(rank.category, Category::OnePair);
    assert_eq!(rank.tiebreaks, [8, 13, 5, 2, 0]);
}

#[test]
fn category_precedence_matches_theory() {
    let high_card = evaluate_five(&[
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Five),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Jack),
        c(S::Clubs, R::King),
    ]);
    let pair = evaluate_five(&[
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Two),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Jack),
        c(S::Clubs, R::King),
    ]);
    let trips = evaluate_five(&[
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Two),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Jack),
        c(S::Clubs, R::King),
    ]);
    let straight = evaluate_five(&[
        c(S::Clubs, R::Five),
        c(S::Diamonds, R::Six),
        c(S::Hearts, R::Seven),
        c(S::Spades, R::Eight),
        c(S::Clubs, R::Nine),
    ]);
    assert!(pair > high_card);
    assert!(trips > pair);
    assert!(straight > trips);
}

#[test]
fn seven_card_eval_uses_best_five() {
    // pair of aces in the hole plus a board pair -> two pair, not one pair
    let cards = [
        c(S::Spades, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Seven),
        c(S::Diamonds, R::Seven),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Nine),
        c(S::Clubs, R::Queen),
    ];
    let rank = evaluate_seven(&cards);
    assert_eq!(rank.category, Category::TwoPair);
    assert_eq!(rank.tiebreaks, [14, 7, 12, 0, 0]);
}
