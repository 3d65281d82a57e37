use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Hand category, ordered weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "high card",
            Category::OnePair => "one pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        };
        write!(f, "{}", name)
    }
}

/// Total strength of a 5-card hand. The derived ordering compares the
/// category first, then the tiebreak ranks lexicographically; two hands tie
/// exactly when the whole tuple is equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    // tiebreaks: ordered high -> low, zero-padded
    pub tiebreaks: [u8; 5],
}

/// Evaluates exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    let mut values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight_high(&values);

    let mut rank_counts = [0u8; 15]; // 2..14 used
    for &v in &values {
        rank_counts[v as usize] += 1;
    }
    // (count, rank) groups, largest group first, higher rank first within
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    if flush {
        if let Some(high) = straight_high {
            return HandRank {
                category: Category::StraightFlush,
                tiebreaks: [high, 0, 0, 0, 0],
            };
        }
    }

    if groups[0].0 == 4 {
        let quad = groups[0].1;
        let kicker = groups[1].1;
        return HandRank {
            category: Category::FourOfAKind,
            tiebreaks: [quad, kicker, 0, 0, 0],
        };
    }

    if groups[0].0 == 3 && groups.len() >= 2 && groups[1].0 == 2 {
        return HandRank {
            category: Category::FullHouse,
            tiebreaks: [groups[0].1, groups[1].1, 0, 0, 0],
        };
    }

    if flush {
        return HandRank {
            category: Category::Flush,
            tiebreaks: pad(&values),
        };
    }

    if let Some(high) = straight_high {
        return HandRank {
            category: Category::Straight,
            tiebreaks: [high, 0, 0, 0, 0],
        };
    }

    if groups[0].0 == 3 {
        let trips = groups[0].1;
        let kickers = kickers_excluding(&values, &[trips]);
        return HandRank {
            category: Category::ThreeOfAKind,
            tiebreaks: pad(&prepend(trips, &kickers)),
        };
    }

    if groups[0].0 == 2 && groups.len() >= 2 && groups[1].0 == 2 {
        let high_pair = groups[0].1;
        let low_pair = groups[1].1;
        let kickers = kickers_excluding(&values, &[high_pair, low_pair]);
        return HandRank {
            category: Category::TwoPair,
            tiebreaks: pad(&[high_pair, low_pair, kickers[0]]),
        };
    }

    if groups[0].0 == 2 {
        let pair = groups[0].1;
        let kickers = kickers_excluding(&values, &[pair]);
        return HandRank {
            category: Category::OnePair,
            tiebreaks: pad(&prepend(pair, &kickers)),
        };
    }

    HandRank {
        category: Category::HighCard,
        tiebreaks: pad(&values),
    }
}

/// Evaluates seven cards by brute-forcing all 21 five-card subsets and
/// keeping the best. 21 evaluations per player per hand is negligible, so
/// correctness wins over cleverness here.
pub fn evaluate_seven(cards: &[Card; 7]) -> HandRank {
    let mut best = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    for skip_a in 0..6 {
        for skip_b in (skip_a + 1)..7 {
            let mut five = [cards[0]; 5];
            let mut n = 0;
            for (i, &c) in cards.iter().enumerate() {
                if i != skip_a && i != skip_b {
                    five[n] = c;
                    n += 1;
                }
            }
            let rank = evaluate_five(&five);
            if rank > best {
                best = rank;
            }
        }
    }
    best
}

/// Highest card of a 5-card run, if the values form one. The wheel
/// (A-2-3-4-5) counts with high card 5; that is the only spot where the
/// ace plays low.
fn detect_straight_high(values_desc: &[u8]) -> Option<u8> {
    let mut uniq = values_desc.to_vec();
    uniq.sort_unstable();
    uniq.dedup();
    if uniq.len() != 5 {
        return None;
    }
    if uniq[4] - uniq[0] == 4 {
        return Some(uniq[4]);
    }
    if uniq == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    None
}

fn kickers_excluding(values_desc: &[u8], excluded: &[u8]) -> Vec<u8> {
    values_desc
        .iter()
        .copied()
        .filter(|v| !excluded.contains(v))
        .collect()
}

fn prepend(head: u8, tail: &[u8]) -> Vec<u8> {
    let mut v = Vec::with_capacity(1 + tail.len());
    v.push(head);
    v.extend_from_slice(tail);
    v
}

fn pad(values: &[u8]) -> [u8; 5] {
    let mut out = [0u8; 5];
    for (slot, &v) in out.iter_mut().zip(values.iter()) {
        *slot = v;
    }
    out
}
