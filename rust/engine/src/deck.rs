use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Shuffled draw pile. Drawing never fails: once the pile is exhausted a
/// fresh 52-card pile is shuffled in, so a live hand is never blocked on an
/// empty deck (card identities may repeat across logical decks).
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new() -> Self {
        Self::new_with_seed(rand::random::<u64>())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards = full_deck();
        cards.shuffle(&mut rng);
        Self {
            cards,
            position: 0,
            rng,
        }
    }

    /// Deck with a fixed draw order, for replaying a known hand. Once the
    /// stacked cards run out the usual reshuffle rule takes over.
    pub fn stacked(cards: Vec<Card>) -> Self {
        let mut deck = Self::new_with_seed(0);
        deck.cards = cards;
        deck.position = 0;
        deck
    }

    pub fn draw(&mut self) -> Card {
        if self.position >= self.cards.len() {
            self.cards = full_deck();
            self.cards.shuffle(&mut self.rng);
            self.position = 0;
        }
        let c = self.cards[self.position];
        self.position += 1;
        c
    }

    pub fn burn(&mut self) {
        let _ = self.draw();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
