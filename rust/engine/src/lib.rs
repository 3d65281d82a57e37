//! # holdem-engine: Room-Scoped Texas Hold'em Engine
//!
//! A synchronous Texas Hold'em engine for multiway tables, designed to be
//! embedded in a chat-bot plugin. One [`session::GameSession`] tracks one
//! chat room: seating, blinds, fixed-limit betting rounds, community-card
//! reveal and showdown resolution. Chip balances live outside the engine
//! and are reached through the [`session::Bankroll`] seam, so the hosting
//! layer decides where tokens are stored.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Shuffled draw pile with ChaCha20 RNG and refill-on-empty
//! - [`hand`] - Five- and seven-card hand evaluation
//! - [`seat`] - Per-hand participant state
//! - [`session`] - Turn scheduling, betting, phase machine and showdown
//! - [`record`] - Showdown records and JSONL persistence
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::{evaluate_seven, Category};
//!
//! // Find the best 5-card hand inside 7 cards
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let rank = evaluate_seven(&cards);
//! assert_eq!(rank.category, Category::StraightFlush);
//! ```
//!
//! ## Deterministic Dealing
//!
//! Shuffles are reproducible with a seed, and a stacked deck can replay an
//! exact hand:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! assert_eq!(deck1.draw(), deck2.draw());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod record;
pub mod seat;
pub mod session;
