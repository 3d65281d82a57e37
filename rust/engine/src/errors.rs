use thiserror::Error;

use crate::session::Phase;

/// Validation failures for engine operations. Every variant is local and
/// non-fatal: the failing command leaves session state untouched and the
/// message is meant to be shown to the player as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("it's not your turn to act")]
    NotYourTurn,
    #[error("you are not in this hand or have already folded")]
    NotInHand,
    #[error("you already have a seat at this table")]
    AlreadySeated,
    #[error("the table is full ({max_players} seats)")]
    TableFull { max_players: usize },
    #[error("you have already matched the current bet")]
    AlreadyCalled,
    #[error("insufficient balance: need {required}, have {available}")]
    InsufficientBalance { required: u32, available: u32 },
    #[error("raise of {total} exceeds the table limit of {limit}")]
    RaiseExceedsLimit { total: u32, limit: u32 },
    #[error("there is a bet in front of you: call or fold")]
    MustCallOrFold,
    #[error("no chips left to go all-in with")]
    NoBalance,
    #[error("betting round incomplete, waiting on: {}", waiting_on.join(", "))]
    RoundIncomplete { waiting_on: Vec<String> },
    #[error("not allowed in the {actual} phase")]
    WrongPhase { actual: Phase },
    #[error("the current hand is not finished yet")]
    HandNotFinished,
    #[error("need at least 2 players to deal ({seated} seated)")]
    TooFewPlayers { seated: usize },
    #[error("card counts are inconsistent at showdown")]
    IncompleteHand,
}
