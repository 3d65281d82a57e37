use holdem_engine::errors::GameError;
use thiserror::Error;

/// Failures surfaced to the chat layer. Like the engine's own errors these
/// are user-facing and non-fatal; the session is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("no game running in this room, send `start` first")]
    NoActiveSession,
    #[error("this room already has a game in progress, `end` it first")]
    SessionAlreadyExists,
    #[error(transparent)]
    Game(#[from] GameError),
}
