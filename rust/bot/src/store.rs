use std::collections::HashMap;

use holdem_engine::session::GameSession;

use crate::errors::CommandError;

/// Repository of live sessions, one per chat room. The host serializes
/// commands per room, so implementations need no internal locking.
pub trait SessionStore {
    fn create(&mut self, room: &str, session: GameSession) -> Result<(), CommandError>;
    fn get_mut(&mut self, room: &str) -> Result<&mut GameSession, CommandError>;
    fn remove(&mut self, room: &str) -> Option<GameSession>;
    fn contains(&self, room: &str) -> bool;
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    sessions: HashMap<String, GameSession>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemoryStore {
    fn create(&mut self, room: &str, session: GameSession) -> Result<(), CommandError> {
        if self.sessions.contains_key(room) {
            return Err(CommandError::SessionAlreadyExists);
        }
        self.sessions.insert(room.to_string(), session);
        Ok(())
    }

    fn get_mut(&mut self, room: &str) -> Result<&mut GameSession, CommandError> {
        self.sessions
            .get_mut(room)
            .ok_or(CommandError::NoActiveSession)
    }

    fn remove(&mut self, room: &str) -> Option<GameSession> {
        self.sessions.remove(room)
    }

    fn contains(&self, room: &str) -> bool {
        self.sessions.contains_key(room)
    }
}
