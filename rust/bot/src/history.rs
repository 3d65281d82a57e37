use std::collections::HashMap;
use std::sync::RwLock;

use holdem_engine::record::ShowdownRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history storage lock poisoned")]
    StoragePoisoned,
    #[error("failed to persist record: {0}")]
    Io(#[from] std::io::Error),
}

/// Receives one showdown record per completed hand plus a win/loss result
/// per participant. Failures here must never undo the hand itself; the
/// command layer logs and moves on.
pub trait HistorySink {
    fn record_showdown(&self, room: &str, record: &ShowdownRecord) -> Result<(), HistoryError>;
    fn record_result(
        &self,
        room: &str,
        participant: &str,
        name: &str,
        won: bool,
    ) -> Result<(), HistoryError>;
    fn rankings(&self, room: &str) -> Result<Vec<PlayerRanking>, HistoryError>;
}

/// Win/loss tally for one participant in one room.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRanking {
    pub name: String,
    pub hands_played: u32,
    pub wins: u32,
}

#[derive(Debug, Default)]
struct RoomHistory {
    records: Vec<ShowdownRecord>,
    tallies: HashMap<String, PlayerRanking>,
}

/// Keeps hand records and win tallies in process memory.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    rooms: RwLock<HashMap<String, RoomHistory>>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_count(&self, room: &str) -> usize {
        self.rooms
            .read()
            .map(|rooms| rooms.get(room).map_or(0, |r| r.records.len()))
            .unwrap_or(0)
    }
}

impl HistorySink for InMemoryHistory {
    fn record_showdown(&self, room: &str, record: &ShowdownRecord) -> Result<(), HistoryError> {
        let mut rooms = self
            .rooms
            .write()
            .map_err(|_| HistoryError::StoragePoisoned)?;
        rooms
            .entry(room.to_string())
            .or_default()
            .records
            .push(record.clone());
        Ok(())
    }

    fn record_result(
        &self,
        room: &str,
        participant: &str,
        name: &str,
        won: bool,
    ) -> Result<(), HistoryError> {
        let mut rooms = self
            .rooms
            .write()
            .map_err(|_| HistoryError::StoragePoisoned)?;
        let tally = rooms
            .entry(room.to_string())
            .or_default()
            .tallies
            .entry(participant.to_string())
            .or_insert_with(|| PlayerRanking {
                name: name.to_string(),
                hands_played: 0,
                wins: 0,
            });
        tally.hands_played += 1;
        if won {
            tally.wins += 1;
        }
        Ok(())
    }

    fn rankings(&self, room: &str) -> Result<Vec<PlayerRanking>, HistoryError> {
        let rooms = self
            .rooms
            .read()
            .map_err(|_| HistoryError::StoragePoisoned)?;
        let mut out: Vec<PlayerRanking> = rooms
            .get(room)
            .map(|r| r.tallies.values().cloned().collect())
            .unwrap_or_default();
        out.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then_with(|| a.hands_played.cmp(&b.hands_played))
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(out)
    }
}
