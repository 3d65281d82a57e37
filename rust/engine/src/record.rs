use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandRank;

/// One seat's line in a showdown record.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatResult {
    pub id: String,
    pub name: String,
    /// Contribution during the final betting street
    pub final_bet: u32,
    pub hole: Vec<Card>,
    /// Best 7-card rank; None for seats that folded before the showdown
    #[serde(default)]
    pub rank: Option<HandRank>,
    pub active: bool,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    pub id: String,
    pub name: String,
}

/// Complete record of a resolved showdown, emitted once per finished hand
/// for the history/ranking collaborator. Serialized to JSONL for storage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownRecord {
    /// The five community cards
    pub community: Vec<Card>,
    /// Every seat at the table, folded ones included
    pub seats: Vec<SeatResult>,
    /// Seats tied at the best rank
    pub winners: Vec<Winner>,
    /// Pot size before distribution
    pub pot: u32,
    /// Per-winner share (the odd-chip remainder goes to the earliest seat)
    pub share: u32,
    /// Timestamp when the hand was resolved (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Appends showdown records to a JSONL file, one line per hand.
pub struct RecordWriter {
    writer: BufWriter<File>,
}

impl RecordWriter {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &ShowdownRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(now_rfc3339());
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}
