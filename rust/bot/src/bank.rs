use std::collections::HashMap;

use holdem_engine::session::Bankroll;

/// Durable token balances keyed by (room, participant). First access for a
/// pair seeds the configured starting balance, matching how the host hands
/// out tokens to newcomers.
pub trait BalanceLedger {
    fn get(&mut self, room: &str, participant: &str) -> u32;
    fn adjust(&mut self, room: &str, participant: &str, delta: i64);
}

#[derive(Debug)]
pub struct InMemoryBank {
    starting_balance: u32,
    balances: HashMap<(String, String), u32>,
}

impl InMemoryBank {
    pub fn new(starting_balance: u32) -> Self {
        Self {
            starting_balance,
            balances: HashMap::new(),
        }
    }
}

impl BalanceLedger for InMemoryBank {
    fn get(&mut self, room: &str, participant: &str) -> u32 {
        *self
            .balances
            .entry((room.to_string(), participant.to_string()))
            .or_insert(self.starting_balance)
    }

    fn adjust(&mut self, room: &str, participant: &str, delta: i64) {
        let entry = self
            .balances
            .entry((room.to_string(), participant.to_string()))
            .or_insert(self.starting_balance);
        let next = (*entry as i64)
            .saturating_add(delta)
            .clamp(0, u32::MAX as i64);
        *entry = next as u32;
    }
}

/// Ledger view scoped to one room; the seam the engine moves chips through.
pub struct RoomBank<'a, L: BalanceLedger + ?Sized> {
    ledger: &'a mut L,
    room: &'a str,
}

impl<'a, L: BalanceLedger + ?Sized> RoomBank<'a, L> {
    pub fn new(ledger: &'a mut L, room: &'a str) -> Self {
        Self { ledger, room }
    }
}

impl<L: BalanceLedger + ?Sized> Bankroll for RoomBank<'_, L> {
    fn balance(&mut self, participant: &str) -> u32 {
        self.ledger.get(self.room, participant)
    }

    fn credit(&mut self, participant: &str, amount: u32) {
        self.ledger.adjust(self.room, participant, amount as i64);
    }

    fn debit(&mut self, participant: &str, amount: u32) {
        self.ledger.adjust(self.room, participant, -(amount as i64));
    }
}
