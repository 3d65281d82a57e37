use crate::cards::Card;

/// One participant's per-hand state. A seat is created on join and persists
/// across hands within a session; `active == false` means folded for the
/// remainder of the current hand. Table position is the seat's index in the
/// session's seat order.
#[derive(Debug, Clone)]
pub struct Seat {
    /// Unique participant identifier from the chat host
    pub id: String,
    /// Display name shown in group messages
    pub name: String,
    /// Hole cards: empty before the deal, exactly two afterwards
    pub hole: Vec<Card>,
    /// Chips contributed during the current betting street
    pub round_bet: u32,
    /// False once the seat folds
    pub active: bool,
}

impl Seat {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            hole: Vec::with_capacity(2),
            round_bet: 0,
            active: true,
        }
    }

    pub fn reset_for_next_hand(&mut self) {
        self.hole.clear();
        self.round_bet = 0;
        self.active = true;
    }
}
