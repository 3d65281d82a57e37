use holdem_engine::record::ShowdownRecord;
use holdem_engine::session::{FoldOutcome, GameSession, PhaseAdvance};
use tracing::{debug, info, warn};

use crate::bank::{BalanceLedger, RoomBank};
use crate::errors::CommandError;
use crate::history::HistorySink;
use crate::messenger::MessageSender;
use crate::settings::PokerConfig;
use crate::store::SessionStore;

/// The command surface wired into the chat platform. One instance serves
/// every room; the host serializes commands per room before they get here.
/// Every method returns the group-chat reply for the room.
pub struct PokerBot<S, L, M, H> {
    config: PokerConfig,
    store: S,
    ledger: L,
    sender: M,
    history: H,
}

impl<S, L, M, H> PokerBot<S, L, M, H>
where
    S: SessionStore,
    L: BalanceLedger,
    M: MessageSender,
    H: HistorySink,
{
    pub fn new(config: PokerConfig, store: S, ledger: L, sender: M, history: H) -> Self {
        Self {
            config,
            store,
            ledger,
            sender,
            history,
        }
    }

    pub fn config(&self) -> &PokerConfig {
        &self.config
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Direct ledger access for host-side tooling.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// `start` - open a table in the room.
    pub fn start(&mut self, room: &str) -> Result<String, CommandError> {
        let session = GameSession::new(self.config.game_config());
        self.store.create(room, session)?;
        info!(room = %room, "table opened");
        Ok(format!(
            "Table open! Buy-in {} tokens, blinds {}/{}. Send `join` to sit down.",
            self.config.buyin, self.config.small_blind, self.config.big_blind
        ))
    }

    /// `join` - sit down and pay the buy-in into the pot.
    pub fn join(&mut self, room: &str, id: &str, name: &str) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        let mut bank = RoomBank::new(&mut self.ledger, room);
        let outcome = session.join(id, name, &mut bank)?;
        info!(room = %room, player = %name, pot = outcome.pot, "player joined");
        Ok(format!(
            "{} sat down with a {} buy-in (balance {}). Pot is {}.",
            outcome.name, outcome.buyin, outcome.balance, outcome.pot
        ))
    }

    /// `deal` - hole cards out, blinds posted, preflop betting open. Hole
    /// cards go out privately; a participant we cannot reach is named in
    /// the group reply but the hand is not aborted.
    pub fn deal(&mut self, room: &str) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        let mut bank = RoomBank::new(&mut self.ledger, room);
        let outcome = session.deal(&mut bank)?;

        let mut unreachable = Vec::new();
        for (id, name, cards) in &outcome.hole_cards {
            let text = format!("Your hole cards: {} {}", cards[0], cards[1]);
            if let Err(err) = self.sender.send_private(id, &text) {
                warn!(room = %room, player = %name, error = %err, "private delivery failed");
                unreachable.push(name.clone());
            }
        }

        let to_act = session
            .current_turn()
            .map(|s| s.name.clone())
            .unwrap_or_default();
        info!(room = %room, pot = outcome.pot, "hand dealt");

        let mut reply = format!(
            "Cards are out. {} posts {} (small blind), {} posts {} (big blind). Pot {}, bet to match {}. {} to act.",
            outcome.small_blind.name,
            outcome.small_blind.amount,
            outcome.big_blind.name,
            outcome.big_blind.amount,
            outcome.pot,
            outcome.current_bet,
            to_act
        );
        if !unreachable.is_empty() {
            reply.push_str(&format!(
                " Could not deliver hole cards privately to: {}.",
                unreachable.join(", ")
            ));
        }
        Ok(reply)
    }

    /// `call` - match the current bet.
    pub fn call(&mut self, room: &str, id: &str) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        let mut bank = RoomBank::new(&mut self.ledger, room);
        let outcome = session.call(id, &mut bank)?;
        debug!(room = %room, player = %id, paid = outcome.paid, "call");
        Ok(format!(
            "Called {}. Pot is {}.",
            outcome.paid, outcome.pot
        ))
    }

    /// `raise` - call plus `increment` on top.
    pub fn raise(&mut self, room: &str, id: &str, increment: u32) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        let mut bank = RoomBank::new(&mut self.ledger, room);
        let outcome = session.raise(id, increment, &mut bank)?;
        debug!(room = %room, player = %id, paid = outcome.paid, "raise");
        Ok(format!(
            "Raised: paid {}, bet to match is now {}. Pot is {}.",
            outcome.paid, outcome.current_bet, outcome.pot
        ))
    }

    /// `allin` - commit the whole remaining balance.
    pub fn all_in(&mut self, room: &str, id: &str) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        let mut bank = RoomBank::new(&mut self.ledger, room);
        let outcome = session.all_in(id, &mut bank)?;
        info!(room = %room, player = %id, paid = outcome.paid, "all-in");
        Ok(format!(
            "All-in for {}! Bet to match is {}. Pot is {}.",
            outcome.paid, outcome.current_bet, outcome.pot
        ))
    }

    /// `check` - pass the action; only when the bet is already matched.
    pub fn check(&mut self, room: &str, id: &str) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        session.check(id)?;
        let to_act = session
            .current_turn()
            .map(|s| s.name.clone())
            .unwrap_or_default();
        Ok(format!("Check. {} to act.", to_act))
    }

    /// `fold` - leave the hand. If only one seat stays in, that seat takes
    /// the pot and the table is torn down.
    pub fn fold(&mut self, room: &str, id: &str) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        let mut bank = RoomBank::new(&mut self.ledger, room);
        match session.fold(id, &mut bank)? {
            FoldOutcome::Folded { name } => {
                let to_act = session
                    .current_turn()
                    .map(|s| s.name.clone())
                    .unwrap_or_default();
                Ok(format!("{} folds. {} to act.", name, to_act))
            }
            FoldOutcome::FoldOut {
                winner_name, pot, ..
            } => {
                self.store.remove(room);
                info!(room = %room, winner = %winner_name, pot, "hand won by fold-out");
                Ok(format!(
                    "Everyone else folded. {} takes the pot of {}. Game over.",
                    winner_name, pot
                ))
            }
        }
    }

    /// `next` - move to the following street once betting is settled, or
    /// resolve the showdown after the river.
    pub fn next(&mut self, room: &str) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        let mut bank = RoomBank::new(&mut self.ledger, room);
        match session.advance_phase(&mut bank)? {
            PhaseAdvance::Flop(cards) => Ok(format!(
                "Flop: {} {} {}. Bet to match is {}.",
                cards[0],
                cards[1],
                cards[2],
                session.current_bet()
            )),
            PhaseAdvance::TurnCard(card) => Ok(format!(
                "Turn: {}. Bet to match is {}.",
                card,
                session.current_bet()
            )),
            PhaseAdvance::RiverCard(card) => Ok(format!(
                "River: {}. Bet to match is {}.",
                card,
                session.current_bet()
            )),
            PhaseAdvance::Showdown(record) => Ok(self.finish_showdown(room, record)),
        }
    }

    /// `showdown` - resolve the hand explicitly; only valid on the river
    /// with all bets matched.
    pub fn showdown(&mut self, room: &str) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        let mut bank = RoomBank::new(&mut self.ledger, room);
        let record = session.showdown(&mut bank)?;
        Ok(self.finish_showdown(room, record))
    }

    /// `status` - the public table state, hole cards excluded.
    pub fn status(&mut self, room: &str) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        let snapshot = session.snapshot();
        let community = if snapshot.community.is_empty() {
            "(none)".to_string()
        } else {
            snapshot
                .community
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let seats = snapshot
            .seats
            .iter()
            .map(|s| {
                format!(
                    "{} (bet {}{})",
                    s.name,
                    s.round_bet,
                    if s.active { "" } else { ", folded" }
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        let mut reply = format!(
            "Phase: {}. Pot: {}. Bet to match: {}. Board: {}. Seats: {}.",
            snapshot.phase, snapshot.pot, snapshot.current_bet, community, seats
        );
        if let Some(to_act) = &snapshot.to_act {
            reply.push_str(&format!(" {} to act.", to_act));
        }
        Ok(reply)
    }

    /// `tokens` - the caller's balance in this room.
    pub fn balance(&mut self, room: &str, id: &str, name: &str) -> String {
        let balance = self.ledger.get(room, id);
        format!("{} has {} tokens.", name, balance)
    }

    /// `add_balance` - top up a participant's balance.
    pub fn add_balance(&mut self, room: &str, id: &str, name: &str, amount: u32) -> String {
        self.ledger.adjust(room, id, amount as i64);
        let balance = self.ledger.get(room, id);
        info!(room = %room, player = %name, amount, balance, "balance topped up");
        format!("Added {} tokens to {}. New balance: {}.", amount, name, balance)
    }

    /// `rank` - the room's win leaderboard.
    pub fn rankings(&self, room: &str) -> String {
        match self.history.rankings(room) {
            Ok(rankings) if !rankings.is_empty() => {
                let lines: Vec<String> = rankings
                    .iter()
                    .enumerate()
                    .map(|(pos, r)| {
                        format!(
                            "{}. {} - {} wins in {} hands",
                            pos + 1,
                            r.name,
                            r.wins,
                            r.hands_played
                        )
                    })
                    .collect();
                lines.join("\n")
            }
            Ok(_) => "No hands on record for this room yet.".to_string(),
            Err(err) => {
                warn!(room = %room, error = %err, "ranking lookup failed");
                "Rankings are unavailable right now.".to_string()
            }
        }
    }

    /// `continue` - reset the table for the next hand; blinds rotate one
    /// seat, the next `deal` posts them.
    pub fn continue_hand(&mut self, room: &str) -> Result<String, CommandError> {
        let session = self.store.get_mut(room)?;
        session.continue_hand()?;
        let first = session
            .seats()
            .first()
            .map(|s| s.name.clone())
            .unwrap_or_default();
        Ok(format!(
            "Table reset, blinds move on. {} posts the small blind next hand. Send `deal` when ready.",
            first
        ))
    }

    /// `end` - tear down the room's table. Balances are kept.
    pub fn end(&mut self, room: &str) -> Result<String, CommandError> {
        if self.store.remove(room).is_none() {
            return Err(CommandError::NoActiveSession);
        }
        info!(room = %room, "table closed");
        Ok("Game over, table closed. Balances carry over to the next game.".to_string())
    }

    /// Hands the showdown record and per-player results to the history sink
    /// and renders the group summary. A sink failure is logged but never
    /// undoes the hand.
    fn finish_showdown(&mut self, room: &str, record: ShowdownRecord) -> String {
        if let Err(err) = self.history.record_showdown(room, &record) {
            warn!(room = %room, error = %err, "failed to record hand history");
        }
        for seat in &record.seats {
            let won = record.winners.iter().any(|w| w.id == seat.id);
            if let Err(err) = self.history.record_result(room, &seat.id, &seat.name, won) {
                warn!(room = %room, player = %seat.name, error = %err, "failed to record hand result");
            }
        }
        info!(
            room = %room,
            pot = record.pot,
            winners = record.winners.len(),
            "showdown resolved"
        );
        let balances: Vec<String> = record
            .seats
            .iter()
            .map(|s| format!("{} {}", s.name, self.ledger.get(room, &s.id)))
            .collect();
        let mut reply = render_showdown(&record);
        reply.push_str(&format!("\nBalances: {}.", balances.join(", ")));
        reply.push_str("\nSend `continue` for another hand or `end` to close the table.");
        reply
    }
}

fn render_showdown(record: &ShowdownRecord) -> String {
    let board = record
        .community
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let mut lines = vec![format!("Showdown! Board: {}", board)];
    for seat in &record.seats {
        match &seat.rank {
            Some(rank) => {
                let hole = seat
                    .hole
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(format!("{}: {} ({})", seat.name, hole, rank.category));
            }
            None => lines.push(format!("{}: folded", seat.name)),
        }
    }
    let winners = record
        .winners
        .iter()
        .map(|w| w.name.clone())
        .collect::<Vec<_>>()
        .join(", ");
    if record.winners.len() > 1 {
        lines.push(format!(
            "Split pot: {} each take {} of the {} pot.",
            winners, record.share, record.pot
        ));
    } else {
        lines.push(format!("{} wins the pot of {}.", winners, record.pot));
    }
    lines.join("\n")
}
