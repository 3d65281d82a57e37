use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_seven, HandRank};
use crate::record::{now_rfc3339, SeatResult, ShowdownRecord, Winner};
use crate::seat::Seat;

/// External chip balances, scoped to one room by the caller. Every engine
/// action is a single synchronous read-modify-write against this seam; the
/// host serializes commands per room, so no locking happens here.
pub trait Bankroll {
    fn balance(&mut self, participant: &str) -> u32;
    fn credit(&mut self, participant: &str, amount: u32);
    fn debit(&mut self, participant: &str, amount: u32);
}

/// Hand phase. `Showdown` is terminal per hand; `continue_hand` moves the
/// table back to `Waiting`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Waiting => "waiting",
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
        };
        write!(f, "{}", name)
    }
}

/// Raise ceiling as a multiple of the small blind. All-in is exempt.
pub const RAISE_CAP_MULTIPLIER: u32 = 10;

/// Table stakes, fixed for the lifetime of a session.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Paid into the pot on join
    pub buyin: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Fixed betting unit on flop/turn/river
    pub bet_amount: u32,
    pub max_players: usize,
}

/// One Texas Hold'em table bound to one chat room. Holds the seat registry,
/// the deck and the betting state; chip balances stay behind [`Bankroll`].
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    seats: Vec<Seat>,
    deck: Deck,
    community: Vec<Card>,
    phase: Phase,
    pot: u32,
    current_bet: u32,
    current_turn_index: usize,
    last_raiser_index: Option<usize>,
    finished: bool,
}

#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub name: String,
    pub buyin: u32,
    pub pot: u32,
    pub balance: u32,
}

#[derive(Debug, Clone)]
pub struct BlindPost {
    pub name: String,
    pub amount: u32,
}

#[derive(Debug, Clone)]
pub struct DealOutcome {
    /// (participant id, display name, hole cards) per seat, in seat order
    pub hole_cards: Vec<(String, String, [Card; 2])>,
    pub small_blind: BlindPost,
    pub big_blind: BlindPost,
    pub current_bet: u32,
    pub pot: u32,
}

#[derive(Debug, Clone)]
pub struct BetOutcome {
    pub paid: u32,
    pub pot: u32,
    pub current_bet: u32,
}

#[derive(Debug, Clone)]
pub enum FoldOutcome {
    Folded {
        name: String,
    },
    /// The fold left exactly one seat active: that seat takes the whole pot
    /// and the hand is over, whatever the phase was.
    FoldOut {
        winner_id: String,
        winner_name: String,
        pot: u32,
    },
}

#[derive(Debug, Clone)]
pub enum PhaseAdvance {
    Flop([Card; 3]),
    TurnCard(Card),
    RiverCard(Card),
    Showdown(ShowdownRecord),
}

/// Public view of a session, safe to post in the group chat (hole cards
/// are not included).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub pot: u32,
    pub current_bet: u32,
    pub community: Vec<Card>,
    pub seats: Vec<SeatSnapshot>,
    pub to_act: Option<String>,
    pub last_raiser: Option<String>,
    pub finished: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub name: String,
    pub round_bet: u32,
    pub active: bool,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self::new_with_deck(config, Deck::new())
    }

    /// Session over a caller-supplied deck, for deterministic replay.
    pub fn new_with_deck(config: GameConfig, deck: Deck) -> Self {
        Self {
            config,
            seats: Vec::new(),
            deck,
            community: Vec::new(),
            phase: Phase::Waiting,
            pot: 0,
            current_bet: 0,
            current_turn_index: 0,
            last_raiser_index: None,
            finished: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn finished(&self) -> bool {
        self.finished
    }
    pub fn current_turn_index(&self) -> usize {
        self.current_turn_index
    }
    pub fn current_turn(&self) -> Option<&Seat> {
        self.seats.get(self.current_turn_index)
    }
    pub fn last_raiser(&self) -> Option<&Seat> {
        self.last_raiser_index.and_then(|i| self.seats.get(i))
    }

    /// Seats a new participant and moves the buy-in into the pot. Only
    /// possible while the table is waiting for a deal.
    pub fn join(
        &mut self,
        id: &str,
        name: &str,
        bank: &mut dyn Bankroll,
    ) -> Result<JoinOutcome, GameError> {
        if self.phase != Phase::Waiting {
            return Err(GameError::WrongPhase { actual: self.phase });
        }
        if self.seats.iter().any(|s| s.id == id) {
            return Err(GameError::AlreadySeated);
        }
        if self.seats.len() >= self.config.max_players {
            return Err(GameError::TableFull {
                max_players: self.config.max_players,
            });
        }
        let available = bank.balance(id);
        if available < self.config.buyin {
            return Err(GameError::InsufficientBalance {
                required: self.config.buyin,
                available,
            });
        }
        bank.debit(id, self.config.buyin);
        self.pot += self.config.buyin;
        self.seats.push(Seat::new(id, name));
        Ok(JoinOutcome {
            name: name.to_string(),
            buyin: self.config.buyin,
            pot: self.pot,
            balance: available - self.config.buyin,
        })
    }

    /// Deals two hole cards per seat, posts the blinds and opens preflop
    /// betting. Seat 0 posts the small blind and seat 1 the big blind; a
    /// short stack posts what it can (partial or zero blinds are allowed).
    pub fn deal(&mut self, bank: &mut dyn Bankroll) -> Result<DealOutcome, GameError> {
        if self.phase != Phase::Waiting {
            return Err(GameError::WrongPhase { actual: self.phase });
        }
        if self.seats.len() < 2 {
            return Err(GameError::TooFewPlayers {
                seated: self.seats.len(),
            });
        }

        let mut hole_cards = Vec::with_capacity(self.seats.len());
        for seat in &mut self.seats {
            let cards = [self.deck.draw(), self.deck.draw()];
            seat.hole = cards.to_vec();
            hole_cards.push((seat.id.clone(), seat.name.clone(), cards));
        }

        let small_blind = self.post_blind(0, self.config.small_blind, bank);
        let big_blind = self.post_blind(1, self.config.big_blind, bank);

        self.current_bet = self.config.big_blind;
        // first seat past the blinds acts first when the table allows it
        self.current_turn_index = if self.seats.len() >= 3 { 2 } else { 0 };
        self.last_raiser_index = None;
        self.phase = Phase::Preflop;

        Ok(DealOutcome {
            hole_cards,
            small_blind,
            big_blind,
            current_bet: self.current_bet,
            pot: self.pot,
        })
    }

    fn post_blind(&mut self, seat_index: usize, blind: u32, bank: &mut dyn Bankroll) -> BlindPost {
        let seat = &mut self.seats[seat_index];
        let available = bank.balance(&seat.id);
        let posted = available.min(blind);
        bank.debit(&seat.id, posted);
        seat.round_bet += posted;
        self.pot += posted;
        BlindPost {
            name: seat.name.clone(),
            amount: posted,
        }
    }

    /// Matches the current bet.
    pub fn call(&mut self, id: &str, bank: &mut dyn Bankroll) -> Result<BetOutcome, GameError> {
        self.require_betting_phase()?;
        let idx = self.acting_seat(id)?;
        let required = self.current_bet.saturating_sub(self.seats[idx].round_bet);
        if required == 0 {
            return Err(GameError::AlreadyCalled);
        }
        let available = bank.balance(id);
        if available < required {
            return Err(GameError::InsufficientBalance {
                required,
                available,
            });
        }
        bank.debit(id, required);
        self.seats[idx].round_bet += required;
        self.pot += required;
        self.advance_turn();
        Ok(BetOutcome {
            paid: required,
            pot: self.pot,
            current_bet: self.current_bet,
        })
    }

    /// Pays the call amount plus `increment` on top, raising the required
    /// contribution for everyone else. Capped at `small_blind * 10`.
    pub fn raise(
        &mut self,
        id: &str,
        increment: u32,
        bank: &mut dyn Bankroll,
    ) -> Result<BetOutcome, GameError> {
        self.require_betting_phase()?;
        let idx = self.acting_seat(id)?;
        let required_call = self.current_bet.saturating_sub(self.seats[idx].round_bet);
        let limit = self.config.small_blind * RAISE_CAP_MULTIPLIER;
        // overflow counts as over the cap, not a wrap back under it
        let total = match required_call.checked_add(increment) {
            Some(total) if total <= limit => total,
            _ => {
                return Err(GameError::RaiseExceedsLimit {
                    total: required_call.saturating_add(increment),
                    limit,
                })
            }
        };
        let available = bank.balance(id);
        if available < total {
            return Err(GameError::InsufficientBalance {
                required: total,
                available,
            });
        }
        bank.debit(id, total);
        let seat = &mut self.seats[idx];
        seat.round_bet += total;
        self.pot += total;
        self.current_bet = self.seats[idx].round_bet;
        self.last_raiser_index = Some(idx);
        self.advance_turn();
        Ok(BetOutcome {
            paid: total,
            pot: self.pot,
            current_bet: self.current_bet,
        })
    }

    /// Commits the entire remaining balance. Not subject to the raise cap:
    /// an all-in is a forced stack commitment, not a sized raise.
    pub fn all_in(&mut self, id: &str, bank: &mut dyn Bankroll) -> Result<BetOutcome, GameError> {
        self.require_betting_phase()?;
        let idx = self.acting_seat(id)?;
        let available = bank.balance(id);
        if available == 0 {
            return Err(GameError::NoBalance);
        }
        bank.debit(id, available);
        self.seats[idx].round_bet += available;
        self.pot += available;
        if self.seats[idx].round_bet > self.current_bet {
            self.current_bet = self.seats[idx].round_bet;
            self.last_raiser_index = Some(idx);
        }
        self.advance_turn();
        Ok(BetOutcome {
            paid: available,
            pot: self.pot,
            current_bet: self.current_bet,
        })
    }

    /// Passes the action without betting; only legal when the seat has
    /// already matched the current bet.
    pub fn check(&mut self, id: &str) -> Result<(), GameError> {
        self.require_betting_phase()?;
        let idx = self.acting_seat(id)?;
        if self.seats[idx].round_bet < self.current_bet {
            return Err(GameError::MustCallOrFold);
        }
        self.advance_turn();
        Ok(())
    }

    /// Folds the acting seat. Chips already contributed stay in the pot;
    /// the seat's round_bet is zeroed so it never blocks round completion.
    /// If only one seat remains active the hand ends on the spot.
    pub fn fold(&mut self, id: &str, bank: &mut dyn Bankroll) -> Result<FoldOutcome, GameError> {
        self.require_betting_phase()?;
        let idx = self.acting_seat(id)?;
        let name = self.seats[idx].name.clone();
        self.seats[idx].active = false;
        self.seats[idx].round_bet = 0;

        let survivors: Vec<usize> = (0..self.seats.len())
            .filter(|&i| self.seats[i].active)
            .collect();
        if survivors.len() == 1 {
            let winner = &self.seats[survivors[0]];
            let pot = self.pot;
            bank.credit(&winner.id, pot);
            let outcome = FoldOutcome::FoldOut {
                winner_id: winner.id.clone(),
                winner_name: winner.name.clone(),
                pot,
            };
            self.pot = 0;
            self.phase = Phase::Showdown;
            self.finished = true;
            return Ok(outcome);
        }

        // the folded seat held the turn, so move it along
        self.advance_turn();
        Ok(FoldOutcome::Folded { name })
    }

    /// Moves the turn to the next active seat, scanning from the seat after
    /// the current one and wrapping around the table. A lone active seat
    /// keeps the turn; an empty table is a no-op.
    pub fn advance_turn(&mut self) {
        let n = self.seats.len();
        if n == 0 {
            return;
        }
        for step in 1..=n {
            let idx = (self.current_turn_index + step) % n;
            if self.seats[idx].active {
                self.current_turn_index = idx;
                return;
            }
        }
    }

    /// True when every active seat has matched the current bet.
    pub fn round_complete(&self) -> bool {
        self.seats
            .iter()
            .filter(|s| s.active)
            .all(|s| s.round_bet >= self.current_bet)
    }

    /// Names of the active seats still short of the current bet.
    pub fn unmatched_seats(&self) -> Vec<String> {
        self.seats
            .iter()
            .filter(|s| s.active && s.round_bet < self.current_bet)
            .map(|s| s.name.clone())
            .collect()
    }

    /// Advances the phase machine once the betting round is settled:
    /// burn-and-reveal up to the river, then showdown resolution.
    pub fn advance_phase(&mut self, bank: &mut dyn Bankroll) -> Result<PhaseAdvance, GameError> {
        if matches!(self.phase, Phase::Waiting | Phase::Showdown) {
            return Err(GameError::WrongPhase { actual: self.phase });
        }
        let waiting_on = self.unmatched_seats();
        if !waiting_on.is_empty() {
            return Err(GameError::RoundIncomplete { waiting_on });
        }
        match self.phase {
            Phase::Preflop => {
                self.deck.burn();
                let flop = [self.deck.draw(), self.deck.draw(), self.deck.draw()];
                self.community.extend_from_slice(&flop);
                self.begin_street(Phase::Flop);
                Ok(PhaseAdvance::Flop(flop))
            }
            Phase::Flop => {
                self.deck.burn();
                let card = self.deck.draw();
                self.community.push(card);
                self.begin_street(Phase::Turn);
                Ok(PhaseAdvance::TurnCard(card))
            }
            Phase::Turn => {
                self.deck.burn();
                let card = self.deck.draw();
                self.community.push(card);
                self.begin_street(Phase::River);
                Ok(PhaseAdvance::RiverCard(card))
            }
            _ => Ok(PhaseAdvance::Showdown(self.showdown(bank)?)),
        }
    }

    fn begin_street(&mut self, phase: Phase) {
        for seat in &mut self.seats {
            if seat.active {
                seat.round_bet = 0;
            }
        }
        self.current_bet = self.config.bet_amount;
        self.last_raiser_index = None;
        self.phase = phase;
    }

    /// Resolves the showdown: evaluates every active seat's seven cards,
    /// splits the pot among the seats tied at the top and credits them via
    /// the bankroll. The odd-chip remainder goes to the winning seat
    /// earliest in the current seat order, so no chips are dropped.
    pub fn showdown(&mut self, bank: &mut dyn Bankroll) -> Result<ShowdownRecord, GameError> {
        if self.phase != Phase::River {
            return Err(GameError::WrongPhase { actual: self.phase });
        }
        let waiting_on = self.unmatched_seats();
        if !waiting_on.is_empty() {
            return Err(GameError::RoundIncomplete { waiting_on });
        }
        if self.community.len() != 5 {
            return Err(GameError::IncompleteHand);
        }

        let mut results: Vec<(usize, HandRank)> = Vec::new();
        for (idx, seat) in self.seats.iter().enumerate() {
            if !seat.active {
                continue;
            }
            if seat.hole.len() != 2 {
                return Err(GameError::IncompleteHand);
            }
            let mut seven = [seat.hole[0]; 7];
            seven[1] = seat.hole[1];
            for (i, &c) in self.community.iter().enumerate() {
                seven[2 + i] = c;
            }
            results.push((idx, evaluate_seven(&seven)));
        }
        let best = results
            .iter()
            .map(|&(_, rank)| rank)
            .max()
            .ok_or(GameError::IncompleteHand)?;
        let winner_idxs: Vec<usize> = results
            .iter()
            .filter(|&&(_, rank)| rank == best)
            .map(|&(idx, _)| idx)
            .collect();

        let share = self.pot / winner_idxs.len() as u32;
        let remainder = self.pot % winner_idxs.len() as u32;
        for (pos, &idx) in winner_idxs.iter().enumerate() {
            let amount = if pos == 0 { share + remainder } else { share };
            bank.credit(&self.seats[idx].id, amount);
        }

        let record = ShowdownRecord {
            community: self.community.clone(),
            seats: self
                .seats
                .iter()
                .enumerate()
                .map(|(idx, s)| SeatResult {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    final_bet: s.round_bet,
                    hole: s.hole.clone(),
                    rank: results
                        .iter()
                        .find(|&&(i, _)| i == idx)
                        .map(|&(_, rank)| rank),
                    active: s.active,
                })
                .collect(),
            winners: winner_idxs
                .iter()
                .map(|&idx| Winner {
                    id: self.seats[idx].id.clone(),
                    name: self.seats[idx].name.clone(),
                })
                .collect(),
            pot: self.pot,
            share,
            ts: Some(now_rfc3339()),
        };

        // the pot has been paid out, as in the fold-out path
        self.pot = 0;
        self.phase = Phase::Showdown;
        self.finished = true;
        Ok(record)
    }

    /// Resets the table for the next hand: fresh deck, cleared cards and
    /// pot, seats rotated left by one so the blinds move. Blinds themselves
    /// are posted by the next `deal`.
    pub fn continue_hand(&mut self) -> Result<(), GameError> {
        if !self.finished {
            return Err(GameError::HandNotFinished);
        }
        self.deck = Deck::new();
        self.community.clear();
        self.pot = 0;
        self.current_bet = 0;
        self.current_turn_index = 0;
        self.last_raiser_index = None;
        for seat in &mut self.seats {
            seat.reset_for_next_hand();
        }
        if !self.seats.is_empty() {
            self.seats.rotate_left(1);
        }
        self.phase = Phase::Waiting;
        self.finished = false;
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            pot: self.pot,
            current_bet: self.current_bet,
            community: self.community.clone(),
            seats: self
                .seats
                .iter()
                .map(|s| SeatSnapshot {
                    name: s.name.clone(),
                    round_bet: s.round_bet,
                    active: s.active,
                })
                .collect(),
            to_act: match self.phase {
                Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River => {
                    self.current_turn().map(|s| s.name.clone())
                }
                _ => None,
            },
            last_raiser: self.last_raiser().map(|s| s.name.clone()),
            finished: self.finished,
        }
    }

    fn require_betting_phase(&self) -> Result<(), GameError> {
        match self.phase {
            Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River => Ok(()),
            _ => Err(GameError::WrongPhase { actual: self.phase }),
        }
    }

    fn acting_seat(&self, id: &str) -> Result<usize, GameError> {
        match self.seats.iter().find(|s| s.id == id) {
            Some(seat) if !seat.active => return Err(GameError::NotInHand),
            Some(_) => {}
            None => return Err(GameError::NotInHand),
        }
        let idx = self.current_turn_index;
        if self.seats.get(idx).map(|s| s.id.as_str()) != Some(id) {
            return Err(GameError::NotYourTurn);
        }
        Ok(idx)
    }
}
