use std::collections::HashMap;

use holdem_engine::errors::GameError;
use holdem_engine::session::{Bankroll, GameConfig, GameSession, Phase, PhaseAdvance};

struct TestBank(HashMap<String, u32>);

impl TestBank {
    fn with_players(players: &[(&str, u32)]) -> Self {
        Self(
            players
                .iter()
                .map(|&(id, chips)| (id.to_string(), chips))
                .collect(),
        )
    }
    fn get(&self, id: &str) -> u32 {
        *self.0.get(id).unwrap_or(&0)
    }
}

impl Bankroll for TestBank {
    fn balance(&mut self, participant: &str) -> u32 {
        *self.0.get(participant).unwrap_or(&0)
    }
    fn credit(&mut self, participant: &str, amount: u32) {
        *self.0.entry(participant.to_string()).or_insert(0) += amount;
    }
    fn debit(&mut self, participant: &str, amount: u32) {
        let entry = self.0.entry(participant.to_string()).or_insert(0);
        *entry = entry.saturating_sub(amount);
    }
}

fn config() -> GameConfig {
    GameConfig {
        buyin: 100,
        small_blind: 10,
        big_blind: 20,
        bet_amount: 20,
        max_players: 9,
    }
}

#[test]
fn join_moves_buyin_into_pot() {
    let mut bank = TestBank::with_players(&[("p1", 1000)]);
    let mut session = GameSession::new(config());
    let outcome = session.join("p1", "Alice", &mut bank).unwrap();
    assert_eq!(outcome.buyin, 100);
    assert_eq!(outcome.balance, 900);
    assert_eq!(session.pot(), 100);
    assert_eq!(bank.get("p1"), 900);
}

#[test]
fn join_rejects_duplicates_and_poor_players() {
    let mut bank = TestBank::with_players(&[("p1", 1000), ("p2", 50)]);
    let mut session = GameSession::new(config());
    session.join("p1", "Alice", &mut bank).unwrap();
    match session.join("p1", "Alice", &mut bank) {
        Err(GameError::AlreadySeated) => {}
        other => panic!("unexpected: {:?}", other),
    }
    match session.join("p2", "Bob", &mut bank) {
        Err(GameError::InsufficientBalance {
            required: 100,
            available: 50,
        }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn join_enforces_max_players() {
    let mut config = config();
    config.max_players = 2;
    let mut bank = TestBank::with_players(&[("p1", 1000), ("p2", 1000), ("p3", 1000)]);
    let mut session = GameSession::new(config);
    session.join("p1", "Alice", &mut bank).unwrap();
    session.join("p2", "Bob", &mut bank).unwrap();
    match session.join("p3", "Carol", &mut bank) {
        Err(GameError::TableFull { max_players: 2 }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn deal_requires_two_players() {
    let mut bank = TestBank::with_players(&[("p1", 1000)]);
    let mut session = GameSession::new(config());
    session.join("p1", "Alice", &mut bank).unwrap();
    match session.deal(&mut bank) {
        Err(GameError::TooFewPlayers { seated: 1 }) => {}
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn deal_posts_blinds_and_opens_preflop() {
    let mut bank = TestBank::with_players(&[("p1", 1000), ("p2", 1000), ("p3", 1000)]);
    let mut session = GameSession::new(config());
    session.join("p1", "Alice", &mut bank).unwrap();
    session.join("p2", "Bob", &mut bank).unwrap();
    session.join("p3", "Carol", &mut bank).unwrap();

    let outcome = session.deal(&mut bank).unwrap();
    assert_eq!(outcome.small_blind.amount, 10);
    assert_eq!(outcome.big_blind.amount, 20);
    assert_eq!(outcome.current_bet, 20);
    assert_eq!(session.phase(), Phase::Preflop);
    // buy-ins plus both blinds
    assert_eq!(session.pot(), 330);
    // first seat past the blinds acts first
    assert_eq!(session.current_turn_index(), 2);
    assert!(session
        .seats()
        .iter()
        .all(|s| s.hole.len() == 2 && s.active));
    assert_eq!(bank.get("p1"), 890);
    assert_eq!(bank.get("p2"), 880);
}

#[test]
fn short_stack_posts_partial_blind() {
    let mut bank = TestBank::with_players(&[("p1", 105), ("p2", 100)]);
    let mut session = GameSession::new(config());
    session.join("p1", "Alice", &mut bank).unwrap();
    session.join("p2", "Bob", &mut bank).unwrap();

    // Alice has 5 left for a 10 small blind, Bob nothing for the big blind
    let outcome = session.deal(&mut bank).unwrap();
    assert_eq!(outcome.small_blind.amount, 5);
    assert_eq!(outcome.big_blind.amount, 0);
    assert_eq!(session.pot(), 205);
    // the required contribution is still the full big blind
    assert_eq!(session.current_bet(), 20);
}

#[test]
fn phase_advance_gated_on_round_completion() {
    let mut bank = TestBank::with_players(&[("p1", 1000), ("p2", 1000)]);
    let mut session = GameSession::new(config());
    session.join("p1", "Alice", &mut bank).unwrap();
    session.join("p2", "Bob", &mut bank).unwrap();
    session.deal(&mut bank).unwrap();

    // small blind still owes 10 preflop
    match session.advance_phase(&mut bank) {
        Err(GameError::RoundIncomplete { waiting_on }) => {
            assert_eq!(waiting_on, vec!["Alice".to_string()]);
        }
        other => panic!("unexpected: {:?}", other),
    }

    session.call("p1", &mut bank).unwrap();
    session.check("p2").unwrap();
    match session.advance_phase(&mut bank).unwrap() {
        PhaseAdvance::Flop(cards) => assert_eq!(cards.len(), 3),
        other => panic!("unexpected: {:?}", other),
    }
    assert_eq!(session.phase(), Phase::Flop);
    assert_eq!(session.community().len(), 3);
    // street reset: fixed bet unit, fresh round bets
    assert_eq!(session.current_bet(), 20);
    assert!(session.seats().iter().all(|s| s.round_bet == 0));
}

#[test]
fn streets_progress_to_river_and_pot_is_conserved() {
    let mut bank = TestBank::with_players(&[("p1", 1000), ("p2", 1000)]);
    let mut session = GameSession::new(config());
    session.join("p1", "Alice", &mut bank).unwrap();
    session.join("p2", "Bob", &mut bank).unwrap();
    session.deal(&mut bank).unwrap();

    session.call("p1", &mut bank).unwrap();
    session.check("p2").unwrap();
    session.advance_phase(&mut bank).unwrap(); // flop

    for expected_phase in [Phase::Turn, Phase::River] {
        session.call("p1", &mut bank).unwrap();
        session.call("p2", &mut bank).unwrap();
        session.advance_phase(&mut bank).unwrap();
        assert_eq!(session.phase(), expected_phase);
    }
    assert_eq!(session.community().len(), 5);

    // pot equals everything the bank paid out
    let debits = 2000 - bank.get("p1") - bank.get("p2");
    assert_eq!(session.pot(), debits);
}

#[test]
fn continue_requires_finished_hand() {
    let mut bank = TestBank::with_players(&[("p1", 1000), ("p2", 1000)]);
    let mut session = GameSession::new(config());
    session.join("p1", "Alice", &mut bank).unwrap();
    session.join("p2", "Bob", &mut bank).unwrap();
    session.deal(&mut bank).unwrap();
    assert_eq!(session.continue_hand(), Err(GameError::HandNotFinished));
}

#[test]
fn snapshot_hides_hole_cards_and_names_turn_holder() {
    let mut bank = TestBank::with_players(&[("p1", 1000), ("p2", 1000)]);
    let mut session = GameSession::new(config());
    session.join("p1", "Alice", &mut bank).unwrap();
    session.join("p2", "Bob", &mut bank).unwrap();
    session.deal(&mut bank).unwrap();

    let snap = session.snapshot();
    assert_eq!(snap.phase, Phase::Preflop);
    assert_eq!(snap.to_act.as_deref(), Some("Alice"));
    let json = serde_json::to_string(&snap).unwrap();
    assert!(!json.contains("hole"));
}
