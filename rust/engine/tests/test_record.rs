use std::fs;

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::hand::{Category, HandRank};
use holdem_engine::record::{RecordWriter, SeatResult, ShowdownRecord, Winner};

fn sample_record(ts: Option<String>) -> ShowdownRecord {
    let board: Vec<Card> = [Rank::Two, Rank::Seven, Rank::Nine, Rank::Jack, Rank::Queen]
        .iter()
        .map(|&rank| Card {
            suit: Suit::Clubs,
            rank,
        })
        .collect();
    ShowdownRecord {
        community: board,
        seats: vec![
            SeatResult {
                id: "p1".to_string(),
                name: "Alice".to_string(),
                final_bet: 20,
                hole: vec![
                    Card {
                        suit: Suit::Spades,
                        rank: Rank::Ace,
                    },
                    Card {
                        suit: Suit::Hearts,
                        rank: Rank::Ace,
                    },
                ],
                rank: Some(HandRank {
                    category: Category::OnePair,
                    tiebreaks: [14, 12, 11, 9, 0],
                }),
                active: true,
            },
            SeatResult {
                id: "p2".to_string(),
                name: "Bob".to_string(),
                final_bet: 0,
                hole: vec![],
                rank: None,
                active: false,
            },
        ],
        winners: vec![Winner {
            id: "p1".to_string(),
            name: "Alice".to_string(),
        }],
        pot: 360,
        share: 360,
        ts,
    }
}

#[test]
fn record_round_trips_through_json() {
    let record = sample_record(Some("2026-08-23T12:00:00Z".to_string()));
    let json = serde_json::to_string(&record).unwrap();
    let back: ShowdownRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn writer_appends_one_line_per_record_and_injects_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records").join("showdowns.jsonl");

    let mut writer = RecordWriter::create(&path).unwrap();
    writer.write(&sample_record(None)).unwrap();
    writer.write(&sample_record(None)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let rec: ShowdownRecord = serde_json::from_str(line).unwrap();
        assert!(rec.ts.is_some());
        assert_eq!(rec.winners[0].name, "Alice");
    }
}
