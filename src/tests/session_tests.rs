/// Tests for the session object: transcript log, merge, reset.
use crate::matcher::Matcher;
use crate::paper::PaperTrade;
use crate::session::Session;
use crate::triggers::TriggerTable;
use crate::types::{Degree, TriggerEntry};
use rust_decimal_macros::dec;

const BITCOIN: &str = "KXVLADTENEVMENTION-25DEC17-BITC";

fn matcher() -> Matcher {
    Matcher::new(TriggerTable::default_table())
}

#[test]
fn new_session_is_empty() {
    let s = Session::new();
    assert!(s.transcripts.is_empty());
    assert!(s.triggers.is_empty());
    assert!(s.fired.is_empty());
    assert_eq!(s.ledger.trade_count, 0);
}

#[test]
fn record_transcript_rejects_blank_text() {
    let mut s = Session::new();
    assert!(!s.record_transcript(""));
    assert!(!s.record_transcript("  \t "));
    assert!(s.transcripts.is_empty());
}

#[test]
fn record_transcript_appends_in_order() {
    let mut s = Session::new();
    assert!(s.record_transcript_at("first", "10:00:00"));
    assert!(s.record_transcript_at("second", "10:00:05"));
    assert_eq!(s.transcripts.len(), 2);
    assert_eq!(s.transcripts[0].text, "first");
    assert_eq!(s.transcripts[1].timestamp, "10:00:05");
}

#[test]
fn process_blank_text_is_a_no_op() {
    let mut s = Session::new();
    assert!(s.process("   ", &matcher()).is_none());
    assert!(s.transcripts.is_empty());
    assert!(s.triggers.is_empty());
}

#[test]
fn process_logs_text_even_without_triggers() {
    let mut s = Session::new();
    let events = s.process("good morning everyone", &matcher()).unwrap();
    assert!(events.is_empty());
    assert_eq!(s.transcripts.len(), 1);
}

#[test]
fn process_merges_events_into_fired_set() {
    let mut s = Session::new();
    let events = s.process("I love bitcoin", &matcher()).unwrap();
    assert_eq!(events.len(), 1);
    assert!(s.is_fired(BITCOIN));
    assert_eq!(s.triggers.len(), 1);
    assert!(s.is_contract_triggered("Bitcoin"));
    assert!(!s.is_contract_triggered("Gold"));
}

#[test]
fn contract_triggered_lookup_ignores_case() {
    let table = TriggerTable::from_entries(vec![TriggerEntry {
        phrase: "satoshi".into(),
        contract_label: "bitcoin".into(),
        target_id: BITCOIN.into(),
        degree: Degree::Indirect,
    }])
    .unwrap();
    let mut s = Session::new();
    s.process("satoshi would approve", &Matcher::new(table)).unwrap();
    assert!(s.is_contract_triggered("Bitcoin"));
    assert!(s.is_contract_triggered("BITCOIN"));
}

#[test]
fn repeated_mention_fires_once_per_session() {
    let mut s = Session::new();
    let m = matcher();
    assert_eq!(s.process("bitcoin", &m).unwrap().len(), 1);
    assert!(s.process("bitcoin", &m).unwrap().is_empty());
    assert!(s.process("crypto and btc", &m).unwrap().is_empty());
    assert_eq!(s.transcripts.len(), 3);
    assert_eq!(s.triggers.len(), 1);
}

#[test]
fn same_text_co_mentions_both_land_in_history() {
    let mut s = Session::new();
    let events = s.process("crypto is booming, especially bitcoin", &matcher()).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(s.triggers.len(), 2);
    assert_eq!(s.fired.len(), 1);
}

#[test]
fn reset_clears_everything() {
    let mut s = Session::new();
    s.process("bitcoin and gold", &matcher()).unwrap();
    s.ledger.on_fill(PaperTrade {
        phrase: "gold".into(),
        contract_label: "Gold".into(),
        target_id: "G".into(),
        ticker: "GOLD".into(),
        price_cents: 84,
        quantity: 1,
        cost: dec!(0.84),
        timestamp: "10:00:00".into(),
    });

    s.reset();

    assert!(s.transcripts.is_empty());
    assert!(s.triggers.is_empty());
    assert!(s.fired.is_empty());
    assert!(s.ledger.trades.is_empty());
    assert_eq!(s.ledger.total_spent, dec!(0));

    // targets can fire again after a reset
    assert_eq!(s.process("bitcoin", &matcher()).unwrap().len(), 1);
}
