/// Tests for the transcript queue processor.
use super::test_config;
use crate::feed::{run_lines, run_processor};
use crate::matcher::Matcher;
use crate::state::AppState;
use crate::triggers::TriggerTable;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn processor_drains_queue_in_order() {
    let state = AppState::with_matcher(test_config(), Matcher::new(TriggerTable::default_table()));
    let (tx, rx) = mpsc::channel::<String>(8);

    tx.send("good morning everyone".into()).await.unwrap();
    tx.send("we just launched on kalshi".into()).await.unwrap();
    tx.send("kalshi again".into()).await.unwrap();
    drop(tx);

    run_processor(rx, state.clone()).await;

    let session = state.session.lock().unwrap();
    assert_eq!(session.transcripts.len(), 3);
    assert_eq!(session.transcripts[1].text, "we just launched on kalshi");
    assert_eq!(session.triggers.len(), 1);
    assert_eq!(session.triggers[0].contract_label, "Kalshi");
    assert_eq!(session.ledger.trade_count, 1);
}

#[tokio::test]
async fn processor_skips_blank_items() {
    let state = AppState::with_matcher(test_config(), Matcher::new(TriggerTable::default_table()));
    let (tx, rx) = mpsc::channel::<String>(8);

    tx.send("   ".into()).await.unwrap();
    drop(tx);

    run_processor(rx, state.clone()).await;
    assert!(state.session.lock().unwrap().transcripts.is_empty());
}

#[tokio::test]
async fn lines_are_forwarded_verbatim() {
    let input = "  I love bitcoin  \n\nkalshi\n";
    let (tx, mut rx) = mpsc::channel::<String>(8);

    run_lines(BufReader::new(input.as_bytes()), tx, CancellationToken::new()).await;

    assert_eq!(rx.recv().await.as_deref(), Some("  I love bitcoin  "));
    assert_eq!(rx.recv().await.as_deref(), Some(""));
    assert_eq!(rx.recv().await.as_deref(), Some("kalshi"));
    assert_eq!(rx.recv().await, None);
}

#[tokio::test]
async fn fed_transcript_keeps_original_text() {
    let state = AppState::with_matcher(test_config(), Matcher::new(TriggerTable::default_table()));
    let (tx, rx) = mpsc::channel::<String>(8);

    run_lines(BufReader::new("  I love bitcoin  \n\n".as_bytes()), tx, CancellationToken::new()).await;
    run_processor(rx, state.clone()).await;

    let session = state.session.lock().unwrap();
    assert_eq!(session.transcripts.len(), 1);
    assert_eq!(session.transcripts[0].text, "  I love bitcoin  ");
    assert_eq!(session.triggers[0].context, "  I love bitcoin  ");
}

#[tokio::test]
async fn cancelled_feed_stops() {
    let (tx, mut rx) = mpsc::channel::<String>(8);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let (_writer, reader) = tokio::io::duplex(64);
    run_lines(BufReader::new(reader), tx, cancel).await;
    assert_eq!(rx.recv().await, None);
}
