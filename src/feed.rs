use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Reads transcript lines from stdin, one per line, onto the queue.
/// Pipe a speech-to-text CLI into the process, or type lines by hand.
pub async fn run_stdin(transcript_tx: mpsc::Sender<String>, cancel: CancellationToken) {
    tracing::info!("transcript feed started (stdin mode)");
    run_lines(BufReader::new(tokio::io::stdin()), transcript_tx, cancel).await;
}

/// Forwards each line of `reader` verbatim; blank lines are left for the
/// session to reject.
pub async fn run_lines<R>(reader: R, transcript_tx: mpsc::Sender<String>, cancel: CancellationToken)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let next = tokio::select! {
            line = lines.next_line() => line,
            _ = cancel.cancelled() => {
                tracing::info!("transcript feed stopped by cancellation");
                return;
            }
        };

        match next {
            Ok(Some(line)) => {
                if transcript_tx.send(line).await.is_err() {
                    tracing::error!("transcript channel closed");
                    return;
                }
            }
            Ok(None) => {
                tracing::info!("input closed — transcript feed stopping");
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "transcript read error");
                return;
            }
        }
    }
}

/// Drains the queue one transcript per cycle into the session.
pub async fn run_processor(mut transcript_rx: mpsc::Receiver<String>, state: Arc<AppState>) {
    while let Some(text) = transcript_rx.recv().await {
        if let Some(outcome) = state.process_transcript(&text, "stdin") {
            if outcome.triggers.is_empty() {
                tracing::debug!("no triggers in stdin transcript");
            }
        }
    }
    tracing::info!("transcript processor stopped");
}
