use crate::matcher::{FiredTargets, Matcher};
use crate::paper::PaperLedger;
use crate::types::{clock_stamp, TranscriptEntry, TriggerEvent};

/// Everything one keynote session accumulates. Lives from startup until the
/// process exits; `reset` returns it to the empty state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub transcripts: Vec<TranscriptEntry>,
    pub triggers: Vec<TriggerEvent>,
    pub fired: FiredTargets,
    pub ledger: PaperLedger,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transcript line. Blank text is rejected and nothing is logged.
    pub fn record_transcript(&mut self, text: &str) -> bool {
        self.record_transcript_at(text, &clock_stamp())
    }

    pub fn record_transcript_at(&mut self, text: &str, timestamp: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.transcripts.push(TranscriptEntry {
            timestamp: timestamp.to_string(),
            text: text.to_string(),
        });
        true
    }

    pub fn merge_events(&mut self, events: &[TriggerEvent]) {
        for event in events {
            self.fired.insert(event.target_id.clone());
            self.triggers.push(event.clone());
        }
    }

    /// Record, scan against the fired set as of now, merge.
    /// `None` when the text is blank.
    pub fn process(&mut self, text: &str, matcher: &Matcher) -> Option<Vec<TriggerEvent>> {
        let timestamp = clock_stamp();
        if !self.record_transcript_at(text, &timestamp) {
            return None;
        }
        let events = matcher.scan_at(text, &self.fired, &timestamp);
        self.merge_events(&events);
        Some(events)
    }

    pub fn is_fired(&self, target_id: &str) -> bool {
        self.fired.contains(target_id)
    }

    pub fn is_contract_triggered(&self, contract_label: &str) -> bool {
        self.triggers.iter().any(|t| t.contract_label.eq_ignore_ascii_case(contract_label))
    }

    pub fn reset(&mut self) {
        self.transcripts.clear();
        self.triggers.clear();
        self.fired.clear();
        self.ledger.clear();
    }
}
