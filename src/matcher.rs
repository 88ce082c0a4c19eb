use std::collections::HashSet;

use serde::Serialize;

use crate::triggers::TriggerTable;
use crate::types::{clock_stamp, MatchMode, TriggerEntry, TriggerEvent};

/// Markers that suppress a match when found inside one of the tokens just
/// before the phrase. Checked as substrings, so "no" also hits "know".
pub const NEGATION_WORDS: &[&str] = &[
    "not", "don't", "won't", "never", "no", "isn't", "aren't", "wasn't",
    "weren't", "can't", "couldn't", "shouldn't", "wouldn't", "without",
];

pub const DEFAULT_NEGATION_WINDOW: usize = 4;

/// Targets that already produced an event this session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FiredTargets(HashSet<String>);

impl FiredTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, target_id: &str) -> bool {
        self.0.contains(target_id)
    }

    /// Returns false if the target was already present.
    pub fn insert(&mut self, target_id: impl Into<String>) -> bool {
        self.0.insert(target_id.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchOptions {
    pub mode: MatchMode,
    /// When set, a second phrase for a target already emitted earlier in the
    /// same call is dropped. Off by default: co-mentions in one text all fire.
    pub dedupe_within_call: bool,
    pub negation_window: usize,
    pub context_max_chars: Option<usize>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            mode: MatchMode::Substring,
            dedupe_within_call: false,
            negation_window: DEFAULT_NEGATION_WINDOW,
            context_max_chars: None,
        }
    }
}

/// Stateless phrase scanner over a fixed trigger table.
///
/// `scan` never touches session state; the caller merges the returned
/// events into its fired set and history.
#[derive(Debug, Clone)]
pub struct Matcher {
    table: TriggerTable,
    negations: Vec<String>,
    options: MatchOptions,
}

impl Matcher {
    pub fn new(table: TriggerTable) -> Self {
        Self {
            table,
            negations: NEGATION_WORDS.iter().map(|w| w.to_string()).collect(),
            options: MatchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_negations(mut self, words: Vec<String>) -> Self {
        self.negations = words
            .into_iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self
    }

    pub fn table(&self) -> &TriggerTable {
        &self.table
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: MatchOptions) {
        self.options = options;
    }

    pub fn negations(&self) -> &[String] {
        &self.negations
    }

    /// Scan `text`, stamping events with the current local time.
    pub fn scan(&self, text: &str, fired: &FiredTargets) -> Vec<TriggerEvent> {
        self.scan_at(text, fired, &clock_stamp())
    }

    pub fn scan_at(&self, text: &str, fired: &FiredTargets, timestamp: &str) -> Vec<TriggerEvent> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        let mut emitted: HashSet<&str> = HashSet::new();
        let mut events = Vec::new();

        for entry in self.table.iter() {
            // fired is the state at call start; same-call co-mentions are
            // only dropped when dedupe_within_call is on
            if fired.contains(&entry.target_id) {
                continue;
            }
            if self.options.dedupe_within_call && emitted.contains(entry.target_id.as_str()) {
                continue;
            }
            if !lowered.contains(entry.phrase.as_str()) {
                continue;
            }

            let Some(start) = self.locate(&tokens, &entry.phrase) else {
                continue;
            };

            if let Some(marker) = self.negation_before(&tokens, start) {
                tracing::debug!(phrase = %entry.phrase, marker, "match suppressed by negation");
                continue;
            }

            emitted.insert(entry.target_id.as_str());
            events.push(self.event(entry, text, timestamp));
        }

        events
    }

    /// Index of the first token window matching every phrase word.
    fn locate(&self, tokens: &[&str], phrase: &str) -> Option<usize> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        if words.is_empty() || words.len() > tokens.len() {
            return None;
        }

        (0..=tokens.len() - words.len()).find(|&i| {
            words
                .iter()
                .enumerate()
                .all(|(j, word)| self.token_matches(tokens[i + j], word))
        })
    }

    fn token_matches(&self, token: &str, word: &str) -> bool {
        match self.options.mode {
            MatchMode::Substring => token.contains(word),
            MatchMode::WholeWord => token.trim_matches(|c: char| !c.is_alphanumeric()) == word,
        }
    }

    fn negation_before<'a>(&'a self, tokens: &[&str], start: usize) -> Option<&'a str> {
        let from = start.saturating_sub(self.options.negation_window);
        tokens[from..start].iter().find_map(|token| {
            self.negations
                .iter()
                .find(|marker| token.contains(marker.as_str()))
                .map(String::as_str)
        })
    }

    fn event(&self, entry: &TriggerEntry, text: &str, timestamp: &str) -> TriggerEvent {
        TriggerEvent {
            phrase: entry.phrase.clone(),
            contract_label: entry.contract_label.clone(),
            target_id: entry.target_id.clone(),
            degree: entry.degree,
            timestamp: timestamp.to_string(),
            context: truncate_context(text, self.options.context_max_chars),
        }
    }
}

/// Scan with default options and negation markers.
pub fn scan(text: &str, table: &TriggerTable, fired: &FiredTargets) -> Vec<TriggerEvent> {
    Matcher::new(table.clone()).scan(text, fired)
}

fn truncate_context(text: &str, max_chars: Option<usize>) -> String {
    match max_chars {
        Some(max) if text.chars().count() > max => {
            let cut: String = text.chars().take(max).collect();
            format!("{cut}…")
        }
        _ => text.to_string(),
    }
}
