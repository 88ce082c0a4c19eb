use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex, RwLock};

use serde::Serialize;

use crate::config::Config;
use crate::market::{default_markets, MarketQuote};
use crate::matcher::Matcher;
use crate::paper::{plan_trade, PaperTrade, TradeDecision};
use crate::session::Session;
use crate::types::{clock_stamp, TriggerEvent};

#[derive(Debug, Clone, Serialize)]
pub struct EventEntry {
    pub ts: String,
    pub kind: String,
    pub detail: String,
}

/// What one processed transcript produced
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessOutcome {
    pub triggers: Vec<TriggerEvent>,
    pub trades: Vec<PaperTrade>,
}

pub struct AppState {
    pub config: RwLock<Config>,
    pub matcher: RwLock<Matcher>,
    pub markets: Vec<MarketQuote>,
    pub session: Mutex<Session>,
    pub events: Mutex<VecDeque<EventEntry>>,
    pub started_at: String,
}

const MAX_EVENTS: usize = 200;

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let matcher = Matcher::new(config.trigger_table())
            .with_negations(config.negation_words.clone())
            .with_options(config.match_options());
        Self::with_matcher(config, matcher)
    }

    pub fn with_matcher(config: Config, matcher: Matcher) -> Arc<Self> {
        Arc::new(Self {
            config: RwLock::new(config),
            matcher: RwLock::new(matcher),
            markets: default_markets(),
            session: Mutex::new(Session::new()),
            events: Mutex::new(VecDeque::with_capacity(MAX_EVENTS)),
            started_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
        })
    }

    pub fn push_event(&self, kind: &str, detail: &str) {
        let entry = EventEntry {
            ts: clock_stamp(),
            kind: kind.to_string(),
            detail: detail.to_string(),
        };
        let mut events = self.events.lock().unwrap();
        if events.len() >= MAX_EVENTS {
            events.pop_front();
        }
        events.push_back(entry);
    }

    /// Run one transcript through the matcher and fold the result into the
    /// session. The session lock is held across scan and merge so that
    /// concurrent sources cannot both fire the same target.
    ///
    /// Returns `None` for blank input.
    pub fn process_transcript(&self, text: &str, source: &str) -> Option<ProcessOutcome> {
        let settings = self.config.read().unwrap().trade_settings();
        let matcher = self.matcher.read().unwrap();

        let mut session = self.session.lock().unwrap();
        let triggers = session.process(text, &matcher)?;
        drop(matcher);

        tracing::debug!(source, chars = text.len(), triggers = triggers.len(), "transcript processed");

        let mut trades: Vec<PaperTrade> = Vec::new();
        // co-mentions of one target in the same text buy it once
        let mut bought: HashSet<&str> = HashSet::new();
        for event in &triggers {
            tracing::info!(
                phrase = %event.phrase,
                contract = %event.contract_label,
                target = %event.target_id,
                degree = event.degree.as_u8(),
                "TRIGGER"
            );
            self.push_event("trigger", &event.to_string());

            if bought.contains(event.target_id.as_str()) {
                tracing::debug!(target_id = %event.target_id, "already bought on this transcript");
                continue;
            }

            match plan_trade(event, &self.markets, &settings) {
                TradeDecision::Place(trade) => {
                    tracing::info!(trade = %trade, "paper trade recorded");
                    self.push_event("trade", &format!("[DRY RUN] {trade}"));
                    bought.insert(event.target_id.as_str());
                    session.ledger.on_fill(trade.clone());
                    trades.push(trade);
                }
                TradeDecision::Skip(reason) => {
                    tracing::info!(contract = %event.contract_label, %reason, "no trade");
                    self.push_event("skip", &format!("{}: {reason}", event.contract_label));
                }
            }
        }

        Some(ProcessOutcome { triggers, trades })
    }

    /// Clear transcripts, trigger history, fired targets and trades together.
    pub fn reset_session(&self) {
        self.session.lock().unwrap().reset();
        self.events.lock().unwrap().clear();
    }

    /// Push config-derived match options into the live matcher.
    pub fn refresh_matcher(&self) {
        let options = self.config.read().unwrap().match_options();
        self.matcher.write().unwrap().set_options(options);
    }
}
