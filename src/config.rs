use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::path::Path;
use std::str::FromStr;

use crate::matcher::{MatchOptions, DEFAULT_NEGATION_WINDOW, NEGATION_WORDS};
use crate::paper::{
    TradeSettings, MAX_MAX_PRICE_CENTS, MAX_QUANTITY, MIN_MAX_PRICE_CENTS, MIN_QUANTITY,
};
use crate::triggers::{parse_table, TriggerTable};
use crate::types::MatchMode;

const SETTINGS_FILE: &str = "settings.json";

/// Dashboard-editable fields, persisted between runs. Saved values win over env.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SavedSettings {
    pub quantity: Option<u32>,
    pub max_price_cents: Option<u8>,
    pub dry_run: Option<bool>,
    pub dedupe_within_call: Option<bool>,
    pub match_mode: Option<MatchMode>,
}

impl SavedSettings {
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str(&contents) {
                    Ok(s) => return s,
                    Err(e) => tracing::warn!("failed to parse {}: {e}", path.display()),
                },
                Err(e) => tracing::warn!("failed to read {}: {e}", path.display()),
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(SETTINGS_FILE, json) {
                    tracing::warn!("failed to write {SETTINGS_FILE}: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize settings: {e}"),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            quantity: Some(config.quantity),
            max_price_cents: Some(config.max_price_cents),
            dry_run: Some(config.dry_run),
            dedupe_within_call: Some(config.dedupe_within_call),
            match_mode: Some(config.match_mode),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    #[serde(skip)]
    pub trigger_map_json: Option<String>,
    pub negation_words: Vec<String>,
    #[serde(skip)]
    pub deepgram_api_key: String,

    pub quantity: u32,
    pub max_price_cents: u8,
    pub dry_run: bool,

    pub dedupe_within_call: bool,
    pub match_mode: MatchMode,
    pub negation_window: usize,
    pub context_max_chars: Option<usize>,

    pub stdin_feed: bool,
    pub log_level: String,
    pub log_json: bool,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let saved = SavedSettings::load();
        Self::from_env_with(saved)
    }

    pub fn from_env_with(saved: SavedSettings) -> Result<Self> {
        let match_mode = match saved.match_mode {
            Some(mode) => mode,
            None => {
                let raw = env_or("MATCH_MODE", "substring");
                MatchMode::parse(&raw).with_context(|| format!("invalid MATCH_MODE: {raw}"))?
            }
        };

        let config = Self {
            trigger_map_json: std::env::var("TRIGGER_MAP_JSON").ok().filter(|s| !s.trim().is_empty()),
            negation_words: match std::env::var("NEGATION_WORDS") {
                Ok(raw) if !raw.trim().is_empty() => split_list(&raw),
                _ => NEGATION_WORDS.iter().map(|w| w.to_string()).collect(),
            },
            deepgram_api_key: env_or("DEEPGRAM_API_KEY", ""),

            quantity: match saved_in_range("quantity", saved.quantity, MIN_QUANTITY..=MAX_QUANTITY) {
                Some(q) => q,
                None => parse_env("QUANTITY", "10")?,
            },
            max_price_cents: match saved_in_range(
                "max_price_cents",
                saved.max_price_cents,
                MIN_MAX_PRICE_CENTS..=MAX_MAX_PRICE_CENTS,
            ) {
                Some(p) => p,
                None => parse_env("MAX_PRICE_CENTS", "85")?,
            },
            dry_run: saved.dry_run
                .unwrap_or_else(|| env_or("DRY_RUN", "true").parse().unwrap_or(true)),

            dedupe_within_call: saved.dedupe_within_call
                .unwrap_or_else(|| env_or("DEDUPE_WITHIN_CALL", "false").parse().unwrap_or(false)),
            match_mode,
            negation_window: parse_env("NEGATION_WINDOW", &DEFAULT_NEGATION_WINDOW.to_string())?,
            context_max_chars: Some(parse_env::<usize>("CONTEXT_MAX_CHARS", "0")?).filter(|&n| n > 0),

            stdin_feed: env_or("STDIN_FEED", "true").parse().unwrap_or(true),
            log_level: env_or("LOG_LEVEL", "info"),
            log_json: env_or("LOG_FORMAT", "text").eq_ignore_ascii_case("json"),
            http_port: parse_env("HTTP_PORT", "3000")?,
        };

        if let Err(e) = config.trade_settings().validate() {
            bail!("invalid trade settings from environment: {e}");
        }

        Ok(config)
    }

    pub fn persist(&self) {
        SavedSettings::from_config(self).save();
    }

    pub fn has_transcription_key(&self) -> bool {
        !self.deepgram_api_key.trim().is_empty()
    }

    pub fn trade_settings(&self) -> TradeSettings {
        TradeSettings {
            quantity: self.quantity,
            max_price_cents: self.max_price_cents,
            dry_run: self.dry_run,
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            mode: self.match_mode,
            dedupe_within_call: self.dedupe_within_call,
            negation_window: self.negation_window,
            context_max_chars: self.context_max_chars,
        }
    }

    /// Trigger table from `TRIGGER_MAP_JSON`, or the built-in table when the
    /// override is absent or rejected.
    pub fn trigger_table(&self) -> TriggerTable {
        let Some(raw) = self.trigger_map_json.as_deref() else {
            return TriggerTable::default_table();
        };
        match parse_table(raw) {
            Ok(table) => {
                tracing::info!(phrases = table.len(), "trigger map loaded from TRIGGER_MAP_JSON");
                table
            }
            Err(e) => {
                tracing::warn!(error = %e, "TRIGGER_MAP_JSON rejected — using built-in trigger map");
                TriggerTable::default_table()
            }
        }
    }
}

/// A saved value outside `range` is dropped with a warning so env/default applies.
fn saved_in_range<T>(key: &str, saved: Option<T>, range: RangeInclusive<T>) -> Option<T>
where
    T: PartialOrd + Display + Copy,
{
    match saved {
        Some(v) if range.contains(&v) => Some(v),
        Some(v) => {
            tracing::warn!(
                "ignoring saved {key}={v} from {SETTINGS_FILE}: outside {}-{}",
                range.start(),
                range.end()
            );
            None
        }
        None => None,
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = env_or(key, default);
    raw.trim().parse().with_context(|| format!("invalid value for {key}: {raw}"))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
