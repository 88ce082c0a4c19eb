mod feed_tests;
mod paper_tests;
mod session_tests;

use crate::config::Config;
use crate::matcher::{DEFAULT_NEGATION_WINDOW, NEGATION_WORDS};
use crate::types::MatchMode;

/// Build a minimal Config for testing — avoids loading .env.
fn test_config() -> Config {
    Config {
        trigger_map_json: None,
        negation_words: NEGATION_WORDS.iter().map(|w| w.to_string()).collect(),
        deepgram_api_key: String::new(),
        quantity: 10,
        max_price_cents: 85,
        dry_run: true,
        dedupe_within_call: false,
        match_mode: MatchMode::Substring,
        negation_window: DEFAULT_NEGATION_WINDOW,
        context_max_chars: None,
        stdin_feed: false,
        log_level: "info".to_string(),
        log_json: false,
        http_port: 3000,
    }
}
