use serde::Serialize;

use crate::types::TriggerEvent;

/// One "What will X say?" contract on the board. Prices are in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketQuote {
    pub label: String,
    pub ask_cents: u8,
    pub ticker: String,
}

impl MarketQuote {
    pub fn new(label: &str, ask_cents: u8, ticker: &str) -> Self {
        Self {
            label: label.to_string(),
            ask_cents,
            ticker: ticker.to_string(),
        }
    }

    /// Payout left on a YES contract that settles at 100¢.
    pub fn upside_cents(&self) -> u8 {
        100u8.saturating_sub(self.ask_cents)
    }
}

/// Static snapshot of the board; not refreshed from the venue.
pub fn default_markets() -> Vec<MarketQuote> {
    vec![
        MarketQuote::new("Retirement", 17, "RETI"),
        MarketQuote::new("Blockchain", 22, "BLOC"),
        MarketQuote::new("Bitcoin", 24, "BITC"),
        MarketQuote::new("Election", 34, "ELEC"),
        MarketQuote::new("Acquisition", 39, "ACQU"),
        MarketQuote::new("Economy", 40, "ECON"),
        MarketQuote::new("Kalshi", 41, "KALS"),
        MarketQuote::new("SIG", 56, "SIG"),
        MarketQuote::new("Tokenization", 66, "TOKE"),
        MarketQuote::new("Sport", 73, "SPOR"),
        MarketQuote::new("Innovation", 78, "INNO"),
        MarketQuote::new("Gold", 84, "GOLD"),
    ]
}

pub fn find_market<'a>(markets: &'a [MarketQuote], contract_label: &str) -> Option<&'a MarketQuote> {
    markets.iter().find(|m| m.label.eq_ignore_ascii_case(contract_label))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketStatus {
    Triggered,
    Buyable,
    Expensive,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketRow {
    #[serde(flatten)]
    pub quote: MarketQuote,
    pub upside_cents: u8,
    pub status: MarketStatus,
}

pub fn market_status(quote: &MarketQuote, history: &[TriggerEvent], max_price_cents: u8) -> MarketStatus {
    if history.iter().any(|t| t.contract_label.eq_ignore_ascii_case(&quote.label)) {
        MarketStatus::Triggered
    } else if quote.ask_cents < max_price_cents {
        MarketStatus::Buyable
    } else {
        MarketStatus::Expensive
    }
}

pub fn market_board(markets: &[MarketQuote], history: &[TriggerEvent], max_price_cents: u8) -> Vec<MarketRow> {
    markets
        .iter()
        .map(|quote| MarketRow {
            quote: quote.clone(),
            upside_cents: quote.upside_cents(),
            status: market_status(quote, history, max_price_cents),
        })
        .collect()
}
