use rust_decimal::Decimal;
use serde::Serialize;

use crate::market::{find_market, MarketQuote};
use crate::types::TriggerEvent;

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 100;
pub const MIN_MAX_PRICE_CENTS: u8 = 50;
pub const MAX_MAX_PRICE_CENTS: u8 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradeSettings {
    pub quantity: u32,
    pub max_price_cents: u8,
    pub dry_run: bool,
}

impl TradeSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&self.quantity) {
            return Err(format!(
                "quantity must be {MIN_QUANTITY}-{MAX_QUANTITY}, got {}",
                self.quantity
            ));
        }
        if !(MIN_MAX_PRICE_CENTS..=MAX_MAX_PRICE_CENTS).contains(&self.max_price_cents) {
            return Err(format!(
                "max price must be {MIN_MAX_PRICE_CENTS}-{MAX_MAX_PRICE_CENTS}¢, got {}",
                self.max_price_cents
            ));
        }
        Ok(())
    }
}

/// A simulated YES buy recorded when a trigger fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperTrade {
    pub phrase: String,
    pub contract_label: String,
    pub target_id: String,
    pub ticker: String,
    pub price_cents: u8,
    pub quantity: u32,
    pub cost: Decimal,
    pub timestamp: String,
}

impl std::fmt::Display for PaperTrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BUY {} x{} @ {}¢ (${})",
            self.contract_label, self.quantity, self.price_cents, self.cost
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoMarket,
    LiveTradingUnsupported,
    AboveMaxPrice { ask_cents: u8, max_price_cents: u8 },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoMarket => write!(f, "no market on the board for this contract"),
            SkipReason::LiveTradingUnsupported => write!(f, "live trading is not supported — dry run only"),
            SkipReason::AboveMaxPrice { ask_cents, max_price_cents } => {
                write!(f, "ask {ask_cents}¢ not below max {max_price_cents}¢")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeDecision {
    Place(PaperTrade),
    Skip(SkipReason),
}

/// Cost in dollars of `quantity` contracts at `price_cents`.
pub fn trade_cost(quantity: u32, price_cents: u8) -> Decimal {
    Decimal::new(i64::from(quantity) * i64::from(price_cents), 2)
}

pub fn plan_trade(event: &TriggerEvent, markets: &[MarketQuote], settings: &TradeSettings) -> TradeDecision {
    let Some(market) = find_market(markets, &event.contract_label) else {
        return TradeDecision::Skip(SkipReason::NoMarket);
    };

    if !settings.dry_run {
        return TradeDecision::Skip(SkipReason::LiveTradingUnsupported);
    }

    if market.ask_cents >= settings.max_price_cents {
        return TradeDecision::Skip(SkipReason::AboveMaxPrice {
            ask_cents: market.ask_cents,
            max_price_cents: settings.max_price_cents,
        });
    }

    TradeDecision::Place(PaperTrade {
        phrase: event.phrase.clone(),
        contract_label: event.contract_label.clone(),
        target_id: event.target_id.clone(),
        ticker: market.ticker.clone(),
        price_cents: market.ask_cents,
        quantity: settings.quantity,
        cost: trade_cost(settings.quantity, market.ask_cents),
        timestamp: event.timestamp.clone(),
    })
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaperLedger {
    pub trades: Vec<PaperTrade>,
    pub total_spent: Decimal,
    pub trade_count: u64,
}

impl PaperLedger {
    pub fn on_fill(&mut self, trade: PaperTrade) {
        self.total_spent += trade.cost;
        self.trade_count += 1;
        self.trades.push(trade);
    }

    pub fn contracts_held(&self) -> u64 {
        self.trades.iter().map(|t| u64::from(t.quantity)).sum()
    }

    /// Dollars received if every held contract settles YES.
    pub fn max_payout(&self) -> Decimal {
        Decimal::from(self.contracts_held())
    }

    pub fn summary(&self) -> String {
        format!(
            "trades={} contracts={} spent=${} max_payout=${}",
            self.trade_count,
            self.contracts_held(),
            self.total_spent,
            self.max_payout()
        )
    }

    pub fn clear(&mut self) {
        self.trades.clear();
        self.total_spent = Decimal::ZERO;
        self.trade_count = 0;
    }
}
