/// Tests for simulated trade planning and the paper ledger — price guard, cost, totals.
use crate::market::default_markets;
use crate::paper::{plan_trade, trade_cost, PaperLedger, SkipReason, TradeDecision, TradeSettings};
use crate::types::{Degree, TriggerEvent};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn settings(quantity: u32, max_price_cents: u8, dry_run: bool) -> TradeSettings {
    TradeSettings { quantity, max_price_cents, dry_run }
}

fn event(phrase: &str, contract: &str) -> TriggerEvent {
    TriggerEvent {
        phrase: phrase.into(),
        contract_label: contract.into(),
        target_id: format!("T-{contract}"),
        degree: Degree::Direct,
        timestamp: "09:30:00".into(),
        context: format!("talking about {phrase}"),
    }
}

fn placed(decision: TradeDecision) -> crate::paper::PaperTrade {
    match decision {
        TradeDecision::Place(trade) => trade,
        TradeDecision::Skip(reason) => panic!("expected a trade, skipped: {reason}"),
    }
}

// ── trade_cost ────────────────────────────────────────────────────────────────

#[test]
fn cost_is_quantity_times_cents() {
    assert_eq!(trade_cost(10, 24), dec!(2.40));
    assert_eq!(trade_cost(1, 84), dec!(0.84));
    assert_eq!(trade_cost(100, 99), dec!(99));
}

// ── plan_trade ────────────────────────────────────────────────────────────────

#[test]
fn buyable_contract_is_placed_at_ask() {
    let trade = placed(plan_trade(&event("bitcoin", "Bitcoin"), &default_markets(), &settings(10, 85, true)));
    assert_eq!(trade.ticker, "BITC");
    assert_eq!(trade.price_cents, 24);
    assert_eq!(trade.quantity, 10);
    assert_eq!(trade.cost, dec!(2.40));
    assert_eq!(trade.phrase, "bitcoin");
    assert_eq!(trade.timestamp, "09:30:00");
}

#[test]
fn contract_label_lookup_ignores_case() {
    let trade = placed(plan_trade(&event("sig", "sig"), &default_markets(), &settings(1, 85, true)));
    assert_eq!(trade.ticker, "SIG");
}

#[test]
fn ask_just_below_max_is_placed() {
    // Gold asks 84¢
    let trade = placed(plan_trade(&event("gold", "Gold"), &default_markets(), &settings(5, 85, true)));
    assert_eq!(trade.price_cents, 84);
}

#[test]
fn ask_at_max_is_skipped() {
    let decision = plan_trade(&event("gold", "Gold"), &default_markets(), &settings(5, 84, true));
    assert_eq!(
        decision,
        TradeDecision::Skip(SkipReason::AboveMaxPrice { ask_cents: 84, max_price_cents: 84 })
    );
}

#[test]
fn unknown_contract_is_skipped() {
    let decision = plan_trade(&event("weather", "Weather"), &default_markets(), &settings(5, 85, true));
    assert_eq!(decision, TradeDecision::Skip(SkipReason::NoMarket));
}

#[test]
fn live_mode_never_trades() {
    let decision = plan_trade(&event("bitcoin", "Bitcoin"), &default_markets(), &settings(5, 85, false));
    assert_eq!(decision, TradeDecision::Skip(SkipReason::LiveTradingUnsupported));
}

// ── TradeSettings::validate ───────────────────────────────────────────────────

#[test]
fn settings_within_limits_validate() {
    assert!(settings(1, 50, true).validate().is_ok());
    assert!(settings(100, 99, true).validate().is_ok());
}

#[test]
fn settings_outside_limits_are_rejected() {
    assert!(settings(0, 85, true).validate().is_err());
    assert!(settings(101, 85, true).validate().is_err());
    assert!(settings(10, 49, true).validate().is_err());
    assert!(settings(10, 100, true).validate().is_err());
}

// ── PaperLedger ───────────────────────────────────────────────────────────────

#[test]
fn ledger_accumulates_fills() {
    let mut ledger = PaperLedger::default();
    let markets = default_markets();
    ledger.on_fill(placed(plan_trade(&event("bitcoin", "Bitcoin"), &markets, &settings(10, 85, true))));
    ledger.on_fill(placed(plan_trade(&event("kalshi", "Kalshi"), &markets, &settings(5, 85, true))));

    assert_eq!(ledger.trade_count, 2);
    assert_eq!(ledger.total_spent, dec!(4.45)); // 10 * 0.24 + 5 * 0.41
    assert_eq!(ledger.contracts_held(), 15);
    assert_eq!(ledger.max_payout(), dec!(15));
}

#[test]
fn ledger_summary_mentions_totals() {
    let mut ledger = PaperLedger::default();
    ledger.on_fill(placed(plan_trade(&event("gold", "Gold"), &default_markets(), &settings(2, 85, true))));
    assert_eq!(ledger.summary(), "trades=1 contracts=2 spent=$1.68 max_payout=$2");
}

#[test]
fn ledger_clear_resets_totals() {
    let mut ledger = PaperLedger::default();
    ledger.on_fill(placed(plan_trade(&event("gold", "Gold"), &default_markets(), &settings(2, 85, true))));
    ledger.clear();
    assert!(ledger.trades.is_empty());
    assert_eq!(ledger.total_spent, Decimal::ZERO);
    assert_eq!(ledger.trade_count, 0);
}
