use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::market::{market_board, MarketRow};
use crate::paper::PaperTrade;
use crate::state::{AppState, EventEntry, ProcessOutcome};
use crate::types::{MatchMode, TranscriptEntry, TriggerEvent};
use crate::web;

type S = Arc<AppState>;

pub fn build_router(state: S) -> Router {
    Router::new()
        .route("/", get(serve_ui))
        .route("/api/status", get(get_status))
        .route("/api/config", get(get_config))
        .route("/api/transcripts", get(get_transcripts))
        .route("/api/triggers", get(get_triggers))
        .route("/api/trigger-map", get(get_trigger_map))
        .route("/api/markets", get(get_markets))
        .route("/api/trades", get(get_trades))
        .route("/api/events", get(get_events))
        .route("/api/transcript", post(post_transcript))
        .route("/api/settings", post(post_settings))
        .route("/api/reset", post(post_reset))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── UI ──────────────────────────────────────────────────────────────────────

async fn serve_ui() -> axum::response::Html<&'static str> {
    axum::response::Html(web::INDEX_HTML)
}

// ── Status ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct StatusResponse {
    dry_run: bool,
    quantity: u32,
    max_price_cents: u8,
    match_mode: MatchMode,
    dedupe_within_call: bool,
    transcription_key_set: bool,
    transcripts: usize,
    triggers: usize,
    trades: u64,
    total_spent: Decimal,
    fired_targets: Vec<String>,
    triggers_loaded: usize,
    started_at: String,
}

async fn get_status(State(state): State<S>) -> Json<StatusResponse> {
    let triggers_loaded = state.matcher.read().unwrap().table().len();
    let config = state.config.read().unwrap();
    let session = state.session.lock().unwrap();

    let mut fired_targets: Vec<String> = session.fired.iter().cloned().collect();
    fired_targets.sort();

    Json(StatusResponse {
        dry_run: config.dry_run,
        quantity: config.quantity,
        max_price_cents: config.max_price_cents,
        match_mode: config.match_mode,
        dedupe_within_call: config.dedupe_within_call,
        transcription_key_set: config.has_transcription_key(),
        transcripts: session.transcripts.len(),
        triggers: session.triggers.len(),
        trades: session.ledger.trade_count,
        total_spent: session.ledger.total_spent,
        fired_targets,
        triggers_loaded,
        started_at: state.started_at.clone(),
    })
}

async fn get_config(State(state): State<S>) -> Json<serde_json::Value> {
    let config = state.config.read().unwrap();
    Json(serde_json::json!({
        "quantity": config.quantity,
        "max_price_cents": config.max_price_cents,
        "dry_run": config.dry_run,
        "dedupe_within_call": config.dedupe_within_call,
        "match_mode": config.match_mode,
        "negation_window": config.negation_window,
        "negation_words": config.negation_words,
        "context_max_chars": config.context_max_chars,
        "transcription_key_set": config.has_transcription_key(),
    }))
}

// ── Session views ───────────────────────────────────────────────────────────

async fn get_transcripts(State(state): State<S>) -> Json<Vec<TranscriptEntry>> {
    Json(state.session.lock().unwrap().transcripts.clone())
}

async fn get_triggers(State(state): State<S>) -> Json<Vec<TriggerEvent>> {
    Json(state.session.lock().unwrap().triggers.clone())
}

#[derive(Serialize)]
struct TriggerMapGroup {
    target_id: String,
    triggered: bool,
    first: Vec<String>,
    second: Vec<String>,
}

async fn get_trigger_map(State(state): State<S>) -> Json<BTreeMap<String, TriggerMapGroup>> {
    let groups = state.matcher.read().unwrap().table().by_contract();
    let session = state.session.lock().unwrap();

    let view = groups
        .into_iter()
        .map(|(label, group)| {
            let triggered = session.is_contract_triggered(&label);
            (label, TriggerMapGroup {
                target_id: group.target_id,
                triggered,
                first: group.first,
                second: group.second,
            })
        })
        .collect();
    Json(view)
}

async fn get_markets(State(state): State<S>) -> Json<Vec<MarketRow>> {
    let max_price = state.config.read().unwrap().max_price_cents;
    let session = state.session.lock().unwrap();
    Json(market_board(&state.markets, &session.triggers, max_price))
}

#[derive(Serialize)]
struct TradesResponse {
    trades: Vec<PaperTrade>,
    trade_count: u64,
    total_spent: Decimal,
    max_payout: Decimal,
    summary: String,
}

async fn get_trades(State(state): State<S>) -> Json<TradesResponse> {
    let session = state.session.lock().unwrap();
    let ledger = &session.ledger;
    Json(TradesResponse {
        trades: ledger.trades.clone(),
        trade_count: ledger.trade_count,
        total_spent: ledger.total_spent,
        max_payout: ledger.max_payout(),
        summary: ledger.summary(),
    })
}

async fn get_events(State(state): State<S>) -> Json<Vec<EventEntry>> {
    let events = state.events.lock().unwrap();
    Json(events.iter().cloned().collect())
}

// ── Transcript input ────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TranscriptRequest {
    text: String,
}

async fn post_transcript(
    State(state): State<S>,
    Json(body): Json<TranscriptRequest>,
) -> Result<Json<ProcessOutcome>, (StatusCode, String)> {
    let outcome = state
        .process_transcript(&body.text, "http")
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "transcript text is empty".into()))?;

    state.push_event("transcript", &format!(
        "{} chars, {} trigger(s)", body.text.trim().chars().count(), outcome.triggers.len()
    ));
    Ok(Json(outcome))
}

// ── Settings (can update mid-session) ───────────────────────────────────────

#[derive(Deserialize)]
struct SettingsRequest {
    quantity: Option<u32>,
    max_price_cents: Option<u8>,
    dry_run: Option<bool>,
    dedupe_within_call: Option<bool>,
    match_mode: Option<String>,
}

async fn post_settings(
    State(state): State<S>,
    Json(body): Json<SettingsRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    {
        let mut config = state.config.write().unwrap();
        let mut next = config.clone();

        if let Some(v) = body.quantity { next.quantity = v; }
        if let Some(v) = body.max_price_cents { next.max_price_cents = v; }
        if let Some(v) = body.dry_run { next.dry_run = v; }
        if let Some(v) = body.dedupe_within_call { next.dedupe_within_call = v; }
        if let Some(v) = &body.match_mode {
            next.match_mode = MatchMode::parse(v)
                .ok_or_else(|| (StatusCode::BAD_REQUEST, format!("unknown match mode: {v}")))?;
        }

        next.trade_settings()
            .validate()
            .map_err(|e| (StatusCode::BAD_REQUEST, e))?;

        next.persist();
        *config = next;
    }
    state.refresh_matcher();

    if !state.config.read().unwrap().dry_run {
        tracing::warn!("live mode selected — order placement is not supported, triggers will not trade");
        state.push_event("warn", "live mode selected: no orders will be placed");
    }

    state.push_event("settings", "settings updated + saved");
    Ok(Json(serde_json::json!({"ok": true})))
}

// ── Reset ───────────────────────────────────────────────────────────────────

async fn post_reset(State(state): State<S>) -> Json<serde_json::Value> {
    state.reset_session();
    tracing::info!("session reset");
    state.push_event("reset", "session cleared");
    Json(serde_json::json!({"ok": true}))
}
