use anyhow::Result;
use keynote_scalper::{config, feed, server, state};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::Config::from_env()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_level.parse().unwrap_or_default());
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }

    let port = config.http_port;

    tracing::info!(
        quantity = config.quantity,
        max_price_cents = config.max_price_cents,
        dry_run = config.dry_run,
        match_mode = %config.match_mode,
        dedupe_within_call = config.dedupe_within_call,
        port,
        "keynote-scalper starting"
    );

    if !config.has_transcription_key() {
        tracing::warn!("DEEPGRAM_API_KEY not set — live transcription unavailable, use manual or stdin input");
    }

    let stdin_feed = config.stdin_feed;
    let app_state = state::AppState::new(config);
    {
        let matcher = app_state.matcher.read().unwrap();
        tracing::info!(triggers = matcher.table().len(), "trigger map ready");
    }
    if !app_state.config.read().unwrap().has_transcription_key() {
        app_state.push_event("warn", "no transcription key: manual / stdin input only");
    }

    let cancel = CancellationToken::new();

    if stdin_feed {
        let (transcript_tx, transcript_rx) = mpsc::channel::<String>(64);
        tokio::spawn(feed::run_stdin(transcript_tx, cancel.clone()));
        tokio::spawn(feed::run_processor(transcript_rx, app_state.clone()));
    }

    let router = server::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("HTTP server listening on 0.0.0.0:{port}");
    tracing::info!("open http://localhost:{port} in your browser");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(cancel))
        .await?;

    tracing::info!("keynote-scalper stopped");
    Ok(())
}

async fn shutdown_signal(cancel: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
    cancel.cancel();
}
