use backend::api;

use advisor_engine::AdvisorConfig;
use anyhow::Context;
use shakmaty::Color;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    dotenv::dotenv().ok();

    let config = config_from_env()?;
    let addr: SocketAddr = std::env::var("ADVISOR_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()
        .context("Invalid ADVISOR_ADDR")?;

    let app = api::router(config);
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;

    tracing::info!(
        side = ?config.side,
        depth = config.depth,
        "advisor listening on {addr}"
    );
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Advisor settings from the environment, falling back to the defaults
/// (advise black, three plies).
fn config_from_env() -> anyhow::Result<AdvisorConfig> {
    let defaults = AdvisorConfig::default();

    let side = match std::env::var("ADVISOR_SIDE") {
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "white" => Color::White,
            "black" => Color::Black,
            other => anyhow::bail!("Invalid ADVISOR_SIDE {other:?} (expected white or black)"),
        },
        Err(_) => defaults.side,
    };

    let depth: u32 = match std::env::var("ADVISOR_DEPTH") {
        Ok(value) => value.parse().context("Invalid ADVISOR_DEPTH")?,
        Err(_) => defaults.depth,
    };
    anyhow::ensure!(depth >= 1, "ADVISOR_DEPTH must be at least 1");

    Ok(AdvisorConfig { side, depth })
}
