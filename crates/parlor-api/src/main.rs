//! Parlor REST API entry point.
//!
//! Binary name: `parlor`
//!
//! Parses CLI arguments, loads configuration, wires the application state,
//! and serves the API until Ctrl+C or SIGTERM.

mod http;
mod state;

use std::path::PathBuf;

use clap::Parser;

use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "parlor", version, about = "Conversational API front-end")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, env = "PARLOR_CONFIG", default_value = "parlor.toml")]
    config: PathBuf,

    /// Override the bind host from the config file.
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port from the config file.
    #[arg(long)]
    port: Option<u16>,

    /// Export spans via OpenTelemetry (stdout exporter).
    #[arg(long)]
    otel: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "info",
        1 => "info,parlor_core=debug,parlor_api=debug",
        _ => "trace",
    };
    parlor_observe::tracing_setup::init_tracing(cli.otel, filter)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let mut config = parlor_infra::config::load_config(&cli.config).await;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let state = AppState::init(&config)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Parlor API listening");

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    parlor_observe::tracing_setup::shutdown_tracing();
    tracing::info!("Server stopped");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
