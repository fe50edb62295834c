//! Tellycast CLI - Main entry point

mod tui;

use clap::Parser;
use std::path::PathBuf;
use telly_link::LinkConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tellycast - send text to a networked display from the terminal
#[derive(Parser, Debug)]
#[command(name = "telly")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Display host (IP literal or hostname)
    #[arg(long)]
    host: Option<String>,

    /// Display TCP port
    #[arg(short, long)]
    port: Option<u16>,

    /// Connect timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Config file path (default: ~/.tellycast/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration, then apply command-line overrides
    let mut config = LinkConfig::load(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}", e);
        LinkConfig::default()
    });

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(timeout) = args.timeout {
        config.connect_timeout_secs = timeout;
    }

    tracing::info!(addr = %config.addr(), "starting tellycast");

    tui::run(config).await
}
