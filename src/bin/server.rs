//! Standalone API server (without Dioxus frontend)
//! Use this for API-only testing or for probing a deployment's configuration.
//!
//! Run with: cargo run --bin server --features server -- --port 3001

use ai_business_dashboard::config::{AppConfig, CONFIG_ENV};
use ai_business_dashboard::handlers::api_router;
use ai_business_dashboard::domain::models::NavigationModel;
use ai_business_dashboard::shared::logging::{log_navigation_conflicts, log_server_start};
use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Debug, Parser)]
#[command(name = "server", about = "AI Business Dashboard API server")]
struct Args {
    /// Port to listen on (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON configuration file (same format as DASHBOARD_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            AppConfig::from_json(&raw).with_context(|| format!("parsing {}", path.display()))?
        }
        None => AppConfig::load().with_context(|| format!("loading {}", CONFIG_ENV))?,
    };
    if let Some(port) = args.port {
        config.port = port;
    }

    if config.strict_mode {
        log_navigation_conflicts(&NavigationModel::canonical(config.show_admin_section));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let app = api_router(Arc::new(config))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    log_server_start(&addr.to_string());

    axum::serve(listener, app).await?;
    Ok(())
}
