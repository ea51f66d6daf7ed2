//! AI Business Dashboard - Main Entry Point
//!
//! Serves the Dioxus app plus the small JSON API.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use ai_business_dashboard::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use ai_business_dashboard::config::AppConfig;
    use ai_business_dashboard::domain::models::NavigationModel;
    use ai_business_dashboard::handlers::api_router;
    use ai_business_dashboard::shared::logging::log_navigation_conflicts;
    use std::sync::Arc;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting AI Business Dashboard...");

    dioxus::serve(|| async move {
        let config = Arc::new(AppConfig::load_or_default());
        tracing::info!(
            image_domains = ?config.image_domains,
            admin_section = config.show_admin_section,
            minify = config.minify,
            "Configuration ready"
        );
        if config.strict_mode {
            log_navigation_conflicts(&NavigationModel::canonical(config.show_admin_section));
        }

        let router = dioxus::server::router(App)
            .merge(api_router(config))
            .layer(CompressionLayer::new())
            .layer(TraceLayer::new_for_http());

        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] AI Business Dashboard - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
