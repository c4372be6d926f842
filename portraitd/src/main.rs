//! Portrait server - static file server for the click-to-seek demo
//!
//! Serves:
//! - `GET /`: a plain-text pointer to the portrait page
//! - `GET /portrait`: the portrait view, rendered once at startup
//! - everything else from the public directory (WASM client, sprites, audio)
//!
//! Configuration comes from defaults, an optional JSON file and the
//! environment (`PORT`, default 5000). See [`config`].

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod routes;
mod view;

use config::ServerConfig;
use routes::AppState;
use view::View;

// ═══════════════════════════════════════════════════════════════════════════
// Shutdown
// ═══════════════════════════════════════════════════════════════════════════

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl-C: shutting down"),
        Err(e) => {
            // Without a signal handler the server just runs until killed.
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::load().inspect_err(|e| error!("Configuration error: {}", e))?;
    info!("Public directory: {:?}", config.public_dir);
    info!("Views directory: {:?}", config.views_dir);

    // Render the portrait view up front so a broken template fails at boot.
    let view = View::load(&config.views_dir, view::PORTRAIT_VIEW)
        .inspect_err(|e| error!("Could not load view: {}", e))?;
    let slots = view::portrait_slots(&config)?;
    let html = view
        .render(&slots)
        .inspect_err(|e| error!("Could not render view: {}", e))?;
    info!("Rendered view `{}` ({} bytes)", view.name(), html.len());

    let app = routes::router(AppState::new(html), &config.public_dir);

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Portrait server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
