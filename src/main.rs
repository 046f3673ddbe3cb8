//! Points relay - logs into the points API, reads the current balance and
//! posts it to a team chat webhook.
//!
//! Meant to be run from a scheduler. Failures are logged to stderr and the
//! process still exits successfully.

mod api;
mod app;
mod auth;
mod config;
mod models;
mod notifier;
mod utils;

use std::io;

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;
use config::Config;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = Config::from_env();
    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to start: {:#}", e);
            return;
        }
    };

    let outcome = app.run().await;
    info!(outcome = ?outcome, "Points relay finished");
}
