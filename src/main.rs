use std::panic;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::http::handlers::{AppState, router};
use crate::judge0::client::Judge0Client;

mod config;
mod core;
mod http;
mod judge0;


#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    set_panic_hook();

    let config = Config::parse();
    tracing::debug!("Config: {:?}", config);

    let client = Judge0Client::new(&config.judge0_url, config.request_timeout())?;
    let state = AppState::new(Arc::new(client), config.poll_policy());

    let listener = tokio::net::TcpListener::bind(config.listen).await?;
    tracing::info!(
        "HTTP server listening on {}, relaying to {}",
        listener.local_addr()?,
        config.judge0_url
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

fn set_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        tracing::error!(
            message = "panic occurred",
            panic = %panic_info
        );
    }));
}
