//! Padel JSON API Server

use std::{process, sync::Arc};

use salvo::prelude::*;
use tracing::{error, info, warn};

use padel_app::context::{AppContext, AppInitError};

use crate::{
    config::ServerConfig,
    cors::CorsPolicy,
    observability::{Observability, set_store_configured},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod cors;
mod envelope;
mod extensions;
mod healthcheck;
mod matches;
mod normalize;
mod observability;
mod participants;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod web_config;

/// Padel JSON API Server entry point
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let observability = Observability::init(&config).unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {e}");
        }

        process::exit(1);
    });

    let store = config.store.to_store_config();

    let app = match AppContext::from_store_config(&store) {
        Ok(app) => Some(app),
        Err(AppInitError::MissingApiKey) => {
            warn!("{}; every function will answer 500", AppInitError::MissingApiKey);

            None
        }
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    set_store_configured(app.is_some());

    let anon_key = store.anon_key.clone().filter(|key| !key.trim().is_empty());
    let policy = Arc::new(CorsPolicy::new(config.cors.allowed_origins.clone(), &store));

    info!(store = %store.url, local = store.is_local(), "store configured");

    let service = router::app_service(State::shared(app, anon_key), &policy);

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.server.shutdown_grace();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;

    observability.shutdown();
}
