//! Server configuration module

use clap::Parser;

use crate::config::{
    cors::CorsConfig,
    logging::LoggingConfig,
    server::ServerRuntimeConfig,
    store::StoreArgs,
    telemetry::TelemetryConfig,
};

pub(crate) mod cors;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod store;
pub(crate) mod telemetry;

pub(crate) use logging::LogFormat;

/// Padel JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "padel-json", about = "Padel match JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Trace export and slow-request settings.
    #[command(flatten)]
    pub telemetry: TelemetryConfig,

    /// Hosted store settings.
    #[command(flatten)]
    pub store: StoreArgs,

    /// Cross-origin settings.
    #[command(flatten)]
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
