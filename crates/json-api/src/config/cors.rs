//! CORS Config

use clap::Args;

/// Cross-origin settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// Browser origins echoed back in `Access-Control-Allow-Origin`
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:5500", "http://127.0.0.1:5500", "https://exrezzo.github.io"]
    )]
    pub allowed_origins: Vec<String>,
}
