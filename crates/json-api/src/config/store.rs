//! Store Config

use clap::Args;

use padel_app::store::{DEFAULT_STORE_URL, StoreConfig};

/// Hosted store settings.
#[derive(Debug, Args)]
pub struct StoreArgs {
    /// Store base URL
    #[arg(long, env = "SUPABASE_URL", default_value = DEFAULT_STORE_URL)]
    pub supabase_url: String,

    /// Privileged store key (preferred when both keys are set)
    #[arg(long, env = "SUPABASE_SERVICE_ROLE_KEY", hide_env_values = true)]
    pub supabase_service_role_key: Option<String>,

    /// Public store key, also served to browsers in `config.js`
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_anon_key: Option<String>,
}

impl StoreArgs {
    /// Convert into the app-level store settings.
    #[must_use]
    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig {
            url: self.supabase_url.clone(),
            service_role_key: self.supabase_service_role_key.clone(),
            anon_key: self.supabase_anon_key.clone(),
        }
    }
}
