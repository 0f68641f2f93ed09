//! Store connection settings.

/// Default store endpoint used by the local development stack.
pub const DEFAULT_STORE_URL: &str = "http://localhost:54321";

/// Connection settings for the hosted store.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base URL of the store, e.g. `"https://<ref>.supabase.co"`.
    pub url: String,

    /// Privileged key that bypasses row-level security.
    pub service_role_key: Option<String>,

    /// Restricted public key.
    pub anon_key: Option<String>,
}

impl StoreConfig {
    /// The key used to authenticate against the store.
    ///
    /// The privileged key wins when both are configured. Empty keys count as
    /// missing.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.service_role_key.as_deref()).or_else(|| non_empty(self.anon_key.as_deref()))
    }

    /// Whether the store runs on this machine.
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.url.contains("localhost") || self.url.contains("127.0.0.1")
    }

    /// The REST root, without a trailing slash.
    #[must_use]
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_STORE_URL.to_string(),
            service_role_key: None,
            anon_key: None,
        }
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("service_role_key", &self.service_role_key.as_ref().map(|_| "***"))
            .field("anon_key", &self.anon_key.as_ref().map(|_| "***"))
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
