//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use reqwest::Client;
use thiserror::Error;

use crate::{
    domain::{
        matches::{MatchesService, RestMatchesService},
        participants::{ParticipantsService, RestParticipantsService},
    },
    store::{StoreClient, StoreConfig},
};

/// Errors raised while building the [`AppContext`].
#[derive(Debug, Error)]
pub enum AppInitError {
    /// Neither store key is configured.
    #[error("Missing SUPABASE_SERVICE_ROLE_KEY or SUPABASE_ANON_KEY in env")]
    MissingApiKey,

    /// The HTTP client could not be constructed.
    #[error("failed to build http client")]
    HttpClient(#[source] reqwest::Error),
}

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppContext {
    /// Match reads and writes.
    pub matches: Arc<dyn MatchesService>,

    /// Participant writes.
    pub participants: Arc<dyn ParticipantsService>,
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from store settings.
    ///
    /// # Errors
    ///
    /// Returns an error when no API key is configured or the HTTP client
    /// cannot be built.
    pub fn from_store_config(config: &StoreConfig) -> Result<Self, AppInitError> {
        let http = Client::builder()
            .user_agent(concat!("padel-app/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppInitError::HttpClient)?;

        let client =
            StoreClient::from_config(http, config).ok_or(AppInitError::MissingApiKey)?;

        Ok(Self {
            matches: Arc::new(RestMatchesService::new(client.clone())),
            participants: Arc::new(RestParticipantsService::new(client)),
        })
    }
}
