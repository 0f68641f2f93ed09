//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::Depot;
use tracing::error;

use padel_app::context::AppContext;

use crate::{envelope::ApiError, state::State};

/// Helpers for pulling handler state out of the depot.
pub(crate) trait DepotExt {
    fn state_or_500(&self) -> Result<&Arc<State>, ApiError>;

    /// The application context, or the missing-credentials error.
    fn app_or_500(&self) -> Result<&AppContext, ApiError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, ApiError> {
        self.obtain::<Arc<State>>().map_err(|_ignored| {
            error!("handler state missing from depot");

            ApiError::internal("Internal server error")
        })
    }

    fn app_or_500(&self) -> Result<&AppContext, ApiError> {
        self.state_or_500()?
            .app
            .as_ref()
            .ok_or_else(ApiError::missing_credentials)
    }
}
