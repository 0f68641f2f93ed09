//! Padel JSON API Healthcheck Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde::{Deserialize, Serialize};

use crate::state::State;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Whether a store key is configured.
    pub store_configured: bool,
}

/// Healthcheck handler
///
/// Reports liveness; a missing store key does not make the process unhealthy.
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Json<HealthResponse> {
    let store_configured = depot
        .obtain::<Arc<State>>()
        .is_ok_and(|state| state.app.is_some());

    Json(HealthResponse {
        status: "ok".to_string(),
        store_configured,
    })
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let router = Router::new()
            .hoop(inject(State::shared(None, None)))
            .push(Router::with_path("healthcheck").get(handler));

        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");
        assert!(!response.store_configured, "no store key was configured");

        Ok(())
    }
}
