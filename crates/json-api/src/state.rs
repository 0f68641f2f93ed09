//! State

use std::sync::Arc;

use padel_app::context::AppContext;

/// Shared, read-only handler state.
///
/// `app` is `None` when neither store key is configured; every endpoint
/// then answers 500 instead of the server refusing to start.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: Option<AppContext>,
    pub(crate) anon_key: Option<String>,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: Option<AppContext>, anon_key: Option<String>) -> Self {
        Self { app, anon_key }
    }

    #[must_use]
    pub(crate) fn shared(app: Option<AppContext>, anon_key: Option<String>) -> Arc<Self> {
        Arc::new(Self::new(app, anon_key))
    }
}
