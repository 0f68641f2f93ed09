//! Browser configuration script.

use std::sync::Arc;

use salvo::{
    http::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderValue},
    prelude::*,
};
use tracing::error;

use crate::state::State;

const JAVASCRIPT: &str = "application/javascript; charset=utf-8";

/// Render `window.__APP_CONFIG` with the configured anon key.
///
/// The anon key maps to the store's restricted role and is meant for
/// browsers; the service role key is never rendered.
#[handler]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) {
    let Ok(state) = depot.obtain::<Arc<State>>() else {
        error!("handler state missing from depot");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    };

    let script = render(state.anon_key.as_deref().unwrap_or_default());

    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(JAVASCRIPT));
    res.headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    res.render(script);
}

fn render(anon_key: &str) -> String {
    let anon_key = serde_json::Value::from(anon_key);

    format!("window.__APP_CONFIG = {{\n  supabaseAnonKey: {anon_key}\n}};\n")
}
