//! Edge function routes.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{
    cors::{Cors, CorsPolicy},
    envelope, healthcheck, matches,
    observability::{metrics_handler, request_logging},
    participants,
    state::State,
    web_config,
};

/// The full server: shared hoops, operational routes and every function,
/// with framework errors rendered in the JSON envelope.
pub(crate) fn app_service(state: Arc<State>, policy: &Arc<CorsPolicy>) -> Service {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(Router::with_path("config.js").get(web_config::handler))
        .push(functions_router(policy));

    Service::new(router).catcher(envelope::catcher())
}

/// Mount every function under `functions/v1/<name>`, each behind its own
/// CORS hoop.
pub(crate) fn functions_router(policy: &Arc<CorsPolicy>) -> Router {
    Router::with_path("functions/v1")
        .push(function(
            "create-match",
            Cors::post(policy),
            matches::create::handler,
        ))
        .push(function("get-match", Cors::get(policy), matches::get::handler))
        .push(function(
            "add-participant",
            Cors::post(policy),
            participants::create::handler,
        ))
        .push(function(
            "update-participant",
            Cors::post(policy),
            participants::update::handler,
        ))
        .push(function(
            "update-match-notes",
            Cors::post(policy),
            matches::update_notes::handler,
        ))
}

fn function(name: &str, cors: Cors, handler: impl Handler) -> Router {
    Router::with_path(name).hoop(cors).goal(handler)
}
