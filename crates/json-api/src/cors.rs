//! Per-endpoint CORS policy.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use salvo::{
    http::{
        HeaderMap, HeaderValue, Method,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN, VARY,
        },
    },
    prelude::*,
};
use smallvec::SmallVec;
use tracing::debug;

use padel_app::store::StoreConfig;

use crate::envelope::ApiError;

const ANY_ORIGIN: &str = "*";
const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Decides which origin a response may be shared with.
#[derive(Debug, Clone)]
pub(crate) struct CorsPolicy {
    allowed_origins: FxHashSet<String>,
    allow_any_origin: bool,
}

impl CorsPolicy {
    /// Build a policy from the configured allow-list.
    ///
    /// Any origin is allowed while the store runs locally.
    pub(crate) fn new(allowed_origins: impl IntoIterator<Item = String>, store: &StoreConfig) -> Self {
        Self {
            allowed_origins: allowed_origins.into_iter().collect(),
            allow_any_origin: store.is_local(),
        }
    }

    /// The `Access-Control-Allow-Origin` value for a request from `origin`.
    ///
    /// Unknown or missing origins fall back to `*` so non-browser clients
    /// keep working.
    pub(crate) fn allow_origin<'a>(&self, origin: Option<&'a str>) -> &'a str {
        if self.allow_any_origin {
            return ANY_ORIGIN;
        }

        match origin {
            Some(origin) if self.allowed_origins.contains(origin) => origin,
            _ => ANY_ORIGIN,
        }
    }

    fn apply(&self, origin: Option<&str>, allow_methods: &HeaderValue, headers: &mut HeaderMap) {
        let allow_origin = HeaderValue::from_str(self.allow_origin(origin))
            .unwrap_or_else(|_invalid| HeaderValue::from_static(ANY_ORIGIN));

        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, allow_methods.clone());
        headers.insert(VARY, HeaderValue::from_static("Origin"));
    }
}

/// Hoop guarding a single endpoint.
///
/// Adds the CORS headers to every response, answers preflight requests
/// itself and rejects methods the endpoint does not serve.
#[derive(Debug, Clone)]
pub(crate) struct Cors {
    policy: Arc<CorsPolicy>,
    methods: SmallVec<[Method; 2]>,
    allow_methods: HeaderValue,
}

impl Cors {
    pub(crate) fn new(policy: Arc<CorsPolicy>, methods: &[Method]) -> Self {
        let methods: SmallVec<[Method; 2]> = methods.iter().cloned().collect();

        let allow_methods = methods
            .iter()
            .map(Method::as_str)
            .chain([Method::OPTIONS.as_str()])
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            policy,
            methods,
            allow_methods: HeaderValue::from_str(&allow_methods)
                .unwrap_or_else(|_invalid| HeaderValue::from_static("OPTIONS")),
        }
    }

    pub(crate) fn get(policy: &Arc<CorsPolicy>) -> Self {
        Self::new(Arc::clone(policy), &[Method::GET])
    }

    pub(crate) fn post(policy: &Arc<CorsPolicy>) -> Self {
        Self::new(Arc::clone(policy), &[Method::POST])
    }
}

#[handler]
impl Cors {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let origin = req
            .headers()
            .get(ORIGIN)
            .and_then(|value| value.to_str().ok());

        self.policy
            .apply(origin, &self.allow_methods, res.headers_mut());

        if req.method() == Method::OPTIONS {
            res.status_code(StatusCode::OK);
            res.render("ok");
            ctrl.skip_rest();

            return;
        }

        if !self.methods.contains(req.method()) {
            debug!(method = %req.method(), "method not allowed");

            res.render(ApiError::method_not_allowed());
            ctrl.skip_rest();

            return;
        }

        ctrl.call_next(req, depot, res).await;
    }
}
