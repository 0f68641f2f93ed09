//! Uniform JSON response envelope.
//!
//! Every response body is an object with an `ok` flag. Successes carry the
//! payload's fields next to it (`{ "ok": true, "match": { .. } }`), failures
//! carry a message (`{ "ok": false, "error": ".." }`).

use salvo::{catcher::Catcher, http::ResBody, prelude::*};
use serde::{Deserialize, Serialize};

/// Message returned when the store has no key to authenticate with.
pub(crate) const MISSING_CREDENTIALS: &str =
    "Missing SUPABASE_SERVICE_ROLE_KEY or SUPABASE_ANON_KEY in env";

/// Message returned when an update request carries no updatable field.
pub(crate) const NOTHING_TO_UPDATE: &str = "Nothing to update";

/// A failed request, rendered as `{ ok: false, error }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub(crate) fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    pub(crate) fn missing_credentials() -> Self {
        Self::internal(MISSING_CREDENTIALS)
    }
}

/// Failure body.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorBody {
    pub ok: bool,
    pub error: String,
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorBody {
            ok: false,
            error: self.message,
        }));
    }
}

/// Catcher that wraps framework errors (unmatched routes, caught panics) in
/// the same `{ ok: false, error }` body the handlers produce.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(status_error_envelope)
}

#[handler]
async fn status_error_envelope(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = match res.take_body() {
        ResBody::Error(error) if !error.brief.is_empty() => error.brief,
        ResBody::Error(error) => error.name,
        _ => status
            .canonical_reason()
            .unwrap_or("Unexpected error")
            .to_string(),
    };

    res.render(ApiError::new(status, message));
    ctrl.skip_rest();
}

/// A successful response whose payload fields sit beside `ok: true`.
#[derive(Debug)]
pub(crate) struct Envelope<T> {
    status: StatusCode,
    payload: T,
}

impl<T: Serialize> Envelope<T> {
    /// `200 OK` with `payload`.
    pub(crate) fn ok(payload: T) -> Self {
        Self {
            status: StatusCode::OK,
            payload,
        }
    }

    /// `201 Created` with `payload`.
    pub(crate) fn created(payload: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            payload,
        }
    }
}

#[derive(Serialize)]
struct SuccessBody<T> {
    ok: bool,

    #[serde(flatten)]
    payload: T,
}

impl<T: Serialize + Send> Scribe for Envelope<T> {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(SuccessBody {
            ok: true,
            payload: self.payload,
        }));
    }
}
