//! Store errors.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An HTTP transport or serialization error occurred.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The store rejected the request.
    #[error("{message}")]
    Api {
        /// HTTP status of the rejection.
        status: StatusCode,

        /// `PostgREST` or Postgres error code, when given.
        code: Option<String>,

        /// Caller-facing message.
        message: String,
    },

    /// A single row was requested but several matched.
    #[error("JSON object requested, multiple rows returned")]
    MultipleRows,
}

impl StoreError {
    /// Build an [`StoreError::Api`] from a non-2xx response body.
    ///
    /// `PostgREST` answers with `{ code, message, details, hint }`; anything
    /// else is surfaced as the raw body, or the status line when empty.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let (code, message) = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(ApiErrorBody {
                code,
                message: Some(message),
            }) => (code, message),
            Ok(ApiErrorBody { code, message: None }) => (code, fallback_message(status, body)),
            Err(_ignored) => (None, fallback_message(status, body)),
        };

        Self::Api {
            status,
            code,
            message,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,

    #[serde(default)]
    message: Option<String>,
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();

    if body.is_empty() {
        format!("store request failed with status {status}")
    } else {
        body.to_string()
    }
}
