//! Match Errors

use tracing::{error, warn};

use padel_app::domain::matches::MatchesServiceError;

use crate::envelope::ApiError;

/// Map a failed read to its response.
///
/// A missing match is a 404; store failures are server errors.
pub(crate) fn into_read_error(error: MatchesServiceError, not_found: &str) -> ApiError {
    match error {
        MatchesServiceError::NotFound => ApiError::not_found(not_found),
        MatchesServiceError::Store(source) => {
            error!("match lookup failed: {source}");

            ApiError::internal(source.to_string())
        }
    }
}

/// Map a failed match insert to a 500 carrying the store's message.
pub(crate) fn into_insert_error(error: MatchesServiceError) -> ApiError {
    error!("match insert failed: {error}");

    ApiError::internal(error.to_string())
}

/// Map a rejected write of client-supplied data to a 400.
pub(crate) fn into_write_error(error: MatchesServiceError) -> ApiError {
    warn!("match write rejected: {error}");

    ApiError::bad_request(error.to_string())
}
