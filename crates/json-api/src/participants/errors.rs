//! Participant Errors

use tracing::warn;

use padel_app::domain::participants::ParticipantsServiceError;

use crate::envelope::ApiError;

/// Map a rejected participant write to a 400 carrying the store's message.
pub(crate) fn into_write_error(error: ParticipantsServiceError) -> ApiError {
    warn!("participant write rejected: {error}");

    ApiError::bad_request(error.to_string())
}
