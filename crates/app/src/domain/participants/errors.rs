//! Participants service errors.

use thiserror::Error;

use crate::store::StoreError;

/// Errors returned by [`ParticipantsService`](super::ParticipantsService).
#[derive(Debug, Error)]
pub enum ParticipantsServiceError {
    /// The store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
