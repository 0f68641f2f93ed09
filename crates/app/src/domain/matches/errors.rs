//! Matches service errors.

use thiserror::Error;

use crate::store::StoreError;

/// Errors returned by [`MatchesService`](super::MatchesService).
#[derive(Debug, Error)]
pub enum MatchesServiceError {
    /// No match has the requested id.
    #[error("match not found")]
    NotFound,

    /// The store call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
