//! Matches Data

use serde::Serialize;

/// Status given to matches created without one.
pub const DEFAULT_MATCH_STATUS: &str = "pending";

/// A match to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMatch {
    /// Non-blank title.
    pub title: String,

    /// Initial status.
    pub status: String,
}

/// Replacement notes for a match; an empty string clears them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchNotesUpdate {
    /// New notes text.
    pub notes: String,
}
