//! Participants Data

use serde::Serialize;

use crate::domain::matches::records::MatchUuid;

/// Status given to participants created alongside a new match.
pub const DEFAULT_INVITED_STATUS: &str = "invited";

/// Status given to participants added to an existing match.
pub const DEFAULT_PARTICIPANT_STATUS: &str = "not_invited";

/// A participant to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewParticipant {
    /// Owning match.
    pub match_id: MatchUuid,

    /// Non-blank player name.
    pub name: String,

    /// Initial status.
    pub status: String,

    /// Omitted from the insert when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial participant update; only supplied fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParticipantUpdate {
    /// Replacement status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Replacement notes; `Some("")` clears them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ParticipantUpdate {
    /// True when the update would not change anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.notes.is_none()
    }
}
