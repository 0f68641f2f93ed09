//! Match Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::participants::records::ParticipantRecord, uuids::TypedUuid};

/// Match UUID
pub type MatchUuid = TypedUuid<MatchRecord>;

/// Match Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Primary key.
    pub id: MatchUuid,

    /// Display title.
    pub title: String,

    /// Free text, e.g. `pending`, `scheduled`, `completed`.
    pub status: String,

    /// Organiser notes; `None` until first written.
    #[serde(default)]
    pub notes: Option<String>,

    /// Insert time, assigned by the store.
    pub created_at: Timestamp,
}

/// A match together with its participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetailsRecord {
    /// The match row itself.
    #[serde(flatten)]
    pub record: MatchRecord,

    /// Participants embedded by the store.
    #[serde(default)]
    pub match_participants: Vec<ParticipantRecord>,
}
