//! Participant Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::matches::records::MatchUuid, uuids::TypedUuid};

/// Participant UUID
pub type ParticipantUuid = TypedUuid<ParticipantRecord>;

/// Participant Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Primary key.
    pub id: ParticipantUuid,

    /// The match this participant belongs to.
    pub match_id: MatchUuid,

    /// Player name.
    pub name: String,

    /// Free text, e.g. `invited`, `confirmed`, `declined`.
    pub status: String,

    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Insert time, assigned by the store.
    pub created_at: Timestamp,
}
