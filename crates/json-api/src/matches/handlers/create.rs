//! Create Match Handler

use salvo::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use padel_app::{
    domain::{
        matches::{
            MatchesService,
            data::{DEFAULT_MATCH_STATUS, NewMatch},
            records::{MatchDetailsRecord, MatchRecord, MatchUuid},
        },
        participants::{
            data::{DEFAULT_INVITED_STATUS, NewParticipant},
            records::ParticipantRecord,
        },
    },
    store::Caller,
};

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    matches::errors::into_insert_error,
    normalize::{Field, RequestInput, object_text},
};

const TITLE: Field = Field::body(&["title"]);
const STATUS: Field = Field::body(&["status"]);
const PARTICIPANTS: &str = "participants";

/// Create Match Response
///
/// Always `201`; the shape depends on how far the follow-up calls got.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum MatchCreatedResponse {
    /// The match re-read together with its participants.
    Nested {
        #[serde(rename = "match")]
        details: MatchDetailsRecord,
    },

    /// The re-read failed; the rows as inserted.
    Inserted {
        #[serde(rename = "match")]
        record: MatchRecord,
        match_participants: Vec<ParticipantRecord>,
    },

    /// The match was stored but its participants were rejected.
    ParticipantsFailed {
        #[serde(rename = "match")]
        record: MatchRecord,
        participants_error: String,
    },
}

/// Create Match Handler
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<MatchCreatedResponse>, ApiError> {
    let app = depot.app_or_500()?;
    let caller = req.caller();
    let input = RequestInput::read(req).await;

    let title = input
        .text(&TITLE)
        .ok_or_else(|| ApiError::bad_request("'title' is required"))?;

    let new = NewMatch {
        title,
        status: input.text_or(&STATUS, DEFAULT_MATCH_STATUS),
    };

    let record = app
        .matches
        .create_match(caller.clone(), new)
        .await
        .map_err(into_insert_error)?;

    let participants = new_participants(record.id, input.list(PARTICIPANTS));

    let inserted = match app
        .participants
        .add_participants(caller.clone(), participants)
        .await
    {
        Ok(inserted) => inserted,
        Err(error) => {
            warn!(match_id = %record.id, "participants rejected: {error}");

            return Ok(Envelope::created(MatchCreatedResponse::ParticipantsFailed {
                record,
                participants_error: error.to_string(),
            }));
        }
    };

    Ok(Envelope::created(
        reread(app.matches.as_ref(), caller, record, inserted).await,
    ))
}

async fn reread(
    matches: &dyn MatchesService,
    caller: Caller,
    record: MatchRecord,
    inserted: Vec<ParticipantRecord>,
) -> MatchCreatedResponse {
    match matches.get_match(caller, record.id).await {
        Ok(details) => MatchCreatedResponse::Nested { details },
        Err(error) => {
            warn!(match_id = %record.id, "could not re-read created match: {error}");

            MatchCreatedResponse::Inserted {
                record,
                match_participants: inserted,
            }
        }
    }
}

fn new_participants(match_id: MatchUuid, entries: &[Value]) -> Vec<NewParticipant> {
    entries
        .iter()
        .filter_map(|entry| {
            let name = object_text(entry, "name")?;

            Some(NewParticipant {
                match_id,
                name,
                status: object_text(entry, "status")
                    .unwrap_or_else(|| DEFAULT_INVITED_STATUS.to_string()),
                notes: None,
            })
        })
        .collect()
}
