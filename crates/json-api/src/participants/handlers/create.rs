//! Add Participant Handler

use salvo::prelude::*;
use serde::Serialize;

use padel_app::domain::{
    matches::records::MatchUuid,
    participants::{
        data::{DEFAULT_PARTICIPANT_STATUS, NewParticipant},
        records::ParticipantRecord,
    },
};

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    matches::errors::into_read_error,
    normalize::{Field, RequestInput},
    participants::errors::into_write_error,
};

const MATCH_ID: Field = Field::either(&["match_id"], &["match_id", "id"]);
const NAME: Field = Field::either(&["name"], &["name"]);
const STATUS: Field = Field::either(&["status"], &["status"]);
const NOTES: Field = Field::either(&["notes"], &["notes"]);

/// Participant Response
#[derive(Debug, Serialize)]
pub(crate) struct ParticipantResponse {
    pub participant: ParticipantRecord,
}

/// Add Participant Handler
///
/// The match must exist before the participant is inserted.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<ParticipantResponse>, ApiError> {
    let app = depot.app_or_500()?;
    let caller = req.caller();
    let input = RequestInput::read(req).await;

    let match_id = input
        .text(&MATCH_ID)
        .ok_or_else(|| ApiError::bad_request("'match_id' (uuid) is required"))?;

    let match_id = MatchUuid::parse(&match_id)
        .ok_or_else(|| ApiError::bad_request("Invalid uuid format for match_id"))?;

    let name = input
        .text(&NAME)
        .ok_or_else(|| ApiError::bad_request("'name' is required"))?;

    let exists = app
        .matches
        .match_exists(caller.clone(), match_id)
        .await
        .map_err(|error| into_read_error(error, "Match not found"))?;

    if !exists {
        return Err(ApiError::not_found("Match not found"));
    }

    let new = NewParticipant {
        match_id,
        name,
        status: input.text_or(&STATUS, DEFAULT_PARTICIPANT_STATUS),
        notes: Some(input.text_or(&NOTES, "")),
    };

    let participant = app
        .participants
        .add_participant(caller, new)
        .await
        .map_err(into_write_error)?;

    Ok(Envelope::created(ParticipantResponse { participant }))
}
