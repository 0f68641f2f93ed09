//! Update Participant Handler

use salvo::prelude::*;

use padel_app::domain::participants::{data::ParticipantUpdate, records::ParticipantUuid};

use crate::{
    envelope::{ApiError, Envelope, NOTHING_TO_UPDATE},
    extensions::*,
    normalize::{Field, RequestInput},
    participants::{create::ParticipantResponse, errors::into_write_error},
};

const ID: Field = Field::either(&["id"], &["id"]);
const STATUS: Field = Field::either(&["status"], &["status"]);
const NOTES: Field = Field::either(&["notes"], &["notes"]);

/// Update Participant Handler
///
/// Only the supplied fields are written; `notes` may be cleared with an
/// empty string.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<ParticipantResponse>, ApiError> {
    let app = depot.app_or_500()?;
    let caller = req.caller();
    let input = RequestInput::read(req).await;

    let id = input
        .text(&ID)
        .ok_or_else(|| ApiError::bad_request("'id' (participant id) is required"))?;

    let id = ParticipantUuid::parse(&id)
        .ok_or_else(|| ApiError::bad_request("Invalid uuid format for id"))?;

    let update = ParticipantUpdate {
        status: input.text(&STATUS),
        notes: input.optional_text(&NOTES),
    };

    if update.is_empty() {
        return Err(ApiError::bad_request(NOTHING_TO_UPDATE));
    }

    let participant = app
        .participants
        .update_participant(caller, id, update)
        .await
        .map_err(into_write_error)?;

    Ok(Envelope::ok(ParticipantResponse { participant }))
}
