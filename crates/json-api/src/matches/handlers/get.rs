//! Get Match Handler

use salvo::prelude::*;
use serde::Serialize;

use padel_app::domain::matches::records::{MatchDetailsRecord, MatchUuid};

use crate::{
    envelope::{ApiError, Envelope},
    extensions::*,
    matches::errors::into_read_error,
    normalize::{Field, RequestInput},
};

const ID: Field = Field::query(&["id"]);
const UUID: Field = Field::query(&["uuid"]);

/// Get Match Response
#[derive(Debug, Serialize)]
pub(crate) struct MatchResponse {
    #[serde(rename = "match")]
    pub details: MatchDetailsRecord,
}

/// Get Match Handler
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<MatchResponse>, ApiError> {
    let app = depot.app_or_500()?;
    let caller = req.caller();
    let input = RequestInput::read(req).await;

    // `uuid` is only consulted when `id` is absent, not when it is blank.
    let id = input
        .optional_text(&ID)
        .or_else(|| input.optional_text(&UUID))
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing ?id=<uuid>"))?;

    let id = MatchUuid::parse(&id).ok_or_else(|| ApiError::bad_request("Invalid uuid format"))?;

    let details = app
        .matches
        .get_match(caller, id)
        .await
        .map_err(|error| into_read_error(error, "Not found"))?;

    Ok(Envelope::ok(MatchResponse { details }))
}
