//! Test support shared across modules.

use serde_json::{Value, json};
use uuid::Uuid;


pub(crate) use store::{FakeStore, Reply};

const CREATED_AT: &str = "2025-09-20T18:30:00.123456+00:00";

/// A `padel_matches` row as the store returns it.
pub(crate) fn match_row(id: impl Into<Uuid>, title: &str) -> Value {
    let id: Uuid = id.into();

    json!({
        "id": id,
        "title": title,
        "status": "pending",
        "notes": null,
        "created_at": CREATED_AT,
    })
}

/// A `match_participants` row as the store returns it.
pub(crate) fn participant_row(
    id: impl Into<Uuid>,
    match_id: impl Into<Uuid>,
    name: &str,
) -> Value {
    let (id, match_id): (Uuid, Uuid) = (id.into(), match_id.into());

    json!({
        "id": id,
        "match_id": match_id,
        "name": name,
        "status": "invited",
        "notes": null,
        "created_at": CREATED_AT,
    })
}
