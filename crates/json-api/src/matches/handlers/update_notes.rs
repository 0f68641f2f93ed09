//! Update Match Notes Handler

use salvo::prelude::*;
use serde::Serialize;

use padel_app::domain::matches::{
    data::MatchNotesUpdate,
    records::{MatchRecord, MatchUuid},
};

use crate::{
    envelope::{ApiError, Envelope, NOTHING_TO_UPDATE},
    extensions::*,
    matches::errors::into_write_error,
    normalize::{Field, RequestInput},
};

const ID: Field = Field::either(&["id"], &["id"]);
const NOTES: Field = Field::either(&["notes"], &["notes"]);

/// Match Notes Updated Response
#[derive(Debug, Serialize)]
pub(crate) struct MatchUpdatedResponse {
    #[serde(rename = "match")]
    pub record: MatchRecord,
}

/// Update Match Notes Handler
///
/// An empty `notes` string clears the notes.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Envelope<MatchUpdatedResponse>, ApiError> {
    let app = depot.app_or_500()?;
    let caller = req.caller();
    let input = RequestInput::read(req).await;

    let id = input
        .text(&ID)
        .ok_or_else(|| ApiError::bad_request("'id' is required"))?;

    let id = MatchUuid::parse(&id)
        .ok_or_else(|| ApiError::bad_request("Invalid uuid format for id"))?;

    let notes = input
        .optional_text(&NOTES)
        .ok_or_else(|| ApiError::bad_request(NOTHING_TO_UPDATE))?;

    let record = app
        .matches
        .update_notes(caller, id, MatchNotesUpdate { notes })
        .await
        .map_err(into_write_error)?;

    Ok(Envelope::ok(MatchUpdatedResponse { record }))
}

#[cfg(test)]
mod tests {
    use padel_app::{
        domain::matches::{MatchesServiceError, MockMatchesService},
        store::StoreError,
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::{Value, json};
    use testresult::TestResult;

    use crate::test_helpers::{
        TEST_BEARER, make_match, matches_service, service_without_credentials,
        strict_matches_mock, take_error,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("update-match-notes").post(handler)
    }

    fn matches_expecting_update(
        id: MatchUuid,
        notes: &'static str,
        result: Result<MatchRecord, MatchesServiceError>,
    ) -> MockMatchesService {
        let mut matches = MockMatchesService::new();

        matches
            .expect_update_notes()
            .once()
            .withf(move |caller, match_id, update| {
                caller.authorization() == Some(TEST_BEARER)
                    && *match_id == id
                    && update.notes == notes
            })
            .return_once(move |_, _, _| result);

        matches.expect_create_match().never();
        matches.expect_get_match().never();
        matches.expect_match_exists().never();

        matches
    }

    #[tokio::test]
    async fn test_update_notes_returns_updated_match() -> TestResult {
        let id = MatchUuid::new();
        let mut record = make_match(id);

        record.notes = Some("bring balls".to_string());

        let mut res = TestClient::post("http://example.com/update-match-notes")
            .add_header("authorization", TEST_BEARER, true)
            .json(&json!({ "id": id, "notes": " bring balls " }))
            .send(&matches_service(
                matches_expecting_update(id, "bring balls", Ok(record)),
                route(),
            ))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.pointer("/match/notes"), Some(&json!("bring balls")));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_notes_empty_string_clears_notes() -> TestResult {
        let id = MatchUuid::new();

        let res = TestClient::post("http://example.com/update-match-notes")
            .add_header("authorization", TEST_BEARER, true)
            .json(&json!({ "id": id, "notes": "" }))
            .send(&matches_service(
                matches_expecting_update(id, "", Ok(make_match(id))),
                route(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_notes_reads_query_parameters() -> TestResult {
        let id = MatchUuid::new();

        let res = TestClient::post(format!(
            "http://example.com/update-match-notes?id={id}&notes=late"
        ))
        .add_header("authorization", TEST_BEARER, true)
        .text("not json")
        .send(&matches_service(
            matches_expecting_update(id, "late", Ok(make_match(id))),
            route(),
        ))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_notes_without_notes_returns_400() -> TestResult {
        let id = MatchUuid::new();

        let mut res = TestClient::post("http://example.com/update-match-notes")
            .json(&json!({ "id": id }))
            .send(&matches_service(strict_matches_mock(), route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(take_error(&mut res).await?, "Nothing to update");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_notes_validates_id() -> TestResult {
        let cases = [
            (json!({ "notes": "x" }), "'id' is required"),
            (json!({ "id": "123", "notes": "x" }), "Invalid uuid format for id"),
        ];

        for (payload, expected) in cases {
            let mut res = TestClient::post("http://example.com/update-match-notes")
                .json(&payload)
                .send(&matches_service(strict_matches_mock(), route()))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
            assert_eq!(take_error(&mut res).await?, expected);
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_update_notes_store_rejection_returns_400() -> TestResult {
        let id = MatchUuid::new();
        let failure = MatchesServiceError::Store(StoreError::Api {
            status: StatusCode::NOT_ACCEPTABLE,
            code: Some("PGRST116".to_string()),
            message: "JSON object requested, multiple (or no) rows returned".to_string(),
        });

        let mut res = TestClient::post("http://example.com/update-match-notes")
            .add_header("authorization", TEST_BEARER, true)
            .json(&json!({ "id": id, "notes": "x" }))
            .send(&matches_service(
                matches_expecting_update(id, "x", Err(failure)),
                route(),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            take_error(&mut res).await?,
            "JSON object requested, multiple (or no) rows returned"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_update_notes_without_credentials_returns_500() -> TestResult {
        let res = TestClient::post("http://example.com/update-match-notes")
            .json(&json!({ "id": MatchUuid::new(), "notes": "x" }))
            .send(&service_without_credentials(route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
