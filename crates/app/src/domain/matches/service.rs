//! Matches service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::matches::{
        data::{MatchNotesUpdate, NewMatch},
        errors::MatchesServiceError,
        records::{MatchDetailsRecord, MatchRecord, MatchUuid},
        repository::RestMatchesRepository,
    },
    store::{Caller, StoreClient},
};

/// [`MatchesService`] backed by the store's REST interface.
#[derive(Debug, Clone)]
pub struct RestMatchesService {
    repository: RestMatchesRepository,
}

impl RestMatchesService {
    /// Create a service over `client`.
    #[must_use]
    pub fn new(client: StoreClient) -> Self {
        Self {
            repository: RestMatchesRepository::new(client),
        }
    }
}

#[async_trait]
impl MatchesService for RestMatchesService {
    async fn create_match(
        &self,
        caller: Caller,
        new: NewMatch,
    ) -> Result<MatchRecord, MatchesServiceError> {
        let created = self.repository.insert_match(&caller, &new).await?;

        debug!(match_id = %created.id, "match created");

        Ok(created)
    }

    async fn get_match(
        &self,
        caller: Caller,
        id: MatchUuid,
    ) -> Result<MatchDetailsRecord, MatchesServiceError> {
        self.repository
            .find_match_details(&caller, id)
            .await?
            .ok_or(MatchesServiceError::NotFound)
    }

    async fn match_exists(&self, caller: Caller, id: MatchUuid) -> Result<bool, MatchesServiceError> {
        Ok(self.repository.match_exists(&caller, id).await?)
    }

    async fn update_notes(
        &self,
        caller: Caller,
        id: MatchUuid,
        update: MatchNotesUpdate,
    ) -> Result<MatchRecord, MatchesServiceError> {
        Ok(self.repository.update_notes(&caller, id, &update).await?)
    }
}

/// Match operations used by the handlers.
#[automock]
#[async_trait]
pub trait MatchesService: Send + Sync {
    /// Creates a match and returns the stored row.
    async fn create_match(
        &self,
        caller: Caller,
        new: NewMatch,
    ) -> Result<MatchRecord, MatchesServiceError>;

    /// Retrieves a match with its participants.
    async fn get_match(
        &self,
        caller: Caller,
        id: MatchUuid,
    ) -> Result<MatchDetailsRecord, MatchesServiceError>;

    /// Checks whether a match exists.
    async fn match_exists(&self, caller: Caller, id: MatchUuid) -> Result<bool, MatchesServiceError>;

    /// Replaces a match's notes.
    async fn update_notes(
        &self,
        caller: Caller,
        id: MatchUuid,
        update: MatchNotesUpdate,
    ) -> Result<MatchRecord, MatchesServiceError>;
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::participants::{
            ParticipantsService, RestParticipantsService, data::NewParticipant,
            records::ParticipantUuid,
        },
        store::StoreError,
        test::{FakeStore, Reply, match_row, participant_row},
    };

    use super::*;

    #[tokio::test]
    async fn created_match_reads_back_with_participants() -> TestResult {
        let id = MatchUuid::new();
        let ana = ParticipantUuid::new();

        let mut nested = match_row(id, "Friday doubles");

        if let Some(row) = nested.as_object_mut() {
            row.insert(
                "match_participants".to_string(),
                json!([participant_row(ana, id, "Ana")]),
            );
        }

        let store = FakeStore::start(vec![
            Reply::json(StatusCode::CREATED, &match_row(id, "Friday doubles")),
            Reply::json(StatusCode::CREATED, &json!([participant_row(ana, id, "Ana")])),
            Reply::json(StatusCode::OK, &json!([nested])),
        ])
        .await?;

        let client = store.client()?;
        let matches = RestMatchesService::new(client.clone());
        let participants = RestParticipantsService::new(client);
        let caller = Caller::from_header(Some("Bearer user-jwt"));

        let created = matches
            .create_match(
                caller.clone(),
                NewMatch {
                    title: "Friday doubles".to_string(),
                    status: "pending".to_string(),
                },
            )
            .await?;

        let inserted = participants
            .add_participants(
                caller.clone(),
                vec![NewParticipant {
                    match_id: created.id,
                    name: "Ana".to_string(),
                    status: "invited".to_string(),
                    notes: None,
                }],
            )
            .await?;

        let details = matches.get_match(caller, created.id).await?;

        assert_eq!(created.id, id);
        assert_eq!(details.record, created);
        assert_eq!(details.match_participants, inserted);

        let requests = store.finish().await?;
        let [insert_match, insert_participants, select] = requests.as_slice() else {
            return Err(format!("expected three requests, got {requests:?}").into());
        };

        assert_eq!(insert_match.method, "POST");
        assert_eq!(
            insert_match.header("accept"),
            Some("application/vnd.pgrst.object+json")
        );
        assert_eq!(insert_match.header("prefer"), Some("return=representation"));
        assert_eq!(
            insert_match.json()?,
            json!({ "title": "Friday doubles", "status": "pending" })
        );

        assert_eq!(insert_participants.method, "POST");
        assert_eq!(
            insert_participants.json()?,
            json!([{ "match_id": id.to_string(), "name": "Ana", "status": "invited" }])
        );

        assert_eq!(select.method, "GET");
        assert!(
            select.target.ends_with(&format!("&id=eq.{id}")),
            "unexpected target {}",
            select.target
        );
        assert_eq!(select.header("authorization"), Some("Bearer user-jwt"));

        Ok(())
    }

    #[tokio::test]
    async fn missing_match_is_not_found() -> TestResult {
        let store = FakeStore::start(vec![Reply::json(StatusCode::OK, &json!([]))]).await?;

        let result = RestMatchesService::new(store.client()?)
            .get_match(Caller::anonymous(), MatchUuid::new())
            .await;

        assert!(
            matches!(result, Err(MatchesServiceError::NotFound)),
            "unexpected result: {result:?}"
        );

        store.finish().await?;

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_rows_are_a_store_error() -> TestResult {
        let id = MatchUuid::new();
        let store = FakeStore::start(vec![Reply::json(
            StatusCode::OK,
            &json!([match_row(id, "a"), match_row(id, "b")]),
        )])
        .await?;

        let result = RestMatchesService::new(store.client()?)
            .get_match(Caller::anonymous(), id)
            .await;

        assert!(
            matches!(
                result,
                Err(MatchesServiceError::Store(StoreError::MultipleRows))
            ),
            "unexpected result: {result:?}"
        );

        store.finish().await?;

        Ok(())
    }

    #[tokio::test]
    async fn existence_check_reads_ids_only() -> TestResult {
        let id = MatchUuid::new();
        let store = FakeStore::start(vec![
            Reply::json(StatusCode::OK, &json!([{ "id": id.to_string() }])),
            Reply::json(StatusCode::OK, &json!([])),
        ])
        .await?;

        let matches = RestMatchesService::new(store.client()?);

        assert!(matches.match_exists(Caller::anonymous(), id).await?, "row exists");
        assert!(
            !matches.match_exists(Caller::anonymous(), id).await?,
            "no row"
        );

        let requests = store.finish().await?;

        assert!(
            requests
                .iter()
                .all(|request| request.target.contains("select=id&")),
            "unexpected targets: {requests:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn rejected_notes_update_keeps_store_message() -> TestResult {
        let store = FakeStore::start(vec![Reply::json(
            StatusCode::NOT_ACCEPTABLE,
            &json!({
                "code": "PGRST116",
                "details": "The result contains 0 rows",
                "hint": null,
                "message": "JSON object requested, multiple (or no) rows returned"
            }),
        )])
        .await?;

        let result = RestMatchesService::new(store.client()?)
            .update_notes(
                Caller::anonymous(),
                MatchUuid::new(),
                MatchNotesUpdate {
                    notes: "bring balls".to_string(),
                },
            )
            .await;

        let Err(error) = result else {
            return Err("update of a missing match should fail".into());
        };

        assert_eq!(
            error.to_string(),
            "JSON object requested, multiple (or no) rows returned"
        );

        let requests = store.finish().await?;

        assert_eq!(
            requests.first().map(|request| request.method.as_str()),
            Some("PATCH")
        );

        Ok(())
    }
}
