//! Matches Repository

use serde::de::IgnoredAny;

use crate::{
    domain::matches::{
        data::{MatchNotesUpdate, NewMatch},
        records::{MatchDetailsRecord, MatchRecord, MatchUuid},
    },
    store::{Caller, Filter, StoreClient, StoreError},
};

const MATCHES_TABLE: &str = "padel_matches";
const MATCH_COLUMNS: &str = "id,title,status,notes,created_at";
const MATCH_DETAILS_COLUMNS: &str = "id,title,status,notes,created_at,\
     match_participants(id,match_id,name,status,notes,created_at)";

#[derive(Debug, Clone)]
pub(crate) struct RestMatchesRepository {
    client: StoreClient,
}

impl RestMatchesRepository {
    #[must_use]
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    pub(crate) async fn insert_match(
        &self,
        caller: &Caller,
        new: &NewMatch,
    ) -> Result<MatchRecord, StoreError> {
        self.client
            .insert_single(caller, MATCHES_TABLE, new, MATCH_COLUMNS)
            .await
    }

    pub(crate) async fn find_match_details(
        &self,
        caller: &Caller,
        id: MatchUuid,
    ) -> Result<Option<MatchDetailsRecord>, StoreError> {
        self.client
            .select_maybe_single(
                caller,
                MATCHES_TABLE,
                MATCH_DETAILS_COLUMNS,
                &[Filter::eq("id", id)],
            )
            .await
    }

    pub(crate) async fn match_exists(
        &self,
        caller: &Caller,
        id: MatchUuid,
    ) -> Result<bool, StoreError> {
        let row: Option<IgnoredAny> = self
            .client
            .select_maybe_single(caller, MATCHES_TABLE, "id", &[Filter::eq("id", id)])
            .await?;

        Ok(row.is_some())
    }

    pub(crate) async fn update_notes(
        &self,
        caller: &Caller,
        id: MatchUuid,
        update: &MatchNotesUpdate,
    ) -> Result<MatchRecord, StoreError> {
        self.client
            .update_single(
                caller,
                MATCHES_TABLE,
                &[Filter::eq("id", id)],
                update,
                MATCH_COLUMNS,
            )
            .await
    }
}
