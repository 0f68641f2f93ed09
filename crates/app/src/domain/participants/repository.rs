//! Participants Repository

use crate::{
    domain::participants::{
        data::{NewParticipant, ParticipantUpdate},
        records::{ParticipantRecord, ParticipantUuid},
    },
    store::{Caller, Filter, StoreClient, StoreError},
};

const PARTICIPANTS_TABLE: &str = "match_participants";
const PARTICIPANT_COLUMNS: &str = "id,match_id,name,status,notes,created_at";

#[derive(Debug, Clone)]
pub(crate) struct RestParticipantsRepository {
    client: StoreClient,
}

impl RestParticipantsRepository {
    #[must_use]
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    pub(crate) async fn insert_participant(
        &self,
        caller: &Caller,
        participant: &NewParticipant,
    ) -> Result<ParticipantRecord, StoreError> {
        self.client
            .insert_single(caller, PARTICIPANTS_TABLE, participant, PARTICIPANT_COLUMNS)
            .await
    }

    pub(crate) async fn insert_participants(
        &self,
        caller: &Caller,
        participants: &[NewParticipant],
    ) -> Result<Vec<ParticipantRecord>, StoreError> {
        self.client
            .insert_many(caller, PARTICIPANTS_TABLE, participants, PARTICIPANT_COLUMNS)
            .await
    }

    pub(crate) async fn update_participant(
        &self,
        caller: &Caller,
        participant: ParticipantUuid,
        update: &ParticipantUpdate,
    ) -> Result<ParticipantRecord, StoreError> {
        self.client
            .update_single(
                caller,
                PARTICIPANTS_TABLE,
                &[Filter::eq("id", participant)],
                update,
                PARTICIPANT_COLUMNS,
            )
            .await
    }
}
