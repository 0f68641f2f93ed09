//! Participants service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::participants::{
        data::{NewParticipant, ParticipantUpdate},
        errors::ParticipantsServiceError,
        records::{ParticipantRecord, ParticipantUuid},
        repository::RestParticipantsRepository,
    },
    store::{Caller, StoreClient},
};

/// [`ParticipantsService`] backed by the store's REST interface.
#[derive(Debug, Clone)]
pub struct RestParticipantsService {
    repository: RestParticipantsRepository,
}

impl RestParticipantsService {
    /// Create a service over `client`.
    #[must_use]
    pub fn new(client: StoreClient) -> Self {
        Self {
            repository: RestParticipantsRepository::new(client),
        }
    }
}

#[async_trait]
impl ParticipantsService for RestParticipantsService {
    async fn add_participant(
        &self,
        caller: Caller,
        participant: NewParticipant,
    ) -> Result<ParticipantRecord, ParticipantsServiceError> {
        let created = self
            .repository
            .insert_participant(&caller, &participant)
            .await?;

        debug!(participant = %created.id, match_id = %created.match_id, "participant added");

        Ok(created)
    }

    async fn add_participants(
        &self,
        caller: Caller,
        participants: Vec<NewParticipant>,
    ) -> Result<Vec<ParticipantRecord>, ParticipantsServiceError> {
        if participants.is_empty() {
            return Ok(Vec::new());
        }

        let created = self
            .repository
            .insert_participants(&caller, &participants)
            .await?;

        debug!(count = created.len(), "participants added");

        Ok(created)
    }

    async fn update_participant(
        &self,
        caller: Caller,
        participant: ParticipantUuid,
        update: ParticipantUpdate,
    ) -> Result<ParticipantRecord, ParticipantsServiceError> {
        Ok(self
            .repository
            .update_participant(&caller, participant, &update)
            .await?)
    }
}

/// Participant operations used by the handlers.
#[automock]
#[async_trait]
pub trait ParticipantsService: Send + Sync {
    /// Inserts a single participant.
    async fn add_participant(
        &self,
        caller: Caller,
        participant: NewParticipant,
    ) -> Result<ParticipantRecord, ParticipantsServiceError>;

    /// Inserts a batch of participants in one store call.
    async fn add_participants(
        &self,
        caller: Caller,
        participants: Vec<NewParticipant>,
    ) -> Result<Vec<ParticipantRecord>, ParticipantsServiceError>;

    /// Applies a partial update to a participant.
    async fn update_participant(
        &self,
        caller: Caller,
        participant: ParticipantUuid,
        update: ParticipantUpdate,
    ) -> Result<ParticipantRecord, ParticipantsServiceError>;
}
