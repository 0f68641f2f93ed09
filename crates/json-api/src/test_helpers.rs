//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use padel_app::{
    context::AppContext,
    domain::{
        matches::{
            MockMatchesService,
            records::{MatchDetailsRecord, MatchRecord, MatchUuid},
        },
        participants::{
            MockParticipantsService,
            records::{ParticipantRecord, ParticipantUuid},
        },
    },
};

use crate::{envelope::ErrorBody, state::State};

pub(crate) const TEST_BEARER: &str = "Bearer user-jwt";

pub(crate) fn strict_matches_mock() -> MockMatchesService {
    let mut matches = MockMatchesService::new();

    matches.expect_create_match().never();
    matches.expect_get_match().never();
    matches.expect_match_exists().never();
    matches.expect_update_notes().never();

    matches
}

pub(crate) fn strict_participants_mock() -> MockParticipantsService {
    let mut participants = MockParticipantsService::new();

    participants.expect_add_participant().never();
    participants.expect_add_participants().never();
    participants.expect_update_participant().never();

    participants
}

pub(crate) fn state_with(
    matches: MockMatchesService,
    participants: MockParticipantsService,
) -> Arc<State> {
    let app = AppContext {
        matches: Arc::new(matches),
        participants: Arc::new(participants),
    };

    State::shared(Some(app), Some("anon-key".to_string()))
}

pub(crate) fn service_with(
    matches: MockMatchesService,
    participants: MockParticipantsService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(matches, participants)))
            .push(route),
    )
}

pub(crate) fn matches_service(matches: MockMatchesService, route: Router) -> Service {
    service_with(matches, strict_participants_mock(), route)
}

pub(crate) fn participants_service(participants: MockParticipantsService, route: Router) -> Service {
    service_with(strict_matches_mock(), participants, route)
}

pub(crate) fn service_without_credentials(route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::shared(None, None)))
            .push(route),
    )
}

pub(crate) fn make_match(id: MatchUuid) -> MatchRecord {
    MatchRecord {
        id,
        title: "Friday doubles".to_string(),
        status: "pending".to_string(),
        notes: None,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_match_details(
    id: MatchUuid,
    participants: Vec<ParticipantRecord>,
) -> MatchDetailsRecord {
    MatchDetailsRecord {
        record: make_match(id),
        match_participants: participants,
    }
}

pub(crate) fn make_participant(match_id: MatchUuid, name: &str, status: &str) -> ParticipantRecord {
    ParticipantRecord {
        id: ParticipantUuid::new(),
        match_id,
        name: name.to_string(),
        status: status.to_string(),
        notes: Some(String::new()),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) async fn take_error(res: &mut Response) -> Result<String, salvo::Error> {
    use salvo::test::ResponseExt as _;

    let body: ErrorBody = res.take_json().await?;

    assert!(!body.ok, "error envelope must carry ok: false");

    Ok(body.error)
}
