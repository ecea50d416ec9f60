use actix::prelude::*;
use uuid::Uuid;

use super::types::LobbyStats;

/// Message: a freshly connected player wants an opponent. `handle` is how
/// the lobby reaches that player later.
pub struct Join<H> {
    pub player_id: Uuid,
    pub name: String,
    pub handle: H,
}

impl<H: 'static> Message for Join<H> {
    type Result = ();
}

/// Message: a waiting player disconnected before being paired.
pub struct Leave<H> {
    pub player_id: Uuid,
    pub handle: H,
}

impl<H: 'static> Message for Leave<H> {
    type Result = ();
}

/// Message: report how many players wait and how many sessions run.
#[derive(Message)]
#[rtype(result = "LobbyStats")]
pub struct GetLobbyStats;
