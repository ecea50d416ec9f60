use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct PlayerInfo {
    pub id: Uuid,
    pub name: String,
}

/// Snapshot of the lobby, served by the health endpoint.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct LobbyStats {
    pub waiting: usize,
    pub sessions: usize,
}
