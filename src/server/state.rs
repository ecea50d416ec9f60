// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the address of the lobby actor, shared between HTTP/WebSocket handlers.

use actix::Addr;
use crate::server::matchmaking::server::LiveLobby;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the lobby actor (pairs waiting players into sessions).
    pub lobby: Addr<LiveLobby>,
}

impl AppState {
    pub fn new(lobby: Addr<LiveLobby>) -> Self {
        AppState { lobby }
    }
}
