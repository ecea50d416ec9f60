// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the backend server components:
//! - Wire protocol and the connection capability a session relies on
//! - Game session state machine and the actor driving it
//! - Matchmaking (pairing waiting players)
//! - Per-player WebSocket actor, HTTP routing and shared state

pub mod connection;
pub mod error;
pub mod game_session;
pub mod matchmaking;
pub mod player;
pub mod protocol;
pub mod router;
pub mod state;
