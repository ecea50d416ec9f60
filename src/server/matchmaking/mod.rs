/// Matchmaking module: holds waiting players and pairs them into game sessions.

pub mod handle;
pub mod messages;
pub mod queue;
pub mod server;
pub mod types;
