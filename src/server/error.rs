//! Error types for the game server.
//!
//! Protocol errors are turned into `incorrectRequest` replies and never end a
//! session; connection errors are only reported to the error sink.

use thiserror::Error;

/// Failure to hand a message to a player's transport.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("connection is closed")]
    Closed,

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<actix::MailboxError> for ConnectionError {
    fn from(_: actix::MailboxError) -> Self {
        ConnectionError::Closed
    }
}

/// Reasons a `playerMove` is refused. The display text is what the sender
/// receives in the `incorrectRequest` message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Game is finished")]
    GameFinished,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Out of field")]
    OutOfField,

    #[error("Cell is occupied")]
    CellOccupied,
}

/// Reasons an incoming frame could not be turned into a client message.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Wrong data type")]
    WrongDataType,

    #[error("Can't parse JSON data: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Message has no \"type\" field")]
    MissingType,

    #[error("Unknown message type: \"{0}\"")]
    UnknownType(String),

    #[error("Malformed \"{kind}\" message: {source}")]
    Malformed {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}
