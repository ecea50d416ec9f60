//! Wire protocol between a player and its game session.
//!
//! Every message is a JSON object discriminated by its `type` field.
//! Decoding never fails outward: anything unusable becomes an
//! [`ClientMessage::IncorrectRequest`] describing the problem.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::game::board::Board;
use crate::game::types::{Position, Role};
use crate::server::error::DecodeError;

/// Server -> client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    #[serde(rename_all = "camelCase")]
    GameStarted {
        my_turn: bool,
        game_field: Board,
        role: Role,
    },
    GameAborted,
    GameResult {
        win: bool,
    },
    #[serde(rename_all = "camelCase")]
    ChangePlayer {
        my_turn: bool,
        game_field: Board,
        role: Role,
    },
    IncorrectRequest {
        message: String,
    },
    IncorrectResponse {
        message: String,
    },
}

impl ServerMessage {
    pub fn incorrect_request(message: impl Into<String>) -> Self {
        Self::IncorrectRequest {
            message: message.into(),
        }
    }
}

/// Client -> server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    PlayerMove {
        #[serde(rename = "move")]
        player_move: PlayerMove,
    },
    RepeatGame,
    IncorrectRequest {
        message: String,
    },
    IncorrectResponse {
        message: String,
    },
}

const CLIENT_MESSAGE_TYPES: [&str; 4] = [
    "playerMove",
    "repeatGame",
    "incorrectRequest",
    "incorrectResponse",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMove {
    /// The mark the client believes it plays. Informational only.
    #[serde(default)]
    pub role: Option<Role>,
    pub position: CellPosition,
}

/// Raw coordinates as sent by the client; bounds are checked by the session.
///
/// Any JSON number is accepted here so that fractional or huge values are
/// refused as off the board rather than as a malformed message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellPosition {
    pub row: Number,
    pub col: Number,
}

impl CellPosition {
    #[cfg(test)]
    pub fn new(row: i64, col: i64) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
        }
    }

    /// The board cell these coordinates name, if any.
    pub fn to_position(&self) -> Option<Position> {
        Position::new(whole(&self.row)?, whole(&self.col)?)
    }
}

/// Integral value of `n`; `2.0` counts, `2.5` and out-of-range values do not.
fn whole(n: &Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= i32::MAX as f64)
            .map(|f| f as i64)
    })
}

/// A frame received from a player's transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(String),
    Binary(Vec<u8>),
}

/// Decode a frame, mapping every failure to an `incorrectRequest`.
pub fn decode(frame: &Frame) -> ClientMessage {
    try_decode(frame).unwrap_or_else(|e| ClientMessage::IncorrectRequest {
        message: e.to_string(),
    })
}

pub fn try_decode(frame: &Frame) -> Result<ClientMessage, DecodeError> {
    let text = match frame {
        Frame::Text(text) => text,
        Frame::Binary(_) => return Err(DecodeError::WrongDataType),
    };
    let value: Value = serde_json::from_str(text).map_err(DecodeError::InvalidJson)?;
    let kind = match value.get("type") {
        Some(Value::String(kind)) => kind.clone(),
        Some(other) => return Err(DecodeError::UnknownType(other.to_string())),
        None => return Err(DecodeError::MissingType),
    };
    if !CLIENT_MESSAGE_TYPES.contains(&kind.as_str()) {
        return Err(DecodeError::UnknownType(kind));
    }
    serde_json::from_value(value).map_err(|source| DecodeError::Malformed { kind, source })
}

pub fn encode(message: &ServerMessage) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}
