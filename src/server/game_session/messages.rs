use actix::prelude::*;
use uuid::Uuid;

use super::machine::Seat;
use super::server::LiveSession;
use crate::server::error::ConnectionError;
use crate::server::protocol::{Frame, ServerMessage};

/// Frame received by a player socket, forwarded to its session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Incoming {
    pub seat: Seat,
    pub frame: Frame,
}

/// The player socket at `seat` has stopped.
#[derive(Message)]
#[rtype(result = "()")]
pub struct PlayerLeft {
    pub seat: Seat,
}

/// Session -> player socket: write a message to the wire.
#[derive(Message, Debug)]
#[rtype(result = "Result<(), ConnectionError>")]
pub struct Deliver(pub ServerMessage);

/// Session -> player socket: close the WebSocket.
#[derive(Message)]
#[rtype(result = "()")]
pub struct CloseSocket;

/// Lobby -> player socket: you now play in `session` at `seat`.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Paired {
    pub session: Addr<LiveSession>,
    pub session_id: Uuid,
    pub seat: Seat,
}

/// Session -> lobby: the session has been torn down.
#[derive(Message)]
#[rtype(result = "()")]
pub struct SessionEnded {
    pub session_id: Uuid,
}
