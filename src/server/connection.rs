//! The capability a game session needs from a player's transport.
//!
//! A session only ever sends messages, closes, and asks whether the peer is
//! still there; incoming frames and close events are pushed to it by the
//! transport as actor messages.

use actix::Addr;
use futures::future::LocalBoxFuture;
use log::error;
use uuid::Uuid;

use crate::server::error::ConnectionError;
use crate::server::game_session::messages::{CloseSocket, Deliver};
use crate::server::player::PlayerSocket;
use crate::server::protocol::ServerMessage;

/// Resolves once the transport has accepted (or refused) a message.
pub type SendFuture = LocalBoxFuture<'static, Result<(), ConnectionError>>;

pub trait Connection {
    fn id(&self) -> Uuid;

    /// Hand `message` to the transport. The message is queued before this
    /// returns; the future only reports the outcome.
    fn send(&self, message: ServerMessage) -> SendFuture;

    fn close(&self);

    fn is_open(&self) -> bool;
}

/// Where delivery failures end up. Failures are never retried.
pub trait ErrorSink {
    fn report(&self, connection: Uuid, message: &ServerMessage, error: &ConnectionError);
}

/// Reports delivery failures through the logger.
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, connection: Uuid, message: &ServerMessage, error: &ConnectionError) {
        error!(
            "[Delivery] Failed to send {:?} to connection {}: {}",
            message, connection, error
        );
    }
}

/// A player connection backed by a [`PlayerSocket`] actor.
#[derive(Clone)]
pub struct ActorConnection {
    id: Uuid,
    addr: Addr<PlayerSocket>,
}

impl ActorConnection {
    pub fn new(id: Uuid, addr: Addr<PlayerSocket>) -> Self {
        Self { id, addr }
    }
}

impl Connection for ActorConnection {
    fn id(&self) -> Uuid {
        self.id
    }

    fn send(&self, message: ServerMessage) -> SendFuture {
        let request = self.addr.send(Deliver(message));
        Box::pin(async move { request.await? })
    }

    fn close(&self) {
        self.addr.do_send(CloseSocket);
    }

    fn is_open(&self) -> bool {
        self.addr.connected()
    }
}
