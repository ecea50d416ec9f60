//! How the lobby talks to a waiting player.

use actix::prelude::*;
use uuid::Uuid;

use crate::server::connection::{ActorConnection, Connection};
use crate::server::game_session::messages::Paired;
use crate::server::game_session::{GameSession, LiveSession, Seat};
use crate::server::player::PlayerSocket;

pub trait PlayerHandle: PartialEq + Unpin + Send + 'static {
    /// What the game session sends through once the player is seated.
    type Connection: Connection + Unpin + 'static;

    fn is_alive(&self) -> bool;

    /// Tell the player which session and seat it got. Called before the
    /// session starts, so a disconnect in between reaches the session.
    fn paired(&self, session: Addr<GameSession<Self::Connection>>, session_id: Uuid, seat: Seat);

    fn into_connection(self, player_id: Uuid) -> Self::Connection;
}

impl PlayerHandle for Addr<PlayerSocket> {
    type Connection = ActorConnection;

    fn is_alive(&self) -> bool {
        self.connected()
    }

    fn paired(&self, session: Addr<LiveSession>, session_id: Uuid, seat: Seat) {
        self.do_send(Paired {
            session,
            session_id,
            seat,
        });
    }

    fn into_connection(self, player_id: Uuid) -> ActorConnection {
        ActorConnection::new(player_id, self)
    }
}
