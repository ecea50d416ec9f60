/// Lobby actor.
///
/// Keeps connected players in arrival order and, as soon as two live ones are
/// waiting, starts a game session for them. Tracks running sessions so the
/// health endpoint can report them.

use actix::prelude::*;
use log::{debug, info};
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

use super::handle::PlayerHandle;
use super::messages::{GetLobbyStats, Join, Leave};
use super::queue::{WaitingPlayer, WaitingQueue};
use super::types::{LobbyStats, PlayerInfo};
use crate::config::game::SHUFFLE_SEATS;
use crate::server::connection::LogSink;
use crate::server::game_session::messages::SessionEnded;
use crate::server::game_session::{GameSession, Seat, Session};
use crate::server::player::PlayerSocket;

/// The lobby the server runs, pairing real WebSocket players.
pub type LiveLobby = Lobby<Addr<PlayerSocket>>;

pub struct Lobby<H> {
    waiting: WaitingQueue<H>,
    sessions: HashSet<Uuid>,
}

impl<H> Default for Lobby<H> {
    fn default() -> Self {
        Self {
            waiting: WaitingQueue::default(),
            sessions: HashSet::new(),
        }
    }
}

impl<H: PlayerHandle> Lobby<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start sessions while at least two live players are waiting.
    fn try_pair(&mut self, ctx: &mut Context<Self>) {
        while let Some(mut pair) = self.waiting.take_pair(|handle| handle.is_alive()) {
            if SHUFFLE_SEATS {
                pair.shuffle(&mut rand::rng());
            }
            self.start_session(pair, ctx);
        }
    }

    fn start_session(&mut self, pair: [WaitingPlayer<H>; 2], ctx: &mut Context<Self>) {
        let session_id = Uuid::new_v4();
        let session_ctx = Context::<GameSession<H::Connection>>::new();
        let session_addr = session_ctx.address();

        for (seat, player) in Seat::ALL.into_iter().zip(pair.iter()) {
            player.handle.paired(session_addr.clone(), session_id, seat);
        }
        info!(
            "[Lobby] Pairing {} ({}) with {} ({}) in session {}",
            pair[0].info.name, pair[0].info.id, pair[1].info.name, pair[1].info.id, session_id
        );

        let [first, second] = pair.map(|player| player.handle.into_connection(player.info.id));
        let session = Session::new(session_id, first, second, Rc::new(LogSink));
        session_ctx.run(GameSession::new(session, Some(ctx.address().recipient())));
        self.sessions.insert(session_id);
    }

    fn stats(&self) -> LobbyStats {
        LobbyStats {
            waiting: self.waiting.len(),
            sessions: self.sessions.len(),
        }
    }
}

impl<H: PlayerHandle> Actor for Lobby<H> {
    type Context = Context<Self>;
}

impl<H: PlayerHandle> Handler<Join<H>> for Lobby<H> {
    type Result = ();

    fn handle(&mut self, msg: Join<H>, ctx: &mut Self::Context) -> Self::Result {
        debug!("[Lobby] Player {} ({}) is waiting", msg.name, msg.player_id);
        self.waiting.join(
            PlayerInfo {
                id: msg.player_id,
                name: msg.name,
            },
            msg.handle,
        );
        self.try_pair(ctx);
    }
}

impl<H: PlayerHandle> Handler<Leave<H>> for Lobby<H> {
    type Result = ();

    fn handle(&mut self, msg: Leave<H>, _ctx: &mut Self::Context) -> Self::Result {
        if self.waiting.leave(msg.player_id, &msg.handle) {
            debug!("[Lobby] Player {} left before being paired", msg.player_id);
        }
    }
}

impl<H: PlayerHandle> Handler<SessionEnded> for Lobby<H> {
    type Result = ();

    fn handle(&mut self, msg: SessionEnded, _ctx: &mut Self::Context) -> Self::Result {
        if self.sessions.remove(&msg.session_id) {
            info!("[Lobby] Session {} ended, {} still running", msg.session_id, self.sessions.len());
        }
    }
}

impl<H: PlayerHandle> Handler<GetLobbyStats> for Lobby<H> {
    type Result = MessageResult<GetLobbyStats>;

    fn handle(&mut self, _: GetLobbyStats, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.stats())
    }
}
