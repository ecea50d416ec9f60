//! Actor driving one [`Session`].
//!
//! Incoming frames and close events from the two player sockets arrive in
//! this actor's mailbox, so they are handled strictly one at a time. Sends
//! issued by a reaction run on their own and do not hold up the next message,
//! except the initial deal, which must finish before anything else is read.

use actix::prelude::*;
use log::info;

use super::machine::{Reaction, Seat, Session};
use super::messages::{Incoming, PlayerLeft, SessionEnded};
use crate::server::connection::{ActorConnection, Connection};

/// The session type the lobby creates for real WebSocket players.
pub type LiveSession = GameSession<ActorConnection>;

pub struct GameSession<C: Connection> {
    session: Session<C>,
    lobby: Option<Recipient<SessionEnded>>,
}

impl<C: Connection + Unpin + 'static> GameSession<C> {
    pub fn new(session: Session<C>, lobby: Option<Recipient<SessionEnded>>) -> Self {
        Self { session, lobby }
    }

    fn run(&mut self, reaction: Reaction, ctx: &mut Context<Self>) {
        if self.session.is_destroyed() {
            // must outlive the actor so the survivor still hears about it
            actix::spawn(reaction);
            ctx.stop();
        } else {
            ctx.spawn(reaction.into_actor(self));
        }
    }
}

impl<C: Connection + Unpin + 'static> Actor for GameSession<C> {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            "[GameSession {}] Started with {} vs {}",
            self.session.id(),
            self.session.slot(Seat::First).connection().id(),
            self.session.slot(Seat::Second).connection().id()
        );
        let deal = self.session.deal();
        ctx.wait(deal.into_actor(self).map(|_, act, ctx| {
            // a socket may have gone away between pairing and the end of the deal
            for seat in Seat::ALL {
                if !act.session.is_open(seat) {
                    let reaction = act.session.handle_closed(seat);
                    act.run(reaction, ctx);
                    break;
                }
            }
        }));
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!("[GameSession {}] Stopped", self.session.id());
        if let Some(lobby) = &self.lobby {
            lobby.do_send(SessionEnded {
                session_id: self.session.id(),
            });
        }
    }
}

impl<C: Connection + Unpin + 'static> Handler<Incoming> for GameSession<C> {
    type Result = ();

    fn handle(&mut self, msg: Incoming, ctx: &mut Self::Context) -> Self::Result {
        let reaction = self.session.handle_frame(msg.seat, &msg.frame);
        self.run(reaction, ctx);
    }
}

impl<C: Connection + Unpin + 'static> Handler<PlayerLeft> for GameSession<C> {
    type Result = ();

    fn handle(&mut self, msg: PlayerLeft, ctx: &mut Self::Context) -> Self::Result {
        let reaction = self.session.handle_closed(msg.seat);
        self.run(reaction, ctx);
    }
}
