/// WebSocket actor for one player connection.
///
/// The socket first waits in the lobby. Once paired it forwards every frame
/// to its game session and writes back whatever the session delivers. When
/// the socket stops, whichever of the two currently owns it is told.
use actix::prelude::*;
use actix_web::{Error, HttpRequest, HttpResponse, web};
use actix_web_actors::ws;
use log::{debug, info, warn};
use std::borrow::Cow;
use uuid::Uuid;

use crate::server::error::ConnectionError;
use crate::server::game_session::messages::{CloseSocket, Deliver, Incoming, Paired, PlayerLeft};
use crate::server::game_session::{LiveSession, Seat};
use crate::server::matchmaking::messages::{Join, Leave};
use crate::server::matchmaking::server::LiveLobby;
use crate::server::protocol::{self, Frame, ServerMessage};

const WAITING_MESSAGE: &str = "Waiting for an opponent";

struct GameLink {
    session: Addr<LiveSession>,
    session_id: Uuid,
    seat: Seat,
}

pub struct PlayerSocket {
    pub id: Uuid,
    pub name: String,
    pub lobby: Addr<LiveLobby>,
    game: Option<GameLink>,
}

impl PlayerSocket {
    pub fn new(name: String, lobby: Addr<LiveLobby>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            lobby,
            game: None,
        }
    }

    fn forward(&self, frame: Frame, ctx: &mut ws::WebsocketContext<Self>) {
        match &self.game {
            Some(link) => link.session.do_send(Incoming {
                seat: link.seat,
                frame,
            }),
            None => {
                debug!("[Player {}] Frame received before pairing", self.id);
                match protocol::encode(&ServerMessage::incorrect_request(WAITING_MESSAGE)) {
                    Ok(text) => ctx.text(text),
                    Err(e) => warn!("[Player {}] Failed to encode reply: {}", self.id, e),
                }
            }
        }
    }
}

impl Actor for PlayerSocket {
    type Context = ws::WebsocketContext<Self>;

    /// Registers the player in the lobby.
    fn started(&mut self, ctx: &mut Self::Context) {
        info!("[Player {}] Connected as {}", self.id, self.name);
        self.lobby.do_send(Join {
            player_id: self.id,
            name: self.name.clone(),
            handle: ctx.address(),
        });
    }

    /// Tells the session (or the lobby, if not yet paired) that we are gone.
    fn stopped(&mut self, ctx: &mut Self::Context) {
        match &self.game {
            Some(link) => {
                info!("[Player {}] Disconnected from session {}", self.id, link.session_id);
                link.session.do_send(PlayerLeft { seat: link.seat });
            }
            None => {
                info!("[Player {}] Disconnected while waiting", self.id);
                self.lobby.do_send(Leave {
                    player_id: self.id,
                    handle: ctx.address(),
                });
            }
        }
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for PlayerSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => self.forward(Frame::Text(text.to_string()), ctx),
            Ok(ws::Message::Binary(bytes)) => self.forward(Frame::Binary(bytes.to_vec()), ctx),
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(_) => (),
            Err(e) => {
                warn!("[Player {}] Protocol error: {}", self.id, e);
                ctx.stop();
            }
        }
    }
}

impl Handler<Deliver> for PlayerSocket {
    type Result = Result<(), ConnectionError>;

    fn handle(&mut self, msg: Deliver, ctx: &mut Self::Context) -> Self::Result {
        let text = protocol::encode(&msg.0)?;
        ctx.text(text);
        Ok(())
    }
}

impl Handler<CloseSocket> for PlayerSocket {
    type Result = ();

    fn handle(&mut self, _: CloseSocket, ctx: &mut Self::Context) -> Self::Result {
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Normal,
            description: Some("Game aborted".into()),
        }));
        ctx.stop();
    }
}

impl Handler<Paired> for PlayerSocket {
    type Result = ();

    fn handle(&mut self, msg: Paired, _ctx: &mut Self::Context) -> Self::Result {
        info!(
            "[Player {}] Seated as {:?} in session {}",
            self.id, msg.seat, msg.session_id
        );
        self.game = Some(GameLink {
            session: msg.session,
            session_id: msg.session_id,
            seat: msg.seat,
        });
    }
}

/// Default display name for a player that did not send one.
pub fn default_name(id: Uuid) -> String {
    format!("Player_{}", &id.simple().to_string()[..6])
}

/// WebSocket endpoint for players.
///
/// Accepts an optional `name` query parameter (URL-encoded).
pub async fn ws_play(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let mut name = String::new();
    for kv in req.query_string().split('&') {
        let mut split = kv.split('=');
        if let (Some("name"), Some(value)) = (split.next(), split.next()) {
            name = urlencoding::decode(value)
                .unwrap_or_else(|_| Cow::Borrowed(""))
                .trim()
                .to_string();
        }
    }

    let mut socket = PlayerSocket::new(name, data.lobby.clone());
    if socket.name.is_empty() {
        socket.name = default_name(socket.id);
    }
    ws::start(socket, &req, stream)
}
