//! Main entry point for the tic-tac-toe server.
//!
//! Initializes logging and the lobby actor, then launches the HTTP server
//! with the player WebSocket endpoint.

use actix::Actor;
use actix_web::{App, HttpServer, web};
use log::info;

use config::ServerConfig;
use server::matchmaking::server::LiveLobby;

pub mod config;
mod game;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();

    // The lobby pairs waiting players and starts their game sessions.
    let lobby = LiveLobby::new().start();
    let state = web::Data::new(server::state::AppState::new(lobby));

    info!("[Server] Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*")),
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
