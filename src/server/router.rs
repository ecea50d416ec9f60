//! HTTP and WebSocket routing configuration.
//!
//! Players connect to the WebSocket endpoint; `/health` reports lobby load.

use actix_web::{HttpResponse, error, web};
use serde_json::json;

use crate::config::server::WS_PATH;
use crate::server::matchmaking::messages::GetLobbyStats;
use crate::server::player::ws_play;
use crate::server::state::AppState;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(WS_PATH).to(ws_play))
        .service(web::resource("/health").route(web::get().to(health)));
}

async fn health(data: web::Data<AppState>) -> Result<HttpResponse, actix_web::Error> {
    let stats = data
        .lobby
        .send(GetLobbyStats)
        .await
        .map_err(error::ErrorInternalServerError)?;
    Ok(HttpResponse::Ok().json(json!({
        "status": "ok",
        "waiting": stats.waiting,
        "sessions": stats.sessions,
    })))
}
