//! HTTP server configuration.
//!
//! Defaults are compile-time constants; `TICTACTOE_HOST` and `TICTACTOE_PORT`
//! override them at start-up.

use log::warn;

/// Address the HTTP server binds to when `TICTACTOE_HOST` is unset.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the HTTP server binds to when `TICTACTOE_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Path of the WebSocket endpoint players connect to.
pub const WS_PATH: &str = "/ws";

const HOST_VAR: &str = "TICTACTOE_HOST";
const PORT_VAR: &str = "TICTACTOE_PORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Values that fail to parse are reported and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(raw) = lookup(PORT_VAR) {
            match raw.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => warn!(
                    "[Config] Ignoring {}={:?} ({}), using port {}",
                    PORT_VAR, raw, e, DEFAULT_PORT
                ),
            }
        }
        config
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
