/// Main configuration module.
///
/// Re-exports submodules for game and server configuration.
pub mod game;
pub mod server;

pub use server::ServerConfig;
