pub mod machine;
pub mod messages;
pub mod server;

pub use machine::{Seat, Session};
pub use server::{GameSession, LiveSession};
