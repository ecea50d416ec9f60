/// Game configuration constants.
///
/// This module defines the fixed gameplay parameters: board dimensions and
/// how many connections a session pairs.
pub const BOARD_SIZE: usize = 3;

/// Number of players paired into one session.
pub const PLAYERS_IN_SESSION: usize = 2;

/// Whether the lobby randomises seat order when pairing, so the first
/// connection to arrive does not always play `x`.
pub const SHUFFLE_SEATS: bool = true;
