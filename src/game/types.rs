use serde::{Deserialize, Serialize};

use crate::config::game::BOARD_SIZE;

/// Mark a connection plays as for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    X,
    O,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Empty,
    X,
    O,
}

impl From<Role> for CellState {
    fn from(role: Role) -> Self {
        match role {
            Role::X => CellState::X,
            Role::O => CellState::O,
        }
    }
}

/// A cell on the board, always within `0..BOARD_SIZE` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Returns `None` when either coordinate falls outside the board.
    pub fn new(row: i64, col: i64) -> Option<Self> {
        let in_range = |v: i64| (0..BOARD_SIZE as i64).contains(&v);
        if in_range(row) && in_range(col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}
