//! First-come first-served queue of players waiting for an opponent.

use std::collections::VecDeque;
use uuid::Uuid;

use super::types::PlayerInfo;

pub struct WaitingPlayer<T> {
    pub info: PlayerInfo,
    pub handle: T,
}

pub struct WaitingQueue<T> {
    players: VecDeque<WaitingPlayer<T>>,
}

impl<T> Default for WaitingQueue<T> {
    fn default() -> Self {
        Self {
            players: VecDeque::new(),
        }
    }
}

impl<T: PartialEq> WaitingQueue<T> {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Add a player at the back. A player already queued under the same id
    /// keeps its place but gets the new handle.
    pub fn join(&mut self, info: PlayerInfo, handle: T) {
        if let Some(existing) = self.players.iter_mut().find(|p| p.info.id == info.id) {
            existing.info = info;
            existing.handle = handle;
            return;
        }
        self.players.push_back(WaitingPlayer { info, handle });
    }

    /// Remove `id`, but only if it is still queued with this `handle`.
    pub fn leave(&mut self, id: Uuid, handle: &T) -> bool {
        let before = self.players.len();
        self.players.retain(|p| !(p.info.id == id && &p.handle == handle));
        self.players.len() != before
    }

    /// Take the two oldest live players. Dead entries found on the way are dropped.
    pub fn take_pair(&mut self, is_alive: impl Fn(&T) -> bool) -> Option<[WaitingPlayer<T>; 2]> {
        self.players.retain(|p| is_alive(&p.handle));
        if self.players.len() < 2 {
            return None;
        }
        let first = self.players.pop_front()?;
        let second = self.players.pop_front()?;
        Some([first, second])
    }
}
