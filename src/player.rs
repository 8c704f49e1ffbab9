use crate::{common::{PlayerId, Square}, config::START_SQUARE};

/// Per-player state. Only the game engine mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    position: Square,
    rank: Option<u32>,
    finished: bool,
}

impl Player {
    /// New player waiting on the start square.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            position: START_SQUARE,
            rank: None,
            finished: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn position(&self) -> Square {
        self.position
    }

    pub fn set_position(&mut self, position: Square) {
        self.position = position;
    }

    pub fn rank(&self) -> Option<u32> {
        self.rank
    }

    /// Record the finishing place and mark the player finished. A rank is
    /// assigned once; later calls leave the first rank in place.
    pub fn set_rank(&mut self, rank: u32) {
        debug_assert!(self.rank.is_none(), "{} ranked twice", self.id);
        if self.rank.is_none() {
            self.rank = Some(rank);
            self.finished = true;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unranked_on_start_square() {
        let p = Player::new(PlayerId(2));
        assert_eq!(p.position(), START_SQUARE);
        assert_eq!(p.rank(), None);
        assert!(!p.is_finished());
    }

    #[test]
    fn ranking_finishes_player() {
        let mut p = Player::new(PlayerId(0));
        p.set_position(10);
        p.set_rank(1);
        assert!(p.is_finished());
        assert_eq!(p.rank(), Some(1));
        assert_eq!(p.position(), 10);
    }
}
