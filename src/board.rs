//! The linear track and the snakes and ladders placed on it.

use alloc::collections::BTreeMap;
use core::fmt;

use crate::common::{BoardError, Square};
use crate::entity::{Entity, EntitySpec};

/// Where a candidate move ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing<'a> {
    /// The candidate lies past the last square; the player does not move.
    Overshoot,
    /// A plain square.
    Square(Square),
    /// The candidate hosts an entity; the player ends on its destination.
    Entity(&'a Entity),
}

impl Landing<'_> {
    /// Final square, or `None` on an overshoot.
    pub fn square(&self) -> Option<Square> {
        match self {
            Landing::Overshoot => None,
            Landing::Square(sq) => Some(*sq),
            Landing::Entity(e) => Some(e.end()),
        }
    }
}

/// Board of `size` squares with at most one entity per square.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: Square,
    entities: BTreeMap<Square, Entity>,
}

impl Board {
    /// Create an empty board (no snakes or ladders).
    pub fn new(size: Square) -> Self {
        Board {
            size,
            entities: BTreeMap::new(),
        }
    }

    /// Build a board from unchecked layout triples, stopping at the first bad one.
    pub fn from_specs<I>(size: Square, specs: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = EntitySpec>,
    {
        let mut board = Board::new(size);
        for spec in specs {
            board.place_entity(Entity::try_from(spec)?)?;
        }
        Ok(board)
    }

    pub fn size(&self) -> Square {
        self.size
    }

    fn on_board(&self, sq: Square) -> bool {
        (1..=self.size).contains(&sq)
    }

    /// Place a snake or ladder at its start square.
    pub fn place_entity(&mut self, entity: Entity) -> Result<(), BoardError> {
        let start = entity.start();
        if !self.on_board(start) {
            return Err(BoardError::OutOfRange(start));
        }
        if !self.on_board(entity.end()) {
            return Err(BoardError::OutOfRange(entity.end()));
        }
        if !entity.kind().points_right_way(start, entity.end()) {
            return Err(BoardError::Misdirected(start));
        }
        if self.entities.contains_key(&start) {
            return Err(BoardError::DuplicateEntity(start));
        }
        self.entities.insert(start, entity);
        Ok(())
    }

    /// Entity whose start is `sq`, if any.
    pub fn entity_at(&self, sq: Square) -> Option<&Entity> {
        self.entities.get(&sq)
    }

    /// All entities, ordered by start square.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Resolve a candidate square. At most one hop is applied: the
    /// destination of an entity is never looked up again.
    pub fn resolve_landing(&self, candidate: Square) -> Landing<'_> {
        if candidate > self.size {
            return Landing::Overshoot;
        }
        match self.entities.get(&candidate) {
            Some(entity) => Landing::Entity(entity),
            None => Landing::Square(candidate),
        }
    }

    /// Returns `true` for the last square.
    pub fn is_terminal(&self, sq: Square) -> bool {
        sq == self.size
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {}, entities: [", self.size)?;
        for entity in self.entities.values() {
            writeln!(f, "  {},", entity)?;
        }
        write!(f, "] }}")
    }
}
