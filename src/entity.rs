//! Snakes and ladders: single forced relocations keyed by their start square.

use alloc::string::String;
use core::fmt;

use crate::common::{BoardError, Square};

/// Which way an entity moves a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Snake,
    Ladder,
}

impl EntityKind {
    /// Default announcement when a player triggers this kind of entity.
    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::Snake => "Bit by Snake",
            EntityKind::Ladder => "Climbed Ladder",
        }
    }

    /// Whether `start -> end` follows the convention for this kind.
    pub const fn points_right_way(self, start: Square, end: Square) -> bool {
        match self {
            EntityKind::Snake => end < start,
            EntityKind::Ladder => end > start,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Snake => write!(f, "snake"),
            EntityKind::Ladder => write!(f, "ladder"),
        }
    }
}

/// An unchecked `(start, end, kind)` triple as delivered by a layout source.
/// The destination may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySpec {
    pub kind: EntityKind,
    pub start: Square,
    pub end: Option<Square>,
}

impl EntitySpec {
    pub const fn new(kind: EntityKind, start: Square, end: Square) -> Self {
        Self {
            kind,
            start,
            end: Some(end),
        }
    }

    pub const fn snake(start: Square, end: Square) -> Self {
        Self::new(EntityKind::Snake, start, end)
    }

    pub const fn ladder(start: Square, end: Square) -> Self {
        Self::new(EntityKind::Ladder, start, end)
    }
}

/// A snake or ladder with a known destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    kind: EntityKind,
    start: Square,
    end: Square,
    label: String,
}

impl Entity {
    pub fn new(kind: EntityKind, start: Square, end: Square) -> Self {
        Self {
            kind,
            start,
            end,
            label: String::from(kind.label()),
        }
    }

    pub fn snake(start: Square, end: Square) -> Self {
        Self::new(EntityKind::Snake, start, end)
    }

    pub fn ladder(start: Square, end: Square) -> Self {
        Self::new(EntityKind::Ladder, start, end)
    }

    /// Replace the default announcement.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Square that triggers the entity.
    pub fn start(&self) -> Square {
        self.start
    }

    /// Square the player is moved to.
    pub fn end(&self) -> Square {
        self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl TryFrom<EntitySpec> for Entity {
    type Error = BoardError;

    fn try_from(spec: EntitySpec) -> Result<Self, Self::Error> {
        let end = spec.end.ok_or(BoardError::MissingDestination(spec.start))?;
        Ok(Entity::new(spec.kind, spec.start, end))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.start, self.end)
    }
}
