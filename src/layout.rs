//! Board layouts: the built-in boards and a small line-oriented text format.
//!
//! ```text
//! # comments and blank lines are ignored
//! board 10
//! snake 7 2
//! ladder 4 6
//! ```
//!
//! A `snake` or `ladder` line with only a start square is accepted here and
//! rejected with [`BoardError::MissingDestination`] when the board is built.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    board::Board,
    common::{BoardError, Square},
    config::DEFAULT_BOARD_SIZE,
    entity::{EntityKind, EntitySpec},
};

/// Snakes of the 100-square board.
pub const STANDARD_SNAKES: [(Square, Square); 8] = [
    (17, 7),
    (54, 34),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 79),
];

/// Ladders of the 100-square board.
pub const STANDARD_LADDERS: [(Square, Square); 8] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (51, 67),
    (71, 91),
    (80, 100),
];

pub const SAMPLE_SIZE: Square = 10;
pub const SAMPLE_SNAKES: [(Square, Square); 1] = [(7, 2)];
pub const SAMPLE_LADDERS: [(Square, Square); 1] = [(4, 6)];

/// A board size plus the unchecked entity triples to place on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub size: Square,
    pub entities: Vec<EntitySpec>,
}

/// Why a layout line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutErrorKind {
    UnknownKeyword,
    BadNumber,
    WrongArity,
    /// More than one `board` line.
    DuplicateSize,
}

/// A layout parse failure on a 1-based line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutError {
    pub line: usize,
    pub kind: LayoutErrorKind,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            LayoutErrorKind::UnknownKeyword => "unknown keyword (expected board, snake or ladder)",
            LayoutErrorKind::BadNumber => "not a square number",
            LayoutErrorKind::WrongArity => "wrong number of arguments",
            LayoutErrorKind::DuplicateSize => "board size given twice",
        };
        write!(f, "layout line {}: {}", self.line, what)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

fn specs(kind: EntityKind, pairs: &[(Square, Square)]) -> impl Iterator<Item = EntitySpec> + '_ {
    pairs
        .iter()
        .map(move |&(start, end)| EntitySpec::new(kind, start, end))
}

impl Layout {
    pub fn new(size: Square) -> Self {
        Self {
            size,
            entities: Vec::new(),
        }
    }

    /// The classic 100-square board.
    pub fn standard() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            entities: specs(EntityKind::Snake, &STANDARD_SNAKES)
                .chain(specs(EntityKind::Ladder, &STANDARD_LADDERS))
                .collect(),
        }
    }

    /// A 10-square board with one snake and one ladder.
    pub fn sample() -> Self {
        Self {
            size: SAMPLE_SIZE,
            entities: specs(EntityKind::Snake, &SAMPLE_SNAKES)
                .chain(specs(EntityKind::Ladder, &SAMPLE_LADDERS))
                .collect(),
        }
    }

    /// Look up a built-in layout by name.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(Self::standard()),
            "sample" => Some(Self::sample()),
            _ => None,
        }
    }

    /// Parse the text format. Without a `board` line the size defaults to
    /// [`DEFAULT_BOARD_SIZE`].
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut size = None;
        let mut entities = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let err = |kind| LayoutError { line: i + 1, kind };
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let mut words = line.split_whitespace();
            let keyword = words.next().unwrap_or("");
            let mut numbers = Vec::new();
            for w in words {
                numbers.push(
                    w.parse::<Square>()
                        .map_err(|_| err(LayoutErrorKind::BadNumber))?,
                );
            }
            match keyword {
                "board" => {
                    if numbers.len() != 1 {
                        return Err(err(LayoutErrorKind::WrongArity));
                    }
                    if size.replace(numbers[0]).is_some() {
                        return Err(err(LayoutErrorKind::DuplicateSize));
                    }
                }
                "snake" | "ladder" => {
                    let kind = if keyword == "snake" {
                        EntityKind::Snake
                    } else {
                        EntityKind::Ladder
                    };
                    let (start, end) = match numbers.as_slice() {
                        [start] => (*start, None),
                        [start, end] => (*start, Some(*end)),
                        _ => return Err(err(LayoutErrorKind::WrongArity)),
                    };
                    entities.push(EntitySpec { kind, start, end });
                }
                _ => return Err(err(LayoutErrorKind::UnknownKeyword)),
            }
        }
        Ok(Self {
            size: size.unwrap_or(DEFAULT_BOARD_SIZE),
            entities,
        })
    }

    /// Build the board, failing on the first invalid entity.
    pub fn board(&self) -> Result<Board, BoardError> {
        Board::from_specs(self.size, self.entities.iter().copied())
    }
}
