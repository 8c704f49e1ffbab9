//! Common types for snakes and ladders: squares, player ids and setup errors.

use core::fmt;

/// A square on the track, numbered from 1 up to the board size.
pub type Square = u32;

/// Zero-based player identifier, in seating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub usize);

impl PlayerId {
    /// Raw zero-based index.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    /// Players are shown 1-based, the way they are announced at the table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Errors returned while building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// An entity starting at this square was declared without a destination.
    MissingDestination(Square),
    /// The square already hosts an entity.
    DuplicateEntity(Square),
    /// The square lies outside `1..=size`.
    OutOfRange(Square),
    /// A snake that does not go down, or a ladder that does not go up.
    Misdirected(Square),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingDestination(sq) => {
                write!(f, "Entity at square {} has no destination", sq)
            }
            BoardError::DuplicateEntity(sq) => {
                write!(f, "Square {} already hosts a snake or ladder", sq)
            }
            BoardError::OutOfRange(sq) => write!(f, "Square {} is off the board", sq),
            BoardError::Misdirected(sq) => write!(
                f,
                "Entity at square {} points the wrong way (snakes go down, ladders go up)",
                sq
            ),
        }
    }
}

/// What made a game configuration unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    /// No players were seated.
    NoPlayers,
    /// A die needs at least two faces.
    TooFewSides(u32),
    /// The board has no room to move past the start square.
    BoardTooSmall(u32),
    /// A loaded die was given a face it cannot show.
    FaceOutOfRange(u32),
    /// A loaded die was given nothing to roll.
    EmptyScript,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::NoPlayers => write!(f, "at least one player is required"),
            ConfigIssue::TooFewSides(n) => write!(f, "a die needs at least 2 sides, got {}", n),
            ConfigIssue::BoardTooSmall(n) => write!(f, "board of size {} is too small", n),
            ConfigIssue::FaceOutOfRange(n) => write!(f, "face {} cannot be rolled", n),
            ConfigIssue::EmptyScript => write!(f, "a loaded die needs at least one face"),
        }
    }
}

/// Errors returned by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Board setup failed.
    Board(BoardError),
    /// Player count, dice or board size rejected before play starts.
    InvalidConfiguration(ConfigIssue),
    /// `initialize` was called on an engine that already left setup.
    AlreadyInitialized,
    /// A turn was requested before `initialize`.
    NotInitialized,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<ConfigIssue> for GameError {
    fn from(issue: ConfigIssue) -> Self {
        GameError::InvalidConfiguration(issue)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::InvalidConfiguration(issue) => {
                write!(f, "Invalid configuration: {}", issue)
            }
            GameError::AlreadyInitialized => write!(f, "Game is already initialized"),
            GameError::NotInitialized => write!(f, "Game has not been initialized"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigIssue {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn player_id_displays_one_based() {
        assert_eq!(PlayerId(0).to_string(), "Player 1");
        assert_eq!(PlayerId(3).index(), 3);
    }

    #[test]
    fn board_error_converts_into_game_error() {
        let err: GameError = BoardError::DuplicateEntity(7).into();
        assert_eq!(err, GameError::Board(BoardError::DuplicateEntity(7)));
        assert_eq!(
            err.to_string(),
            "Board error: Square 7 already hosts a snake or ladder"
        );
    }
}
