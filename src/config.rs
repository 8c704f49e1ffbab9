use crate::common::Square;

/// Every player starts here.
pub const START_SQUARE: Square = 1;
pub const DEFAULT_BOARD_SIZE: Square = 100;
pub const DEFAULT_DICE_SIDES: u32 = 6;

/// Rolling this face earns another roll.
pub const BONUS_FACE: u32 = 6;
/// The bonus face rolled this many times in a row forfeits the extra roll.
pub const BONUS_STREAK_LIMIT: u32 = 3;

/// How the game decides it is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum WinMode {
    /// Play on until every player has reached the last square.
    #[default]
    FullRanking,
    /// Stop as soon as one player reaches the last square.
    FirstFinisher,
}

/// Turn rules that may vary between tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    pub win_mode: WinMode,
    pub bonus_face: u32,
    pub bonus_streak_limit: u32,
}

impl Rules {
    pub const fn new(win_mode: WinMode) -> Self {
        Self {
            win_mode,
            bonus_face: BONUS_FACE,
            bonus_streak_limit: BONUS_STREAK_LIMIT,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(WinMode::default())
    }
}
