//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Dice, Entity, EntityKind, GameEngine, GameError, GamePhase, Layout, LoadedDice,
    PlayerId, Roll, Rules, TurnEvent, TurnOutcome, WinMode,
};

#[cfg(feature = "std")]
pub use crate::{run_game, AutoTrigger, PromptTrigger, TurnTrigger};
