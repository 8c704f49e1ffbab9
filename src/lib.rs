#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod dice;
mod entity;
mod game;
pub mod layout;
mod player;
pub mod prelude;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use dice::*;
pub use entity::*;
pub use game::*;
pub use layout::{Layout, LayoutError, LayoutErrorKind};
pub use player::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
