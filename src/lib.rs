#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod history;
#[cfg(feature = "std")]
pub mod logging;
mod player;
mod player_baseline;
mod player_hunt;
pub mod prelude;
#[cfg(feature = "std")]
pub mod render;
mod ship;

pub use bitboard::BitBoard;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use history::ShotHistory;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use player_baseline::BaselinePlayer;
pub use player_hunt::{HuntTargetPlayer, Mode};
pub use ship::*;
