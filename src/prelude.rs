//! Commonly used types and utilities for ease of import.

pub use crate::{
    BaselinePlayer, Board, Coord, GameError, HuntTargetPlayer, Match, MatchSummary, Player,
    ShotOutcome, TurnReport,
};

#[cfg(feature = "std")]
pub use crate::{
    init_logging,
    render::{describe_turn, render_boards, status_line},
};
