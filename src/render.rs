#![cfg(feature = "std")]

//! Plain-text presentation of a match: both boards side by side under their
//! players' names, a status line and one-line turn descriptions.

use std::fmt::Write;
use std::string::String;

use crate::{
    common::ShotOutcome,
    config::BOARD_SIZE,
    game::{Match, TurnReport},
};

const GRID: usize = BOARD_SIZE as usize;
/// Width of one rendered board row: row label plus two chars per cell.
const BOARD_WIDTH: usize = 3 + 2 * GRID;
const GAP: &str = "    ";

fn column_header() -> String {
    let mut s = String::from("  ");
    for c in 0..GRID {
        let _ = write!(s, " {}", c);
    }
    s
}

/// Render both boards, ships revealed, with player names above them.
pub fn render_boards(game: &Match) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}{}{}",
        game.player_name(0),
        GAP,
        game.player_name(1),
        width = BOARD_WIDTH
    );
    let header = column_header();
    let _ = writeln!(out, "{:<width$}{}{}", header, GAP, header, width = BOARD_WIDTH);

    let mut rows0 = game.board(0).rows();
    let mut rows1 = game.board(1).rows();
    for r in 0..GRID {
        let mut line = String::new();
        for rows in [&mut rows0, &mut rows1] {
            if !line.is_empty() {
                line.push_str(GAP);
            }
            let _ = write!(line, "{:>2}", r);
            if let Some(row) = rows.next() {
                for cell in row {
                    let _ = write!(line, " {}", cell.glyph());
                }
            }
        }
        let _ = writeln!(out, "{}", line);
    }
    out
}

/// "Game in Progress" or "Game Over! <name> Wins".
pub fn status_line(game: &Match) -> String {
    match game.winner() {
        Some(idx) => format!("Game Over! {} Wins", game.player_name(idx)),
        None => String::from("Game in Progress"),
    }
}

/// One-line description of a turn, e.g. `Player fires at (3, 4): hit`.
pub fn describe_turn(game: &Match, report: &TurnReport) -> String {
    let result = match report.outcome {
        ShotOutcome::Hit => "hit",
        ShotOutcome::Miss => "miss",
    };
    format!(
        "{} fires at {}: {}",
        game.player_name(report.player),
        report.target,
        result
    )
}
