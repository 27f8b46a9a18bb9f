//! Match controller: owns both boards and agents and sequences turns.

use alloc::{boxed::Box, string::String, vec::Vec};
use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    board::Board,
    common::{Coord, GameError, ShotOutcome, ShotRecord},
    config::{FLEET, MAX_TARGET_ATTEMPTS, TOTAL_SHIP_CELLS},
    history::ShotHistory,
    player::Player,
};

/// What happened during one call to [`Match::take_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Index of the player who fired.
    pub player: usize,
    pub target: Coord,
    pub outcome: ShotOutcome,
    /// Targets requested from the agent before one was accepted.
    pub attempts: usize,
    pub game_over: bool,
}

/// Final tally of a finished (or abandoned) match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub players: [String; 2],
    pub winner: Option<usize>,
    pub winner_name: Option<String>,
    pub turns: usize,
    pub shots: [usize; 2],
    pub hits: [usize; 2],
}

pub struct Match {
    players: [Box<dyn Player>; 2],
    rngs: [SmallRng; 2],
    boards: [Board; 2],
    shots_taken: [ShotHistory; 2],
    turn: usize,
    last_actor: Option<usize>,
}

impl Match {
    /// Build a match whose per-player RNGs derive from `seed`.
    pub fn new(
        player1: Box<dyn Player>,
        player2: Box<dyn Player>,
        seed: u64,
    ) -> Result<Self, GameError> {
        let rngs = [
            SmallRng::seed_from_u64(seed),
            SmallRng::seed_from_u64(seed.wrapping_add(1)),
        ];
        Self::with_rngs(player1, player2, rngs)
    }

    /// Build a match with explicit RNGs and let both players place their fleets.
    pub fn with_rngs(
        player1: Box<dyn Player>,
        player2: Box<dyn Player>,
        rngs: [SmallRng; 2],
    ) -> Result<Self, GameError> {
        let mut game = Match {
            players: [player1, player2],
            rngs,
            boards: [Board::new(), Board::new()],
            shots_taken: [ShotHistory::new(), ShotHistory::new()],
            turn: 0,
            last_actor: None,
        };
        for idx in 0..2 {
            game.place_fleet(idx)?;
        }
        Ok(game)
    }

    fn place_fleet(&mut self, idx: usize) -> Result<(), GameError> {
        let player = &mut self.players[idx];
        player
            .place_ships(&mut self.rngs[idx], &mut self.boards[idx], &FLEET)
            .map_err(|source| GameError::Placement {
                player: idx,
                source,
            })?;
        let ship_cells = self.boards[idx].ship_cells_remaining();
        if ship_cells != TOTAL_SHIP_CELLS {
            return Err(GameError::InvalidFleet {
                player: idx,
                ship_cells,
            });
        }
        log::info!(
            "{} placed {} ships ({} cells)",
            player.name(),
            FLEET.len(),
            ship_cells
        );
        Ok(())
    }

    /// `true` iff `coord` is on the grid and `player` has not fired at it yet.
    ///
    /// Panics if `player` is not 0 or 1.
    pub fn is_valid_shot(&self, player: usize, coord: Coord) -> bool {
        coord.in_bounds() && !self.shots_taken[player].contains(coord)
    }

    /// Play one shot for the player whose turn it is.
    ///
    /// The turn counter is left untouched when the shot ends the match.
    pub fn take_turn(&mut self) -> Result<TurnReport, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let player = self.current_player();
        let opponent = 1 - player;

        let mut attempts = 0;
        let target = loop {
            if attempts == MAX_TARGET_ATTEMPTS {
                return Err(GameError::TargetAttemptsExhausted { player, attempts });
            }
            attempts += 1;
            let candidate = self.players[player]
                .choose_target(&mut self.rngs[player])
                .ok_or(GameError::NoTarget { player })?;
            if self.is_valid_shot(player, candidate) {
                break candidate;
            }
            log::debug!(
                "{} proposed invalid target {}",
                self.players[player].name(),
                candidate
            );
        };

        let outcome = self.boards[opponent].receive_shot(target)?;
        self.shots_taken[player].record(target, outcome);
        self.players[player].record_shot(target, outcome);
        self.last_actor = Some(player);

        let game_over = self.is_game_over();
        log::debug!(
            "turn {}: {} fires at {}: {:?}",
            self.turn,
            self.players[player].name(),
            target,
            outcome
        );
        if game_over {
            log::info!(
                "{} wins after {} turns",
                self.players[player].name(),
                self.turn + 1
            );
        } else {
            self.turn += 1;
        }

        Ok(TurnReport {
            player,
            target,
            outcome,
            attempts,
            game_over,
        })
    }

    /// Play up to `turns` turns, stopping early when the match ends.
    pub fn advance(&mut self, turns: usize) -> Result<Vec<TurnReport>, GameError> {
        let mut reports = Vec::new();
        for _ in 0..turns {
            if self.is_game_over() {
                break;
            }
            reports.push(self.take_turn()?);
        }
        Ok(reports)
    }

    /// Play until one fleet is destroyed.
    pub fn play_full_game(&mut self) -> Result<MatchSummary, GameError> {
        while !self.is_game_over() {
            self.take_turn()?;
        }
        Ok(self.summary())
    }

    /// `true` iff either board has no ship cells left.
    pub fn is_game_over(&self) -> bool {
        self.boards.iter().any(Board::all_sunk)
    }

    /// Winner derived from the boards: the player whose opponent has no ships left.
    pub fn winner(&self) -> Option<usize> {
        (0..2).find(|&idx| self.boards[1 - idx].all_sunk())
    }

    /// Player whose turn it is (or, after the last shot, who fired it).
    pub fn current_player(&self) -> usize {
        self.turn % 2
    }

    /// Player who fired the most recent shot.
    pub fn last_actor(&self) -> Option<usize> {
        self.last_actor
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn board(&self, player: usize) -> &Board {
        &self.boards[player]
    }

    pub fn player_name(&self, player: usize) -> &str {
        self.players[player].name()
    }

    /// Shots fired by `player`, in order.
    pub fn shots(&self, player: usize) -> &[ShotRecord] {
        self.shots_taken[player].records()
    }

    pub fn summary(&self) -> MatchSummary {
        let winner = self.winner();
        MatchSummary {
            players: [
                String::from(self.player_name(0)),
                String::from(self.player_name(1)),
            ],
            winner,
            winner_name: winner.map(|idx| String::from(self.player_name(idx))),
            turns: self.shots_taken[0].len() + self.shots_taken[1].len(),
            shots: [self.shots_taken[0].len(), self.shots_taken[1].len()],
            hits: [self.shots_taken[0].hits(), self.shots_taken[1].hits()],
        }
    }
}
