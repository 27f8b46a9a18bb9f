use alloc::string::String;
use rand::rngs::SmallRng;

use crate::{
    board::{Board, PlacementRule},
    common::{BoardError, Coord, ShotOutcome},
    history::ShotHistory,
    player::Player,
};

/// Reference opponent: random touching placement and a row-major sweep.
pub struct BaselinePlayer {
    name: String,
    history: ShotHistory,
}

impl BaselinePlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            history: ShotHistory::new(),
        }
    }
}

impl Player for BaselinePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[usize],
    ) -> Result<(), BoardError> {
        board.place_fleet(rng, fleet, PlacementRule::Touching)
    }

    /// Top-left-most cell not yet fired at.
    fn choose_target(&mut self, _rng: &mut SmallRng) -> Option<Coord> {
        self.history.first_unshot()
    }

    fn record_shot(&mut self, target: Coord, outcome: ShotOutcome) {
        self.history.record(target, outcome);
    }

    fn history(&self) -> &ShotHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn sweeps_row_major() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut p = BaselinePlayer::new("Default AI");
        assert_eq!(p.choose_target(&mut rng), Some(Coord::new(0, 0)));
        p.record_shot(Coord::new(0, 0), ShotOutcome::Miss);
        assert_eq!(p.choose_target(&mut rng), Some(Coord::new(0, 1)));
    }

    #[test]
    fn wraps_to_next_row() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut p = BaselinePlayer::new("Default AI");
        for col in 0..10 {
            p.record_shot(Coord::new(0, col), ShotOutcome::Miss);
        }
        assert_eq!(p.choose_target(&mut rng), Some(Coord::new(1, 0)));
    }

    #[test]
    fn exhausted_grid_has_no_target() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut p = BaselinePlayer::new("Default AI");
        for c in Coord::all() {
            p.record_shot(c, ShotOutcome::Miss);
        }
        assert!(p.history().is_exhausted());
        assert_eq!(p.choose_target(&mut rng), None);
    }
}
