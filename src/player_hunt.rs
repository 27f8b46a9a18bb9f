//! Hunt/target agent.
//!
//! While hunting it fires at random unshot cells. The first hit switches it
//! to targeting: it walks along the suspected ship axis from the latest hit,
//! flips direction and restarts from the first hit when the walk runs out,
//! and probes random neighbours of its hits when it has no axis yet. A miss
//! after the tracked ship's whole perimeter has been fired at counts as a
//! sink and sends it back to hunting.

use alloc::{string::String, vec::Vec};
use rand::{rngs::SmallRng, seq::SliceRandom, Rng};

use crate::{
    board::{Board, PlacementRule},
    common::{BoardError, Coord, Direction, ShotOutcome},
    config::{BOARD_SIZE, MAX_HUNT_SAMPLES},
    history::ShotHistory,
    player::Player,
};

const GRID: usize = BOARD_SIZE as usize;

/// Search phase of a [`HuntTargetPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hunting,
    Targeting,
}

pub struct HuntTargetPlayer {
    name: String,
    history: ShotHistory,
    mode: Mode,
    hit_locations: Vec<Coord>,
    last_hit: Option<Coord>,
    direction: Option<Direction>,
}

impl HuntTargetPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            history: ShotHistory::new(),
            mode: Mode::Hunting,
            hit_locations: Vec::new(),
            last_hit: None,
            direction: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Hits on the ship currently being tracked, oldest first.
    pub fn hit_locations(&self) -> &[Coord] {
        &self.hit_locations
    }

    pub fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    fn unshot(&self, coord: Coord) -> bool {
        !self.history.contains(coord)
    }

    /// Random unshot cell; falls back to a row-major scan once sampling has
    /// been unlucky for too long.
    fn hunt(&self, rng: &mut SmallRng) -> Option<Coord> {
        for _ in 0..MAX_HUNT_SAMPLES {
            let c = Coord::new(rng.random_range(0..GRID), rng.random_range(0..GRID));
            if self.unshot(c) {
                return Some(c);
            }
        }
        self.history.first_unshot()
    }

    fn target(&mut self, rng: &mut SmallRng) -> Option<Coord> {
        if let (Some(last), Some(dir)) = (self.last_hit, self.direction) {
            if let Some(next) = last.step(dir).filter(|&c| self.unshot(c)) {
                log::trace!("{}: continuing {:?} from {}", self.name, dir, last);
                return Some(next);
            }

            let reversed = dir.reversed();
            self.direction = Some(reversed);
            if let Some(&first) = self.hit_locations.first() {
                if let Some(next) = first.step(reversed).filter(|&c| self.unshot(c)) {
                    log::trace!("{}: reversing to {:?} from {}", self.name, reversed, first);
                    return Some(next);
                }
            }
        }

        let anchor = self
            .hit_locations
            .iter()
            .rev()
            .copied()
            .find(|h| h.neighbors().any(|n| self.unshot(n)));
        if let Some(anchor) = anchor {
            let mut dirs = Direction::ALL;
            dirs.shuffle(rng);
            for dir in dirs {
                if let Some(next) = anchor.step(dir).filter(|&c| self.unshot(c)) {
                    log::trace!("{}: probing {:?} from {}", self.name, dir, anchor);
                    self.direction = Some(dir);
                    return Some(next);
                }
            }
        }

        log::trace!("{}: no candidate around tracked hits, hunting", self.name);
        self.hunt(rng)
    }

    /// `true` when no tracked hit has an unshot in-bounds neighbour.
    pub fn is_ship_sunk(&self) -> bool {
        self.hit_locations
            .iter()
            .all(|h| h.neighbors().all(|n| !self.unshot(n)))
    }

    fn reset_to_hunting(&mut self) {
        log::debug!(
            "{}: ship at {:?} considered sunk, back to hunting",
            self.name,
            self.hit_locations
        );
        self.mode = Mode::Hunting;
        self.hit_locations.clear();
        self.last_hit = None;
        self.direction = None;
    }
}

impl Player for HuntTargetPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    /// Random placement that keeps an orthogonal one-cell gap between ships.
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[usize],
    ) -> Result<(), BoardError> {
        board.place_fleet(rng, fleet, PlacementRule::Buffered)
    }

    fn choose_target(&mut self, rng: &mut SmallRng) -> Option<Coord> {
        match self.mode {
            Mode::Hunting => self.hunt(rng),
            Mode::Targeting => self.target(rng),
        }
    }

    fn record_shot(&mut self, target: Coord, outcome: ShotOutcome) {
        self.history.record(target, outcome);
        match outcome {
            ShotOutcome::Hit => {
                if self.mode == Mode::Hunting {
                    log::debug!("{}: hit at {}, targeting", self.name, target);
                }
                self.mode = Mode::Targeting;
                self.hit_locations.push(target);
                self.last_hit = Some(target);
            }
            ShotOutcome::Miss if self.mode == Mode::Targeting => {
                if self.is_ship_sunk() {
                    self.reset_to_hunting();
                }
            }
            ShotOutcome::Miss => {}
        }
    }

    fn history(&self) -> &ShotHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(99)
    }

    #[test]
    fn starts_hunting_and_never_repeats() {
        let mut rng = rng();
        let mut p = HuntTargetPlayer::new("Player");
        assert_eq!(p.mode(), Mode::Hunting);
        for _ in 0..100 {
            let c = p.choose_target(&mut rng).unwrap();
            assert!(!p.history().contains(c));
            p.record_shot(c, ShotOutcome::Miss);
        }
        assert_eq!(p.choose_target(&mut rng), None);
    }

    #[test]
    fn hit_enters_targeting_and_probes_neighbour() {
        let mut rng = rng();
        let mut p = HuntTargetPlayer::new("Player");
        p.record_shot(Coord::new(5, 5), ShotOutcome::Hit);
        assert_eq!(p.mode(), Mode::Targeting);
        assert_eq!(p.last_hit(), Some(Coord::new(5, 5)));

        let next = p.choose_target(&mut rng).unwrap();
        let dir = p.direction().unwrap();
        assert_eq!(Coord::new(5, 5).step(dir), Some(next));
    }

    #[test]
    fn continues_along_axis_then_reverses() {
        let mut rng = rng();
        let mut p = HuntTargetPlayer::new("Player");
        p.record_shot(Coord::new(4, 4), ShotOutcome::Hit);
        // force a known axis by exhausting the vertical neighbours first
        p.record_shot(Coord::new(3, 4), ShotOutcome::Miss);
        p.record_shot(Coord::new(5, 4), ShotOutcome::Miss);

        let probe = p.choose_target(&mut rng).unwrap();
        assert!(probe == Coord::new(4, 5) || probe == Coord::new(4, 3));
        p.record_shot(probe, ShotOutcome::Hit);
        let dir = p.direction().unwrap();

        // keeps walking the same way from the newest hit
        let ahead = probe.step(dir).unwrap();
        assert_eq!(p.choose_target(&mut rng), Some(ahead));
        p.record_shot(ahead, ShotOutcome::Miss);

        // walk blocked: flip and continue from the first hit
        let behind = Coord::new(4, 4).step(dir.reversed()).unwrap();
        assert_eq!(p.choose_target(&mut rng), Some(behind));
        assert_eq!(p.direction(), Some(dir.reversed()));
    }

    #[test]
    fn perimeter_exhausted_miss_resets_to_hunting() {
        let mut p = HuntTargetPlayer::new("Player");
        for c in [(2, 3), (4, 3), (2, 4), (4, 4)] {
            p.record_shot(c.into(), ShotOutcome::Miss);
        }
        p.record_shot(Coord::new(3, 3), ShotOutcome::Hit);
        p.record_shot(Coord::new(3, 4), ShotOutcome::Hit);
        assert_eq!(p.mode(), Mode::Targeting);
        assert_eq!(p.hit_locations(), &[Coord::new(3, 3), Coord::new(3, 4)]);

        p.record_shot(Coord::new(3, 5), ShotOutcome::Miss);
        assert_eq!(p.mode(), Mode::Targeting);
        p.record_shot(Coord::new(3, 2), ShotOutcome::Miss);
        assert_eq!(p.mode(), Mode::Hunting);
        assert!(p.hit_locations().is_empty());
        assert_eq!(p.last_hit(), None);
        assert_eq!(p.direction(), None);
    }

    #[test]
    fn miss_while_hunting_only_touches_history() {
        let mut p = HuntTargetPlayer::new("Player");
        p.record_shot(Coord::new(0, 0), ShotOutcome::Miss);
        assert_eq!(p.mode(), Mode::Hunting);
        assert!(p.hit_locations().is_empty());
        assert_eq!(p.history().len(), 1);
    }

    #[test]
    fn falls_back_to_hunting_without_changing_mode() {
        let mut rng = rng();
        let mut p = HuntTargetPlayer::new("Player");
        // corner hit whose two neighbours were already shot
        p.record_shot(Coord::new(0, 1), ShotOutcome::Miss);
        p.record_shot(Coord::new(1, 0), ShotOutcome::Miss);
        p.record_shot(Coord::new(0, 0), ShotOutcome::Hit);
        assert!(p.is_ship_sunk());

        let c = p.choose_target(&mut rng).unwrap();
        assert!(!p.history().contains(c));
        assert_eq!(p.mode(), Mode::Targeting);

        p.record_shot(c, ShotOutcome::Miss);
        assert_eq!(p.mode(), Mode::Hunting);
    }

    #[test]
    fn sunk_when_nothing_tracked() {
        let p = HuntTargetPlayer::new("Player");
        assert!(p.is_ship_sunk());
    }
}
