use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, Coord, ShotOutcome},
    history::ShotHistory,
};

/// Interface implemented by the different agents that can take part in a match.
///
/// The controller injects a seeded RNG into every call that needs randomness,
/// so a match replays exactly from its seed.
pub trait Player: Send {
    /// Display name used in status lines and logs.
    fn name(&self) -> &str;

    /// Place all ships of `fleet` onto the provided board.
    fn place_ships(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &[usize],
    ) -> Result<(), BoardError>;

    /// Choose the next coordinate to fire at, or `None` when nothing is left.
    fn choose_target(&mut self, rng: &mut SmallRng) -> Option<Coord>;

    /// Inform the player of the result of its last shot.
    fn record_shot(&mut self, target: Coord, outcome: ShotOutcome);

    /// Shots this player has recorded so far.
    fn history(&self) -> &ShotHistory;
}
