use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Fleet manifest: ship lengths in the order they are placed.
pub const FLEET: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random origins sampled per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Targets requested from an agent in a single turn before the turn fails.
pub const MAX_TARGET_ATTEMPTS: usize = 100;

/// Random cells a hunting agent samples before it falls back to a scan.
pub const MAX_HUNT_SAMPLES: usize = 1_000;

/// Name of the ship at `index` of the fleet, falling back to the first ship
/// type with the same length.
pub fn ship_name_for(index: usize, length: usize) -> &'static str {
    match SHIPS.get(index) {
        Some(def) if def.length() == length => def.name(),
        _ => SHIPS
            .iter()
            .find(|def| def.length() == length)
            .map(|def| def.name())
            .unwrap_or("Ship"),
    }
}
