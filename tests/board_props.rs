use battleship_arena::{
    BaselinePlayer, Board, Cell, Coord, HuntTargetPlayer, Player, BOARD_SIZE, FLEET,
    TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

/// Orthogonally connected groups of `Ship` cells.
fn ship_components(board: &Board) -> Vec<Vec<Coord>> {
    let mut seen = vec![vec![false; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    let mut components = Vec::new();
    for start in Coord::all() {
        if seen[start.row][start.col] || board.cell(start).unwrap() != Cell::Ship {
            continue;
        }
        let mut stack = vec![start];
        let mut group = Vec::new();
        seen[start.row][start.col] = true;
        while let Some(c) = stack.pop() {
            group.push(c);
            for n in c.neighbors() {
                if !seen[n.row][n.col] && board.cell(n).unwrap() == Cell::Ship {
                    seen[n.row][n.col] = true;
                    stack.push(n);
                }
            }
        }
        components.push(group);
    }
    components
}

fn is_straight(cells: &[Coord]) -> bool {
    cells.iter().all(|c| c.row == cells[0].row) || cells.iter().all(|c| c.col == cells[0].col)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn buffered_fleet_never_touches(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut player = HuntTargetPlayer::new("Player");
        player.place_ships(&mut rng, &mut board, &FLEET).unwrap();

        prop_assert_eq!(board.ship_cells_remaining(), TOTAL_SHIP_CELLS);
        // touching ships would merge into fewer, longer groups
        let components = ship_components(&board);
        prop_assert_eq!(components.len(), FLEET.len());
        let mut lengths: Vec<_> = components.iter().map(Vec::len).collect();
        lengths.sort_unstable();
        let mut expected = FLEET.to_vec();
        expected.sort_unstable();
        prop_assert_eq!(lengths, expected);
        for group in &components {
            prop_assert!(is_straight(group));
        }
    }

    #[test]
    fn touching_fleet_fills_manifest(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut player = BaselinePlayer::new("Default AI");
        player.place_ships(&mut rng, &mut board, &FLEET).unwrap();
        prop_assert_eq!(board.ship_cells_remaining(), TOTAL_SHIP_CELLS);
        prop_assert_eq!(board.count(Cell::Empty), 100 - TOTAL_SHIP_CELLS);
    }

    #[test]
    fn shots_only_move_forward(seed in any::<u64>(), shots in proptest::collection::vec((0usize..10, 0usize..10), 1..60)) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_fleet(&mut rng, &FLEET, battleship_arena::PlacementRule::Touching).unwrap();

        for (r, c) in shots {
            let coord = Coord::new(r, c);
            let before = board.cell(coord).unwrap();
            let res = board.receive_shot(coord);
            let after = board.cell(coord).unwrap();
            match before {
                Cell::Ship => prop_assert_eq!(after, Cell::Hit),
                Cell::Empty => prop_assert_eq!(after, Cell::Miss),
                Cell::Hit | Cell::Miss => {
                    prop_assert!(res.is_err());
                    prop_assert_eq!(after, before);
                }
            }
        }
        prop_assert_eq!(
            board.ship_cells_remaining() + board.count(Cell::Hit),
            TOTAL_SHIP_CELLS
        );
    }
}
