use flotilla::{
    Board, CellState, GameEngine, Orientation, Owner, PlacementError, Ship, ShotResult,
    BOARD_SIZE, NUM_SHIPS, SHIP_SIZES, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_manual_place_derives_cell_states() {
    let mut engine = GameEngine::new();
    engine
        .place_ship(Owner::Player1, 0, 0, 0, Orientation::Horizontal)
        .unwrap();

    let board = engine.board();
    assert_eq!(board.cell(0, 0).unwrap(), CellState::Ship(Owner::Player1));
    assert_eq!(board.cell(0, 1).unwrap(), CellState::Ship(Owner::Player1));
    assert_eq!(board.cell(0, 2).unwrap(), CellState::Empty);
    assert_eq!(board.ship_map(Owner::Player1).count_ones(), SHIP_SIZES[0]);
    assert!(board.ship_map(Owner::Player2).is_empty());
}

#[test]
fn test_same_owner_overlap_rejected() {
    let mut engine = GameEngine::new();
    engine
        .place_ship(Owner::Player1, 0, 0, 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        engine
            .place_ship(Owner::Player1, 1, 0, 0, Orientation::Vertical)
            .unwrap_err(),
        PlacementError::Overlap
    );
}

#[test]
fn test_cross_owner_overlap_rejected() {
    let mut engine = GameEngine::new();
    engine
        .place_ship(Owner::Player1, 0, 0, 0, Orientation::Horizontal)
        .unwrap();
    // (0, 1) already holds a Player 1 ship cell on the shared board
    assert_eq!(
        engine
            .place_ship(Owner::Player2, 0, 0, 1, Orientation::Vertical)
            .unwrap_err(),
        PlacementError::Overlap
    );
}

#[test]
fn test_place_on_resolved_cell_rejected() {
    let mut engine = GameEngine::new();
    engine
        .place_ship(Owner::Player1, 0, 0, 0, Orientation::Horizontal)
        .unwrap();
    // Player 1 resolves (4,4) as a miss before Player 2's fleet is down
    let outcome = engine.submit_move(Owner::Player1, 4, 4).unwrap();
    assert_eq!(outcome.shot, ShotResult::Miss);

    // a ship over a missed cell could never be sunk
    assert_eq!(
        engine
            .place_ship(Owner::Player2, 0, 4, 4, Orientation::Horizontal)
            .unwrap_err(),
        PlacementError::ResolvedCell
    );
    assert!(engine.board().ship_map(Owner::Player2).is_empty());

    // random placement resamples past resolved cells as well
    let mut rng = SmallRng::seed_from_u64(13);
    for _ in 0..50 {
        let ship = engine
            .board()
            .random_placement(&mut rng, Owner::Player2, 5)
            .unwrap();
        assert!((ship.mask() & engine.board().resolved()).is_empty());
    }

    // an untouched row still accepts the ship
    engine
        .place_ship(Owner::Player2, 0, 5, 4, Orientation::Horizontal)
        .unwrap();
}

#[test]
fn test_ship_out_of_bounds_rejected() {
    let mut engine = GameEngine::new();
    // slot 4 is the length-5 ship; rows 4..9 run off the board
    assert_eq!(
        engine
            .place_ship(Owner::Player1, 4, 4, 0, Orientation::Vertical)
            .unwrap_err(),
        PlacementError::OutOfBounds
    );
    assert_eq!(
        engine
            .place_ship(Owner::Player1, 0, 0, 7, Orientation::Horizontal)
            .unwrap_err(),
        PlacementError::OutOfBounds
    );
}

#[test]
fn test_slot_reuse_and_bad_index_rejected() {
    let mut engine = GameEngine::new();
    engine
        .place_ship(Owner::Player1, 0, 0, 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        engine
            .place_ship(Owner::Player1, 0, 5, 5, Orientation::Horizontal)
            .unwrap_err(),
        PlacementError::AlreadyPlaced
    );
    assert_eq!(
        engine
            .place_ship(Owner::Player1, NUM_SHIPS, 5, 5, Orientation::Horizontal)
            .unwrap_err(),
        PlacementError::InvalidIndex
    );
}

#[test]
fn test_random_placement_avoids_occupied_cells() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);

    let mut expected = 0;
    for owner in Owner::ALL {
        for &size in SHIP_SIZES.iter() {
            let ship = board.random_placement(&mut rng, owner, size).unwrap();
            board.place(&ship).unwrap();
            expected += size;
        }
    }

    assert_eq!(board.occupied().count_ones(), expected);
    assert_eq!(expected, 2 * TOTAL_SHIP_CELLS);
    assert!(
        (board.ship_map(Owner::Player1) & board.ship_map(Owner::Player2)).is_empty(),
        "owner ship masks must be disjoint"
    );
}

#[test]
fn test_random_placement_reports_exhaustion() {
    let mut board = Board::new();
    // Single-cell blockers on every row at columns B/F and every column at
    // rows 2/6 leave no straight run of five cells anywhere.
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if c == 1 || c == 5 || r == 1 || r == 5 {
                let blocker = Ship::new(Owner::Player1, 1, Orientation::Horizontal, r, c).unwrap();
                board.place(&blocker).unwrap();
            }
        }
    }

    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(
        board
            .random_placement(&mut rng, Owner::Player2, 5)
            .unwrap_err(),
        PlacementError::Exhausted { size: 5 }
    );
}
