use flotilla::{uniform_target, GameEngine, MoveError, Owner, BOARD_SIZE, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn random_engine(seed: u64) -> (GameEngine, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    engine.setup(&mut rng).unwrap();
    (engine, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every setup yields two disjoint full fleets with the fixed size
    /// multiset, each ship a straight on-board run.
    #[test]
    fn setup_invariants(seed in any::<u64>()) {
        let (engine, _) = random_engine(seed);
        let state = engine.state();

        prop_assert!((state.board.ships[0] & state.board.ships[1]).is_empty());
        for (fleet, ship_mask) in state.fleets.iter().zip(state.board.ships.iter()) {
            prop_assert_eq!(ship_mask.count_ones(), TOTAL_SHIP_CELLS);
            let mut sizes: Vec<usize> = fleet.ships.iter().flatten().map(|s| s.size).collect();
            sizes.sort_unstable();
            prop_assert_eq!(sizes, vec![2, 3, 3, 4, 5]);
            for ship in fleet.ships.iter().flatten() {
                match ship.orientation {
                    flotilla::Orientation::Horizontal => {
                        prop_assert!(ship.row < BOARD_SIZE);
                        prop_assert!(ship.col + ship.size <= BOARD_SIZE);
                    }
                    flotilla::Orientation::Vertical => {
                        prop_assert!(ship.col < BOARD_SIZE);
                        prop_assert!(ship.row + ship.size <= BOARD_SIZE);
                    }
                }
            }
        }
    }

    /// A game between two uniform-random players always terminates with a
    /// winner, never runs out of legal targets, and alternates turns until
    /// the winning move.
    #[test]
    fn random_game_terminates(seed in any::<u64>()) {
        let (mut engine, mut rng) = random_engine(seed);

        let mut moves = 0;
        while !engine.is_game_over() {
            // every resolved cell is consumed for both players, so the board
            // bounds the game length
            prop_assert!(moves < BOARD_SIZE * BOARD_SIZE);

            let actor = engine.current_player();
            let open = engine.legal_targets(actor);
            let (r, c) = uniform_target(open, &mut rng)
                .expect("a live game always has a legal target");
            let outcome = engine.submit_move(actor, r, c).unwrap();
            moves += 1;

            if !outcome.state.game_over {
                prop_assert_eq!(engine.current_player(), actor.opponent());
            } else {
                prop_assert_eq!(outcome.state.winner, Some(actor));
                prop_assert_eq!(engine.current_player(), actor);
            }
        }

        let winner = engine.winner().unwrap();
        prop_assert!(engine.fleet_sunk(winner.opponent()));
        prop_assert!(!engine.fleet_sunk(winner));
        // the loser's 17 ship cells are all hit; the winner's fleet is not
        // fully hit, so strictly fewer than 34 hits exist
        let hits = engine.board().hits().count_ones();
        prop_assert!(hits >= TOTAL_SHIP_CELLS && hits < 2 * TOTAL_SHIP_CELLS);
    }

    /// Rejected moves leave the published state byte-identical.
    #[test]
    fn rejected_moves_do_not_mutate(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let (mut engine, _) = random_engine(seed);
        let before = engine.state();

        prop_assert_eq!(
            engine.submit_move(Owner::Player2, row, col).unwrap_err(),
            MoveError::NotYourTurn
        );
        prop_assert_eq!(
            engine.submit_move(Owner::Player1, BOARD_SIZE, col).unwrap_err(),
            MoveError::OutOfBounds { row: BOARD_SIZE, col }
        );
        prop_assert_eq!(engine.state(), before);
        if let Err(err) = engine.submit_move(Owner::Player1, row, col) {
            // the only legal rejection on a fresh board is the actor's own ship
            prop_assert_eq!(err, MoveError::OwnShip);
            prop_assert_eq!(engine.state(), before);
        }
    }
}
