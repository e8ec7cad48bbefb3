//! Property-based tests for search and evaluation invariants

use isolation::eval::{longest_chain, sum_of_chains, MAX_CHAIN};
use isolation::{AIEngine, Board, Evaluator, GameBoard, Pos, SearchConfig, Searcher};
use proptest::prelude::*;
use proptest::sample::Index;

const INF: f64 = f64::INFINITY;

fn unlimited() -> f64 {
    f64::MAX
}

/// Play the chosen moves from an empty board, stopping early if the mover is stuck
fn play(height: u8, width: u8, blocked: &[Index], choices: &[Index]) -> Board {
    let mut board = Board::new(height, width).unwrap();
    let cells: Vec<Pos> = (0..height)
        .flat_map(|r| (0..width).map(move |c| Pos::new(r, c)))
        .collect();
    for idx in blocked {
        board.block_cell(*idx.get(&cells));
    }
    for idx in choices {
        let moves = board.legal_moves(board.active_player());
        if moves.is_empty() {
            break;
        }
        board.apply_move(*idx.get(&moves));
    }
    board
}

// Random positions on small boards with a few pre-blocked cells
fn random_position() -> impl Strategy<Value = Board> {
    (
        4u8..=6,
        4u8..=6,
        prop::collection::vec(any::<Index>(), 0..4),
        prop::collection::vec(any::<Index>(), 2..10),
    )
        .prop_map(|(h, w, blocked, choices)| play(h, w, &blocked, &choices))
}

// Positions played until the mover has no move left
fn finished_position() -> impl Strategy<Value = Board> {
    (4u8..=5, prop::collection::vec(any::<Index>(), 40))
        .prop_map(|(side, choices)| play(side, side, &[], &choices))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_alphabeta_matches_minimax(board in random_position()) {
        let player = board.active_player();
        for evaluator in Evaluator::ALL {
            for depth in 1..=3 {
                let mut mm = Searcher::new(&evaluator, &unlimited, player, 10.0);
                let mut ab = Searcher::new(&evaluator, &unlimited, player, 10.0);
                let expected = mm.minimax(&board, depth, true).unwrap();
                let actual = ab.alphabeta(&board, depth, -INF, INF, true).unwrap();
                prop_assert_eq!(actual.score, expected.score,
                    "{} at depth {} on\n{}", evaluator, depth, board);
                prop_assert!(ab.nodes() <= mm.nodes());
            }
        }
    }

    #[test]
    fn test_stuck_mover_gets_absorbing_score(board in finished_position()) {
        let player = board.active_player();
        prop_assume!(board.legal_moves(player).is_empty());

        let h = Evaluator::default();
        let mut searcher = Searcher::new(&h, &unlimited, player, 10.0);
        for depth in 1..=3 {
            let max = searcher.minimax(&board, depth, true).unwrap();
            let min = searcher.minimax(&board, depth, false).unwrap();
            prop_assert_eq!((max.score, max.best_move), (-INF, None));
            prop_assert_eq!((min.score, min.best_move), (INF, None));

            let max = searcher.alphabeta(&board, depth, -INF, INF, true).unwrap();
            let min = searcher.alphabeta(&board, depth, -INF, INF, false).unwrap();
            prop_assert_eq!((max.score, max.best_move), (-INF, None));
            prop_assert_eq!((min.score, min.best_move), (INF, None));
        }
    }

    #[test]
    fn test_chain_metric_bounds(board in random_position()) {
        for player in [isolation::Player::One, isolation::Player::Two] {
            let Some(origin) = board.location(player) else { continue };
            let moves = board.legal_moves(player);
            let longest = longest_chain(&board, origin, &moves);
            let sum = sum_of_chains(&board, origin, &moves);

            prop_assert!((1..=MAX_CHAIN).contains(&longest));
            prop_assert!(sum <= 6 * moves.len() as u32);
            if !moves.is_empty() {
                prop_assert!(sum >= longest - 1);
            }

            // Zero exactly when no chain can take its first step
            let first_steps_blocked = moves.iter().all(|mv| {
                let dr = i32::from(mv.row) - i32::from(origin.row);
                let dc = i32::from(mv.col) - i32::from(origin.col);
                let (fr, fc) = isolation::eval::chains::chain_for(dr, dc).unwrap()[0];
                !board.is_open(i32::from(origin.row) + fr, i32::from(origin.col) + fc)
            });
            prop_assert_eq!(sum == 0, first_steps_blocked);
        }
    }

    #[test]
    fn test_engine_returns_legal_move(board in random_position()) {
        let legal = board.legal_moves(board.active_player());
        let config = SearchConfig::default().with_iterative(false).with_depth(2);
        let mut engine = AIEngine::new(config).unwrap();
        let result = engine.get_move_with_stats(&board, &legal, &unlimited);
        match result.best_move {
            Some(mv) => prop_assert!(legal.contains(&mv)),
            // Stuck, or every move loses by force
            None => prop_assert!(legal.is_empty() || result.score == -INF),
        }
    }

    #[test]
    fn test_forecast_leaves_parent_untouched(board in random_position()) {
        let before = board.clone();
        for mv in board.legal_moves(board.active_player()) {
            let child = board.forecast(mv);
            prop_assert_eq!(child.location(board.active_player()), Some(mv));
            prop_assert_eq!(child.ply_count(), board.ply_count() + 1);
        }
        prop_assert_eq!(board, before);
    }
}
