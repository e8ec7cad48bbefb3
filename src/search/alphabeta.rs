//! Minimax with alpha-beta pruning
//!
//! Fail-soft: a cut returns the score of the child that caused it, which may
//! lie outside the window. Moves are tried in enumeration order with no
//! reordering, so ties resolve exactly as in plain minimax and the root score
//! matches [`Searcher::minimax`] for the same depth.
//!
//! # Example
//!
//! ```
//! use isolation::board::{Board, GameBoard, Pos};
//! use isolation::eval::Evaluator;
//! use isolation::search::Searcher;
//!
//! let mut board = Board::new(5, 5).unwrap();
//! board.apply_move(Pos::new(2, 2));
//! board.apply_move(Pos::new(0, 0));
//!
//! let clock = || f64::MAX;
//! let mut searcher = Searcher::new(&Evaluator::Mobility, &clock, board.active_player(), 10.0);
//! let result = searcher
//!     .alphabeta(&board, 3, f64::NEG_INFINITY, f64::INFINITY, true)
//!     .unwrap();
//! assert!(result.best_move.is_some());
//! ```

use crate::board::GameBoard;
use crate::error::Result;
use crate::eval::{Heuristic, Score};

use super::{Best, DeadlineClock, SearchResult, Searcher};

impl<H, C: DeadlineClock> Searcher<'_, H, C> {
    /// Search `depth` plies below `board` inside the window `[alpha, beta]`.
    ///
    /// A maximizing node returns as soon as a child reaches `beta`, a
    /// minimizing node as soon as one falls to `alpha`. The window passed to
    /// each child is narrowed by the best score seen so far at this node.
    /// Root calls use `(-inf, +inf)`.
    pub fn alphabeta<B: GameBoard>(
        &mut self,
        board: &B,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<SearchResult>
    where
        H: Heuristic<B>,
    {
        self.enter_node()?;

        let moves = board.legal_moves(board.active_player());
        if moves.is_empty() {
            return Ok(SearchResult::stuck(maximizing));
        }

        let mut best = Best::new(maximizing);
        for mv in moves {
            let child = board.forecast(mv);
            let score = if depth <= 1 {
                self.evaluate(&child)
            } else {
                self.alphabeta(&child, depth - 1, alpha, beta, !maximizing)?
                    .score
            };

            if maximizing {
                if score >= beta {
                    return Ok(SearchResult::new(score, Some(mv)));
                }
                best.offer(score, mv);
                alpha = alpha.max(best.score());
            } else {
                if score <= alpha {
                    return Ok(SearchResult::new(score, Some(mv)));
                }
                best.offer(score, mv);
                beta = beta.min(best.score());
            }
        }
        Ok(best.result)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::board::{Player, Pos};
    use crate::error::Error;
    use crate::eval::Evaluator;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn test_stuck_mover_loses() {
        let board = stuck();
        let h = Evaluator::Mobility;
        let mut searcher = Searcher::new(&h, &unlimited, Player::One, 10.0);
        assert_eq!(
            searcher.alphabeta(&board, 2, -INF, INF, true).unwrap(),
            SearchResult::new(-INF, None)
        );
        assert_eq!(
            searcher.alphabeta(&board, 2, -INF, INF, false).unwrap(),
            SearchResult::new(INF, None)
        );
    }

    #[test]
    fn test_single_winning_move() {
        let board = one_move_win();
        let h = Evaluator::default();
        for depth in 1..=3 {
            let mut searcher = Searcher::new(&h, &unlimited, Player::One, 10.0);
            let result = searcher.alphabeta(&board, depth, -INF, INF, true).unwrap();
            assert_eq!(result, SearchResult::new(INF, Some(Pos::new(1, 2))));
        }
    }

    #[test]
    fn test_matches_minimax() {
        let board = midgame();
        for evaluator in Evaluator::ALL {
            for depth in 1..=3 {
                let mut mm = Searcher::new(&evaluator, &unlimited, Player::One, 10.0);
                let mut ab = Searcher::new(&evaluator, &unlimited, Player::One, 10.0);
                let expected = mm.minimax(&board, depth, true).unwrap();
                let actual = ab.alphabeta(&board, depth, -INF, INF, true).unwrap();
                assert_eq!(actual.score, expected.score, "{evaluator} depth {depth}");
            }
        }
    }

    #[test]
    fn test_prunes_nodes() {
        let board = midgame();
        let h = Evaluator::Mobility;
        let mut mm = Searcher::new(&h, &unlimited, Player::One, 10.0);
        let mut ab = Searcher::new(&h, &unlimited, Player::One, 10.0);
        mm.minimax(&board, 3, true).unwrap();
        ab.alphabeta(&board, 3, -INF, INF, true).unwrap();
        assert!(ab.nodes() < mm.nodes(), "{} vs {}", ab.nodes(), mm.nodes());
    }

    #[test]
    fn test_cut_skips_remaining_children() {
        let board = midgame();
        assert!(board.legal_moves(Player::One).len() > 1);
        let first = board.legal_moves(Player::One)[0];

        // Minimizing node: the first child already falls to alpha
        let h = Counting::new(Constant(0.0));
        let mut searcher = Searcher::new(&h, &unlimited, Player::One, 10.0);
        let result = searcher.alphabeta(&board, 1, 5.0, INF, false).unwrap();
        assert_eq!(result, SearchResult::new(0.0, Some(first)));
        assert_eq!(h.calls(), 1);

        // Maximizing node: the first child already reaches beta
        let h = Counting::new(Constant(0.0));
        let mut searcher = Searcher::new(&h, &unlimited, Player::One, 10.0);
        let result = searcher.alphabeta(&board, 1, -INF, -5.0, true).unwrap();
        assert_eq!(result, SearchResult::new(0.0, Some(first)));
        assert_eq!(h.calls(), 1);
    }

    #[test]
    fn test_ties_keep_first_move() {
        let board = midgame();
        let first = board.legal_moves(Player::One)[0];
        let h = Constant(1.5);
        let mut searcher = Searcher::new(&h, &unlimited, Player::One, 10.0);
        let result = searcher.alphabeta(&board, 3, -INF, INF, true).unwrap();
        assert_eq!(result, SearchResult::new(1.5, Some(first)));
    }

    #[test]
    fn test_all_losing_moves_report_no_move() {
        let board = midgame();
        let h = Counting::new(Constant(-INF));
        let mut searcher = Searcher::new(&h, &unlimited, Player::One, 10.0);
        let result = searcher.alphabeta(&board, 1, -INF, INF, true).unwrap();
        assert_eq!(result, SearchResult::new(-INF, None));
        // No cut: every child was looked at before giving up
        assert_eq!(h.calls(), board.legal_moves(Player::One).len());
    }

    #[test]
    fn test_expired_clock_cancels() {
        let board = midgame();
        let h = Evaluator::Mobility;
        let clock = || 0.0;
        let mut searcher = Searcher::new(&h, &clock, Player::One, 10.0);
        assert_eq!(
            searcher.alphabeta(&board, 2, -INF, INF, true),
            Err(Error::Cancelled)
        );
    }
}
