//! Depth-limited minimax
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
//! let result = searcher.minimax(&board, 2, true).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use crate::board::GameBoard;
use crate::error::Result;
use crate::eval::Heuristic;

use super::{Best, DeadlineClock, SearchResult, Searcher};

impl<H, C: DeadlineClock> Searcher<'_, H, C> {
    /// Search `depth` plies below `board` and return the best score with the
    /// move that reaches it.
    ///
    /// `maximizing` is true when the side to move is the searching player.
    /// Depth 1 scores each child with the heuristic. A child that forces the
    /// mover's win ends the node at once. Returns [`Error::Cancelled`] when
    /// the clock drops below the threshold at any node.
    ///
    /// [`Error::Cancelled`]: crate::error::Error::Cancelled
    pub fn minimax<B: GameBoard>(
        &mut self,
        board: &B,
        depth: u32,
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
                self.minimax(&child, depth - 1, !maximizing)?.score
            };

            if best.is_decisive(score) {
                return Ok(SearchResult::new(score, Some(mv)));
            }
            best.offer(score, mv);
        }
        Ok(best.result)
    }
}
