//! Main AI engine: the deepening controller
//!
//! Picks a move for the side to act. The engine tries, in order:
//!
//! 1. **No legal moves**: report the no-move result without searching
//! 2. **Opening**: on the first ply of the game, play the center cell
//! 3. **Search**: run the configured algorithm at depth 1, 2, 3, ... until a
//!    forced result, the deadline, or the board-size depth cap; or once at
//!    the fixed depth when deepening is off
//!
//! Only depths that completed are reported. When the deadline interrupts a
//! depth, its partial result is dropped and the previous depth's move is
//! returned. If not even depth 1 finished, the result is a forfeit. A
//! completed depth on which every move loses by force reports no move.
//!
//! # Example
//!
//! ```
//! use isolation::{AIEngine, Board, Deadline, GameBoard, Pos, SearchConfig};
//!
//! let mut board = Board::new(5, 5).unwrap();
//! board.apply_move(Pos::new(2, 2));
//! board.apply_move(Pos::new(0, 0));
//!
//! let mut engine = AIEngine::new(SearchConfig::default().with_iterative(false)).unwrap();
//! let legal = board.legal_moves(board.active_player());
//! let result = engine.get_move_with_stats(&board, &legal, &Deadline::from_millis(1_000));
//! println!("Best move: {:?} after {} nodes", result.best_move, result.nodes);
//! ```

use std::time::Instant;

use log::{debug, info, trace, warn};

use crate::board::{GameBoard, Pos};
use crate::config::{Algorithm, SearchConfig};
use crate::error::Result;
use crate::eval::{Evaluator, Heuristic, Score};
use crate::search::{DeadlineClock, SearchResult, Searcher};

/// How the engine arrived at its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// First ply of the game: center cell, no search
    Opening,
    /// The side to move is stuck
    NoLegalMoves,
    /// Result of the last completed search depth; no move when every
    /// move loses by force
    Search,
    /// The deadline fired before depth 1 completed
    Forfeit,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Chosen move; `None` is the no-move sentinel
    pub best_move: Option<Pos>,
    /// Score of the last completed depth, from the mover's point of view
    pub score: Score,
    pub search_type: SearchType,
    /// Deepest completed depth (0 when no search ran)
    pub depth: u32,
    /// Nodes entered across all depths, including an abandoned one
    pub nodes: u64,
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0.0,
            search_type: SearchType::Opening,
            depth: 0,
            nodes: 0,
            time_ms,
        }
    }

    #[inline]
    fn no_legal_moves(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: f64::NEG_INFINITY,
            search_type: SearchType::NoLegalMoves,
            depth: 0,
            nodes: 0,
            time_ms,
        }
    }

    #[inline]
    fn forfeit(nodes: u64, time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: f64::NEG_INFINITY,
            search_type: SearchType::Forfeit,
            depth: 0,
            nodes,
            time_ms,
        }
    }

    #[inline]
    fn searched(result: SearchResult, depth: u32, nodes: u64, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::Search,
            depth,
            nodes,
            time_ms,
        }
    }
}

/// Game-playing agent for Isolation.
///
/// Holds a validated [`SearchConfig`] and the heuristic applied at the search
/// frontier. The heuristic defaults to the configured [`Evaluator`]; any
/// other [`Heuristic`] can be plugged in with [`AIEngine::with_heuristic`].
///
/// A single engine runs one search at a time; `get_move` takes `&mut self`.
#[derive(Debug, Clone)]
pub struct AIEngine<H = Evaluator> {
    config: SearchConfig,
    heuristic: H,
    last_result: Option<MoveResult>,
}

impl AIEngine<Evaluator> {
    /// Engine using the configured evaluator.
    pub fn new(config: SearchConfig) -> Result<Self> {
        Self::with_heuristic(config, config.evaluator)
    }

    /// Swap in a new configuration, keeping the heuristic in sync with it.
    pub fn set_config(&mut self, config: SearchConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.heuristic = config.evaluator;
        Ok(())
    }
}

impl Default for AIEngine<Evaluator> {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            heuristic: Evaluator::default(),
            last_result: None,
        }
    }
}

impl<H> AIEngine<H> {
    /// Engine with a custom heuristic. `config.evaluator` is ignored.
    pub fn with_heuristic(config: SearchConfig, heuristic: H) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            heuristic,
            last_result: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Statistics of the previous `get_move` call
    #[must_use]
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }

    /// Best move for the side to act on `board`, or `None` when it has no
    /// move or the deadline left no time to finish even depth 1.
    pub fn get_move<B, C>(&mut self, board: &B, legal_moves: &[Pos], clock: &C) -> Option<Pos>
    where
        B: GameBoard,
        C: DeadlineClock,
        H: Heuristic<B>,
    {
        self.get_move_with_stats(board, legal_moves, clock).best_move
    }

    /// Best move with search statistics.
    ///
    /// `legal_moves` are the moves available to `board.active_player()`. The
    /// clock is polled at every node; the search gives up once it reports
    /// less than the configured threshold.
    pub fn get_move_with_stats<B, C>(
        &mut self,
        board: &B,
        legal_moves: &[Pos],
        clock: &C,
    ) -> MoveResult
    where
        B: GameBoard,
        C: DeadlineClock,
        H: Heuristic<B>,
    {
        let start = Instant::now();
        let result = self.choose(board, legal_moves, clock, start);
        self.last_result = Some(result);
        result
    }

    fn choose<B, C>(&self, board: &B, legal_moves: &[Pos], clock: &C, start: Instant) -> MoveResult
    where
        B: GameBoard,
        C: DeadlineClock,
        H: Heuristic<B>,
    {
        let elapsed = || start.elapsed().as_millis() as u64;

        if legal_moves.is_empty() {
            info!("no legal moves for {:?}", board.active_player());
            return MoveResult::no_legal_moves(elapsed());
        }

        if board.ply_count() == 0 {
            let center = board.center();
            if legal_moves.contains(&center) {
                info!("opening move at center {center}");
                return MoveResult::opening(center, elapsed());
            }
        }

        let mut searcher = Searcher::new(
            &self.heuristic,
            clock,
            board.active_player(),
            self.config.timeout_threshold_ms,
        );

        let depths = if self.config.iterative {
            let (height, width) = board.dimensions();
            1..=u32::from(height) * u32::from(width)
        } else {
            self.config.search_depth..=self.config.search_depth
        };

        let mut completed: Option<(SearchResult, u32)> = None;
        for depth in depths {
            match self.search_depth(&mut searcher, board, depth) {
                Ok(result) => {
                    debug!(
                        "depth {depth} complete: move {:?} score {} ({} nodes)",
                        result.best_move,
                        result.score,
                        searcher.nodes()
                    );
                    completed = Some((result, depth));
                    if result.is_forced() {
                        break;
                    }
                }
                Err(err) => {
                    trace!("depth {depth} abandoned: {err}");
                    break;
                }
            }
        }

        match completed {
            Some((result, depth)) => {
                if result.best_move.is_none() {
                    info!("every move loses by depth {depth}; no move to play");
                }
                MoveResult::searched(result, depth, searcher.nodes(), elapsed())
            }
            None => {
                warn!(
                    "deadline expired before depth 1 completed; forfeiting with {} legal moves",
                    legal_moves.len()
                );
                MoveResult::forfeit(searcher.nodes(), elapsed())
            }
        }
    }

    #[inline]
    fn search_depth<B, C>(
        &self,
        searcher: &mut Searcher<'_, H, C>,
        board: &B,
        depth: u32,
    ) -> Result<SearchResult>
    where
        B: GameBoard,
        C: DeadlineClock,
        H: Heuristic<B>,
    {
        match self.config.algorithm {
            Algorithm::Minimax => searcher.minimax(board, depth, true),
            Algorithm::AlphaBeta => {
                searcher.alphabeta(board, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }
}
