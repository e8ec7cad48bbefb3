//! Search module for the Isolation AI
//!
//! Contains:
//! - The deadline clock polled at every node
//! - Depth-limited minimax
//! - Minimax with alpha-beta pruning
//!
//! Both searches are plain recursions over freshly forecast boards. Running
//! out of time unwinds the whole recursion with [`Error::Cancelled`]; the
//! caller keeps whatever the last completed search returned.

pub mod alphabeta;
pub mod clock;
pub mod minimax;

pub use clock::{Deadline, DeadlineClock};

use crate::board::{GameBoard, Player, Pos};
use crate::error::{Error, Result};
use crate::eval::{Heuristic, Score};

/// Default remaining time (ms) below which a search aborts
pub const DEFAULT_TIMEOUT_THRESHOLD_MS: f64 = 10.0;

/// Best score found for a subtree and the root move that leads to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: Score,
    /// `None` when the side to move had no legal move or every move loses
    pub best_move: Option<Pos>,
}

impl SearchResult {
    #[inline]
    pub fn new(score: Score, best_move: Option<Pos>) -> Self {
        Self { score, best_move }
    }

    /// Result for a node whose mover is stuck: the mover has lost.
    #[inline]
    pub fn stuck(maximizing: bool) -> Self {
        let score = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        Self::new(score, None)
    }

    /// Whether the score is a forced win or loss
    #[inline]
    pub fn is_forced(&self) -> bool {
        self.score.is_infinite()
    }
}

/// Running best over the children of one node.
///
/// Comparisons are strict, so the first move reaching the best score is
/// kept. A node whose every move scores the mover's losing infinity never
/// beats the starting bound and reports no move.
#[derive(Debug, Clone, Copy)]
struct Best {
    maximizing: bool,
    result: SearchResult,
}

impl Best {
    #[inline]
    fn new(maximizing: bool) -> Self {
        Self {
            maximizing,
            result: SearchResult::stuck(maximizing),
        }
    }

    #[inline]
    fn offer(&mut self, score: Score, mv: Pos) {
        let better = if self.maximizing {
            score > self.result.score
        } else {
            score < self.result.score
        };
        if better {
            self.result = SearchResult::new(score, Some(mv));
        }
    }

    /// A forced result in the mover's favour ends the node
    #[inline]
    fn is_decisive(&self, score: Score) -> bool {
        if self.maximizing {
            score == f64::INFINITY
        } else {
            score == f64::NEG_INFINITY
        }
    }

    #[inline]
    fn score(&self) -> Score {
        self.result.score
    }
}

/// Per-invocation search state.
///
/// Scores are always taken from `player`'s point of view: the maximizing
/// layers are the ones where `player` is on move at the root parity.
pub struct Searcher<'a, H, C> {
    heuristic: &'a H,
    clock: &'a C,
    player: Player,
    timeout_threshold_ms: f64,
    nodes: u64,
}

impl<'a, H, C: DeadlineClock> Searcher<'a, H, C> {
    pub fn new(heuristic: &'a H, clock: &'a C, player: Player, timeout_threshold_ms: f64) -> Self {
        Self {
            heuristic,
            clock,
            player,
            timeout_threshold_ms,
            nodes: 0,
        }
    }

    /// Nodes entered so far (one per recursive call)
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Poll the clock; called first thing at every node.
    #[inline]
    fn enter_node(&mut self) -> Result<()> {
        if self.clock.time_left() < self.timeout_threshold_ms {
            return Err(Error::Cancelled);
        }
        self.nodes += 1;
        Ok(())
    }

    #[inline]
    fn evaluate<B: GameBoard>(&self, board: &B) -> Score
    where
        H: Heuristic<B>,
    {
        self.heuristic.evaluate(board, self.player)
    }
}
