//! Position evaluation for Isolation
//!
//! Contains:
//! - The [`Heuristic`] capability the search calls at its frontier
//! - The closed set of named [`Evaluator`] strategies
//! - The jump-chain connectivity metric

pub mod chains;
pub mod heuristic;

pub use chains::{longest_chain, sum_of_chains, MAX_CHAIN};
pub use heuristic::{centrality, mobility, Evaluator};

use crate::board::{GameBoard, Player};

/// Search score. `f64::INFINITY` is a forced win for the maximizing side,
/// `f64::NEG_INFINITY` a forced loss; never NaN.
pub type Score = f64;

/// Evaluation capability: score `board` from `player`'s point of view.
pub trait Heuristic<B: GameBoard> {
    fn evaluate(&self, board: &B, player: Player) -> Score;
}

impl<B: GameBoard, H: Heuristic<B> + ?Sized> Heuristic<B> for &H {
    #[inline]
    fn evaluate(&self, board: &B, player: Player) -> Score {
        (**self).evaluate(board, player)
    }
}
