//! Error types for the Isolation engine

use thiserror::Error;

/// Errors produced by the engine.
///
/// `Cancelled` is the only error raised while a search is running; it is
/// recovered by the deepening controller and never escapes
/// [`AIEngine::get_move_with_stats`](crate::AIEngine::get_move_with_stats).
/// Every other variant is a construction error reported before any search
/// starts.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("search cancelled: remaining time fell below the threshold")]
    Cancelled,

    #[error("unknown search algorithm '{0}' (expected 'minimax' or 'alphabeta')")]
    UnknownAlgorithm(String),

    #[error("unknown evaluator '{0}'")]
    UnknownEvaluator(String),

    #[error("timeout threshold {0}ms must be positive and finite")]
    InvalidThreshold(f64),

    #[error("fixed search depth must be at least 1")]
    InvalidDepth,

    #[error("invalid board dimensions {height}x{width} (each side must be 1..=16)")]
    InvalidDimensions { height: u8, width: u8 },
}

/// Crate result alias
pub type Result<T> = std::result::Result<T, Error>;
