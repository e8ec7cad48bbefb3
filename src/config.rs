//! Search configuration
//!
//! # Example
//!
//! ```
//! use isolation::config::{Algorithm, SearchConfig};
//! use isolation::eval::Evaluator;
//!
//! let config = SearchConfig::from_names("alphabeta", "composite")
//!     .unwrap()
//!     .with_timeout_threshold(15.0);
//! assert_eq!(config.algorithm, Algorithm::AlphaBeta);
//! assert_eq!(config.evaluator, Evaluator::Composite);
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::eval::Evaluator;
use crate::search::DEFAULT_TIMEOUT_THRESHOLD_MS;

/// Default fixed depth for non-iterative search
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

/// Tree search algorithm driven by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Minimax, Algorithm::AlphaBeta];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha_beta" | "alpha-beta" => Ok(Algorithm::AlphaBeta),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Options recognised by [`AIEngine`](crate::engine::AIEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Plies searched when `iterative` is off
    pub search_depth: u32,
    /// Deepen from depth 1 until a forced result or the deadline
    pub iterative: bool,
    pub algorithm: Algorithm,
    pub evaluator: Evaluator,
    /// Remaining time (ms) below which the search gives up
    pub timeout_threshold_ms: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            iterative: true,
            algorithm: Algorithm::default(),
            evaluator: Evaluator::default(),
            timeout_threshold_ms: DEFAULT_TIMEOUT_THRESHOLD_MS,
        }
    }
}

impl SearchConfig {
    /// Default options with algorithm and evaluator chosen by name.
    pub fn from_names(algorithm: &str, evaluator: &str) -> Result<Self> {
        Ok(Self {
            algorithm: algorithm.parse()?,
            evaluator: evaluator.parse()?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.search_depth = depth;
        self
    }

    #[must_use]
    pub fn with_iterative(mut self, iterative: bool) -> Self {
        self.iterative = iterative;
        self
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    #[must_use]
    pub fn with_timeout_threshold(mut self, ms: f64) -> Self {
        self.timeout_threshold_ms = ms;
        self
    }

    /// Reject a non-positive threshold, and a zero depth in fixed-depth mode.
    pub fn validate(&self) -> Result<()> {
        if !self.timeout_threshold_ms.is_finite() || self.timeout_threshold_ms <= 0.0 {
            return Err(Error::InvalidThreshold(self.timeout_threshold_ms));
        }
        if !self.iterative && self.search_depth == 0 {
            return Err(Error::InvalidDepth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.search_depth, 3);
        assert!(config.iterative);
        assert_eq!(config.algorithm, Algorithm::Minimax);
        assert_eq!(config.evaluator, Evaluator::SumOfChains);
        assert_eq!(config.timeout_threshold_ms, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!("minimax".parse::<Algorithm>(), Ok(Algorithm::Minimax));
        assert_eq!("AlphaBeta".parse::<Algorithm>(), Ok(Algorithm::AlphaBeta));
        assert_eq!("alpha_beta".parse::<Algorithm>(), Ok(Algorithm::AlphaBeta));
        assert_eq!(
            "negamax".parse::<Algorithm>(),
            Err(Error::UnknownAlgorithm("negamax".to_string()))
        );
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_from_names() {
        let config = SearchConfig::from_names("alphabeta", "mobility").unwrap();
        assert_eq!(config.algorithm, Algorithm::AlphaBeta);
        assert_eq!(config.evaluator, Evaluator::Mobility);
        assert_eq!(config.search_depth, DEFAULT_SEARCH_DEPTH);

        assert_eq!(
            SearchConfig::from_names("greedy", "mobility"),
            Err(Error::UnknownAlgorithm("greedy".to_string()))
        );
        assert_eq!(
            SearchConfig::from_names("minimax", "random"),
            Err(Error::UnknownEvaluator("random".to_string()))
        );
    }

    #[test]
    fn test_validate() {
        let config = SearchConfig::default();
        assert_eq!(
            config.with_timeout_threshold(0.0).validate(),
            Err(Error::InvalidThreshold(0.0))
        );
        assert!(config.with_timeout_threshold(f64::NAN).validate().is_err());
        assert_eq!(
            config.with_iterative(false).with_depth(0).validate(),
            Err(Error::InvalidDepth)
        );
        // Depth is ignored while deepening
        assert!(config.with_depth(0).validate().is_ok());
    }
}
