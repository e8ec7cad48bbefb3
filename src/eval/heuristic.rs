//! Heuristic evaluation functions for Isolation positions
//!
//! Signals, in order of precedence:
//! - Win/loss detection (absorbing, checked first)
//! - Mobility: legal move count differential
//! - Centrality: Manhattan distance to the center, scaled below one move
//! - Connectivity: jump-chain differential

use std::fmt;
use std::str::FromStr;

use crate::board::{GameBoard, Player, Pos};
use crate::error::Error;

use super::chains::{longest_chain, sum_of_chains};
use super::{Heuristic, Score};

/// Centrality is divided by this so it never outweighs one move
const CENTRALITY_SCALE: f64 = 10.0;

/// Chain tie-break is divided by this so it stays below centrality
const CHAIN_SCALE: f64 = 100.0;

/// Named evaluation strategies.
///
/// Each variant applies the same absorbing-state check before its own terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Evaluator {
    /// Move count differential only
    Mobility,
    /// Mobility, ties broken by distance to the center
    Centrality,
    /// Mobility, then centrality, then longest jump chain
    Composite,
    /// Longest jump chain differential alone
    LongestChain,
    /// Summed jump chain differential alone
    #[default]
    SumOfChains,
}

impl Evaluator {
    pub const ALL: [Evaluator; 5] = [
        Evaluator::Mobility,
        Evaluator::Centrality,
        Evaluator::Composite,
        Evaluator::LongestChain,
        Evaluator::SumOfChains,
    ];

    /// Configuration name of the strategy
    pub fn name(self) -> &'static str {
        match self {
            Evaluator::Mobility => "mobility",
            Evaluator::Centrality => "centrality",
            Evaluator::Composite => "composite",
            Evaluator::LongestChain => "longest_chain",
            Evaluator::SumOfChains => "sum_of_chains",
        }
    }

    /// Score for a position that is not decided yet
    fn positional<B: GameBoard>(self, board: &B, player: Player) -> Score {
        let opponent = player.opponent();
        let my_moves = board.legal_moves(player);
        let opp_moves = board.legal_moves(opponent);

        match self {
            Evaluator::LongestChain => {
                chain_differential(board, player, &my_moves, &opp_moves, longest_chain)
            }
            Evaluator::SumOfChains => {
                chain_differential(board, player, &my_moves, &opp_moves, sum_of_chains)
            }
            Evaluator::Mobility => mobility_of(&my_moves, &opp_moves),
            Evaluator::Centrality | Evaluator::Composite => {
                let moves = mobility_of(&my_moves, &opp_moves);
                if moves != 0.0 {
                    return moves;
                }
                let position = centrality(board, player);
                if position != 0.0 || self == Evaluator::Centrality {
                    return position;
                }
                chain_differential(board, player, &my_moves, &opp_moves, longest_chain)
                    / CHAIN_SCALE
            }
        }
    }
}

impl<B: GameBoard> Heuristic<B> for Evaluator {
    fn evaluate(&self, board: &B, player: Player) -> Score {
        if board.is_winner(player) {
            return f64::INFINITY;
        }
        if board.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        self.positional(board, player)
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Evaluator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Evaluator::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownEvaluator(s.to_string()))
    }
}

#[inline]
fn mobility_of(my_moves: &[Pos], opp_moves: &[Pos]) -> Score {
    my_moves.len() as f64 - opp_moves.len() as f64
}

/// Legal move count of `player` minus that of its opponent.
#[must_use]
pub fn mobility<B: GameBoard>(board: &B, player: Player) -> Score {
    mobility_of(
        &board.legal_moves(player),
        &board.legal_moves(player.opponent()),
    )
}

/// Opponent's distance to the center minus `player`'s, divided by 10.
///
/// Zero while either token is still off the board.
#[must_use]
pub fn centrality<B: GameBoard>(board: &B, player: Player) -> Score {
    let (Some(mine), Some(theirs)) = (board.location(player), board.location(player.opponent()))
    else {
        return 0.0;
    };
    let center = board.center();
    let my_dist = f64::from(mine.manhattan(center));
    let opp_dist = f64::from(theirs.manhattan(center));
    (opp_dist - my_dist) / CENTRALITY_SCALE
}

fn chain_differential<B: GameBoard>(
    board: &B,
    player: Player,
    my_moves: &[Pos],
    opp_moves: &[Pos],
    metric: fn(&B, Pos, &[Pos]) -> u32,
) -> Score {
    let run = |p: Player, moves: &[Pos]| -> f64 {
        match board.location(p) {
            Some(origin) => f64::from(metric(board, origin, moves)),
            // Not on the board yet: an empty chain set
            None => f64::from(metric(board, Pos::new(0, 0), &[])),
        }
    };
    run(player, my_moves) - run(player.opponent(), opp_moves)
}
