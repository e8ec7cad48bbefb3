//! Isolation AI engine
//!
//! A time-bounded game-tree search engine for Isolation, the two-player grid
//! game where each player moves a token by knight jumps onto unvisited,
//! unblocked cells and a player with no legal move loses.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: The board contract the search consumes, plus a bitboard implementation
//! - [`eval`]: Heuristic evaluators (mobility, centrality, jump chains)
//! - [`search`]: Minimax and alpha-beta over any board, with a polled deadline
//! - [`engine`]: Deepening controller that turns a deadline into a move
//! - [`config`]: Search options
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use isolation::{AIEngine, Board, Deadline, GameBoard, Pos, SearchConfig};
//!
//! let mut board = Board::new(7, 7).unwrap();
//! board.apply_move(Pos::new(3, 3));
//! board.apply_move(Pos::new(0, 0));
//!
//! let mut engine = AIEngine::new(SearchConfig::default()).unwrap();
//! let legal = board.legal_moves(board.active_player());
//! if let Some(pos) = engine.get_move(&board, &legal, &Deadline::from_millis(200)) {
//!     board.apply_move(pos);
//!     println!("AI plays at {pos}");
//! }
//! ```
//!
//! # Search Order
//!
//! 1. No legal move: report the no-move sentinel
//! 2. First ply: play the center
//! 3. Iterative deepening until a forced result or the deadline

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, GameBoard, Player, Pos};
pub use config::{Algorithm, SearchConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{Error, Result};
pub use eval::{Evaluator, Heuristic, Score};
pub use search::{Deadline, DeadlineClock, SearchResult, Searcher};
