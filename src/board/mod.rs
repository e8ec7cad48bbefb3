//! Board representation for Isolation
//!
//! The search core only talks to boards through the [`GameBoard`] trait.
//! [`Board`] is the concrete Isolation implementation used by the engine,
//! the GUI and the tests.

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Largest supported side length
pub const MAX_SIDE: u8 = 16;
pub const TOTAL_CELLS: usize = MAX_SIDE as usize * MAX_SIDE as usize; // 256

/// Default board side used by the reference game
pub const DEFAULT_SIDE: u8 = 7;

/// Knight jumps in the order legal moves are enumerated
pub const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => f.write_str("Player 1"),
            Player::Two => f.write_str("Player 2"),
        }
    }
}

/// Cell on the board, `(row, col)`
///
/// "No legal move" is expressed as `Option<Pos>::None` throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < MAX_SIDE && col < MAX_SIDE);
        Self { row, col }
    }

    /// Index into a `MAX_SIDE`-wide grid
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * MAX_SIDE as usize + self.col as usize
    }

    /// Cell reached by a signed offset, if it has non-negative coordinates
    /// inside the addressable grid. Board bounds are checked by the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = i32::from(self.row) + dr;
        let c = i32::from(self.col) + dc;
        if (0..i32::from(MAX_SIDE)).contains(&r) && (0..i32::from(MAX_SIDE)).contains(&c) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Manhattan distance between two cells
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rules-engine contract consumed by the evaluator and the search.
///
/// Every method is a pure query. The search never mutates a board: each
/// child position comes from [`GameBoard::forecast`], so sibling branches
/// never share state.
pub trait GameBoard: Clone {
    /// Player whose turn it is
    fn active_player(&self) -> Player;

    /// Legal destinations for `player`, in enumeration order (may be empty)
    fn legal_moves(&self, player: Player) -> Vec<Pos>;

    /// Whether `(row, col)` is on the board and unblocked, independent of
    /// whose turn it is. Off-board coordinates simply return `false`.
    fn is_open(&self, row: i32, col: i32) -> bool;

    /// New position with `mv` applied for the active player
    fn forecast(&self, mv: Pos) -> Self;

    /// Current cell of `player`, `None` before its first move
    fn location(&self, player: Player) -> Option<Pos>;

    /// `player` is not on move and the player on move is stuck
    fn is_winner(&self, player: Player) -> bool;

    /// `player` is on move and has no legal move
    fn is_loser(&self, player: Player) -> bool;

    /// `(height, width)`
    fn dimensions(&self) -> (u8, u8);

    /// Number of moves played so far
    fn ply_count(&self) -> u32;

    /// Center cell `(height / 2, width / 2)`
    fn center(&self) -> Pos {
        let (height, width) = self.dimensions();
        Pos::new(height / 2, width / 2)
    }
}
