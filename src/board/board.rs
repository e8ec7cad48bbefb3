//! Isolation board with blocked-cell tracking

use std::fmt;

use super::bitboard::Bitboard;
use super::{GameBoard, Player, Pos, DEFAULT_SIDE, KNIGHT_DELTAS, MAX_SIDE};
use crate::error::{Error, Result};

/// Isolation game board.
///
/// Both players move a single token by knight jumps. Every cell a token has
/// visited stays blocked for the rest of the game, so the board only grows
/// more crowded. A player with no legal move on its turn loses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    height: u8,
    width: u8,
    /// Cells no token may enter (visited or pre-blocked)
    blocked: Bitboard,
    locations: [Option<Pos>; 2],
    active: Player,
    ply: u32,
}

impl Board {
    /// Create an empty board, `Player::One` to move.
    pub fn new(height: u8, width: u8) -> Result<Self> {
        if height == 0 || width == 0 || height > MAX_SIDE || width > MAX_SIDE {
            return Err(Error::InvalidDimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            blocked: Bitboard::new(),
            locations: [None, None],
            active: Player::One,
            ply: 0,
        })
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Check that a cell lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Check if a cell is blocked (visited or pre-blocked)
    #[inline]
    pub fn is_blocked(&self, pos: Pos) -> bool {
        self.blocked.get(pos)
    }

    /// Block a cell without playing a move. Used to set up positions.
    pub fn block_cell(&mut self, pos: Pos) {
        debug_assert!(self.contains(pos));
        self.blocked.set(pos);
    }

    /// Number of unblocked cells
    pub fn open_cells(&self) -> u32 {
        u32::from(self.height) * u32::from(self.width) - self.blocked.count()
    }

    /// Whether `mv` is a legal move for the active player
    pub fn is_legal(&self, mv: Pos) -> bool {
        self.legal_moves(self.active).contains(&mv)
    }

    /// Play `mv` for the active player.
    ///
    /// The caller is responsible for legality; the GUI and the search only
    /// ever pass moves taken from [`GameBoard::legal_moves`].
    pub fn apply_move(&mut self, mv: Pos) {
        debug_assert!(self.contains(mv) && !self.blocked.get(mv));
        self.blocked.set(mv);
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.opponent();
        self.ply += 1;
    }

    /// All open cells in row-major order
    fn open_positions(&self) -> Vec<Pos> {
        let mut cells = Vec::with_capacity(self.open_cells() as usize);
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Pos::new(row, col);
                if !self.blocked.get(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    /// Snapshot used when a game is restarted from a recorded history
    pub fn replay(height: u8, width: u8, moves: &[Pos]) -> Result<Self> {
        let mut board = Self::new(height, width)?;
        for &mv in moves {
            board.apply_move(mv);
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            height: DEFAULT_SIDE,
            width: DEFAULT_SIDE,
            blocked: Bitboard::new(),
            locations: [None, None],
            active: Player::One,
            ply: 0,
        }
    }
}

impl GameBoard for Board {
    #[inline]
    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self, player: Player) -> Vec<Pos> {
        let Some(from) = self.locations[player.index()] else {
            return self.open_positions();
        };

        KNIGHT_DELTAS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&p| self.contains(p) && !self.blocked.get(p))
            .collect()
    }

    #[inline]
    fn is_open(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 || row >= i32::from(self.height) || col >= i32::from(self.width) {
            return false;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pos = Pos::new(row as u8, col as u8);
        !self.blocked.get(pos)
    }

    fn forecast(&self, mv: Pos) -> Self {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    #[inline]
    fn location(&self, player: Player) -> Option<Pos> {
        self.locations[player.index()]
    }

    fn is_winner(&self, player: Player) -> bool {
        player != self.active && self.legal_moves(self.active).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves(self.active).is_empty()
    }

    #[inline]
    fn dimensions(&self) -> (u8, u8) {
        (self.height, self.width)
    }

    #[inline]
    fn ply_count(&self) -> u32 {
        self.ply
    }
}

impl fmt::Display for Board {
    /// One line per row: `1`/`2` for tokens, `-` for blocked cells,
    /// `.` for open cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Pos::new(row, col);
                let ch = if self.locations[0] == Some(pos) {
                    '1'
                } else if self.locations[1] == Some(pos) {
                    '2'
                } else if self.blocked.get(pos) {
                    '-'
                } else {
                    '.'
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
