//! Bitboard of blocked cells

use super::{Pos, TOTAL_CELLS};

/// Set of cells on a grid of up to 16x16, one 16-bit row per quarter word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: [u64; 4],
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { bits: [0; 4] }
    }

    #[inline]
    fn slot(pos: Pos) -> (usize, u64) {
        let idx = pos.to_index();
        debug_assert!(idx < TOTAL_CELLS);
        (idx / 64, 1u64 << (idx % 64))
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let (word, mask) = Self::slot(pos);
        self.bits[word] |= mask;
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let (word, mask) = Self::slot(pos);
        self.bits[word] & mask != 0
    }

    /// Number of cells in the set
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }
}
