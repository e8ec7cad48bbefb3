//! Jump-chain connectivity metric
//!
//! Every knight jump from an origin spans a 2x3 (or 3x2) box together with
//! the origin. Starting at the jump destination, a knight can tour the
//! remaining cells of the 3x3 square that holds both cells, visiting up to
//! six more cells. The chain for a jump is that tour, expressed as offsets
//! from the origin. A position with long open chains can keep moving in a
//! tight corner.
//!
//! One tour is written out for the jump `(1, 2)`; the other seven are its
//! images under the dihedral group of the square, so each table is
//! the base table transformed by the map that carries `(1, 2)` onto the jump.

use crate::board::{GameBoard, Pos};

/// Longest possible chain: the jump itself plus six further cells
pub const MAX_CHAIN: u32 = 7;

/// Offsets from the origin, visited in order after the jump
pub type Chain = [(i32, i32); 6];

/// Jump delta with its chain.
///
/// Row `(1, 2)` is the base tour:
///
/// ```text
/// +---+---+---+
/// | 5 | 2 | 7 |     p = origin, 1 = jump destination,
/// +---+---+---+     2..7 = chain cells in order
/// | p | . | 4 |
/// +---+---+---+
/// | 3 | 6 | 1 |
/// +---+---+---+
/// ```
///
/// `(r, c) -> (r*a, c*b/2)` maps it onto `(a, b)` when `|a| == 1`, and
/// `(r, c) -> (c*a/2, r*b)` when `|a| == 2`.
pub const JUMP_CHAINS: [((i32, i32), Chain); 8] = [
    ((1, 2), [(-1, 1), (1, 0), (0, 2), (-1, 0), (1, 1), (-1, 2)]),
    ((-1, 2), [(1, 1), (-1, 0), (0, 2), (1, 0), (-1, 1), (1, 2)]),
    ((1, -2), [(-1, -1), (1, 0), (0, -2), (-1, 0), (1, -1), (-1, -2)]),
    ((-1, -2), [(1, -1), (-1, 0), (0, -2), (1, 0), (-1, -1), (1, -2)]),
    ((2, 1), [(1, -1), (0, 1), (2, 0), (0, -1), (1, 1), (2, -1)]),
    ((2, -1), [(1, 1), (0, -1), (2, 0), (0, 1), (1, -1), (2, 1)]),
    ((-2, 1), [(-1, -1), (0, 1), (-2, 0), (0, -1), (-1, 1), (-2, -1)]),
    ((-2, -1), [(-1, 1), (0, -1), (-2, 0), (0, 1), (-1, -1), (-2, 1)]),
];

/// Chain for a jump delta, `None` if the delta is not a knight jump
#[inline]
pub fn chain_for(dr: i32, dc: i32) -> Option<&'static Chain> {
    JUMP_CHAINS
        .iter()
        .find(|(delta, _)| *delta == (dr, dc))
        .map(|(_, chain)| chain)
}

/// Chain cells reachable before the first blocked one (0..=6)
fn open_steps<B: GameBoard>(board: &B, origin: Pos, chain: &Chain) -> u32 {
    let (row, col) = (i32::from(origin.row), i32::from(origin.col));
    chain
        .iter()
        .take_while(|&&(dr, dc)| board.is_open(row + dr, col + dc))
        .count() as u32
}

/// Chain of the move `mv` taken from `origin`
#[inline]
fn chain_of_move(origin: Pos, mv: Pos) -> Option<&'static Chain> {
    let dr = i32::from(mv.row) - i32::from(origin.row);
    let dc = i32::from(mv.col) - i32::from(origin.col);
    chain_for(dr, dc)
}

/// Longest chain over all `moves` from `origin`, counting the jump itself.
///
/// Starts at 1 and returns [`MAX_CHAIN`] as soon as one chain is fully
/// open. Moves that are not knight jumps from `origin` are ignored.
pub fn longest_chain<B: GameBoard>(board: &B, origin: Pos, moves: &[Pos]) -> u32 {
    let mut longest = 1;
    for &mv in moves {
        let Some(chain) = chain_of_move(origin, mv) else {
            continue;
        };
        let run = 1 + open_steps(board, origin, chain);
        if run == MAX_CHAIN {
            return MAX_CHAIN;
        }
        longest = longest.max(run);
    }
    longest
}

/// Total open chain steps over all `moves` from `origin` (no early exit).
pub fn sum_of_chains<B: GameBoard>(board: &B, origin: Pos, moves: &[Pos]) -> u32 {
    moves
        .iter()
        .filter_map(|&mv| chain_of_move(origin, mv))
        .map(|chain| open_steps(board, origin, chain))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Player, KNIGHT_DELTAS};

    fn is_knight_jump(a: (i32, i32), b: (i32, i32)) -> bool {
        let (dr, dc) = ((a.0 - b.0).abs(), (a.1 - b.1).abs());
        (dr, dc) == (1, 2) || (dr, dc) == (2, 1)
    }

    /// The symmetry that carries (1, 2) onto `(a, b)`
    fn transform(a: i32, b: i32, (r, c): (i32, i32)) -> (i32, i32) {
        if a.abs() == 1 {
            (r * a, c * b / 2)
        } else {
            (c * a / 2, r * b)
        }
    }

    #[test]
    fn test_every_knight_delta_has_a_chain() {
        for (dr, dc) in KNIGHT_DELTAS {
            assert!(chain_for(dr, dc).is_some(), "missing chain for ({dr}, {dc})");
        }
        assert!(chain_for(1, 1).is_none());
        assert!(chain_for(0, 2).is_none());
    }

    #[test]
    fn test_tables_are_images_of_base_tour() {
        let (_, base) = JUMP_CHAINS[0];
        for ((a, b), chain) in JUMP_CHAINS {
            assert_eq!(transform(a, b, (1, 2)), (a, b));
            for (i, &offset) in base.iter().enumerate() {
                assert_eq!(transform(a, b, offset), chain[i], "jump ({a}, {b}) step {i}");
            }
        }
    }

    #[test]
    fn test_chains_are_knight_tours_of_the_square() {
        for (jump, chain) in JUMP_CHAINS {
            let mut prev = jump;
            let mut seen = vec![jump, (0, 0)];
            for &cell in &chain {
                assert!(is_knight_jump(prev, cell), "{prev:?} -> {cell:?}");
                assert!(!seen.contains(&cell));
                seen.push(cell);
                prev = cell;
            }
            // Origin, jump and six chain cells span exactly one 3x3 square
            let rows: Vec<i32> = seen.iter().map(|c| c.0).collect();
            let cols: Vec<i32> = seen.iter().map(|c| c.1).collect();
            let row_span = rows.iter().max().unwrap() - rows.iter().min().unwrap();
            let col_span = cols.iter().max().unwrap() - cols.iter().min().unwrap();
            assert_eq!((row_span, col_span), (2, 2));
        }
    }

    #[test]
    fn test_open_board_reaches_max_chain() {
        let mut board = Board::new(7, 7).unwrap();
        board.apply_move(Pos::new(3, 3));
        board.apply_move(Pos::new(0, 6));
        // (3, 3) is blocked by the token itself, which never lies on a chain
        let origin = Pos::new(3, 3);
        let moves = board.legal_moves(Player::One);
        assert_eq!(longest_chain(&board, origin, &moves), MAX_CHAIN);
        assert_eq!(sum_of_chains(&board, origin, &moves), 8 * 6);
    }

    #[test]
    fn test_chain_stops_at_first_blocked_cell() {
        let mut board = Board::new(7, 7).unwrap();
        // Base tour from (3, 3): jump (4, 5), then (2, 4), (4, 3), (3, 5) ...
        board.block_cell(Pos::new(3, 5));
        board.apply_move(Pos::new(3, 3));
        board.apply_move(Pos::new(0, 0));
        let origin = Pos::new(3, 3);

        let only = [Pos::new(4, 5)];
        assert_eq!(longest_chain(&board, origin, &only), 3);
        assert_eq!(sum_of_chains(&board, origin, &only), 2);
    }

    #[test]
    fn test_corner_chain() {
        let mut board = Board::new(7, 7).unwrap();
        board.apply_move(Pos::new(0, 0));
        board.apply_move(Pos::new(6, 6));
        let origin = Pos::new(0, 0);
        let moves = board.legal_moves(Player::One);
        // Jump (1, 2): first chain cell (-1, 1) is off the board
        // Jump (2, 1): (1, -1) is off the board
        assert_eq!(longest_chain(&board, origin, &moves), 1);
        assert_eq!(sum_of_chains(&board, origin, &moves), 0);
    }

    #[test]
    fn test_no_moves() {
        let board = Board::default();
        assert_eq!(longest_chain(&board, Pos::new(3, 3), &[]), 1);
        assert_eq!(sum_of_chains(&board, Pos::new(3, 3), &[]), 0);
    }

    #[test]
    fn test_non_knight_moves_ignored() {
        let board = Board::default();
        let moves = [Pos::new(3, 4), Pos::new(0, 0)];
        assert_eq!(longest_chain(&board, Pos::new(3, 3), &moves), 1);
        assert_eq!(sum_of_chains(&board, Pos::new(3, 3), &moves), 0);
    }
}
