//! Bitboard iteration helpers.

use crate::game_state::chess_types::Square;

/// Index of the least significant set bit. Undefined for an empty board.
#[inline(always)]
pub fn bit_scan_forward(bb: u64) -> Square {
    bb.trailing_zeros() as Square
}

/// Pop the least significant bit from a bitboard and return its index.
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> Square {
    let sq = bit_scan_forward(*bb);
    *bb &= *bb - 1;
    sq
}

#[inline(always)]
pub const fn square_mask(square: Square) -> u64 {
    1u64 << square
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_lsb_walks_bits_low_to_high() {
        let mut bb = 0b1010u64 | (1u64 << 63);
        assert_eq!(pop_lsb(&mut bb), 1);
        assert_eq!(pop_lsb(&mut bb), 3);
        assert_eq!(pop_lsb(&mut bb), 63);
        assert_eq!(bb, 0);
    }

    #[test]
    fn bit_scan_forward_leaves_board_untouched() {
        let bb = square_mask(28) | square_mask(40);
        assert_eq!(bit_scan_forward(bb), 28);
        assert_eq!(bb.count_ones(), 2);
    }
}
