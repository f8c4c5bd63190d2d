//! Pawn capture tables, one per color.
//!
//! `pawn_attacks(color, sq)` is the set of squares a `color` pawn standing on
//! `sq` captures on. Read backwards it answers the attack-detection question:
//! a `by` pawn attacks `target` iff it stands on
//! `pawn_attacks(by.opposite(), target)`.

use crate::game_state::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(Color::White);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(Color::Black);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(color: Color) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut attacks = 0u64;

        match color {
            Color::White => {
                if rank < 7 {
                    if file > 0 {
                        attacks |= 1u64 << (sq + 7);
                    }
                    if file < 7 {
                        attacks |= 1u64 << (sq + 9);
                    }
                }
            }
            Color::Black => {
                if rank > 0 {
                    if file > 0 {
                        attacks |= 1u64 << (sq - 9);
                    }
                    if file < 7 {
                        attacks |= 1u64 << (sq - 7);
                    }
                }
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
