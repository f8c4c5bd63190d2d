//! King step table.
//!
//! Built once at compile time and shared read-only by move generation and
//! attack detection.

use crate::game_state::chess_types::Square;
use crate::moves::step_tables::{build_step_table, StepOffsets};

const KING_OFFSETS: StepOffsets = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KING_ATTACKS: [u64; 64] = build_step_table(&KING_OFFSETS);

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}
