use crate::game_state::chess_types::Square;
use crate::moves::step_tables::{build_step_table, StepOffsets};

const KNIGHT_OFFSETS: StepOffsets = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KNIGHT_ATTACKS: [u64; 64] = build_step_table(&KNIGHT_OFFSETS);

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[cfg(test)]
mod tests {
    use super::{knight_attacks, KNIGHT_ATTACKS};

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!(KNIGHT_ATTACKS[d4 as usize].count_ones(), 8);
    }

    #[test]
    fn knight_on_h_file_does_not_wrap_to_a_file() {
        let h1 = 7u8;
        let attacks = knight_attacks(h1);
        assert_eq!(attacks, (1u64 << 13) | (1u64 << 22));
    }

    #[test]
    fn corner_knight_has_two_targets() {
        assert_eq!(knight_attacks(0).count_ones(), 2);
        assert_eq!(knight_attacks(63).count_ones(), 2);
    }
}
