//! Ray attacks for bishops, rooks and queens.
//!
//! Rays are walked in (file, rank) steps, so a ray leaving the h-file ends
//! instead of reappearing on the a-file of the next rank. Each ray includes
//! the first occupied square it meets and stops there; whether that square
//! is a capture or a block is the caller's decision.

use crate::game_state::chess_types::Square;

/// `(file_step, rank_step)`
pub type RayDirection = (i32, i32);

pub const DIAGONAL_DIRECTIONS: [RayDirection; 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
pub const ORTHOGONAL_DIRECTIONS: [RayDirection; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    DIAGONAL_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &dir| acc | trace_ray(square, dir, occupancy))
}

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ORTHOGONAL_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &dir| acc | trace_ray(square, dir, occupancy))
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Squares reached from `square` along one direction, up to and including the first blocker.
pub fn trace_ray(square: Square, (file_step, rank_step): RayDirection, occupancy: u64) -> u64 {
    let mut file = (square % 8) as i32 + file_step;
    let mut rank = (square / 8) as i32 + rank_step;
    let mut attacks = 0u64;

    while (0..8).contains(&file) && (0..8).contains(&rank) {
        let bit = 1u64 << (rank * 8 + file);
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        file += file_step;
        rank += rank_step;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_board_ray_counts_from_d4() {
        let d4 = 27u8;
        assert_eq!(bishop_attacks(d4, 0).count_ones(), 13);
        assert_eq!(rook_attacks(d4, 0).count_ones(), 14);
        assert_eq!(queen_attacks(d4, 0).count_ones(), 27);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = 0u8;
        let blocker_on_a4 = 1u64 << 24;
        let attacks = rook_attacks(a1, blocker_on_a4);

        assert_ne!(attacks & (1u64 << 24), 0);
        assert_eq!(attacks & (1u64 << 32), 0);
    }

    #[test]
    fn east_ray_from_h_file_is_empty() {
        let h4 = 31u8;
        assert_eq!(trace_ray(h4, (1, 0), 0), 0);
        assert_eq!(trace_ray(h4, (1, 1), 0), 0);
        assert_eq!(trace_ray(h4, (1, -1), 0), 0);
    }

    #[test]
    fn west_ray_from_a_file_is_empty() {
        let a5 = 32u8;
        assert_eq!(trace_ray(a5, (-1, 0), 0), 0);
        assert_eq!(trace_ray(a5, (-1, 1), 0), 0);
        assert_eq!(trace_ray(a5, (-1, -1), 0), 0);
    }

    #[test]
    fn diagonal_from_g1_stops_at_h2() {
        let g1 = 6u8;
        assert_eq!(trace_ray(g1, (1, 1), 0), 1u64 << 15);
    }

    #[test]
    fn queen_attacks_match_union() {
        let d4 = 27u8;
        let blockers = (1u64 << 43) | (1u64 << 30);
        let attacks = queen_attacks(d4, blockers);

        assert_ne!(attacks & (1u64 << 43), 0);
        assert_ne!(attacks & (1u64 << 30), 0);
        assert_eq!(attacks & (1u64 << 51), 0);
        assert_eq!(attacks & (1u64 << 31), 0);
    }
}
