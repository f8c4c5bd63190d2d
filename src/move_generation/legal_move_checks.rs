//! Attack and check detection.
//!
//! `is_square_attacked` ignores whose turn it is: it asks whether a piece of
//! `attacker_color` could capture on `square` right now. Castling safety and
//! the post-move legality probe are both built on it.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_moves::{bishop_attacks, rook_attacks};

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.king_square(color)
}

/// False when `color` has no king on the board.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let attacker_pawns = game_state.bitboard(attacker_color, PieceKind::Pawn);
    if pawn_attacks(attacker_color.opposite(), square) & attacker_pawns != 0 {
        return true;
    }

    let attacker_knights = game_state.bitboard(attacker_color, PieceKind::Knight);
    if knight_attacks(square) & attacker_knights != 0 {
        return true;
    }

    let attacker_kings = game_state.bitboard(attacker_color, PieceKind::King);
    if king_attacks(square) & attacker_kings != 0 {
        return true;
    }

    let occupancy = game_state.occupancy_all();
    let queens = game_state.bitboard(attacker_color, PieceKind::Queen);

    let bishops_queens = game_state.bitboard(attacker_color, PieceKind::Bishop) | queens;
    if bishop_attacks(square, occupancy) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = game_state.bitboard(attacker_color, PieceKind::Rook) | queens;
    if rook_attacks(square, occupancy) & rooks_queens != 0 {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::test_positions::position_from_diagram;

    fn board(rows: [&str; 8]) -> GameState {
        position_from_diagram(rows, Color::White, CASTLE_NONE)
    }

    #[test]
    fn start_position_third_rank_is_covered_by_white() {
        let game = GameState::new_game();
        for sq in 16..24 {
            assert!(is_square_attacked(&game, sq, Color::White), "square {sq}");
            assert!(!is_square_attacked(&game, sq, Color::Black), "square {sq}");
        }
        assert!(!is_square_attacked(&game, 28, Color::White));
    }

    #[test]
    fn pawn_attacks_respect_direction_and_file_edges() {
        let game = board([
            "........", "........", "........", "........", "........", "........", "P......P",
            "........",
        ]);
        // a2 covers b3 only; h2 covers g3 only.
        assert!(is_square_attacked(&game, 17, Color::White));
        assert!(is_square_attacked(&game, 22, Color::White));
        assert!(!is_square_attacked(&game, 23, Color::White));
        assert!(!is_square_attacked(&game, 16, Color::White));
        // Nothing wraps onto the far side of the board.
        assert!(!is_square_attacked(&game, 24, Color::White));
        assert!(!is_square_attacked(&game, 1, Color::White));
    }

    #[test]
    fn black_pawn_attacks_downward() {
        let game = board([
            "........", "........", "........", "....p...", "........", "........", "........",
            "........",
        ]);
        // e5 attacks d4 and f4.
        assert!(is_square_attacked(&game, 27, Color::Black));
        assert!(is_square_attacked(&game, 29, Color::Black));
        assert!(!is_square_attacked(&game, 43, Color::Black));
    }

    #[test]
    fn slider_is_blocked_by_any_piece() {
        let game = board([
            "r.......", "........", "........", "........", "p.......", "........", "........",
            "........",
        ]);
        // Rook a8, own pawn a4 blocks the file below it.
        assert!(is_square_attacked(&game, 32, Color::Black));
        assert!(is_square_attacked(&game, 24, Color::Black));
        assert!(!is_square_attacked(&game, 16, Color::Black));
        assert!(is_square_attacked(&game, 63, Color::Black));
    }

    #[test]
    fn rook_on_h_file_does_not_wrap_east() {
        let game = board([
            "........", "........", "........", "........", ".......R", "........", "........",
            "........",
        ]);
        // h4 rook; a5 is index 32, directly "after" h4 in index order.
        assert!(!is_square_attacked(&game, 32, Color::White));
        assert!(is_square_attacked(&game, 24, Color::White));
    }

    #[test]
    fn bishop_and_queen_cover_diagonals() {
        let game = board([
            "........", "........", "........", "........", "...b....", "........", "........",
            "q.......",
        ]);
        // Bishop d4 reaches h8 and b2; queen a1 sweeps the first rank.
        assert!(is_square_attacked(&game, 63, Color::Black));
        assert!(is_square_attacked(&game, 9, Color::Black));
        assert!(is_square_attacked(&game, 7, Color::Black));
    }

    #[test]
    fn knight_and_king_attacks() {
        let game = board([
            "........", "........", "........", "........", "........", "........", "........",
            "N......k",
        ]);
        assert!(is_square_attacked(&game, 17, Color::White));
        assert!(is_square_attacked(&game, 10, Color::White));
        assert!(!is_square_attacked(&game, 9, Color::White));
        assert!(is_square_attacked(&game, 14, Color::Black));
        assert!(is_square_attacked(&game, 6, Color::Black));
        assert!(!is_square_attacked(&game, 8, Color::Black));
    }

    #[test]
    fn check_matches_king_square_attack() {
        let game = board([
            "....k...", "........", "........", "........", "........", "........", "........",
            "....R..K",
        ]);
        assert!(is_king_in_check(&game, Color::Black));
        assert!(!is_king_in_check(&game, Color::White));
        let black_king = king_square(&game, Color::Black).expect("black king present");
        assert!(is_square_attacked(&game, black_king, Color::White));
    }
}
