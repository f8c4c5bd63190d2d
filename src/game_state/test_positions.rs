//! Board-diagram fixtures for unit tests.
//!
//! Rows are given from rank 8 down to rank 1, eight characters each, with
//! `.` for an empty square and `PNBRQK` / `pnbrqk` for pieces.

use crate::game_state::chess_types::*;

pub fn position_from_diagram(
    rows: [&str; 8],
    side_to_move: Color,
    castling_rights: CastlingRights,
) -> GameState {
    let mut game = GameState::new_empty();
    for (row_index, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), 8, "diagram row {row_index} must have eight squares");
        let rank = 7 - row_index as u8;
        for (file, c) in row.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_char(c).expect("diagram uses piece letters or '.'");
            game.place_piece(piece, square_index(file as u8, rank));
        }
    }
    game.side_to_move = side_to_move;
    game.castling_rights = castling_rights;
    game
}

pub fn kiwipete() -> GameState {
    position_from_diagram(
        [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
        Color::White,
        CASTLE_ALL,
    )
}

/// Rook-and-pawn endgame rich in en-passant pins.
pub fn perft_position_3() -> GameState {
    position_from_diagram(
        [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
            "........",
        ],
        Color::White,
        CASTLE_NONE,
    )
}

/// Promotion-heavy position with only black castling rights.
pub fn perft_position_4() -> GameState {
    position_from_diagram(
        [
            "r...k..r", "Pppp.ppp", ".b...nbN", "nP......", "BBP.P...", "q....N..", "Pp.P..PP",
            "R..Q.RK.",
        ],
        Color::White,
        CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    )
}

pub fn perft_position_5() -> GameState {
    position_from_diagram(
        [
            "rnbq.k.r", "pp.Pbppp", "..p.....", "........", "..B.....", "........", "PPP.NnPP",
            "RNBQK..R",
        ],
        Color::White,
        CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
    )
}

#[test]
fn diagram_places_pieces_on_expected_squares() {
    let game = kiwipete();
    assert_eq!(game.piece_at(0), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(game.piece_at(60), Some(Piece::new(Color::Black, PieceKind::King)));
    assert_eq!(game.piece_at(23), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    assert_eq!(game.occupancy_all().count_ones(), 32);
    assert_eq!(game.overlapping_squares(), 0);
}
