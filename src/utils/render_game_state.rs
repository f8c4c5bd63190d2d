//! Plain-text board renderer for the CLI and debugging.
//!
//! Rank 8 is printed first. White pieces are uppercase, black lowercase,
//! empty squares `.`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let sq = square_index(file, rank);
            out.push(game_state.piece_at(sq).map_or('.', Piece::to_char));

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");

    let side = match game_state.side_to_move {
        Color::White => "white",
        Color::Black => "black",
    };
    let en_passant = game_state
        .en_passant_square
        .map_or_else(|| "-".to_owned(), square_to_algebraic);
    out.push_str(&format!(
        "{side} to move, castling {}, en passant {en_passant}",
        render_castling_rights(game_state.castling_rights)
    ));

    out
}

/// `KQkq` style, `-` when no right remains.
pub fn render_castling_rights(rights: CastlingRights) -> String {
    let out: String = [
        (CASTLE_WHITE_KINGSIDE, 'K'),
        (CASTLE_WHITE_QUEENSIDE, 'Q'),
        (CASTLE_BLACK_KINGSIDE, 'k'),
        (CASTLE_BLACK_QUEENSIDE, 'q'),
    ]
    .into_iter()
    .filter(|&(bit, _)| rights & bit != 0)
    .map(|(_, c)| c)
    .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}
