//! Square conversions between indices and coordinates such as `e4`.

use crate::errors::{GameError, GameResult};
use crate::game_state::chess_types::{file_of, rank_of, square_index, Square};

/// Convert a coordinate (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> GameResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(GameError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(GameError::InvalidSquare(square.to_owned()));
    }

    Ok(square_index(file - b'a', rank - b'1'))
}

/// Convert a square index (`0..=63`) to a coordinate (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + (rank_of(square) & 7));
    format!("{file_char}{rank_char}")
}
