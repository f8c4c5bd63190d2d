//! Coordinate move text (`e2e4`, `e7e8q`).
//!
//! Text is never decoded into a move on its own. `find_legal_move` matches it
//! against the legal moves of the position, so flags and captured pieces
//! always come from the generator.

use crate::errors::{GameError, GameResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::{move_from, move_promotion_piece, move_to};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = square_to_algebraic(move_from(mv));
    out.push_str(&square_to_algebraic(move_to(mv)));
    if let Some(promo) = move_promotion_piece(mv) {
        out.push(promo.to_char());
    }
    out
}

/// Resolves coordinate text to one legal move. Without a promotion suffix a
/// promoting pawn move resolves to the queen promotion.
pub fn find_legal_move(game_state: &mut GameState, text: &str) -> GameResult<Move> {
    let text = text.trim();
    if text.len() != 4 && text.len() != 5 {
        return Err(GameError::NoSuchMove(text.to_owned()));
    }
    let from = algebraic_to_square(text.get(0..2).unwrap_or_default())?;
    let to = algebraic_to_square(text.get(2..4).unwrap_or_default())?;
    let promotion = match text.get(4..) {
        None | Some("") => None,
        Some(suffix) => Some(
            suffix
                .chars()
                .next()
                .and_then(PieceKind::from_char)
                .filter(|kind| PieceKind::PROMOTIONS.contains(kind))
                .ok_or_else(|| GameError::NoSuchMove(text.to_owned()))?,
        ),
    };

    let candidates: Vec<Move> = generate_legal_moves(game_state)?
        .into_iter()
        .filter(|&mv| move_from(mv) == from && move_to(mv) == to)
        .collect();

    let wanted = match promotion {
        Some(kind) => Some(kind),
        None if candidates.iter().any(|&mv| move_promotion_piece(mv).is_some()) => {
            Some(PieceKind::Queen)
        }
        None => None,
    };

    candidates
        .into_iter()
        .find(|&mv| move_promotion_piece(mv) == wanted)
        .ok_or_else(|| GameError::NoSuchMove(text.to_owned()))
}
