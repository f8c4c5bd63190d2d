//! Full legal move generation pipeline.
//!
//! Pseudo-legal moves are filtered by make / probe / undo: apply the move,
//! reject it if the mover's king is missing or attacked, then undo no matter
//! what. Everything that needs legal moves (UI piece selection, game status,
//! notation lookup) goes through `is_legal_after_filter`.

use crate::errors::GameResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::move_descriptions::move_from;

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

/// Applies `mv`, probes the mover's king, and undoes the move again.
pub fn is_legal_after_filter(game_state: &mut GameState, mv: Move) -> GameResult<bool> {
    let mover = game_state.side_to_move;
    game_state.make_move(mv)?;
    let legal = match game_state.king_square(mover) {
        Some(king_sq) => !is_square_attacked(game_state, king_sq, mover.opposite()),
        None => false,
    };
    game_state.unmake_move()?;
    Ok(legal)
}

pub fn generate_legal_moves(game_state: &mut GameState) -> GameResult<Vec<Move>> {
    let pseudo = generate_pseudo_legal_moves(game_state);
    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        if is_legal_after_filter(game_state, mv)? {
            legal.push(mv);
        }
    }
    Ok(legal)
}

/// Legal moves of the piece on `square`; empty when the square holds no piece
/// of the side to move.
pub fn legal_moves_from(game_state: &mut GameState, square: Square) -> GameResult<Vec<Move>> {
    let mut moves = generate_legal_moves(game_state)?;
    moves.retain(|&mv| move_from(mv) == square);
    Ok(moves)
}

pub fn game_status(game_state: &mut GameState) -> GameResult<GameStatus> {
    if has_any_legal_move(game_state)? {
        return Ok(GameStatus::Ongoing);
    }

    let side = game_state.side_to_move;
    if is_king_in_check(game_state, side) {
        Ok(GameStatus::Checkmate {
            winner: side.opposite(),
        })
    } else {
        Ok(GameStatus::Stalemate)
    }
}

fn has_any_legal_move(game_state: &mut GameState) -> GameResult<bool> {
    for mv in generate_pseudo_legal_moves(game_state) {
        if is_legal_after_filter(game_state, mv)? {
            return Ok(true);
        }
    }
    Ok(false)
}
