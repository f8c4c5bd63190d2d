use crate::game_state::{chess_types::Move, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Every pseudo-legal move for the side to move. A move may still leave
/// the mover's own king attacked; see `legal_move_generator`.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    generate_pseudo_legal_moves_into(game_state, &mut moves);
    moves
}

/// Appends to `out` without clearing it.
pub fn generate_pseudo_legal_moves_into(game_state: &GameState, out: &mut Vec<Move>) {
    generate_pawn_moves(game_state, out);
    generate_knight_moves(game_state, out);
    generate_bishop_moves(game_state, out);
    generate_rook_moves(game_state, out);
    generate_queen_moves(game_state, out);
    generate_king_moves(game_state, out);
}
