//! Pseudo-legal rook move generation.
//!
//! Each ray stops at the first occupied square; an enemy piece there becomes
//! a capture, a friendly one is dropped.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::sliding_moves::rook_attacks;
use crate::utils::bit_ops::pop_lsb;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy(side);
    let occupancy = game_state.occupancy_all();

    let mut rooks = game_state.bitboard(side, PieceKind::Rook);
    while rooks != 0 {
        let from = pop_lsb(&mut rooks);
        let targets = rook_attacks(from, occupancy) & !own_occ;
        push_targets(game_state, from, PieceKind::Rook, targets, out);
    }
}
