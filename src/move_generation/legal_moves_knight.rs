//! Pseudo-legal knight move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::knight_moves::knight_attacks;
use crate::utils::bit_ops::pop_lsb;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy(side);

    let mut knights = game_state.bitboard(side, PieceKind::Knight);
    while knights != 0 {
        let from = pop_lsb(&mut knights);
        push_targets(game_state, from, PieceKind::Knight, knight_attacks(from) & !own_occ, out);
    }
}
