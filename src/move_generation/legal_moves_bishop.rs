//! Pseudo-legal bishop move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::sliding_moves::bishop_attacks;
use crate::utils::bit_ops::pop_lsb;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy(side);
    let occupancy = game_state.occupancy_all();

    let mut bishops = game_state.bitboard(side, PieceKind::Bishop);
    while bishops != 0 {
        let from = pop_lsb(&mut bishops);
        let targets = bishop_attacks(from, occupancy) & !own_occ;
        push_targets(game_state, from, PieceKind::Bishop, targets, out);
    }
}
