//! Pseudo-legal king moves and castling.
//!
//! Castling is encoded as a king move of two files with `MoveFlag::Castle`;
//! `make_move` relocates the rook. Gating: the right for that wing, king and
//! rook on their home squares, every square strictly between them empty, and
//! the king's start, transit and destination squares unattacked.

use crate::game_state::chess_rules::castling_wings;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{pack_move, MoveFlag};
use crate::utils::bit_ops::{bit_scan_forward, square_mask};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.occupancy(side);
    let king_bb = game_state.bitboard(side, PieceKind::King);
    if king_bb == 0 {
        return;
    }

    let from = bit_scan_forward(king_bb);
    push_targets(game_state, from, PieceKind::King, king_attacks(from) & !own_occ, out);

    generate_castling_moves(game_state, out, from);
}

fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>, king_from: Square) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let occupancy = game_state.occupancy_all();
    let rooks = game_state.bitboard(side, PieceKind::Rook);

    for wing in castling_wings(side) {
        if game_state.castling_rights & wing.right == 0
            || king_from != wing.king_from
            || rooks & square_mask(wing.rook_from) == 0
            || occupancy & wing.must_be_empty != 0
        {
            continue;
        }

        if wing
            .must_be_safe
            .iter()
            .any(|&sq| is_square_attacked(game_state, sq, enemy))
        {
            continue;
        }

        out.push(pack_move(
            wing.king_from,
            wing.king_to,
            PieceKind::King,
            None,
            None,
            MoveFlag::Castle,
        ));
    }
}
