use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{pack_move, MoveFlag};
use crate::utils::bit_ops::pop_lsb;

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square) -> Option<PieceKind> {
    game_state.kind_at(game_state.side_to_move.opposite(), square)
}

/// Pushes one move per target in `targets`, tagging captures with the enemy piece found there.
#[inline]
pub fn push_targets(
    game_state: &GameState,
    from: Square,
    moved_piece: PieceKind,
    mut targets: u64,
    out: &mut Vec<Move>,
) {
    let enemy_occ = game_state.occupancy(game_state.side_to_move.opposite());
    while targets != 0 {
        let to = pop_lsb(&mut targets);
        let captured = if enemy_occ & (1u64 << to) != 0 {
            enemy_piece_on(game_state, to)
        } else {
            None
        };
        out.push(pack_move(from, to, moved_piece, captured, None, MoveFlag::None));
    }
}
