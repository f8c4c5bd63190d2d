//! Pseudo-legal pawn move generation.
//!
//! Single and double pushes, diagonal captures, en passant, and promotion.
//! Any pawn move landing on the far rank expands into four moves (queen,
//! rook, bishop, knight).

use crate::game_state::chess_rules::{pawn_start_rank, promotion_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::{pack_move, MoveFlag};
use crate::moves::pawn_moves::pawn_attacks;
use crate::utils::bit_ops::{pop_lsb, square_mask};

/// Square of the pawn taken by an en-passant capture landing on `to`.
#[inline]
pub fn en_passant_victim_square(mover: Color, to: Square) -> Square {
    match mover {
        Color::White => to - 8,
        Color::Black => to + 8,
    }
}

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let enemy_occ = game_state.occupancy(enemy);
    let empty = !game_state.occupancy_all();
    let enemy_pawns = game_state.bitboard(enemy, PieceKind::Pawn);
    let last_rank = promotion_rank(side);

    let mut pawns = game_state.bitboard(side, PieceKind::Pawn);
    while pawns != 0 {
        let from = pop_lsb(&mut pawns);

        // A pawn on its own last rank cannot exist in play; skip rather than step off the board.
        let one_step = match side {
            Color::White if rank_of(from) < 7 => Some(from + 8),
            Color::Black if rank_of(from) > 0 => Some(from - 8),
            _ => None,
        };
        let Some(to) = one_step else {
            continue;
        };

        if square_mask(to) & empty != 0 {
            push_pawn_move(out, from, to, None, last_rank);

            if rank_of(from) == pawn_start_rank(side) {
                let two_step = match side {
                    Color::White => from + 16,
                    Color::Black => from - 16,
                };
                if square_mask(two_step) & empty != 0 {
                    out.push(pack_move(from, two_step, PieceKind::Pawn, None, None, MoveFlag::None));
                }
            }
        }

        let mut captures = pawn_attacks(side, from);
        while captures != 0 {
            let to = pop_lsb(&mut captures);
            let to_mask = square_mask(to);
            if to_mask & enemy_occ != 0 {
                push_pawn_move(out, from, to, enemy_piece_on(game_state, to), last_rank);
            } else if game_state.en_passant_square == Some(to)
                && to_mask & empty != 0
                && enemy_pawns & square_mask(en_passant_victim_square(side, to)) != 0
            {
                out.push(pack_move(
                    from,
                    to,
                    PieceKind::Pawn,
                    Some(PieceKind::Pawn),
                    None,
                    MoveFlag::EnPassant,
                ));
            }
        }
    }
}

fn push_pawn_move(
    out: &mut Vec<Move>,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    last_rank: u8,
) {
    if rank_of(to) == last_rank {
        for promo in PieceKind::PROMOTIONS {
            out.push(pack_move(from, to, PieceKind::Pawn, captured, Some(promo), MoveFlag::Promotion));
        }
    } else {
        out.push(pack_move(from, to, PieceKind::Pawn, captured, None, MoveFlag::None));
    }
}
