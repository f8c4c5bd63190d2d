//! In-place move application and exact reversal.
//!
//! `make_move` trusts the packed move: the captured field says what to remove
//! and the promotion field says what to place. It only checks that the move
//! can be decoded and that the moved piece really stands on the origin square,
//! and it does so before touching the board.

use crate::errors::{GameError, GameResult};
use crate::game_state::chess_rules::{
    castling_wing_for_king_move, rights_lost_on_rook_square, rights_of, CastlingWing,
};
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};
use crate::move_generation::legal_moves_pawn::en_passant_victim_square;
use crate::moves::move_descriptions::{
    move_captured_piece, move_flag, move_from, move_moved_piece, move_promotion_piece, move_to,
    MoveFlag,
};
use crate::utils::bit_ops::square_mask;

impl GameState {
    /// Applies a pseudo-legal move for the side to move and pushes its undo record.
    pub fn make_move(&mut self, mv: Move) -> GameResult<()> {
        let from = move_from(mv);
        let to = move_to(mv);
        let mover = self.side_to_move;
        let enemy = mover.opposite();

        let moved = move_moved_piece(mv).ok_or(GameError::CorruptMove {
            mv,
            reason: "moved piece code does not name a piece",
        })?;
        if self.bitboard(mover, moved) & square_mask(from) == 0 {
            return Err(GameError::CorruptMove {
                mv,
                reason: "moved piece is not on the origin square",
            });
        }
        let castle_wing = castle_wing_of(mv, moved)?;

        let captured = move_captured_piece(mv);
        let captured_square = if self.is_en_passant_capture(mv, moved, captured) {
            en_passant_victim_square(mover, to)
        } else {
            to
        };

        self.undo_stack.push(UndoState {
            mv,
            captured_piece: captured,
            captured_square,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
        });

        if let Some(victim) = captured {
            *self.bitboard_mut(enemy, victim) &= !square_mask(captured_square);
        }

        *self.bitboard_mut(mover, moved) &= !square_mask(from);
        let landed = move_promotion_piece(mv).unwrap_or(moved);
        *self.bitboard_mut(mover, landed) |= square_mask(to);

        if let Some(wing) = castle_wing {
            self.move_rook(mover, wing.rook_from, wing.rook_to);
        }

        self.en_passant_square = if moved == PieceKind::Pawn && from.abs_diff(to) == 16 {
            Some((from + to) / 2)
        } else {
            None
        };

        self.update_castling_rights(mover, from, to, moved);
        self.side_to_move = enemy;
        Ok(())
    }

    /// Reverts the most recent `make_move` and returns the move it applied.
    pub fn unmake_move(&mut self) -> GameResult<Move> {
        let undo = *self.undo_stack.last().ok_or(GameError::EmptyHistory)?;
        let mv = undo.mv;
        let from = move_from(mv);
        let to = move_to(mv);
        let mover = self.side_to_move.opposite();

        let moved = move_moved_piece(mv).ok_or(GameError::CorruptMove {
            mv,
            reason: "moved piece code does not name a piece",
        })?;
        let castle_wing = castle_wing_of(mv, moved)?;
        self.undo_stack.pop();

        let landed = move_promotion_piece(mv).unwrap_or(moved);
        *self.bitboard_mut(mover, landed) &= !square_mask(to);
        *self.bitboard_mut(mover, moved) |= square_mask(from);

        if let Some(wing) = castle_wing {
            self.move_rook(mover, wing.rook_to, wing.rook_from);
        }

        if let Some(victim) = undo.captured_piece {
            *self.bitboard_mut(mover.opposite(), victim) |= square_mask(undo.captured_square);
        }

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.side_to_move = mover;
        Ok(mv)
    }

    /// En passant is recognised by its flag, or by a pawn taking a pawn on the
    /// empty en-passant target square.
    fn is_en_passant_capture(&self, mv: Move, moved: PieceKind, captured: Option<PieceKind>) -> bool {
        if move_flag(mv) == MoveFlag::EnPassant {
            return true;
        }
        let to = move_to(mv);
        moved == PieceKind::Pawn
            && captured == Some(PieceKind::Pawn)
            && self.en_passant_square == Some(to)
            && self.occupancy_all() & square_mask(to) == 0
    }

    fn move_rook(&mut self, color: Color, from: Square, to: Square) {
        let rooks = self.bitboard_mut(color, PieceKind::Rook);
        *rooks &= !square_mask(from);
        *rooks |= square_mask(to);
    }

    fn update_castling_rights(&mut self, mover: Color, from: Square, to: Square, moved: PieceKind) {
        if moved == PieceKind::King {
            self.castling_rights &= !rights_of(mover);
        }
        // Leaving a rook home square, or landing on one (a capture), costs that wing.
        self.castling_rights &= !rights_lost_on_rook_square(from);
        self.castling_rights &= !rights_lost_on_rook_square(to);
    }
}

fn castle_wing_of(mv: Move, moved: PieceKind) -> GameResult<Option<&'static CastlingWing>> {
    if move_flag(mv) != MoveFlag::Castle {
        return Ok(None);
    }
    if moved != PieceKind::King {
        return Err(GameError::CorruptMove {
            mv,
            reason: "castle flag on a non-king move",
        });
    }
    castling_wing_for_king_move(move_from(mv), move_to(mv))
        .map(Some)
        .ok_or(GameError::CorruptMove {
            mv,
            reason: "castle flag on a king move that is not a castling move",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::test_positions::{kiwipete, position_from_diagram};
    use crate::move_generation::move_generator::generate_pseudo_legal_moves;
    use crate::moves::move_descriptions::pack_move;

    fn round_trip_all(game: &mut GameState) {
        let before = game.clone();
        for mv in generate_pseudo_legal_moves(game) {
            game.make_move(mv).expect("generated move applies");
            assert_eq!(game.overlapping_squares(), 0, "overlap after {mv:#x}");
            assert_eq!(game.unmake_move().expect("undo"), mv);
            assert_eq!(*game, before, "round trip of {mv:#x}");
        }
    }

    #[test]
    fn every_start_move_round_trips() {
        round_trip_all(&mut GameState::new_game());
    }

    #[test]
    fn every_kiwipete_move_round_trips() {
        round_trip_all(&mut kiwipete());
    }

    #[test]
    fn double_push_sets_en_passant_square_and_flips_side() {
        let mut game = GameState::new_game();
        game.make_move(pack_move(12, 28, PieceKind::Pawn, None, None, MoveFlag::None))
            .expect("e2e4");
        assert_eq!(game.en_passant_square, Some(20));
        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(game.history_len(), 1);

        game.make_move(pack_move(62, 45, PieceKind::Knight, None, None, MoveFlag::None))
            .expect("g8f6");
        assert_eq!(game.en_passant_square, None);
    }

    #[test]
    fn castling_relocates_rook_and_undo_restores_it() {
        let mut game = kiwipete();
        let before = game.clone();
        game.make_move(pack_move(4, 6, PieceKind::King, None, None, MoveFlag::Castle))
            .expect("O-O");
        assert_eq!(game.piece_at(6), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(game.piece_at(5), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(game.piece_at(7), None);
        assert_eq!(game.castling_rights, CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);

        game.unmake_move().expect("undo O-O");
        assert_eq!(game, before);
    }

    #[test]
    fn queenside_castle_moves_a_rook_to_d_file() {
        let mut game = position_from_diagram(
            [
                "r...k...", "........", "........", "........", "........", "........", "........",
                "....K...",
            ],
            Color::Black,
            CASTLE_BLACK_QUEENSIDE,
        );
        game.make_move(pack_move(60, 58, PieceKind::King, None, None, MoveFlag::Castle))
            .expect("O-O-O");
        assert_eq!(game.piece_at(59), Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(game.piece_at(56), None);
    }

    #[test]
    fn capturing_rook_on_a1_strips_white_queenside() {
        let mut game = position_from_diagram(
            [
                "....k...", "........", "........", "........", "........", "........", ".b......",
                "R...K..R",
            ],
            Color::Black,
            CASTLE_ALL,
        );
        game.make_move(pack_move(
            9,
            0,
            PieceKind::Bishop,
            Some(PieceKind::Rook),
            None,
            MoveFlag::None,
        ))
        .expect("bxa1");
        assert_eq!(
            game.castling_rights,
            CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
        game.unmake_move().expect("undo");
        assert_eq!(game.castling_rights, CASTLE_ALL);
        assert_eq!(game.piece_at(0), Some(Piece::new(Color::White, PieceKind::Rook)));
    }

    #[test]
    fn rook_leaving_home_strips_only_its_wing() {
        let mut game = position_from_diagram(
            [
                "....k...", "........", "........", "........", "........", "........", "........",
                "R...K..R",
            ],
            Color::White,
            CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        );
        game.make_move(pack_move(7, 15, PieceKind::Rook, None, None, MoveFlag::None))
            .expect("Rh2");
        assert_eq!(game.castling_rights, CASTLE_WHITE_QUEENSIDE);
    }

    #[test]
    fn en_passant_removes_pawn_behind_destination() {
        let mut game = position_from_diagram(
            [
                "....k...", "........", "........", "...pP...", "........", "........", "........",
                "....K...",
            ],
            Color::White,
            CASTLE_NONE,
        );
        game.en_passant_square = Some(43);
        let before = game.clone();

        let ep = pack_move(36, 43, PieceKind::Pawn, Some(PieceKind::Pawn), None, MoveFlag::EnPassant);
        game.make_move(ep).expect("exd6");
        assert_eq!(game.piece_at(35), None);
        assert_eq!(game.piece_at(43), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(game.undo_stack[0].captured_square, 35);

        game.unmake_move().expect("undo");
        assert_eq!(game, before);
    }

    #[test]
    fn unflagged_en_passant_is_still_recognised() {
        let mut game = position_from_diagram(
            [
                "....k...", "........", "........", "...pP...", "........", "........", "........",
                "....K...",
            ],
            Color::White,
            CASTLE_NONE,
        );
        game.en_passant_square = Some(43);
        game.make_move(pack_move(36, 43, PieceKind::Pawn, Some(PieceKind::Pawn), None, MoveFlag::None))
            .expect("exd6");
        assert_eq!(game.piece_at(35), None);
        assert_eq!(game.overlapping_squares(), 0);
    }

    #[test]
    fn promotion_places_chosen_piece_and_undo_restores_pawn() {
        let mut game = position_from_diagram(
            [
                "......n.", ".......P", "........", "........", "........", "........", "........",
                "....K..k",
            ],
            Color::White,
            CASTLE_NONE,
        );
        let before = game.clone();
        game.make_move(pack_move(
            55,
            62,
            PieceKind::Pawn,
            Some(PieceKind::Knight),
            Some(PieceKind::Knight),
            MoveFlag::Promotion,
        ))
        .expect("hxg8=N");
        assert_eq!(game.piece_at(62), Some(Piece::new(Color::White, PieceKind::Knight)));
        assert_eq!(game.bitboard(Color::White, PieceKind::Pawn), 0);
        assert_eq!(game.bitboard(Color::Black, PieceKind::Knight), 0);

        game.unmake_move().expect("undo");
        assert_eq!(game, before);
    }

    #[test]
    fn undo_on_empty_history_is_an_error() {
        let mut game = GameState::new_game();
        assert_eq!(game.unmake_move(), Err(GameError::EmptyHistory));
    }

    #[test]
    fn corrupt_moves_leave_state_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();

        // Moved-piece field of zero.
        assert!(matches!(
            game.make_move(12 | (28 << 6)),
            Err(GameError::CorruptMove { .. })
        ));
        // Knight claimed on e2, where a pawn stands.
        assert!(matches!(
            game.make_move(pack_move(12, 28, PieceKind::Knight, None, None, MoveFlag::None)),
            Err(GameError::CorruptMove { .. })
        ));
        // Castle flag on a king move that is not castling.
        assert!(matches!(
            game.make_move(pack_move(4, 12, PieceKind::King, None, None, MoveFlag::Castle)),
            Err(GameError::CorruptMove { .. })
        ));
        assert_eq!(game, before);
    }
}
