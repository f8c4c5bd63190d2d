//! Core incremental board state representation.
//!
//! `GameState` is the one mutable entity of the rules core. It stores the
//! twelve piece bitboards, turn and castling/en-passant flags, and the undo
//! stack used by make/unmake. Move application lives in
//! `move_generation::legal_move_apply`.

use crate::game_state::chess_rules::{pawn_start_rank, BACK_RANK};
use crate::game_state::chess_types::*;
use crate::utils::bit_ops::{bit_scan_forward, square_mask};

/// Incremental game state optimized for fast move making/unmaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Indexed by `Piece::bitboard_index`, i.e. `color * 6 + kind`.
    pub pieces: [u64; 12],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    /// One entry per applied, not yet undone move.
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [0; 12],
            side_to_move: Color::White,
            castling_rights: CASTLE_NONE,
            en_passant_square: None,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, white to move, no rights. Used to hand-build positions.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        let mut game = Self::default();
        game.set_start_position();
        game
    }

    /// Standard 32-piece opening layout with all flags and history reset.
    pub fn set_start_position(&mut self) {
        self.pieces = [0; 12];
        for color in Color::ALL {
            let back_rank = match color {
                Color::White => 0,
                Color::Black => 7,
            };
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                self.place_piece(
                    Piece::new(color, kind),
                    square_index(file as u8, back_rank),
                );
                self.place_piece(
                    Piece::new(color, PieceKind::Pawn),
                    square_index(file as u8, pawn_start_rank(color)),
                );
            }
        }

        self.side_to_move = Color::White;
        self.castling_rights = CASTLE_ALL;
        self.en_passant_square = None;
        self.undo_stack.clear();
    }

    #[inline(always)]
    pub fn bitboard(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[Piece::new(color, kind).bitboard_index()]
    }

    #[inline(always)]
    pub fn bitboard_mut(&mut self, color: Color, kind: PieceKind) -> &mut u64 {
        &mut self.pieces[Piece::new(color, kind).bitboard_index()]
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> u64 {
        let base = color.index() * 6;
        self.pieces[base..base + 6].iter().fold(0u64, |acc, &bb| acc | bb)
    }

    #[inline]
    pub fn occupancy_all(&self) -> u64 {
        self.pieces.iter().fold(0u64, |acc, &bb| acc | bb)
    }

    /// Kind of the `color` piece on `square`, if any.
    #[inline]
    pub fn kind_at(&self, color: Color, square: Square) -> Option<PieceKind> {
        let mask = square_mask(square);
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.bitboard(color, kind) & mask != 0)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        Color::ALL.into_iter().find_map(|color| {
            self.kind_at(color, square)
                .map(|kind| Piece::new(color, kind))
        })
    }

    #[inline]
    pub fn is_occupied(&self, square: Square, color: Color) -> bool {
        self.occupancy(color) & square_mask(square) != 0
    }

    /// `None` when `color` has no king, which a well-formed position never allows.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.bitboard(color, PieceKind::King);
        if kings == 0 {
            None
        } else {
            Some(bit_scan_forward(kings))
        }
    }

    /// Puts `piece` on `square`, replacing whatever stood there.
    pub fn place_piece(&mut self, piece: Piece, square: Square) {
        self.clear_square(square);
        self.pieces[piece.bitboard_index()] |= square_mask(square);
    }

    pub fn clear_square(&mut self, square: Square) {
        let keep = !square_mask(square);
        for bb in self.pieces.iter_mut() {
            *bb &= keep;
        }
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.undo_stack.last().map(|undo| undo.mv)
    }

    /// Squares claimed by more than one bitboard; zero when the partition holds.
    pub fn overlapping_squares(&self) -> u64 {
        let mut seen = 0u64;
        let mut overlap = 0u64;
        for &bb in &self.pieces {
            overlap |= seen & bb;
            seen |= bb;
        }
        overlap
    }
}
