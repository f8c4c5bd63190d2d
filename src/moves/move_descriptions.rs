//! Packed move encoding.
//!
//! | bits  | field           |
//! |-------|-----------------|
//! | 0-5   | from square     |
//! | 6-11  | to square       |
//! | 12-14 | moved kind code |
//! | 15-17 | captured code   |
//! | 18-20 | promotion code  |
//! | 21-22 | flag            |
//!
//! Kind codes come from `PieceKind::code`; `NO_PIECE_CODE` marks an empty
//! captured or promotion field. Nothing here validates a move.

use crate::game_state::chess_types::{Move, PieceKind, Square, NO_PIECE_CODE};

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const MOVED_PIECE_SHIFT: u32 = 12;
const CAPTURED_PIECE_SHIFT: u32 = 15;
const PROMOTION_PIECE_SHIFT: u32 = 18;
const FLAG_SHIFT: u32 = 21;

const SQUARE_MASK: u32 = 0x3F;
const PIECE_MASK: u32 = 0x7;
const FLAG_MASK: u32 = 0x3;

/// Special-move tag carried by every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    None,
    Promotion,
    EnPassant,
    Castle,
}

impl MoveFlag {
    #[inline]
    const fn code(self) -> u32 {
        match self {
            MoveFlag::None => 0,
            MoveFlag::Promotion => 1,
            MoveFlag::EnPassant => 2,
            MoveFlag::Castle => 3,
        }
    }

    #[inline]
    const fn from_code(code: u32) -> MoveFlag {
        match code & FLAG_MASK {
            1 => MoveFlag::Promotion,
            2 => MoveFlag::EnPassant,
            3 => MoveFlag::Castle,
            _ => MoveFlag::None,
        }
    }
}

#[inline]
pub fn pack_move(
    from: Square,
    to: Square,
    moved_piece: PieceKind,
    captured_piece: Option<PieceKind>,
    promotion_piece: Option<PieceKind>,
    flag: MoveFlag,
) -> Move {
    let mut out = 0u32;
    out |= (from as u32 & SQUARE_MASK) << FROM_SHIFT;
    out |= (to as u32 & SQUARE_MASK) << TO_SHIFT;
    out |= moved_piece.code() << MOVED_PIECE_SHIFT;
    out |= captured_piece.map_or(NO_PIECE_CODE, PieceKind::code) << CAPTURED_PIECE_SHIFT;
    out |= promotion_piece.map_or(NO_PIECE_CODE, PieceKind::code) << PROMOTION_PIECE_SHIFT;
    out |= flag.code() << FLAG_SHIFT;
    out
}

#[inline]
pub fn move_from(mv: Move) -> Square {
    ((mv >> FROM_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_to(mv: Move) -> Square {
    ((mv >> TO_SHIFT) & SQUARE_MASK) as Square
}

#[inline]
pub fn move_moved_piece_code(mv: Move) -> u32 {
    (mv >> MOVED_PIECE_SHIFT) & PIECE_MASK
}

#[inline]
pub fn move_captured_piece_code(mv: Move) -> u32 {
    (mv >> CAPTURED_PIECE_SHIFT) & PIECE_MASK
}

#[inline]
pub fn move_promotion_piece_code(mv: Move) -> u32 {
    (mv >> PROMOTION_PIECE_SHIFT) & PIECE_MASK
}

/// `None` only for a corrupt move.
#[inline]
pub fn move_moved_piece(mv: Move) -> Option<PieceKind> {
    PieceKind::from_code(move_moved_piece_code(mv))
}

#[inline]
pub fn move_captured_piece(mv: Move) -> Option<PieceKind> {
    PieceKind::from_code(move_captured_piece_code(mv))
}

#[inline]
pub fn move_promotion_piece(mv: Move) -> Option<PieceKind> {
    PieceKind::from_code(move_promotion_piece_code(mv))
}

#[inline]
pub fn move_flag(mv: Move) -> MoveFlag {
    MoveFlag::from_code(mv >> FLAG_SHIFT)
}

#[inline]
pub fn is_capture(mv: Move) -> bool {
    move_captured_piece_code(mv) != NO_PIECE_CODE
}

#[inline]
pub fn is_promotion(mv: Move) -> bool {
    move_promotion_piece_code(mv) != NO_PIECE_CODE
}
