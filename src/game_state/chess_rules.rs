//! Canonical chess-rule constants.
//!
//! Home squares, castling geometry and the opening layout used to initialise
//! and validate game state setup.

use crate::game_state::chess_types::*;

/// Back rank from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_KING_HOME: Square = 4;
pub const BLACK_KING_HOME: Square = 60;

pub const A1: Square = 0;
pub const H1: Square = 7;
pub const A8: Square = 56;
pub const H8: Square = 63;

#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Geometry of one castling wing for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingWing {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub must_be_empty: u64,
    /// King start, transit and destination; none may be attacked.
    pub must_be_safe: [Square; 3],
}

pub const CASTLING_WINGS: [CastlingWing; 4] = [
    CastlingWing {
        right: CASTLE_WHITE_KINGSIDE,
        king_from: WHITE_KING_HOME,
        king_to: 6,
        rook_from: H1,
        rook_to: 5,
        must_be_empty: (1 << 5) | (1 << 6),
        must_be_safe: [4, 5, 6],
    },
    CastlingWing {
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: WHITE_KING_HOME,
        king_to: 2,
        rook_from: A1,
        rook_to: 3,
        must_be_empty: (1 << 1) | (1 << 2) | (1 << 3),
        must_be_safe: [4, 3, 2],
    },
    CastlingWing {
        right: CASTLE_BLACK_KINGSIDE,
        king_from: BLACK_KING_HOME,
        king_to: 62,
        rook_from: H8,
        rook_to: 61,
        must_be_empty: (1 << 61) | (1 << 62),
        must_be_safe: [60, 61, 62],
    },
    CastlingWing {
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: BLACK_KING_HOME,
        king_to: 58,
        rook_from: A8,
        rook_to: 59,
        must_be_empty: (1 << 57) | (1 << 58) | (1 << 59),
        must_be_safe: [60, 59, 58],
    },
];

/// Both wings of one color, kingside first.
#[inline]
pub fn castling_wings(color: Color) -> &'static [CastlingWing] {
    match color {
        Color::White => &CASTLING_WINGS[0..2],
        Color::Black => &CASTLING_WINGS[2..4],
    }
}

/// Wing whose king move is `from -> to`, if any.
#[inline]
pub fn castling_wing_for_king_move(from: Square, to: Square) -> Option<&'static CastlingWing> {
    CASTLING_WINGS
        .iter()
        .find(|wing| wing.king_from == from && wing.king_to == to)
}

/// Rights lost when a move touches `square`, either leaving or landing on it.
#[inline]
pub const fn rights_lost_on_rook_square(square: Square) -> CastlingRights {
    match square {
        A1 => CASTLE_WHITE_QUEENSIDE,
        H1 => CASTLE_WHITE_KINGSIDE,
        A8 => CASTLE_BLACK_QUEENSIDE,
        H8 => CASTLE_BLACK_KINGSIDE,
        _ => CASTLE_NONE,
    }
}

#[inline]
pub const fn rights_of(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}
