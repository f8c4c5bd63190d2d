//! Small value types shared by the board, move encoding and move generation.
//!
//! Squares are plain indices (`0 == a1`, `7 == h1`, `63 == h8`). Piece kinds
//! and colors are kept apart so bitboards can be addressed by
//! `(color, kind)` without branching.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Board square index (`0..=63`).
pub type Square = u8;

/// Packed move; see `moves::move_descriptions` for the bit layout.
pub type Move = u32;

#[inline]
pub const fn square_index(file: u8, rank: u8) -> Square {
    (rank << 3) | file
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square & 7
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square >> 3
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Code reserved for "no piece" in packed moves and piece codes.
pub const NO_PIECE_CODE: u32 = 0;

/// Piece kind (color is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion choices, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Bitboard slot within one color (`0..=5`).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Three-bit code used in packed moves; never `NO_PIECE_CODE`.
    #[inline]
    pub const fn code(self) -> u32 {
        self.index() as u32 + 1
    }

    #[inline]
    pub const fn from_code(code: u32) -> Option<PieceKind> {
        match code {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub const fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece. Empty squares are `Option<Piece>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

const BLACK_BIT: u32 = 8;

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Index into `GameState::pieces`.
    #[inline]
    pub const fn bitboard_index(self) -> usize {
        self.color.index() * 6 + self.kind.index()
    }

    /// Kind code in the low three bits, bit 3 set for black.
    #[inline]
    pub const fn code(self) -> u32 {
        match self.color {
            Color::White => self.kind.code(),
            Color::Black => self.kind.code() | BLACK_BIT,
        }
    }

    #[inline]
    pub const fn from_code(code: u32) -> Option<Piece> {
        if code > 0xF {
            return None;
        }
        let color = if code & BLACK_BIT != 0 {
            Color::Black
        } else {
            Color::White
        };
        match PieceKind::from_code(code & 7) {
            Some(kind) => Some(Piece { color, kind }),
            None => None,
        }
    }

    /// Uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_NONE: CastlingRights = 0;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_matches_file_and_rank() {
        assert_eq!(square_index(0, 0), 0);
        assert_eq!(square_index(4, 3), 28);
        assert_eq!(file_of(28), 4);
        assert_eq!(rank_of(28), 3);
        assert_eq!(square_index(7, 7), 63);
    }

    #[test]
    fn piece_codes_are_distinct_and_nonzero() {
        let mut seen = Vec::new();
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                assert_ne!(piece.code(), NO_PIECE_CODE);
                assert!(!seen.contains(&piece.code()));
                seen.push(piece.code());
                assert_eq!(Piece::from_code(piece.code()), Some(piece));
            }
        }
    }

    #[test]
    fn empty_and_garbage_codes_decode_to_none() {
        assert_eq!(Piece::from_code(NO_PIECE_CODE), None);
        assert_eq!(Piece::from_code(7), None);
        assert_eq!(Piece::from_code(8), None);
        assert_eq!(Piece::from_code(0x1F), None);
        assert_eq!(PieceKind::from_code(7), None);
    }

    #[test]
    fn bitboard_indices_cover_twelve_slots() {
        let mut indices: Vec<usize> = Color::ALL
            .iter()
            .flat_map(|&c| PieceKind::ALL.iter().map(move |&k| Piece::new(c, k).bitboard_index()))
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn piece_chars_round_trip() {
        assert_eq!(Piece::from_char('K'), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(Piece::from_char('n'), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen).to_char(), 'q');
        assert_eq!(Piece::from_char('x'), None);
    }
}
